//! # Agenda
//!
//! A library for managing a personal calendar of time-bounded events.
//!
//! This crate provides functionality to:
//! - Model events as validated, immutable value objects
//! - Detect pairwise time overlaps and build the full conflict graph
//! - List events chronologically or within an inclusive time window
//! - Persist the collection as human-readable JSON behind a storage port

// Public API modules
pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod i18n;
pub mod port;
pub mod service;
pub mod ui;

// Re-export commonly used types
pub use adapter::{InMemoryStore, JsonFileStore};
pub use domain::{AgendaError, ConflictGraph, Event, EventRecord, build_conflict_graph};
pub use port::EventStore;
pub use service::{AddOutcome, EventService};
