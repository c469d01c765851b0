//! Core domain types for the agenda
//!
//! Everything in this module is pure: no I/O, no global state. Persistence
//! and presentation live behind the ports in [`crate::port`].

pub mod conflict;
pub mod error;
pub mod event;

pub use conflict::{ConflictGraph, build_conflict_graph};
pub use error::AgendaError;
pub use event::{Event, EventRecord};
