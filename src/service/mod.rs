//! Services - business logic over the domain and ports

pub mod event_service;

pub use event_service::{AddOutcome, EventService};
