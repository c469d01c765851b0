//! Configuration management for the agenda CLI

pub mod settings;

pub use settings::*;
