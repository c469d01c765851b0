//! Command-line interface: argument tree and handlers

pub mod args;
pub mod commands;

pub use args::{AgendaCli, AgendaCommand, LangCommands};
