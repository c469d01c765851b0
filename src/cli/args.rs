//! CLI argument parsing

use clap::{Parser, Subcommand};

/// Main CLI application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct AgendaCli {
    #[command(subcommand)]
    pub command: AgendaCommand
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum AgendaCommand {
    /// Add a new event
    Add {
        /// Event name
        #[arg(short, long)]
        name:        String,
        /// Start date-time, e.g. '2024-01-01 10:00' (taken as UTC) or RFC 3339
        #[arg(short, long)]
        start:       String,
        /// End date-time, same formats as --start
        #[arg(short, long)]
        end:         String,
        /// Optional free-text description
        #[arg(short, long)]
        description: Option<String>
    },
    /// Remove an event by its ID
    Remove {
        /// ID of the event to remove
        event_id: String
    },
    /// List events, optionally limited to a time window
    List {
        /// Keep events ending at or after this instant
        #[arg(long)]
        from: Option<String>,
        /// Keep events starting at or before this instant
        #[arg(long)]
        to:   Option<String>
    },
    /// Report all schedule conflicts
    Conflicts,
    /// Show a single event by its ID
    Show {
        /// ID of the event to show
        event_id: String
    },
    /// Remove every event and the events file
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool
    },
    /// Language management commands
    Lang {
        #[command(subcommand)]
        command: LangCommands
    },
    /// Initialize configuration directories and copy default files
    Init
}

/// Language management subcommands
#[derive(Subcommand, Debug)]
pub enum LangCommands {
    /// Set the current language
    Set {
        /// Language code (e.g., 'en', 'fr')
        language: String
    },
    /// Show current language
    Current,
    /// List available languages
    List
}
