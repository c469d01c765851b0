//! # Agenda CLI Application
//!
//! A command-line personal event planner: add time-bounded events, list
//! them chronologically, and find out where your schedule collides with
//! itself.
//!
//! ## Usage
//!
//! ```bash
//! # Add an event (conflicts warn, they never block)
//! agenda add --name "Standup" --start "2024-01-01 10:00" --end "2024-01-01 10:30"
//!
//! # List everything, or only a window
//! agenda list
//! agenda list --from "2024-01-01 09:00" --to "2024-01-01 18:00"
//!
//! # Full conflict report
//! agenda conflicts
//! ```
//!
//! Events are stored as human-readable JSON in the platform data
//! directory; `RUST_LOG` controls diagnostic output on stderr.

use agenda::cli::{AgendaCli, AgendaCommand, commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = AgendaCli::parse();

    match cli.command {
        AgendaCommand::Add { name, start, end, description } => {
            commands::handle_add_command(&name, &start, &end, description).await
        }
        AgendaCommand::Remove { event_id } => commands::handle_remove_command(&event_id).await,
        AgendaCommand::List { from, to } => commands::handle_list_command(from.as_deref(), to.as_deref()).await,
        AgendaCommand::Conflicts => commands::handle_conflicts_command().await,
        AgendaCommand::Show { event_id } => commands::handle_show_command(&event_id).await,
        AgendaCommand::Clear { yes } => commands::handle_clear_command(yes).await,
        AgendaCommand::Lang { command } => commands::handle_lang_command(&command).await,
        AgendaCommand::Init => commands::handle_init_command().await
    }
}
