//! Display utilities for formatted output

use chrono::{DateTime, Duration, Utc};
use tabled::{Table, Tabled, settings::Style};

use crate::{domain::event::Event, i18n};

/// One row of the rendered event table
#[derive(Tabled)]
struct EventRow {
    #[tabled(rename = "ID")]
    id:          String,
    #[tabled(rename = "Name")]
    name:        String,
    #[tabled(rename = "Start")]
    start:       String,
    #[tabled(rename = "End")]
    end:         String,
    #[tabled(rename = "Duration")]
    duration:    String,
    #[tabled(rename = "Description")]
    description: String
}

impl From<&Event> for EventRow {
    fn from(event: &Event) -> Self {
        Self {
            id:          event.id().to_string(),
            name:        event.name().to_string(),
            start:       format_instant(event.start_time()),
            end:         format_instant(event.end_time()),
            duration:    format_duration(event.duration()),
            description: event.description().unwrap_or("").to_string()
        }
    }
}

/// Render events as a table, in the order the caller provides
pub fn render_event_table(events: &[Event]) -> String {
    let rows: Vec<EventRow> = events.iter().map(EventRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Display one entry of the conflict report: the event and everything it
/// overlaps
pub fn show_conflict_entry(event: &Event, conflicts: &[Event]) {
    println!();
    println!("{}", i18n::t_params("conflicts_event_header", &[event.name(), &event.id().to_string()]));
    println!("{}", i18n::t("conflicts_with"));

    for other in conflicts {
        println!(
            "{}",
            i18n::t_params(
                "conflict_item",
                &[other.name(), &format_instant(other.start_time()), &format_instant(other.end_time())]
            )
        );
    }
}

/// Compact instant form for tables and reports
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M").to_string()
}

/// Compact duration form: `45m`, `2h`, `1h30m`
pub fn format_duration(duration: Duration) -> String {
    let minutes = duration.num_minutes();

    if minutes < 60 {
        format!("{}m", minutes)
    } else if minutes % 60 == 0 {
        format!("{}h", minutes / 60)
    } else {
        format!("{}h{:02}m", minutes / 60, minutes % 60)
    }
}
