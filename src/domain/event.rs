//! Core event domain types
//!
//! This module contains the [`Event`] value object and its serialized
//! [`EventRecord`] form. Events are immutable after construction: fields are
//! only reachable through accessors, and every construction path (fresh or
//! reloaded from disk) runs the same validation, so an invalid event cannot
//! exist anywhere in the system.

use std::fmt::Display;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::error::AgendaError;

/// A named, time-bounded calendar entry.
///
/// The span is half-open: an event occupies `[start_time, end_time)`, so an
/// event ending at 11:00 does not touch one starting at 11:00. The start
/// must strictly precede the end; zero-duration events are rejected.
#[derive(Debug, Clone)]
pub struct Event {
    id:          Uuid,
    name:        String,
    start_time:  DateTime<Utc>,
    end_time:    DateTime<Utc>,
    description: Option<String>
}

/// Events are equal when their ids are equal; the id is the sole lookup key.
impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} → {})", self.name, self.start_time, self.end_time)
    }
}

impl Event {
    /// Create a new event with a freshly generated id.
    ///
    /// Fails with [`AgendaError::Validation`] when the name is empty or when
    /// `start_time >= end_time` (equal instants are rejected, not just the
    /// reversed case).
    pub fn new(
        name: String,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        description: Option<String>
    ) -> Result<Self, AgendaError> {
        Self::validate(&name, start_time, end_time)?;

        Ok(Self { id: Uuid::new_v4(), name, start_time, end_time, description })
    }

    /// Enforce the construction invariant shared by [`Event::new`] and
    /// [`Event::from_record`].
    fn validate(name: &str, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Result<(), AgendaError> {
        if name.trim().is_empty() {
            return Err(AgendaError::Validation("event name must not be empty".to_string()));
        }

        if start_time >= end_time {
            return Err(AgendaError::Validation(format!(
                "event start time {} must be strictly before end time {}",
                start_time, end_time
            )));
        }

        Ok(())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Length of the event's span. Always positive.
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Whether this event shares any instant of time with `other`.
    ///
    /// Two half-open spans `[s1, e1)` and `[s2, e2)` overlap iff
    /// `s1 < e2 && s2 < e1`: identical spans overlap, spans that merely
    /// touch at a boundary do not. The result is symmetric.
    ///
    /// Comparing an event against itself (same id) is a usage error and
    /// fails with [`AgendaError::InvalidComparison`] rather than answering
    /// a vacuous "yes".
    pub fn overlaps(&self, other: &Event) -> Result<bool, AgendaError> {
        if self.id == other.id {
            return Err(AgendaError::InvalidComparison(format!(
                "event '{}' cannot be compared against itself",
                self.name
            )));
        }

        Ok(self.start_time < other.end_time && other.start_time < self.end_time)
    }

    /// Serialized form of this event, as written to the events file.
    pub fn to_record(&self) -> EventRecord {
        EventRecord {
            id:          Some(self.id.to_string()),
            name:        self.name.clone(),
            start_time:  self.start_time,
            end_time:    self.end_time,
            description: self.description.clone()
        }
    }

    /// Rebuild an event from a stored record.
    ///
    /// A record without an id gets a fresh one. Validation is re-run, so a
    /// corrupt record with `start >= end` fails exactly like fresh
    /// construction would.
    pub fn from_record(record: EventRecord) -> Result<Self, AgendaError> {
        let id = match record.id {
            Some(raw) => Uuid::parse_str(&raw)
                .map_err(|e| AgendaError::Validation(format!("invalid event id '{}': {}", raw, e)))?,
            None => Uuid::new_v4()
        };

        Self::validate(&record.name, record.start_time, record.end_time)?;

        Ok(Self {
            id,
            name: record.name,
            start_time: record.start_time,
            end_time: record.end_time,
            description: record.description
        })
    }
}

/// On-disk representation of an [`Event`].
///
/// Timestamps serialize as RFC 3339 strings and the id as its canonical
/// UUID string form, keeping the events file human-readable and editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord {
    /// Canonical UUID string; absent in hand-written records
    #[serde(default)]
    pub id:          Option<String>,
    pub name:        String,
    pub start_time:  DateTime<Utc>,
    pub end_time:    DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn at(hour: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, hour, min, 0).unwrap()
    }

    fn event(name: &str, start: (u32, u32), end: (u32, u32)) -> Event {
        Event::new(name.to_string(), at(start.0, start.1), at(end.0, end.1), None).unwrap()
    }

    #[test]
    fn test_event_creation() {
        let event = Event::new(
            "Réunion".to_string(),
            at(10, 0),
            at(11, 0),
            Some("weekly sync".to_string())
        )
        .unwrap();

        assert_eq!(event.name(), "Réunion");
        assert_eq!(event.start_time(), at(10, 0));
        assert_eq!(event.end_time(), at(11, 0));
        assert_eq!(event.description(), Some("weekly sync"));
    }

    #[test]
    fn test_reversed_span_rejected() {
        let result = Event::new("Réunion".to_string(), at(11, 0), at(10, 0), None);
        assert!(matches!(result, Err(AgendaError::Validation(_))));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let result = Event::new("Réunion".to_string(), at(10, 0), at(10, 0), None);
        assert!(matches!(result, Err(AgendaError::Validation(_))));
    }

    #[test]
    fn test_empty_name_rejected() {
        let result = Event::new("  ".to_string(), at(10, 0), at(11, 0), None);
        assert!(matches!(result, Err(AgendaError::Validation(_))));
    }

    #[test]
    fn test_overlaps_identical_span() {
        let a = event("Event 1", (10, 0), (11, 0));
        let b = event("Event 2", (10, 0), (11, 0));

        assert!(a.overlaps(&b).unwrap());
        assert!(b.overlaps(&a).unwrap());
    }

    #[test]
    fn test_overlaps_partial() {
        let a = event("Event 1", (10, 0), (12, 0));
        let b = event("Event 2", (11, 0), (13, 0));

        assert!(a.overlaps(&b).unwrap());
        assert!(b.overlaps(&a).unwrap());
    }

    #[test]
    fn test_overlaps_containment() {
        let outer = event("Outer", (9, 0), (13, 0));
        let inner = event("Inner", (10, 0), (11, 0));

        assert!(outer.overlaps(&inner).unwrap());
        assert!(inner.overlaps(&outer).unwrap());
    }

    #[test]
    fn test_touching_boundary_does_not_overlap() {
        let a = event("Event 1", (10, 0), (11, 0));
        let b = event("Event 2", (11, 0), (12, 0));

        assert!(!a.overlaps(&b).unwrap());
        assert!(!b.overlaps(&a).unwrap());
    }

    #[test]
    fn test_disjoint_spans_do_not_overlap() {
        let a = event("Event 1", (10, 0), (11, 0));
        let b = event("Event 2", (12, 0), (13, 0));

        assert!(!a.overlaps(&b).unwrap());
        assert!(!b.overlaps(&a).unwrap());
    }

    #[test]
    fn test_overlap_with_self_fails() {
        let event = event("Réunion", (10, 0), (11, 0));

        assert!(matches!(event.overlaps(&event), Err(AgendaError::InvalidComparison(_))));
    }

    #[test]
    fn test_duration() {
        let event = event("Réunion", (10, 0), (11, 30));
        assert_eq!(event.duration(), Duration::minutes(90));
    }

    #[test]
    fn test_record_round_trip() {
        let event = Event::new(
            "Réunion".to_string(),
            at(10, 0),
            at(11, 0),
            Some("salle B".to_string())
        )
        .unwrap();

        let rebuilt = Event::from_record(event.to_record()).unwrap();

        assert_eq!(rebuilt.id(), event.id());
        assert_eq!(rebuilt.name(), event.name());
        assert_eq!(rebuilt.start_time(), event.start_time());
        assert_eq!(rebuilt.end_time(), event.end_time());
        assert_eq!(rebuilt.description(), event.description());
    }

    #[test]
    fn test_from_record_generates_missing_id() {
        let record = EventRecord {
            id:          None,
            name:        "Réunion".to_string(),
            start_time:  at(10, 0),
            end_time:    at(11, 0),
            description: None
        };

        let event = Event::from_record(record).unwrap();
        assert!(!event.id().is_nil());
    }

    #[test]
    fn test_from_record_rejects_invalid_span() {
        let record = EventRecord {
            id:          None,
            name:        "Réunion".to_string(),
            start_time:  at(11, 0),
            end_time:    at(10, 0),
            description: None
        };

        assert!(matches!(Event::from_record(record), Err(AgendaError::Validation(_))));
    }

    #[test]
    fn test_from_record_rejects_malformed_id() {
        let record = EventRecord {
            id:          Some("not-a-uuid".to_string()),
            name:        "Réunion".to_string(),
            start_time:  at(10, 0),
            end_time:    at(11, 0),
            description: None
        };

        assert!(matches!(Event::from_record(record), Err(AgendaError::Validation(_))));
    }

    #[test]
    fn test_record_serializes_timestamps_as_rfc3339() {
        let event = event("Réunion", (10, 0), (11, 0));
        let json = serde_json::to_value(event.to_record()).unwrap();

        assert_eq!(json["name"], "Réunion");
        assert_eq!(json["start_time"], "2024-01-01T10:00:00Z");
        assert_eq!(json["end_time"], "2024-01-01T11:00:00Z");
        assert!(json["description"].is_null());
    }
}
