//! Event service - orchestrates event operations
//!
//! This service owns the in-memory collection and handles all event
//! business logic: adding with conflict detection, removal, lookups,
//! chronological and windowed listings, and the full conflict graph.
//! Durability is delegated to the injected [`EventStore`] port; every
//! mutation rewrites the persisted form before returning.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::{
    domain::{
        conflict::{ConflictGraph, build_conflict_graph},
        error::AgendaError,
        event::{Event, EventRecord}
    },
    port::storage::EventStore
};

/// Outcome of adding an event.
///
/// Overlaps never block insertion; they are reported here so the caller
/// can decide how loudly to warn.
#[derive(Debug, Clone, Default)]
pub struct AddOutcome {
    /// Existing events the new event overlaps, in store order
    pub conflicts: Vec<Event>
}

impl AddOutcome {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }
}

/// Service for event operations
///
/// Holds the full collection in memory, in insertion order. Operations run
/// to completion before returning; the service is meant for one execution
/// context at a time and provides no cross-process locking.
pub struct EventService {
    store:  Arc<dyn EventStore>,
    events: Vec<Event>
}

impl EventService {
    /// Construct a service by loading the collection from `store`.
    ///
    /// A missing or unparseable backing loads as empty (the adapter
    /// guarantees that); a record that parses but violates the event
    /// invariant surfaces as [`AgendaError::Validation`], exactly like
    /// fresh construction.
    pub async fn load(store: Arc<dyn EventStore>) -> Result<Self, AgendaError> {
        let records = store.load_events().await?;
        let events = records.into_iter().map(Event::from_record).collect::<Result<Vec<_>, _>>()?;

        Ok(Self { store, events })
    }

    /// Add an event to the collection.
    ///
    /// Conflicts with existing events are detected and reported in the
    /// returned [`AddOutcome`], but the event is stored regardless. The
    /// full collection is persisted before returning; a persistence
    /// failure propagates and the in-memory insertion is not rolled back.
    pub async fn add_event(&mut self, event: Event) -> Result<AddOutcome, AgendaError> {
        let conflicts = self.conflicting_events(&event)?;

        if !conflicts.is_empty() {
            warn!(event = %event.name(), count = conflicts.len(), "event overlaps existing events, adding anyway");
        }

        self.events.push(event);
        self.persist().await?;

        Ok(AddOutcome { conflicts })
    }

    /// Remove the event whose id's string form matches `event_id`.
    ///
    /// Returns `Ok(true)` and persists when something was removed;
    /// `Ok(false)` with no write when no event matched. Removing an
    /// unknown id is not an error.
    pub async fn remove_event(&mut self, event_id: &str) -> Result<bool, AgendaError> {
        let initial_len = self.events.len();
        self.events.retain(|event| event.id().to_string() != event_id);

        if self.events.len() < initial_len {
            self.persist().await?;
            return Ok(true);
        }

        Ok(false)
    }

    /// Look up an event by its id's string form. Linear scan; absent is a
    /// normal outcome, not an error.
    pub fn get_event_by_id(&self, event_id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id().to_string() == event_id)
    }

    /// All events sorted ascending by `(start_time, end_time)`.
    ///
    /// The sort is stable, so events with fully identical keys keep their
    /// store order.
    pub fn list_events(&self) -> Vec<Event> {
        let mut events = self.events.clone();
        events.sort_by_key(|event| (event.start_time(), event.end_time()));
        events
    }

    /// Events whose span intersects the given window, sorted
    /// chronologically.
    ///
    /// Both bounds are inclusive of boundary-touching events: an event
    /// ending exactly at `start` or starting exactly at `end` is kept.
    /// An absent bound leaves that side unbounded.
    pub fn list_events_between(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Vec<Event> {
        let mut events = self.list_events();

        if let Some(start) = start {
            events.retain(|event| event.end_time() >= start);
        }
        if let Some(end) = end {
            events.retain(|event| event.start_time() <= end);
        }

        events
    }

    /// Build the full conflict graph over the collection.
    ///
    /// See [`build_conflict_graph`] for ordering and absence guarantees.
    pub fn find_conflicts(&self) -> Result<ConflictGraph, AgendaError> {
        build_conflict_graph(&self.events)
    }

    /// Remove every event and the persisted backing entirely.
    pub async fn clear_events(&mut self) -> Result<(), AgendaError> {
        self.events.clear();
        self.store.clear().await
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Existing events overlapping `candidate`, in store order.
    fn conflicting_events(&self, candidate: &Event) -> Result<Vec<Event>, AgendaError> {
        let mut conflicts = Vec::new();

        for existing in &self.events {
            if existing.overlaps(candidate)? {
                conflicts.push(existing.clone());
            }
        }

        Ok(conflicts)
    }

    async fn persist(&self) -> Result<(), AgendaError> {
        let records: Vec<EventRecord> = self.events.iter().map(Event::to_record).collect();
        self.store.save_events(&records).await
    }
}
