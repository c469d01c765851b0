//! Conflict detection across a collection of events
//!
//! A conflict is a pair of events whose half-open spans overlap. The graph
//! built here is bidirectional: when A overlaps B, A's entry lists B and
//! B's entry lists A.

use indexmap::IndexMap;

use crate::domain::{error::AgendaError, event::Event};

/// Mapping from event id (canonical string form) to the events it conflicts
/// with.
///
/// Keys appear in the order conflicts were discovered during the pairwise
/// scan, and each id's list follows scan order rather than chronological
/// order. An id with no conflicts is absent from the map: entries are only
/// created when an overlap is found, so the map never contains an empty
/// list.
pub type ConflictGraph = IndexMap<String, Vec<Event>>;

/// Build the full conflict graph over `events`.
///
/// Each unordered pair is compared exactly once in a quadratic scan, and
/// both directions are recorded on overlap.
/// Duplicate ids in the input surface the [`AgendaError::InvalidComparison`]
/// from [`Event::overlaps`].
pub fn build_conflict_graph(events: &[Event]) -> Result<ConflictGraph, AgendaError> {
    let mut graph = ConflictGraph::new();

    for (i, event) in events.iter().enumerate() {
        for other in &events[i + 1..] {
            if event.overlaps(other)? {
                graph.entry(event.id().to_string()).or_default().push(other.clone());
                graph.entry(other.id().to_string()).or_default().push(event.clone());
            }
        }
    }

    Ok(graph)
}
