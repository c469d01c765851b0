use async_trait::async_trait;

use crate::domain::{error::AgendaError, event::EventRecord};

/// Port for durable storage of event records
///
/// The service depends only on this contract, never on the storage medium.
/// Implementations must treat a missing or unparseable backing as the empty
/// sequence on load; write failures propagate to the caller.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Read every stored event record.
    ///
    /// Returns an empty vector when the backing does not exist or cannot be
    /// parsed; corruption is non-fatal and handled here, not upstream.
    async fn load_events(&self) -> Result<Vec<EventRecord>, AgendaError>;

    /// Overwrite the backing with the full current record sequence.
    async fn save_events(&self, records: &[EventRecord]) -> Result<(), AgendaError>;

    /// Remove the backing entirely; the next load sees no data.
    async fn clear(&self) -> Result<(), AgendaError>;
}
