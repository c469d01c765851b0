//! Storage implementations for event records
//!
//! This module provides both the JSON-file implementation used by the CLI
//! and an in-memory implementation for tests and ephemeral use.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::{
    domain::{error::AgendaError, event::EventRecord},
    port::storage::EventStore
};

/// JSON-file implementation of [`EventStore`]
///
/// The whole collection is rewritten on every save as pretty-printed JSON,
/// keeping the backing file human-readable and hand-editable. A missing or
/// corrupt file loads as the empty collection.
pub struct JsonFileStore {
    path: PathBuf
}

impl JsonFileStore {
    /// Create a store backed by `path`. The file and its parent directories
    /// are created lazily on the first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load_events(&self) -> Result<Vec<EventRecord>, AgendaError> {
        if !self.path.exists() {
            return Ok(vec![]);
        }

        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "events file is unreadable, starting empty");
                return Ok(vec![]);
            }
        };

        match serde_json::from_str(&content) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "events file is corrupt, starting empty");
                Ok(vec![])
            }
        }
    }

    async fn save_events(&self, records: &[EventRecord]) -> Result<(), AgendaError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| AgendaError::FileSystem(format!("failed to create data directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(records)
            .map_err(|e| AgendaError::Serialization(format!("failed to serialize events: {}", e)))?;

        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| AgendaError::FileSystem(format!("failed to write events file: {}", e)))?;

        debug!(path = %self.path.display(), count = records.len(), "events saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), AgendaError> {
        if self.path.exists() {
            tokio::fs::remove_file(&self.path)
                .await
                .map_err(|e| AgendaError::FileSystem(format!("failed to remove events file: {}", e)))?;
        }

        Ok(())
    }
}

/// In-memory implementation of [`EventStore`]
///
/// Data is lost when the process exits; suitable for tests only.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: RwLock<Vec<EventRecord>>
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventStore for InMemoryStore {
    async fn load_events(&self) -> Result<Vec<EventRecord>, AgendaError> {
        Ok(self.records.read().await.clone())
    }

    async fn save_events(&self, records: &[EventRecord]) -> Result<(), AgendaError> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }

    async fn clear(&self) -> Result<(), AgendaError> {
        self.records.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn sample_record(name: &str) -> EventRecord {
        EventRecord {
            id:          Some(uuid::Uuid::new_v4().to_string()),
            name:        name.to_string(),
            start_time:  Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            end_time:    Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
            description: None
        }
    }

    #[tokio::test]
    async fn test_load_missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));

        assert!(store.load_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::new(path);
        assert!(store.load_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));

        store.save_events(&[sample_record("Réunion")]).await.unwrap();

        let loaded = store.load_events().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, "Réunion");
    }

    #[tokio::test]
    async fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested").join("deeper").join("events.json"));

        store.save_events(&[sample_record("Réunion")]).await.unwrap();

        assert_eq!(store.load_events().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_writes_human_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let store = JsonFileStore::new(path.clone());

        store.save_events(&[sample_record("Réunion")]).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains('\n'));
        assert!(content.contains("\"name\": \"Réunion\""));
    }

    #[tokio::test]
    async fn test_clear_removes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        let store = JsonFileStore::new(path.clone());

        store.save_events(&[sample_record("Réunion")]).await.unwrap();
        assert!(path.exists());

        store.clear().await.unwrap();
        assert!(!path.exists());
        assert!(store.load_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_on_missing_file_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("events.json"));

        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let store = InMemoryStore::new();

        store.save_events(&[sample_record("Réunion")]).await.unwrap();
        assert_eq!(store.load_events().await.unwrap().len(), 1);

        store.clear().await.unwrap();
        assert!(store.load_events().await.unwrap().is_empty());
    }
}
