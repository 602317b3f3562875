use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::path::PathBuf;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SnapshotError {
    #[error("Failed to serialize snapshot: {0}")]
    Serialization(String),

    #[error("Failed to write snapshot: {0}")]
    Io(String),
}

/// Outgoing port for backing up a whole collection before it is replaced.
#[async_trait]
pub trait SnapshotWriter: Send + Sync {
    /// Persists `records` and returns where they were written.
    async fn write(&self, collection: &str, records: JsonValue) -> Result<PathBuf, SnapshotError>;
}
