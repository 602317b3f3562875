use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value as JsonValue;
use std::path::PathBuf;

use super::{SnapshotError, SnapshotWriter};

/// Writes `<dir>/<collection>_backup_<timestamp>.json` files.
#[derive(Debug, Clone)]
pub struct FsSnapshotWriter {
    dir: PathBuf,
}

impl FsSnapshotWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `2026-03-01T10:20:30.123Z` becomes `2026-03-01T10-20-30-123Z` so the
    /// name is valid on every filesystem.
    pub fn snapshot_path(&self, collection: &str, at: DateTime<Utc>) -> PathBuf {
        let timestamp = at
            .to_rfc3339_opts(SecondsFormat::Millis, true)
            .replace([':', '.'], "-");

        self.dir
            .join(format!("{}_backup_{}.json", collection, timestamp))
    }
}

#[async_trait]
impl SnapshotWriter for FsSnapshotWriter {
    async fn write(&self, collection: &str, records: JsonValue) -> Result<PathBuf, SnapshotError> {
        let body = serde_json::to_vec_pretty(&records)
            .map_err(|e| SnapshotError::Serialization(e.to_string()))?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| SnapshotError::Io(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.snapshot_path(collection, Utc::now());

        tokio::fs::write(&path, body)
            .await
            .map_err(|e| SnapshotError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::info!(collection, path = %path.display(), "Snapshot written");

        Ok(path)
    }
}
