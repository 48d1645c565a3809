//! Metadata snapshots: raw table descriptors captured to a file.
//!
//! A snapshot lets a model be generated offline from a previously captured
//! schema. [`SnapshotSource`] serves a snapshot through the same
//! [`MetadataSource`] interface as a live database.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{DbTable, MetadataSource, SchemaScope};
use crate::error::{RepoError, Result};
use crate::format::{self, FileFormat};

/// Raw metadata captured from a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataSnapshot {
    /// Type of the source the snapshot was taken from.
    #[serde(default)]
    pub source_type: String,

    /// Capture time.
    #[serde(default)]
    pub captured_at: Option<DateTime<Utc>>,

    /// Tables with their columns and foreign keys.
    #[serde(default)]
    pub tables: Vec<DbTable>,
}

impl MetadataSnapshot {
    /// Capture every table in `scope` from `source`.
    pub async fn capture(source: &dyn MetadataSource, scope: &SchemaScope) -> Result<Self> {
        let tables = source.extract_tables(scope).await?;
        Ok(Self {
            source_type: source.db_type().to_string(),
            captured_at: Some(Utc::now()),
            tables,
        })
    }

    /// Write the snapshot; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        format::write_file(path, FileFormat::from_path(path), self)?;
        info!("Saved metadata snapshot ({} tables) to {:?}", self.tables.len(), path);
        Ok(())
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RepoError::Snapshot(format!(
                "snapshot file not found: {}",
                path.display()
            )));
        }
        let snapshot: MetadataSnapshot = format::read_file(path)?;
        debug!("Loaded metadata snapshot ({} tables) from {:?}", snapshot.tables.len(), path);
        Ok(snapshot)
    }
}

/// Metadata source reading from a [`MetadataSnapshot`].
pub struct SnapshotSource {
    path: PathBuf,
    snapshot: MetadataSnapshot,
    closed: AtomicBool,
}

impl SnapshotSource {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let snapshot = MetadataSnapshot::load(&path)?;
        Ok(Self::new(path, snapshot))
    }

    pub fn new(path: PathBuf, snapshot: MetadataSnapshot) -> Self {
        Self {
            path,
            snapshot,
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl MetadataSource for SnapshotSource {
    fn db_type(&self) -> &str {
        "snapshot"
    }

    async fn extract_tables(&self, scope: &SchemaScope) -> Result<Vec<DbTable>> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(RepoError::Snapshot(format!(
                "snapshot source {} is closed",
                self.path.display()
            )));
        }
        Ok(self
            .snapshot
            .tables
            .iter()
            .filter(|table| scope.accepts(table))
            .cloned()
            .collect())
    }

    async fn close(&self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
