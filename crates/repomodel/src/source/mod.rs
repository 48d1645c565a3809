//! Metadata source implementations.
//!
//! - [`PostgresSource`]: live PostgreSQL catalog
//! - [`SnapshotSource`]: previously captured [`MetadataSnapshot`] file
//!
//! [`SourceImpl`] selects between them from configuration and dispatches
//! statically.

mod pg_types;
mod postgres;
mod snapshot;
mod tls;

pub use postgres::PostgresSource;
pub use snapshot::{MetadataSnapshot, SnapshotSource};
pub use tls::SslMode;

use async_trait::async_trait;

use crate::config::SourceConfig;
use crate::core::{DbTable, MetadataSource, SchemaScope};
use crate::error::{RepoError, Result};

/// Enum wrapper over the metadata source implementations.
pub enum SourceImpl {
    Postgres(PostgresSource),
    Snapshot(SnapshotSource),
}

impl SourceImpl {
    /// Open the source described by `config`.
    pub async fn from_config(config: &SourceConfig) -> Result<Self> {
        match config.source_type() {
            "snapshot" => {
                let path = config.path.as_ref().ok_or_else(|| {
                    RepoError::Config("source.path is required for snapshot sources".into())
                })?;
                Ok(Self::Snapshot(SnapshotSource::open(path)?))
            }
            _ => Ok(Self::Postgres(PostgresSource::connect(config).await?)),
        }
    }
}

/// Open the metadata source described by `config`.
pub async fn open_source(config: &SourceConfig) -> Result<SourceImpl> {
    SourceImpl::from_config(config).await
}

#[async_trait]
impl MetadataSource for SourceImpl {
    fn db_type(&self) -> &str {
        match self {
            Self::Postgres(s) => s.db_type(),
            Self::Snapshot(s) => s.db_type(),
        }
    }

    async fn extract_tables(&self, scope: &SchemaScope) -> Result<Vec<DbTable>> {
        match self {
            Self::Postgres(s) => s.extract_tables(scope).await,
            Self::Snapshot(s) => s.extract_tables(scope).await,
        }
    }

    async fn close(&self) -> Result<()> {
        match self {
            Self::Postgres(s) => s.close().await,
            Self::Snapshot(s) => s.close().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn snapshot_config(path: Option<std::path::PathBuf>) -> SourceConfig {
        let yaml = "type: snapshot\n";
        let mut config: SourceConfig = serde_yaml::from_str(yaml).unwrap();
        config.path = path;
        config
    }

    #[tokio::test]
    async fn test_open_snapshot_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("meta.yaml");
        MetadataSnapshot::default().save(&path).unwrap();

        let source = open_source(&snapshot_config(Some(path))).await.unwrap();
        assert_eq!(source.db_type(), "snapshot");
        assert!(source
            .extract_tables(&SchemaScope::default())
            .await
            .unwrap()
            .is_empty());
        source.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_snapshot_without_path_is_config_error() {
        let err = open_source(&snapshot_config(None)).await.err().unwrap();
        assert!(matches!(err, RepoError::Config(_)));
    }
}
