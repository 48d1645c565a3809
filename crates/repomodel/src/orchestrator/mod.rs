//! Run orchestration: open the configured source, build, persist, report.

use std::path::{Path, PathBuf};
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::assembler::{self, settle};
use crate::config::Config;
use crate::core::{MetadataSource, SchemaScope};
use crate::diagnostics::TracingSink;
use crate::error::Result;
use crate::model::{ModelSummary, RepositoryModel};
use crate::rules::StandardRules;
use crate::source::{open_source, MetadataSnapshot};

/// Coordinates one command against the configured metadata source.
pub struct Orchestrator {
    config: Config,
}

/// Result of a model generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Final status.
    pub status: String,

    /// Source type the model was read from.
    pub source_type: String,

    /// When the run started.
    pub started_at: DateTime<Utc>,

    /// When the run completed.
    pub completed_at: DateTime<Utc>,

    /// Total duration in seconds.
    pub duration_seconds: f64,

    /// Where the model was written.
    pub output_path: PathBuf,

    /// Output format.
    pub format: String,

    /// Model counts.
    pub summary: ModelSummary,

    /// `TABLE.COLUMN` names carrying placeholders.
    pub degraded_columns: Vec<String>,
}

impl GenerationResult {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One table visible under the configured scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableInfo {
    pub schema: Option<String>,
    pub name: String,
    pub table_type: String,
    pub columns: usize,
    pub foreign_keys: usize,
}

/// Result of a metadata snapshot capture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResult {
    pub path: PathBuf,
    pub source_type: String,
    pub tables: usize,
    pub captured_at: DateTime<Utc>,
}

/// Result of a connection health check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    pub source_type: String,
    pub connected: bool,
    pub latency_ms: u64,
    pub error: Option<String>,
    pub healthy: bool,
}

impl Orchestrator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn scope(&self) -> SchemaScope {
        self.config.source.scope()
    }

    /// Build the repository model and write it to the configured output.
    pub async fn run(&self) -> Result<GenerationResult> {
        let started_at = Utc::now();
        let start = Instant::now();

        let source = open_source(&self.config.source).await?;
        let source_type = source.db_type().to_string();
        let rules = StandardRules::new(self.config.rules.clone());
        let model = assembler::generate(&source, &rules, &TracingSink, &self.scope()).await?;

        let output_path = self.config.output.path.clone();
        let format = self.config.output.format();
        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        model.save(&output_path, format)?;
        info!("Wrote repository model to {:?} ({})", output_path, format);

        let degraded_columns = degraded_names(&model);
        for name in &degraded_columns {
            warn!("Review needed: {}", name);
        }

        Ok(GenerationResult {
            status: "completed".to_string(),
            source_type,
            started_at,
            completed_at: Utc::now(),
            duration_seconds: start.elapsed().as_secs_f64(),
            output_path,
            format: format.to_string(),
            summary: model.summary(),
            degraded_columns,
        })
    }

    /// List the tables visible under the configured scope.
    pub async fn list_tables(&self) -> Result<Vec<TableInfo>> {
        let source = open_source(&self.config.source).await?;
        let extracted = source.extract_tables(&self.scope()).await;
        let closed = source.close().await;

        let tables = settle(extracted, closed)?
            .into_iter()
            .map(|t| TableInfo {
                columns: t.columns.len(),
                foreign_keys: t.foreign_keys.len(),
                schema: t.schema,
                name: t.name,
                table_type: t.table_type,
            })
            .collect();
        Ok(tables)
    }

    /// Capture the raw metadata under the configured scope to `path`.
    pub async fn snapshot(&self, path: &Path) -> Result<SnapshotResult> {
        let source = open_source(&self.config.source).await?;
        let captured = MetadataSnapshot::capture(&source, &self.scope()).await;
        let closed = source.close().await;
        let snapshot = settle(captured, closed)?;

        snapshot.save(path)?;
        Ok(SnapshotResult {
            path: path.to_path_buf(),
            source_type: snapshot.source_type.clone(),
            tables: snapshot.tables.len(),
            captured_at: snapshot.captured_at.unwrap_or_else(Utc::now),
        })
    }

    /// Open and close the configured source, timing the round trip.
    pub async fn health_check(&self) -> Result<HealthCheckResult> {
        let source_type = self.config.source.source_type().to_string();
        let start = Instant::now();

        let outcome = match open_source(&self.config.source).await {
            Ok(source) => source.close().await,
            Err(e) => Err(e),
        };
        let latency_ms = start.elapsed().as_millis() as u64;

        let (connected, error) = match outcome {
            Ok(()) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };

        Ok(HealthCheckResult {
            source_type,
            connected,
            latency_ms,
            error,
            healthy: connected,
        })
    }
}

fn degraded_names(model: &RepositoryModel) -> Vec<String> {
    model
        .degraded_columns()
        .into_iter()
        .map(|(entity, column)| format!("{}.{}", entity, column.database_name))
        .collect()
}
