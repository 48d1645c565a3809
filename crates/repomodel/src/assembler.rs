//! Repository model assembly from a metadata source.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::builder::EntityBuilder;
use crate::core::{MetadataSource, SchemaScope};
use crate::diagnostics::DiagnosticSink;
use crate::error::Result;
use crate::model::RepositoryModel;
use crate::rules::RepositoryRules;

/// Builds a [`RepositoryModel`] from every table a source exposes.
pub struct RepositoryModelAssembler<'a> {
    rules: &'a dyn RepositoryRules,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> RepositoryModelAssembler<'a> {
    pub fn new(rules: &'a dyn RepositoryRules, sink: &'a dyn DiagnosticSink) -> Self {
        Self { rules, sink }
    }

    /// Enumerate the tables in `scope` and build one entity per table.
    ///
    /// Only enumeration failures are returned. Rule problems degrade single
    /// columns and are reported to the sink.
    pub async fn assemble(
        &self,
        source: &dyn MetadataSource,
        scope: &SchemaScope,
    ) -> Result<RepositoryModel> {
        let start = Instant::now();
        info!(
            "Reading {} metadata (schema: {}, pattern: {})",
            source.db_type(),
            scope.schema.as_deref().unwrap_or("*"),
            scope.table_pattern
        );

        let tables = source.extract_tables(scope).await?;
        info!("Found {} tables", tables.len());

        let builder = EntityBuilder::new(self.rules, self.sink);
        let mut model = RepositoryModel::new();
        for table in &tables {
            debug!("Building entity for {}", table.full_name());
            builder.build(&mut model, table);
        }

        let summary = model.summary();
        if summary.degraded_columns > 0 {
            warn!(
                "{} columns could not be fully mapped and carry placeholders",
                summary.degraded_columns
            );
        }
        info!(
            "Model assembled: {} entities, {} columns, {} foreign keys in {:.2?}",
            summary.entities,
            summary.columns,
            summary.foreign_keys,
            start.elapsed()
        );

        Ok(model)
    }
}

/// Assemble a model and release the source on every exit path.
pub async fn generate(
    source: &dyn MetadataSource,
    rules: &dyn RepositoryRules,
    sink: &dyn DiagnosticSink,
    scope: &SchemaScope,
) -> Result<RepositoryModel> {
    let assembled = RepositoryModelAssembler::new(rules, sink)
        .assemble(source, scope)
        .await;
    let closed = source.close().await;
    settle(assembled, closed)
}

/// Combine an operation's outcome with the outcome of closing its source.
///
/// The operation's error wins; a close error only fails an otherwise
/// successful operation.
pub(crate) fn settle<T>(outcome: Result<T>, closed: Result<()>) -> Result<T> {
    match (outcome, closed) {
        (Ok(value), Ok(())) => Ok(value),
        (Ok(_), Err(e)) => Err(e),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(close_err)) => {
            warn!("Failed to close metadata source after error: {}", close_err);
            Err(e)
        }
    }
}
