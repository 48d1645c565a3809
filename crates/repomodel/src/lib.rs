//! # repomodel
//!
//! Database metadata introspection into a repository model for code
//! generation.
//!
//! The library reads tables, columns, and foreign keys from a metadata source
//! and turns them into a language-neutral [`RepositoryModel`]:
//!
//! - **Type inference** through pluggable [`RepositoryRules`]
//! - **Naming derivation** for classes, attributes, and UI hints
//! - **Column classification** (long text, date/time subtypes, primitive defaults)
//! - **Sources**: live PostgreSQL catalogs or captured metadata snapshots
//!
//! Rule failures never abort a run. The affected column gets a placeholder
//! name or type and the problem is reported to a [`DiagnosticSink`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use repomodel::{generate, open_source, Config, StandardRules, TracingSink};
//!
//! #[tokio::main]
//! async fn main() -> repomodel::Result<()> {
//!     let config = Config::load("config.yaml")?;
//!     let source = open_source(&config.source).await?;
//!     let rules = StandardRules::new(config.rules.clone());
//!     let model = generate(&source, &rules, &TracingSink, &config.source.scope()).await?;
//!     println!("Built {} entities", model.len());
//!     Ok(())
//! }
//! ```

pub mod assembler;
pub mod builder;
pub mod classify;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod format;
pub mod model;
pub mod orchestrator;
pub mod rules;
pub mod source;

// Re-exports for convenient access
pub use assembler::{generate, RepositoryModelAssembler};
pub use builder::{ColumnBuilder, EntityBuilder, ForeignKeyBuilder};
pub use config::{Config, OutputConfig, RulesConfig, SourceConfig};
pub use crate::core::{DbColumn, DbForeignKey, DbForeignKeyColumn, DbTable, MetadataSource, SchemaScope};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{RepoError, Result};
pub use format::FileFormat;
pub use model::{Column, DateType, Entity, ForeignKey, ForeignKeyColumn, ModelSummary, RepositoryModel};
pub use orchestrator::{GenerationResult, HealthCheckResult, Orchestrator, SnapshotResult, TableInfo};
pub use rules::{RepositoryRules, RuleError, RuleKind, RuleResult, StandardRules};
pub use source::{open_source, MetadataSnapshot, PostgresSource, SnapshotSource, SourceImpl};
