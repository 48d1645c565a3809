//! Configuration type definitions.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::SchemaScope;
use crate::format::FileFormat;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Metadata source configuration.
    pub source: SourceConfig,

    /// Naming and typing rules.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Where the model is written.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Metadata source configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Source type: "postgres" or "snapshot".
    #[serde(default = "default_postgres")]
    pub r#type: String,

    /// Database host.
    #[serde(default)]
    pub host: String,

    /// Database port (default: 5432).
    #[serde(default = "default_pg_port")]
    pub port: u16,

    /// Database name.
    #[serde(default)]
    pub database: String,

    /// Username.
    #[serde(default)]
    pub user: String,

    /// Password.
    #[serde(default)]
    pub password: String,

    /// Schema to introspect (default: "public").
    #[serde(default = "default_public_schema")]
    pub schema: String,

    /// Catalog filter.
    #[serde(default)]
    pub catalog: Option<String>,

    /// Table name pattern, SQL LIKE syntax (default: "%").
    #[serde(default = "default_table_pattern")]
    pub table_pattern: String,

    /// Database object types to include (default: TABLE, VIEW).
    #[serde(default = "default_table_types")]
    pub table_types: Vec<String>,

    /// SSL mode (default: "disable").
    #[serde(default = "default_disable")]
    pub ssl_mode: String,

    /// Metadata snapshot file, for the "snapshot" source type.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("type", &self.r#type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .field("schema", &self.schema)
            .field("catalog", &self.catalog)
            .field("table_pattern", &self.table_pattern)
            .field("table_types", &self.table_types)
            .field("ssl_mode", &self.ssl_mode)
            .field("path", &self.path)
            .finish()
    }
}

impl SourceConfig {
    /// Scope of tables this source configuration selects.
    pub fn scope(&self) -> SchemaScope {
        SchemaScope {
            catalog: self.catalog.clone(),
            schema: if self.schema.is_empty() {
                None
            } else {
                Some(self.schema.clone())
            },
            table_pattern: self.table_pattern.clone(),
            table_types: self.table_types.clone(),
        }
    }
}

/// Naming and typing rule options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Use primitive types for NOT NULL columns (default: true).
    #[serde(default = "default_true")]
    pub primitive_when_not_null: bool,

    /// Table name prefixes stripped before deriving class names.
    #[serde(default)]
    pub table_prefixes: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            primitive_when_not_null: true,
            table_prefixes: Vec::new(),
        }
    }
}

/// Model output options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output file (default: "repository.yaml").
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Output format; inferred from the path extension when unset.
    #[serde(default)]
    pub format: Option<FileFormat>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            format: None,
        }
    }
}

impl OutputConfig {
    /// Effective output format.
    pub fn format(&self) -> FileFormat {
        self.format
            .unwrap_or_else(|| FileFormat::from_path(&self.path))
    }
}

fn default_postgres() -> String {
    "postgres".to_string()
}

fn default_pg_port() -> u16 {
    5432
}

fn default_public_schema() -> String {
    "public".to_string()
}

fn default_table_pattern() -> String {
    "%".to_string()
}

fn default_table_types() -> Vec<String> {
    vec!["TABLE".to_string(), "VIEW".to_string()]
}

fn default_disable() -> String {
    "disable".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_path() -> PathBuf {
    PathBuf::from("repository.yaml")
}
