//! Error types for the repository model library.

use thiserror::Error;

/// Exit code for configuration errors (bad YAML, missing fields).
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for connection failures.
pub const EXIT_CONNECTION_ERROR: u8 = 2;
/// Exit code for metadata extraction failures.
pub const EXIT_EXTRACTION_ERROR: u8 = 3;
/// Exit code for file I/O failures.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for model assembly.
///
/// Only fatal conditions are represented here. Per-column naming and typing
/// problems are absorbed by the builders and never surface as a `RepoError`.
#[derive(Error, Debug)]
pub enum RepoError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Metadata source query error
    #[error("Metadata source error: {0}")]
    Source(#[from] tokio_postgres::Error),

    /// Connection could not be acquired or released
    #[error("Connection error: {message}\n  Context: {context}")]
    Connection { message: String, context: String },

    /// Table enumeration or descriptor loading failed
    #[error("Schema extraction failed: {0}")]
    SchemaExtraction(String),

    /// Metadata snapshot file is unusable
    #[error("Snapshot error: {0}")]
    Snapshot(String),

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RepoError {
    /// Create a Connection error with context about where it occurred
    pub fn connection(message: impl ToString, context: impl Into<String>) -> Self {
        RepoError::Connection {
            message: message.to_string(),
            context: context.into(),
        }
    }

    /// Process exit code for this error category.
    pub fn exit_code(&self) -> u8 {
        match self {
            RepoError::Config(_) | RepoError::Yaml(_) => EXIT_CONFIG_ERROR,
            RepoError::Connection { .. } => EXIT_CONNECTION_ERROR,
            RepoError::Source(_) | RepoError::SchemaExtraction(_) | RepoError::Snapshot(_) => {
                EXIT_EXTRACTION_ERROR
            }
            RepoError::Io(_) | RepoError::Json(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for repository model operations.
pub type Result<T> = std::result::Result<T, RepoError>;
