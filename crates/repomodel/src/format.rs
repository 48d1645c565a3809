//! File formats for persisted models and metadata snapshots.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{RepoError, Result};

/// Structured file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Yaml,
    Json,
}

impl FileFormat {
    /// Infer the format from a file extension (`.json` → JSON, else YAML).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }

    /// Serialize a value to a string in this format.
    pub fn render<T: Serialize>(&self, value: &T) -> Result<String> {
        Ok(match self {
            FileFormat::Yaml => serde_yaml::to_string(value)?,
            FileFormat::Json => serde_json::to_string_pretty(value)?,
        })
    }

    /// Parse a value from a string in this format.
    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> Result<T> {
        Ok(match self {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Json => serde_json::from_str(content)?,
        })
    }
}

impl FromStr for FileFormat {
    type Err = RepoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            "json" => Ok(FileFormat::Json),
            other => Err(RepoError::Config(format!(
                "Invalid format '{}'. Valid values: yaml, json",
                other
            ))),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileFormat::Yaml => f.write_str("yaml"),
            FileFormat::Json => f.write_str("json"),
        }
    }
}

/// Write a value to `path` (atomic: temp file, then rename).
pub fn write_file<T: Serialize>(path: &Path, format: FileFormat, value: &T) -> Result<()> {
    let content = format.render(value)?;
    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, &content)?;
    std::fs::rename(&temp_path, path)?;
    Ok(())
}

/// Read a value from `path`, choosing the format from its extension.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    FileFormat::from_path(path).parse(&content)
}
