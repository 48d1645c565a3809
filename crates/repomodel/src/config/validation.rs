//! Configuration validation.

use super::Config;
use crate::error::{RepoError, Result};
use crate::source::SslMode;

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    let source = &config.source;

    match source.r#type.to_lowercase().as_str() {
        "postgres" | "postgresql" | "pg" => {
            if source.host.is_empty() {
                return Err(RepoError::Config("source.host is required".into()));
            }
            if source.database.is_empty() {
                return Err(RepoError::Config("source.database is required".into()));
            }
            if source.user.is_empty() {
                return Err(RepoError::Config("source.user is required".into()));
            }
            SslMode::parse(&source.ssl_mode)?;
        }
        "snapshot" | "file" => {
            if source.path.is_none() {
                return Err(RepoError::Config(
                    "source.path is required for snapshot sources".into(),
                ));
            }
        }
        other => {
            return Err(RepoError::Config(format!(
                "Unknown source type: '{}'. Supported types: postgres, snapshot",
                other
            )));
        }
    }

    if source.table_pattern.is_empty() {
        return Err(RepoError::Config(
            "source.table_pattern cannot be empty (use '%' for all tables)".into(),
        ));
    }

    if config.output.path.as_os_str().is_empty() {
        return Err(RepoError::Config("output.path cannot be empty".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OutputConfig, RulesConfig, SourceConfig};

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                r#type: "postgres".to_string(),
                host: "localhost".to_string(),
                port: 5432,
                database: "shop".to_string(),
                user: "app".to_string(),
                password: "password".to_string(),
                schema: "public".to_string(),
                catalog: None,
                table_pattern: "%".to_string(),
                table_types: vec!["TABLE".to_string()],
                ssl_mode: "disable".to_string(),
                path: None,
            },
            rules: RulesConfig::default(),
            output: OutputConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_missing_source_host() {
        let mut config = valid_config();
        config.source.host = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_unknown_source_type() {
        let mut config = valid_config();
        config.source.r#type = "oracle".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_invalid_ssl_mode() {
        let mut config = valid_config();
        config.source.ssl_mode = "sometimes".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_snapshot_requires_path() {
        let mut config = valid_config();
        config.source.r#type = "snapshot".to_string();
        assert!(validate(&config).is_err());

        config.source.path = Some("meta.yaml".into());
        config.source.host = String::new();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_empty_table_pattern() {
        let mut config = valid_config();
        config.source.table_pattern = String::new();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_source_config_debug_redacts_password() {
        let mut config = valid_config();
        config.source.password = "super_secret_password_123".to_string();
        let debug_output = format!("{:?}", config.source);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password_123"));
    }
}
