//! Model column: raw database attributes plus derived attributes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::rules::java_types;

/// Placeholder kept when a naming/type rule failed.
pub const PLACEHOLDER_FAILED: &str = "???";

/// Placeholder used when a naming/type rule produced nothing.
pub const PLACEHOLDER_ABSENT: &str = "null";

/// Date/time granularity of a temporal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateType {
    /// Date without time of day.
    #[serde(rename = "D")]
    DateOnly,
    /// Time of day without date.
    #[serde(rename = "T")]
    TimeOnly,
    /// Date and time of day.
    #[serde(rename = "DT")]
    DateAndTime,
}

impl DateType {
    /// Short code used in persisted models.
    pub fn as_str(&self) -> &'static str {
        match self {
            DateType::DateOnly => "D",
            DateType::TimeOnly => "T",
            DateType::DateAndTime => "DT",
        }
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One column of an [`Entity`](super::Entity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Column {
    // ----- Raw database attributes -----
    /// Column name in the database.
    pub database_name: String,

    /// Native type name.
    pub database_type_name: String,

    /// JDBC-style type code.
    pub jdbc_type_code: i32,

    /// Declared size.
    pub database_size: i32,

    /// Declared NOT NULL.
    pub database_not_null: bool,

    /// Native default value expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_default_value: Option<String>,

    /// Ordinal position in the table.
    pub database_position: i32,

    /// Column comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_comment: Option<String>,

    // ----- Derived attributes -----
    /// Target-language attribute name.
    pub attribute_name: String,

    /// Target-language type name.
    pub attribute_type: String,

    /// Default value for primitive target types.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Large character/binary content.
    #[serde(skip_serializing_if = "is_false")]
    pub long_text: bool,

    /// Temporal subtype, for date/time columns only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_type: Option<DateType>,

    /// Member of the primary key.
    pub primary_key: bool,

    /// Member of at least one foreign key.
    pub foreign_key: bool,

    /// Auto-incremented by the database.
    pub auto_incremented: bool,

    /// UI label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// UI input type hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,

    // ----- Validation flags -----
    /// Reference type that must not be null.
    #[serde(skip_serializing_if = "is_false")]
    pub not_null: bool,

    /// Must not be empty.
    #[serde(skip_serializing_if = "is_false")]
    pub not_empty: bool,

    /// Maximum length, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<String>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Column {
    /// Whether the target type is a primitive (cannot hold null).
    pub fn is_primitive_type(&self) -> bool {
        java_types::is_primitive(&self.attribute_type)
    }

    /// Whether the target type is the string type.
    pub fn is_string_type(&self) -> bool {
        java_types::is_string(&self.attribute_type)
    }

    /// Whether the derived name or type is a placeholder.
    pub fn is_degraded(&self) -> bool {
        is_placeholder(&self.attribute_name) || is_placeholder(&self.attribute_type)
    }
}

fn is_placeholder(value: &str) -> bool {
    value == PLACEHOLDER_FAILED || value == PLACEHOLDER_ABSENT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_type_codes() {
        assert_eq!(DateType::DateOnly.as_str(), "D");
        assert_eq!(DateType::TimeOnly.to_string(), "T");
        assert_eq!(
            serde_json::to_string(&DateType::DateAndTime).unwrap(),
            "\"DT\""
        );
    }

    #[test]
    fn test_degraded_detection() {
        let mut column = Column {
            attribute_name: "custId".to_string(),
            attribute_type: "int".to_string(),
            ..Default::default()
        };
        assert!(!column.is_degraded());
        assert!(column.is_primitive_type());

        column.attribute_name = PLACEHOLDER_FAILED.to_string();
        assert!(column.is_degraded());

        column.attribute_name = "custId".to_string();
        column.attribute_type = PLACEHOLDER_ABSENT.to_string();
        assert!(column.is_degraded());
        assert!(!column.is_primitive_type());
    }

    #[test]
    fn test_unset_flags_are_not_serialized() {
        let column = Column {
            database_name: "ID".to_string(),
            attribute_name: "id".to_string(),
            attribute_type: "int".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_string(&column).unwrap();
        assert!(!json.contains("long_text"));
        assert!(!json.contains("date_type"));
        assert!(!json.contains("max_length"));
    }
}
