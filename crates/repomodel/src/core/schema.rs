//! Raw metadata descriptors as reported by a metadata source.
//!
//! These types mirror what a database-introspection API hands back for
//! tables, columns, and foreign keys. They carry no derived information;
//! the builders turn them into model entities.

use serde::{Deserialize, Serialize};

/// Table (or view) descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbTable {
    /// Table name.
    pub name: String,

    /// Catalog name, when the source reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Schema name, when the source reports one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Database object type ("TABLE", "VIEW", ...).
    pub table_type: String,

    /// Columns in metadata source order.
    pub columns: Vec<DbColumn>,

    /// Foreign keys in metadata source order.
    pub foreign_keys: Vec<DbForeignKey>,
}

impl DbTable {
    /// Get the schema-qualified table name.
    pub fn full_name(&self) -> String {
        match &self.schema {
            Some(schema) if !schema.is_empty() => format!("{}.{}", schema, self.name),
            _ => self.name.clone(),
        }
    }
}

/// Column descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbColumn {
    /// Column name.
    pub name: String,

    /// Native type name (e.g., "varchar", "int4").
    pub type_name: String,

    /// JDBC-style type code (see [`crate::core::jdbc::types`]).
    pub type_code: i32,

    /// Declared size (max characters, decimal precision, or display width).
    pub size: i32,

    /// Whether the column is declared NOT NULL.
    pub not_null: bool,

    /// Native default value expression.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Ordinal position (1-based).
    pub ordinal_position: i32,

    /// Column comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    /// Whether the column belongs to the primary key.
    pub in_primary_key: bool,

    /// Number of foreign keys this column participates in.
    pub used_in_foreign_key: i32,

    /// Whether the column is auto-incremented (identity, serial, ...).
    pub auto_increment: bool,
}

/// Foreign key descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbForeignKey {
    /// Constraint name.
    pub name: String,

    /// Key columns in metadata source order.
    pub columns: Vec<DbForeignKeyColumn>,
}

/// One column mapping of a (possibly multi-column) foreign key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DbForeignKeyColumn {
    /// Position within the key (1-based).
    pub sequence: i32,

    /// Referencing table.
    pub fk_table: String,

    /// Referencing column.
    pub fk_column: String,

    /// Referenced table.
    pub pk_table: String,

    /// Referenced column.
    pub pk_column: String,

    /// JDBC update rule code.
    pub update_rule: i32,

    /// JDBC delete rule code.
    pub delete_rule: i32,

    /// JDBC deferrability code.
    pub deferrability: i32,
}
