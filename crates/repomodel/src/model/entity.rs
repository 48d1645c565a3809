//! Model entity: one database table or view.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::foreign_key::ForeignKey;

/// One table or view of the repository model.
///
/// Columns and foreign keys are keyed by name and keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Entity {
    /// Table name.
    pub name: String,

    /// Target-language class name.
    pub class_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Database object type ("TABLE", "VIEW", ...).
    pub database_type: String,

    pub columns: IndexMap<String, Column>,

    pub foreign_keys: IndexMap<String, ForeignKey>,
}

impl Entity {
    /// Create an empty entity for the given table name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Store a column under its database name.
    ///
    /// A column with the same name replaces the earlier one in place.
    pub fn store_column(&mut self, column: Column) {
        self.columns.insert(column.database_name.clone(), column);
    }

    /// Store a foreign key under its name, replacing any earlier one.
    pub fn store_foreign_key(&mut self, foreign_key: ForeignKey) {
        self.foreign_keys.insert(foreign_key.name.clone(), foreign_key);
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKey> {
        self.foreign_keys.get(name)
    }

    /// Columns in the primary key, in table order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().filter(|c| c.primary_key)
    }

    /// Columns with placeholder names or types.
    pub fn degraded_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.values().filter(|c| c.is_degraded())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, attribute: &str) -> Column {
        Column {
            database_name: name.to_string(),
            attribute_name: attribute.to_string(),
            attribute_type: "int".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_duplicate_column_overwrites_in_place() {
        let mut entity = Entity::new("T");
        entity.store_column(column("A", "first"));
        entity.store_column(column("B", "b"));
        entity.store_column(column("A", "second"));

        let names: Vec<&str> = entity.columns.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(entity.column("A").unwrap().attribute_name, "second");
    }

    #[test]
    fn test_primary_key_columns() {
        let mut entity = Entity::new("T");
        let mut id = column("ID", "id");
        id.primary_key = true;
        entity.store_column(column("NAME", "name"));
        entity.store_column(id);

        let pk: Vec<&str> = entity
            .primary_key_columns()
            .map(|c| c.database_name.as_str())
            .collect();
        assert_eq!(pk, vec!["ID"]);
    }
}
