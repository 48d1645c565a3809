//! Model foreign key.

use serde::{Deserialize, Serialize};

/// Foreign key of an [`Entity`](super::Entity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKey {
    /// Constraint name.
    pub name: String,

    /// Key columns, in metadata source order.
    pub columns: Vec<ForeignKeyColumn>,
}

impl ForeignKey {
    /// Create an empty foreign key with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Append a key column. Order is kept as given.
    pub fn store_foreign_key_column(&mut self, column: ForeignKeyColumn) {
        self.columns.push(column);
    }

    /// Referenced table, taken from the first key column.
    pub fn referenced_table(&self) -> Option<&str> {
        self.columns.first().map(|c| c.table_ref.as_str())
    }
}

/// One column mapping of a foreign key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForeignKeyColumn {
    pub sequence: i32,
    pub table_name: String,
    pub column_name: String,
    pub table_ref: String,
    pub column_ref: String,
    pub update_rule_code: i32,
    pub delete_rule_code: i32,
    pub deferrable_code: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_keeps_insertion_order() {
        let mut fk = ForeignKey::new("FK_X");
        for seq in [2, 1, 3] {
            fk.store_foreign_key_column(ForeignKeyColumn {
                sequence: seq,
                table_ref: "PARENT".to_string(),
                ..Default::default()
            });
        }
        let sequences: Vec<i32> = fk.columns.iter().map(|c| c.sequence).collect();
        assert_eq!(sequences, vec![2, 1, 3]);
        assert_eq!(fk.referenced_table(), Some("PARENT"));
    }

    #[test]
    fn test_empty_key_has_no_referenced_table() {
        assert!(ForeignKey::new("FK_EMPTY").referenced_table().is_none());
    }
}
