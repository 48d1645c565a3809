//! Builds model foreign keys from raw foreign-key descriptors.

use crate::core::DbForeignKey;
use crate::model::{ForeignKey, ForeignKeyColumn};

/// Maps one [`DbForeignKey`] to one model [`ForeignKey`], keeping column order.
#[derive(Debug, Default, Clone, Copy)]
pub struct ForeignKeyBuilder;

impl ForeignKeyBuilder {
    pub fn build(&self, raw: &DbForeignKey) -> ForeignKey {
        let mut foreign_key = ForeignKey::new(raw.name.clone());
        for column in &raw.columns {
            foreign_key.store_foreign_key_column(ForeignKeyColumn {
                sequence: column.sequence,
                table_name: column.fk_table.clone(),
                column_name: column.fk_column.clone(),
                table_ref: column.pk_table.clone(),
                column_ref: column.pk_column.clone(),
                update_rule_code: column.update_rule,
                delete_rule_code: column.delete_rule,
                deferrable_code: column.deferrability,
            });
        }
        foreign_key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::testing::{db_foreign_key, fk_column};
    use crate::core::jdbc::{deferrability, rules};

    #[test]
    fn test_two_column_key_keeps_order_and_content() {
        let raw = db_foreign_key(
            "FK_ORDER_CUSTOMER",
            vec![
                fk_column(1, ("ORDER", "CUST_ID"), ("CUSTOMER", "ID")),
                fk_column(2, ("ORDER", "CUST_TYPE"), ("CUSTOMER", "TYPE")),
            ],
        );

        let fk = ForeignKeyBuilder.build(&raw);
        assert_eq!(fk.name, "FK_ORDER_CUSTOMER");
        assert_eq!(fk.columns.len(), 2);
        assert_eq!(fk.referenced_table(), Some("CUSTOMER"));

        let expected = [(1, "CUST_ID", "ID"), (2, "CUST_TYPE", "TYPE")];
        for (column, (sequence, name, referenced)) in fk.columns.iter().zip(expected) {
            assert_eq!(column.sequence, sequence);
            assert_eq!(column.table_name, "ORDER");
            assert_eq!(column.column_name, name);
            assert_eq!(column.table_ref, "CUSTOMER");
            assert_eq!(column.column_ref, referenced);
            assert_eq!(column.update_rule_code, rules::NO_ACTION);
            assert_eq!(column.delete_rule_code, rules::CASCADE);
            assert_eq!(column.deferrable_code, deferrability::NOT_DEFERRABLE);
        }
    }

    #[test]
    fn test_source_order_is_not_resorted() {
        let raw = db_foreign_key(
            "FK_X",
            vec![
                fk_column(2, ("A", "B_ID"), ("B", "ID")),
                fk_column(1, ("A", "B_KEY"), ("B", "KEY")),
            ],
        );
        let fk = ForeignKeyBuilder.build(&raw);
        let sequences: Vec<i32> = fk.columns.iter().map(|c| c.sequence).collect();
        assert_eq!(sequences, vec![2, 1]);
    }

    #[test]
    fn test_zero_columns_is_legal() {
        let fk = ForeignKeyBuilder.build(&db_foreign_key("FK_EMPTY", vec![]));
        assert_eq!(fk.name, "FK_EMPTY");
        assert!(fk.columns.is_empty());
    }
}
