//! Builds model entities from raw table descriptors.

use crate::core::DbTable;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::model::{Entity, RepositoryModel, PLACEHOLDER_ABSENT, PLACEHOLDER_FAILED};
use crate::rules::{RepositoryRules, RuleKind};

use super::{ColumnBuilder, ForeignKeyBuilder};

/// Maps one [`DbTable`] to one model [`Entity`] and registers it.
pub struct EntityBuilder<'a> {
    rules: &'a dyn RepositoryRules,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> EntityBuilder<'a> {
    pub fn new(rules: &'a dyn RepositoryRules, sink: &'a dyn DiagnosticSink) -> Self {
        Self { rules, sink }
    }

    /// Build the entity for `table`, store it in `model` and return it.
    ///
    /// A later column or foreign key with an already-seen name replaces the
    /// earlier one in place. The same holds for entities; replacing one
    /// already in `model` is reported as [`Diagnostic::EntityReplaced`].
    pub fn build<'m>(&self, model: &'m mut RepositoryModel, table: &DbTable) -> &'m Entity {
        let mut entity = Entity::new(table.name.clone());
        entity.class_name = self.class_name(&table.name);
        entity.catalog = table.catalog.clone();
        entity.schema = table.schema.clone();
        entity.database_type = table.table_type.clone();

        let columns = ColumnBuilder::new(self.rules, self.sink);
        for raw in &table.columns {
            entity.store_column(columns.build(raw));
        }

        for raw in &table.foreign_keys {
            let foreign_key = ForeignKeyBuilder.build(raw);
            let first = foreign_key.columns.first();
            self.sink.emit(Diagnostic::ForeignKeyMapped {
                entity: entity.name.clone(),
                name: foreign_key.name.clone(),
                referenced_table: foreign_key.referenced_table().map(str::to_string),
                columns: foreign_key.columns.len(),
                update_rule: first.map(|c| c.update_rule_code),
                delete_rule: first.map(|c| c.delete_rule_code),
            });
            entity.store_foreign_key(foreign_key);
        }

        if let Some(previous) = model.entity(&entity.name) {
            self.sink.emit(Diagnostic::EntityReplaced {
                entity: entity.name.clone(),
                previous_schema: previous.schema.clone(),
                schema: entity.schema.clone(),
            });
        }

        self.sink.emit(Diagnostic::EntityStored {
            entity: entity.name.clone(),
            columns: entity.columns.len(),
            foreign_keys: entity.foreign_keys.len(),
            primary_key: entity
                .primary_key_columns()
                .map(|c| c.database_name.clone())
                .collect(),
        });

        model.store_entity(entity)
    }

    fn class_name(&self, table_name: &str) -> String {
        match self.rules.entity_class_name(table_name) {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => PLACEHOLDER_ABSENT.to_string(),
            Err(e) => {
                self.sink.emit(Diagnostic::RuleFailed {
                    rule: RuleKind::EntityClassName,
                    subject: table_name.to_string(),
                    reason: e.to_string(),
                });
                PLACEHOLDER_FAILED.to_string()
            }
        }
    }
}
