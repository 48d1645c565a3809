//! The repository model handed to the code generation stage.
//!
//! - [`Entity`]: one table or view
//! - [`Column`]: raw and derived column attributes
//! - [`ForeignKey`]: ordered key-column mappings
//!
//! A model is built once per run by the assembler and is read-only for the
//! consumers that receive it.

mod column;
mod entity;
mod foreign_key;

pub use column::{Column, DateType, PLACEHOLDER_ABSENT, PLACEHOLDER_FAILED};
pub use entity::Entity;
pub use foreign_key::{ForeignKey, ForeignKeyColumn};

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::{self, FileFormat};

/// Complete set of entities produced by one assembly run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositoryModel {
    /// Entities keyed by table name, in metadata source order.
    pub entities: IndexMap<String, Entity>,
}

/// Counts describing a model, for reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub entities: usize,
    pub columns: usize,
    pub foreign_keys: usize,
    pub degraded_columns: usize,
}

impl RepositoryModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an entity under its name, replacing any earlier one.
    ///
    /// Returns a reference to the stored entity.
    pub fn store_entity(&mut self, entity: Entity) -> &Entity {
        let name = entity.name.clone();
        let (index, _) = self.entities.insert_full(name, entity);
        &self.entities[index]
    }

    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities.get(name)
    }

    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// `(entity, column)` pairs whose derived name or type is a placeholder.
    ///
    /// These need a human look before code is generated from them.
    pub fn degraded_columns(&self) -> Vec<(&str, &Column)> {
        self.entities()
            .flat_map(|e| e.degraded_columns().map(move |c| (e.name.as_str(), c)))
            .collect()
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            entities: self.len(),
            columns: self.entities().map(|e| e.columns.len()).sum(),
            foreign_keys: self.entities().map(|e| e.foreign_keys.len()).sum(),
            degraded_columns: self.degraded_columns().len(),
        }
    }

    /// Save the model to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P, format: FileFormat) -> Result<()> {
        format::write_file(path.as_ref(), format, self)
    }

    /// Load a previously saved model (format from the file extension).
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        format::read_file(path.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_model() -> RepositoryModel {
        let mut model = RepositoryModel::new();

        let mut customer = Entity::new("CUSTOMER");
        customer.class_name = "Customer".to_string();
        customer.store_column(Column {
            database_name: "ID".to_string(),
            attribute_name: "id".to_string(),
            attribute_type: "int".to_string(),
            date_type: Some(DateType::DateOnly),
            ..Default::default()
        });
        customer.store_column(Column {
            database_name: "BAD".to_string(),
            attribute_name: PLACEHOLDER_FAILED.to_string(),
            attribute_type: PLACEHOLDER_FAILED.to_string(),
            ..Default::default()
        });
        model.store_entity(customer);

        let mut order = Entity::new("ORDERS");
        order.class_name = "Orders".to_string();
        order.store_foreign_key(ForeignKey::new("FK_ORDERS_CUSTOMER"));
        model.store_entity(order);

        model
    }

    #[test]
    fn test_store_entity_returns_stored() {
        let mut model = RepositoryModel::new();
        let stored = model.store_entity(Entity::new("A"));
        assert_eq!(stored.name, "A");
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn test_summary_and_degraded() {
        let model = sample_model();
        let summary = model.summary();
        assert_eq!(summary.entities, 2);
        assert_eq!(summary.columns, 2);
        assert_eq!(summary.foreign_keys, 1);
        assert_eq!(summary.degraded_columns, 1);

        let degraded = model.degraded_columns();
        assert_eq!(degraded[0].0, "CUSTOMER");
        assert_eq!(degraded[0].1.database_name, "BAD");
    }

    #[test]
    fn test_save_and_load_keep_order() {
        let model = sample_model();
        let dir = tempfile::tempdir().unwrap();

        for file in ["model.yaml", "model.json"] {
            let path = dir.path().join(file);
            model.save(&path, FileFormat::from_path(&path)).unwrap();
            let loaded = RepositoryModel::load(&path).unwrap();
            assert_eq!(loaded, model);

            let names: Vec<&str> = loaded.entities().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["CUSTOMER", "ORDERS"]);
        }
    }
}
