//! Test fixtures shared by the builder and assembler tests.

use std::collections::{HashMap, HashSet};

use crate::core::{DbColumn, DbForeignKey, DbForeignKeyColumn, DbTable};
use crate::rules::{RepositoryRules, RuleError, RuleResult, StandardRules};

pub fn db_column(name: &str, type_name: &str, type_code: i32, size: i32, not_null: bool) -> DbColumn {
    DbColumn {
        name: name.to_string(),
        type_name: type_name.to_string(),
        type_code,
        size,
        not_null,
        ..Default::default()
    }
}

pub fn db_table(name: &str, columns: Vec<DbColumn>) -> DbTable {
    DbTable {
        name: name.to_string(),
        schema: Some("public".to_string()),
        table_type: "TABLE".to_string(),
        columns,
        ..Default::default()
    }
}

pub fn fk_column(sequence: i32, fk: (&str, &str), pk: (&str, &str)) -> DbForeignKeyColumn {
    DbForeignKeyColumn {
        sequence,
        fk_table: fk.0.to_string(),
        fk_column: fk.1.to_string(),
        pk_table: pk.0.to_string(),
        pk_column: pk.1.to_string(),
        update_rule: 3,
        delete_rule: 0,
        deferrability: 7,
    }
}

pub fn db_foreign_key(name: &str, columns: Vec<DbForeignKeyColumn>) -> DbForeignKey {
    DbForeignKey {
        name: name.to_string(),
        columns,
    }
}

/// Standard rules with scripted failures for selected names.
#[derive(Default)]
pub struct ScriptedRules {
    inner: StandardRules,
    name_failures: HashMap<String, RuleError>,
    type_failures: HashMap<String, RuleError>,
    empty_names: HashSet<String>,
    hint_failures: HashSet<String>,
    class_failures: HashSet<String>,
}

impl ScriptedRules {
    pub fn fail_name(mut self, column: &str, error: RuleError) -> Self {
        self.name_failures.insert(column.to_string(), error);
        self
    }

    /// Fails the type rule for every column of the given native type.
    pub fn fail_type(mut self, native_type: &str, error: RuleError) -> Self {
        self.type_failures.insert(native_type.to_string(), error);
        self
    }

    pub fn empty_name(mut self, column: &str) -> Self {
        self.empty_names.insert(column.to_string());
        self
    }

    pub fn fail_hints(mut self, column: &str) -> Self {
        self.hint_failures.insert(column.to_string());
        self
    }

    pub fn fail_class(mut self, table: &str) -> Self {
        self.class_failures.insert(table.to_string());
        self
    }
}

impl RepositoryRules for ScriptedRules {
    fn attribute_type(&self, native_type: &str, type_code: i32, not_null: bool) -> RuleResult<String> {
        if let Some(error) = self.type_failures.get(native_type) {
            return Err(error.clone());
        }
        self.inner.attribute_type(native_type, type_code, not_null)
    }

    fn attribute_name(&self, column_name: &str) -> RuleResult<String> {
        if let Some(error) = self.name_failures.get(column_name) {
            return Err(error.clone());
        }
        if self.empty_names.contains(column_name) {
            return Ok(Some(String::new()));
        }
        self.inner.attribute_name(column_name)
    }

    fn entity_class_name(&self, table_name: &str) -> RuleResult<String> {
        if self.class_failures.contains(table_name) {
            return Err(RuleError::Failed(format!("no class for {}", table_name)));
        }
        self.inner.entity_class_name(table_name)
    }

    fn gui_label(&self, column_name: &str) -> RuleResult<String> {
        if self.hint_failures.contains(column_name) {
            return Err(RuleError::Failed("label".into()));
        }
        self.inner.gui_label(column_name)
    }

    fn gui_input_type(&self, column_name: &str, type_code: i32) -> RuleResult<String> {
        if self.hint_failures.contains(column_name) {
            return Err(RuleError::Failed("input type".into()));
        }
        self.inner.gui_input_type(column_name, type_code)
    }
}
