//! Naming and type rules.
//!
//! The builders ask a [`RepositoryRules`] implementation for every derived
//! name and type. Each answer is a [`RuleResult`]: a derived value, nothing
//! (`Ok(None)`), or a classified [`RuleError`]. Rules never substitute
//! placeholders themselves; the column and entity builders do that.

pub mod java_types;
mod standard;

pub use standard::StandardRules;

use std::fmt;

use thiserror::Error;

/// Why a rule could not derive a value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The rule has no mapping for this database type.
    #[error("unsupported type {native_type} (code {code})")]
    UnsupportedType { native_type: String, code: i32 },

    /// The database name cannot be turned into an identifier.
    #[error("cannot derive an identifier from '{0}'")]
    InvalidName(String),

    /// Any other rule failure.
    #[error("{0}")]
    Failed(String),
}

/// Outcome of one rule invocation.
pub type RuleResult<T> = std::result::Result<Option<T>, RuleError>;

/// Which rule was invoked, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleKind {
    AttributeType,
    AttributeName,
    EntityClassName,
    GuiLabel,
    GuiInputType,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleKind::AttributeType => "attribute type",
            RuleKind::AttributeName => "attribute name",
            RuleKind::EntityClassName => "entity class name",
            RuleKind::GuiLabel => "gui label",
            RuleKind::GuiInputType => "gui input type",
        };
        f.write_str(name)
    }
}

/// Derives target-language names and types from database metadata.
///
/// Implementations are pure: the same input gives the same answer.
pub trait RepositoryRules: Send + Sync {
    /// Target type for a column.
    fn attribute_type(&self, native_type: &str, type_code: i32, not_null: bool)
        -> RuleResult<String>;

    /// Target attribute name for a column.
    fn attribute_name(&self, column_name: &str) -> RuleResult<String>;

    /// Target class name for a table.
    fn entity_class_name(&self, table_name: &str) -> RuleResult<String>;

    /// UI label for a column.
    fn gui_label(&self, column_name: &str) -> RuleResult<String>;

    /// UI input type hint for a column.
    fn gui_input_type(&self, column_name: &str, type_code: i32) -> RuleResult<String>;
}
