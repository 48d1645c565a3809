//! Diagnostic events emitted while building the model.
//!
//! Builders never log directly. They report to a [`DiagnosticSink`] passed in
//! by the caller, so a run can forward events to `tracing` ([`TracingSink`])
//! or record them for inspection ([`CollectingSink`]).

use std::sync::Mutex;

use tracing::{debug, warn};

use crate::core::jdbc::{rules, types};
use crate::rules::RuleKind;

/// One event raised by a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A column was mapped. `degraded` is set when a placeholder was used.
    ColumnMapped {
        column: String,
        type_code: i32,
        native_type: String,
        attribute_name: String,
        attribute_type: String,
        degraded: bool,
    },

    /// A rule failed; the builder substituted a default and continued.
    RuleFailed {
        rule: RuleKind,
        subject: String,
        reason: String,
    },

    /// A foreign key was mapped. Rule codes come from its first key column.
    ForeignKeyMapped {
        entity: String,
        name: String,
        referenced_table: Option<String>,
        columns: usize,
        update_rule: Option<i32>,
        delete_rule: Option<i32>,
    },

    /// An entity with the same name was already in the model and has been
    /// replaced. Happens when tables from several schemas share a name.
    EntityReplaced {
        entity: String,
        previous_schema: Option<String>,
        schema: Option<String>,
    },

    /// An entity was stored in the model.
    EntityStored {
        entity: String,
        columns: usize,
        foreign_keys: usize,
        primary_key: Vec<String>,
    },
}

/// Receiver for builder diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::ColumnMapped {
                column,
                type_code,
                native_type,
                attribute_name,
                attribute_type,
                degraded,
            } => {
                if degraded {
                    warn!(
                        "Column {} ({} '{}') mapped with placeholder: {} {}",
                        column,
                        types::name(type_code),
                        native_type,
                        attribute_type,
                        attribute_name
                    );
                } else {
                    debug!(
                        "Column {} ({} '{}') -> {} {}",
                        column,
                        types::name(type_code),
                        native_type,
                        attribute_type,
                        attribute_name
                    );
                }
            }
            Diagnostic::RuleFailed {
                rule,
                subject,
                reason,
            } => {
                warn!("Cannot derive {} for '{}': {}", rule, subject, reason);
            }
            Diagnostic::ForeignKeyMapped {
                entity,
                name,
                referenced_table,
                columns,
                update_rule,
                delete_rule,
            } => {
                debug!(
                    "Foreign key {}.{} -> {} ({} columns, on update {}, on delete {})",
                    entity,
                    name,
                    referenced_table.as_deref().unwrap_or("?"),
                    columns,
                    update_rule.map_or("-", rules::name),
                    delete_rule.map_or("-", rules::name)
                );
            }
            Diagnostic::EntityReplaced {
                entity,
                previous_schema,
                schema,
            } => {
                warn!(
                    "Entity {} from schema {} replaces the one from schema {}",
                    entity,
                    schema.as_deref().unwrap_or("?"),
                    previous_schema.as_deref().unwrap_or("?")
                );
            }
            Diagnostic::EntityStored {
                entity,
                columns,
                foreign_keys,
                primary_key,
            } => {
                debug!(
                    "Entity {} stored ({} columns, {} foreign keys, primary key [{}])",
                    entity,
                    columns,
                    foreign_keys,
                    primary_key.join(", ")
                );
            }
        }
    }
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<Diagnostic> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Rule failures recorded so far.
    pub fn rule_failures(&self) -> Vec<Diagnostic> {
        self.events()
            .into_iter()
            .filter(|d| matches!(d, Diagnostic::RuleFailed { .. }))
            .collect()
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match self.events.lock() {
            Ok(mut events) => events.push(diagnostic),
            Err(poisoned) => poisoned.into_inner().push(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collecting_sink_keeps_order() {
        let sink = CollectingSink::new();
        sink.emit(Diagnostic::RuleFailed {
            rule: RuleKind::AttributeName,
            subject: "BAD".to_string(),
            reason: "boom".to_string(),
        });
        sink.emit(Diagnostic::EntityStored {
            entity: "T".to_string(),
            columns: 0,
            foreign_keys: 0,
            primary_key: Vec::new(),
        });

        let events = sink.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], Diagnostic::RuleFailed { .. }));
        assert_eq!(sink.rule_failures().len(), 1);
    }

    #[test]
    fn test_tracing_sink_accepts_all_events() {
        let sink = TracingSink;
        sink.emit(Diagnostic::ColumnMapped {
            column: "ID".to_string(),
            type_code: 4,
            native_type: "int4".to_string(),
            attribute_name: "id".to_string(),
            attribute_type: "int".to_string(),
            degraded: false,
        });
        sink.emit(Diagnostic::RuleFailed {
            rule: RuleKind::GuiLabel,
            subject: "ID".to_string(),
            reason: "boom".to_string(),
        });
        sink.emit(Diagnostic::ForeignKeyMapped {
            entity: "ORDERS".to_string(),
            name: "FK_ORDER_CUSTOMER".to_string(),
            referenced_table: Some("CUSTOMER".to_string()),
            columns: 2,
            update_rule: Some(rules::NO_ACTION),
            delete_rule: Some(rules::CASCADE),
        });
        sink.emit(Diagnostic::EntityReplaced {
            entity: "USERS".to_string(),
            previous_schema: Some("audit".to_string()),
            schema: Some("public".to_string()),
        });
    }
}
