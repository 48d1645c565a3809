//! Builds model columns from raw column descriptors.

use crate::classify;
use crate::core::DbColumn;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::model::{Column, PLACEHOLDER_ABSENT, PLACEHOLDER_FAILED};
use crate::rules::{java_types, RepositoryRules, RuleKind, RuleResult};

/// Maps one [`DbColumn`] to one model [`Column`].
///
/// Building never fails. Rule failures are reported to the sink and replaced
/// by `"???"`; rules that answer nothing give `"null"`.
pub struct ColumnBuilder<'a> {
    rules: &'a dyn RepositoryRules,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> ColumnBuilder<'a> {
    pub fn new(rules: &'a dyn RepositoryRules, sink: &'a dyn DiagnosticSink) -> Self {
        Self { rules, sink }
    }

    pub fn build(&self, raw: &DbColumn) -> Column {
        let attribute_type = self.derive(
            RuleKind::AttributeType,
            &raw.name,
            self.rules
                .attribute_type(&raw.type_name, raw.type_code, raw.not_null),
        );
        let attribute_name = self.derive(
            RuleKind::AttributeName,
            &raw.name,
            self.rules.attribute_name(&raw.name),
        );

        let long_text = classify::is_long_text(&raw.type_name, raw.type_code);
        let date_type = classify::date_type(&raw.type_name, raw.type_code);

        let mut column = Column {
            database_name: raw.name.clone(),
            database_type_name: raw.type_name.clone(),
            jdbc_type_code: raw.type_code,
            database_size: raw.size,
            database_not_null: raw.not_null,
            database_default_value: raw.default_value.clone(),
            database_position: raw.ordinal_position,
            database_comment: raw.comment.clone(),
            default_value: java_types::default_value_for(&attribute_type).map(str::to_string),
            attribute_name,
            attribute_type,
            long_text,
            date_type,
            primary_key: raw.in_primary_key,
            foreign_key: raw.used_in_foreign_key > 0,
            auto_incremented: raw.auto_increment,
            label: self.hint(
                RuleKind::GuiLabel,
                &raw.name,
                self.rules.gui_label(&raw.name),
            ),
            input_type: self.hint(
                RuleKind::GuiInputType,
                &raw.name,
                self.rules.gui_input_type(&raw.name, raw.type_code),
            ),
            ..Default::default()
        };

        if !column.is_primitive_type() {
            if raw.not_null {
                column.not_null = true;
                column.not_empty = true;
            }
            if column.is_string_type() {
                column.max_length = Some(raw.size.to_string());
            }
        }

        self.sink.emit(Diagnostic::ColumnMapped {
            column: raw.name.clone(),
            type_code: raw.type_code,
            native_type: raw.type_name.clone(),
            attribute_name: column.attribute_name.clone(),
            attribute_type: column.attribute_type.clone(),
            degraded: column.is_degraded(),
        });

        column
    }

    /// Name or type derivation with placeholder substitution.
    fn derive(&self, rule: RuleKind, subject: &str, result: RuleResult<String>) -> String {
        match result {
            Ok(Some(value)) if !value.is_empty() => value,
            Ok(_) => PLACEHOLDER_ABSENT.to_string(),
            Err(e) => {
                self.report(rule, subject, e.to_string());
                PLACEHOLDER_FAILED.to_string()
            }
        }
    }

    /// UI hint derivation; failures leave the hint unset.
    fn hint(&self, rule: RuleKind, subject: &str, result: RuleResult<String>) -> Option<String> {
        match result {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                self.report(rule, subject, e.to_string());
                None
            }
        }
    }

    fn report(&self, rule: RuleKind, subject: &str, reason: String) {
        self.sink.emit(Diagnostic::RuleFailed {
            rule,
            subject: subject.to_string(),
            reason,
        });
    }
}
