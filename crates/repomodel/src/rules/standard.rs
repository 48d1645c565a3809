//! Standard rules: JavaBean-style names and Java types.

use heck::{ToLowerCamelCase, ToTitleCase, ToUpperCamelCase};

use crate::config::RulesConfig;
use crate::core::jdbc::types;

use super::java_types::{self, BIG_DECIMAL, BYTE_ARRAY, DATE, OBJECT, STRING};
use super::{RepositoryRules, RuleError, RuleResult};

/// Java keywords that cannot be used as attribute names.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally",
    "float", "for", "goto", "if", "implements", "import", "instanceof", "int", "interface",
    "long", "native", "new", "package", "private", "protected", "public", "return", "short",
    "static", "strictfp", "super", "switch", "synchronized", "this", "throw", "throws",
    "transient", "try", "void", "volatile", "while", "true", "false", "null",
];

/// Default naming and typing policy.
#[derive(Debug, Clone, Default)]
pub struct StandardRules {
    config: RulesConfig,
}

impl StandardRules {
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// Primitive type for a type code, if the code maps to one.
    fn primitive_for(type_code: i32) -> Option<&'static str> {
        match type_code {
            types::BIT | types::BOOLEAN => Some("boolean"),
            types::TINYINT => Some("byte"),
            types::SMALLINT => Some("short"),
            types::INTEGER => Some("int"),
            types::BIGINT => Some("long"),
            types::REAL => Some("float"),
            types::FLOAT | types::DOUBLE => Some("double"),
            _ => None,
        }
    }

    /// Reference type for a type code without a primitive form.
    fn reference_for(type_code: i32) -> Option<&'static str> {
        match type_code {
            types::NUMERIC | types::DECIMAL => Some(BIG_DECIMAL),
            types::CHAR
            | types::VARCHAR
            | types::LONGVARCHAR
            | types::NCHAR
            | types::NVARCHAR
            | types::LONGNVARCHAR
            | types::CLOB
            | types::NCLOB
            | types::SQLXML => Some(STRING),
            types::DATE
            | types::TIME
            | types::TIMESTAMP
            | types::TIME_WITH_TIMEZONE
            | types::TIMESTAMP_WITH_TIMEZONE => Some(DATE),
            types::BINARY | types::VARBINARY | types::LONGVARBINARY | types::BLOB => {
                Some(BYTE_ARRAY)
            }
            types::OTHER | types::JAVA_OBJECT => Some(OBJECT),
            _ => None,
        }
    }

    /// Strip the first configured table prefix that leaves a non-empty name.
    fn strip_table_prefix<'a>(&self, table_name: &'a str) -> &'a str {
        for prefix in &self.config.table_prefixes {
            if prefix.is_empty() || table_name.len() <= prefix.len() {
                continue;
            }
            // Byte slicing is only safe on a char boundary.
            if !table_name.is_char_boundary(prefix.len()) {
                continue;
            }
            let (head, rest) = table_name.split_at(prefix.len());
            if head.eq_ignore_ascii_case(prefix) {
                return rest;
            }
        }
        table_name
    }
}

/// Turn a converted name into a legal identifier.
fn to_identifier(source: &str, converted: String) -> RuleResult<String> {
    if converted.is_empty() {
        return Err(RuleError::InvalidName(source.to_string()));
    }
    if converted.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(Some(format!("_{}", converted)));
    }
    Ok(Some(converted))
}

impl RepositoryRules for StandardRules {
    fn attribute_type(
        &self,
        _native_type: &str,
        type_code: i32,
        not_null: bool,
    ) -> RuleResult<String> {
        if let Some(primitive) = Self::primitive_for(type_code) {
            if not_null && self.config.primitive_when_not_null {
                return Ok(Some(primitive.to_string()));
            }
            return Ok(java_types::wrapper_for(primitive).map(str::to_string));
        }
        Ok(Self::reference_for(type_code).map(str::to_string))
    }

    fn attribute_name(&self, column_name: &str) -> RuleResult<String> {
        let name = to_identifier(column_name, column_name.to_lower_camel_case())?;
        Ok(name.map(|n| {
            if JAVA_KEYWORDS.contains(&n.as_str()) {
                format!("{}_", n)
            } else {
                n
            }
        }))
    }

    fn entity_class_name(&self, table_name: &str) -> RuleResult<String> {
        let base = self.strip_table_prefix(table_name);
        to_identifier(table_name, base.to_upper_camel_case())
    }

    fn gui_label(&self, column_name: &str) -> RuleResult<String> {
        let label = column_name.to_title_case();
        if label.is_empty() {
            return Err(RuleError::InvalidName(column_name.to_string()));
        }
        Ok(Some(label))
    }

    fn gui_input_type(&self, column_name: &str, type_code: i32) -> RuleResult<String> {
        let upper = column_name.to_uppercase();
        if upper.contains("EMAIL") || upper.contains("MAIL_ADDR") {
            return Ok(Some("email".to_string()));
        }
        if upper.contains("PASSWORD") || upper.contains("PASSWD") || upper.ends_with("PWD") {
            return Ok(Some("password".to_string()));
        }

        let hint = match type_code {
            types::BIT | types::BOOLEAN => "checkbox",
            types::TINYINT
            | types::SMALLINT
            | types::INTEGER
            | types::BIGINT
            | types::REAL
            | types::FLOAT
            | types::DOUBLE
            | types::NUMERIC
            | types::DECIMAL => "number",
            types::DATE => "date",
            types::TIME | types::TIME_WITH_TIMEZONE => "time",
            types::TIMESTAMP | types::TIMESTAMP_WITH_TIMEZONE => "datetime-local",
            types::LONGVARCHAR | types::LONGNVARCHAR | types::CLOB | types::NCLOB => "textarea",
            _ => "text",
        };
        Ok(Some(hint.to_string()))
    }
}
