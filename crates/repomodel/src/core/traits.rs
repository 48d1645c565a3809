//! Core traits for database-agnostic metadata introspection.
//!
//! - [`MetadataSource`]: Enumerates tables, columns, and foreign keys
//! - [`SchemaScope`]: Which part of the database a run looks at

use async_trait::async_trait;

use crate::error::Result;

use super::schema::DbTable;

/// The part of a database visible to one assembly run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaScope {
    /// Catalog (database) filter; `None` means the connection's catalog.
    pub catalog: Option<String>,
    /// Schema filter; `None` means every schema the source reports.
    pub schema: Option<String>,
    /// Table name pattern with SQL `LIKE` semantics (`%` and `_`).
    pub table_pattern: String,
    /// Accepted database object types ("TABLE", "VIEW", ...).
    pub table_types: Vec<String>,
}

impl Default for SchemaScope {
    fn default() -> Self {
        Self {
            catalog: None,
            schema: None,
            table_pattern: "%".to_string(),
            table_types: vec!["TABLE".to_string(), "VIEW".to_string()],
        }
    }
}

impl SchemaScope {
    /// Scope covering one schema with the default pattern and types.
    pub fn for_schema(schema: impl Into<String>) -> Self {
        Self {
            schema: Some(schema.into()),
            ..Self::default()
        }
    }

    /// Check whether a table descriptor falls inside this scope.
    pub fn accepts(&self, table: &DbTable) -> bool {
        if let (Some(wanted), Some(actual)) = (&self.catalog, &table.catalog) {
            if wanted != actual {
                return false;
            }
        }
        if let (Some(wanted), Some(actual)) = (&self.schema, &table.schema) {
            if wanted != actual {
                return false;
            }
        }
        self.accepts_type(&table.table_type) && like_match(&self.table_pattern, &table.name)
    }

    /// Check whether a database object type is accepted.
    ///
    /// An empty type list accepts everything.
    pub fn accepts_type(&self, table_type: &str) -> bool {
        self.table_types.is_empty()
            || self
                .table_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(table_type))
    }
}

/// One element of a compiled `LIKE` pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LikeToken {
    AnyRun,
    AnyOne,
    Literal(char),
}

/// Split a `LIKE` pattern into tokens, honouring the `\` escape.
///
/// A trailing lone backslash is taken literally.
fn like_tokens(pattern: &str) -> Vec<LikeToken> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '%' => LikeToken::AnyRun,
            '_' => LikeToken::AnyOne,
            '\\' => LikeToken::Literal(chars.next().unwrap_or('\\')),
            other => LikeToken::Literal(other),
        });
    }
    tokens
}

/// Match `value` against a SQL `LIKE` pattern.
///
/// `%` matches any run of characters, `_` exactly one, and `\` makes the
/// next character literal (the PostgreSQL default escape). Matching is
/// case-sensitive, as in most databases' default collation for identifiers.
pub fn like_match(pattern: &str, value: &str) -> bool {
    let pattern = like_tokens(pattern);
    let value: Vec<char> = value.chars().collect();

    let (mut p, mut v) = (0, 0);
    // Position of the last '%' seen and the value index it was resumed at.
    let mut backtrack: Option<(usize, usize)> = None;

    while v < value.len() {
        match pattern.get(p) {
            Some(LikeToken::AnyRun) => {
                backtrack = Some((p, v));
                p += 1;
                continue;
            }
            Some(LikeToken::AnyOne) => {
                p += 1;
                v += 1;
                continue;
            }
            Some(LikeToken::Literal(c)) if *c == value[v] => {
                p += 1;
                v += 1;
                continue;
            }
            _ => {}
        }
        match backtrack {
            Some((star, resume)) => {
                p = star + 1;
                v = resume + 1;
                backtrack = Some((star, resume + 1));
            }
            None => return false,
        }
    }

    while pattern.get(p) == Some(&LikeToken::AnyRun) {
        p += 1;
    }
    p == pattern.len()
}

/// Read table metadata from a database.
///
/// One source instance corresponds to one acquired connection. The
/// assembler calls [`extract_tables`](MetadataSource::extract_tables) once
/// and the caller releases the connection with
/// [`close`](MetadataSource::close) on every exit path.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Get the source type identifier (e.g., "postgres", "snapshot").
    fn db_type(&self) -> &str;

    /// Enumerate every table inside `scope`, with columns and foreign keys.
    ///
    /// Tables, columns, and foreign keys are returned in the order the
    /// database reports them. A failure here is fatal for the run.
    async fn extract_tables(&self, scope: &SchemaScope) -> Result<Vec<DbTable>>;

    /// Release the underlying connection.
    async fn close(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(name: &str, schema: &str, table_type: &str) -> DbTable {
        DbTable {
            name: name.to_string(),
            schema: Some(schema.to_string()),
            table_type: table_type.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_like_match() {
        assert!(like_match("%", "CUSTOMER"));
        assert!(like_match("%", ""));
        assert!(like_match("CUST%", "CUSTOMER"));
        assert!(like_match("%OMER", "CUSTOMER"));
        assert!(like_match("C_STOMER", "CUSTOMER"));
        assert!(like_match("%US%ME%", "CUSTOMER"));
        assert!(!like_match("CUST", "CUSTOMER"));
        assert!(!like_match("ORDER%", "CUSTOMER"));
        assert!(!like_match("_", ""));
    }

    #[test]
    fn test_like_match_escapes() {
        assert!(like_match(r"ORDER\_%", "ORDER_ITEM"));
        assert!(!like_match(r"ORDER\_%", "ORDERXITEM"));
        assert!(like_match(r"100\%", "100%"));
        assert!(!like_match(r"100\%", "1000"));
        assert!(like_match(r"A\\B", r"A\B"));
        assert!(!like_match(r"A\\B", "A_B"));
        assert!(like_match(r"\C%", "CUSTOMER"));
        assert!(like_match(r"TRAIL\", r"TRAIL\"));
    }

    #[test]
    fn test_scope_accepts_escaped_underscore_pattern() {
        let scope = SchemaScope {
            table_pattern: r"ORDER\_%".to_string(),
            ..SchemaScope::default()
        };
        assert!(scope.accepts(&table("ORDER_ITEM", "public", "TABLE")));
        assert!(!scope.accepts(&table("ORDERS", "public", "TABLE")));
    }

    #[test]
    fn test_scope_accepts_schema_and_type() {
        let scope = SchemaScope {
            table_types: vec!["TABLE".to_string()],
            ..SchemaScope::for_schema("sales")
        };

        assert!(scope.accepts(&table("CUSTOMER", "sales", "TABLE")));
        assert!(scope.accepts(&table("CUSTOMER", "sales", "table")));
        assert!(!scope.accepts(&table("CUSTOMER", "hr", "TABLE")));
        assert!(!scope.accepts(&table("CUSTOMER_V", "sales", "VIEW")));
    }

    #[test]
    fn test_scope_default_accepts_tables_and_views() {
        let scope = SchemaScope::default();
        assert!(scope.accepts(&table("A", "x", "TABLE")));
        assert!(scope.accepts(&table("B", "y", "VIEW")));
        assert!(!scope.accepts(&table("C", "y", "SEQUENCE")));
    }

    #[test]
    fn test_empty_type_list_accepts_everything() {
        let scope = SchemaScope {
            table_types: Vec::new(),
            ..SchemaScope::default()
        };
        assert!(scope.accepts_type("SYNONYM"));
    }
}
