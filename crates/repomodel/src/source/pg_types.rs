//! PostgreSQL type and constraint-action mapping to JDBC codes.

use crate::core::jdbc::{deferrability, rules, types};

/// JDBC type code for a PostgreSQL `udt_name`.
///
/// Array types (`_int4`, ...) map to ARRAY. `text` maps to LONGVARCHAR, like
/// the PostgreSQL JDBC driver reports it for unbounded character data.
pub fn jdbc_type_code(udt_name: &str) -> i32 {
    if udt_name.starts_with('_') {
        return types::ARRAY;
    }
    match udt_name.to_lowercase().as_str() {
        "int2" | "smallint" | "smallserial" => types::SMALLINT,
        "int4" | "integer" | "serial" => types::INTEGER,
        "int8" | "bigint" | "bigserial" | "oid" => types::BIGINT,
        "numeric" | "decimal" | "money" => types::NUMERIC,
        "float4" | "real" => types::REAL,
        "float8" | "double precision" => types::DOUBLE,
        "bool" | "boolean" => types::BIT,
        "varchar" | "character varying" => types::VARCHAR,
        "bpchar" | "char" | "character" => types::CHAR,
        "text" | "citext" => types::LONGVARCHAR,
        "date" => types::DATE,
        "time" | "timetz" => types::TIME,
        "timestamp" | "timestamptz" => types::TIMESTAMP,
        "bytea" => types::BINARY,
        "xml" => types::SQLXML,
        _ => types::OTHER,
    }
}

/// Declared column size the way JDBC metadata reports it.
///
/// Character types report their length and decimal-radix numerics their
/// precision. Binary-radix numerics report their decimal display width and
/// temporal types the width of their text form.
pub fn column_size(
    udt_name: &str,
    character_length: Option<i32>,
    numeric_precision: Option<i32>,
    numeric_radix: Option<i32>,
    datetime_precision: Option<i32>,
) -> i32 {
    if let Some(length) = character_length {
        return length;
    }
    // Fractional seconds plus the decimal point.
    let fraction = match datetime_precision {
        Some(p) if p > 0 => p + 1,
        _ => 0,
    };
    match udt_name.to_lowercase().as_str() {
        "int2" | "smallint" | "smallserial" => 5,
        "int4" | "integer" | "serial" | "oid" => 10,
        "int8" | "bigint" | "bigserial" => 19,
        "float4" | "real" => 8,
        "float8" | "double precision" => 17,
        "bool" | "boolean" => 1,
        "date" => 13,
        "time" => 8 + fraction,
        "timetz" => 8 + fraction + 6,
        "timestamp" => 22 + fraction,
        "timestamptz" => 22 + fraction + 6,
        _ => match (numeric_precision, numeric_radix) {
            (Some(precision), Some(10)) => precision,
            _ => 0,
        },
    }
}

/// JDBC rule code for `pg_constraint.confupdtype` / `confdeltype`.
pub fn rule_code(action: &str) -> i32 {
    match action {
        "c" => rules::CASCADE,
        "r" => rules::RESTRICT,
        "n" => rules::SET_NULL,
        "d" => rules::SET_DEFAULT,
        _ => rules::NO_ACTION,
    }
}

/// JDBC deferrability code from `condeferrable` / `condeferred`.
pub fn deferrability_code(deferrable: bool, initially_deferred: bool) -> i32 {
    match (deferrable, initially_deferred) {
        (false, _) => deferrability::NOT_DEFERRABLE,
        (true, true) => deferrability::INITIALLY_DEFERRED,
        (true, false) => deferrability::INITIALLY_IMMEDIATE,
    }
}

/// JDBC-style table type for an `information_schema.tables.table_type`.
pub fn table_type(pg_table_type: &str) -> &str {
    match pg_table_type {
        "BASE TABLE" => "TABLE",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_codes() {
        assert_eq!(jdbc_type_code("int4"), types::INTEGER);
        assert_eq!(jdbc_type_code("int8"), types::BIGINT);
        assert_eq!(jdbc_type_code("bool"), types::BIT);
        assert_eq!(jdbc_type_code("bpchar"), types::CHAR);
        assert_eq!(jdbc_type_code("text"), types::LONGVARCHAR);
        assert_eq!(jdbc_type_code("timestamptz"), types::TIMESTAMP);
        assert_eq!(jdbc_type_code("bytea"), types::BINARY);
        assert_eq!(jdbc_type_code("_int4"), types::ARRAY);
        assert_eq!(jdbc_type_code("jsonb"), types::OTHER);
        assert_eq!(jdbc_type_code("uuid"), types::OTHER);
    }

    #[test]
    fn test_column_sizes() {
        assert_eq!(column_size("varchar", Some(40), None, None, None), 40);
        assert_eq!(column_size("bpchar", Some(1), None, None, None), 1);
        assert_eq!(column_size("text", None, None, None, None), 0);

        assert_eq!(column_size("int2", None, Some(16), Some(2), None), 5);
        assert_eq!(column_size("int4", None, Some(32), Some(2), None), 10);
        assert_eq!(column_size("int8", None, Some(64), Some(2), None), 19);
        assert_eq!(column_size("float4", None, Some(24), Some(2), None), 8);
        assert_eq!(column_size("float8", None, Some(53), Some(2), None), 17);

        assert_eq!(column_size("numeric", None, Some(12), Some(10), None), 12);
        assert_eq!(column_size("numeric", None, None, Some(10), None), 0);

        assert_eq!(column_size("date", None, None, None, Some(0)), 13);
        assert_eq!(column_size("time", None, None, None, Some(6)), 15);
        assert_eq!(column_size("timetz", None, None, None, Some(6)), 21);
        assert_eq!(column_size("timestamp", None, None, None, Some(6)), 29);
        assert_eq!(column_size("timestamp", None, None, None, Some(0)), 22);
        assert_eq!(column_size("timestamptz", None, None, None, Some(3)), 32);

        assert_eq!(column_size("jsonb", None, None, None, None), 0);
    }

    #[test]
    fn test_rule_codes() {
        assert_eq!(rule_code("c"), rules::CASCADE);
        assert_eq!(rule_code("r"), rules::RESTRICT);
        assert_eq!(rule_code("n"), rules::SET_NULL);
        assert_eq!(rule_code("d"), rules::SET_DEFAULT);
        assert_eq!(rule_code("a"), rules::NO_ACTION);
    }

    #[test]
    fn test_deferrability_codes() {
        assert_eq!(deferrability_code(false, false), deferrability::NOT_DEFERRABLE);
        assert_eq!(deferrability_code(true, true), deferrability::INITIALLY_DEFERRED);
        assert_eq!(deferrability_code(true, false), deferrability::INITIALLY_IMMEDIATE);
    }

    #[test]
    fn test_table_types() {
        assert_eq!(table_type("BASE TABLE"), "TABLE");
        assert_eq!(table_type("VIEW"), "VIEW");
    }
}
