//! Column classification from driver type codes.

use crate::core::jdbc::types;
use crate::model::DateType;

/// Whether a column holds large character or binary content.
pub fn is_long_text(_native_type: &str, type_code: i32) -> bool {
    matches!(type_code, types::LONGVARCHAR | types::CLOB | types::BLOB)
}

/// Temporal subtype of a column, if any.
pub fn date_type(_native_type: &str, type_code: i32) -> Option<DateType> {
    match type_code {
        types::DATE => Some(DateType::DateOnly),
        types::TIME => Some(DateType::TimeOnly),
        types::TIMESTAMP => Some(DateType::DateAndTime),
        _ => None,
    }
}
