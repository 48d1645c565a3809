//! Java type table: primitive defaults and type-name predicates.

pub const STRING: &str = "java.lang.String";
pub const BIG_DECIMAL: &str = "java.math.BigDecimal";
pub const DATE: &str = "java.util.Date";
pub const OBJECT: &str = "java.lang.Object";
pub const BYTE_ARRAY: &str = "byte[]";

/// Primitive types and the default value a generated field starts with.
const PRIMITIVE_DEFAULTS: &[(&str, &str)] = &[
    ("boolean", "false"),
    ("byte", "0"),
    ("short", "0"),
    ("int", "0"),
    ("long", "0L"),
    ("float", "0.0F"),
    ("double", "0.0D"),
    ("char", "' '"),
];

/// Wrapper class for each primitive type.
const WRAPPERS: &[(&str, &str)] = &[
    ("boolean", "java.lang.Boolean"),
    ("byte", "java.lang.Byte"),
    ("short", "java.lang.Short"),
    ("int", "java.lang.Integer"),
    ("long", "java.lang.Long"),
    ("float", "java.lang.Float"),
    ("double", "java.lang.Double"),
    ("char", "java.lang.Character"),
];

/// Default value for a primitive type; `None` for reference types.
pub fn default_value_for(type_name: &str) -> Option<&'static str> {
    PRIMITIVE_DEFAULTS
        .iter()
        .find(|(t, _)| *t == type_name)
        .map(|(_, v)| *v)
}

pub fn is_primitive(type_name: &str) -> bool {
    default_value_for(type_name).is_some()
}

pub fn is_string(type_name: &str) -> bool {
    type_name == STRING || type_name == "String"
}

/// Wrapper class of a primitive type; `None` if not a primitive.
pub fn wrapper_for(primitive: &str) -> Option<&'static str> {
    WRAPPERS
        .iter()
        .find(|(p, _)| *p == primitive)
        .map(|(_, w)| *w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_defaults() {
        assert_eq!(default_value_for("int"), Some("0"));
        assert_eq!(default_value_for("long"), Some("0L"));
        assert_eq!(default_value_for("boolean"), Some("false"));
        assert_eq!(default_value_for(STRING), None);
        assert_eq!(default_value_for("java.lang.Integer"), None);
    }

    #[test]
    fn test_predicates() {
        assert!(is_primitive("double"));
        assert!(!is_primitive(BIG_DECIMAL));
        assert!(is_string(STRING));
        assert!(!is_string("char"));
    }

    #[test]
    fn test_wrappers() {
        assert_eq!(wrapper_for("int"), Some("java.lang.Integer"));
        assert_eq!(wrapper_for(STRING), None);
    }
}
