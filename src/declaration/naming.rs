//! Type names derived from section ids.

use convert_case::{Case, Casing};

/// Suffix appended to every per-section type name.
pub const TYPE_SUFFIX: &str = "KeyCode";

/// Name of the union that references every section type.
pub const AGGREGATE_NAME: &str = "KeyCode";

/// `writing-system` -> `WritingSystemKeyCode`
pub fn section_type_name(id: &str) -> String {
    format!("{}{}", upper_camel_case(id), TYPE_SUFFIX)
}

/// Camel-case the id, then upper-case its first character.
fn upper_camel_case(id: &str) -> String {
    let camel = id.to_case(Case::Camel);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` can be used as a TypeScript type identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_type_name() {
        assert_eq!(section_type_name("example"), "ExampleKeyCode");
        assert_eq!(section_type_name("writing-system"), "WritingSystemKeyCode");
        assert_eq!(section_type_name("arrow-pad"), "ArrowPadKeyCode");
        assert_eq!(section_type_name("numpad"), "NumpadKeyCode");
    }

    #[test]
    fn test_section_type_name_underscores() {
        assert_eq!(section_type_name("legacy_keys"), "LegacyKeysKeyCode");
    }

    #[test]
    fn test_separator_only_id_collapses_to_suffix() {
        assert_eq!(section_type_name("-"), TYPE_SUFFIX);
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("ExampleKeyCode"));
        assert!(is_valid_identifier("_Private"));
        assert!(is_valid_identifier("$Dollar"));
        assert!(!is_valid_identifier("1KeyCode"));
        assert!(!is_valid_identifier("Has-Dash"));
        assert!(!is_valid_identifier(""));
    }
}
