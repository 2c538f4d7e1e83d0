//! Exact-output tests for the documented conversion examples

use linejson::{convert_key_values, convert_property_list};

#[cfg(test)]
mod key_value_examples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_two_pairs() {
        assert_eq!(
            convert_key_values("a,1\nb,2\n").unwrap(),
            r#"{"a": "1", "b": "2"}"#
        );
    }

    #[test]
    fn test_duplicate_key() {
        assert_eq!(convert_key_values("a,1\na,2\n").unwrap(), r#"{"a": "2"}"#);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_key_values("").unwrap(), "{}");
        assert_eq!(convert_key_values("\n").unwrap(), "{}");
    }
}

#[cfg(test)]
mod property_list_examples {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_all_fields() {
        assert_eq!(
            convert_property_list("temp,100,C,measured\n").unwrap(),
            r#"[{"key": "temp", "value": "100", "unit": "C", "annotation": "measured"}]"#
        );
    }

    #[test]
    fn test_missing_optional_fields() {
        assert_eq!(
            convert_property_list("temp,100,,\n").unwrap(),
            r#"[{"key": "temp", "value": "100"}]"#
        );
    }

    #[test]
    fn test_annotation_without_unit() {
        assert_eq!(
            convert_property_list("count,7,,approximate\n").unwrap(),
            r#"[{"key": "count", "value": "7", "annotation": "approximate"}]"#
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(convert_property_list("").unwrap(), "[]");
    }
}
