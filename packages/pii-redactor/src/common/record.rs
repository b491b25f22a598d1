use std::borrow::Cow;

use serde_json::Value;

/// One parsed payload: field name to scalar value, in input order.
pub type Record = serde_json::Map<String, Value>;

/// Whether a value carries any signal at all.
///
/// Null, `false`, zero, and empty strings/arrays/objects are absent values and
/// never count as PII.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

/// Text form of a value as the detector sees it.
///
/// Strings are used as-is; numbers and everything else use their JSON rendering,
/// so a phone number stored as `9876543210` reads the same as `"9876543210"`.
pub fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_present() {
        assert!(!is_present(&json!(null)));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(0)));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!([])));
        assert!(!is_present(&json!({})));

        assert!(is_present(&json!(" ")));
        assert!(is_present(&json!(9876543210u64)));
        assert!(is_present(&json!(true)));
        assert!(is_present(&json!("Pune")));
    }

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!("Asha Rao")), "Asha Rao");
        assert_eq!(value_text(&json!(9876543210u64)), "9876543210");
        assert_eq!(value_text(&json!(1.5)), "1.5");
        assert_eq!(value_text(&json!(true)), "true");
    }
}
