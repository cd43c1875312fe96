//! Normalization rules for optional value fields.

use serde_json::Value;

/// Returns true for values the configuration format treats as "no value":
/// null, `false`, numeric zero, and the empty string.
///
/// Arrays and objects are never falsy, even when empty.
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Collapses a falsy value to `None`, giving consumers a single "absent"
/// representation instead of a mix of missing and falsy-but-present fields.
#[must_use]
pub fn normalize(value: Option<Value>) -> Option<Value> {
    value.filter(|v| !is_falsy(v))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn falsy_values() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!(false)));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(0.0)));
        assert!(is_falsy(&json!("")));
    }

    #[test]
    fn truthy_values() {
        assert!(!is_falsy(&json!(true)));
        assert!(!is_falsy(&json!(1)));
        assert!(!is_falsy(&json!("0")));
        assert!(!is_falsy(&json!([])));
        assert!(!is_falsy(&json!({})));
    }

    #[test]
    fn normalize_collapses_falsy_to_none() {
        assert_eq!(normalize(None), None);
        assert_eq!(normalize(Some(json!(null))), None);
        assert_eq!(normalize(Some(json!(""))), None);
        assert_eq!(normalize(Some(json!([0, 10]))), Some(json!([0, 10])));
    }
}
