//! Stock mapper constructors for the common extraction shapes.
//!
//! All constructors return plain closures suitable for
//! [`FieldMapping::with_mapper`](crate::FieldMapping::with_mapper). A lookup
//! that misses on a well-typed container yields `Null`; a lookup against the
//! wrong kind of value is an error, which the record turns into a logged
//! warning plus a `Null` result.

use anyhow::bail;
use serde_json::Value;

/// Read one key from an object.
///
/// A missing key yields `Null`; anything that is not an object is an error.
pub fn key(name: impl Into<String>) -> impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync {
    let name = name.into();
    move |data| match data {
        Value::Object(map) => Ok(map.get(&name).cloned().unwrap_or(Value::Null)),
        other => bail!("cannot read key `{name}` from {}", kind(other)),
    }
}

/// Read a nested key through `.`-separated segments.
///
/// Walking stops with `Null` as soon as a segment is missing; walking into a
/// non-object is an error.
pub fn path(dotted: impl Into<String>) -> impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync {
    let segments: Vec<String> = dotted.into().split('.').map(str::to_string).collect();
    move |data| {
        let mut current = data;
        for segment in &segments {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => current = next,
                    None => return Ok(Value::Null),
                },
                other => bail!("cannot read key `{segment}` from {}", kind(other)),
            }
        }
        Ok(current.clone())
    }
}

/// Read one element from an array.
///
/// An out-of-bounds index yields `Null`; anything that is not an array is an
/// error.
pub fn index(i: usize) -> impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync {
    move |data| match data {
        Value::Array(items) => Ok(items.get(i).cloned().unwrap_or(Value::Null)),
        other => bail!("cannot index into {}", kind(other)),
    }
}

/// Ignore the input and always return `value`.
pub fn constant(value: Value) -> impl Fn(&Value) -> anyhow::Result<Value> + Send + Sync {
    move |_| Ok(value.clone())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn key_reads_object_fields() {
        let age = key("age");
        assert_eq!(age(&json!({"age": 42})).unwrap(), json!(42));
        assert_eq!(age(&json!({"name": "x"})).unwrap(), json!(null));
    }

    #[test]
    fn key_rejects_non_objects() {
        let age = key("age");
        let err = age(&json!(null)).unwrap_err();
        assert!(err.to_string().contains("null"));
        assert!(age(&json!([1, 2])).is_err());
    }

    #[test]
    fn path_walks_nested_objects() {
        let inner = path("outer.inner.v");
        let data = json!({"outer": {"inner": {"v": 7}}});
        assert_eq!(inner(&data).unwrap(), json!(7));
        assert_eq!(inner(&json!({"outer": {}})).unwrap(), json!(null));
    }

    #[test]
    fn path_rejects_scalar_midway() {
        let inner = path("outer.inner");
        assert!(inner(&json!({"outer": 3})).is_err());
    }

    #[test]
    fn index_reads_array_elements() {
        let second = index(1);
        assert_eq!(second(&json!(["a", "b"])).unwrap(), json!("b"));
        assert_eq!(second(&json!(["a"])).unwrap(), json!(null));
        assert!(second(&json!({"1": "b"})).is_err());
    }

    #[test]
    fn constant_ignores_input() {
        let tag = constant(json!("fixed"));
        assert_eq!(tag(&json!(null)).unwrap(), json!("fixed"));
        assert_eq!(tag(&json!({"any": true})).unwrap(), json!("fixed"));
    }
}
