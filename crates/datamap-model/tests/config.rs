use datamap_model::{FieldConfig, RESERVED_KEYS, is_falsy, normalize};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

proptest! {
    // Any key outside the reserved set survives deserialization verbatim.
    #[test]
    fn extra_keys_pass_through(key in "[a-z][a-z0-9_]{0,15}", n in any::<i64>()) {
        prop_assume!(!RESERVED_KEYS.contains(&key.as_str()));

        let mut raw = Map::new();
        raw.insert("label".to_string(), json!("field"));
        raw.insert(key.clone(), json!(n));

        let config: FieldConfig = serde_json::from_value(Value::Object(raw)).unwrap();
        prop_assert_eq!(config.attributes.get(&key), Some(&json!(n)));
        prop_assert_eq!(config.label.as_deref(), Some("field"));
    }

    // A falsy value never survives normalization; a truthy one is untouched.
    #[test]
    fn normalize_agrees_with_is_falsy(v in prop_oneof![
        Just(json!(null)),
        Just(json!(false)),
        Just(json!(true)),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,8}".prop_map(|s| json!(s)),
    ]) {
        let normalized = normalize(Some(v.clone()));
        if is_falsy(&v) {
            prop_assert_eq!(normalized, None);
        } else {
            prop_assert_eq!(normalized, Some(v));
        }
    }
}

#[test]
fn reserved_keys_cover_the_wire_names() {
    for key in ["label", "mapper", "dataRange", "dataRangeLabels"] {
        assert!(RESERVED_KEYS.contains(&key));
    }
}
