//! Configuration types for field mappings.
//!
//! A [`FieldConfig`] is the wire-level bundle a field mapping is built from:
//! a display label, an opaque data-range descriptor with optional labels, and
//! an open set of extra attributes. Everything is optional and any JSON
//! object deserializes into one.

pub mod config;
pub mod value;

pub use config::{FieldConfig, RESERVED_KEYS};
pub use value::{is_falsy, normalize};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn config_round_trips() {
        let config = FieldConfig::default()
            .with_label("bucket")
            .with_data_range(json!([0, 10]))
            .with_data_range_labels(json!(["low", "high"]));
        let text = serde_json::to_string(&config).expect("serialize config");
        let round: FieldConfig = serde_json::from_str(&text).expect("deserialize config");
        assert_eq!(round.label.as_deref(), Some("bucket"));
        assert_eq!(round.data_range, Some(json!([0, 10])));
        assert_eq!(round.data_range_labels, Some(json!(["low", "high"])));
    }
}
