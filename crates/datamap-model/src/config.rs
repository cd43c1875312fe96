//! The field configuration bundle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::normalize;

/// Wire names claimed by the named configuration fields.
///
/// When one of these appears in a configuration object it is consumed by the
/// corresponding named field and never lands in [`FieldConfig::attributes`].
/// `mapper` has no wire representation; if it appears anyway it is dropped,
/// so a stray `mapper` attribute can never shadow the function supplied in
/// code.
pub const RESERVED_KEYS: [&str; 4] = ["label", "mapper", "dataRange", "dataRangeLabels"];

/// Configuration bundle for a single field mapping.
///
/// Every field is optional; any JSON object deserializes successfully. Keys
/// outside the reserved set are kept verbatim in `attributes` for downstream
/// consumers that expect ad hoc metadata on the record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "WireConfig")]
pub struct FieldConfig {
    /// Display name. No uniqueness constraint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Opaque descriptor of the value domain this field covers. Falsy wire
    /// input (null, `false`, zero, empty string) collapses to absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_range: Option<Value>,
    /// Human-readable labels for `data_range` entries; same falsy collapse.
    /// No cardinality relationship with `data_range` is enforced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_range_labels: Option<Value>,
    /// Caller-defined extra attributes, captured from all unrecognized keys.
    #[serde(flatten)]
    pub attributes: BTreeMap<String, Value>,
}

/// Raw wire shape, before normalization and reserved-key stripping.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WireConfig {
    label: Option<String>,
    data_range: Option<Value>,
    data_range_labels: Option<Value>,
    #[serde(flatten)]
    attributes: BTreeMap<String, Value>,
}

impl From<WireConfig> for FieldConfig {
    fn from(wire: WireConfig) -> Self {
        let mut attributes = wire.attributes;
        for key in RESERVED_KEYS {
            attributes.remove(key);
        }
        Self {
            label: wire.label,
            data_range: normalize(wire.data_range),
            data_range_labels: normalize(wire.data_range_labels),
            attributes,
        }
    }
}

impl FieldConfig {
    /// Create an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the display label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the data range. Falsy input (null, `false`, zero, empty string)
    /// collapses to absent.
    #[must_use]
    pub fn with_data_range(mut self, range: Value) -> Self {
        self.data_range = normalize(Some(range));
        self
    }

    /// Set the data range labels. Same falsy collapse as the range itself.
    #[must_use]
    pub fn with_data_range_labels(mut self, labels: Value) -> Self {
        self.data_range_labels = normalize(Some(labels));
        self
    }

    /// Attach an extra attribute.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }
}
