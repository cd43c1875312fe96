//! The field mapping record and its extract operation.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use datamap_model::{FieldConfig, RESERVED_KEYS, normalize};

use crate::error::ExtractError;

/// Shared mapper function: one arbitrary input value in, one out.
pub type MapperFn = Arc<dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync>;

/// A display label, an optional data range, and a mapper, bundled as one
/// immutable record.
///
/// Construction never fails, even without a mapper; the absence only shows
/// up when [`extract`](Self::extract) is invoked. Fields are read through
/// accessors and changed through `with_*` copies.
#[derive(Clone)]
pub struct FieldMapping {
    label: Option<String>,
    mapper: Option<MapperFn>,
    data_range: Option<Value>,
    data_range_labels: Option<Value>,
    attributes: BTreeMap<String, Value>,
}

impl FieldMapping {
    /// Build a record from a configuration bundle.
    ///
    /// Falsy range fields collapse to absent, and attributes colliding with
    /// a reserved name are dropped so the named fields always win.
    #[must_use]
    pub fn new(config: FieldConfig) -> Self {
        let FieldConfig {
            label,
            data_range,
            data_range_labels,
            mut attributes,
        } = config;
        for key in RESERVED_KEYS {
            attributes.remove(key);
        }
        Self {
            label,
            mapper: None,
            data_range: normalize(data_range),
            data_range_labels: normalize(data_range_labels),
            attributes,
        }
    }

    /// Attach the mapper function.
    #[must_use]
    pub fn with_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        self.mapper = Some(Arc::new(mapper));
        self
    }

    /// Copy with a different label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Copy with a different data range. Falsy input collapses to absent.
    #[must_use]
    pub fn with_data_range(mut self, range: Value) -> Self {
        self.data_range = normalize(Some(range));
        self
    }

    /// Copy with different data range labels. Same falsy collapse.
    #[must_use]
    pub fn with_data_range_labels(mut self, labels: Value) -> Self {
        self.data_range_labels = normalize(Some(labels));
        self
    }

    /// Copy with an extra attribute attached. Reserved names are ignored.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        let key = key.into();
        if !RESERVED_KEYS.contains(&key.as_str()) {
            self.attributes.insert(key, value);
        }
        self
    }

    /// Display label, if one was configured.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Data range descriptor, if one was configured.
    #[must_use]
    pub fn data_range(&self) -> Option<&Value> {
        self.data_range.as_ref()
    }

    /// Data range labels, if configured.
    #[must_use]
    pub fn data_range_labels(&self) -> Option<&Value> {
        self.data_range_labels.as_ref()
    }

    /// All extra attributes.
    #[must_use]
    pub fn attributes(&self) -> &BTreeMap<String, Value> {
        &self.attributes
    }

    /// Look up one extra attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// True if a mapper function is attached.
    #[must_use]
    pub fn has_mapper(&self) -> bool {
        self.mapper.is_some()
    }

    /// Apply the mapper to `data`, swallowing any failure.
    ///
    /// On success this returns exactly what the mapper returned, including
    /// `Null`. On failure (mapper error, or no mapper configured) it emits
    /// one warning event and returns `Value::Null`, so callers never need
    /// error handling of their own. A `Null` result is indistinguishable
    /// from a mapper that legitimately produced nothing.
    #[must_use]
    pub fn extract(&self, data: &Value) -> Value {
        match self.try_extract(data) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    label = self.label.as_deref().unwrap_or(""),
                    %error,
                    "field extraction failed"
                );
                Value::Null
            }
        }
    }

    /// Fallible form of [`extract`](Self::extract), for callers that want
    /// the cause instead of the swallow-and-log policy.
    pub fn try_extract(&self, data: &Value) -> Result<Value, ExtractError> {
        let mapper = self.mapper.as_ref().ok_or(ExtractError::MissingMapper)?;
        mapper(data).map_err(ExtractError::Mapper)
    }
}

impl fmt::Debug for FieldMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMapping")
            .field("label", &self.label)
            .field("has_mapper", &self.mapper.is_some())
            .field("data_range", &self.data_range)
            .field("data_range_labels", &self.data_range_labels)
            .field("attributes", &self.attributes)
            .finish()
    }
}

impl From<FieldConfig> for FieldMapping {
    fn from(config: FieldConfig) -> Self {
        Self::new(config)
    }
}
