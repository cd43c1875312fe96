//! Applying a group of field mappings to one input.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::field::FieldMapping;

/// An ordered collection of field mappings driven over a single data value.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    fields: Vec<FieldMapping>,
}

impl FieldSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a field mapping.
    pub fn push(&mut self, field: FieldMapping) {
        self.fields.push(field);
    }

    /// Number of field mappings in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True if the set holds no field mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over the field mappings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldMapping> {
        self.fields.iter()
    }

    /// Extract every labeled field from `data`, collecting label to result.
    ///
    /// Each record keeps its own swallow-and-log policy, so a failing mapper
    /// contributes a `Null` entry rather than aborting the rest. Unlabeled
    /// records are skipped.
    #[must_use]
    pub fn extract_all(&self, data: &Value) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .filter_map(|field| {
                field
                    .label()
                    .map(|label| (label.to_string(), field.extract(data)))
            })
            .collect()
    }
}

impl From<Vec<FieldMapping>> for FieldSet {
    fn from(fields: Vec<FieldMapping>) -> Self {
        Self { fields }
    }
}

impl FromIterator<FieldMapping> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldMapping>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
