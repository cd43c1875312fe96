//! Error types for extraction.

use thiserror::Error;

/// Failure raised while applying a field mapping's mapper.
///
/// [`FieldMapping::extract`](crate::FieldMapping::extract) swallows these and
/// returns `Value::Null`; [`try_extract`](crate::FieldMapping::try_extract)
/// surfaces them for callers that want the cause.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The record was built without a mapper.
    #[error("no mapper configured")]
    MissingMapper,
    /// The mapper itself returned an error.
    #[error("mapper failed: {0}")]
    Mapper(anyhow::Error),
}
