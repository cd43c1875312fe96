//! Field mapping records and value extraction.
//!
//! A [`FieldMapping`] pairs a display label and an optional data range with
//! a caller-supplied mapper function, and applies that mapper through a
//! never-fail boundary: any error is logged as a warning and replaced by
//! `Null`, so consumers always receive a value.
//!
//! # Example
//!
//! ```
//! use datamap_extract::{FieldMapping, mappers};
//! use datamap_model::FieldConfig;
//! use serde_json::json;
//!
//! let age = FieldMapping::new(FieldConfig::new().with_label("age"))
//!     .with_mapper(mappers::key("age"));
//!
//! assert_eq!(age.extract(&json!({ "age": 42 })), json!(42));
//! // A failing mapper is logged and swallowed.
//! assert_eq!(age.extract(&json!(null)), json!(null));
//! ```

mod error;
mod field;
mod set;

pub mod mappers;

pub use error::ExtractError;
pub use field::{FieldMapping, MapperFn};
pub use set::FieldSet;
