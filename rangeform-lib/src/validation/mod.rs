//! Form validation.
//!
//! Schemas are declared with a fluent builder and interpreted generically.
//! The date range form itself is a process-wide [`form_schema`].
//!
//! # Example
//!
//! ```
//! use rangeform_lib::model::FormInput;
//! use rangeform_lib::validation::{field_errors, validate_input};
//!
//! let input: FormInput = serde_json::from_str(
//!     r#"{"startDate": "not-a-date", "endDate": "2024-06-01", "selectedObject": "room-42"}"#,
//! )
//! .unwrap();
//!
//! let failure = validate_input(&input).unwrap_err();
//! let errors = field_errors(&failure);
//! assert_eq!(errors.get("startDate"), Some("Invalid date"));
//! assert_eq!(errors.len(), 1);
//! ```

mod errors;
mod form;
mod kind;
mod schema;

pub use errors::{FieldErrors, MESSAGE_SEPARATOR, field_errors};
pub use form::{form_schema, validate_field, validate_input};
pub use kind::{FieldKind, coerce_date};
pub use schema::{FieldBuilder, FieldDescriptor, FieldSchema, Schema, SchemaBuilder};
