//! Date range form validation
//!
//! A schema for a form holding a start date, an end date and a selected
//! object, with helpers that turn validation failures into per-field
//! messages for display.

pub mod error;
pub mod model;
pub mod validation;

pub use error::{Issue, IssueCode, ValidationFailure};
pub use model::{FormField, FormInput, FormRecord, Value};
pub use validation::{FieldErrors, field_errors, form_schema, validate_field};
