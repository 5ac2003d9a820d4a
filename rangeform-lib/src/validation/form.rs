//! The date range form schema.

use std::sync::LazyLock;

use super::kind::FieldKind;
use super::schema::Schema;
use crate::error::ValidationFailure;
use crate::model::FormField;
use crate::model::FormInput;
use crate::model::Value;

static FORM_SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder()
        .field(FormField::StartDate.as_str(), FieldKind::Date)
        .field(FormField::EndDate.as_str(), FieldKind::Date)
        .field(FormField::SelectedObject.as_str(), FieldKind::Text)
        .build()
});

/// Returns the process-wide form schema.
///
/// Both dates must be real calendar dates and the selected object must be
/// text. No ordering between the two dates is enforced.
pub fn form_schema() -> &'static Schema {
    &FORM_SCHEMA
}

/// Validates one field value on its own.
///
/// Returns `None` when the value is valid, otherwise every message produced
/// for the field joined with `", "`.
///
/// # Example
///
/// ```
/// use rangeform_lib::model::{FormField, Value};
/// use rangeform_lib::validation::validate_field;
///
/// assert_eq!(validate_field(FormField::SelectedObject, &Value::from("room-42")), None);
/// assert_eq!(
///     validate_field(FormField::StartDate, &Value::from("not-a-date")).as_deref(),
///     Some("Invalid date"),
/// );
/// ```
pub fn validate_field(field: FormField, value: &Value) -> Option<String> {
    form_schema().field_error(field.as_str(), Some(value))
}

/// Validates a whole record against the form schema.
pub fn validate_input(input: &FormInput) -> Result<(), ValidationFailure> {
    form_schema().safe_parse(input)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn test_schema_declares_three_fields() {
        let names: Vec<_> = form_schema().fields().iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["startDate", "endDate", "selectedObject"]);
    }

    #[test]
    fn test_validate_field_valid_values() {
        let now = Value::from(Utc::now());
        assert_eq!(validate_field(FormField::StartDate, &now), None);
        assert_eq!(validate_field(FormField::EndDate, &now), None);
        assert_eq!(validate_field(FormField::SelectedObject, &Value::from("")), None);
    }

    #[test]
    fn test_validate_field_is_idempotent() {
        let value = Value::from(7.0);
        let first = validate_field(FormField::SelectedObject, &value);
        let second = validate_field(FormField::SelectedObject, &value);
        assert_eq!(first, second);
        assert_eq!(first.as_deref(), Some("Expected string, received number"));
    }
}
