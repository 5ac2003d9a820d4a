//! Untyped form input and the typed record it validates into

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::FormField;
use super::Value;
use crate::error::Issue;
use crate::error::ValidationFailure;
use crate::validation::coerce_date;
use crate::validation::validate_input;

/// Raw field values keyed by field name, as submitted by a host form.
pub type FormInput = BTreeMap<String, Value>;

/// A date range form that passed validation.
///
/// # Example
///
/// ```
/// use rangeform_lib::model::{FormInput, FormRecord, Value};
///
/// let mut input = FormInput::new();
/// input.insert("startDate".into(), Value::from("2024-06-01"));
/// input.insert("endDate".into(), Value::from("2024-06-03"));
/// input.insert("selectedObject".into(), Value::from("room-42"));
///
/// let record = FormRecord::parse(&input).unwrap();
/// assert_eq!(record.selected_object, "room-42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub selected_object: String,
}

impl FormRecord {
    /// Validates raw input and builds the typed record.
    pub fn parse(input: &FormInput) -> Result<Self, ValidationFailure> {
        validate_input(input)?;

        Ok(Self {
            start_date: date_field(input, FormField::StartDate)?,
            end_date: date_field(input, FormField::EndDate)?,
            selected_object: text_field(input, FormField::SelectedObject)?,
        })
    }

    /// Converts the record back into raw input.
    pub fn to_input(&self) -> FormInput {
        let mut input = FormInput::new();
        input.insert(FormField::StartDate.to_string(), Value::from(self.start_date));
        input.insert(FormField::EndDate.to_string(), Value::from(self.end_date));
        input.insert(
            FormField::SelectedObject.to_string(),
            Value::from(self.selected_object.as_str()),
        );
        input
    }
}

// The schema pass has already checked these fields, so the fallbacks below
// only fire if the schema and this struct disagree.

fn date_field(input: &FormInput, field: FormField) -> Result<DateTime<Utc>, ValidationFailure> {
    input
        .get(field.as_str())
        .and_then(coerce_date)
        .ok_or_else(|| Issue::required(field.as_str()).into())
}

fn text_field(input: &FormInput, field: FormField) -> Result<String, ValidationFailure> {
    input
        .get(field.as_str())
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Issue::required(field.as_str()).into())
}
