//! Per-field error maps for UI display.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::ValidationFailure;
use crate::model::FormField;

/// Separator between messages that apply to the same field.
pub const MESSAGE_SEPARATOR: &str = ", ";

/// Mapping from field name to the joined error message(s) for that field.
///
/// Fields without issues have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message for a field, after any message already present.
    pub fn push(&mut self, field: impl Into<String>, message: &str) {
        self.0
            .entry(field.into())
            .and_modify(|existing| {
                existing.push_str(MESSAGE_SEPARATOR);
                existing.push_str(message);
            })
            .or_insert_with(|| message.to_string());
    }

    /// Returns the message for a field name.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Returns the message for a form field.
    pub fn get_field(&self, field: FormField) -> Option<&str> {
        self.get(field.as_str())
    }

    /// Returns `true` if the field has a message.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(field, message)` pairs, sorted by field name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl From<&ValidationFailure> for FieldErrors {
    fn from(failure: &ValidationFailure) -> Self {
        field_errors(failure)
    }
}

/// Folds the issues of a failed record validation into a per-field map.
///
/// Each issue's path names its field; messages for the same field are joined
/// with `", "` in the order the issues were produced.
pub fn field_errors(failure: &ValidationFailure) -> FieldErrors {
    failure
        .issues()
        .iter()
        .fold(FieldErrors::new(), |mut all, issue| {
            all.push(issue.field(), &issue.message);
            all
        })
}
