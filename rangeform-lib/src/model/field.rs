//! Form field names

use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::UnknownFieldError;

/// The fields of the date range form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// First day of the range.
    StartDate,
    /// Last day of the range.
    EndDate,
    /// Identifier of the object the range applies to.
    SelectedObject,
}

impl FormField {
    /// Every field, in declaration order.
    pub const ALL: [FormField; 3] = [
        FormField::StartDate,
        FormField::EndDate,
        FormField::SelectedObject,
    ];

    /// Returns the name used in records and error maps.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::StartDate => "startDate",
            FormField::EndDate => "endDate",
            FormField::SelectedObject => "selectedObject",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
    }

    #[test]
    fn test_parse_unknown() {
        let err = "start_date".parse::<FormField>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown field 'start_date'");
    }

    #[test]
    fn test_serde_names_match() {
        let json = serde_json::to_string(&FormField::SelectedObject).unwrap();
        assert_eq!(json, "\"selectedObject\"");
    }
}
