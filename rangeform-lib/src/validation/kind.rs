//! Base type checks for schema fields.

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

use crate::error::Issue;
use crate::model::Value;

/// The base type a field must have before any stacked rule runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A calendar date/time.
    Date,
    /// Free-form text.
    #[serde(rename = "string")]
    Text,
}

impl FieldKind {
    /// Returns the type name used in type-mismatch messages.
    pub fn expected(&self) -> &'static str {
        match self {
            FieldKind::Date => "date",
            FieldKind::Text => "string",
        }
    }

    /// Checks a (possibly missing) value against this kind.
    pub fn check(&self, field: &str, value: Option<&Value>) -> Result<(), Issue> {
        let value = match value {
            None | Some(Value::Null) => return Err(Issue::required(field)),
            Some(value) => value,
        };

        match (self, value) {
            (FieldKind::Date, Value::DateTime(_)) => Ok(()),
            (FieldKind::Date, Value::String(s)) => match parse_date(s) {
                Some(_) => Ok(()),
                None => Err(Issue::invalid_date(field)),
            },
            (FieldKind::Text, Value::String(_)) => Ok(()),
            (kind, other) => Err(Issue::invalid_type(field, kind.expected(), other.type_name())),
        }
    }
}

/// Interprets a value as a date, accepting date values and date strings.
pub fn coerce_date(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::DateTime(dt) => Some(*dt),
        Value::String(s) => parse_date(s),
        _ => None,
    }
}

/// Parses RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::error::IssueCode;

    #[test]
    fn test_date_accepts_datetime_and_strings() {
        let kind = FieldKind::Date;
        assert!(kind.check("d", Some(&Value::from(Utc::now()))).is_ok());
        assert!(kind.check("d", Some(&Value::from("2024-02-29"))).is_ok());
        assert!(kind.check("d", Some(&Value::from("2024-02-29T10:00:00+02:00"))).is_ok());
    }

    #[test]
    fn test_date_rejects_impossible_calendar_day() {
        let issue = FieldKind::Date
            .check("d", Some(&Value::from("2023-02-29")))
            .unwrap_err();
        assert_eq!(issue.code, IssueCode::InvalidDate);
        assert_eq!(issue.message, "Invalid date");
    }

    #[test]
    fn test_date_rejects_other_types() {
        let issue = FieldKind::Date
            .check("d", Some(&Value::from(12.0)))
            .unwrap_err();
        assert_eq!(issue.message, "Expected date, received number");
    }

    #[test]
    fn test_text_rejects_dates() {
        let issue = FieldKind::Text
            .check("s", Some(&Value::from(Utc::now())))
            .unwrap_err();
        assert_eq!(issue.message, "Expected string, received date");
    }

    #[test]
    fn test_missing_and_null_are_required() {
        for kind in [FieldKind::Date, FieldKind::Text] {
            assert_eq!(kind.check("f", None).unwrap_err().code, IssueCode::Required);
            assert_eq!(
                kind.check("f", Some(&Value::Null)).unwrap_err().code,
                IssueCode::Required
            );
        }
    }

    #[test]
    fn test_coerce_bare_date_is_midnight_utc() {
        let dt = coerce_date(&Value::from("2024-05-06")).unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 5, 6, 0, 0, 0).unwrap());
    }
}
