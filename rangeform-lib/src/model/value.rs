//! Value enum for dynamic candidate values

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// A dynamic value handed in by a host form before it has been validated.
///
/// Hosts rarely know the final type of what a user typed, so field values
/// arrive untyped and the schema decides whether they fit.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null | `Null` |
/// | true / false | `Bool` |
/// | number | `Number` |
/// | string | `String` |
/// | array | `List` |
/// | object | `Map` |
///
/// JSON has no date type, so date strings stay `String` and date fields
/// parse them during validation. `DateTime` is only built from Rust values.
///
/// # Example
///
/// ```
/// use rangeform_lib::model::Value;
///
/// let room = Value::from("room-42");
/// let count = Value::from(3.0);
/// let empty = Value::Null;
/// assert_eq!(room.type_name(), "string");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// String value.
    String(String),
    /// Date and time in UTC.
    DateTime(DateTime<Utc>),
    /// Array of values.
    List(Vec<Value>),
    /// Nested object.
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name used in type-mismatch messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::DateTime(_) => "date",
            Value::String(_) => "string",
            Value::List(_) => "array",
            Value::Map(_) => "object",
        }
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the date, if this is a date.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_deserialize_rfc3339_stays_string() {
        let value: Value = serde_json::from_str(r#""2024-03-01T09:30:00Z""#).unwrap();
        assert_eq!(value, Value::String("2024-03-01T09:30:00Z".to_string()));
    }

    #[test]
    fn test_serialize_datetime_as_rfc3339() {
        let value = Value::from(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
        assert_eq!(serde_json::to_string(&value).unwrap(), r#""2024-03-01T09:30:00Z""#);
    }

    #[test]
    fn test_deserialize_plain_string() {
        let value: Value = serde_json::from_str(r#""not-a-date""#).unwrap();
        assert_eq!(value, Value::String("not-a-date".to_string()));
    }

    #[test]
    fn test_deserialize_mixed_object() {
        let json = r#"{"a": null, "b": true, "c": 4, "d": [1, "x"]}"#;
        let value: Value = serde_json::from_str(json).unwrap();

        let Value::Map(map) = value else {
            panic!("expected an object");
        };
        assert!(map["a"].is_null());
        assert_eq!(map["b"], Value::Bool(true));
        assert_eq!(map["c"], Value::Number(4.0));
        assert_eq!(map["d"].type_name(), "array");
    }

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::from(false).type_name(), "boolean");
        assert_eq!(Value::from(1.0).type_name(), "number");
        assert_eq!(Value::from(Utc::now()).type_name(), "date");
        assert_eq!(Value::from(None::<String>), Value::Null);
    }
}
