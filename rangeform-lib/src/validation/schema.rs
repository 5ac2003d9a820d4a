//! Schema builder and interpreter.

use chrono::DateTime;
use chrono::Utc;
use log::debug;
use log::trace;
use regex::Regex;
use serde::Serialize;

use super::errors::MESSAGE_SEPARATOR;
use super::kind::FieldKind;
use super::kind::coerce_date;
use crate::error::Issue;
use crate::error::ValidationFailure;
use crate::model::FormInput;
use crate::model::Value;

/// Type alias for stacked rule closures.
type SyncRule = Box<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;

/// One declared field: its name, base kind and stacked rules.
pub struct FieldSchema {
    name: String,
    kind: FieldKind,
    rules: Vec<SyncRule>,
}

impl FieldSchema {
    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the base kind.
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns a serializable description of this field.
    pub fn descriptor(&self) -> FieldDescriptor {
        FieldDescriptor {
            name: self.name.clone(),
            kind: self.kind,
            rules: self.rules.len(),
        }
    }

    /// Runs the base check, then every stacked rule.
    ///
    /// Stacked rules only see values that passed the base check.
    fn check(&self, value: Option<&Value>) -> Vec<Issue> {
        if let Err(issue) = self.kind.check(&self.name, value) {
            return vec![issue];
        }
        let Some(value) = value else {
            return Vec::new();
        };

        self.rules
            .iter()
            .filter_map(|rule| rule(value).err())
            .map(|msg| Issue::custom(self.name.as_str(), msg))
            .collect()
    }
}

impl std::fmt::Debug for FieldSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldSchema")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Public shape of a field for form-rendering layers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Number of stacked rules beyond the base type.
    pub rules: usize,
}

/// A declarative record shape.
///
/// # Example
///
/// ```
/// use rangeform_lib::validation::{FieldKind, Schema};
/// use rangeform_lib::model::Value;
///
/// let schema = Schema::builder()
///     .field("title", FieldKind::Text)
///         .min_length(3, "Title must be at least 3 characters")
///     .field("due", FieldKind::Date)
///     .build();
///
/// assert!(schema.safe_parse_field("title", Some(&Value::from("Hi"))).is_err());
/// ```
#[derive(Debug)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    /// Starts a new schema.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder { fields: Vec::new() }
    }

    /// Returns the declared fields, in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Returns descriptors for every field.
    pub fn descriptors(&self) -> Vec<FieldDescriptor> {
        self.fields.iter().map(FieldSchema::descriptor).collect()
    }

    /// Validates a single field value without touching the others.
    pub fn safe_parse_field(&self, name: &str, value: Option<&Value>) -> Result<(), ValidationFailure> {
        let Some(field) = self.field(name) else {
            return Err(Issue::custom(name, "Unknown field").into());
        };
        let issues = field.check(value);
        log_outcome(name, &issues);
        ValidationFailure::into_result(issues)
    }

    /// Validates a whole record.
    ///
    /// Every field is checked; issues are collected in declaration order.
    /// Keys that the schema does not declare are ignored.
    pub fn safe_parse(&self, input: &FormInput) -> Result<(), ValidationFailure> {
        let mut issues = Vec::new();
        for field in &self.fields {
            let field_issues = field.check(input.get(&field.name));
            log_outcome(&field.name, &field_issues);
            issues.extend(field_issues);
        }
        ValidationFailure::into_result(issues)
    }

    /// Validates a single field and joins its messages with
    /// [`MESSAGE_SEPARATOR`].
    pub fn field_error(&self, name: &str, value: Option<&Value>) -> Option<String> {
        self.safe_parse_field(name, value).err().map(|failure| {
            failure
                .issues
                .iter()
                .map(|issue| issue.message.as_str())
                .collect::<Vec<_>>()
                .join(MESSAGE_SEPARATOR)
        })
    }
}

fn log_outcome(name: &str, issues: &[Issue]) {
    if issues.is_empty() {
        trace!("field '{}' passed", name);
    } else {
        for issue in issues {
            debug!("field '{}' failed: {}", name, issue.message);
        }
    }
}

/// Builder for declaring the fields of a [`Schema`].
pub struct SchemaBuilder {
    fields: Vec<FieldSchema>,
}

impl SchemaBuilder {
    /// Declare a field.
    pub fn field(self, name: impl Into<String>, kind: FieldKind) -> FieldBuilder {
        FieldBuilder {
            builder: self,
            field: FieldSchema {
                name: name.into(),
                kind,
                rules: Vec::new(),
            },
        }
    }

    /// Finish the schema.
    pub fn build(self) -> Schema {
        Schema {
            fields: self.fields,
        }
    }
}

/// Builder for adding rules to a single field.
pub struct FieldBuilder {
    builder: SchemaBuilder,
    field: FieldSchema,
}

impl FieldBuilder {
    /// Add a custom rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.field
            .rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field(self, name: impl Into<String>, kind: FieldKind) -> FieldBuilder {
        self.finalize().field(name, kind)
    }

    /// Finalize and build the schema.
    pub fn build(self) -> Schema {
        self.finalize().build()
    }

    fn finalize(self) -> SchemaBuilder {
        let mut builder = self.builder;
        builder.fields.push(self.field);
        builder
    }

    // Text rules. They pass on non-string values, which the base check
    // already reports.

    /// Require non-blank text.
    pub fn non_empty(self, msg: impl Into<String>) -> Self {
        self.rule(|v| v.as_str().is_none_or(|s| !s.trim().is_empty()), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.as_str().is_none_or(|s| s.chars().count() >= min), msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.as_str().is_none_or(|s| s.chars().count() <= max), msg)
    }

    /// Require the text to match a pattern.
    pub fn pattern(self, re: Regex, msg: impl Into<String>) -> Self {
        self.rule(move |v| v.as_str().is_none_or(|s| re.is_match(s)), msg)
    }

    // Date rules.

    /// Require the date to be at or after `min`.
    pub fn not_before(self, min: DateTime<Utc>, msg: impl Into<String>) -> Self {
        self.rule(move |v| coerce_date(v).is_none_or(|dt| dt >= min), msg)
    }

    /// Require the date to be at or before `max`.
    pub fn not_after(self, max: DateTime<Utc>, msg: impl Into<String>) -> Self {
        self.rule(move |v| coerce_date(v).is_none_or(|dt| dt <= max), msg)
    }
}
