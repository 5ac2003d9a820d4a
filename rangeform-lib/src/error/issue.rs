//! Validation issue types

use serde::Serialize;

/// What kind of check produced an [`Issue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", rename_all = "snake_case")]
pub enum IssueCode {
    /// The value has the wrong type.
    InvalidType {
        expected: &'static str,
        received: &'static str,
    },
    /// The value looked like a date but does not name a real instant.
    InvalidDate,
    /// The field is missing or null.
    Required,
    /// A stacked rule rejected the value.
    Custom,
}

/// A single validation failure.
///
/// The path holds one segment per nesting level. Form fields are flat, so in
/// practice it is exactly one field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Location of the offending value.
    pub path: Vec<String>,
    /// Machine-readable cause.
    #[serde(flatten)]
    pub code: IssueCode,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Creates an issue with an explicit code and message.
    pub fn new(field: impl Into<String>, code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            path: vec![field.into()],
            code,
            message: message.into(),
        }
    }

    /// Creates a type-mismatch issue.
    pub fn invalid_type(field: impl Into<String>, expected: &'static str, received: &'static str) -> Self {
        Self::new(
            field,
            IssueCode::InvalidType { expected, received },
            format!("Expected {}, received {}", expected, received),
        )
    }

    /// Creates an invalid date issue.
    pub fn invalid_date(field: impl Into<String>) -> Self {
        Self::new(field, IssueCode::InvalidDate, "Invalid date")
    }

    /// Creates a missing value issue.
    pub fn required(field: impl Into<String>) -> Self {
        Self::new(field, IssueCode::Required, "Required")
    }

    /// Creates an issue for a stacked rule.
    pub fn custom(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(field, IssueCode::Custom, message)
    }

    /// Returns the path segments concatenated, which for flat forms is the
    /// field name.
    pub fn field(&self) -> String {
        self.path.concat()
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.join("."), self.message)
    }
}

/// The outcome of a failed validation: every issue, in the order produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{}", join_issues(.issues))]
pub struct ValidationFailure {
    pub issues: Vec<Issue>,
}

fn join_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationFailure {
    /// Creates a failure from a list of issues.
    pub fn new(issues: Vec<Issue>) -> Self {
        Self { issues }
    }

    /// Returns all issues.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    /// Returns `true` when there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Appends the issues of another failure.
    pub fn extend(&mut self, other: ValidationFailure) {
        self.issues.extend(other.issues);
    }

    /// Converts an issue list into a result: `Ok` when empty.
    pub fn into_result(issues: Vec<Issue>) -> Result<(), ValidationFailure> {
        if issues.is_empty() {
            Ok(())
        } else {
            Err(Self::new(issues))
        }
    }
}

impl From<Issue> for ValidationFailure {
    fn from(issue: Issue) -> Self {
        Self::new(vec![issue])
    }
}
