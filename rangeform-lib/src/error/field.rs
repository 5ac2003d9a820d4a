//! Error for field name lookups

/// A field name that the form does not declare.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field '{name}'")]
pub struct UnknownFieldError {
    /// The name that failed to resolve.
    pub name: String,
}

impl UnknownFieldError {
    /// Creates a new unknown field error.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
