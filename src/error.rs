//! Error handling for the Upkeep Rust client

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Unified error type for the Upkeep Rust client
#[derive(Error, Debug)]
pub enum Error {
    /// Network or HTTP related errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing errors
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Rejected form input, keyed by field
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// General errors
    #[error("{0}")]
    General(String),
}

impl Error {
    /// Create a new general error
    pub fn general<T: fmt::Display>(msg: T) -> Self {
        Error::General(msg.to_string())
    }
}

/// Per-field validation failure, reported before any mutation or remote call
/// is made.
///
/// Fields are keyed by their wire name and carry a human-readable message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationError {
    fields: BTreeMap<String, String>,
}

impl ValidationError {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` under `field` if `value` is empty or whitespace
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.fields.insert(field.to_string(), message.to_string());
        }
    }

    /// The message recorded for a field, if any
    pub fn message(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Iterate over `(field, message)` pairs in field order
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of rejected fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether every field passed validation
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Convert to a `Result`, erroring when any field was rejected
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}

impl std::error::Error for ValidationError {}
