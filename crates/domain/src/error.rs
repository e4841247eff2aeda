//! Domain error types.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The rule a value violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The value was missing, empty, or whitespace only.
    CannotBeEmpty,

    /// The value did not match the kind's pattern.
    InvalidPattern,

    /// The value was longer than allowed.
    ExceedsMaxLength,

    /// The value was shorter than allowed.
    BelowMinLength,

    /// One or more rules failed; used by the aggregate failure.
    ValidationFailed,

    /// Anything that does not fit the codes above.
    Unknown,
}

impl ErrorCode {
    /// Returns the code name as it appears in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::CannotBeEmpty => "CannotBeEmpty",
            ErrorCode::InvalidPattern => "InvalidPattern",
            ErrorCode::ExceedsMaxLength => "ExceedsMaxLength",
            ErrorCode::BelowMinLength => "BelowMinLength",
            ErrorCode::ValidationFailed => "ValidationFailed",
            ErrorCode::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation failure.
///
/// Two errors are equal when their codes are equal; the property name is
/// informational only and does not take part in equality or hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainError {
    code: ErrorCode,
    property_name: String,
}

impl DomainError {
    /// Creates a new error for the given property.
    pub fn new(code: ErrorCode, property_name: impl Into<String>) -> Self {
        Self {
            code,
            property_name: property_name.into(),
        }
    }

    /// Returns the violated rule.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Returns the name of the property that failed.
    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    /// Returns the same error attributed to another property.
    pub fn with_property(self, property_name: impl Into<String>) -> Self {
        Self {
            code: self.code,
            property_name: property_name.into(),
        }
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for DomainError {}

impl Hash for DomainError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.property_name.is_empty() {
            write!(f, "{}", self.code)
        } else {
            write!(f, "{}: {}", self.property_name, self.code)
        }
    }
}

/// Aggregate failure raised when validation runs in fail-fast mode.
///
/// Always carries the complete, ordered list of violated rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    errors: Vec<DomainError>,
}

impl ValidationError {
    /// Wraps a list of errors into a single failure.
    pub fn new(errors: Vec<DomainError>) -> Self {
        Self { errors }
    }

    /// Always [`ErrorCode::ValidationFailed`].
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ValidationFailed
    }

    /// Returns the individual errors.
    pub fn errors(&self) -> &[DomainError] {
        &self.errors
    }

    /// Consumes the failure and returns the individual errors.
    pub fn into_errors(self) -> Vec<DomainError> {
        self.errors
    }
}

fn join_errors(errors: &[DomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors returned by a message handler.
///
/// Both variants are terminal for the invocation; the caller must fix the
/// message and resubmit.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The message was produced for a schema version this handler does not implement.
    #[error("{message_type} version {actual} is not supported (expected {expected})")]
    UnsupportedVersion {
        message_type: &'static str,
        expected: u32,
        actual: u32,
    },

    /// The message payload failed validation.
    #[error(transparent)]
    ValidationFailed(#[from] ValidationError),
}

impl HandlerError {
    /// Handler failures are never retried internally.
    pub fn is_retryable(&self) -> bool {
        false
    }
}
