//! String-backed value objects.
//!
//! A string value object stores its input in normalized form (trimmed and
//! lower-cased) and is only ever constructed from a value that passed its
//! kind's validation. Equality, hashing, display, and serialization all use
//! the normalized string.

use regex::Regex;

use crate::error::{DomainError, ErrorCode, ValidationError};

/// How a validation failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any error fails the whole operation with a [`ValidationError`].
    FailFast,

    /// Errors are returned for the caller to inspect.
    Collect,
}

impl ValidationMode {
    /// Reports `errors` according to the mode.
    ///
    /// [`ValidationMode::Collect`] always returns `Ok`.
    pub fn report(self, errors: Vec<DomainError>) -> Result<Vec<DomainError>, ValidationError> {
        match self {
            ValidationMode::FailFast if !errors.is_empty() => Err(ValidationError::new(errors)),
            _ => Ok(errors),
        }
    }
}

/// Output of validating a raw string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated {
    /// The normalized input, whatever the outcome.
    pub value: String,

    /// Violated rules, in the order they were checked.
    pub errors: Vec<DomainError>,
}

impl Validated {
    /// Returns true if no rule was violated.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts into the normalized value, or the aggregate failure.
    pub fn into_result(self) -> Result<String, ValidationError> {
        if self.errors.is_empty() {
            Ok(self.value)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }

    /// Applies the reporting mode.
    ///
    /// In [`ValidationMode::Collect`] this never fails.
    pub fn with_mode(self, mode: ValidationMode) -> Result<Self, ValidationError> {
        let errors = mode.report(self.errors)?;
        Ok(Self {
            value: self.value,
            errors,
        })
    }
}

/// A normalized string that passed validation.
///
/// Only this module can produce one, so a value object cannot be built from
/// unchecked input.
#[derive(Debug)]
pub struct ValidValue(String);

impl ValidValue {
    /// Returns the normalized string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Normalizes raw input: missing input becomes empty, otherwise trimmed and lower-cased.
pub fn normalize(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

/// Validates raw input against a kind's pattern.
///
/// Empty input reports [`ErrorCode::CannotBeEmpty`] and skips the pattern
/// check; otherwise a mismatch reports [`ErrorCode::InvalidPattern`]. Errors
/// are attributed to `kind`.
pub fn validate_pattern(kind: &'static str, pattern: &Regex, raw: Option<&str>) -> Validated {
    let value = normalize(raw);
    let mut errors = Vec::new();

    if value.trim().is_empty() {
        errors.push(DomainError::new(ErrorCode::CannotBeEmpty, kind));
    } else if !pattern.is_match(&value) {
        errors.push(DomainError::new(ErrorCode::InvalidPattern, kind));
    }

    Validated { value, errors }
}

/// Contract shared by every normalized string identifier.
///
/// Implementors supply the kind name, the pattern, and a constructor from a
/// [`ValidValue`]; everything else is provided.
pub trait StringValueObject: Sized + AsRef<str> {
    /// Display name of the kind, used as the default property name in errors.
    const KIND: &'static str;

    /// Pattern the normalized value must match.
    fn pattern() -> &'static Regex;

    /// Builds the value object from validated input.
    fn from_valid(value: ValidValue) -> Self;

    /// Normalizes and validates raw input without failing.
    fn validate<'a>(raw: impl Into<Option<&'a str>>) -> Validated {
        validate_pattern(Self::KIND, Self::pattern(), raw.into())
    }

    /// Normalizes and validates raw input, reporting according to `mode`.
    fn validate_with<'a>(
        raw: impl Into<Option<&'a str>>,
        mode: ValidationMode,
    ) -> Result<Validated, ValidationError> {
        Self::validate(raw).with_mode(mode)
    }

    /// Builds a value object, or returns every violated rule.
    ///
    /// Never panics and never returns a partially built object.
    fn try_create<'a>(raw: impl Into<Option<&'a str>>) -> Result<Self, Vec<DomainError>> {
        let validated = Self::validate(raw);
        if validated.is_valid() {
            Ok(Self::from_valid(ValidValue(validated.value)))
        } else {
            Err(validated.errors)
        }
    }

    /// Builds a value object, failing with the aggregate [`ValidationError`].
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::try_create(raw).map_err(ValidationError::new)
    }

    /// Returns the normalized value.
    fn value(&self) -> &str {
        self.as_ref()
    }

    /// Re-validates the stored value.
    ///
    /// Empty for any instance obtained through this trait; used by messages
    /// that delegate their validation to embedded value objects.
    fn errors(&self) -> Vec<DomainError> {
        Self::validate(self.value()).errors
    }
}
