//! Validation and admission shared by commands and events.

use crate::error::{DomainError, HandlerError, ValidationError};
use crate::value_object::ValidationMode;

/// A message whose payload can be validated.
pub trait Validate {
    /// Returns every violated rule, in field-declaration order.
    fn errors(&self) -> Vec<DomainError>;

    /// Validates the payload, reporting according to `mode`.
    ///
    /// [`ValidationMode::Collect`] always returns `Ok`; the caller decides
    /// what an empty or non-empty list means.
    fn validate(&self, mode: ValidationMode) -> Result<Vec<DomainError>, ValidationError> {
        mode.report(self.errors())
    }
}

/// Concatenates per-field errors, attributing each to its field.
pub fn collect_errors<I>(fields: I) -> Vec<DomainError>
where
    I: IntoIterator<Item = (&'static str, Vec<DomainError>)>,
{
    fields
        .into_iter()
        .flat_map(|(field, errors)| errors.into_iter().map(move |e| e.with_property(field)))
        .collect()
}

/// Rejects a message produced for another schema version.
pub fn ensure_version(
    message_type: &'static str,
    actual_version: u32,
    expected_version: u32,
) -> Result<(), HandlerError> {
    if actual_version != expected_version {
        return Err(HandlerError::UnsupportedVersion {
            message_type,
            expected: expected_version,
            actual: actual_version,
        });
    }
    Ok(())
}

/// Admission gate run by handlers before touching any state.
///
/// The version is checked first, so a message from an incompatible producer
/// is rejected whatever its payload.
pub fn ensure_supported<M>(
    message_type: &'static str,
    actual_version: u32,
    expected_version: u32,
    message: &M,
) -> Result<(), HandlerError>
where
    M: Validate + ?Sized,
{
    ensure_version(message_type, actual_version, expected_version)?;

    let errors = message.errors();
    if !errors.is_empty() {
        return Err(ValidationError::new(errors).into());
    }

    Ok(())
}
