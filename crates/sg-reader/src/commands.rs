//! SG reader commands.

use domain::{
    Command, CommandMetadata, DomainError, LotId, StringValueObject, Validate, collect_errors,
};
use serde::{Deserialize, Serialize};

/// Command to start the reader for a lot.
///
/// The lot is carried as the raw aggregate identifier so that a malformed
/// command can still be built, serialized, and validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SgReaderStart {
    #[serde(flatten)]
    metadata: CommandMetadata,

    /// Identifier of the lot to read, validated as a [`LotId`].
    pub aggregate_identifier: String,
}

impl SgReaderStart {
    /// Schema version produced by this build.
    pub const VERSION: u32 = 1;

    /// Type name used in logs and errors.
    pub const TYPE_NAME: &'static str = "SgReaderStart";

    /// Creates a new SgReaderStart command for the current schema version.
    pub fn new(lot_id: impl Into<String>) -> Self {
        Self::with_version(lot_id, Self::VERSION)
    }

    /// Creates a command stamped with an explicit schema version.
    pub fn with_version(lot_id: impl Into<String>, version: u32) -> Self {
        Self {
            metadata: CommandMetadata::new(version),
            aggregate_identifier: lot_id.into(),
        }
    }

    /// Parses the aggregate identifier into a lot ID.
    ///
    /// Errors are labelled with the `aggregateIdentifier` wire property.
    pub fn lot_id(&self) -> Result<LotId, Vec<DomainError>> {
        LotId::try_create(self.aggregate_identifier.as_str())
            .map_err(|errors| collect_errors([("aggregateIdentifier", errors)]))
    }
}

impl Validate for SgReaderStart {
    fn errors(&self) -> Vec<DomainError> {
        self.lot_id().err().unwrap_or_default()
    }
}

impl Command for SgReaderStart {
    fn command_type(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn metadata(&self) -> &CommandMetadata {
        &self.metadata
    }

    fn aggregate_identifier(&self) -> &str {
        &self.aggregate_identifier
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use domain::{ErrorCode, ValidationMode};

    use super::*;

    #[test]
    fn test_new_command() {
        let before = Utc::now();
        let cmd = SgReaderStart::new("lot-123");

        assert_eq!(cmd.aggregate_identifier(), "lot-123");
        assert_eq!(cmd.version(), 1);
        assert_eq!(cmd.command_type(), "SgReaderStart");
        assert!(cmd.occurred_on_utc() >= before);
        assert!(cmd.occurred_on_utc() <= Utc::now());
    }

    #[test]
    fn test_command_ids_are_unique() {
        let a = SgReaderStart::new("lot-333");
        let b = SgReaderStart::new("lot-333");
        assert_ne!(a.command_id(), b.command_id());
    }

    #[test]
    fn test_valid_command_has_no_errors() {
        for lot in ["lot-000", "lot-001", "lot-999", "LOT-456"] {
            let cmd = SgReaderStart::new(lot);
            assert!(cmd.validate(ValidationMode::Collect).unwrap().is_empty());
            assert!(cmd.validate(ValidationMode::FailFast).is_ok());
        }
    }

    #[test]
    fn test_invalid_command_reports_field() {
        let cmd = SgReaderStart::new("invalid-lot");

        let errors = cmd.validate(ValidationMode::Collect).unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code(), ErrorCode::InvalidPattern);
        assert_eq!(errors[0].property_name(), "aggregateIdentifier");

        let error = cmd.validate(ValidationMode::FailFast).unwrap_err();
        assert_eq!(error.errors(), errors.as_slice());
    }

    #[test]
    fn test_lot_id_is_normalized() {
        let cmd = SgReaderStart::new(" Lot-007 ");
        assert_eq!(cmd.lot_id().unwrap().as_str(), "lot-007");
        let errors = SgReaderStart::new("").lot_id().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].property_name(), "aggregateIdentifier");
    }

    #[test]
    fn test_serialization_shape() {
        let cmd = SgReaderStart::new("lot-555");
        let json = serde_json::to_value(&cmd).unwrap();

        assert_eq!(json["aggregateIdentifier"], "lot-555");
        assert_eq!(json["version"], 1);
        assert_eq!(json["commandId"], cmd.command_id().to_string());
        assert!(json.get("occurredOnUtc").is_some());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let cmd = SgReaderStart::new("lot-666");
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: SgReaderStart = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, cmd);
        assert_eq!(deserialized.command_id(), cmd.command_id());
        assert_eq!(deserialized.version(), cmd.version());
        assert_eq!(deserialized.occurred_on_utc(), cmd.occurred_on_utc());
    }

    #[test]
    fn test_deserialization_keeps_foreign_version() {
        let cmd = SgReaderStart::with_version("lot-100", 7);
        let json = serde_json::to_string(&cmd).unwrap();
        let deserialized: SgReaderStart = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.version(), 7);
    }
}
