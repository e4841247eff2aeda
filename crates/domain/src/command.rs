//! Command contract.

use chrono::{DateTime, Utc};
use common::CommandId;
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;
use crate::message::{Validate, ensure_supported};

/// Metadata carried by every command.
///
/// Flattened into the concrete command when serialized, giving the
/// `commandId`, `version`, and `occurredOnUtc` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandMetadata {
    command_id: CommandId,
    version: u32,
    occurred_on_utc: DateTime<Utc>,
}

impl CommandMetadata {
    /// Creates metadata with a fresh ID, stamped now.
    pub fn new(version: u32) -> Self {
        Self {
            command_id: CommandId::new(),
            version,
            occurred_on_utc: Utc::now(),
        }
    }

    /// Returns the command ID.
    pub fn command_id(&self) -> CommandId {
        self.command_id
    }

    /// Returns the schema version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns when the command was issued.
    pub fn occurred_on_utc(&self) -> DateTime<Utc> {
        self.occurred_on_utc
    }
}

/// Trait for commands.
///
/// Commands represent an intention to perform an action on one aggregate.
/// They are constructed once, validated, and handed to exactly one handler.
pub trait Command: Validate + Send + Sync {
    /// Returns the command type name.
    fn command_type(&self) -> &'static str;

    /// Returns the command metadata.
    fn metadata(&self) -> &CommandMetadata;

    /// Returns the raw identifier of the target aggregate.
    fn aggregate_identifier(&self) -> &str;

    /// Returns the command ID.
    fn command_id(&self) -> CommandId {
        self.metadata().command_id()
    }

    /// Returns the schema version.
    fn version(&self) -> u32 {
        self.metadata().version()
    }

    /// Returns when the command was issued.
    fn occurred_on_utc(&self) -> DateTime<Utc> {
        self.metadata().occurred_on_utc()
    }

    /// Checks the version against `expected_version`, then the payload.
    fn admit(&self, expected_version: u32) -> Result<(), HandlerError> {
        ensure_supported(self.command_type(), self.version(), expected_version, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    struct Ping {
        metadata: CommandMetadata,
        target: String,
    }

    impl Validate for Ping {
        fn errors(&self) -> Vec<DomainError> {
            vec![]
        }
    }

    impl Command for Ping {
        fn command_type(&self) -> &'static str {
            "Ping"
        }

        fn metadata(&self) -> &CommandMetadata {
            &self.metadata
        }

        fn aggregate_identifier(&self) -> &str {
            &self.target
        }
    }

    #[test]
    fn test_metadata_defaults() {
        let before = Utc::now();
        let metadata = CommandMetadata::new(3);
        assert_eq!(metadata.version(), 3);
        assert!(metadata.occurred_on_utc() >= before);
        assert!(metadata.occurred_on_utc() <= Utc::now());
    }

    #[test]
    fn test_command_ids_are_unique() {
        assert_ne!(
            CommandMetadata::new(1).command_id(),
            CommandMetadata::new(1).command_id()
        );
    }

    #[test]
    fn test_metadata_serializes_camel_case() {
        let metadata = CommandMetadata::new(1);
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("commandId").is_some());
        assert_eq!(json["version"], 1);
        assert!(json.get("occurredOnUtc").is_some());

        let parsed: CommandMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, metadata);
    }

    #[test]
    fn test_admit_checks_version() {
        let ping = Ping {
            metadata: CommandMetadata::new(2),
            target: "x".to_string(),
        };
        assert_eq!(ping.aggregate_identifier(), "x");
        assert!(ping.admit(2).is_ok());
        assert!(matches!(
            ping.admit(1),
            Err(HandlerError::UnsupportedVersion {
                message_type: "Ping",
                ..
            })
        ));
    }
}
