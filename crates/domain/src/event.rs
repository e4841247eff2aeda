//! Domain event contract.

use chrono::{DateTime, Utc};
use common::EventId;
use serde::{Deserialize, Serialize};

use crate::error::HandlerError;
use crate::message::{Validate, ensure_supported};

/// Metadata carried by every domain event.
///
/// Flattened into the concrete event when serialized, giving the `eventId`,
/// `version`, and `occurredOnUtc` fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    event_id: EventId,
    version: u32,
    occurred_on_utc: DateTime<Utc>,
}

impl EventMetadata {
    /// Creates metadata with a fresh ID, stamped now.
    pub fn new(version: u32) -> Self {
        Self {
            event_id: EventId::new(),
            version,
            occurred_on_utc: Utc::now(),
        }
    }

    /// Returns the event ID.
    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    /// Returns the schema version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns when the event occurred.
    pub fn occurred_on_utc(&self) -> DateTime<Utc> {
        self.occurred_on_utc
    }
}

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Validate + Send + Sync {
    /// Returns the event type name.
    fn event_type(&self) -> &'static str;

    /// Returns the event metadata.
    fn metadata(&self) -> &EventMetadata;

    /// Returns the event ID.
    fn event_id(&self) -> EventId {
        self.metadata().event_id()
    }

    /// Returns the schema version.
    fn version(&self) -> u32 {
        self.metadata().version()
    }

    /// Returns when the event occurred.
    fn occurred_on_utc(&self) -> DateTime<Utc> {
        self.metadata().occurred_on_utc()
    }

    /// Checks the version against `expected_version`, then the payload.
    fn admit(&self, expected_version: u32) -> Result<(), HandlerError> {
        ensure_supported(self.event_type(), self.version(), expected_version, self)
    }
}
