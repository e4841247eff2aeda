//! SG reader domain events.

use std::collections::HashMap;

use domain::{
    DomainError, DomainEvent, EventMetadata, LotId, StringValueObject, Validate, collect_errors,
};
use serde::{Deserialize, Serialize};

/// The reader recorded metrics for a lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SgReaderLotMetricsRecorded {
    #[serde(flatten)]
    metadata: EventMetadata,

    /// The lot the metrics belong to.
    pub lot_id: LotId,

    /// Metric name to measured value.
    pub metrics: HashMap<String, f64>,
}

impl SgReaderLotMetricsRecorded {
    /// Schema version produced by this build.
    pub const VERSION: u32 = 1;

    /// Type name used in logs and errors.
    pub const TYPE_NAME: &'static str = "SgReaderLotMetricsRecorded";

    /// Creates a new event for the current schema version.
    pub fn new(lot_id: LotId, metrics: HashMap<String, f64>) -> Self {
        Self::with_version(lot_id, metrics, Self::VERSION)
    }

    /// Creates an event stamped with an explicit schema version.
    pub fn with_version(lot_id: LotId, metrics: HashMap<String, f64>, version: u32) -> Self {
        Self {
            metadata: EventMetadata::new(version),
            lot_id,
            metrics,
        }
    }
}

impl Validate for SgReaderLotMetricsRecorded {
    fn errors(&self) -> Vec<DomainError> {
        collect_errors([("lotId", self.lot_id.errors())])
    }
}

impl DomainEvent for SgReaderLotMetricsRecorded {
    fn event_type(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
