//! SG reader service applying commands and events exactly once per lot.

use std::collections::HashMap;
use std::sync::Arc;

use domain::{Command, DomainEvent, HandlerError, LotId, ValidationError, ensure_version};
use tokio::sync::{Mutex, RwLock};

use crate::commands::SgReaderStart;
use crate::config::ServiceConfig;
use crate::events::SgReaderLotMetricsRecorded;
use crate::model::LotMetrics;

/// What an apply call did to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The message changed state.
    Applied,

    /// A message of this type was already applied; state is unchanged.
    AlreadyApplied,
}

/// In-memory state of one lot.
///
/// Each message type moves its own flag from unset to set once.
#[derive(Debug, Default)]
struct LotAggregate {
    reader_started: bool,
    metrics: Option<LotMetrics>,
}

/// Service for the SG reader lot aggregate.
///
/// Aggregates are keyed by lot. Each one sits behind its own mutex, so the
/// check-then-apply step is serialized per lot while different lots proceed
/// independently.
#[derive(Clone)]
pub struct SgReaderService {
    config: ServiceConfig,
    lots: Arc<RwLock<HashMap<LotId, Arc<Mutex<LotAggregate>>>>>,
}

impl SgReaderService {
    /// Creates a service accepting the current schema versions.
    pub fn new() -> Self {
        Self::with_config(ServiceConfig::default())
    }

    /// Creates a service with the given configuration.
    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            config,
            lots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Returns the service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Starts the reader for a lot.
    ///
    /// Rejects commands of another schema version or with an invalid lot.
    /// Starting an already started reader is a no-op.
    #[tracing::instrument(
        skip(self, cmd),
        fields(command_id = %cmd.command_id(), lot = %cmd.aggregate_identifier)
    )]
    pub async fn start_reader(&self, cmd: SgReaderStart) -> Result<ApplyOutcome, HandlerError> {
        ensure_version(
            SgReaderStart::TYPE_NAME,
            cmd.version(),
            self.config.command_version,
        )
        .map_err(|e| rejected(SgReaderStart::TYPE_NAME, e))?;
        let lot_id = cmd.lot_id().map_err(|errors| {
            rejected(SgReaderStart::TYPE_NAME, ValidationError::new(errors).into())
        })?;

        let aggregate = self.aggregate(&lot_id).await;
        let mut aggregate = aggregate.lock().await;

        if aggregate.reader_started {
            return Ok(already_applied(SgReaderStart::TYPE_NAME));
        }

        aggregate.reader_started = true;
        Ok(applied(SgReaderStart::TYPE_NAME))
    }

    /// Records metrics for a lot.
    ///
    /// Only the first accepted event for a lot materializes the projection;
    /// later ones leave it untouched.
    #[tracing::instrument(
        skip(self, event),
        fields(event_id = %event.event_id(), lot = %event.lot_id)
    )]
    pub async fn record_lot_metrics(
        &self,
        event: SgReaderLotMetricsRecorded,
    ) -> Result<ApplyOutcome, HandlerError> {
        event
            .admit(self.config.event_version)
            .map_err(|e| rejected(SgReaderLotMetricsRecorded::TYPE_NAME, e))?;

        let aggregate = self.aggregate(&event.lot_id).await;
        let mut aggregate = aggregate.lock().await;

        if aggregate.metrics.is_some() {
            return Ok(already_applied(SgReaderLotMetricsRecorded::TYPE_NAME));
        }

        aggregate.metrics = Some(LotMetrics {
            lot_id: event.lot_id,
            metrics: event.metrics,
        });
        Ok(applied(SgReaderLotMetricsRecorded::TYPE_NAME))
    }

    /// Returns the recorded metrics for a lot, if any.
    pub async fn lot_metrics(&self, lot_id: &LotId) -> Option<LotMetrics> {
        let aggregate = self.lots.read().await.get(lot_id).cloned()?;
        let aggregate = aggregate.lock().await;
        aggregate.metrics.clone()
    }

    /// Returns true if the reader was started for a lot.
    pub async fn is_reader_started(&self, lot_id: &LotId) -> bool {
        let Some(aggregate) = self.lots.read().await.get(lot_id).cloned() else {
            return false;
        };
        let aggregate = aggregate.lock().await;
        aggregate.reader_started
    }

    /// Returns the number of lots with state.
    pub async fn aggregate_count(&self) -> usize {
        self.lots.read().await.len()
    }

    async fn aggregate(&self, lot_id: &LotId) -> Arc<Mutex<LotAggregate>> {
        if let Some(aggregate) = self.lots.read().await.get(lot_id) {
            return Arc::clone(aggregate);
        }

        let mut lots = self.lots.write().await;
        Arc::clone(lots.entry(lot_id.clone()).or_default())
    }
}

impl Default for SgReaderService {
    fn default() -> Self {
        Self::new()
    }
}

fn applied(message_type: &'static str) -> ApplyOutcome {
    metrics::counter!("sg_reader_messages_applied_total", "message_type" => message_type)
        .increment(1);
    tracing::info!(message_type, "message applied");
    ApplyOutcome::Applied
}

fn already_applied(message_type: &'static str) -> ApplyOutcome {
    metrics::counter!("sg_reader_messages_duplicate_total", "message_type" => message_type)
        .increment(1);
    tracing::debug!(message_type, "message already applied, skipping");
    ApplyOutcome::AlreadyApplied
}

fn rejected(message_type: &'static str, error: HandlerError) -> HandlerError {
    metrics::counter!("sg_reader_messages_rejected_total", "message_type" => message_type)
        .increment(1);
    tracing::warn!(message_type, error = %error, "message rejected");
    error
}
