//! SG reader example application.
//!
//! Shows the domain toolkit end to end:
//! - `SgReaderStart` command and `SgReaderLotMetricsRecorded` event
//! - `LotMetrics` projection
//! - `SgReaderService`, an apply-once aggregate service keyed by lot

pub mod commands;
pub mod config;
pub mod events;
pub mod model;
pub mod service;
pub mod telemetry;

pub use commands::SgReaderStart;
pub use config::ServiceConfig;
pub use events::SgReaderLotMetricsRecorded;
pub use model::LotMetrics;
pub use service::{ApplyOutcome, SgReaderService};
