//! Service configuration loaded from environment variables.

use crate::commands::SgReaderStart;
use crate::events::SgReaderLotMetricsRecorded;

/// Configuration for [`SgReaderService`](crate::SgReaderService).
///
/// Reads from environment variables:
/// - `SG_READER_COMMAND_VERSION`: command schema version to accept (default: `1`)
/// - `SG_READER_EVENT_VERSION`: event schema version to accept (default: `1`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub command_version: u32,
    pub event_version: u32,
    pub log_level: String,
}

impl ServiceConfig {
    /// Loads configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`; unset or unparsable values use the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            command_version: lookup("SG_READER_COMMAND_VERSION")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.command_version),
            event_version: lookup("SG_READER_EVENT_VERSION")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.event_version),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            command_version: SgReaderStart::VERSION,
            event_version: SgReaderLotMetricsRecorded::VERSION,
            log_level: "info".to_string(),
        }
    }
}
