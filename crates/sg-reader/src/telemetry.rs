//! Tracing initialization for hosts embedding the service.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

use crate::config::ServiceConfig;

/// Installs a global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level is used. Fails if
/// a global subscriber is already installed.
pub fn init_tracing(config: &ServiceConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
