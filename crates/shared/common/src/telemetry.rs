//! Tracing subscriber setup.

use thiserror::Error;
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, util::SubscriberInitExt};
use tracing_subscriber::{util::TryInitError, EnvFilter};

use crate::config::CoreConfig;

/// Failures while installing the global subscriber
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),

    #[error("tracing already initialized: {0}")]
    AlreadyInitialized(#[from] TryInitError),
}

/// Build the filter for a configuration
pub fn env_filter(config: &CoreConfig) -> Result<EnvFilter, TelemetryError> {
    Ok(EnvFilter::try_new(config.filter_directive())?)
}

/// Initialize the global tracing subscriber.
///
/// Returns an error instead of panicking when a subscriber is already set,
/// so test binaries can call it more than once.
pub fn init_tracing(config: &CoreConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    tracing::debug!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
