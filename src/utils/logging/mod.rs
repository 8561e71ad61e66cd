//! Logging setup
//!
//! Installs the global `tracing` subscriber used by the binary. Library code
//! only emits events through the `tracing` macros.

use crate::config::LoggingConfig;
use crate::utils::error::{BookmsError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` wins over the configured level
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            BookmsError::Config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Initialize the global subscriber
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(config)?;

    let result = if config.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .try_init()
    };

    result.map_err(|e| BookmsError::internal(format!("Failed to initialize logging: {}", e)))
}
