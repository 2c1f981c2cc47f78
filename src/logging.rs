//! Tracing initialization.

use tracing_subscriber::{EnvFilter, fmt};

use pushhub_core::config::logging::LoggingConfig;

/// Initialize tracing from logging configuration.
///
/// The `RUST_LOG` environment variable takes precedence over the configured
/// level.
pub fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(true).init();
        }
    }
}
