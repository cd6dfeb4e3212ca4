//! # Logging Module
//!
//! Console logging for the batch pipeline. Initialized once from the binary;
//! the filter comes from `RUST_LOG` when set, otherwise from the `LOG_LEVEL`
//! configuration variable, defaulting to `info`.

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize the global tracing subscriber. Safe to call more than once.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| {
                let level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
                EnvFilter::try_new(level)
            })
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let init_result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .try_init();

        // A global subscriber may already be set (e.g. by a test harness).
        if init_result.is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}
