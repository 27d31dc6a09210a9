//! Tracing setup: structured logging with span definitions.

pub mod spans;

pub use spans::names;

use std::sync::Once;

use anirec_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable read for per-target log filtering.
pub const LOG_ENV: &str = "ANIREC_LOG";

/// Initialize tracing with default settings.
///
/// Respects `ANIREC_LOG`; falls back to `info`.
pub fn init_tracing() {
    init_tracing_with_config(&ObservabilityConfig::default());
}

/// Initialize the tracing subscriber from configuration.
///
/// `ANIREC_LOG` takes priority over `config.log_level`. Idempotent: only the
/// first call installs a subscriber.
pub fn init_tracing_with_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(&config.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_thread_ids(true))
                .try_init()
        };

        // Another subscriber (e.g. a test harness) may already be installed.
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_tracing();
        init_tracing_with_config(&ObservabilityConfig {
            log_level: "debug".into(),
            json_logs: true,
        });
    }
}
