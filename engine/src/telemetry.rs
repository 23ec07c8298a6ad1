//! Telemetry and Observability
//!
//! Structured logging via `tracing-subscriber`. The filter honors
//! `RUST_LOG` when set; otherwise the level passed in (normally from the
//! config file, optionally overridden by `--log`). Debug builds log
//! pretty terminal output, release builds emit JSON.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the tracing subscriber at the given log level.
///
/// Idempotent: if a subscriber is already installed the call is a no-op.
pub fn init(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{log_level},sitewright_engine={log_level}"))
    });

    #[cfg(debug_assertions)]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty().with_target(false))
            .try_init()
            .ok();
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_current_span(true))
            .try_init()
            .ok();
    }
}
