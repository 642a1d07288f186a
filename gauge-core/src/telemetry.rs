//! Tracing initialization.

use tracing_subscriber::EnvFilter;

use crate::config::TelemetryConfig;

/// Initialize the global tracing subscriber.
///
/// Filter resolution: `GAUGE_LOG` env var first, then the configured
/// default directive. Safe to call more than once per process; later
/// calls are no-ops.
pub fn init_tracing(config: &TelemetryConfig) {
    if !config.effective_enabled() {
        return;
    }

    let filter = EnvFilter::try_from_env("GAUGE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(config.effective_default_filter()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
