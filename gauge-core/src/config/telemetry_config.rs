//! Telemetry configuration.

use serde::{Deserialize, Serialize};

/// Tracing toggles.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Enable tracing output. Default: true.
    pub enabled: Option<bool>,
    /// Filter directive used when `GAUGE_LOG` is unset. Default: "info".
    pub default_filter: Option<String>,
}

impl TelemetryConfig {
    /// Returns whether tracing is enabled, defaulting to true.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(true)
    }

    /// Returns the fallback filter directive, defaulting to "info".
    pub fn effective_default_filter(&self) -> &str {
        self.default_filter.as_deref().unwrap_or("info")
    }
}
