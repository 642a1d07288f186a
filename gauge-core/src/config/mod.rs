//! Configuration system for Gauge.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod analytics_config;
pub mod gauge_config;
pub mod telemetry_config;

pub use analytics_config::AnalyticsConfig;
pub use gauge_config::GaugeConfig;
pub use telemetry_config::TelemetryConfig;
