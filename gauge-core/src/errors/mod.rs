//! Error handling for Gauge.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.
//!
//! The aggregation functions themselves are infallible: unresolved
//! references, empty denominators, and missing optional fields are all
//! recovered locally. Configuration loading is the only fallible surface.

pub mod config_error;
pub mod error_code;

pub use config_error::ConfigError;
pub use error_code::GaugeErrorCode;
