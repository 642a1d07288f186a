//! Core types, errors, config, and tracing for the Gauge compliance
//! analytics engine.
//!
//! This crate owns the domain model (immutable snapshot records supplied
//! by the persistence collaborator), the configuration system, and the
//! shared ambient pieces. All derivation logic lives in `gauge-analytics`.

pub mod config;
pub mod errors;
pub mod model;
pub mod telemetry;
pub mod types;
