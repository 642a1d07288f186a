//! Aggregation engine for the Gauge compliance dashboard.
//!
//! Pure derivation functions from an immutable
//! [`DashboardSnapshot`](gauge_core::model::DashboardSnapshot) (plus the
//! drill-down selection) to plain view-model records. No I/O, no
//! persistence, no formatting: category keys and labels cross the
//! presentation boundary untranslated, and every output is recomputed
//! per call. The only state this layer owns is the drill-down selection
//! key in [`issues::drilldown::DrilldownState`].

pub mod coverage;
pub mod issues;
pub mod memo;
pub mod normalize;
pub mod ranking;
pub mod scoring;
pub mod training;
pub mod trends;
pub mod views;
