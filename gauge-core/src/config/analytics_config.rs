//! Analytics configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the aggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// How many categories a top-N ranking keeps. Default: 7.
    pub top_categories: Option<usize>,
    /// Trend window in months ending at the evaluation month; unset means
    /// the whole snapshot.
    pub trend_months: Option<u32>,
    /// Capacity of the caller-owned view-model cache. Default: 64.
    pub cache_capacity: Option<u64>,
}

impl AnalyticsConfig {
    /// Returns the effective ranking cutoff, defaulting to 7.
    pub fn effective_top_categories(&self) -> usize {
        self.top_categories.unwrap_or(7)
    }

    /// Returns the effective cache capacity, defaulting to 64.
    pub fn effective_cache_capacity(&self) -> u64 {
        self.cache_capacity.unwrap_or(64)
    }
}
