//! Optional caller-owned memoization for view-models.
//!
//! The engine itself is stateless and safe to re-run at any frequency.
//! Hosts that recompute aggressively can key a bounded cache on a
//! content fingerprint of snapshot + selection instead.

use std::sync::Arc;

use gauge_core::model::DashboardSnapshot;
use xxhash_rust::xxh3::Xxh3;

use crate::views::DashboardViewModel;

/// Content fingerprint of a snapshot + selection pair.
///
/// xxh3 over the serialized snapshot and the selected category key.
/// Stable for a given snapshot value within a process run.
pub fn snapshot_fingerprint(snapshot: &DashboardSnapshot, selected: Option<&str>) -> u64 {
    // Serializing plain owned data cannot fail.
    let bytes = serde_json::to_vec(snapshot).unwrap_or_default();

    let mut hasher = Xxh3::new();
    hasher.update(&bytes);
    if let Some(selected) = selected {
        hasher.update(b"\x00");
        hasher.update(selected.as_bytes());
    }
    hasher.digest()
}

/// Bounded view-model cache. Owned by the caller, never by the engine.
pub struct ViewModelCache {
    inner: moka::sync::Cache<u64, Arc<DashboardViewModel>>,
}

impl ViewModelCache {
    /// Create a cache holding at most `capacity` view-models.
    pub fn new(capacity: u64) -> Self {
        Self {
            inner: moka::sync::Cache::new(capacity),
        }
    }

    /// Look up by fingerprint, or build, insert, and return.
    pub fn get_or_build<F>(&self, fingerprint: u64, build: F) -> Arc<DashboardViewModel>
    where
        F: FnOnce() -> DashboardViewModel,
    {
        if let Some(hit) = self.inner.get(&fingerprint) {
            return hit;
        }
        let built = Arc::new(build());
        self.inner.insert(fingerprint, Arc::clone(&built));
        built
    }

    /// Drop every cached view-model.
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Cached entry count.
    pub fn len(&self) -> u64 {
        self.inner.entry_count()
    }

    /// True when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.inner.entry_count() == 0
    }
}
