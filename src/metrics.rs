use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Session counters. Atomic so the desktop shell can read them from any thread.
#[derive(Clone, Default)]
pub struct Metrics {
    /// Completed catalog loads (successful or not)
    pub catalog_loads: Arc<AtomicU64>,
    /// Filtered views served from the memo
    pub filter_cache_hits: Arc<AtomicU64>,
    /// Filtered views that had to be computed
    pub filter_cache_misses: Arc<AtomicU64>,
    pub completion_toggles: Arc<AtomicU64>,
    /// Successful bulk imports
    pub imports: Arc<AtomicU64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub catalog_loads: u64,
    pub filter_cache_hits: u64,
    pub filter_cache_misses: u64,
    pub completion_toggles: u64,
    pub imports: u64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_catalog_load(&self) {
        self.catalog_loads.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_hit(&self) {
        self.filter_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_cache_miss(&self) {
        self.filter_cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_toggle(&self) {
        self.completion_toggles.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_import(&self) {
        self.imports.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            catalog_loads: self.catalog_loads.load(Ordering::Relaxed),
            filter_cache_hits: self.filter_cache_hits.load(Ordering::Relaxed),
            filter_cache_misses: self.filter_cache_misses.load(Ordering::Relaxed),
            completion_toggles: self.completion_toggles.load(Ordering::Relaxed),
            imports: self.imports.load(Ordering::Relaxed),
        }
    }
}
