use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;

use crate::metrics::Metrics;
use crate::perf::PerfTimer;
use crate::problems::filter::{self, FilterState};
use crate::problems::problem::Problem;
use crate::problems::sort::{self, SortState};

/// Generate a hash key from the filter and sort inputs
fn view_key(filters: &FilterState, sort: &SortState) -> u64 {
    let mut hasher = DefaultHasher::new();
    filters.hash(&mut hasher);
    sort.hash(&mut hasher);
    hasher.finish()
}

/// A memoized result together with the inputs that produced it
struct CachedView {
    filters: FilterState,
    sort: SortState,
    indices: Arc<Vec<usize>>,
}

impl CachedView {
    fn answers(&self, filters: &FilterState, sort: &SortState) -> bool {
        self.sort == *sort && self.filters == *filters
    }
}

/// Memo of filtered-and-sorted catalog positions keyed by (filter, sort).
/// Must be cleared whenever the catalog is replaced.
pub struct FilterCache {
    entries: LruCache<u64, CachedView>,
    metrics: Metrics,
}

impl FilterCache {
    pub fn new(capacity: usize, metrics: Metrics) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        FilterCache {
            entries: LruCache::new(capacity),
            metrics,
        }
    }

    /// Positions into `catalog` that pass `filters`, ordered by `sort`
    pub fn get_or_compute(
        &mut self,
        catalog: &[Problem],
        filters: &FilterState,
        sort: &SortState,
    ) -> Arc<Vec<usize>> {
        let key = view_key(filters, sort);
        if let Some(hit) = self.entries.get(&key) {
            // Digest matches are confirmed against the stored inputs
            if hit.answers(filters, sort) {
                self.metrics.record_cache_hit();
                tracing::debug!(key, "Filter cache hit");
                return Arc::clone(&hit.indices);
            }
            tracing::debug!(key, "Filter cache slot holds other inputs");
        }

        self.metrics.record_cache_miss();
        tracing::debug!(key, "Filter cache miss");
        let _perf = PerfTimer::new("filter_and_sort");
        let mut indices = filter::filter_indices(catalog, filters);
        sort::sort_indices(catalog, &mut indices, sort);

        let indices = Arc::new(indices);
        self.entries.put(
            key,
            CachedView {
                filters: filters.clone(),
                sort: *sort,
                indices: Arc::clone(&indices),
            },
        );
        indices
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
