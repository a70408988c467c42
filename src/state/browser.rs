use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

use crate::analytics::{compute_stats, Stats};
use crate::cache::FilterCache;
use crate::completion::CompletionSet;
use crate::config::AppConfig;
use crate::error::GrindError;
use crate::metrics::Metrics;
use crate::problems::facets::Facets;
use crate::problems::filter::{FilterCriterion, FilterState};
use crate::problems::normalize::normalize_catalog;
use crate::problems::paginate::{self, PageInfo};
use crate::problems::problem::Problem;
use crate::problems::sort::{SortDirection, SortKey, SortState};
use crate::state::status::CatalogStatus;

/// A catalog entry as shown in the table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemRow {
    #[serde(flatten)]
    pub problem: Problem,
    pub completed: bool,
}

/// Everything the problem-browsing view renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowserView {
    pub status: CatalogStatus,
    pub loaded_at: Option<DateTime<Utc>>,
    pub filters: FilterState,
    pub sort: SortState,
    pub rows: Vec<ProblemRow>,
    pub page_info: PageInfo,
    pub facets: Facets,
    pub stats: Stats,
}

/// View state of the problem browser: the normalized catalog plus the
/// filter, sort and page inputs. Derived data (filtered page, page list,
/// facets, stats) is computed from it on demand.
pub struct BrowserState {
    status: CatalogStatus,
    catalog: Arc<Vec<Problem>>,
    facets: Facets,
    loaded_at: Option<DateTime<Utc>>,
    filters: FilterState,
    sort: SortState,
    page: usize,
    page_size: usize,
    cache: FilterCache,
    metrics: Metrics,
}

impl BrowserState {
    pub fn new(page_size: usize, sort: SortState, cache_capacity: usize, metrics: Metrics) -> Self {
        BrowserState {
            status: CatalogStatus::Loading,
            catalog: Arc::new(Vec::new()),
            facets: Facets::default(),
            loaded_at: None,
            filters: FilterState::default(),
            sort,
            page: 1,
            page_size: page_size.max(1),
            cache: FilterCache::new(cache_capacity, metrics.clone()),
            metrics,
        }
    }

    pub fn from_config(config: &AppConfig, sort: SortState, metrics: Metrics) -> Self {
        Self::new(config.desktop_page_size, sort, config.filter_cache_capacity, metrics)
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn begin_loading(&mut self) {
        self.status = CatalogStatus::Loading;
        self.status.log();
    }

    /// Apply the outcome of a catalog fetch. Returns the number of problems
    /// loaded; on failure the browser enters the `Failed` state.
    pub fn apply_payload(&mut self, result: Result<Value, GrindError>) -> Result<usize, GrindError> {
        self.metrics.record_catalog_load();
        match result.and_then(|payload| normalize_catalog(&payload)) {
            Ok(problems) => {
                let count = problems.len();
                self.set_catalog(problems);
                tracing::info!(count, "Catalog loaded");
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e.detailed(), "Catalog load failed");
                self.status = CatalogStatus::Failed(e.clone());
                self.status.log();
                Err(e)
            }
        }
    }

    /// Replace the catalog with already-normalized problems
    pub fn set_catalog(&mut self, problems: Vec<Problem>) {
        self.facets = Facets::from_catalog(&problems);
        self.catalog = Arc::new(problems);
        self.cache.clear();
        self.page = 1;
        self.loaded_at = Some(Utc::now());
        self.status = CatalogStatus::Ready;
        self.status.log();
    }

    pub fn catalog(&self) -> &[Problem] {
        &self.catalog
    }

    /// Shared handle to the catalog, for work outside the state lock
    pub fn catalog_handle(&self) -> Arc<Vec<Problem>> {
        Arc::clone(&self.catalog)
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort(&self) -> SortState {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_filter(&mut self, criterion: FilterCriterion, value: &str) {
        self.filters.set(criterion, value);
        self.page = 1;
    }

    /// Clear every criterion and restore the default sort
    pub fn reset_filters(&mut self) {
        self.filters = FilterState::default();
        self.sort = SortState::default();
        self.page = 1;
    }

    /// Set the active sort. Without a direction this behaves like clicking
    /// the column header.
    pub fn set_sort(&mut self, key: SortKey, direction: Option<SortDirection>) -> SortState {
        self.sort = match direction {
            Some(direction) => SortState::new(key, direction),
            None => self.sort.toggled(key),
        };
        self.page = 1;
        self.sort
    }

    /// Catalog positions of the filtered, sorted sequence
    pub fn visible(&mut self) -> Arc<Vec<usize>> {
        self.cache.get_or_compute(&self.catalog, &self.filters, &self.sort)
    }

    pub fn filtered_count(&mut self) -> usize {
        self.visible().len()
    }

    pub fn total_pages(&mut self) -> usize {
        paginate::total_pages(self.filtered_count(), self.page_size)
    }

    /// Go to page `n`, clamped to the valid range. Returns the page shown.
    pub fn set_page(&mut self, n: usize) -> usize {
        let total = self.total_pages();
        self.page = paginate::clamp_page(n, total);
        self.page
    }

    pub fn next_page(&mut self) -> usize {
        self.set_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&mut self) -> usize {
        self.set_page(self.page.saturating_sub(1))
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        let total = self.total_pages();
        self.page = paginate::clamp_page(self.page, total);
    }

    /// Pick the page size for a viewport width
    pub fn set_viewport_width(&mut self, width: u32, config: &AppConfig) {
        let size = config.page_size_for_width(width);
        if size != self.page_size {
            tracing::debug!(width, page_size = size, "Page size changed");
            self.set_page_size(size);
        }
    }

    pub fn page_info(&mut self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.filtered_count())
    }

    /// The whole filtered, sorted sequence
    pub fn filtered(&mut self) -> Vec<Problem> {
        let visible = self.visible();
        visible.iter().map(|&i| self.catalog[i].clone()).collect()
    }

    /// Problems on the current page
    pub fn filtered_page(&mut self) -> Vec<Problem> {
        let visible = self.visible();
        paginate::page_slice(&visible, self.page, self.page_size)
            .iter()
            .map(|&i| self.catalog[i].clone())
            .collect()
    }

    /// Assemble the full read model for the view
    pub fn view(&mut self, completed: &CompletionSet) -> BrowserView {
        let rows = self
            .filtered_page()
            .into_iter()
            .map(|problem| ProblemRow {
                completed: completed.is_completed(&problem),
                problem,
            })
            .collect();

        BrowserView {
            status: self.status.clone(),
            loaded_at: self.loaded_at,
            filters: self.filters.clone(),
            sort: self.sort,
            rows,
            page_info: self.page_info(),
            facets: self.facets.clone(),
            stats: compute_stats(&self.catalog, completed),
        }
    }
}
