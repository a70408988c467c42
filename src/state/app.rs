use parking_lot::RwLock;
use std::sync::Arc;

use crate::api::ApiClient;
use crate::completion::{CompletionSet, CompletionStore, ImportReport};
use crate::config::AppConfig;
use crate::error::GrindError;
use crate::metrics::Metrics;
use crate::preferences::{PreferencesStore, Theme};
use crate::problems::filter::FilterCriterion;
use crate::problems::sort::{SortDirection, SortKey, SortState};
use crate::state::browser::{BrowserState, BrowserView};
use crate::storage::Storage;

/// Application-wide state container.
/// Browser view state, the completion set and preferences live here and are
/// passed explicitly to every command.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub browser: Arc<RwLock<BrowserState>>,
    pub completion: Arc<RwLock<CompletionStore>>,
    pub preferences: Arc<RwLock<PreferencesStore>>,
    pub api: ApiClient,
    pub metrics: Metrics,
}

impl AppState {
    /// Build the state, reading persisted completion and preferences once
    pub fn new(config: AppConfig, storage: Arc<dyn Storage>) -> Result<Self, GrindError> {
        let metrics = Metrics::new();
        let preferences = PreferencesStore::load(Arc::clone(&storage));
        let completion = CompletionStore::load(storage);
        let browser = BrowserState::from_config(&config, preferences.get().sort, metrics.clone());
        let api = ApiClient::new(&config)?;

        Ok(AppState {
            config,
            browser: Arc::new(RwLock::new(browser)),
            completion: Arc::new(RwLock::new(completion)),
            preferences: Arc::new(RwLock::new(preferences)),
            api,
            metrics,
        })
    }

    /// Fetch and install the catalog. Called at startup and again only when
    /// the user asks for a retry.
    pub async fn load_catalog(&self) -> Result<usize, GrindError> {
        self.browser.write().begin_loading();
        let payload = self.api.fetch_catalog().await;
        self.browser.write().apply_payload(payload)
    }

    pub fn view(&self) -> BrowserView {
        let completion = self.completion.read();
        self.browser.write().view(completion.set())
    }

    pub fn set_filter(&self, criterion: FilterCriterion, value: &str) -> BrowserView {
        self.browser.write().set_filter(criterion, value);
        self.view()
    }

    pub fn reset_filters(&self) -> Result<BrowserView, GrindError> {
        self.browser.write().reset_filters();
        self.preferences.write().set_sort(SortState::default())?;
        Ok(self.view())
    }

    pub fn set_sort(&self, key: &str, direction: Option<SortDirection>) -> Result<BrowserView, GrindError> {
        let sort = self.browser.write().set_sort(SortKey::parse(key), direction);
        self.preferences.write().set_sort(sort)?;
        Ok(self.view())
    }

    pub fn set_page(&self, page: usize) -> BrowserView {
        self.browser.write().set_page(page);
        self.view()
    }

    pub fn next_page(&self) -> BrowserView {
        self.browser.write().next_page();
        self.view()
    }

    pub fn prev_page(&self) -> BrowserView {
        self.browser.write().prev_page();
        self.view()
    }

    pub fn set_viewport_width(&self, width: u32) -> BrowserView {
        self.browser.write().set_viewport_width(width, &self.config);
        self.view()
    }

    pub fn completed(&self) -> CompletionSet {
        self.completion.read().set().clone()
    }

    /// Returns the new state of the problem, `None` for non-numeric ids
    pub fn toggle_completion(&self, id: &str) -> Result<Option<bool>, GrindError> {
        let state = self.completion.write().toggle(id)?;
        if state.is_some() {
            self.metrics.record_toggle();
        }
        Ok(state)
    }

    pub fn import_solved(&self, raw_payload: &str) -> Result<ImportReport, GrindError> {
        let catalog = self.browser.read().catalog_handle();
        let report = self.completion.write().import(raw_payload, &catalog)?;
        self.metrics.record_import();
        Ok(report)
    }

    /// Clear every completion mark; the caller has already confirmed
    pub fn reset_completion(&self) -> Result<(), GrindError> {
        self.completion.write().reset()
    }

    pub fn theme(&self) -> Theme {
        self.preferences.read().theme()
    }

    pub fn toggle_theme(&self) -> Result<Theme, GrindError> {
        self.preferences.write().toggle_theme()
    }
}
