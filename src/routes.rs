use std::sync::Arc;
use tauri::State;

use crate::api::models::{ApiMessage, FeedbackReceipt, VisitCount};
use crate::completion::ImportReport;
use crate::error::GrindError;
use crate::metrics::MetricsSnapshot;
use crate::preferences::Theme;
use crate::problems::filter::FilterCriterion;
use crate::problems::problem::ProblemId;
use crate::problems::sort::SortDirection;
use crate::state::app::AppState;
use crate::state::browser::BrowserView;

type AppHandle<'a> = State<'a, Arc<AppState>>;

/// Fetch the catalog. Also serves as the manual retry after a failure.
#[tauri::command]
pub async fn load_catalog(state: AppHandle<'_>) -> Result<BrowserView, GrindError> {
    let app_state = state.inner();
    match app_state.load_catalog().await {
        Ok(count) => tracing::info!(count, "Catalog ready"),
        // The failure is part of the returned view
        Err(e) => tracing::warn!(error = %e, "Catalog unavailable"),
    }
    Ok(app_state.view())
}

#[tauri::command]
pub fn get_view(state: AppHandle<'_>) -> BrowserView {
    state.view()
}

#[tauri::command]
pub fn set_filter(state: AppHandle<'_>, criterion: FilterCriterion, value: String) -> BrowserView {
    state.set_filter(criterion, &value)
}

#[tauri::command]
pub fn reset_filters(state: AppHandle<'_>) -> Result<BrowserView, GrindError> {
    state.reset_filters()
}

#[tauri::command]
pub fn set_sort(
    state: AppHandle<'_>,
    key: String,
    direction: Option<SortDirection>,
) -> Result<BrowserView, GrindError> {
    state.set_sort(&key, direction)
}

#[tauri::command]
pub fn set_page(state: AppHandle<'_>, page: usize) -> BrowserView {
    state.set_page(page)
}

#[tauri::command]
pub fn next_page(state: AppHandle<'_>) -> BrowserView {
    state.next_page()
}

#[tauri::command]
pub fn prev_page(state: AppHandle<'_>) -> BrowserView {
    state.prev_page()
}

#[tauri::command]
pub fn set_viewport_width(state: AppHandle<'_>, width: u32) -> BrowserView {
    state.set_viewport_width(width)
}

#[tauri::command]
pub fn toggle_completion(state: AppHandle<'_>, id: String) -> Result<BrowserView, GrindError> {
    state.toggle_completion(&id)?;
    Ok(state.view())
}

#[tauri::command]
pub fn import_solved(state: AppHandle<'_>, payload: String) -> Result<ImportReport, GrindError> {
    state.import_solved(&payload)
}

/// The frontend asks the user to confirm before invoking this
#[tauri::command]
pub fn reset_completion(state: AppHandle<'_>) -> Result<BrowserView, GrindError> {
    state.reset_completion()?;
    Ok(state.view())
}

#[tauri::command]
pub fn get_theme(state: AppHandle<'_>) -> Theme {
    state.theme()
}

#[tauri::command]
pub fn toggle_theme(state: AppHandle<'_>) -> Result<Theme, GrindError> {
    state.toggle_theme()
}

#[tauri::command]
pub async fn submit_feedback(
    state: AppHandle<'_>,
    message: String,
) -> Result<FeedbackReceipt, GrindError> {
    state.api.submit_feedback(&message).await
}

#[tauri::command]
pub async fn record_visit(state: AppHandle<'_>) -> Result<VisitCount, GrindError> {
    state.api.record_visit().await
}

#[tauri::command]
pub async fn get_favorites(state: AppHandle<'_>) -> Result<Vec<ProblemId>, GrindError> {
    state.api.favorites().await
}

#[tauri::command]
pub async fn add_favorite(
    state: AppHandle<'_>,
    problem_id: ProblemId,
) -> Result<ApiMessage, GrindError> {
    state.api.add_favorite(problem_id).await
}

#[tauri::command]
pub async fn remove_favorite(
    state: AppHandle<'_>,
    problem_id: ProblemId,
) -> Result<ApiMessage, GrindError> {
    state.api.remove_favorite(problem_id).await
}

#[tauri::command]
pub async fn check_favorite(state: AppHandle<'_>, problem_id: ProblemId) -> Result<bool, GrindError> {
    state.api.is_favorite(problem_id).await
}

#[tauri::command]
pub fn get_metrics(state: AppHandle<'_>) -> MetricsSnapshot {
    state.metrics.snapshot()
}
