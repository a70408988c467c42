pub mod analytics;
pub mod api;
pub mod cache;
pub mod completion;
pub mod config;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod perf;
pub mod preferences;
pub mod problems;
pub mod state;
pub mod storage;
#[cfg(feature = "desktop")]
mod routes;

pub use error::{ErrorKind, GrindError};

// Test suites live under tests/ and are compiled as modules of the crate
#[cfg(test)]
#[path = "../tests/error_handling_test.rs"]
mod error_handling_test;
#[cfg(test)]
#[path = "../tests/normalize_test.rs"]
mod normalize_test;
#[cfg(test)]
#[path = "../tests/filter_test.rs"]
mod filter_test;
#[cfg(test)]
#[path = "../tests/sort_test.rs"]
mod sort_test;
#[cfg(test)]
#[path = "../tests/paginate_test.rs"]
mod paginate_test;
#[cfg(test)]
#[path = "../tests/completion_test.rs"]
mod completion_test;
#[cfg(test)]
#[path = "../tests/analytics_test.rs"]
mod analytics_test;
#[cfg(test)]
#[path = "../tests/storage_test.rs"]
mod storage_test;
#[cfg(test)]
#[path = "../tests/browser_test.rs"]
mod browser_test;
#[cfg(test)]
#[path = "../tests/api_client_test.rs"]
mod api_client_test;

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use std::sync::Arc;

    // Initialize structured logging first
    if let Err(e) = logging::init_logging() {
        eprintln!("{}", e);
    }
    tracing::info!("GrindLC starting");

    let config = config::get_app_config().clone();
    let storage: Arc<dyn storage::Storage> = Arc::new(storage::FileStorage::in_data_dir());
    let app_state = match state::AppState::new(config, storage) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e.detailed(), "Failed to initialize application state");
            return;
        }
    };

    // Kick off the single catalog fetch without blocking window creation
    let loader = Arc::clone(&app_state);
    tauri::async_runtime::spawn(async move {
        if let Err(e) = loader.load_catalog().await {
            tracing::warn!(error = %e.detailed(), "Initial catalog load failed");
        }
    });

    let result = tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            routes::load_catalog,
            routes::get_view,
            routes::set_filter,
            routes::reset_filters,
            routes::set_sort,
            routes::set_page,
            routes::next_page,
            routes::prev_page,
            routes::set_viewport_width,
            routes::toggle_completion,
            routes::import_solved,
            routes::reset_completion,
            routes::get_theme,
            routes::toggle_theme,
            routes::submit_feedback,
            routes::record_visit,
            routes::get_favorites,
            routes::add_favorite,
            routes::remove_favorite,
            routes::check_favorite,
            routes::get_metrics
        ])
        .run(tauri::generate_context!());

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to run Tauri application");
    }
}
