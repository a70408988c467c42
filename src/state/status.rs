use serde::Serialize;

use crate::error::GrindError;

/// Lifecycle of the one catalog fetch per session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "error", rename_all = "snake_case")]
pub enum CatalogStatus {
    /// Fetch in flight (or not yet started)
    Loading,
    Ready,
    /// Fetch failed; only a user-triggered retry leaves this state
    Failed(GrindError),
}

impl CatalogStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogStatus::Ready)
    }

    pub fn error(&self) -> Option<&GrindError> {
        match self {
            CatalogStatus::Failed(e) => Some(e),
            _ => None,
        }
    }

    /// Log the current status (for debugging)
    pub fn log(&self) {
        match self {
            CatalogStatus::Loading => tracing::debug!("[Catalog] State = Loading"),
            CatalogStatus::Ready => tracing::debug!("[Catalog] State = Ready"),
            CatalogStatus::Failed(e) => {
                tracing::debug!(error = %e.detailed(), "[Catalog] State = Failed")
            }
        }
    }
}
