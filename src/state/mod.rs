pub mod app;
pub mod browser;
pub mod status;

pub use app::AppState;
pub use browser::{BrowserState, BrowserView};
pub use status::CatalogStatus;
