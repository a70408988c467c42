use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::GrindError;
use crate::preferences::{Preferences, Theme};
use crate::problems::sort::SortState;
use crate::storage::Storage;

pub const THEME_KEY: &str = "theme";
pub const SORT_KEY: &str = "sortConfig";

/// Theme and last sort, read once at start and rewritten on each change.
pub struct PreferencesStore {
    storage: Arc<dyn Storage>,
    prefs: Preferences,
}

impl PreferencesStore {
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let prefs = Preferences {
            theme: read_or_default::<Theme>(storage.as_ref(), THEME_KEY),
            sort: read_or_default::<SortState>(storage.as_ref(), SORT_KEY),
        };
        PreferencesStore { storage, prefs }
    }

    pub fn get(&self) -> Preferences {
        self.prefs
    }

    pub fn theme(&self) -> Theme {
        self.prefs.theme
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<(), GrindError> {
        self.prefs.theme = theme;
        write(self.storage.as_ref(), THEME_KEY, &theme)
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, GrindError> {
        let theme = self.prefs.theme.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }

    pub fn set_sort(&mut self, sort: SortState) -> Result<(), GrindError> {
        if self.prefs.sort == sort {
            return Ok(());
        }
        self.prefs.sort = sort;
        write(self.storage.as_ref(), SORT_KEY, &sort)
    }
}

fn read_or_default<T: DeserializeOwned + Default>(storage: &dyn Storage, key: &str) -> T {
    let Some(data) = storage.read(key) else {
        return T::default();
    };
    match serde_json::from_str::<T>(&data) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(key = key, error = %e, "Stored preference is corrupt, using default");
            T::default()
        }
    }
}

fn write<T: Serialize>(storage: &dyn Storage, key: &str, value: &T) -> Result<(), GrindError> {
    let json = serde_json::to_string(value)?;
    storage.write(key, &json)?;
    tracing::debug!(key = key, "Saved preference");
    Ok(())
}
