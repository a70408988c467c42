use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{ErrorKind, GrindError};

/// Durable key/value backend behind the completion and preference stores.
/// Values are JSON documents; a missing or unreadable key reads as `None`.
pub trait Storage: Send + Sync {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), GrindError>;
}

/// One `<key>.json` file per key inside a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileStorage { dir: dir.into() }
    }

    /// Storage rooted in the platform app data directory
    pub fn in_data_dir() -> Self {
        Self::new(crate::config::paths::data_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, GrindError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(GrindError::new(
                ErrorKind::State,
                format!("Invalid storage key: {:?}", key),
            ));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Option<String> {
        let path = self.path_for(key).ok()?;
        match std::fs::read_to_string(&path) {
            Ok(data) => Some(data),
            Err(e) => {
                tracing::debug!(path = ?path, error = %e, "Storage key not readable");
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), GrindError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            GrindError::from(e).with_context(format!("path: {:?}", self.dir))
        })?;
        // Write-then-rename so a crash never leaves half a document behind
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)
            .map_err(|e| GrindError::from(e).with_context(format!("path: {:?}", tmp)))?;
        std::fs::rename(&tmp, &path)
            .map_err(|e| GrindError::from(e).with_context(format!("path: {:?}", path)))?;
        Ok(())
    }
}

/// In-process storage, used by tests and as a scratch backend.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), GrindError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
