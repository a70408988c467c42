use std::path::PathBuf;

const APP_IDENTIFIER: &str = "com.grindlc.app";

/// Platform-specific app data directory, e.g.
/// `~/Library/Application Support/com.grindlc.app` on macOS.
pub fn data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push("Library/Application Support");
            dir.push(APP_IDENTIFIER);
            return dir;
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            let mut dir = PathBuf::from(appdata);
            dir.push(APP_IDENTIFIER);
            return dir;
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(data_home) = std::env::var_os("XDG_DATA_HOME") {
            let mut dir = PathBuf::from(data_home);
            dir.push(APP_IDENTIFIER);
            return dir;
        }
        if let Some(home) = std::env::var_os("HOME") {
            let mut dir = PathBuf::from(home);
            dir.push(".local/share");
            dir.push(APP_IDENTIFIER);
            return dir;
        }
    }

    // Fallback
    PathBuf::from(".").join(APP_IDENTIFIER)
}

pub fn config_path() -> PathBuf {
    data_dir().join("config.toml")
}
