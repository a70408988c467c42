use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of every failure the browser can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Catalog fetch failed at the transport level
    Network,
    /// Catalog payload was not a JSON array
    InvalidFormat,
    /// Import text was not valid JSON
    Parse,
    /// Import JSON lacked the `stat_status_pairs` array
    Format,
    /// Import contained no accepted submissions
    NoSolvedFound,
    /// None of the imported ids exist in the catalog
    NoMatchFound,
    /// Backend answered with a non-success status
    Api,
    Timeout,
    Io,
    Json,
    Config,
    State,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::Parse => "parse",
            ErrorKind::Format => "format",
            ErrorKind::NoSolvedFound => "no_solved_found",
            ErrorKind::NoMatchFound => "no_match_found",
            ErrorKind::Api => "api",
            ErrorKind::Timeout => "timeout",
            ErrorKind::Io => "io",
            ErrorKind::Json => "json",
            ErrorKind::Config => "config",
            ErrorKind::State => "state",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unified error type for the whole crate.
/// Serializable so it can be handed to the desktop frontend unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("[{kind}] {message}")]
pub struct GrindError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: Option<String>,
    /// Library the failure originated in
    pub origin: Option<String>,
}

impl GrindError {
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        GrindError {
            kind,
            message: message.into(),
            context: None,
            origin: None,
        }
    }

    /// Add additional context information
    pub fn with_context<S: Into<String>>(mut self, context: S) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Record which library the failure came from
    pub fn with_origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Catalog failures replace the whole browsing view; everything else
    /// is reported inline and the session carries on.
    pub fn blocks_main_view(&self) -> bool {
        matches!(self.kind, ErrorKind::Network | ErrorKind::InvalidFormat)
    }
}

impl GrindError {
    /// Display text plus context and origin, for log lines
    pub fn detailed(&self) -> String {
        let mut out = self.to_string();
        if let Some(ref context) = self.context {
            out.push_str(&format!(" (context: {})", context));
        }
        if let Some(ref origin) = self.origin {
            out.push_str(&format!(" (origin: {})", origin));
        }
        out
    }
}

impl From<anyhow::Error> for GrindError {
    fn from(err: anyhow::Error) -> Self {
        // Keep a typed error if one was wrapped with context further down
        match err.downcast::<GrindError>() {
            Ok(inner) => inner,
            Err(err) => {
                let kind = match err.downcast_ref::<reqwest::Error>() {
                    Some(e) if e.is_timeout() => ErrorKind::Timeout,
                    Some(e) if e.is_decode() => ErrorKind::InvalidFormat,
                    Some(_) => ErrorKind::Network,
                    None => ErrorKind::State,
                };
                GrindError::new(kind, format!("{:#}", err)).with_origin("anyhow")
            }
        }
    }
}

impl From<reqwest::Error> for GrindError {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout
        } else if err.is_decode() {
            ErrorKind::InvalidFormat
        } else {
            ErrorKind::Network
        };
        GrindError::new(kind, format!("HTTP error: {}", err)).with_origin("reqwest")
    }
}

impl From<std::io::Error> for GrindError {
    fn from(err: std::io::Error) -> Self {
        GrindError::new(ErrorKind::Io, format!("I/O error: {}", err)).with_origin("std::io")
    }
}

impl From<serde_json::Error> for GrindError {
    fn from(err: serde_json::Error) -> Self {
        GrindError::new(ErrorKind::Json, format!("JSON error: {}", err)).with_origin("serde_json")
    }
}

impl From<toml::de::Error> for GrindError {
    fn from(err: toml::de::Error) -> Self {
        GrindError::new(ErrorKind::Config, format!("Config error: {}", err)).with_origin("toml")
    }
}

impl From<tokio::time::error::Elapsed> for GrindError {
    fn from(_: tokio::time::error::Elapsed) -> Self {
        GrindError::new(ErrorKind::Timeout, "Operation timed out").with_origin("tokio::time")
    }
}

pub type Result<T> = std::result::Result<T, GrindError>;
