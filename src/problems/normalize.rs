//! Coercion of loosely-shaped catalog records into [`Problem`]s.
//!
//! Records go through two stages. [`RawProblem::from_value`] applies field
//! defaults the way the catalog backend is known to need them (missing title,
//! `tags` instead of `topics`, ratings stored as strings). [`RawProblem::canonicalize`]
//! then produces the trimmed, lowercased, fully typed [`Problem`]. Both run
//! once per catalog load.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ErrorKind, GrindError};
use crate::perf::PerfTimer;
use crate::problems::problem::Problem;

pub const DEFAULT_TITLE: &str = "Untitled";
pub const DEFAULT_ID: &str = "N/A";
pub const DEFAULT_DIFFICULTY: &str = "Unknown";

/// A record after field defaulting, before canonical typing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawProblem {
    pub id: Value,
    pub title: Value,
    pub url: Value,
    pub slug: Value,
    pub difficulty: Value,
    pub rating: Value,
    pub topics: Value,
    pub tags: Value,
    pub companies: Value,
}

impl RawProblem {
    /// Apply defaults to an arbitrary JSON value. Never fails: anything that
    /// is not an object becomes an all-default record.
    pub fn from_value(value: &Value) -> Self {
        let mut raw: RawProblem = match value {
            Value::Object(_) => serde_json::from_value(value.clone()).unwrap_or_default(),
            _ => RawProblem::default(),
        };

        if !is_truthy(&raw.difficulty) {
            raw.difficulty = Value::String(DEFAULT_DIFFICULTY.to_string());
        }
        if !is_truthy(&raw.title) {
            raw.title = Value::String(DEFAULT_TITLE.to_string());
        }
        if !is_truthy(&raw.id) {
            raw.id = Value::String(DEFAULT_ID.to_string());
        }
        // Older documents carry `tags` where newer ones carry `topics`
        if !raw.topics.is_array() {
            raw.topics = if raw.tags.is_array() {
                raw.tags.clone()
            } else {
                Value::Array(Vec::new())
            };
        }
        if !raw.companies.is_array() {
            raw.companies = Value::Array(Vec::new());
        }
        if !raw.rating.is_number() {
            raw.rating = Value::from(0);
        }
        raw
    }

    /// Produce the canonical problem: trimmed strings, lowercased difficulty,
    /// numeric rating (non-finite becomes 0), trimmed topic and company names.
    pub fn canonicalize(&self) -> Problem {
        let difficulty = if is_truthy(&self.difficulty) {
            js_string(&self.difficulty)
        } else {
            "unknown".to_string()
        };

        Problem {
            id: truthy_string(&self.id).trim().to_string(),
            title: truthy_string(&self.title).trim().to_string(),
            url: optional_string(&self.url),
            slug: optional_string(&self.slug),
            difficulty: difficulty.to_lowercase().trim().to_string(),
            rating: to_number(&self.rating),
            topics: string_list(&self.topics),
            companies: string_list(&self.companies),
        }
    }
}

/// Normalize a single record through both stages
pub fn normalize_record(value: &Value) -> Problem {
    RawProblem::from_value(value).canonicalize()
}

/// Normalize a fetched catalog payload. Only a non-array payload is an error;
/// malformed entries degrade to defaults.
pub fn normalize_catalog(payload: &Value) -> Result<Vec<Problem>, GrindError> {
    let records = payload.as_array().ok_or_else(|| {
        GrindError::new(
            ErrorKind::InvalidFormat,
            "Invalid data format received from API",
        )
        .with_context(format!("expected an array, got {}", value_type(payload)))
    })?;

    let _perf = PerfTimer::new("normalize_catalog");
    let problems: Vec<Problem> = records.iter().map(normalize_record).collect();
    tracing::debug!(count = problems.len(), "Normalized catalog");
    Ok(problems)
}

fn value_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Truthiness as the catalog's JSON producers treat it: null, false, 0 and
/// the empty string count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn truthy_string(value: &Value) -> String {
    if is_truthy(value) {
        js_string(value)
    } else {
        String::new()
    }
}

/// String conversion of a JSON scalar. Integral floats print without a
/// fraction so `12.0` and `12` give the same id.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                let f = n.as_f64().unwrap_or(0.0);
                if f.fract() == 0.0 && f.abs() < 1e21 {
                    format!("{:.0}", f)
                } else {
                    f.to_string()
                }
            }
        }
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(js_string).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn optional_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn to_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().map(|v| js_string(v).trim().to_string()).collect(),
        _ => Vec::new(),
    }
}
