//! Reconciliation of a pasted LeetCode "all problems" document
//! (`https://leetcode.com/api/problems/all/`) against the catalog.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

use crate::error::{ErrorKind, GrindError};
use crate::problems::problem::{Problem, ProblemId};

/// Field holding the per-problem status records
pub const STATUS_PAIRS_FIELD: &str = "stat_status_pairs";
/// Status marking an accepted submission
pub const ACCEPTED_STATUS: &str = "ac";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Catalog problems the payload marks as solved
    pub matched: usize,
    /// Matched problems that were not already completed
    pub newly_added: usize,
    /// Completion set size after the import
    pub total_completed: usize,
}

/// Extract the ids of accepted problems from the raw pasted text.
pub fn parse_solved_ids(raw: &str) -> Result<Vec<ProblemId>, GrindError> {
    let parsed: Value = serde_json::from_str(raw).map_err(|e| {
        GrindError::new(
            ErrorKind::Parse,
            "Invalid JSON. Please paste the full JSON from LeetCode.",
        )
        .with_context(e.to_string())
        .with_origin("serde_json")
    })?;

    let pairs = parsed
        .get(STATUS_PAIRS_FIELD)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            GrindError::new(
                ErrorKind::Format,
                "JSON format not recognized. Please ensure you copied from https://leetcode.com/api/problems/all/",
            )
            .with_context(format!("missing `{}` array", STATUS_PAIRS_FIELD))
        })?;

    let accepted: Vec<&Value> = pairs
        .iter()
        .filter(|pair| pair.get("status").and_then(Value::as_str) == Some(ACCEPTED_STATUS))
        .collect();

    if accepted.is_empty() {
        return Err(GrindError::new(
            ErrorKind::NoSolvedFound,
            "No solved problems found in the pasted JSON.",
        ));
    }

    let ids: Vec<ProblemId> = accepted
        .iter()
        .filter_map(|pair| pair.get("stat")?.get("frontend_question_id"))
        .filter_map(question_id)
        .collect();

    tracing::debug!(
        pairs = pairs.len(),
        accepted = accepted.len(),
        usable_ids = ids.len(),
        "Parsed solved list"
    );
    Ok(ids)
}

/// Catalog ids (numeric form) that appear in `solved`, in catalog order and
/// without duplicates.
pub fn match_catalog(catalog: &[Problem], solved: &[ProblemId]) -> Result<Vec<ProblemId>, GrindError> {
    let solved: HashSet<ProblemId> = solved.iter().copied().collect();
    let mut seen = HashSet::new();
    let matched: Vec<ProblemId> = catalog
        .iter()
        .filter_map(Problem::numeric_id)
        .filter(|id| solved.contains(id) && seen.insert(*id))
        .collect();

    if matched.is_empty() {
        return Err(GrindError::new(
            ErrorKind::NoMatchFound,
            "No matching problems found in your dashboard.",
        ));
    }
    Ok(matched)
}

fn question_id(value: &Value) -> Option<ProblemId> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as ProblemId)),
        Value::String(s) => crate::problems::problem::numeric_id(s),
        _ => None,
    }
}
