use serde_json::Value;
use std::sync::Arc;

use crate::completion::import::{self, ImportReport};
use crate::completion::CompletionSet;
use crate::error::GrindError;
use crate::problems::problem::{numeric_id, Problem, ProblemId};
use crate::storage::Storage;

/// Storage key of the completed-id list
pub const COMPLETED_KEY: &str = "completedProblems";

/// The completion set plus its durable copy. Every mutation rewrites the
/// whole list before returning.
pub struct CompletionStore {
    storage: Arc<dyn Storage>,
    set: CompletionSet,
}

impl CompletionStore {
    /// Read the persisted list once. Absent or corrupt data yields an empty set.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let set = match storage.read(COMPLETED_KEY) {
            Some(data) => decode(&data).unwrap_or_else(|| {
                tracing::warn!(key = COMPLETED_KEY, "Stored completion list is corrupt, starting empty");
                CompletionSet::new()
            }),
            None => CompletionSet::new(),
        };
        tracing::debug!(completed = set.len(), "Loaded completion set");
        CompletionStore { storage, set }
    }

    pub fn set(&self) -> &CompletionSet {
        &self.set
    }

    /// Flip one problem. Returns the new state, `None` for non-numeric ids.
    /// A failed write undoes the flip.
    pub fn toggle(&mut self, raw_id: &str) -> Result<Option<bool>, GrindError> {
        let state = self.set.toggle(raw_id);
        match state {
            Some(completed) => {
                if let Err(e) = persist(self.storage.as_ref(), &self.set) {
                    self.set.toggle(raw_id);
                    tracing::warn!(id = %raw_id.trim(), error = %e, "Toggle not saved, reverted");
                    return Err(e);
                }
                tracing::debug!(id = %raw_id.trim(), completed, "Toggled completion");
            }
            None => tracing::warn!(id = %raw_id, "Ignoring toggle for non-numeric id"),
        }
        Ok(state)
    }

    /// Merge the accepted problems of a pasted LeetCode document. On any
    /// failure the set is left unchanged.
    pub fn import(&mut self, raw_payload: &str, catalog: &[Problem]) -> Result<ImportReport, GrindError> {
        let solved = import::parse_solved_ids(raw_payload)?;
        let matched = import::match_catalog(catalog, &solved)?;

        let mut merged = self.set.clone();
        let newly_added = merged.extend(matched.iter().copied());
        persist(self.storage.as_ref(), &merged)?;
        self.set = merged;

        let report = ImportReport {
            matched: matched.len(),
            newly_added,
            total_completed: self.set.len(),
        };
        tracing::info!(
            matched = report.matched,
            newly_added = report.newly_added,
            total_completed = report.total_completed,
            "Imported solved problems"
        );
        Ok(report)
    }

    /// Drop every mark. Callers confirm with the user first.
    pub fn reset(&mut self) -> Result<(), GrindError> {
        persist(self.storage.as_ref(), &CompletionSet::new())?;
        let cleared = self.set.len();
        self.set.clear();
        tracing::info!(cleared, "Reset completion set");
        Ok(())
    }
}

fn persist(storage: &dyn Storage, set: &CompletionSet) -> Result<(), GrindError> {
    let json = serde_json::to_string(&set.to_vec())?;
    storage.write(COMPLETED_KEY, &json)
}

/// Accept a JSON array of numbers or numeric strings; entries that are
/// neither are dropped. Anything other than an array is corrupt.
fn decode(data: &str) -> Option<CompletionSet> {
    let value: Value = serde_json::from_str(data).ok()?;
    let items = value.as_array()?;
    let ids = items.iter().filter_map(|item| -> Option<ProblemId> {
        match item {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => numeric_id(s),
            _ => None,
        }
    });
    Some(CompletionSet::from_ids(ids))
}
