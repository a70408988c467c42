pub mod import;
pub mod store;

use serde::Serialize;
use std::collections::BTreeSet;

use crate::problems::problem::{numeric_id, Problem, ProblemId};

pub use import::ImportReport;
pub use store::CompletionStore;

/// Ids of problems the user has marked done. Ids are held as numbers, so
/// `"12"` and `" 12"` refer to the same problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompletionSet {
    ids: BTreeSet<ProblemId>,
}

impl CompletionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ids<I: IntoIterator<Item = ProblemId>>(ids: I) -> Self {
        CompletionSet {
            ids: ids.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: ProblemId) -> bool {
        self.ids.contains(&id)
    }

    /// Whether a catalog problem is marked done
    pub fn is_completed(&self, problem: &Problem) -> bool {
        problem.numeric_id().map(|id| self.contains(id)).unwrap_or(false)
    }

    /// Flip one id. Returns the new state (`true` = completed), or `None`
    /// when the id is not numeric and nothing changed.
    pub fn toggle(&mut self, raw_id: &str) -> Option<bool> {
        let id = numeric_id(raw_id)?;
        if self.ids.remove(&id) {
            Some(false)
        } else {
            self.ids.insert(id);
            Some(true)
        }
    }

    /// Union with `ids`; returns how many were not already present
    pub fn extend<I: IntoIterator<Item = ProblemId>>(&mut self, ids: I) -> usize {
        ids.into_iter().filter(|id| self.ids.insert(*id)).count()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn to_vec(&self) -> Vec<ProblemId> {
        self.ids.iter().copied().collect()
    }
}
