use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;

use crate::problems::problem::{numeric_id, Difficulty, Problem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Id,
    Rating,
    Difficulty,
    /// Any unrecognised key: keeps the filtered order
    Unsorted,
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        Ok(SortKey::parse(&key))
    }
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key.trim().to_lowercase().as_str() {
            "id" => SortKey::Id,
            "rating" => SortKey::Rating,
            "difficulty" => SortKey::Difficulty,
            _ => SortKey::Unsorted,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            key: SortKey::Rating,
            direction: SortDirection::Desc,
        }
    }
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        SortState { key, direction }
    }

    /// Column-header behaviour: the active key sorted ascending flips to
    /// descending, anything else starts ascending.
    pub fn toggled(self, key: SortKey) -> Self {
        let direction = if self.key == key && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        SortState { key, direction }
    }

    /// Ascending comparison for this key; direction is applied by the caller
    pub fn compare(&self, a: &Problem, b: &Problem) -> Ordering {
        match self.key {
            SortKey::Id => compare_ids(&a.id, &b.id),
            SortKey::Rating => compare_ratings(a.rating, b.rating),
            SortKey::Difficulty => {
                Difficulty::rank(&a.difficulty).cmp(&Difficulty::rank(&b.difficulty))
            }
            SortKey::Unsorted => Ordering::Equal,
        }
    }

    fn directed(&self, a: &Problem, b: &Problem) -> Ordering {
        let ord = self.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Ids that both parse as numbers compare numerically. Numeric ids sort
/// before non-numeric ones, and two non-numeric ids compare as text.
pub fn compare_ids(a: &str, b: &str) -> Ordering {
    match (numeric_id(a), numeric_id(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn compare_ratings(a: f64, b: f64) -> Ordering {
    let a = if a.is_finite() { a } else { 0.0 };
    let b = if b.is_finite() { b } else { 0.0 };
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Stable in-place sort of catalog positions
pub fn sort_indices(catalog: &[Problem], indices: &mut [usize], sort: &SortState) {
    if sort.key == SortKey::Unsorted {
        return;
    }
    indices.sort_by(|&a, &b| sort.directed(&catalog[a], &catalog[b]));
}

/// Stable sort of owned problems; ties keep their incoming order
pub fn sort_problems(problems: &mut [Problem], sort: &SortState) {
    if sort.key == SortKey::Unsorted {
        return;
    }
    problems.sort_by(|a, b| sort.directed(a, b));
}
