use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

use crate::problems::problem::Problem;

/// Distinct filter choices, always taken from the full catalog so options
/// never disappear while filtering.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Facets {
    /// Sorted
    pub companies: Vec<String>,
    /// Lowercased, in first-seen order
    pub difficulties: Vec<String>,
    /// Sorted
    pub topics: Vec<String>,
}

impl Facets {
    pub fn from_catalog(catalog: &[Problem]) -> Self {
        let companies: BTreeSet<&str> = catalog
            .iter()
            .flat_map(|p| p.companies.iter())
            .map(String::as_str)
            .filter(|c| !c.is_empty())
            .collect();

        let topics: BTreeSet<&str> = catalog
            .iter()
            .flat_map(|p| p.topics.iter())
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let difficulties = catalog
            .iter()
            .map(|p| p.difficulty.to_lowercase())
            .filter(|d| !d.is_empty() && seen.insert(d.clone()))
            .collect();

        Facets {
            companies: companies.into_iter().map(str::to_string).collect(),
            difficulties,
            topics: topics.into_iter().map(str::to_string).collect(),
        }
    }
}
