use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use crate::problems::problem::Problem;

/// One of the five independent filter criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterCriterion {
    Query,
    Company,
    Difficulty,
    Topic,
    RatingMin,
    RatingMax,
}

/// Active filter criteria. All are ANDed; an empty criterion matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Free text matched against id, title, companies and topics
    pub query: String,
    pub company: String,
    pub difficulty: String,
    pub topic: String,
    pub rating_min: Option<f64>,
    pub rating_max: Option<f64>,
}

impl FilterState {
    /// Set one criterion from user input. Rating bounds that do not parse as
    /// numbers clear the bound.
    pub fn set(&mut self, criterion: FilterCriterion, value: &str) {
        match criterion {
            FilterCriterion::Query => self.query = value.to_string(),
            FilterCriterion::Company => self.company = value.to_string(),
            FilterCriterion::Difficulty => self.difficulty = value.to_string(),
            FilterCriterion::Topic => self.topic = value.to_string(),
            FilterCriterion::RatingMin => self.rating_min = parse_bound(value),
            FilterCriterion::RatingMax => self.rating_max = parse_bound(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty()
            && self.company.trim().is_empty()
            && self.difficulty.trim().is_empty()
            && self.topic.trim().is_empty()
            && self.rating_min.is_none()
            && self.rating_max.is_none()
    }

    pub fn matches(&self, problem: &Problem) -> bool {
        self.matches_query(problem)
            && self.matches_company(problem)
            && self.matches_difficulty(problem)
            && self.matches_topic(problem)
            && self.matches_rating(problem)
    }

    fn matches_query(&self, problem: &Problem) -> bool {
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        problem.id.to_lowercase().contains(&needle)
            || problem.title.to_lowercase().contains(&needle)
            || problem.companies.iter().any(|c| c.to_lowercase().contains(&needle))
            || problem.topics.iter().any(|t| t.to_lowercase().contains(&needle))
    }

    fn matches_company(&self, problem: &Problem) -> bool {
        let company = self.company.trim().to_lowercase();
        company.is_empty() || problem.companies.iter().any(|c| c.to_lowercase() == company)
    }

    fn matches_difficulty(&self, problem: &Problem) -> bool {
        let difficulty = self.difficulty.trim().to_lowercase();
        difficulty.is_empty() || problem.difficulty.to_lowercase() == difficulty
    }

    fn matches_topic(&self, problem: &Problem) -> bool {
        let topic = self.topic.trim().to_lowercase();
        topic.is_empty() || problem.topics.iter().any(|t| t.to_lowercase() == topic)
    }

    fn matches_rating(&self, problem: &Problem) -> bool {
        if self.rating_min.is_none() && self.rating_max.is_none() {
            return true;
        }
        let min = self.rating_min.unwrap_or(0.0);
        let max = self.rating_max.unwrap_or(f64::INFINITY);
        !problem.rating.is_nan() && problem.rating >= min && problem.rating <= max
    }
}

// Hash the normalized form so equivalent inputs share a memo slot
impl Hash for FilterState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.query.trim().to_lowercase().hash(state);
        self.company.trim().to_lowercase().hash(state);
        self.difficulty.trim().to_lowercase().hash(state);
        self.topic.trim().to_lowercase().hash(state);
        self.rating_min.map(f64::to_bits).hash(state);
        self.rating_max.map(f64::to_bits).hash(state);
    }
}

fn parse_bound(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if !n.is_nan() => Some(n),
        _ => {
            tracing::warn!(value = %trimmed, "Ignoring non-numeric rating bound");
            None
        }
    }
}

/// Positions of the catalog entries that pass every criterion, in catalog order
pub fn filter_indices(catalog: &[Problem], filters: &FilterState) -> Vec<usize> {
    let indices: Vec<usize> = catalog
        .iter()
        .enumerate()
        .filter(|(_, p)| filters.matches(p))
        .map(|(i, _)| i)
        .collect();

    if indices.len() != catalog.len() {
        tracing::debug!(
            filtered_count = indices.len(),
            total_count = catalog.len(),
            "Filtered catalog"
        );
    }
    indices
}

/// Filtered copy of the catalog; the input is left untouched
pub fn filter_problems(catalog: &[Problem], filters: &FilterState) -> Vec<Problem> {
    catalog
        .iter()
        .filter(|p| filters.matches(p))
        .cloned()
        .collect()
}
