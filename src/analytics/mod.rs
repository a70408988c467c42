use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::completion::CompletionSet;
use crate::problems::problem::{Difficulty, Problem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DifficultyBreakdown {
    pub easy: Progress,
    pub medium: Progress,
    pub hard: Progress,
}

impl DifficultyBreakdown {
    pub fn get(&self, difficulty: Difficulty) -> Progress {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    fn get_mut(&mut self, difficulty: Difficulty) -> &mut Progress {
        match difficulty {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicStats {
    pub topic: String,
    pub solved: usize,
    pub total: usize,
    /// Mean rating of solved, rated problems; `None` when there are none
    pub average_rating: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Stats {
    pub overall: Progress,
    pub per_difficulty: DifficultyBreakdown,
    /// One entry per distinct topic, sorted by name
    pub per_topic: Vec<TopicStats>,
}

#[derive(Default)]
struct TopicAccumulator {
    solved: usize,
    total: usize,
    rating_sum: f64,
    rating_count: usize,
}

/// Derive progress figures from the full catalog and the completion set.
/// Pure; an empty catalog gives all zeros.
pub fn compute_stats(catalog: &[Problem], completed: &CompletionSet) -> Stats {
    let mut per_difficulty = DifficultyBreakdown::default();
    let mut topics: BTreeMap<&str, TopicAccumulator> = BTreeMap::new();

    for problem in catalog {
        let done = completed.is_completed(problem);

        if let Some(level) = problem.difficulty_level() {
            let progress = per_difficulty.get_mut(level);
            progress.total += 1;
            if done {
                progress.completed += 1;
            }
        }

        // A topic listed twice on one problem still counts once
        let distinct: BTreeSet<&str> = problem
            .topics
            .iter()
            .map(String::as_str)
            .filter(|t| !t.is_empty())
            .collect();

        for topic in distinct {
            let acc = topics.entry(topic).or_default();
            acc.total += 1;
            if done {
                acc.solved += 1;
                if problem.has_rating() {
                    acc.rating_sum += problem.rating;
                    acc.rating_count += 1;
                }
            }
        }
    }

    let per_topic = topics
        .into_iter()
        .map(|(topic, acc)| TopicStats {
            topic: topic.to_string(),
            solved: acc.solved,
            total: acc.total,
            average_rating: if acc.rating_count > 0 {
                Some(acc.rating_sum / acc.rating_count as f64)
            } else {
                None
            },
        })
        .collect();

    Stats {
        overall: Progress {
            completed: completed.len(),
            total: catalog.len(),
        },
        per_difficulty,
        per_topic,
    }
}
