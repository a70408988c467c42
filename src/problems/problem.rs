use serde::{Deserialize, Serialize};

/// Numeric form of a problem id, used by the completion set.
pub type ProblemId = i64;

/// A catalog entry after normalization: every field present and typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Lowercased, conventionally `easy|medium|hard|unknown`
    pub difficulty: String,
    /// Contest rating; 0 means no rating data
    pub rating: f64,
    pub topics: Vec<String>,
    pub companies: Vec<String>,
}

impl Problem {
    /// The id as a number, if it is one
    pub fn numeric_id(&self) -> Option<ProblemId> {
        numeric_id(&self.id)
    }

    pub fn has_rating(&self) -> bool {
        self.rating > 0.0
    }

    pub fn difficulty_level(&self) -> Option<Difficulty> {
        Difficulty::from_label(&self.difficulty)
    }
}

/// Coerce a textual id to a number. Accepts integral decimals such as `"12"`,
/// `" 12 "` or `"12.0"`; anything else (including the empty string) is `None`.
pub fn numeric_id(raw: &str) -> Option<ProblemId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(n) = trimmed.parse::<ProblemId>() {
        return Some(n);
    }
    match trimmed.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < 9.0e15 => Some(f as ProblemId),
        _ => None,
    }
}

/// The three ranked difficulty levels. Other labels are legal on a problem
/// but rank below all of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy = 1,
    Medium = 2,
    Hard = 3,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// Case-insensitive lookup; unknown labels yield `None`
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Sort rank of a label: easy=1, medium=2, hard=3, anything else 0
    pub fn rank(label: &str) -> u8 {
        Self::from_label(label).map(|d| d as u8).unwrap_or(0)
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_id_accepts_integral_text() {
        assert_eq!(numeric_id("42"), Some(42));
        assert_eq!(numeric_id(" 7 "), Some(7));
        assert_eq!(numeric_id("3.0"), Some(3));
        assert_eq!(numeric_id("3.5"), None);
        assert_eq!(numeric_id("N/A"), None);
        assert_eq!(numeric_id(""), None);
    }

    #[test]
    fn difficulty_rank_ignores_case() {
        assert_eq!(Difficulty::rank("Easy"), 1);
        assert_eq!(Difficulty::rank("MEDIUM"), 2);
        assert_eq!(Difficulty::rank("hard"), 3);
        assert_eq!(Difficulty::rank("unknown"), 0);
    }
}
