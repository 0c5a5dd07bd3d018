use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Difficulty tier a question belongs to.
///
/// Each category owns an independent pool and usage tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Easy,
    Medium,
    Hard,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 3] = [Category::Easy, Category::Medium, Category::Hard];

    /// Normalized label as it appears in the dataset after cleaning.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Easy => "easy",
            Category::Medium => "medium",
            Category::Hard => "hard",
        }
    }

    /// Capitalized label for headings and counters.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Easy => "Easy",
            Category::Medium => "Medium",
            Category::Hard => "Hard",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CategoryError {
    #[error("unknown category: {0:?}")]
    Unknown(String),
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Parses a raw label; surrounding whitespace and case are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| CategoryError::Unknown(s.to_string()))
    }
}
