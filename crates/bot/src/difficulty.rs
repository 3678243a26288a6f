//! Difficulty levels for the automated opponent
//!
//! | Difficulty | Policy                                   |
//! |------------|------------------------------------------|
//! | Easy       | uniform random legal move                |
//! | Medium     | random capture 70% of the time, if any   |
//! | Hard       | minimax with alpha-beta, 2 plies         |
//! | Very Hard  | minimax with alpha-beta, 3 plies         |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
    VeryHard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::VeryHard,
    ];

    /// Minimax depth in plies; `None` for the levels that do not search.
    pub fn search_depth(self) -> Option<u8> {
        match self {
            Difficulty::Easy | Difficulty::Medium => None,
            Difficulty::Hard => Some(2),
            Difficulty::VeryHard => Some(3),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::VeryHard => "Very Hard",
        };
        f.write_str(label)
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    /// Case-insensitive; "very-hard", "very hard", "very_hard" and "veryhard"
    /// all name the top level.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "veryhard" => Ok(Difficulty::VeryHard),
            _ => Err(ConfigError::UnknownDifficulty {
                name: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
#[path = "difficulty_tests.rs"]
mod difficulty_tests;
