//! Difficulty catalog: a fixed table mapping each difficulty to its balloon
//! count, odd-balloon count, and weight mode.

use super::error::GameError;
use serde::{Deserialize, Serialize};

/// How odd-balloon weights deviate from baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightMode {
    /// All odd balloons are heavier by a fixed delta.
    KnownHeavier,
    /// Each odd balloon is independently heavier or lighter, with a random
    /// delta magnitude. Neither is revealed to the player.
    UnknownDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

/// Static generation parameters for one difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    pub difficulty: Difficulty,
    pub balloon_count: usize,
    pub odd_count: usize,
    pub weight_mode: WeightMode,
}

impl Difficulty {
    /// All difficulties in display order.
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    /// Look up a difficulty by its catalog name.
    pub fn from_name(name: &str) -> Result<Self, GameError> {
        match name {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(GameError::UnknownDifficulty(other.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }

    /// Generation parameters for this difficulty.
    pub fn profile(&self) -> DifficultyProfile {
        let (balloon_count, odd_count, weight_mode) = match self {
            Difficulty::Easy => (6, 1, WeightMode::KnownHeavier),
            Difficulty::Medium => (10, 1, WeightMode::KnownHeavier),
            Difficulty::Hard => (12, 1, WeightMode::UnknownDirection),
            Difficulty::Expert => (15, 2, WeightMode::KnownHeavier),
        };
        DifficultyProfile {
            difficulty: *self,
            balloon_count,
            odd_count,
            weight_mode,
        }
    }

    /// Base score reward for winning on this difficulty.
    pub fn reward(&self) -> u32 {
        match self {
            Difficulty::Easy => 100,
            Difficulty::Medium => 250,
            Difficulty::Hard => 400,
            Difficulty::Expert => 600,
        }
    }
}
