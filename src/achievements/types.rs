//! Achievement system types and unlock state.

use crate::core::guess::GameResult;
use crate::stats::types::ProgressState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    /// Win your first game.
    FirstWin,
    /// Win in under 30 seconds.
    SpeedDemon,
    /// Win with at most 2 weighings.
    Efficient,
    /// Win 5 games in a row.
    OnFire,
    /// Win on expert difficulty.
    ExpertWin,
}

/// Static definition of an achievement. `unlocked_by` is the predicate run
/// against each winning result; the whole table is evaluated uniformly so new
/// achievements are one entry, not another conditional.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub secret: bool,
    pub unlocked_by: fn(&GameResult, &ProgressState) -> bool,
}

/// Record of an unlocked achievement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockedAchievement {
    pub unlocked_at: i64,
}

/// Unlock state across all games (saved to disk).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Achievements {
    pub unlocked: HashMap<AchievementId, UnlockedAchievement>,
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.contains_key(&id)
    }

    /// Unlock an achievement. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(
            id,
            UnlockedAchievement {
                unlocked_at: chrono::Utc::now().timestamp(),
            },
        );
        true
    }

    /// Run every predicate in the table against a winning result, unlocking
    /// any newly satisfied achievements. Already-unlocked achievements are
    /// never re-unlocked or re-reported.
    pub fn evaluate(&mut self, result: &GameResult, progress: &ProgressState) -> Vec<AchievementId> {
        let mut newly = Vec::new();
        for def in super::data::ALL_ACHIEVEMENTS {
            if !self.is_unlocked(def.id) && (def.unlocked_by)(result, progress) {
                self.unlock(def.id);
                newly.push(def.id);
            }
        }
        newly
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    pub fn total_count(&self) -> usize {
        super::data::ALL_ACHIEVEMENTS.len()
    }
}
