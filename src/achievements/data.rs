//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};
use crate::core::constants::{EFFICIENT_WEIGHINGS, SPEED_DEMON_SECONDS, STREAK_TARGET};
use crate::core::difficulty::Difficulty;
use crate::core::guess::GameResult;
use crate::stats::types::ProgressState;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: AchievementId::FirstWin,
        name: "First Victory!",
        description: "Win your first game",
        icon: "🏆",
        secret: false,
        unlocked_by: first_win,
    },
    AchievementDef {
        id: AchievementId::SpeedDemon,
        name: "Speed Demon",
        description: "Win in under 30 seconds",
        icon: "⚡",
        secret: false,
        unlocked_by: speed_demon,
    },
    AchievementDef {
        id: AchievementId::Efficient,
        name: "Efficient",
        description: "Win with only 2 weighings",
        icon: "🎯",
        secret: false,
        unlocked_by: efficient,
    },
    AchievementDef {
        id: AchievementId::OnFire,
        name: "On Fire!",
        description: "Win 5 games in a row",
        icon: "🔥",
        secret: false,
        unlocked_by: on_fire,
    },
    AchievementDef {
        id: AchievementId::ExpertWin,
        name: "Expert Level",
        description: "Win on Expert difficulty",
        icon: "💎",
        secret: false,
        unlocked_by: expert_win,
    },
];

/// Look up the static definition for an id.
pub fn definition(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|def| def.id == id)
}

// Predicates run only against winning results; the streak has already been
// incremented by the time they are evaluated.

fn first_win(result: &GameResult, _progress: &ProgressState) -> bool {
    result.won
}

fn speed_demon(result: &GameResult, _progress: &ProgressState) -> bool {
    result.won && result.elapsed_seconds < SPEED_DEMON_SECONDS
}

fn efficient(result: &GameResult, _progress: &ProgressState) -> bool {
    result.won && result.weighing_count <= EFFICIENT_WEIGHINGS
}

fn on_fire(result: &GameResult, progress: &ProgressState) -> bool {
    result.won && progress.streak >= STREAK_TARGET
}

fn expert_win(result: &GameResult, _progress: &ProgressState) -> bool {
    result.won && result.difficulty == Difficulty::Expert
}
