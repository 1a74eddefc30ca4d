//! Progress tracking: folding completed game results into cross-game state.

use super::types::ProgressState;
use crate::achievements::types::{AchievementId, Achievements};
use crate::core::guess::GameResult;

/// Fold one completed game into the progress state.
///
/// Wins extend the streak, update the best score (first win sets it
/// unconditionally), and run the achievement table; losses reset the streak
/// and skip achievement evaluation entirely. Returns the newly unlocked
/// achievement ids. The caller is responsible for persisting both states
/// immediately afterwards.
pub fn record_result(
    progress: &mut ProgressState,
    achievements: &mut Achievements,
    result: &GameResult,
) -> Vec<AchievementId> {
    progress.games_played += 1;
    progress.total_weighings += result.weighing_count as u64;

    if !result.won {
        progress.streak = 0;
        return Vec::new();
    }

    progress.wins += 1;
    progress.streak += 1;
    progress.best_score = Some(match progress.best_score {
        Some(best) => best.min(result.move_count),
        None => result.move_count,
    });

    achievements.evaluate(result, progress)
}
