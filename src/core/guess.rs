//! Guess evaluator: checking a guess against the odd set and scoring wins.

use super::constants::{
    MOVE_BONUS_MAX, MOVE_PENALTY_PER_WEIGHING, TIME_BONUS_MAX, TIME_PENALTY_PER_SECOND,
};
use super::difficulty::Difficulty;
use super::error::GameError;
use super::instance::PuzzleInstance;
use serde::{Deserialize, Serialize};

/// Outcome of one completed game, consumed by the progress tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub won: bool,
    pub elapsed_seconds: u64,
    pub move_count: u32,
    pub weighing_count: u32,
    pub difficulty: Difficulty,
}

/// Result of evaluating a single guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub guessed: usize,
    pub correct: bool,
    pub result: GameResult,
}

/// Check a guessed balloon against the hidden odd set.
///
/// Fails with `NoSelection` when no balloon id was supplied. A wrong guess is
/// a valid outcome, not an error: it carries a losing `GameResult` and the UI
/// reveals the odd set via `PuzzleInstance::odd_balloons`.
pub fn evaluate_guess(
    instance: &PuzzleInstance,
    selection: Option<usize>,
    elapsed_seconds: u64,
) -> Result<GuessOutcome, GameError> {
    let guessed = selection.ok_or(GameError::NoSelection)?;
    let correct = instance.odd_set.contains(&guessed);

    Ok(GuessOutcome {
        guessed,
        correct,
        result: GameResult {
            won: correct,
            elapsed_seconds,
            move_count: instance.move_count,
            weighing_count: instance.history.len() as u32,
            difficulty: instance.difficulty,
        },
    })
}

/// Score for a winning result: difficulty reward plus time and move bonuses.
/// Both bonuses shrink as time and weighings grow, floored at zero.
pub fn score(result: &GameResult) -> u32 {
    if !result.won {
        return 0;
    }
    let elapsed = result.elapsed_seconds.min(u32::MAX as u64) as u32;
    let time_bonus = TIME_BONUS_MAX.saturating_sub(elapsed.saturating_mul(TIME_PENALTY_PER_SECOND));
    let move_bonus = MOVE_BONUS_MAX.saturating_sub(result.move_count.saturating_mul(MOVE_PENALTY_PER_WEIGHING));
    result.difficulty.reward() + time_bonus + move_bonus
}
