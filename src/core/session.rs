//! Game session: single owner of all mutable game state.
//!
//! A `GameSession` holds the live puzzle instance, the guess selection, the
//! elapsed-time clock, and the cross-game progress and achievement state. The
//! UI never mutates any of this directly; it reads snapshots and issues the
//! commands below, each of which runs to completion before the next one.

use super::difficulty::Difficulty;
use super::error::GameError;
use super::generation::generate_puzzle;
use super::guess::{evaluate_guess, score, GameResult};
use super::instance::{Outcome, Pan, PuzzleInstance};
use super::weighing;
use crate::achievements::{Achievements, AchievementId};
use crate::stats::{record_result, ProgressState};
use rand::Rng;
use std::time::Instant;

/// Everything the UI needs to present one resolved guess.
#[derive(Debug, Clone)]
pub struct GuessReport {
    pub guessed: usize,
    pub correct: bool,
    pub result: GameResult,
    /// Score earned; zero for a loss.
    pub score: u32,
    /// The full odd set, revealed on a wrong guess (empty on a win).
    pub revealed: Vec<usize>,
    /// Achievements newly unlocked by this result.
    pub unlocked: Vec<AchievementId>,
}

pub struct GameSession {
    instance: PuzzleInstance,
    selected: Option<usize>,
    /// Set by the first weighing of the instance, cleared on reset.
    started_at: Option<Instant>,
    /// Frozen elapsed time once the puzzle is solved.
    final_elapsed: Option<u64>,
    pub progress: ProgressState,
    pub achievements: Achievements,
}

impl GameSession {
    pub fn new(
        difficulty: Difficulty,
        progress: ProgressState,
        achievements: Achievements,
        rng: &mut impl Rng,
    ) -> Self {
        Self {
            instance: generate_puzzle(&difficulty.profile(), rng),
            selected: None,
            started_at: None,
            final_elapsed: None,
            progress,
            achievements,
        }
    }

    pub fn instance(&self) -> &PuzzleInstance {
        &self.instance
    }

    pub fn difficulty(&self) -> Difficulty {
        self.instance.difficulty
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// True once the current puzzle has been solved.
    pub fn solved(&self) -> bool {
        self.final_elapsed.is_some()
    }

    pub fn timer_running(&self) -> bool {
        self.started_at.is_some() && self.final_elapsed.is_none()
    }

    /// Seconds since the first weighing, frozen at the winning guess.
    pub fn elapsed_seconds(&self) -> u64 {
        if let Some(frozen) = self.final_elapsed {
            return frozen;
        }
        self.started_at
            .map(|t| t.elapsed().as_secs())
            .unwrap_or(0)
    }

    /// Replace the puzzle with a fresh one on the same difficulty.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        let difficulty = self.instance.difficulty;
        self.change_difficulty(difficulty, rng);
    }

    /// Replace the puzzle with a fresh one on a new difficulty.
    pub fn change_difficulty(&mut self, difficulty: Difficulty, rng: &mut impl Rng) {
        self.instance = generate_puzzle(&difficulty.profile(), rng);
        self.selected = None;
        self.started_at = None;
        self.final_elapsed = None;
    }

    /// Mark a balloon as the guess candidate. Out-of-range ids are ignored.
    pub fn select(&mut self, id: usize) {
        if id < self.instance.balloon_count() {
            self.selected = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn place(&mut self, id: usize, pan: Pan) {
        weighing::place_balloon(&mut self.instance, id, pan);
    }

    pub fn unplace(&mut self, id: usize) {
        weighing::remove_balloon(&mut self.instance, id);
    }

    /// Perform a weighing. The elapsed-time clock starts on the first
    /// weighing of the instance.
    pub fn weigh(&mut self) -> Result<Outcome, GameError> {
        let outcome = weighing::weigh(&mut self.instance)?;
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
        Ok(outcome)
    }

    pub fn undo(&mut self) -> Result<(), GameError> {
        weighing::undo_last_weighing(&mut self.instance)
    }

    /// Resolve the current guess selection and record the result.
    ///
    /// A correct guess freezes the clock; a wrong one leaves it running so the
    /// player may keep trying, but still records a loss (resetting the
    /// streak). A solved instance refuses further guesses: each instance
    /// records at most one win. Progress mutation happens here; the caller
    /// persists it.
    pub fn guess(&mut self) -> Result<GuessReport, GameError> {
        if self.solved() {
            return Err(GameError::PuzzleSolved);
        }
        let outcome = evaluate_guess(&self.instance, self.selected, self.elapsed_seconds())?;

        let revealed = if outcome.correct {
            self.final_elapsed = Some(outcome.result.elapsed_seconds);
            Vec::new()
        } else {
            self.instance.odd_balloons()
        };

        let unlocked = record_result(&mut self.progress, &mut self.achievements, &outcome.result);

        Ok(GuessReport {
            guessed: outcome.guessed,
            correct: outcome.correct,
            result: outcome.result,
            score: score(&outcome.result),
            revealed,
            unlocked,
        })
    }
}
