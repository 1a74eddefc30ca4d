//! Oddball - Terminal Balance-Scale Puzzle Game Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod achievements;
pub mod build_info;
pub mod core;
pub mod stats;
pub mod utils;

// UI is exposed for the binary only; it is tightly coupled to the terminal
pub mod ui;

pub use achievements::{AchievementId, Achievements};
pub use self::core::{
    Difficulty, GameError, GameResult, GameSession, Outcome, Pan, PuzzleInstance, WeightMode,
};
pub use stats::{ProgressState, StatsManager};
