//! User-recoverable game errors.
//!
//! None of these are fatal: the UI translates each into a status message and
//! every failed operation leaves the puzzle instance unchanged. A wrong guess
//! is not an error, it is a valid losing `GameResult`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Difficulty name is not in the catalog.
    UnknownDifficulty(String),
    /// Both pans were empty when a weighing was requested.
    EmptyWeighing,
    /// Undo was requested with no recorded weighings.
    NoHistory,
    /// A guess was requested with no balloon selected.
    NoSelection,
    /// A guess was requested after the puzzle was already solved.
    PuzzleSolved,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnknownDifficulty(name) => write!(f, "unknown difficulty: {}", name),
            GameError::EmptyWeighing => write!(f, "put at least one balloon on the scale"),
            GameError::NoHistory => write!(f, "no weighings to undo"),
            GameError::NoSelection => write!(f, "select a balloon before guessing"),
            GameError::PuzzleSolved => write!(f, "puzzle solved, press r for a new game"),
        }
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GameError::UnknownDifficulty("nightmare".to_string()).to_string(),
            "unknown difficulty: nightmare"
        );
        assert_eq!(
            GameError::EmptyWeighing.to_string(),
            "put at least one balloon on the scale"
        );
        assert_eq!(GameError::NoHistory.to_string(), "no weighings to undo");
        assert_eq!(
            GameError::PuzzleSolved.to_string(),
            "puzzle solved, press r for a new game"
        );
        assert_eq!(
            GameError::NoSelection.to_string(),
            "select a balloon before guessing"
        );
    }
}
