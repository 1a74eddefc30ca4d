//! Cross-game progress state.

use serde::{Deserialize, Serialize};

/// Statistics carried across puzzle instances (saved to disk).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressState {
    /// Fewest weighings taken to win, across all wins. `None` until the
    /// first win; the UI renders it as "--".
    pub best_score: Option<u32>,
    /// Consecutive wins; reset to zero by any loss.
    pub streak: u32,
    pub games_played: u64,
    pub wins: u64,
    pub total_weighings: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_best_score() {
        let progress = ProgressState::default();
        assert_eq!(progress.best_score, None);
        assert_eq!(progress.streak, 0);
        assert_eq!(progress.games_played, 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let progress = ProgressState {
            best_score: Some(2),
            streak: 7,
            games_played: 31,
            wins: 20,
            total_weighings: 88,
        };
        let json = serde_json::to_string(&progress).unwrap();
        let loaded: ProgressState = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, progress);
    }
}
