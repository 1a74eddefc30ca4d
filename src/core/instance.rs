//! Puzzle instance data structures.
//!
//! A `PuzzleInstance` is the live state of one game: the hidden weights, the
//! current pan contents, and the append-only weighing history.

use super::difficulty::Difficulty;
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;
use uuid::Uuid;

/// One side of the balance scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pan {
    Left,
    Right,
}

/// Result of comparing the two pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LeftHeavier,
    RightHeavier,
    Balanced,
}

impl Outcome {
    /// Terminal-log label, matching the weighing history display.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::LeftHeavier => "LEFT_HEAVIER",
            Outcome::RightHeavier => "RIGHT_HEAVIER",
            Outcome::Balanced => "BALANCED",
        }
    }
}

/// A completed weighing: pan snapshots plus the observed outcome.
/// Immutable once appended; undo only ever removes the last record.
#[derive(Debug, Clone)]
pub struct WeighingRecord {
    pub left: Vec<usize>,
    pub right: Vec<usize>,
    pub outcome: Outcome,
    pub recorded_at: DateTime<Utc>,
}

/// Live state of one puzzle.
#[derive(Debug, Clone)]
pub struct PuzzleInstance {
    pub id: String,
    pub difficulty: Difficulty,
    /// Hidden weight of each balloon, indexed by balloon id.
    /// Fixed at generation time and never mutated.
    pub weights: Vec<u32>,
    /// Ids of the balloons whose weight differs from baseline.
    pub odd_set: BTreeSet<usize>,
    /// Balloons currently on each pan, in placement order.
    pub left_pan: Vec<usize>,
    pub right_pan: Vec<usize>,
    pub history: Vec<WeighingRecord>,
    pub move_count: u32,
}

impl PuzzleInstance {
    /// Build an instance from pre-rolled weights and odd set.
    /// Pans, history, and move count start empty.
    pub fn with_weights(
        difficulty: Difficulty,
        weights: Vec<u32>,
        odd_set: BTreeSet<usize>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            difficulty,
            weights,
            odd_set,
            left_pan: Vec::new(),
            right_pan: Vec::new(),
            history: Vec::new(),
            move_count: 0,
        }
    }

    pub fn balloon_count(&self) -> usize {
        self.weights.len()
    }

    /// Hidden weight of a single balloon.
    pub fn weight_of(&self, id: usize) -> u32 {
        self.weights[id]
    }

    /// Total weight of a set of balloons.
    pub fn set_weight(&self, ids: &[usize]) -> u64 {
        ids.iter().map(|&id| self.weights[id] as u64).sum()
    }

    pub fn pan(&self, pan: Pan) -> &[usize] {
        match pan {
            Pan::Left => &self.left_pan,
            Pan::Right => &self.right_pan,
        }
    }

    /// Which pan a balloon sits on, if any.
    pub fn placement_of(&self, id: usize) -> Option<Pan> {
        if self.left_pan.contains(&id) {
            Some(Pan::Left)
        } else if self.right_pan.contains(&id) {
            Some(Pan::Right)
        } else {
            None
        }
    }

    /// Balloons not currently on either pan, in id order.
    pub fn unplaced(&self) -> Vec<usize> {
        (0..self.balloon_count())
            .filter(|id| self.placement_of(*id).is_none())
            .collect()
    }

    /// Odd-balloon ids in ascending order, for the loss reveal.
    pub fn odd_balloons(&self) -> Vec<usize> {
        self.odd_set.iter().copied().collect()
    }
}
