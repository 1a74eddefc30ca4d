//! Weighing evaluator: pan placement, the comparison itself, and undo.
//!
//! Policy: a weighing only requires that the two pans are not both empty.
//! Pans of different sizes are allowed and may still balance if their total
//! weights cancel out.

use super::error::GameError;
use super::instance::{Outcome, Pan, PuzzleInstance, WeighingRecord};
use chrono::Utc;

/// Move a balloon onto a pan, from wherever it currently is (the unplaced
/// pool or the opposite pan). Out-of-range ids are a silent no-op; the UI
/// only ever passes ids of rendered balloons.
pub fn place_balloon(instance: &mut PuzzleInstance, id: usize, pan: Pan) {
    if id >= instance.balloon_count() {
        return;
    }
    instance.left_pan.retain(|&b| b != id);
    instance.right_pan.retain(|&b| b != id);
    match pan {
        Pan::Left => instance.left_pan.push(id),
        Pan::Right => instance.right_pan.push(id),
    }
}

/// Return a balloon to the unplaced pool.
pub fn remove_balloon(instance: &mut PuzzleInstance, id: usize) {
    instance.left_pan.retain(|&b| b != id);
    instance.right_pan.retain(|&b| b != id);
}

/// Compare the pans, record the result, and clear the scale.
///
/// Fails with `EmptyWeighing` (no mutation) when both pans are empty. On
/// success the pan snapshots and outcome are appended to the history, the
/// move count is incremented, and both pans are cleared: a weighing consumes
/// the current placement.
pub fn weigh(instance: &mut PuzzleInstance) -> Result<Outcome, GameError> {
    if instance.left_pan.is_empty() && instance.right_pan.is_empty() {
        return Err(GameError::EmptyWeighing);
    }

    let outcome = compare(
        instance.set_weight(&instance.left_pan),
        instance.set_weight(&instance.right_pan),
    );

    instance.history.push(WeighingRecord {
        left: instance.left_pan.clone(),
        right: instance.right_pan.clone(),
        outcome,
        recorded_at: Utc::now(),
    });
    instance.move_count += 1;
    instance.left_pan.clear();
    instance.right_pan.clear();

    Ok(outcome)
}

/// Strict comparison of total weights, regardless of pan cardinality.
pub fn compare(left_weight: u64, right_weight: u64) -> Outcome {
    if left_weight > right_weight {
        Outcome::LeftHeavier
    } else if right_weight > left_weight {
        Outcome::RightHeavier
    } else {
        Outcome::Balanced
    }
}

/// Remove the last weighing from the history.
///
/// Fails with `NoHistory` when nothing has been weighed. Pan contents are not
/// restored; they were already cleared when the weighing was recorded.
pub fn undo_last_weighing(instance: &mut PuzzleInstance) -> Result<(), GameError> {
    if instance.history.pop().is_none() {
        return Err(GameError::NoHistory);
    }
    instance.move_count = instance.move_count.saturating_sub(1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use std::collections::BTreeSet;

    /// Six balloons, balloon 2 heavy by one unit.
    fn instance() -> PuzzleInstance {
        PuzzleInstance::with_weights(
            Difficulty::Easy,
            vec![10, 10, 11, 10, 10, 10],
            BTreeSet::from([2]),
        )
    }

    #[test]
    fn test_place_balloon_moves_between_pans() {
        let mut inst = instance();
        place_balloon(&mut inst, 0, Pan::Left);
        assert_eq!(inst.left_pan, vec![0]);

        // Re-placing on the other side moves, never duplicates
        place_balloon(&mut inst, 0, Pan::Right);
        assert!(inst.left_pan.is_empty());
        assert_eq!(inst.right_pan, vec![0]);

        place_balloon(&mut inst, 0, Pan::Right);
        assert_eq!(inst.right_pan, vec![0]);
    }

    #[test]
    fn test_place_balloon_out_of_range_is_noop() {
        let mut inst = instance();
        place_balloon(&mut inst, 99, Pan::Left);
        assert!(inst.left_pan.is_empty());
        assert!(inst.right_pan.is_empty());
    }

    #[test]
    fn test_remove_balloon_returns_to_pool() {
        let mut inst = instance();
        place_balloon(&mut inst, 4, Pan::Right);
        remove_balloon(&mut inst, 4);
        assert!(inst.right_pan.is_empty());
        assert_eq!(inst.placement_of(4), None);
    }

    #[test]
    fn test_weigh_empty_pans_fails_without_mutation() {
        let mut inst = instance();
        assert_eq!(weigh(&mut inst), Err(GameError::EmptyWeighing));
        assert_eq!(inst.move_count, 0);
        assert!(inst.history.is_empty());
    }

    #[test]
    fn test_weigh_one_sided_is_allowed() {
        let mut inst = instance();
        place_balloon(&mut inst, 2, Pan::Left);
        assert_eq!(weigh(&mut inst), Ok(Outcome::LeftHeavier));
        assert_eq!(inst.move_count, 1);
    }

    #[test]
    fn test_weigh_clears_pans_and_records_snapshot() {
        let mut inst = instance();
        place_balloon(&mut inst, 0, Pan::Left);
        place_balloon(&mut inst, 1, Pan::Left);
        place_balloon(&mut inst, 3, Pan::Right);

        let outcome = weigh(&mut inst).unwrap();
        assert_eq!(outcome, Outcome::LeftHeavier);
        assert!(inst.left_pan.is_empty());
        assert!(inst.right_pan.is_empty());

        let record = &inst.history[0];
        assert_eq!(record.left, vec![0, 1]);
        assert_eq!(record.right, vec![3]);
        assert_eq!(record.outcome, Outcome::LeftHeavier);
    }

    #[test]
    fn test_unequal_pans_can_balance() {
        // 7 + 7 on the left equals 14 alone on the right
        let inst_weights = vec![7, 7, 14, 10];
        let mut inst = PuzzleInstance::with_weights(
            Difficulty::Easy,
            inst_weights,
            BTreeSet::from([2]),
        );
        place_balloon(&mut inst, 0, Pan::Left);
        place_balloon(&mut inst, 1, Pan::Left);
        place_balloon(&mut inst, 2, Pan::Right);
        assert_eq!(weigh(&mut inst), Ok(Outcome::Balanced));
    }

    #[test]
    fn test_equal_baseline_pans_balance() {
        let mut inst = instance();
        place_balloon(&mut inst, 0, Pan::Left);
        place_balloon(&mut inst, 1, Pan::Right);
        assert_eq!(weigh(&mut inst), Ok(Outcome::Balanced));
    }

    #[test]
    fn test_undo_restores_history_and_move_count() {
        let mut inst = instance();
        place_balloon(&mut inst, 0, Pan::Left);
        place_balloon(&mut inst, 1, Pan::Right);
        weigh(&mut inst).unwrap();
        assert_eq!(inst.move_count, 1);
        assert_eq!(inst.history.len(), 1);

        undo_last_weighing(&mut inst).unwrap();
        assert_eq!(inst.move_count, 0);
        assert!(inst.history.is_empty());
    }

    #[test]
    fn test_undo_without_history_fails() {
        let mut inst = instance();
        assert_eq!(undo_last_weighing(&mut inst), Err(GameError::NoHistory));
        assert_eq!(inst.move_count, 0);
    }

    #[test]
    fn test_undo_does_not_restore_pan_contents() {
        let mut inst = instance();
        place_balloon(&mut inst, 0, Pan::Left);
        weigh(&mut inst).unwrap();
        undo_last_weighing(&mut inst).unwrap();
        // The scale stays clear; only the record is dropped
        assert!(inst.left_pan.is_empty());
        assert!(inst.right_pan.is_empty());
    }

    #[test]
    fn test_compare_is_strict() {
        assert_eq!(compare(10, 10), Outcome::Balanced);
        assert_eq!(compare(11, 10), Outcome::LeftHeavier);
        assert_eq!(compare(10, 11), Outcome::RightHeavier);
    }
}
