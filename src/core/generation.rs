//! Puzzle generation: rolling the odd set and hidden weights.

use super::constants::{BASE_WEIGHT, MAX_WEIGHT_DELTA, WEIGHT_DELTA};
use super::difficulty::{DifficultyProfile, WeightMode};
use super::instance::PuzzleInstance;
use rand::Rng;
use std::collections::BTreeSet;

/// Generate a fresh puzzle from a difficulty profile.
///
/// Picks `odd_count` distinct balloon ids uniformly at random, then rolls a
/// weight for each. In known-heavier mode every odd balloon is exactly
/// `WEIGHT_DELTA` above baseline; in unknown-direction mode each odd balloon
/// independently gets a random direction and a delta magnitude in
/// `1..=MAX_WEIGHT_DELTA`, so a lighter balloon always stays strictly between
/// zero and baseline.
pub fn generate_puzzle(profile: &DifficultyProfile, rng: &mut impl Rng) -> PuzzleInstance {
    let mut odd_set: BTreeSet<usize> = BTreeSet::new();
    while odd_set.len() < profile.odd_count {
        odd_set.insert(rng.gen_range(0..profile.balloon_count));
    }

    let mut weights = vec![BASE_WEIGHT; profile.balloon_count];
    for &id in &odd_set {
        weights[id] = roll_odd_weight(profile.weight_mode, rng);
    }

    PuzzleInstance::with_weights(profile.difficulty, weights, odd_set)
}

/// Roll the hidden weight of a single odd balloon.
fn roll_odd_weight(mode: WeightMode, rng: &mut impl Rng) -> u32 {
    match mode {
        WeightMode::KnownHeavier => BASE_WEIGHT + WEIGHT_DELTA,
        WeightMode::UnknownDirection => {
            let magnitude = rng.gen_range(1..=MAX_WEIGHT_DELTA);
            if rng.gen_bool(0.5) {
                BASE_WEIGHT + magnitude
            } else {
                BASE_WEIGHT - magnitude
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::difficulty::Difficulty;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_generate_easy_exact_odd_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let instance = generate_puzzle(&Difficulty::Easy.profile(), &mut rng);

        assert_eq!(instance.balloon_count(), 6);
        assert_eq!(instance.odd_set.len(), 1);
        assert!(instance.odd_set.iter().all(|&id| id < 6));
    }

    #[test]
    fn test_generate_expert_distinct_odd_ids() {
        // The reject-and-resample loop must yield two distinct ids
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instance = generate_puzzle(&Difficulty::Expert.profile(), &mut rng);
            assert_eq!(instance.odd_set.len(), 2);
            assert!(instance.odd_set.iter().all(|&id| id < 15));
        }
    }

    #[test]
    fn test_known_heavier_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let instance = generate_puzzle(&Difficulty::Medium.profile(), &mut rng);

        for id in 0..instance.balloon_count() {
            if instance.odd_set.contains(&id) {
                assert_eq!(instance.weight_of(id), BASE_WEIGHT + WEIGHT_DELTA);
            } else {
                assert_eq!(instance.weight_of(id), BASE_WEIGHT);
            }
        }
    }

    #[test]
    fn test_unknown_direction_delta_bounds() {
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instance = generate_puzzle(&Difficulty::Hard.profile(), &mut rng);
            for &id in &instance.odd_set {
                let weight = instance.weight_of(id);
                assert_ne!(weight, BASE_WEIGHT, "odd balloon must differ from baseline");
                let delta = weight.abs_diff(BASE_WEIGHT);
                assert!((1..=MAX_WEIGHT_DELTA).contains(&delta));
                assert!(weight > 0);
            }
        }
    }

    #[test]
    fn test_unknown_direction_covers_both_directions() {
        // Across many generations both heavier and lighter must occur
        let mut saw_heavier = false;
        let mut saw_lighter = false;
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instance = generate_puzzle(&Difficulty::Hard.profile(), &mut rng);
            for &id in &instance.odd_set {
                if instance.weight_of(id) > BASE_WEIGHT {
                    saw_heavier = true;
                } else {
                    saw_lighter = true;
                }
            }
        }
        assert!(saw_heavier);
        assert!(saw_lighter);
    }

    #[test]
    fn test_generated_instances_do_not_alias() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut a = generate_puzzle(&Difficulty::Easy.profile(), &mut rng);
        let b = generate_puzzle(&Difficulty::Easy.profile(), &mut rng);

        // Mutating one instance never affects another
        a.weights[0] = 999;
        assert_ne!(b.weights[0], 999);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_same_seed_same_puzzle() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(1234);
        let mut rng_b = ChaCha8Rng::seed_from_u64(1234);
        let a = generate_puzzle(&Difficulty::Hard.profile(), &mut rng_a);
        let b = generate_puzzle(&Difficulty::Hard.profile(), &mut rng_b);

        assert_eq!(a.odd_set, b.odd_set);
        assert_eq!(a.weights, b.weights);
    }

    #[test]
    fn test_odd_selection_covers_all_positions() {
        // Uniform selection should hit every id eventually
        let profile = Difficulty::Easy.profile();
        let mut seen = BTreeSet::new();
        for seed in 0..200 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let instance = generate_puzzle(&profile, &mut rng);
            seen.extend(instance.odd_set.iter().copied());
        }
        assert_eq!(seen.len(), profile.balloon_count);
    }
}
