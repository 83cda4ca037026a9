//! Draw helpers over the seeded simulation RNG.
//!
//! Everything random in the engine funnels through one sequential
//! `ChaCha8Rng`, so a run is reproducible from its seed alone.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

/// Uniform index into `0..len`. `len` must be non-zero.
pub(crate) fn uniform_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    rng.next_u64() as usize % len
}

/// Uniform value in `min..=max`.
pub(crate) fn roll_range(rng: &mut ChaCha8Rng, min: i32, max: i32) -> i32 {
    debug_assert!(min <= max);
    let span = (max - min + 1) as usize;
    min + uniform_index(rng, span) as i32
}

pub(crate) fn pick<'a, T>(rng: &mut ChaCha8Rng, slice: &'a [T]) -> &'a T {
    &slice[uniform_index(rng, slice.len())]
}

/// Fisher-Yates, in place.
pub(crate) fn shuffle<T>(rng: &mut ChaCha8Rng, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = uniform_index(rng, i + 1);
        items.swap(i, j);
    }
}

/// Index drawn proportionally to `weights`. Zero-weight entries are never
/// chosen; the weights must not all be zero.
pub(crate) fn weighted_index(rng: &mut ChaCha8Rng, weights: &[u32]) -> usize {
    let total: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    debug_assert!(total > 0);
    let mut remaining = rng.next_u64() % total;
    for (index, &weight) in weights.iter().enumerate() {
        let weight = u64::from(weight);
        if remaining < weight {
            return index;
        }
        remaining -= weight;
    }
    weights.len() - 1
}

/// One-in-`denominator` chance.
pub(crate) fn one_in(rng: &mut ChaCha8Rng, denominator: u64) -> bool {
    rng.next_u64() % denominator == 0
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn uniform_index_stays_in_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            assert!(uniform_index(&mut rng, 5) < 5);
        }
    }

    #[test]
    fn roll_range_is_inclusive_on_both_ends() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..500 {
            let value = roll_range(&mut rng, 2, 4);
            assert!((2..=4).contains(&value));
            seen_min |= value == 2;
            seen_max |= value == 4;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn shuffle_permutes_without_losing_elements() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let mut items = [1, 2, 3, 4, 5, 6, 7, 8];
        shuffle(&mut rng, &mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn weighted_index_skips_zero_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..300 {
            let index = weighted_index(&mut rng, &[0, 3, 0, 9, 0]);
            assert!(index == 1 || index == 3);
        }
    }

    #[test]
    fn same_seed_same_draws() {
        let mut left = ChaCha8Rng::seed_from_u64(99);
        let mut right = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            assert_eq!(uniform_index(&mut left, 1000), uniform_index(&mut right, 1000));
        }
    }
}
