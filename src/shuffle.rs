//! In-place list shuffling
//!
//! The generator is always supplied by the caller, so a seeded `StdRng`
//! gives reproducible orderings (replays, tests) and `shuffle` covers the
//! everyday case with the thread-local generator.

use rand::Rng;

/// Fisher–Yates shuffle driven by `rng`. Every permutation is equally likely.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    // Walk from the back, swapping each slot with a random slot at or before it
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle with the thread-local generator
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::thread_rng());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    #[test]
    fn test_shuffle_is_permutation() {
        let mut items: Vec<u32> = (0..100).collect();
        shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_order() {
        let mut a: Vec<u32> = (0..50).collect();
        let mut b = a.clone();

        shuffle_with(&mut a, &mut StdRng::seed_from_u64(7));
        shuffle_with(&mut b, &mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let original: Vec<u32> = (0..50).collect();
        let mut items = original.clone();
        shuffle_with(&mut items, &mut StdRng::seed_from_u64(42));
        // 50! orderings; landing on the identity would be a broken shuffle
        assert_ne!(items, original);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<u8> = vec![];
        shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        shuffle(&mut single);
        assert_eq!(single, vec!["only"]);
    }

    #[test]
    fn test_every_permutation_reachable() {
        // Three items have six orderings; a uniform shuffle hits each about
        // 1000 times over 6000 runs
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts: HashMap<Vec<u8>, u32> = HashMap::new();
        for _ in 0..6000 {
            let mut items = vec![1u8, 2, 3];
            shuffle_with(&mut items, &mut rng);
            *counts.entry(items).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, count) in counts {
            assert!((800..1200).contains(&count), "{order:?} seen {count} times");
        }
    }
}
