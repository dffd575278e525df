//! Durstenfeld (Fisher-Yates) shuffle
//!
//! Walks the slice from the back, swapping each position with a uniformly
//! chosen position at or before it. Every permutation is equally likely
//! given a uniform random source.

use rand::Rng;

/// Shuffle a slice in place
pub fn durstenfeld_shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Return a shuffled copy of `items`, leaving the input untouched
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    durstenfeld_shuffle(&mut copy, rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        for n in 1..=20u32 {
            let input: Vec<u32> = (0..n).collect();
            let output = shuffled(&input, &mut rng);
            assert_eq!(output.len(), input.len());
            assert_eq!(sorted(output), input);
        }
    }

    #[test]
    fn test_shuffle_keeps_duplicates() {
        let mut rng = StdRng::seed_from_u64(11);
        let input = vec![3, 3, 1, 2, 2, 2];
        let output = shuffled(&input, &mut rng);
        assert_eq!(sorted(output), vec![1, 2, 2, 2, 3, 3]);
    }

    #[test]
    fn test_shuffle_leaves_input_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let input = vec!["a", "b", "c", "d"];
        let _ = shuffled(&input, &mut rng);
        assert_eq!(input, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_shuffle_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut empty: Vec<u8> = Vec::new();
        durstenfeld_shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        assert_eq!(shuffled(&["only"], &mut rng), vec!["only"]);
    }

    #[test]
    fn test_shuffle_reaches_every_ordering() {
        // 3 elements have 6 orderings; a few hundred draws should hit all of them
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(shuffled(&[1, 2, 3], &mut rng));
        }
        assert_eq!(seen.len(), 6);
    }
}
