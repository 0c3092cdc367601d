//! Property-based tests for the combinatoric generators.
//!
//! Inputs are `0..n`, so every output tuple is also its own index tuple.

#![cfg(feature = "combinatoric")]

use std::collections::HashSet;

use lazy_itertools::prelude::*;
use proptest::prelude::*;

fn factorial_ratio(n: usize, r: usize) -> usize {
    (n - r + 1..=n).product()
}

fn binomial(n: usize, r: usize) -> usize {
    (0..r).fold(1, |accumulated, step| accumulated * (n - step) / (step + 1))
}

fn is_sorted_strictly<T: Ord>(tuples: &[T]) -> bool {
    tuples.windows(2).all(|pair| pair[0] < pair[1])
}

// =============================================================================
// permutations
// =============================================================================

proptest! {
    /// n!/(n-r)! distinct tuples of distinct indices, in lexicographic order.
    #[test]
    fn prop_permutations_count_and_order(n in 0..7_usize, r in 0..7_usize) {
        let tuples: Vec<Vec<usize>> = permutations(0..n, Some(r)).collect();
        if r > n {
            prop_assert!(tuples.is_empty());
        } else {
            prop_assert_eq!(tuples.len(), factorial_ratio(n, r));
            prop_assert!(is_sorted_strictly(&tuples));
            for tuple in &tuples {
                prop_assert_eq!(tuple.len(), r);
                let distinct: HashSet<&usize> = tuple.iter().collect();
                prop_assert_eq!(distinct.len(), r);
            }
        }
    }

    /// Once the pool is read, size_hint counts what is left exactly.
    #[test]
    fn prop_permutations_size_hint_exact(n in 0..6_usize, r in 0..6_usize, skip in 0..30_usize) {
        let mut tuples = permutations(0..n, Some(r));
        if tuples.next().is_some() {
            for _ in 0..skip {
                tuples.next();
            }
            let (lower, upper) = tuples.size_hint();
            let remaining = tuples.count();
            prop_assert_eq!(lower, remaining);
            prop_assert_eq!(upper, Some(remaining));
        }
    }
}

// =============================================================================
// combinations
// =============================================================================

proptest! {
    /// C(n, r) strictly increasing tuples in lexicographic order.
    #[test]
    fn prop_combinations_count_and_order(n in 0..10_usize, r in 0..10_usize) {
        let tuples: Vec<Vec<usize>> = combinations(0..n, r).collect();
        if r > n {
            prop_assert!(tuples.is_empty());
        } else {
            prop_assert_eq!(tuples.len(), binomial(n, r));
            prop_assert!(is_sorted_strictly(&tuples));
            for tuple in &tuples {
                prop_assert!(is_sorted_strictly(tuple));
            }
        }
    }

    /// Non-decreasing tuples, C(n + r - 1, r) of them.
    #[test]
    fn prop_combinations_with_replacement_count_and_order(n in 1..6_usize, r in 0..6_usize) {
        let tuples: Vec<Vec<usize>> = combinations_with_replacement(0..n, r).collect();
        prop_assert_eq!(tuples.len(), binomial(n + r - 1, r));
        prop_assert!(is_sorted_strictly(&tuples));
        for tuple in &tuples {
            prop_assert!(tuple.windows(2).all(|pair| pair[0] <= pair[1]));
        }
    }

    /// Every combination is a permutation in sorted order.
    #[test]
    fn prop_combinations_are_sorted_permutations(n in 0..6_usize, r in 0..6_usize) {
        let from_permutations: Vec<Vec<usize>> = permutations(0..n, Some(r))
            .filter(|tuple| is_sorted_strictly(tuple))
            .collect();
        let direct: Vec<Vec<usize>> = combinations(0..n, r).collect();
        prop_assert_eq!(from_permutations, direct);
    }
}

// =============================================================================
// product
// =============================================================================

proptest! {
    /// Product size is the product of the pool sizes, in odometer order.
    #[test]
    fn prop_product_count_and_order(
        sizes in prop::collection::vec(0..4_usize, 0..4),
        repeat in 0..3_usize,
    ) {
        let tuples: Vec<Vec<usize>> =
            product(sizes.iter().map(|&size| 0..size), repeat).collect();
        let expected: usize = sizes.iter().product::<usize>().pow(u32::try_from(repeat).unwrap());
        prop_assert_eq!(tuples.len(), expected);
        prop_assert!(is_sorted_strictly(&tuples));
        for tuple in &tuples {
            prop_assert_eq!(tuple.len(), sizes.len() * repeat);
            for (position, &index) in tuple.iter().enumerate() {
                prop_assert!(index < sizes[position % sizes.len()]);
            }
        }
    }
}
