#![cfg(feature = "recipes")]
//! Scenario tests for the derived combinators.
//!
//! Tests cover:
//! - The documented examples for each recipe
//! - Laziness over infinite inputs
//! - iter_except sentinel handling
//! - partition buffering between independently driven halves

use lazy_itertools::prelude::*;
use rstest::rstest;
use std::collections::{BTreeMap, VecDeque};
use std::io;

// =============================================================================
// Reductions
// =============================================================================

#[rstest]
fn take_of_whole_length_is_identity() {
    let elements = vec!['q', 'r', 's'];
    assert_eq!(take(elements.len(), elements.clone()), elements);
}

#[rstest]
fn tail_keeps_order() {
    assert_eq!(tail(2, 1..=5).collect::<Vec<_>>(), vec![4, 5]);
}

#[rstest]
fn nth_of_infinite_source() {
    assert_eq!(nth(count(100, -1), 30), Some(70));
}

#[rstest]
fn first_true_of_empty_is_default() {
    assert_eq!(first_true(Vec::<i32>::new(), 42, truthy), 42);
}

#[rstest]
fn quantify_counts_matches() {
    assert_eq!(quantify("Mississippi".chars(), |c| *c == 's'), 4);
}

#[rstest]
fn dotproduct_of_mixed_lengths() {
    assert_eq!(dotproduct(count(1_i32, 1), vec![10, 20, 30]), 140);
}

// =============================================================================
// Reshaping
// =============================================================================

#[rstest]
fn grouper_fill_pads_final_chunk() {
    let chunks: Vec<Vec<char>> = grouper_fill("abcde".chars(), 3, 'x').collect();
    assert_eq!(chunks, vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'x']]);
}

#[rstest]
fn roundrobin_interleaves_and_drops_exhausted() {
    let order: String = roundrobin(vec!["ABC".chars(), "D".chars(), "EF".chars()]).collect();
    assert_eq!(order, "ADEBFC");
}

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![])]
#[case(vec![1, 2, 3, 4], vec![(1, 2), (2, 3), (3, 4)])]
fn pairwise_consecutive_pairs(#[case] source: Vec<i32>, #[case] expected: Vec<(i32, i32)>) {
    assert_eq!(pairwise(source).collect::<Vec<_>>(), expected);
}

#[rstest]
fn padnone_mirrors_uneven_map() {
    let shorter = padnone(vec![1, 2]);
    let sums: Vec<i32> = vec![10, 20, 30]
        .into_iter()
        .zip(shorter)
        .map(|(left, right)| left + right.unwrap_or(0))
        .collect();
    assert_eq!(sums, vec![11, 22, 30]);
}

#[rstest]
fn prepend_then_ncycles() {
    let repeated: String = ncycles(prepend('>', "ab".chars()), 2).collect();
    assert_eq!(repeated, ">ab>ab");
}

#[rstest]
fn ncycles_of_zero_is_empty() {
    assert_eq!(ncycles(count(0, 1), 0).next(), None);
}

#[rstest]
fn flatten_one_level_only() {
    let nested = vec![vec![vec![1], vec![2, 3]], vec![vec![4]]];
    let flat: Vec<Vec<i32>> = flatten(nested).collect();
    assert_eq!(flat, vec![vec![1], vec![2, 3], vec![4]]);
}

#[rstest]
fn partition_halves_driven_out_of_lockstep() {
    let (odd, even) = partition(|n: &u32| n % 2 == 0, 0..20_u32);

    let even: Vec<u32> = even.collect();
    assert_eq!(even, vec![0, 2, 4, 6, 8, 10, 12, 14, 16, 18]);

    let odd: Vec<u32> = odd.collect();
    assert_eq!(odd, vec![1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
}

#[rstest]
fn partition_with_truthy_default() {
    let (falsy, truthy_values) = partition(truthy, vec!["", "x", "", "yz"]);
    assert_eq!(falsy.count(), 2);
    assert_eq!(truthy_values.collect::<Vec<_>>(), vec!["x", "yz"]);
}

// =============================================================================
// Generation
// =============================================================================

#[rstest]
fn iter_except_drains_a_map() {
    let mut scores = BTreeMap::from([("ada", 3), ("bob", 1)]);
    let drained: Vec<(&str, i32)> = iter_except(
        || {
            scores
                .pop_first()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "empty"))
        },
        io::ErrorKind::NotFound,
    )
    .collect::<Result<_, _>>()
    .unwrap();
    assert_eq!(drained, vec![("ada", 3), ("bob", 1)]);
}

#[rstest]
fn iter_except_propagates_other_kinds() {
    let mut queue = VecDeque::from(vec![Ok(1), Err(io::ErrorKind::InvalidData)]);
    let results: Vec<Result<i32, io::ErrorKind>> = iter_except(
        || match queue.pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(kind)) => Err(io::Error::from(kind)),
            None => Err(io::Error::from(io::ErrorKind::UnexpectedEof)),
        },
        io::ErrorKind::UnexpectedEof,
    )
    .map(|result| result.map_err(|error| error.kind()))
    .collect();
    assert_eq!(results, vec![Ok(1), Err(io::ErrorKind::InvalidData)]);
}

#[rstest]
fn repeatfunc_with_arguments() {
    let padded: Vec<String> = repeatfunc(
        |text: &str, width: usize| format!("{text:>width$}"),
        Some(2),
        ("ab", 4),
    )
    .collect();
    assert_eq!(padded, vec!["  ab", "  ab"]);
}

#[rstest]
fn tabulate_is_infinite() {
    let cubes = tabulate(|n: u64| n.pow(3), 1);
    assert_eq!(take(4, cubes), vec![1, 8, 27, 64]);
}
