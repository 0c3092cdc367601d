//! Recipes that drive their input to produce a single result.

use std::collections::{VecDeque, vec_deque};
use std::iter::Sum;
use std::num::NonZeroUsize;
use std::ops::Mul;

use crate::base::{ISlice, groupby};

/// Returns `true` if every element of `source` equals the first one.
///
/// An empty source is all-equal. Stops at the first element that differs.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::all_equal;
///
/// assert!(all_equal("aaaa".chars()));
/// assert!(!all_equal("aaba".chars()));
/// assert!(all_equal(Vec::<i32>::new()));
/// ```
pub fn all_equal<S>(source: S) -> bool
where
    S: IntoIterator,
    S::Item: PartialEq + Clone,
{
    let mut groups = groupby(source, |element: &S::Item| element.clone());
    groups.next();
    groups.next().is_none()
}

/// Sum of the pairwise products of `left` and `right`, stopping at the
/// shorter of the two.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::dotproduct;
///
/// assert_eq!(dotproduct(vec![1, 2, 3], vec![4, 5, 6]), 32);
/// assert_eq!(dotproduct(vec![1.5, 2.0], vec![2.0, 0.5, 9.0]), 4.0);
/// ```
pub fn dotproduct<A, B, T>(left: A, right: B) -> T
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: Mul<B::Item, Output = T>,
    T: Sum,
{
    left.into_iter()
        .zip(right)
        .map(|(left, right)| left * right)
        .sum()
}

/// Returns the first element of `source` satisfying `predicate`, or
/// `default` when there is none.
///
/// Pass [`truthy`](crate::truthy) to find the first truthy element.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::first_true;
/// use lazy_itertools::truthy;
///
/// assert_eq!(first_true(vec![0, 0, 7, 9], -1, truthy), 7);
/// assert_eq!(first_true(vec![1, 3, 5], -1, |n| n % 2 == 0), -1);
/// ```
pub fn first_true<S, P>(source: S, default: S::Item, predicate: P) -> S::Item
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source.into_iter().find(predicate).unwrap_or(default)
}

/// Returns the element at 0-based position `n`, or `None` if `source` is
/// shorter.
///
/// At most `n + 1` elements are pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::nth;
///
/// assert_eq!(nth("abcde".chars(), 3), Some('d'));
/// assert_eq!(nth("abc".chars(), 3), None);
/// ```
pub fn nth<S: IntoIterator>(source: S, n: usize) -> Option<S::Item> {
    ISlice::new(source.into_iter(), n, n.checked_add(1), NonZeroUsize::MIN).next()
}

/// Like [`nth`], returning `default` when `source` is shorter.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::nth_or;
///
/// assert_eq!(nth_or(vec![10, 20], 5, 0), 0);
/// ```
pub fn nth_or<S: IntoIterator>(source: S, n: usize, default: S::Item) -> S::Item {
    nth(source, n).unwrap_or(default)
}

/// Counts the elements of `source` satisfying `predicate`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::quantify;
/// use lazy_itertools::truthy;
///
/// assert_eq!(quantify(vec![true, false, true], truthy), 2);
/// assert_eq!(quantify(1..=10, |n| n % 3 == 0), 3);
/// ```
pub fn quantify<S, P>(source: S, mut predicate: P) -> usize
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    source
        .into_iter()
        .filter(|element| predicate(element))
        .count()
}

/// Returns the last `n` elements of `source` in their original order.
///
/// The whole source is read; at most `n` elements are held at a time.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::tail;
///
/// let last: String = tail(3, "ABCDEFG".chars()).collect();
/// assert_eq!(last, "EFG");
/// ```
pub fn tail<S: IntoIterator>(n: usize, source: S) -> vec_deque::IntoIter<S::Item> {
    let mut window = VecDeque::new();
    for element in source {
        if window.len() == n {
            window.pop_front();
        }
        if n > 0 {
            window.push_back(element);
        }
    }
    window.into_iter()
}

/// Collects the first `n` elements of `source`, or all of them if there are
/// fewer.
///
/// Exactly `min(n, len)` elements are pulled, so `source` may be infinite.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::count;
/// use lazy_itertools::recipes::take;
///
/// assert_eq!(take(3, count(5, 5)), vec![5, 10, 15]);
/// assert_eq!(take(5, vec![1, 2]), vec![1, 2]);
/// ```
pub fn take<S: IntoIterator>(n: usize, source: S) -> Vec<S::Item> {
    ISlice::new(source.into_iter(), 0, Some(n), NonZeroUsize::MIN).collect()
}
