//! Combinatoric generators.
//!
//! [`permutations`], [`combinations`], [`combinations_with_replacement`] and
//! [`product`] read their inputs into an indexable pool on the first pull and
//! then enumerate index tuples in lexicographic order of input position. Only
//! the pool and one index vector are kept; results are produced one tuple at
//! a time.
//!
//! # Space
//!
//! | Iterator | Output Size | Space |
//! |----------|-------------|-------|
//! | `Product` (m pools of size k, repeated r times) | k^(m*r) | O(m*r) indices + O(k*m) pools |
//! | `Permutations(n, r)` | n!/(n-r)! | O(n) indices and cycles + O(n) pool |
//! | `Combinations(n, r)` | C(n,r) | O(r) indices + O(n) pool |
//! | `CombinationsWithReplacement(n, r)` | C(n+r-1,r) | O(r) indices + O(n) pool |
//!
//! # Examples
//!
//! ```rust
//! use lazy_itertools::combinatoric::{combinations, permutations};
//!
//! let pairs: Vec<String> = combinations("ABCD".chars(), 2)
//!     .map(|pair| pair.into_iter().collect())
//!     .collect();
//! assert_eq!(pairs, vec!["AB", "AC", "AD", "BC", "BD", "CD"]);
//!
//! assert_eq!(permutations(0..4, Some(2)).count(), 12);
//! ```

mod combinations;
mod combinations_with_replacement;
mod permutations;
mod product;

pub use combinations::{Combinations, combinations};
pub use combinations_with_replacement::{
    CombinationsWithReplacement, combinations_with_replacement,
};
pub use permutations::{Permutations, permutations};
pub use product::{Product, product, product_repeat};

use smallvec::SmallVec;

/// Index vectors of up to this length live on the stack.
const SMALL_INDEX: usize = 8;

type IndexVec = SmallVec<[usize; SMALL_INDEX]>;

/// An input that is read into memory on first use.
#[derive(Debug, Clone)]
enum Pool<I, T> {
    Pending(I),
    Ready(Vec<T>),
}

impl<I: Iterator<Item = T>, T> Pool<I, T> {
    fn new(source: I) -> Self {
        Self::Pending(source)
    }

    /// Reads the source to exhaustion if it has not been read yet.
    fn materialize(&mut self) -> &[T] {
        if let Self::Pending(source) = self {
            let elements: Vec<T> = source.collect();
            tracing::trace!(size = elements.len(), "materialized combinatoric pool");
            *self = Self::Ready(elements);
        }
        match self {
            Self::Ready(elements) => elements,
            Self::Pending(_) => unreachable!("pool was materialized above"),
        }
    }

    fn elements(&self) -> Option<&[T]> {
        match self {
            Self::Ready(elements) => Some(elements),
            Self::Pending(_) => None,
        }
    }
}

/// Builds the output tuple selected by `indices`.
fn select<T: Clone>(pool: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&index| pool[index].clone()).collect()
}

/// `C(n, k)`, or `None` on overflow.
fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    (0..k).try_fold(1_usize, |accumulated, step| {
        accumulated.checked_mul(n - step).map(|product| product / (step + 1))
    })
}

/// `n! / (n - k)!`, or `None` on overflow.
fn falling_factorial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }
    (0..k).try_fold(1_usize, |accumulated, step| accumulated.checked_mul(n - step))
}

/// Turns a remaining-count computation into a `size_hint`.
fn exact_hint(remaining: Option<usize>) -> (usize, Option<usize>) {
    remaining.map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
}
