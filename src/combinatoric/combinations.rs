//! `r`-length subsequences without repetition: `combinations`.

use std::iter::FusedIterator;

use super::{IndexVec, Pool, binomial, exact_hint, select};

/// `r`-length subsequences of a sequence's elements.
///
/// Created by [`combinations`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Combinations<I: Iterator> {
    pool: Pool<I, I::Item>,
    r: usize,
    indices: IndexVec,
    started: bool,
    done: bool,
}

/// Yields every `r`-length subsequence of `source`, with elements in input
/// order and subsequences in lexicographic order of position.
///
/// Elements are treated as unique by position, so equal values do not
/// suppress repeats. One empty combination is yielded when `r` is zero and
/// nothing when `r` exceeds the length of the source.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::combinatoric::combinations;
///
/// let triples: Vec<Vec<i32>> = combinations(0..4, 3).collect();
/// assert_eq!(
///     triples,
///     vec![vec![0, 1, 2], vec![0, 1, 3], vec![0, 2, 3], vec![1, 2, 3]]
/// );
/// ```
pub fn combinations<S>(source: S, r: usize) -> Combinations<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Combinations {
        pool: Pool::new(source.into_iter()),
        r,
        indices: IndexVec::new(),
        started: false,
        done: false,
    }
}

impl<I: Iterator> Combinations<I> {
    /// Moves `indices` to the next combination of `0..n`; `false` when there is none.
    fn advance(&mut self, n: usize) -> bool {
        let r = self.r;
        let Some(position) = (0..r).rev().find(|&i| self.indices[i] != i + n - r) else {
            return false;
        };
        self.indices[position] += 1;
        for following in position + 1..r {
            self.indices[following] = self.indices[following - 1] + 1;
        }
        true
    }

    fn remaining(&self, n: usize) -> Option<usize> {
        let r = self.r;
        self.indices
            .iter()
            .enumerate()
            .try_fold(0_usize, |total, (position, &index)| {
                total.checked_add(binomial(n - 1 - index, r - position)?)
            })
    }
}

impl<I> Iterator for Combinations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        let n = self.pool.materialize().len();
        if self.started {
            if !self.advance(n) {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
            if self.r > n {
                self.done = true;
                return None;
            }
            self.indices = (0..self.r).collect();
        }
        self.pool.elements().map(|pool| select(pool, &self.indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match (self.started, self.pool.elements()) {
            (true, Some(pool)) => exact_hint(self.remaining(pool.len())),
            _ => (0, None),
        }
    }
}

impl<I> FusedIterator for Combinations<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
