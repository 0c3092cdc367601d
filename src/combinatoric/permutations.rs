//! Successive `r`-length permutations: `permutations`.

use std::iter::FusedIterator;

use super::{IndexVec, Pool, exact_hint, falling_factorial, select};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Fresh,
    Running,
    Done,
}

/// `r`-length permutations of a sequence's elements.
///
/// Created by [`permutations`].
///
/// # Algorithm
///
/// `indices` holds a permutation of all pool positions, of which the first
/// `r` are the current output. `cycles[i]` counts how many more values
/// position `i` will take before it resets. Each step finds the rightmost
/// position that can still advance, swaps a later index into it, and rotates
/// exhausted suffixes back into ascending order.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Permutations<I: Iterator> {
    pool: Pool<I, I::Item>,
    r: Option<usize>,
    indices: IndexVec,
    cycles: IndexVec,
    phase: Phase,
}

/// Yields every ordered selection of `r` distinct positions of `source`,
/// in lexicographic order of position.
///
/// `r` defaults to the length of the source. Nothing is yielded when `r`
/// exceeds it; exactly one empty permutation is yielded when `r` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::combinatoric::permutations;
///
/// let orderings: Vec<Vec<i32>> = permutations(vec![1, 2, 3], Some(2)).collect();
/// assert_eq!(
///     orderings,
///     vec![vec![1, 2], vec![1, 3], vec![2, 1], vec![2, 3], vec![3, 1], vec![3, 2]]
/// );
///
/// assert_eq!(permutations("ab".chars(), Some(3)).count(), 0);
/// ```
pub fn permutations<S>(source: S, r: Option<usize>) -> Permutations<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Permutations {
        pool: Pool::new(source.into_iter()),
        r,
        indices: IndexVec::new(),
        cycles: IndexVec::new(),
        phase: Phase::Fresh,
    }
}

impl<I: Iterator> Permutations<I> {
    fn length(&self) -> usize {
        self.cycles.len()
    }

    /// Moves `indices` to the next permutation; `false` when there is none.
    fn advance(&mut self) -> bool {
        let n = self.indices.len();
        for position in (0..self.length()).rev() {
            self.cycles[position] -= 1;
            if self.cycles[position] == 0 {
                self.indices[position..].rotate_left(1);
                self.cycles[position] = n - position;
            } else {
                let swap_with = n - self.cycles[position];
                self.indices.swap(position, swap_with);
                return true;
            }
        }
        false
    }

    fn remaining(&self) -> Option<usize> {
        let n = self.indices.len();
        let r = self.length();
        self.cycles
            .iter()
            .enumerate()
            .try_fold(0_usize, |total, (position, &cycle)| {
                let tail = falling_factorial(n - position - 1, r - position - 1)?;
                total.checked_add((cycle - 1).checked_mul(tail)?)
            })
    }
}

impl<I> Iterator for Permutations<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        match self.phase {
            Phase::Done => None,
            Phase::Fresh => {
                let n = self.pool.materialize().len();
                let r = self.r.unwrap_or(n);
                if r > n {
                    self.phase = Phase::Done;
                    return None;
                }
                self.indices = (0..n).collect();
                self.cycles = (n - r + 1..=n).rev().collect();
                self.phase = Phase::Running;
                let pool = self.pool.elements()?;
                Some(select(pool, &self.indices[..r]))
            }
            Phase::Running => {
                if !self.advance() {
                    self.phase = Phase::Done;
                    return None;
                }
                let pool = self.pool.elements()?;
                Some(select(pool, &self.indices[..self.length()]))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.phase {
            Phase::Done => (0, Some(0)),
            Phase::Fresh => (0, None),
            Phase::Running => exact_hint(self.remaining()),
        }
    }
}

impl<I> FusedIterator for Permutations<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
