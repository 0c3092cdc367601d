//! Cartesian product: `product` and `product_repeat`.

use std::iter::FusedIterator;

use super::{IndexVec, Pool, exact_hint};

/// Cartesian product of several sequences.
///
/// Created by [`product`] and [`product_repeat`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Product<I: Iterator> {
    pools: Vec<Pool<I, I::Item>>,
    repeat: usize,
    indices: IndexVec,
    /// Pool length at each tuple position, filled in when the pools are read.
    lengths: IndexVec,
    started: bool,
    done: bool,
}

/// Yields the cartesian product of `sources`, with the sources repeated
/// `repeat` times.
///
/// Tuples come out in odometer order: the last position varies fastest.
/// With no sources, or `repeat == 0`, a single empty tuple is yielded. If
/// any source is empty nothing is yielded.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::combinatoric::product;
///
/// let cells: Vec<String> = product(vec!["AB".chars(), "xy".chars()], 1)
///     .map(|cell| cell.into_iter().collect())
///     .collect();
/// assert_eq!(cells, vec!["Ax", "Ay", "Bx", "By"]);
///
/// let bits: Vec<Vec<u8>> = product(vec![0..2_u8], 2).collect();
/// assert_eq!(bits, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn product<S, T>(sources: S, repeat: usize) -> Product<T::IntoIter>
where
    S: IntoIterator<Item = T>,
    T: IntoIterator,
    T::Item: Clone,
{
    Product {
        pools: sources
            .into_iter()
            .map(|source| Pool::new(source.into_iter()))
            .collect(),
        repeat,
        indices: IndexVec::new(),
        lengths: IndexVec::new(),
        started: false,
        done: false,
    }
}

/// The product of `source` with itself `r` times.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::combinatoric::product_repeat;
///
/// assert_eq!(product_repeat("abc".chars(), 3).count(), 27);
/// ```
pub fn product_repeat<S>(source: S, r: usize) -> Product<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    product(std::iter::once(source), r)
}

impl<I: Iterator> Product<I> {
    fn width(&self) -> usize {
        self.pools.len() * self.repeat
    }

    fn advance(&mut self) -> bool {
        for position in (0..self.indices.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.lengths[position] {
                return true;
            }
            self.indices[position] = 0;
        }
        false
    }

    fn remaining(&self) -> Option<usize> {
        let mut total = 0_usize;
        let mut stride = 1_usize;
        for (position, &index) in self.indices.iter().enumerate().rev() {
            let left = self.lengths[position] - 1 - index;
            total = total.checked_add(left.checked_mul(stride)?)?;
            stride = stride.checked_mul(self.lengths[position])?;
        }
        Some(total)
    }

    fn current(&self) -> Option<Vec<I::Item>>
    where
        I::Item: Clone,
    {
        let pool_count = self.pools.len();
        self.indices
            .iter()
            .enumerate()
            .map(|(position, &index)| {
                self.pools[position % pool_count]
                    .elements()
                    .map(|pool| pool[index].clone())
            })
            .collect()
    }
}

impl<I> Iterator for Product<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
            if self.width() == 0 {
                self.done = true;
                return Some(Vec::new());
            }
            let per_pool: Vec<usize> = self
                .pools
                .iter_mut()
                .map(|pool| pool.materialize().len())
                .collect();
            if per_pool.contains(&0) {
                self.done = true;
                return None;
            }
            self.lengths = (0..self.width())
                .map(|position| per_pool[position % per_pool.len()])
                .collect();
            self.indices = std::iter::repeat_n(0, self.width()).collect();
        }
        self.current()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        if !self.started {
            return (0, None);
        }
        exact_hint(self.remaining())
    }
}

impl<I> FusedIterator for Product<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
