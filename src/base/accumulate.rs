//! Running totals: `accumulate`, `accumulate_with` and `try_accumulate`.

use std::iter::{Fuse, FusedIterator};
use std::ops::Add;

/// Running totals under a binary reducer.
///
/// Created by [`accumulate`] and [`accumulate_with`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Accumulate<I: Iterator, F> {
    source: Fuse<I>,
    total: Option<I::Item>,
    reducer: F,
}

/// Yields running sums of `source`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::accumulate;
///
/// let sums: Vec<i32> = accumulate(vec![1, 2, 3, 4]).collect();
/// assert_eq!(sums, vec![1, 3, 6, 10]);
/// ```
pub fn accumulate<S>(source: S) -> Accumulate<S::IntoIter, fn(S::Item, S::Item) -> S::Item>
where
    S: IntoIterator,
    S::Item: Add<Output = S::Item> + Clone,
{
    let add: fn(S::Item, S::Item) -> S::Item = Add::add;
    accumulate_with(source, add)
}

/// Yields running totals of `source` under `reducer`.
///
/// The first output is the first element unchanged; each later output is
/// `reducer(previous_output, next_element)`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::accumulate_with;
///
/// let maxima: Vec<i32> = accumulate_with(vec![3, 1, 4, 1, 5], i32::max).collect();
/// assert_eq!(maxima, vec![3, 3, 4, 4, 5]);
/// ```
pub fn accumulate_with<S, F>(source: S, reducer: F) -> Accumulate<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Accumulate {
        source: source.into_iter().fuse(),
        total: None,
        reducer,
    }
}

impl<I, F> Iterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = self.source.next()?;
        let total = match self.total.take() {
            None => element,
            Some(previous) => (self.reducer)(previous, element),
        };
        self.total = Some(total.clone());
        Some(total)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> FusedIterator for Accumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> I::Item,
{
}

/// Running totals under a fallible reducer.
///
/// Created by [`try_accumulate`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TryAccumulate<I: Iterator, F> {
    source: Option<I>,
    total: Option<I::Item>,
    reducer: F,
}

/// Like [`accumulate_with`], for a reducer that can fail.
///
/// A reducer error is yielded once, verbatim, and the combinator is
/// exhausted afterwards.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::try_accumulate;
///
/// let mut totals = try_accumulate(vec![100_u8, 100, 100], |total: u8, next| {
///     total.checked_add(next).ok_or("overflow")
/// });
/// assert_eq!(totals.next(), Some(Ok(100)));
/// assert_eq!(totals.next(), Some(Ok(200)));
/// assert_eq!(totals.next(), Some(Err("overflow")));
/// assert_eq!(totals.next(), None);
/// ```
pub fn try_accumulate<S, F, E>(source: S, reducer: F) -> TryAccumulate<S::IntoIter, F>
where
    S: IntoIterator,
    S::Item: Clone,
    F: FnMut(S::Item, S::Item) -> Result<S::Item, E>,
{
    TryAccumulate {
        source: Some(source.into_iter()),
        total: None,
        reducer,
    }
}

impl<I, F, E> Iterator for TryAccumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
{
    type Item = Result<I::Item, E>;

    fn next(&mut self) -> Option<Self::Item> {
        let Some(element) = self.source.as_mut()?.next() else {
            self.source = None;
            return None;
        };
        let total = match self.total.take() {
            None => element,
            Some(previous) => match (self.reducer)(previous, element) {
                Ok(total) => total,
                Err(error) => {
                    self.source = None;
                    return Some(Err(error));
                }
            },
        };
        self.total = Some(total.clone());
        Some(Ok(total))
    }
}

impl<I, F, E> FusedIterator for TryAccumulate<I, F>
where
    I: Iterator,
    I::Item: Clone,
    F: FnMut(I::Item, I::Item) -> Result<I::Item, E>,
{
}
