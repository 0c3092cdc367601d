//! Counting and repetition: `count`, `cycle` and `repeat`.
//!
//! These are the sources of unbounded sequences. None of them pulls ahead:
//! `cycle` reads its source exactly once, one element per pull, and only
//! switches to replaying once the source is exhausted.

use std::iter::FusedIterator;
use std::ops::Add;

// =============================================================================
// Count
// =============================================================================

/// An unbounded arithmetic progression.
///
/// Created by [`count`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Count<T> {
    current: T,
    step: T,
    /// `current` has been yielded and is stepped on the next pull.
    started: bool,
}

/// Produces `start, start + step, start + 2 * step, ...` forever.
///
/// `step` may be zero (a constant sequence) or negative (a descending one).
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::count;
///
/// let values: Vec<i32> = count(10, -3).take(4).collect();
/// assert_eq!(values, vec![10, 7, 4, 1]);
/// ```
pub fn count<T>(start: T, step: T) -> Count<T>
where
    T: Clone + Add<Output = T>,
{
    Count {
        current: start,
        step,
        started: false,
    }
}

impl<T> Iterator for Count<T>
where
    T: Clone + Add<Output = T>,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.started {
            self.current = self.current.clone() + self.step.clone();
        } else {
            self.started = true;
        }
        Some(self.current.clone())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<T> FusedIterator for Count<T> where T: Clone + Add<Output = T> {}

// =============================================================================
// Cycle
// =============================================================================

/// Replays a source's elements forever.
///
/// Created by [`cycle`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Cycle<I: Iterator> {
    source: Option<I>,
    saved: Vec<I::Item>,
    position: usize,
}

/// Yields the source's elements, then replays them indefinitely.
///
/// The source is pulled exactly once, in order; every element is saved on
/// first sight. An empty source leaves the cycle permanently exhausted.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::cycle;
///
/// let values: Vec<char> = cycle("ab".chars()).take(5).collect();
/// assert_eq!(values, vec!['a', 'b', 'a', 'b', 'a']);
///
/// assert_eq!(cycle(Vec::<i32>::new()).next(), None);
/// ```
pub fn cycle<S>(source: S) -> Cycle<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    Cycle {
        source: Some(source.into_iter()),
        saved: Vec::new(),
        position: 0,
    }
}

impl<I> Iterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(source) = self.source.as_mut() {
            if let Some(element) = source.next() {
                self.saved.push(element.clone());
                return Some(element);
            }
            self.source = None;
            tracing::trace!(saved = self.saved.len(), "cycle source exhausted, replaying");
        }

        let element = self.saved.get(self.position)?.clone();
        self.position = (self.position + 1) % self.saved.len();
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.source.is_none() && self.saved.is_empty() {
            (0, Some(0))
        } else if self.saved.is_empty() {
            (0, None)
        } else {
            (usize::MAX, None)
        }
    }
}

impl<I> FusedIterator for Cycle<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

// =============================================================================
// Repeat
// =============================================================================

/// Yields one value a fixed number of times, or forever.
///
/// Created by [`repeat`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Repeat<T> {
    value: T,
    remaining: Option<usize>,
}

/// Yields `value` `times` times, or indefinitely when `times` is `None`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::repeat;
///
/// assert_eq!(repeat('x', Some(3)).collect::<String>(), "xxx");
/// assert_eq!(repeat('x', Some(0)).count(), 0);
/// assert_eq!(repeat(7, None).take(2).collect::<Vec<_>>(), vec![7, 7]);
/// ```
pub fn repeat<T: Clone>(value: T, times: Option<usize>) -> Repeat<T> {
    Repeat {
        value,
        remaining: times,
    }
}

impl<T: Clone> Iterator for Repeat<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        match self.remaining.as_mut() {
            None => Some(self.value.clone()),
            Some(0) => None,
            Some(remaining) => {
                *remaining -= 1;
                Some(self.value.clone())
            }
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining
            .map_or((usize::MAX, None), |remaining| (remaining, Some(remaining)))
    }
}

impl<T: Clone> FusedIterator for Repeat<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(0, 1, vec![0, 1, 2, 3, 4])]
    #[case(-5, 2, vec![-5, -3, -1, 1, 3])]
    #[case(3, 0, vec![3, 3, 3, 3, 3])]
    #[case(4, -4, vec![4, 0, -4, -8, -12])]
    fn test_count_progression(#[case] start: i64, #[case] step: i64, #[case] expected: Vec<i64>) {
        assert_eq!(count(start, step).take(5).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_count_reaches_last_representable_value() {
        let values: Vec<u8> = count(250_u8, 1).take(6).collect();
        assert_eq!(values, vec![250, 251, 252, 253, 254, 255]);

        let descending: Vec<i8> = count(-126_i8, -1).take(3).collect();
        assert_eq!(descending, vec![-126, -127, -128]);
    }

    #[rstest]
    fn test_count_floats() {
        let values: Vec<f64> = count(0.5, 0.25).take(3).collect();
        assert_eq!(values, vec![0.5, 0.75, 1.0]);
    }

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![None], vec![None; 10])]
    #[case(vec![Some(1), Some(2)], vec![Some(1), Some(2), Some(1), Some(2), Some(1), Some(2), Some(1), Some(2), Some(1), Some(2)])]
    fn test_cycle_first_ten(#[case] source: Vec<Option<i32>>, #[case] expected: Vec<Option<i32>>) {
        assert_eq!(cycle(source).take(10).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_cycle_empty_stays_exhausted() {
        let mut cycled = cycle(Vec::<i32>::new());
        for _ in 0..5 {
            assert_eq!(cycled.next(), None);
        }
    }

    #[rstest]
    fn test_cycle_pulls_source_once_per_element() {
        let pulls = Cell::new(0);
        let source = (0..3).inspect(|_| pulls.set(pulls.get() + 1));
        let mut cycled = cycle(source);

        assert_eq!(cycled.next(), Some(0));
        assert_eq!(pulls.get(), 1);

        let replayed: Vec<i32> = cycled.by_ref().take(8).collect();
        assert_eq!(replayed, vec![1, 2, 0, 1, 2, 0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[rstest]
    #[case(None, 5)]
    #[case(Some(0), 0)]
    #[case(Some(3), 3)]
    #[case(Some(9), 5)]
    fn test_repeat_length(#[case] times: Option<usize>, #[case] expected: usize) {
        assert_eq!(repeat("abc", times).take(5).count(), expected);
    }

    #[rstest]
    fn test_repeat_size_hint() {
        let mut repeated = repeat(1, Some(2));
        assert_eq!(repeated.size_hint(), (2, Some(2)));
        repeated.next();
        assert_eq!(repeated.size_hint(), (1, Some(1)));
        assert_eq!(repeat(1, None).size_hint(), (usize::MAX, None));
    }
}
