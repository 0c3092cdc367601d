//! Lazy slicing: `islice`.
//!
//! Bounds are validated when the slice is built. Pulling never reads past
//! what the next output (or the final exhaustion) requires: the skipped
//! prefix is consumed on the first pull, and once `stop` is reached the
//! source is dropped without being pulled again.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::error::{InvalidArgumentError, IterError};

/// A lazily evaluated `[start:stop:step]` view of a sequence.
///
/// Created by [`islice`] or [`islice_to`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ISlice<I> {
    source: Option<I>,
    /// Absolute index of the next element the source will produce.
    position: usize,
    /// Absolute index of the next element to yield.
    next_wanted: usize,
    stop: Option<usize>,
    step: NonZeroUsize,
    prefix_consumed: bool,
}

impl<I: Iterator> ISlice<I> {
    /// Builds a slice from bounds that are already known to be valid.
    pub(crate) fn new(
        source: I,
        start: usize,
        stop: Option<usize>,
        step: NonZeroUsize,
    ) -> Self {
        Self {
            source: Some(source),
            position: 0,
            next_wanted: start,
            stop,
            step,
            prefix_consumed: false,
        }
    }

    /// Advances the source to `next_wanted`, dropping it if it runs out.
    fn skip_to_wanted(&mut self) -> Option<()> {
        let source = self.source.as_mut()?;
        while self.position < self.next_wanted {
            if source.next().is_none() {
                self.source = None;
                return None;
            }
            self.position += 1;
        }
        Some(())
    }
}

fn non_negative(value: isize, parameter: &'static str) -> Result<usize, IterError> {
    usize::try_from(value).map_err(|_| {
        InvalidArgumentError::new("islice", parameter, "must be non-negative").into()
    })
}

/// Yields every `step`-th element of `source` from index `start` up to,
/// but not including, `stop` (`None` means until the source is exhausted).
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] when `start` is negative, `stop`
/// is negative, or `step` is not positive.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::islice;
///
/// let sliced: String = islice("ABCDEFG".chars(), 2, Some(6), 3).unwrap().collect();
/// assert_eq!(sliced, "CF");
///
/// assert!(islice("abc".chars(), 0, None, 0).is_err());
/// ```
pub fn islice<S>(
    source: S,
    start: isize,
    stop: Option<isize>,
    step: isize,
) -> Result<ISlice<S::IntoIter>, IterError>
where
    S: IntoIterator,
{
    let start = non_negative(start, "start")?;
    let stop = stop.map(|stop| non_negative(stop, "stop")).transpose()?;
    let step = usize::try_from(step)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or_else(|| InvalidArgumentError::new("islice", "step", "must be positive"))?;
    Ok(ISlice::new(source.into_iter(), start, stop, step))
}

/// Yields the elements of `source` before index `stop`.
///
/// Equivalent to `islice(source, 0, stop, 1)`.
///
/// # Errors
///
/// Returns [`IterError::InvalidArgument`] when `stop` is negative.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::islice_to;
///
/// let prefix: Vec<i32> = islice_to(1.., Some(3)).unwrap().collect();
/// assert_eq!(prefix, vec![1, 2, 3]);
/// ```
pub fn islice_to<S>(source: S, stop: Option<isize>) -> Result<ISlice<S::IntoIter>, IterError>
where
    S: IntoIterator,
{
    islice(source, 0, stop, 1)
}

impl<I: Iterator> Iterator for ISlice<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        // The prefix up to `start` is read even when `stop` excludes it.
        if !self.prefix_consumed {
            self.prefix_consumed = true;
            self.skip_to_wanted()?;
        }

        if self.stop.is_some_and(|stop| self.next_wanted >= stop) {
            self.source = None;
            return None;
        }

        self.skip_to_wanted()?;
        let source = self.source.as_mut()?;
        match source.next() {
            Some(element) => {
                self.position += 1;
                self.next_wanted = self.next_wanted.saturating_add(self.step.get());
                Some(element)
            }
            None => {
                self.source = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(source) = self.source.as_ref() else {
            return (0, Some(0));
        };
        let (lower, upper) = source.size_hint();
        let remaining = |available: usize| {
            let end = self.position.saturating_add(available);
            let end = self.stop.map_or(end, |stop| end.min(stop));
            if end <= self.next_wanted {
                0
            } else {
                (end - self.next_wanted).div_ceil(self.step.get())
            }
        };
        let upper = match (upper, self.stop) {
            (Some(upper), _) => Some(remaining(upper)),
            (None, Some(stop)) => Some(remaining(stop)),
            (None, None) => None,
        };
        (remaining(lower), upper)
    }
}

impl<I: Iterator> FusedIterator for ISlice<I> {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    fn sliced(source: &str, start: isize, stop: Option<isize>, step: isize) -> String {
        islice(source.chars(), start, stop, step)
            .expect("valid bounds")
            .collect()
    }

    #[rstest]
    #[case("", 0, Some(5), 3, "")]
    #[case("", 2, Some(5), 2, "")]
    #[case("", 0, Some(0), 1, "")]
    #[case("ABCDEFG", 2, Some(2), 2, "")]
    #[case("ABCDEFG", 2, Some(6), 3, "CF")]
    #[case("ABCDEFG", 2, Some(17), 2, "CEG")]
    #[case("ABCDEFG", 0, None, 2, "ACEG")]
    #[case("ABCDEFG", 20, Some(30), 3, "")]
    #[case("ABCDEFG", 0, None, 3, "ADG")]
    #[case("ABCDEFG", 2, None, 1, "CDEFG")]
    fn test_islice_bounds(
        #[case] source: &str,
        #[case] start: isize,
        #[case] stop: Option<isize>,
        #[case] step: isize,
        #[case] expected: &str,
    ) {
        assert_eq!(sliced(source, start, stop, step), expected);
    }

    #[rstest]
    #[case(-1, None, 1, "start")]
    #[case(0, Some(-1), 1, "stop")]
    #[case(0, Some(0), 0, "step")]
    #[case(0, None, -2, "step")]
    fn test_islice_rejects_invalid_bounds(
        #[case] start: isize,
        #[case] stop: Option<isize>,
        #[case] step: isize,
        #[case] parameter: &str,
    ) {
        let Err(IterError::InvalidArgument(error)) = islice("abc".chars(), start, stop, step)
        else {
            panic!("expected an invalid argument error");
        };
        assert_eq!(error.parameter, parameter);
    }

    #[rstest]
    fn test_islice_does_not_over_read() {
        let pulls = Cell::new(0);
        let source = (0..100).inspect(|_| pulls.set(pulls.get() + 1));
        let values: Vec<i32> = islice(source, 1, Some(5), 2).unwrap().collect();

        assert_eq!(values, vec![1, 3]);
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    fn test_islice_consumes_skipped_prefix() {
        let mut source = 0..10;
        let mut slice = islice(source.by_ref(), 3, Some(4), 1).unwrap();
        assert_eq!(slice.next(), Some(3));
        assert_eq!(slice.next(), None);
        drop(slice);
        assert_eq!(source.next(), Some(4));
    }

    #[rstest]
    #[case(3, Some(2), Some(3))]
    #[case(3, Some(3), Some(3))]
    #[case(12, Some(0), None)]
    fn test_islice_consumes_prefix_when_stop_precedes_start(
        #[case] start: isize,
        #[case] stop: Option<isize>,
        #[case] expected_next: Option<i32>,
    ) {
        let mut source = 0..10;
        let values: Vec<i32> = islice(source.by_ref(), start, stop, 1).unwrap().collect();
        assert!(values.is_empty());
        assert_eq!(source.next(), expected_next);
    }

    #[rstest]
    fn test_islice_reads_prefix_only_once() {
        let pulls = Cell::new(0);
        let source = (0..10).inspect(|_| pulls.set(pulls.get() + 1));
        let mut slice = islice(source, 4, Some(1), 1).unwrap();
        assert_eq!(slice.next(), None);
        assert_eq!(slice.next(), None);
        assert_eq!(pulls.get(), 4);
    }

    #[rstest]
    fn test_islice_over_infinite_source() {
        let values: Vec<u64> = islice(0.., 10, Some(20), 5).unwrap().collect();
        assert_eq!(values, vec![10, 15]);
    }

    #[rstest]
    #[case(0, Some(7), 1, 7)]
    #[case(2, Some(6), 3, 2)]
    #[case(0, None, 2, 4)]
    #[case(20, None, 1, 0)]
    fn test_islice_size_hint_is_exact_for_exact_sources(
        #[case] start: isize,
        #[case] stop: Option<isize>,
        #[case] step: isize,
        #[case] expected: usize,
    ) {
        let slice = islice(vec![0; 7], start, stop, step).unwrap();
        assert_eq!(slice.size_hint(), (expected, Some(expected)));
        assert_eq!(slice.count(), expected);
    }
}
