//! Recipes that produce sequences by calling functions.

use std::iter::{FusedIterator, Map};
use std::ops::Add;

use crate::HasErrorKind;
use crate::base::{Count, Repeat, StarFn, StarMap, count, repeat, starmap};

/// Calls a fallible function until it fails with a designated error kind.
///
/// Created by [`iter_except`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterExcept<F, K> {
    /// `None` once the sequence has ended.
    function: Option<F>,
    sentinel: K,
}

/// Yields `Ok(function())` until `function` fails.
///
/// An error whose [`kind`](HasErrorKind::kind) equals `sentinel` ends the
/// sequence without being yielded. Any other error is yielded once as `Err`
/// and the sequence ends after it.
///
/// # Examples
///
/// ```rust
/// use std::collections::VecDeque;
/// use std::io;
///
/// use lazy_itertools::recipes::iter_except;
///
/// let mut queue: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
/// let drained: Result<Vec<i32>, io::Error> = iter_except(
///     || queue.pop_front().ok_or_else(|| io::Error::from(io::ErrorKind::WouldBlock)),
///     io::ErrorKind::WouldBlock,
/// )
/// .collect();
/// assert_eq!(drained.unwrap(), vec![1, 2, 3]);
/// ```
pub fn iter_except<F, T, E>(function: F, sentinel: E::Kind) -> IterExcept<F, E::Kind>
where
    F: FnMut() -> Result<T, E>,
    E: HasErrorKind,
{
    IterExcept {
        function: Some(function),
        sentinel,
    }
}

impl<F, T, E, K> Iterator for IterExcept<F, K>
where
    F: FnMut() -> Result<T, E>,
    E: HasErrorKind<Kind = K>,
    K: PartialEq,
{
    type Item = Result<T, E>;

    fn next(&mut self) -> Option<Result<T, E>> {
        let function = self.function.as_mut()?;
        match function() {
            Ok(value) => Some(Ok(value)),
            Err(error) => {
                self.function = None;
                if error.kind() == self.sentinel {
                    tracing::trace!("iter_except reached its sentinel error");
                    None
                } else {
                    Some(Err(error))
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.function.is_some() {
            (0, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<F, T, E, K> FusedIterator for IterExcept<F, K>
where
    F: FnMut() -> Result<T, E>,
    E: HasErrorKind<Kind = K>,
    K: PartialEq,
{
}

/// Calls `function` with `arguments` unpacked, `times` times or forever.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::repeatfunc;
///
/// let powers: Vec<u32> = repeatfunc(u32::pow, Some(3), (2, 5)).collect();
/// assert_eq!(powers, vec![32, 32, 32]);
///
/// let mut seed = 1_u64;
/// let noise: Vec<u64> = repeatfunc(
///     move || {
///         seed = seed * 48_271 % 2_147_483_647;
///         seed
///     },
///     None,
///     (),
/// )
/// .take(2)
/// .collect();
/// assert_eq!(noise.len(), 2);
/// ```
pub fn repeatfunc<F, Args>(
    function: F,
    times: Option<usize>,
    arguments: Args,
) -> StarMap<Repeat<Args>, F>
where
    F: StarFn<Args>,
    Args: Clone,
{
    starmap(function, repeat(arguments, times))
}

/// Yields `function(start)`, `function(start + 1)`, ... forever.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::tabulate;
///
/// let squares: Vec<i64> = tabulate(|n: i64| n * n, 0).take(4).collect();
/// assert_eq!(squares, vec![0, 1, 4, 9]);
/// ```
pub fn tabulate<F, T, R>(function: F, start: T) -> Map<Count<T>, F>
where
    F: FnMut(T) -> R,
    T: Clone + Add<Output = T> + From<u8>,
{
    count(start, T::from(1)).map(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::io;

    fn pop_or(kind: io::ErrorKind, stack: &mut Vec<i32>) -> Result<i32, io::Error> {
        stack.pop().ok_or_else(|| io::Error::from(kind))
    }

    #[rstest]
    fn test_iter_except_stops_on_sentinel() {
        let mut stack = vec![1, 2, 3];
        let drained: Vec<i32> = iter_except(
            || pop_or(io::ErrorKind::NotFound, &mut stack),
            io::ErrorKind::NotFound,
        )
        .map(Result::unwrap)
        .collect();
        assert_eq!(drained, vec![3, 2, 1]);
    }

    #[rstest]
    fn test_iter_except_passes_other_errors_through() {
        let mut stack = vec![1];
        let mut drained = iter_except(
            || pop_or(io::ErrorKind::PermissionDenied, &mut stack),
            io::ErrorKind::NotFound,
        );
        assert!(matches!(drained.next(), Some(Ok(1))));
        let error = drained.next().and_then(Result::err).map(|error| error.kind());
        assert_eq!(error, Some(io::ErrorKind::PermissionDenied));
        assert!(drained.next().is_none());
    }

    #[rstest]
    fn test_iter_except_not_called_after_end() {
        let calls = Cell::new(0);
        let mut drained = iter_except(
            || {
                calls.set(calls.get() + 1);
                Err::<i32, io::Error>(io::ErrorKind::NotFound.into())
            },
            io::ErrorKind::NotFound,
        );
        assert!(drained.next().is_none());
        assert!(drained.next().is_none());
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    #[case(Some(0), 0)]
    #[case(Some(4), 4)]
    fn test_repeatfunc_times(#[case] times: Option<usize>, #[case] expected: usize) {
        assert_eq!(repeatfunc(|a: i32, b: i32| a + b, times, (1, 2)).count(), expected);
    }

    #[rstest]
    fn test_repeatfunc_unbounded() {
        let calls = Cell::new(0);
        let results: Vec<i32> = repeatfunc(
            || {
                calls.set(calls.get() + 1);
                calls.get()
            },
            None,
            (),
        )
        .take(3)
        .collect();
        assert_eq!(results, vec![1, 2, 3]);
        assert_eq!(calls.get(), 3);
    }

    #[rstest]
    #[case(0, vec![0, 2, 4])]
    #[case(5, vec![10, 12, 14])]
    fn test_tabulate(#[case] start: u32, #[case] expected: Vec<u32>) {
        let doubled: Vec<u32> = tabulate(|n: u32| n * 2, start).take(3).collect();
        assert_eq!(doubled, expected);
    }
}
