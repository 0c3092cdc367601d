//! Predicate-driven filters: `dropwhile`, `takewhile`, `filterfalse` and
//! `compress`.

use std::iter::{Fuse, FusedIterator};

use crate::truthy::Truthy;

// =============================================================================
// DropWhile
// =============================================================================

/// Skips a prefix of elements satisfying a predicate.
///
/// Created by [`dropwhile`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct DropWhile<I, P> {
    source: Fuse<I>,
    predicate: Option<P>,
}

/// Drops elements while `predicate` holds, then yields every remaining
/// element without testing it again.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::dropwhile;
///
/// let rest: Vec<i32> = dropwhile(|n| *n < 5, vec![1, 4, 6, 4, 1]).collect();
/// assert_eq!(rest, vec![6, 4, 1]);
/// ```
pub fn dropwhile<P, S>(predicate: P, source: S) -> DropWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    DropWhile {
        source: source.into_iter().fuse(),
        predicate: Some(predicate),
    }
}

impl<I, P> Iterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if let Some(mut predicate) = self.predicate.take() {
            for element in self.source.by_ref() {
                if !predicate(&element) {
                    return Some(element);
                }
            }
            return None;
        }
        self.source.next()
    }
}

impl<I, P> FusedIterator for DropWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

// =============================================================================
// TakeWhile
// =============================================================================

/// Yields a prefix of elements satisfying a predicate.
///
/// Created by [`takewhile`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeWhile<I, P> {
    source: Option<I>,
    predicate: P,
}

/// Yields elements while `predicate` holds.
///
/// The first failing element is consumed from the source but not yielded,
/// and the combinator is exhausted from then on.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::takewhile;
///
/// let mut source = vec![1, 4, 6, 4, 1].into_iter();
/// let prefix: Vec<i32> = takewhile(|n| *n < 5, source.by_ref()).collect();
/// assert_eq!(prefix, vec![1, 4]);
/// assert_eq!(source.next(), Some(4));
/// ```
pub fn takewhile<P, S>(predicate: P, source: S) -> TakeWhile<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    TakeWhile {
        source: Some(source.into_iter()),
        predicate,
    }
}

impl<I, P> Iterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let element = self.source.as_mut()?.next();
        match element {
            Some(element) if (self.predicate)(&element) => Some(element),
            _ => {
                self.source = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = self.source.as_ref().map_or(Some(0), |source| source.size_hint().1);
        (0, upper)
    }
}

impl<I, P> FusedIterator for TakeWhile<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

// =============================================================================
// FilterFalse
// =============================================================================

/// Yields the elements a predicate rejects.
///
/// Created by [`filterfalse`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct FilterFalse<I, P> {
    source: Fuse<I>,
    predicate: P,
}

/// Yields the elements of `source` for which `predicate` is false.
///
/// Pass [`truthy`](crate::truthy) to keep the elements that are themselves
/// falsy.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::filterfalse;
///
/// let even: Vec<i32> = filterfalse(|n| n % 2 == 1, 0..10).collect();
/// assert_eq!(even, vec![0, 2, 4, 6, 8]);
/// ```
pub fn filterfalse<P, S>(predicate: P, source: S) -> FilterFalse<S::IntoIter, P>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    FilterFalse {
        source: source.into_iter().fuse(),
        predicate,
    }
}

impl<I, P> Iterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let predicate = &mut self.predicate;
        self.source.find(|element| !predicate(element))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.source.size_hint().1)
    }
}

impl<I, P> FusedIterator for FilterFalse<I, P>
where
    I: Iterator,
    P: FnMut(&I::Item) -> bool,
{
}

// =============================================================================
// Compress
// =============================================================================

/// Selects data elements by paired selectors.
///
/// Created by [`compress`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Compress<D, S> {
    data: Fuse<D>,
    selectors: Fuse<S>,
}

/// Yields the elements of `data` whose paired selector is truthy.
///
/// Pairing stops at the shorter of the two sequences. A data element is
/// pulled before its selector, so an element without a selector is consumed
/// and discarded.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::compress;
///
/// let kept: String = compress("ABCDEF".chars(), [1, 0, 1, 0, 1, 1]).collect();
/// assert_eq!(kept, "ACEF");
/// ```
pub fn compress<D, S>(data: D, selectors: S) -> Compress<D::IntoIter, S::IntoIter>
where
    D: IntoIterator,
    S: IntoIterator,
    S::Item: Truthy,
{
    Compress {
        data: data.into_iter().fuse(),
        selectors: selectors.into_iter().fuse(),
    }
}

impl<D, S> Iterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
    type Item = D::Item;

    fn next(&mut self) -> Option<D::Item> {
        loop {
            let element = self.data.next()?;
            if self.selectors.next()?.is_truthy() {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let upper = match (self.data.size_hint().1, self.selectors.size_hint().1) {
            (Some(data), Some(selectors)) => Some(data.min(selectors)),
            (Some(bound), None) | (None, Some(bound)) => Some(bound),
            (None, None) => None,
        };
        (0, upper)
    }
}

impl<D, S> FusedIterator for Compress<D, S>
where
    D: Iterator,
    S: Iterator,
    S::Item: Truthy,
{
}
