//! Recipes that rearrange the elements of their inputs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::iter::{Filter, Fuse, FusedIterator, Map, Once, Zip};
use std::rc::Rc;

use crate::base::{
    Chain, ChainFromIterable, FilterFalse, Repeat, Tee, ZipLongest, ZipLongestFill, chain,
    chain_from_iterable, filterfalse, repeat, zip_longest, zip_longest_fill,
};

// =============================================================================
// Concatenation
// =============================================================================

/// Flattens one level of nesting.
///
/// Shorthand for [`chain_from_iterable`].
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::flatten;
///
/// let flat: Vec<i32> = flatten(vec![vec![1, 2], vec![], vec![3]]).collect();
/// assert_eq!(flat, vec![1, 2, 3]);
/// ```
pub fn flatten<S>(
    iterables: S,
) -> ChainFromIterable<S::IntoIter, <S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    chain_from_iterable(iterables)
}

/// Repeats the whole of `source` `n` times.
///
/// `source` is read into memory when this is called, unless `n` is zero.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::ncycles;
///
/// let repeated: String = ncycles("ab".chars(), 3).collect();
/// assert_eq!(repeated, "ababab");
/// ```
pub fn ncycles<S>(
    source: S,
    n: usize,
) -> ChainFromIterable<Repeat<Vec<S::Item>>, std::vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let elements: Vec<S::Item> = if n == 0 {
        Vec::new()
    } else {
        source.into_iter().collect()
    };
    chain_from_iterable(repeat(elements, Some(n)))
}

/// Yields the elements of `source` as `Some`, followed by `None` forever.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::padnone;
///
/// let padded: Vec<Option<i32>> = padnone(vec![1, 2]).take(4).collect();
/// assert_eq!(padded, vec![Some(1), Some(2), None, None]);
/// ```
#[allow(clippy::type_complexity)]
pub fn padnone<S>(
    source: S,
) -> Chain<Map<S::IntoIter, fn(S::Item) -> Option<S::Item>>, Repeat<Option<S::Item>>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let wrap: fn(S::Item) -> Option<S::Item> = Some;
    chain(source.into_iter().map(wrap), repeat(None, None))
}

/// Yields `value` followed by the elements of `source`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::prepend;
///
/// let joined: String = prepend('>', "abc".chars()).collect();
/// assert_eq!(joined, ">abc");
/// ```
pub fn prepend<S: IntoIterator>(value: S::Item, source: S) -> Chain<Once<S::Item>, S::IntoIter> {
    chain(std::iter::once(value), source)
}

// =============================================================================
// Grouper
// =============================================================================

/// One source read through several handles in turn.
struct SharedSource<I> {
    source: Rc<RefCell<Fuse<I>>>,
}

impl<I: Iterator> Iterator for SharedSource<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.source.borrow_mut().next()
    }
}

impl<I> fmt::Debug for SharedSource<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("SharedSource").finish_non_exhaustive()
    }
}

fn shared_handles<S: IntoIterator>(source: S, n: usize) -> Vec<SharedSource<S::IntoIter>> {
    if n == 0 {
        return Vec::new();
    }
    let source = Rc::new(RefCell::new(source.into_iter().fuse()));
    (0..n)
        .map(|_| SharedSource {
            source: Rc::clone(&source),
        })
        .collect()
}

/// Fixed-size chunks, the last one padded with `None`.
///
/// Created by [`grouper`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Grouper<I: Iterator> {
    chunks: ZipLongest<SharedSource<I>>,
}

/// Splits `source` into chunks of `n` elements.
///
/// A short final chunk is padded with `None`. With `n == 0` nothing is
/// yielded and `source` is never read.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::grouper;
///
/// let chunks: Vec<Vec<Option<char>>> = grouper("abcde".chars(), 2).collect();
/// assert_eq!(
///     chunks,
///     vec![
///         vec![Some('a'), Some('b')],
///         vec![Some('c'), Some('d')],
///         vec![Some('e'), None],
///     ]
/// );
/// ```
pub fn grouper<S: IntoIterator>(source: S, n: usize) -> Grouper<S::IntoIter> {
    Grouper {
        chunks: zip_longest(shared_handles(source, n)),
    }
}

impl<I: Iterator> Iterator for Grouper<I> {
    type Item = Vec<Option<I::Item>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }
}

impl<I: Iterator> FusedIterator for Grouper<I> {}

impl<I: Iterator> fmt::Debug for Grouper<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("Grouper").finish_non_exhaustive()
    }
}

/// Fixed-size chunks, the last one padded with a fill value.
///
/// Created by [`grouper_fill`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GrouperFill<I: Iterator> {
    chunks: ZipLongestFill<SharedSource<I>>,
}

/// Like [`grouper`], padding the final chunk with `fill`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::grouper_fill;
///
/// let chunks: Vec<String> = grouper_fill("abcde".chars(), 3, 'x')
///     .map(|chunk| chunk.into_iter().collect())
///     .collect();
/// assert_eq!(chunks, vec!["abc", "dex"]);
/// ```
pub fn grouper_fill<S>(source: S, n: usize, fill: S::Item) -> GrouperFill<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    GrouperFill {
        chunks: zip_longest_fill(shared_handles(source, n), fill),
    }
}

impl<I> Iterator for GrouperFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }
}

impl<I> FusedIterator for GrouperFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> fmt::Debug for GrouperFill<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("GrouperFill").finish_non_exhaustive()
    }
}

// =============================================================================
// Fan-out
// =============================================================================

/// Yields overlapping pairs of consecutive elements.
///
/// Empty and single-element sources yield nothing.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::pairwise;
///
/// let steps: Vec<(i32, i32)> = pairwise(vec![1, 2, 3, 4]).collect();
/// assert_eq!(steps, vec![(1, 2), (2, 3), (3, 4)]);
/// ```
pub fn pairwise<S>(source: S) -> Zip<Tee<S::IntoIter>, Tee<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    let behind = Tee::new(source.into_iter());
    let mut ahead = behind.clone();
    ahead.next();
    behind.zip(ahead)
}

/// Splits `source` into the elements that fail `predicate` and the
/// elements that pass it.
///
/// Both halves read the same source through a shared [`Tee`] buffer and may
/// be driven independently. Elements one half has not reached yet stay
/// buffered, so driving one half far ahead of the other buffers everything
/// in between. Dropping a half releases its share of the buffer.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::partition;
///
/// let (odd, even) = partition(|n: &i32| n % 2 == 0, 0..10);
/// assert_eq!(even.collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
/// assert_eq!(odd.collect::<Vec<_>>(), vec![1, 3, 5, 7, 9]);
/// ```
#[allow(clippy::type_complexity)]
pub fn partition<P, S>(
    predicate: P,
    source: S,
) -> (FilterFalse<Tee<S::IntoIter>, P>, Filter<Tee<S::IntoIter>, P>)
where
    S: IntoIterator,
    S::Item: Clone,
    P: FnMut(&S::Item) -> bool + Clone,
{
    let failing = Tee::new(source.into_iter());
    let passing = failing.clone();
    (
        filterfalse(predicate.clone(), failing),
        passing.filter(predicate),
    )
}

// =============================================================================
// RoundRobin
// =============================================================================

/// Interleaves several sequences.
///
/// Created by [`roundrobin`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct RoundRobin<I> {
    /// Live sources; the front one is pulled next.
    sources: VecDeque<I>,
}

/// Takes one element from each source in turn until all are exhausted.
///
/// An exhausted source leaves the rotation and the remaining sources keep
/// their relative order. Each pull reads at most one element from each
/// source, so infinite sources are fine.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::recipes::roundrobin;
///
/// let mixed: Vec<i32> = roundrobin(vec![vec![1, 2, 3], vec![10], vec![20, 30]]).collect();
/// assert_eq!(mixed, vec![1, 10, 20, 2, 30, 3]);
/// ```
pub fn roundrobin<S>(sources: S) -> RoundRobin<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    RoundRobin {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
    }
}

impl<I: Iterator> Iterator for RoundRobin<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        while let Some(mut source) = self.sources.pop_front() {
            if let Some(element) = source.next() {
                self.sources.push_back(source);
                return Some(element);
            }
            tracing::trace!(remaining = self.sources.len(), "roundrobin source exhausted");
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (source_lower, source_upper)| {
                (
                    lower.saturating_add(source_lower),
                    upper.zip(source_upper).and_then(|(left, right)| left.checked_add(right)),
                )
            })
    }
}

impl<I: Iterator> FusedIterator for RoundRobin<I> {}
