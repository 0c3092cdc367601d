//! Fan-out of one source to independent branches: `tee`.
//!
//! All branches share one buffer. Elements are appended at the frontier by
//! whichever branch gets there first and are evicted once every live branch
//! has read past them, so memory is bounded by the distance between the
//! fastest and the slowest branch.
//!
//! # Examples
//!
//! ```rust
//! use lazy_itertools::base::tee;
//!
//! let mut branches = tee(vec![1, 2, 3], 2);
//! let second = branches.pop().unwrap();
//! let first = branches.pop().unwrap();
//!
//! assert_eq!(first.collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(second.collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::rc::Rc;

/// The state shared by all branches of one `tee` call.
///
/// Positions are absolute indices into the source's element run. The buffer
/// holds the elements at positions `pulled - buffer.len() .. pulled`.
struct TeeBuffer<I: Iterator> {
    source: Option<I>,
    buffer: VecDeque<I::Item>,
    pulled: usize,
    /// One slot per branch; `None` marks a dropped branch, reused by `clone`.
    cursors: Vec<Option<usize>>,
}

impl<I> TeeBuffer<I>
where
    I: Iterator,
    I::Item: Clone,
{
    #[inline]
    fn offset(&self) -> usize {
        self.pulled - self.buffer.len()
    }

    fn pull(&mut self, branch: usize) -> Option<I::Item> {
        let cursor = self.cursors[branch]?;

        let element = if cursor < self.pulled {
            self.buffer[cursor - self.offset()].clone()
        } else {
            let Some(element) = self.source.as_mut()?.next() else {
                self.source = None;
                return None;
            };
            self.pulled += 1;
            let shared = self
                .cursors
                .iter()
                .enumerate()
                .any(|(index, other)| index != branch && other.is_some());
            if shared {
                self.buffer.push_back(element.clone());
            }
            element
        };

        self.cursors[branch] = Some(cursor + 1);
        self.prune();
        Some(element)
    }

    fn prune(&mut self) {
        let slowest = self
            .cursors
            .iter()
            .flatten()
            .min()
            .copied()
            .unwrap_or(self.pulled);
        let evicted = slowest.saturating_sub(self.offset()).min(self.buffer.len());
        if evicted > 0 {
            self.buffer.drain(..evicted);
            tracing::trace!(evicted, buffered = self.buffer.len(), "tee buffer pruned");
        }
    }
}

/// One branch of a [`tee`].
///
/// Each branch replays the full element run of the shared source,
/// independently of its siblings. Cloning a branch creates a new branch
/// positioned where the original currently is.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Tee<I: Iterator> {
    shared: Rc<RefCell<TeeBuffer<I>>>,
    branch: usize,
}

/// Splits `source` into `n` independent branches.
///
/// The source does not need to be re-iterable. It is pulled at most once per
/// element, by the branch that runs furthest ahead. With `n == 0` no branch
/// is created and the source is never pulled.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::tee;
///
/// let branches = tee("abc".chars(), 3);
/// let replayed: Vec<String> = branches.into_iter().map(Iterator::collect).collect();
/// assert_eq!(replayed, vec!["abc", "abc", "abc"]);
///
/// assert!(tee("abc".chars(), 0).is_empty());
/// ```
pub fn tee<S>(source: S, n: usize) -> Vec<Tee<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Clone,
{
    if n == 0 {
        return Vec::new();
    }

    let first = Tee::new(source.into_iter());
    let mut branches = Vec::with_capacity(n);
    branches.extend((1..n).map(|_| first.clone()));
    branches.insert(0, first);
    branches
}

impl<I: Iterator> Tee<I> {
    /// A lone branch over `source`; siblings are made with `clone`.
    pub(crate) fn new(source: I) -> Self {
        Self {
            shared: Rc::new(RefCell::new(TeeBuffer {
                source: Some(source),
                buffer: VecDeque::new(),
                pulled: 0,
                cursors: vec![Some(0)],
            })),
            branch: 0,
        }
    }

    /// Returns the number of elements currently held in the shared buffer.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_itertools::base::tee;
    ///
    /// let mut branches = tee(0..10, 2);
    /// let lagging = branches.pop().unwrap();
    /// let mut leading = branches.pop().unwrap();
    ///
    /// leading.by_ref().take(4).for_each(drop);
    /// assert_eq!(leading.buffered_len(), 4);
    ///
    /// drop(lagging);
    /// assert_eq!(leading.buffered_len(), 0);
    /// ```
    pub fn buffered_len(&self) -> usize {
        self.shared.borrow().buffer.len()
    }
}

impl<I> Iterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<I::Item> {
        self.shared.borrow_mut().pull(self.branch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let shared = self.shared.borrow();
        let buffered = shared.cursors[self.branch].map_or(0, |cursor| shared.pulled - cursor);
        let (lower, upper) = shared
            .source
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        (
            lower.saturating_add(buffered),
            upper.and_then(|upper| upper.checked_add(buffered)),
        )
    }
}

impl<I> FusedIterator for Tee<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I: Iterator> Clone for Tee<I> {
    fn clone(&self) -> Self {
        let mut shared = self.shared.borrow_mut();
        let cursor = shared.cursors[self.branch];
        let branch = match shared.cursors.iter().position(Option::is_none) {
            Some(vacant) => {
                shared.cursors[vacant] = cursor;
                vacant
            }
            None => {
                shared.cursors.push(cursor);
                shared.cursors.len() - 1
            }
        };
        drop(shared);
        Self {
            shared: Rc::clone(&self.shared),
            branch,
        }
    }
}

impl<I: Iterator> Drop for Tee<I> {
    fn drop(&mut self) {
        if let Ok(mut shared) = self.shared.try_borrow_mut() {
            shared.cursors[self.branch] = None;
            let slowest = shared.cursors.iter().flatten().min().copied();
            let keep = slowest.map_or(0, |slowest| shared.pulled - slowest);
            let evicted = shared.buffer.len().saturating_sub(keep);
            shared.buffer.drain(..evicted);
            if shared.cursors.iter().all(Option::is_none) {
                shared.source = None;
            }
        }
    }
}

impl<I: Iterator> fmt::Debug for Tee<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Tee")
            .field("branch", &self.branch)
            .field("buffered", &self.buffered_len())
            .finish()
    }
}
