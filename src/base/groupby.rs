//! Grouping of consecutive runs: `groupby`.
//!
//! Only adjacent elements with equal keys are merged; a key that reappears
//! after a different key starts a new group. The grouper and its groups share
//! one source and one element of lookahead. A group is only readable until
//! the grouper advances: advancing skips whatever the current group has left,
//! and the stale group is exhausted from then on.

use std::cell::RefCell;
use std::fmt;
use std::iter::{Fuse, FusedIterator};
use std::rc::Rc;

struct GroupState<I: Iterator, K, F> {
    source: Fuse<I>,
    key: F,
    /// The next element and its key, read ahead while looking for a group's end.
    lookahead: Option<(K, I::Item)>,
    current_key: Option<K>,
    /// Incremented each time the grouper moves to a new group.
    generation: usize,
}

impl<I, K, F> GroupState<I, K, F>
where
    I: Iterator,
    K: PartialEq + Clone,
    F: FnMut(&I::Item) -> K,
{
    fn next_in_group(&mut self) -> Option<I::Item> {
        let current = self.current_key.as_ref()?;

        if let Some((key, _)) = &self.lookahead {
            if key != current {
                return None;
            }
            return self.lookahead.take().map(|(_, element)| element);
        }

        let element = self.source.next()?;
        let key = (self.key)(&element);
        if &key == current {
            Some(element)
        } else {
            self.lookahead = Some((key, element));
            None
        }
    }

    fn next_group(&mut self) -> Option<K> {
        if self.current_key.is_some() {
            while self.next_in_group().is_some() {}
        }

        let (key, element) = match self.lookahead.take() {
            Some(pending) => pending,
            None => {
                let element = self.source.next()?;
                ((self.key)(&element), element)
            }
        };

        self.current_key = Some(key.clone());
        self.lookahead = Some((key.clone(), element));
        self.generation += 1;
        Some(key)
    }
}

/// Groups consecutive elements with equal keys.
///
/// Created by [`groupby`]. Yields `(key, group)` pairs.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct GroupBy<I: Iterator, K, F> {
    state: Rc<RefCell<GroupState<I, K, F>>>,
}

/// The elements of one run yielded by a [`GroupBy`].
///
/// A group must be consumed before its grouper advances; once the grouper
/// has moved on, the group yields nothing more.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Group<I: Iterator, K, F> {
    state: Rc<RefCell<GroupState<I, K, F>>>,
    generation: usize,
}

/// Groups consecutive elements of `source` by the key `key` computes.
///
/// The key function is called exactly once per element. Use
/// `|element| element.clone()` to group by the elements themselves.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::groupby;
///
/// let runs: Vec<(bool, Vec<i32>)> = groupby(vec![2, 4, 1, 3, 6], |n| n % 2 == 0)
///     .map(|(even, group)| (even, group.collect()))
///     .collect();
/// assert_eq!(
///     runs,
///     vec![(true, vec![2, 4]), (false, vec![1, 3]), (true, vec![6])]
/// );
/// ```
pub fn groupby<S, K, F>(source: S, key: F) -> GroupBy<S::IntoIter, K, F>
where
    S: IntoIterator,
    K: PartialEq + Clone,
    F: FnMut(&S::Item) -> K,
{
    GroupBy {
        state: Rc::new(RefCell::new(GroupState {
            source: source.into_iter().fuse(),
            key,
            lookahead: None,
            current_key: None,
            generation: 0,
        })),
    }
}

impl<I, K, F> Iterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: PartialEq + Clone,
    F: FnMut(&I::Item) -> K,
{
    type Item = (K, Group<I, K, F>);

    fn next(&mut self) -> Option<Self::Item> {
        let mut state = self.state.borrow_mut();
        let key = state.next_group()?;
        let generation = state.generation;
        drop(state);
        Some((
            key,
            Group {
                state: Rc::clone(&self.state),
                generation,
            },
        ))
    }
}

impl<I, K, F> FusedIterator for GroupBy<I, K, F>
where
    I: Iterator,
    K: PartialEq + Clone,
    F: FnMut(&I::Item) -> K,
{
}

impl<I, K, F> Iterator for Group<I, K, F>
where
    I: Iterator,
    K: PartialEq + Clone,
    F: FnMut(&I::Item) -> K,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        let mut state = self.state.borrow_mut();
        if state.generation != self.generation {
            return None;
        }
        let element = state.next_in_group();
        if element.is_none() {
            // Detach so later pulls cannot observe the next group's elements.
            self.generation = usize::MAX;
        }
        element
    }
}

impl<I, K, F> FusedIterator for Group<I, K, F>
where
    I: Iterator,
    K: PartialEq + Clone,
    F: FnMut(&I::Item) -> K,
{
}

impl<I: Iterator, K: fmt::Debug, F> fmt::Debug for GroupBy<I, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        formatter
            .debug_struct("GroupBy")
            .field("current_key", &state.current_key)
            .finish_non_exhaustive()
    }
}

impl<I: Iterator, K, F> fmt::Debug for Group<I, K, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Group")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
