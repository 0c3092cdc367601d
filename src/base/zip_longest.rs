//! Zipping to the longest input: `zip_longest` and `zip_longest_fill`.

use std::iter::FusedIterator;

/// Zips sequences until all of them are exhausted.
///
/// Created by [`zip_longest`]. Each item holds one slot per source, `None`
/// for sources that have already finished.
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipLongest<I> {
    /// `None` once the source in that slot is exhausted; it is never pulled again.
    sources: Vec<Option<I>>,
    active: usize,
}

/// Yields one element from each source per round, continuing until every
/// source is exhausted. Sources that finish early contribute `None`.
///
/// With no sources nothing is yielded.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::zip_longest;
///
/// let rows: Vec<Vec<Option<i32>>> = zip_longest(vec![vec![1, 2], vec![3]]).collect();
/// assert_eq!(rows, vec![vec![Some(1), Some(3)], vec![Some(2), None]]);
/// ```
pub fn zip_longest<S>(sources: S) -> ZipLongest<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    let sources: Vec<_> = sources
        .into_iter()
        .map(|source| Some(source.into_iter()))
        .collect();
    let active = sources.len();
    ZipLongest { sources, active }
}

impl<I: Iterator> Iterator for ZipLongest<I> {
    type Item = Vec<Option<I::Item>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.active == 0 {
            return None;
        }

        let mut row = Vec::with_capacity(self.sources.len());
        for slot in &mut self.sources {
            let element = slot.as_mut().and_then(Iterator::next);
            if element.is_none() && slot.is_some() {
                *slot = None;
                self.active -= 1;
                if self.active == 0 {
                    return None;
                }
            }
            row.push(element);
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.active == 0 {
            return (0, Some(0));
        }
        self.sources
            .iter()
            .flatten()
            .map(Iterator::size_hint)
            .fold((0, Some(0)), |(lower, upper), (source_lower, source_upper)| {
                let upper = match (upper, source_upper) {
                    (Some(left), Some(right)) => Some(left.max(right)),
                    _ => None,
                };
                (lower.max(source_lower), upper)
            })
    }
}

impl<I: Iterator> FusedIterator for ZipLongest<I> {}

/// Zips sequences until all are exhausted, padding with a fill value.
///
/// Created by [`zip_longest_fill`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ZipLongestFill<I: Iterator> {
    inner: ZipLongest<I>,
    fill: I::Item,
}

/// Like [`zip_longest`], substituting `fill` for sources that finished early.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::zip_longest_fill;
///
/// let rows: Vec<Vec<i32>> = zip_longest_fill(vec![vec![], vec![1, 2]], 0).collect();
/// assert_eq!(rows, vec![vec![0, 1], vec![0, 2]]);
/// ```
pub fn zip_longest_fill<S>(
    sources: S,
    fill: <S::Item as IntoIterator>::Item,
) -> ZipLongestFill<<S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
    <S::Item as IntoIterator>::Item: Clone,
{
    ZipLongestFill {
        inner: zip_longest(sources),
        fill,
    }
}

impl<I> Iterator for ZipLongestFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        let row = self.inner.next()?;
        Some(
            row.into_iter()
                .map(|element| element.unwrap_or_else(|| self.fill.clone()))
                .collect(),
        )
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I> FusedIterator for ZipLongestFill<I>
where
    I: Iterator,
    I::Item: Clone,
{
}
