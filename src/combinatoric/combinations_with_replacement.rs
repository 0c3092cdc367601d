//! `r`-length subsequences with repetition: `combinations_with_replacement`.

use std::iter::FusedIterator;

use super::{IndexVec, Pool, binomial, exact_hint, select};

/// `r`-length subsequences that may reuse elements.
///
/// Created by [`combinations_with_replacement`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct CombinationsWithReplacement<I: Iterator> {
    pool: Pool<I, I::Item>,
    r: usize,
    indices: IndexVec,
    started: bool,
    done: bool,
}

/// Yields every `r`-length subsequence of `source` in which each element
/// may appear more than once.
///
/// Indices within a tuple are non-decreasing, and tuples come out in
/// lexicographic order of position. Unlike [`combinations`](super::combinations)
/// this is defined for `r` greater than the length of the source. An empty
/// source with `r > 0` yields nothing.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::combinatoric::combinations_with_replacement;
///
/// let draws: Vec<String> = combinations_with_replacement("ABC".chars(), 2)
///     .map(|draw| draw.into_iter().collect())
///     .collect();
/// assert_eq!(draws, vec!["AA", "AB", "AC", "BB", "BC", "CC"]);
/// ```
pub fn combinations_with_replacement<S>(
    source: S,
    r: usize,
) -> CombinationsWithReplacement<S::IntoIter>
where
    S: IntoIterator,
    S::Item: Clone,
{
    CombinationsWithReplacement {
        pool: Pool::new(source.into_iter()),
        r,
        indices: IndexVec::new(),
        started: false,
        done: false,
    }
}

impl<I: Iterator> CombinationsWithReplacement<I> {
    fn advance(&mut self, n: usize) -> bool {
        let Some(position) = (0..self.r).rev().find(|&i| self.indices[i] != n - 1) else {
            return false;
        };
        let raised = self.indices[position] + 1;
        for index in &mut self.indices[position..] {
            *index = raised;
        }
        true
    }

    fn remaining(&self, n: usize) -> Option<usize> {
        let r = self.r;
        self.indices
            .iter()
            .enumerate()
            .try_fold(0_usize, |total, (position, &index)| {
                // Tuples still to come whose first change is at `position`.
                let free = (n + r - 2).checked_sub(index + position)?;
                total.checked_add(binomial(free, r - position)?)
            })
    }
}

impl<I> Iterator for CombinationsWithReplacement<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Vec<I::Item>> {
        if self.done {
            return None;
        }
        let n = self.pool.materialize().len();
        if self.started {
            if !self.advance(n) {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
            if n == 0 && self.r > 0 {
                self.done = true;
                return None;
            }
            self.indices = std::iter::repeat_n(0, self.r).collect();
        }
        self.pool.elements().map(|pool| select(pool, &self.indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match (self.started, self.pool.elements()) {
            (true, Some(pool)) => exact_hint(self.remaining(pool.len())),
            _ => (0, None),
        }
    }
}

impl<I> FusedIterator for CombinationsWithReplacement<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn words(source: &str, r: usize) -> Vec<String> {
        combinations_with_replacement(source.chars(), r)
            .map(|draw| draw.into_iter().collect())
            .collect()
    }

    #[rstest]
    #[case("ABC", 2, vec!["AA", "AB", "AC", "BB", "BC", "CC"])]
    #[case("AB", 3, vec!["AAA", "AAB", "ABB", "BBB"])]
    #[case("A", 2, vec!["AA"])]
    #[case("ABC", 0, vec![""])]
    #[case("", 0, vec![""])]
    #[case("", 2, vec![])]
    fn test_combinations_with_replacement(
        #[case] source: &str,
        #[case] r: usize,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(words(source, r), expected);
    }

    #[rstest]
    #[case(4, 3)]
    #[case(3, 5)]
    #[case(1, 4)]
    fn test_count_is_multiset_coefficient(#[case] n: usize, #[case] r: usize) {
        let expected = binomial(n + r - 1, r);
        assert_eq!(Some(combinations_with_replacement(0..n, r).count()), expected);
    }

    #[rstest]
    #[case(3, 2)]
    #[case(2, 4)]
    #[case(5, 3)]
    #[case(1, 3)]
    #[case(4, 1)]
    fn test_size_hint_tracks_remaining(#[case] n: usize, #[case] r: usize) {
        let mut draws = combinations_with_replacement(0..n, r);
        draws.next();
        let mut remaining = draws.size_hint().0;
        assert_eq!(binomial(n + r - 1, r), Some(remaining + 1));
        while draws.next().is_some() {
            remaining -= 1;
            assert_eq!(draws.size_hint(), (remaining, Some(remaining)));
        }
        assert_eq!(remaining, 0);
    }
}
