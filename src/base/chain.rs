//! Concatenation: `chain` and `chain_from_iterable`.

use std::iter::FusedIterator;

/// Two sequences back to back.
///
/// Created by [`chain`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Chain<A, B> {
    first: Option<A>,
    second: Option<B>,
}

/// Yields every element of `first`, then every element of `second`.
///
/// `second` is not pulled until `first` is exhausted, and `first` is dropped
/// as soon as it is. Nest calls to chain more than two sequences.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::chain;
///
/// let joined: Vec<i32> = chain(vec![1, 2], chain(vec![3], vec![4, 5])).collect();
/// assert_eq!(joined, vec![1, 2, 3, 4, 5]);
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A::IntoIter, B::IntoIter>
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
{
    Chain {
        first: Some(first.into_iter()),
        second: Some(second.into_iter()),
    }
}

impl<A, B> Iterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Option<A::Item> {
        if let Some(first) = self.first.as_mut() {
            if let Some(element) = first.next() {
                return Some(element);
            }
            self.first = None;
        }

        let second = self.second.as_mut()?;
        let element = second.next();
        if element.is_none() {
            self.second = None;
        }
        element
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (first_lower, first_upper) =
            self.first.as_ref().map_or((0, Some(0)), Iterator::size_hint);
        let (second_lower, second_upper) =
            self.second.as_ref().map_or((0, Some(0)), Iterator::size_hint);
        let upper = match (first_upper, second_upper) {
            (Some(left), Some(right)) => left.checked_add(right),
            _ => None,
        };
        (first_lower.saturating_add(second_lower), upper)
    }
}

impl<A, B> FusedIterator for Chain<A, B>
where
    A: Iterator,
    B: Iterator<Item = A::Item>,
{
}

/// One level of flattening over a sequence of sequences.
///
/// Created by [`chain_from_iterable`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ChainFromIterable<O, I> {
    outer: Option<O>,
    current: Option<I>,
}

/// Concatenates the sequences produced by `iterables`, in order.
///
/// Each inner sequence is obtained from the outer one only when the previous
/// inner sequence is exhausted, so the outer sequence may be infinite.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::chain_from_iterable;
///
/// let flat: String = chain_from_iterable(vec!["ABC".chars(), "DEF".chars()]).collect();
/// assert_eq!(flat, "ABCDEF");
/// ```
pub fn chain_from_iterable<S>(
    iterables: S,
) -> ChainFromIterable<S::IntoIter, <S::Item as IntoIterator>::IntoIter>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    ChainFromIterable {
        outer: Some(iterables.into_iter()),
        current: None,
    }
}

impl<O, I> Iterator for ChainFromIterable<O, I>
where
    O: Iterator,
    O::Item: IntoIterator<IntoIter = I, Item = I::Item>,
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            if let Some(current) = self.current.as_mut() {
                if let Some(element) = current.next() {
                    return Some(element);
                }
                self.current = None;
            }

            let outer = self.outer.as_mut()?;
            match outer.next() {
                Some(iterable) => self.current = Some(iterable.into_iter()),
                None => {
                    self.outer = None;
                    return None;
                }
            }
        }
    }
}

impl<O, I> FusedIterator for ChainFromIterable<O, I>
where
    O: Iterator,
    O::Item: IntoIterator<IntoIter = I, Item = I::Item>,
    I: Iterator,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![1, 2], vec![3, 4], vec![1, 2, 3, 4])]
    #[case(vec![], vec![3], vec![3])]
    #[case(vec![1], vec![], vec![1])]
    #[case(vec![], vec![], vec![])]
    fn test_chain_order(#[case] first: Vec<i32>, #[case] second: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(chain(first, second).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_chain_reaches_infinite_second_source() {
        let values: Vec<u32> = chain(vec![1, 2], std::iter::repeat(0)).take(4).collect();
        assert_eq!(values, vec![1, 2, 0, 0]);
    }

    #[rstest]
    fn test_chain_size_hint() {
        let chained = chain(vec![1, 2], vec![3]);
        assert_eq!(chained.size_hint(), (3, Some(3)));
    }

    #[rstest]
    #[case(vec![vec![1, 2], vec![3, 4]], vec![1, 2, 3, 4])]
    #[case(vec![vec![]], vec![])]
    #[case(vec![vec![], vec![7]], vec![7])]
    #[case(vec![], vec![])]
    fn test_chain_from_iterable_flattens_one_level(
        #[case] nested: Vec<Vec<i32>>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(chain_from_iterable(nested).collect::<Vec<_>>(), expected);
    }

    #[rstest]
    fn test_chain_from_iterable_is_lazy_over_outer() {
        let mut built = 0;
        let outer = (0..).map(|index| {
            built += 1;
            vec![index; 2]
        });
        let values: Vec<i32> = chain_from_iterable(outer).take(3).collect();
        assert_eq!(values, vec![0, 0, 1]);
        assert_eq!(built, 2);
    }
}
