//! Argument unpacking: `starmap`.

use std::iter::FusedIterator;

/// A function callable with the fields of a tuple as separate arguments.
///
/// Implemented for every `FnMut` of arity 0 to 6, with `Args` the tuple of
/// its parameter types.
pub trait StarFn<Args> {
    /// The function's return type.
    type Output;

    /// Calls the function with `arguments` unpacked.
    fn call_unpacked(&mut self, arguments: Args) -> Self::Output;
}

macro_rules! impl_star_fn {
    ($($argument:ident),*) => {
        impl<Function, Output, $($argument),*> StarFn<($($argument,)*)> for Function
        where
            Function: FnMut($($argument),*) -> Output,
        {
            type Output = Output;

            #[inline]
            #[allow(non_snake_case)]
            fn call_unpacked(&mut self, ($($argument,)*): ($($argument,)*)) -> Output {
                self($($argument),*)
            }
        }
    };
}

impl_star_fn!();
impl_star_fn!(A);
impl_star_fn!(A, B);
impl_star_fn!(A, B, C);
impl_star_fn!(A, B, C, D);
impl_star_fn!(A, B, C, D, E);
impl_star_fn!(A, B, C, D, E, G);

/// Applies a function to unpacked tuples.
///
/// Created by [`starmap`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct StarMap<I, F> {
    source: I,
    function: F,
}

/// Yields `function(a, b, ...)` for each tuple `(a, b, ...)` of `source`.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::base::starmap;
///
/// let powers: Vec<u32> = starmap(u32::pow, vec![(2, 3), (3, 2), (10, 2)]).collect();
/// assert_eq!(powers, vec![8, 9, 100]);
/// ```
pub fn starmap<F, S>(function: F, source: S) -> StarMap<S::IntoIter, F>
where
    S: IntoIterator,
    F: StarFn<S::Item>,
{
    StarMap {
        source: source.into_iter(),
        function,
    }
}

impl<I, F> Iterator for StarMap<I, F>
where
    I: Iterator,
    F: StarFn<I::Item>,
{
    type Item = F::Output;

    #[inline]
    fn next(&mut self) -> Option<F::Output> {
        let arguments = self.source.next()?;
        Some(self.function.call_unpacked(arguments))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F> FusedIterator for StarMap<I, F>
where
    I: FusedIterator,
    F: StarFn<I::Item>,
{
}
