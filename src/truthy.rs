//! Truthiness of plain values.
//!
//! Several combinators test values rather than predicate results:
//! `compress` tests its selectors, and `filterfalse`, `first_true` and
//! `quantify` are commonly driven by the values themselves. [`Truthy`] gives
//! those tests a single meaning: zero, empty and absent values are false,
//! everything else is true.

/// A value that can be tested for truthiness.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::Truthy;
///
/// assert!(1.is_truthy());
/// assert!(!0.is_truthy());
/// assert!(!"".is_truthy());
/// assert!("abc".is_truthy());
/// assert!(!None::<i32>.is_truthy());
/// assert!(!Vec::<i32>::new().is_truthy());
/// ```
pub trait Truthy {
    /// Returns `true` if the value counts as true.
    fn is_truthy(&self) -> bool;
}

/// Tests a value for truthiness.
///
/// This is the default predicate of the value-testing combinators, passed
/// explicitly where a predicate is expected.
///
/// # Examples
///
/// ```rust
/// use lazy_itertools::{base::filterfalse, truthy};
///
/// let falsy: Vec<i32> = filterfalse(truthy, vec![1, 0, 2, 0]).collect();
/// assert_eq!(falsy, vec![0, 0]);
/// ```
#[inline]
pub fn truthy<T: Truthy + ?Sized>(value: &T) -> bool {
    value.is_truthy()
}

impl Truthy for bool {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthy_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Truthy for $integer {
                #[inline]
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthy_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthy for f32 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for f64 {
    #[inline]
    fn is_truthy(&self) -> bool {
        *self != 0.0
    }
}

impl Truthy for char {
    #[inline]
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthy for () {
    #[inline]
    fn is_truthy(&self) -> bool {
        false
    }
}

impl Truthy for str {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for [T] {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Truthy for Vec<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

/// `None` is false; `Some` defers to the wrapped value.
impl<T: Truthy> Truthy for Option<T> {
    #[inline]
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthy::is_truthy)
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    #[inline]
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(-1, true)]
    fn test_integer_truthiness(#[case] value: i64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(0.0, false)]
    #[case(-0.0, false)]
    #[case(0.5, true)]
    #[case(f64::NAN, true)]
    fn test_float_truthiness(#[case] value: f64, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    fn test_option_defers_to_inner_value() {
        assert!(!None::<bool>.is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(Some(true).is_truthy());
        assert!(!Some("").is_truthy());
    }

    #[rstest]
    fn test_collections_are_truthy_when_non_empty() {
        assert!(!String::new().is_truthy());
        assert!(String::from("x").is_truthy());
        assert!(!(&[] as &[i32]).is_truthy());
        assert!(vec![()].is_truthy());
    }

    #[rstest]
    fn test_truthy_function_accepts_references() {
        let values = [0, 3, 0, 4];
        let count = values.iter().filter(|value| truthy(*value)).count();
        assert_eq!(count, 2);
    }
}
