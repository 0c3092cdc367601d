//! Derived combinators.
//!
//! Thin compositions over the [`base`](crate::base) layer. They keep no
//! state beyond what the combinators they are built from keep.
//!
//! - Reductions that consume their input: [`all_equal`], [`dotproduct`],
//!   [`first_true`], [`nth`], [`nth_or`], [`quantify`], [`tail`], [`take`]
//! - Reshaping: [`flatten`], [`grouper`], [`grouper_fill`], [`ncycles`],
//!   [`padnone`], [`pairwise`], [`partition`], [`prepend`], [`roundrobin`]
//! - Generation from functions: [`iter_except`], [`repeatfunc`], [`tabulate`]
//!
//! # Examples
//!
//! ```rust
//! use lazy_itertools::recipes::{pairwise, roundrobin, take};
//!
//! let order: String = roundrobin(vec!["ABC".chars(), "D".chars(), "EF".chars()]).collect();
//! assert_eq!(order, "ADEBFC");
//!
//! let steps: Vec<(i32, i32)> = take(2, pairwise(vec![1, 2, 3, 4]));
//! assert_eq!(steps, vec![(1, 2), (2, 3)]);
//! ```

mod consume;
mod generate;
mod reshape;

pub use consume::{all_equal, dotproduct, first_true, nth, nth_or, quantify, tail, take};
pub use generate::{IterExcept, iter_except, repeatfunc, tabulate};
pub use reshape::{
    Grouper, GrouperFill, RoundRobin, flatten, grouper, grouper_fill, ncycles, padnone, pairwise,
    partition, prepend, roundrobin,
};
