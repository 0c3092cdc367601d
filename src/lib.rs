//! # lazy-itertools
//!
//! Lazy sequence combinators that process one element at a time and keep
//! only the state their semantics require.
//!
//! ## Overview
//!
//! Every combinator is an ordinary [`Iterator`] that does its work only in
//! response to `next()`. Combinators compose freely: any combinator can be
//! the input of another.
//!
//! - **Base combinators**: counting, cycling, repetition, chaining, slicing,
//!   tee, grouping, filtering, zipping and accumulation
//! - **Combinatoric generators**: permutations, combinations,
//!   combinations with replacement and Cartesian products
//! - **Recipes**: derived combinators (pairwise, partition, roundrobin,
//!   grouper, tail, take, ...) built from the base layer
//!
//! ## Feature Flags
//!
//! - `base`: base combinators, the [`Truthy`] trait and the error types
//! - `combinatoric`: permutations, combinations and products
//! - `recipes`: derived combinators
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_itertools::prelude::*;
//!
//! let groups: Vec<(char, usize)> = groupby("aabbcbbbaaa".chars(), |c| *c)
//!     .map(|(key, group)| (key, group.count()))
//!     .collect();
//! assert_eq!(groups, vec![('a', 2), ('b', 2), ('c', 1), ('b', 3), ('a', 3)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every enabled combinator together with the error types and
/// the [`Truthy`] trait.
///
/// # Usage
///
/// ```rust
/// use lazy_itertools::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    pub use crate::truthy::*;

    #[cfg(feature = "base")]
    pub use crate::base::*;

    #[cfg(feature = "combinatoric")]
    pub use crate::combinatoric::*;

    #[cfg(feature = "recipes")]
    pub use crate::recipes::*;
}

pub mod error;

pub mod truthy;

#[cfg(feature = "base")]
pub mod base;

#[cfg(feature = "combinatoric")]
pub mod combinatoric;

#[cfg(feature = "recipes")]
pub mod recipes;

pub use error::{HasErrorKind, InvalidArgumentError, IterError};
pub use truthy::{Truthy, truthy};
