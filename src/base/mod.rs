//! Base combinators.
//!
//! Self-contained lazy producers and transformers operating directly on
//! their upstream sequences:
//!
//! - Counting and repetition: [`count`], [`cycle`], [`repeat`]
//! - Concatenation: [`chain`], [`chain_from_iterable`]
//! - Slicing: [`islice`], [`islice_to`]
//! - Fan-out: [`tee`]
//! - Grouping: [`groupby`]
//! - Filtering: [`dropwhile`], [`takewhile`], [`filterfalse`], [`compress`]
//! - Zipping and accumulation: [`zip_longest`], [`zip_longest_fill`],
//!   [`accumulate`], [`accumulate_with`], [`try_accumulate`]
//! - Argument unpacking: [`starmap`]
//!
//! Every combinator is fused: once it has returned `None` it keeps doing so.
//!
//! # Examples
//!
//! ```rust
//! use lazy_itertools::base::{count, cycle, islice, takewhile};
//!
//! let squares: Vec<u32> = takewhile(|n| *n < 30, count(1, 1).map(|n: u32| n * n)).collect();
//! assert_eq!(squares, vec![1, 4, 9, 16, 25]);
//!
//! let window: String = islice(cycle("abc".chars()), 2, Some(7), 1)
//!     .unwrap()
//!     .collect();
//! assert_eq!(window, "cabca");
//! ```

mod accumulate;
mod chain;
mod filtering;
mod groupby;
mod infinite;
mod islice;
mod starmap;
mod tee;
mod zip_longest;

pub use accumulate::{Accumulate, TryAccumulate, accumulate, accumulate_with, try_accumulate};
pub use chain::{Chain, ChainFromIterable, chain, chain_from_iterable};
pub use filtering::{
    Compress, DropWhile, FilterFalse, TakeWhile, compress, dropwhile, filterfalse, takewhile,
};
pub use groupby::{Group, GroupBy, groupby};
pub use infinite::{Count, Cycle, Repeat, count, cycle, repeat};
pub use islice::{ISlice, islice, islice_to};
pub use starmap::{StarFn, StarMap, starmap};
pub use tee::{Tee, tee};
pub use zip_longest::{ZipLongest, ZipLongestFill, zip_longest, zip_longest_fill};
