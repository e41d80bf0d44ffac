//! # chain-iterate
//!
//! Lazy sequence combinators for Rust.
//!
//! ## Overview
//!
//! This library provides a small set of higher-order functions that produce
//! or consume lazily evaluated sequences. Every function is a factory: it
//! takes its callback or configuration and returns a *stage* that is later
//! applied to a sequence.
//!
//! - **Producers**: [`range`](sequence::range), [`range_from`](sequence::range_from)
//! - **Transformers**: [`map`](sequence::map), [`flat_map`](sequence::flat_map),
//!   [`filter`](sequence::filter), [`for_each`](sequence::for_each)
//! - **Consumers**: [`reduce`](sequence::reduce), [`max`](sequence::max),
//!   [`to_array`](sequence::to_array), [`to_readonly_array`](sequence::to_readonly_array),
//!   [`consume_all`](sequence::consume_all)
//! - **Composition**: `pipe!`, `compose!` and the [`Pipe`](sequence::Pipe) trait
//! - **Fallible sequences**: `try_map`, `try_reduce`, `try_to_array`, `try_consume_all`
//!
//! ## Feature Flags
//!
//! - `compose`: `pipe!` and `compose!` macros
//! - `fallible`: combinators over `Result` items
//! - `serde`: serialization of [`Range`](sequence::Range) parameters
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use chain_iterate::prelude::*;
//!
//! let doubled = range(0, Some(5), 1)?
//!     .pipe(map(|x: i32, _| x * 2))
//!     .pipe(filter(|x: &i32, _| x % 2 == 0))
//!     .pipe(to_array());
//!
//! assert_eq!(doubled, vec![0, 2, 4, 6, 8]);
//! # Ok::<(), chain_iterate::sequence::SequenceError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every combinator, the stage traits and the error type.
///
/// # Usage
///
/// ```rust
/// use chain_iterate::prelude::*;
/// ```
pub mod prelude {
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;
