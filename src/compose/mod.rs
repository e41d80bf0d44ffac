//! Stage composition macros.
//!
//! This module provides macros for chaining sequence stages in a
//! functional programming style.
//!
//! # Overview
//!
//! - [`pipe!`]: Feed a value through stages left-to-right (data flow style)
//! - [`compose!`]: Build one stage from several, right-to-left (mathematical composition)
//!
//! The method forms are [`Pipe::pipe`](crate::sequence::Pipe::pipe) and
//! the `then` method of every stage.
//!
//! # Examples
//!
//! ## Pipeline (left-to-right)
//!
//! ```
//! use chain_iterate::pipe;
//! use chain_iterate::sequence::{flat_map, range, to_array};
//!
//! let pairs = pipe!(
//!     range(1, Some(3), 1)?,
//!     flat_map(|x: i32, _| [x, -x]),
//!     to_array()
//! );
//! assert_eq!(pairs, vec![1, -1, 2, -2]);
//! # Ok::<(), chain_iterate::sequence::SequenceError>(())
//! ```
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use chain_iterate::compose;
//! use chain_iterate::sequence::{Stage, map, reduce};
//!
//! let sum_of_squares = compose!(reduce(0, |a, b: i64| a + b), map(|x: i64, _| x * x));
//! assert_eq!(sum_of_squares.apply(vec![1, 2, 3]), 14);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Pipe/Compose**: `pipe!(x, f, g) == compose!(g, f).apply(x)`

mod compose_macro;
mod pipe_macro;

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
