//! The `pipe!` macro for left-to-right stage application.
//!
//! This module provides the [`pipe!`] macro which feeds a sequence
//! through stages from left to right, following the data flow style of programming.

/// Pipes a value through a series of stages from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h.apply(g.apply(f.apply(x)))`.
///
/// # Relationship with compose!
///
/// `pipe!(x, f, g, h)` is equivalent to `compose!(h, g, f).apply(x)`.
///
/// While [`compose!`](crate::compose!) creates a new stage, `pipe!` immediately
/// applies the stages to a value.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f.apply(x)`
/// - `pipe!(x, f, g, ...)` - Returns `...g.apply(f.apply(x))`
///
/// # Examples
///
/// ## Producer, transformers and a consumer
///
/// ```
/// use chain_iterate::pipe;
/// use chain_iterate::sequence::{filter, map, range, to_array};
///
/// let result = pipe!(
///     range(0, Some(5), 1)?,
///     map(|x: i32, _| x * 2),
///     filter(|x: &i32, _| x % 2 == 0),
///     to_array()
/// );
/// assert_eq!(result, vec![0, 2, 4, 6, 8]);
/// # Ok::<(), chain_iterate::sequence::SequenceError>(())
/// ```
///
/// ## Equivalence with compose
///
/// ```
/// use chain_iterate::sequence::{Stage, map, reduce};
/// use chain_iterate::{compose, pipe};
///
/// let pipe_result = pipe!(vec![1, 2, 3], map(|x: i32, _| x + 1), reduce(0, |a, b: i32| a + b));
/// let compose_result =
///     compose!(reduce(0, |a, b: i32| a + b), map(|x: i32, _| x + 1)).apply(vec![1, 2, 3]);
///
/// assert_eq!(pipe_result, compose_result);
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr) => {
        $value
    };

    // Single stage: apply it
    ($value:expr, $stage:expr $(,)?) => {
        $crate::sequence::Stage::apply($stage, $value)
    };

    // Multiple stages: apply left to right recursively
    ($value:expr, $stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::pipe!($crate::sequence::Stage::apply($stage, $value), $($remaining_stages),+)
    };
}
