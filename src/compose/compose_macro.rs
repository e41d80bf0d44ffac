//! The `compose!` macro for stage composition.
//!
//! This module provides the [`compose!`] macro which composes stages
//! from right to left, following the mathematical notation for function composition.

/// Composes stages from right to left into a single stage.
///
/// `compose!(f, g, h).apply(x)` is equivalent to `f.apply(g.apply(h.apply(x)))`.
///
/// The rightmost stage sees the input first. The result is a
/// [`Composed`](crate::sequence::Composed) stage, so it can be stored,
/// cloned (when every part is `Clone`) and composed further.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h))` and `compose!(compose!(f, g), h)`
///   apply the same way to every input.
///
/// # Syntax
///
/// - `compose!(f)` - Returns `f` unchanged
/// - `compose!(f, g)` - Returns a stage applying `g` then `f`
/// - `compose!(f, g, h, ...)` - Composes any number of stages
///
/// # Examples
///
/// ## Transformer then consumer
///
/// ```
/// use chain_iterate::compose;
/// use chain_iterate::sequence::{Stage, map, to_array};
///
/// let doubled_array = compose!(to_array(), map(|x: i32, _| x * 2));
/// assert_eq!(doubled_array.apply(vec![1, 2, 3]), vec![2, 4, 6]);
/// ```
///
/// ## Reusing a composed stage
///
/// ```
/// use chain_iterate::compose;
/// use chain_iterate::sequence::{Stage, filter, max, range};
///
/// let largest_odd = compose!(max(None), filter(|x: &i32, _| x % 2 != 0));
///
/// assert_eq!(largest_odd.clone().apply(range(0, Some(10), 1)?), Some(9));
/// assert_eq!(largest_odd.apply(vec![2, 4]), None);
/// # Ok::<(), chain_iterate::sequence::SequenceError>(())
/// ```
#[macro_export]
macro_rules! compose {
    // Single stage: returned as-is
    ($stage:expr $(,)?) => {
        $stage
    };

    // Two stages: compose!(f, g).apply(x) = f.apply(g.apply(x))
    ($outer_stage:expr, $inner_stage:expr $(,)?) => {
        $crate::sequence::Composed::new($outer_stage, $inner_stage)
    };

    // Three or more stages: compose!(f, g, h, ...) = compose!(f, compose!(g, h, ...))
    ($outer_stage:expr, $($remaining_stages:expr),+ $(,)?) => {
        $crate::sequence::Composed::new($outer_stage, $crate::compose!($($remaining_stages),+))
    };
}
