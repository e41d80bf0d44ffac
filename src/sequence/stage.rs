//! The seam shared by transformers and consumers.
//!
//! Every combinator factory returns a value implementing [`Stage`]. Applying
//! a transformer stage yields a new lazy iterator; applying a consumer stage
//! drains its input into a value. Stages compose into larger stages with
//! their `then` method, and any value can be fed through a stage in method
//! form with [`Pipe::pipe`].
//!
//! # Laws
//!
//! - **Associativity**: `a.then(b).then(c)` and `a.then(b.then(c))` apply
//!   the same way to every input.

use super::consume::{ConsumeAll, Max, Reduce, ToArray, ToReadonlyArray};
#[cfg(feature = "fallible")]
use super::fallible::{TryConsumeAll, TryMap, TryReduce, TryToArray};
use super::transform::{Filter, FlatMap, ForEach, Map};

/// A step in a sequence pipeline.
///
/// `Input` is what the stage accepts, usually any [`IntoIterator`].
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, map, to_array};
///
/// let doubled = map(|x: i32, _| x * 2).apply(vec![1, 2, 3]);
/// assert_eq!(to_array().apply(doubled), vec![2, 4, 6]);
/// ```
pub trait Stage<Input> {
    /// The value produced by applying this stage.
    type Output;

    /// Applies this stage to `input`.
    fn apply(self, input: Input) -> Self::Output;
}

/// Two stages applied one after the other: `inner` first, then `outer`.
///
/// Built by the `then` method every stage has, and by the `compose!` macro.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, filter, map, to_array};
///
/// let evens_squared = filter(|x: &i32, _| x % 2 == 0)
///     .then(map(|x: i32, _| x * x))
///     .then(to_array());
///
/// assert_eq!(evens_squared.apply(1..=6), vec![4, 16, 36]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composed<Outer, Inner> {
    outer: Outer,
    inner: Inner,
}

impl<Outer, Inner> Composed<Outer, Inner> {
    /// Creates a stage applying `inner` and then `outer`.
    #[inline]
    pub const fn new(outer: Outer, inner: Inner) -> Self {
        Self { outer, inner }
    }
}

impl<Input, Outer, Inner> Stage<Input> for Composed<Outer, Inner>
where
    Inner: Stage<Input>,
    Outer: Stage<Inner::Output>,
{
    type Output = Outer::Output;

    #[inline]
    fn apply(self, input: Input) -> Self::Output {
        self.outer.apply(self.inner.apply(input))
    }
}

/// Adds `then`, left-to-right composition, to every stage type.
///
/// `then` is inherent rather than a `Stage` method because a stage is
/// generic over its input, which is not known until the result is applied.
macro_rules! impl_then {
    ($($stage:ident $(<$($parameter:ident),+>)?),* $(,)?) => {
        $(
            impl$(<$($parameter),+>)? $stage$(<$($parameter),+>)? {
                /// Chains `next` after this stage, left to right.
                #[inline]
                pub const fn then<Next>(self, next: Next) -> Composed<Next, Self> {
                    Composed::new(next, self)
                }
            }
        )*
    };
}

impl_then!(
    Composed<Outer, Inner>,
    Map<T, F>,
    FlatMap<T, F>,
    Filter<T, F>,
    ForEach<T, F>,
    Reduce<T, U, F>,
    Max<T>,
    ToArray,
    ToReadonlyArray,
    ConsumeAll,
);

#[cfg(feature = "fallible")]
impl_then!(TryMap<T, F>, TryReduce<T, U, F>, TryToArray, TryConsumeAll);

/// Feeds a value through a stage in method form.
///
/// Implemented for every sized type.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, map, range, reduce};
///
/// let total = range(1, Some(4), 1)?
///     .pipe(map(|x: i32, index| x * index as i32))
///     .pipe(reduce(0, |accumulator, x: i32| accumulator + x));
///
/// assert_eq!(total, 0 + 2 + 6);
/// # Ok::<(), chain_iterate::sequence::SequenceError>(())
/// ```
pub trait Pipe: Sized {
    /// Applies `stage` to `self`.
    #[inline]
    fn pipe<S>(self, stage: S) -> S::Output
    where
        S: Stage<Self>,
    {
        stage.apply(self)
    }
}

impl<T> Pipe for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{map, to_array};

    #[test]
    fn test_then_runs_inner_first() {
        let add_then_double = map(|x: i32, _| x + 1).then(map(|x: i32, _| x * 2));
        let result: Vec<i32> = add_then_double.apply(vec![1, 2]).collect();
        assert_eq!(result, vec![4, 6]);
    }

    #[test]
    fn test_composed_new_order() {
        let composed = Composed::new(to_array(), map(|x: i32, index| x + index as i32));
        assert_eq!(composed.apply(vec![10, 10, 10]), vec![10, 11, 12]);
    }
}
