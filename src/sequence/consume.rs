//! Consumer stages: [`reduce`], [`max`], [`to_array`], [`to_readonly_array`]
//! and [`consume_all`].
//!
//! A consumer pulls its input until it is exhausted and returns a single
//! value. None of them return on an infinite input.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::stage::Stage;

// =============================================================================
// reduce
// =============================================================================

/// Consumer created by [`reduce`].
pub struct Reduce<T, U, F> {
    initial: U,
    reducer: F,
    marker: PhantomData<fn(T)>,
}

/// Returns a consumer folding the sequence left to right, starting from
/// `initial` and applying `reducer(accumulator, item)` per element.
///
/// Never returns if the sequence is infinite.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, reduce};
///
/// let sum = reduce(0, |accumulator, item: i32| accumulator + item);
/// assert_eq!(sum.apply(vec![1, 2, 3]), 6);
///
/// let joined = reduce(String::new(), |mut accumulator: String, item: &str| {
///     accumulator.push_str(item);
///     accumulator
/// });
/// assert_eq!(joined.apply(["a", "b", "c"]), "abc");
/// ```
#[inline]
pub const fn reduce<T, U, F>(initial: U, reducer: F) -> Reduce<T, U, F>
where
    F: FnMut(U, T) -> U,
{
    Reduce {
        initial,
        reducer,
        marker: PhantomData,
    }
}

impl<I, T, U, F> Stage<I> for Reduce<T, U, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(U, T) -> U,
{
    type Output = U;

    fn apply(self, input: I) -> Self::Output {
        let mut reducer = self.reducer;
        let mut consumed = 0_usize;
        let accumulator = input.into_iter().fold(self.initial, |accumulator, item| {
            consumed += 1;
            reducer(accumulator, item)
        });
        tracing::trace!(consumed, "reduce drained sequence");
        accumulator
    }
}

impl<T, U: Clone, F: Clone> Clone for Reduce<T, U, F> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            reducer: self.reducer.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, U: fmt::Debug, F> fmt::Debug for Reduce<T, U, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Reduce")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// max
// =============================================================================

/// Consumer created by [`max`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Max<T> {
    fallback: Option<T>,
}

/// Returns a consumer yielding the largest element, or `fallback` if the
/// sequence is empty.
///
/// Runs in a single pass with constant extra memory. An unordered element
/// (a floating-point NaN) wins over every other element once it has been
/// seen, like `Math.max` in host languages with IEEE numbers.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, max};
///
/// assert_eq!(max(None).apply(Vec::<i32>::new()), None);
/// assert_eq!(max(Some(-1)).apply(Vec::<i32>::new()), Some(-1));
/// assert_eq!(max(None).apply(vec![3, 1, 4, 1, 5]), Some(5));
/// ```
#[inline]
pub const fn max<T: PartialOrd>(fallback: Option<T>) -> Max<T> {
    Max { fallback }
}

impl<I, T> Stage<I> for Max<T>
where
    I: IntoIterator<Item = T>,
    T: PartialOrd,
{
    type Output = Option<T>;

    fn apply(self, input: I) -> Self::Output {
        input.into_iter().reduce(larger).or(self.fallback)
    }
}

fn larger<T: PartialOrd>(current: T, item: T) -> T {
    match current.partial_cmp(&item) {
        Some(Ordering::Less) => item,
        Some(_) => current,
        None if is_unordered(&current) => current,
        None => item,
    }
}

#[inline]
fn is_unordered<T: PartialOrd>(value: &T) -> bool {
    value.partial_cmp(value).is_none()
}

// =============================================================================
// to_array / to_readonly_array
// =============================================================================

/// Consumer created by [`to_array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToArray;

/// Returns a consumer collecting the sequence into a `Vec`, in encounter order.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, range, to_array};
///
/// assert_eq!(to_array().apply(range(3, Some(0), -1)?), vec![3, 2, 1]);
/// # Ok::<(), chain_iterate::sequence::SequenceError>(())
/// ```
#[inline]
pub const fn to_array() -> ToArray {
    ToArray
}

impl<I> Stage<I> for ToArray
where
    I: IntoIterator,
{
    type Output = Vec<I::Item>;

    fn apply(self, input: I) -> Self::Output {
        let elements: Vec<I::Item> = input.into_iter().collect();
        tracing::trace!(length = elements.len(), "to_array drained sequence");
        elements
    }
}

/// Consumer created by [`to_readonly_array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToReadonlyArray;

/// Returns a consumer collecting the sequence into a fixed-length boxed slice.
///
/// Behaves like [`to_array`]; the result cannot grow or shrink.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, to_readonly_array};
///
/// let frozen: Box<[char]> = to_readonly_array().apply("abc".chars());
/// assert_eq!(&*frozen, &['a', 'b', 'c']);
/// ```
#[inline]
pub const fn to_readonly_array() -> ToReadonlyArray {
    ToReadonlyArray
}

impl<I> Stage<I> for ToReadonlyArray
where
    I: IntoIterator,
{
    type Output = Box<[I::Item]>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        ToArray.apply(input).into_boxed_slice()
    }
}

// =============================================================================
// consume_all
// =============================================================================

/// Consumer created by [`consume_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsumeAll;

/// Returns a consumer that pulls every element and discards it.
///
/// Used to force the callbacks of a [`for_each`](super::for_each) chain
/// when no result is needed.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, consume_all, for_each};
///
/// let mut total = 0;
/// vec![1, 2, 3]
///     .pipe(for_each(|item: &i32, _| total += item))
///     .pipe(consume_all());
/// assert_eq!(total, 6);
/// ```
#[inline]
pub const fn consume_all() -> ConsumeAll {
    ConsumeAll
}

impl<I> Stage<I> for ConsumeAll
where
    I: IntoIterator,
{
    type Output = ();

    fn apply(self, input: I) -> Self::Output {
        let mut consumed = 0_usize;
        for _ in input {
            consumed += 1;
        }
        tracing::trace!(consumed, "consume_all drained sequence");
    }
}
