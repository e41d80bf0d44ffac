//! Combinators over sequences of `Result` items.
//!
//! A callback that can fail returns `Result`, and a sequence whose source can
//! fail yields `Result` items. These stages stop at the first `Err` and hand
//! it back exactly as it was produced: no retries, no wrapping.
//!
//! # Examples
//!
//! ```rust
//! use chain_iterate::sequence::{Pipe, try_map, try_to_array};
//!
//! let parsed = vec!["1", "2", "x", "4"]
//!     .pipe(try_map(|text: &str, _| text.parse::<i32>()))
//!     .pipe(try_to_array());
//!
//! assert!(parsed.is_err());
//! ```

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::marker::PhantomData;

use super::stage::Stage;

// =============================================================================
// try_map
// =============================================================================

/// Transformer created by [`try_map`].
pub struct TryMap<T, F> {
    function: F,
    marker: PhantomData<fn(T)>,
}

/// Returns a transformer yielding `func(item, index)` for every input item
/// until the first `Err`.
///
/// The `Err` itself is yielded; after it the iterator is exhausted, and the
/// rest of the input is never pulled.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, try_map};
///
/// let mut halves = try_map(|x: i32, index| {
///     if x % 2 == 0 { Ok(x / 2) } else { Err(format!("odd value at {index}")) }
/// })
/// .apply(vec![4, 3, 2]);
///
/// assert_eq!(halves.next(), Some(Ok(2)));
/// assert_eq!(halves.next(), Some(Err("odd value at 1".to_string())));
/// assert_eq!(halves.next(), None);
/// ```
#[inline]
pub const fn try_map<T, U, E, F>(func: F) -> TryMap<T, F>
where
    F: FnMut(T, usize) -> Result<U, E>,
{
    TryMap {
        function: func,
        marker: PhantomData,
    }
}

impl<I, T, U, E, F> Stage<I> for TryMap<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize) -> Result<U, E>,
{
    type Output = TryMapped<I::IntoIter, F>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        TryMapped {
            items: input.into_iter().enumerate(),
            function: self.function,
            failed: false,
        }
    }
}

impl<T, F: Clone> Clone for TryMap<T, F> {
    fn clone(&self) -> Self {
        Self {
            function: self.function.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for TryMap<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("TryMap").finish_non_exhaustive()
    }
}

/// Lazy iterator returned by applying [`try_map`].
pub struct TryMapped<I, F> {
    items: Enumerate<I>,
    function: F,
    failed: bool,
}

impl<I, U, E, F> Iterator for TryMapped<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> Result<U, E>,
{
    type Item = Result<U, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (index, item) = self.items.next()?;
        let result = (self.function)(item, index);
        self.failed = result.is_err();
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.items.size_hint().1)
        }
    }
}

impl<I, U, E, F> FusedIterator for TryMapped<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> Result<U, E>,
{
}

// =============================================================================
// try_reduce
// =============================================================================

/// Consumer created by [`try_reduce`].
pub struct TryReduce<T, U, F> {
    initial: U,
    reducer: F,
    marker: PhantomData<fn(T)>,
}

/// Returns a consumer folding a sequence of `Result` items with a fallible
/// reducer.
///
/// Stops at the first `Err`, whether it came from the sequence or from
/// `reducer`, and returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, try_reduce};
///
/// let checked_sum = try_reduce(0_u8, |accumulator: u8, item: u8| {
///     accumulator.checked_add(item).ok_or("overflow")
/// });
///
/// assert_eq!(checked_sum.clone().apply(vec![Ok(1), Ok(2)]), Ok(3));
/// assert_eq!(checked_sum.clone().apply(vec![Ok(200), Ok(100)]), Err("overflow"));
/// assert_eq!(checked_sum.apply(vec![Ok(1), Err("upstream")]), Err("upstream"));
/// ```
#[inline]
pub const fn try_reduce<T, U, E, F>(initial: U, reducer: F) -> TryReduce<T, U, F>
where
    F: FnMut(U, T) -> Result<U, E>,
{
    TryReduce {
        initial,
        reducer,
        marker: PhantomData,
    }
}

impl<I, T, U, E, F> Stage<I> for TryReduce<T, U, F>
where
    I: IntoIterator<Item = Result<T, E>>,
    F: FnMut(U, T) -> Result<U, E>,
{
    type Output = Result<U, E>;

    fn apply(self, input: I) -> Self::Output {
        let mut reducer = self.reducer;
        let mut accumulator = self.initial;
        for item in input {
            accumulator = reducer(accumulator, item?)?;
        }
        Ok(accumulator)
    }
}

impl<T, U: Clone, F: Clone> Clone for TryReduce<T, U, F> {
    fn clone(&self) -> Self {
        Self {
            initial: self.initial.clone(),
            reducer: self.reducer.clone(),
            marker: PhantomData,
        }
    }
}

impl<T, U: fmt::Debug, F> fmt::Debug for TryReduce<T, U, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryReduce")
            .field("initial", &self.initial)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// try_to_array / try_consume_all
// =============================================================================

/// Consumer created by [`try_to_array`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TryToArray;

/// Returns a consumer collecting `Ok` items into a `Vec`, or returning the
/// first `Err`.
///
/// Nothing after the first `Err` is pulled.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, try_to_array};
///
/// let all_ok: Vec<Result<i32, &str>> = vec![Ok(1), Ok(2)];
/// assert_eq!(try_to_array().apply(all_ok), Ok(vec![1, 2]));
///
/// let with_error: Vec<Result<i32, &str>> = vec![Ok(1), Err("bad"), Err("worse")];
/// assert_eq!(try_to_array().apply(with_error), Err("bad"));
/// ```
#[inline]
pub const fn try_to_array() -> TryToArray {
    TryToArray
}

impl<I, T, E> Stage<I> for TryToArray
where
    I: IntoIterator<Item = Result<T, E>>,
{
    type Output = Result<Vec<T>, E>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        input.into_iter().collect()
    }
}

/// Consumer created by [`try_consume_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TryConsumeAll;

/// Returns a consumer that pulls and discards `Ok` items, returning the
/// first `Err`.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Stage, try_consume_all};
///
/// let results: Vec<Result<(), &str>> = vec![Ok(()), Err("stop"), Ok(())];
/// assert_eq!(try_consume_all().apply(results), Err("stop"));
/// ```
#[inline]
pub const fn try_consume_all() -> TryConsumeAll {
    TryConsumeAll
}

impl<I, T, E> Stage<I> for TryConsumeAll
where
    I: IntoIterator<Item = Result<T, E>>,
{
    type Output = Result<(), E>;

    fn apply(self, input: I) -> Self::Output {
        for item in input {
            if let Err(error) = item {
                tracing::trace!("try_consume_all stopped at the first error");
                return Err(error);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_try_map_stops_pulling_after_error() {
        let pulled = Cell::new(0);
        let source = (0..10).inspect(|_| pulled.set(pulled.get() + 1));
        let results: Vec<Result<i32, i32>> =
            try_map(|x: i32, _| if x < 2 { Ok(x) } else { Err(x) })
                .apply(source)
                .collect();
        assert_eq!(results, vec![Ok(0), Ok(1), Err(2)]);
        assert_eq!(pulled.get(), 3);
    }

    #[test]
    fn test_try_mapped_size_hint_after_failure() {
        let mut mapped = try_map(|_: i32, _| Err::<i32, ()>(())).apply(vec![1, 2]);
        assert_eq!(mapped.size_hint(), (0, Some(2)));
        assert_eq!(mapped.next(), Some(Err(())));
        assert_eq!(mapped.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_try_reduce_empty_returns_initial() {
        let empty: Vec<Result<i32, ()>> = Vec::new();
        let sum = try_reduce(5, |accumulator: i32, item: i32| Ok::<_, ()>(accumulator + item));
        assert_eq!(sum.apply(empty), Ok(5));
    }

    #[test]
    fn test_try_consume_all_ok() {
        let results: Vec<Result<i32, ()>> = vec![Ok(1), Ok(2)];
        assert_eq!(try_consume_all().apply(results), Ok(()));
    }
}
