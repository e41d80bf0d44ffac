//! Transformer stages: [`map`], [`flat_map`], [`filter`] and [`for_each`].
//!
//! Each transformer wraps its input in a lazy iterator that does the work
//! for one element per `next()` call. Callbacks receive the element together
//! with its zero-based position in the *input* sequence. The counter belongs
//! to the iterator created by [`Stage::apply`], so every traversal starts
//! again from zero.
//!
//! A transformer whose callback is `Clone` is itself `Clone` and can be
//! applied to any number of sequences.

use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use std::marker::PhantomData;

use super::stage::Stage;

// =============================================================================
// map
// =============================================================================

/// Transformer created by [`map`].
pub struct Map<T, F> {
    function: F,
    marker: PhantomData<fn(T)>,
}

/// Returns a transformer yielding `func(item, index)` for every input item.
///
/// The output has exactly as many elements as the input, in the same order.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, map, to_array};
///
/// let labelled = vec!["a", "b"]
///     .pipe(map(|item: &str, index| format!("{index}:{item}")))
///     .pipe(to_array());
///
/// assert_eq!(labelled, vec!["0:a", "1:b"]);
/// ```
#[inline]
pub const fn map<T, U, F>(func: F) -> Map<T, F>
where
    F: FnMut(T, usize) -> U,
{
    Map {
        function: func,
        marker: PhantomData,
    }
}

impl<I, T, U, F> Stage<I> for Map<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize) -> U,
{
    type Output = Mapped<I::IntoIter, F>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        Mapped {
            items: input.into_iter().enumerate(),
            function: self.function,
        }
    }
}

/// Lazy iterator returned by applying [`map`].
pub struct Mapped<I, F> {
    items: Enumerate<I>,
    function: F,
}

impl<I, U, F> Iterator for Mapped<I, F>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> U,
{
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        Some((self.function)(item, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<I, U, F> ExactSizeIterator for Mapped<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(I::Item, usize) -> U,
{
}

impl<I, U, F> FusedIterator for Mapped<I, F>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> U,
{
}

// =============================================================================
// flat_map
// =============================================================================

/// Transformer created by [`flat_map`].
pub struct FlatMap<T, F> {
    function: F,
    marker: PhantomData<fn(T)>,
}

/// Returns a transformer yielding every element of `func(item, index)` for
/// every input item, sub-sequence after sub-sequence.
///
/// The index counts outer items, not inner elements.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, flat_map, to_array};
///
/// let repeated = vec!['a', 'b', 'c']
///     .pipe(flat_map(|item: char, index| std::iter::repeat_n(item, index)))
///     .pipe(to_array());
///
/// assert_eq!(repeated, vec!['b', 'c', 'c']);
/// ```
#[inline]
pub const fn flat_map<T, J, F>(func: F) -> FlatMap<T, F>
where
    F: FnMut(T, usize) -> J,
    J: IntoIterator,
{
    FlatMap {
        function: func,
        marker: PhantomData,
    }
}

impl<I, T, J, F> Stage<I> for FlatMap<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, usize) -> J,
    J: IntoIterator,
{
    type Output = FlatMapped<I::IntoIter, F, J>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        FlatMapped {
            items: input.into_iter().enumerate(),
            function: self.function,
            current: None,
        }
    }
}

/// Lazy iterator returned by applying [`flat_map`].
pub struct FlatMapped<I, F, J: IntoIterator> {
    items: Enumerate<I>,
    function: F,
    current: Option<J::IntoIter>,
}

impl<I, F, J> Iterator for FlatMapped<I, F, J>
where
    I: Iterator,
    F: FnMut(I::Item, usize) -> J,
    J: IntoIterator,
{
    type Item = J::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inner) = self.current.as_mut() {
                if let Some(element) = inner.next() {
                    return Some(element);
                }
                self.current = None;
            }
            let (index, item) = self.items.next()?;
            self.current = Some((self.function)(item, index).into_iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self
            .current
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint);
        match self.items.size_hint() {
            (_, Some(0)) => (lower, upper),
            _ => (lower, None),
        }
    }
}

impl<I, F, J> FusedIterator for FlatMapped<I, F, J>
where
    I: FusedIterator,
    F: FnMut(I::Item, usize) -> J,
    J: IntoIterator,
{
}

// =============================================================================
// filter
// =============================================================================

/// Transformer created by [`filter`].
pub struct Filter<T, F> {
    function: F,
    marker: PhantomData<fn(&T)>,
}

/// Returns a transformer yielding only the items for which
/// `func(&item, index)` returns `true`.
///
/// Relative order is preserved. The predicate runs exactly once per input
/// item and the index advances for rejected items too.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, filter, to_array};
///
/// let even_positions = vec![10, 11, 12, 13]
///     .pipe(filter(|_: &i32, index| index % 2 == 0))
///     .pipe(to_array());
///
/// assert_eq!(even_positions, vec![10, 12]);
/// ```
#[inline]
pub const fn filter<T, F>(func: F) -> Filter<T, F>
where
    F: FnMut(&T, usize) -> bool,
{
    Filter {
        function: func,
        marker: PhantomData,
    }
}

impl<I, T, F> Stage<I> for Filter<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize) -> bool,
{
    type Output = Filtered<I::IntoIter, F>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        Filtered {
            items: input.into_iter().enumerate(),
            function: self.function,
        }
    }
}

/// Lazy iterator returned by applying [`filter`].
pub struct Filtered<I, F> {
    items: Enumerate<I>,
    function: F,
}

impl<I, F> Iterator for Filtered<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize) -> bool,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let function = &mut self.function;
        self.items
            .by_ref()
            .find_map(|(index, item)| function(&item, index).then_some(item))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.items.size_hint().1)
    }
}

impl<I, F> FusedIterator for Filtered<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize) -> bool,
{
}

// =============================================================================
// for_each
// =============================================================================

/// Transformer created by [`for_each`].
pub struct ForEach<T, F> {
    function: F,
    marker: PhantomData<fn(&T)>,
}

/// Returns a transformer that calls `func(&item, index)` and then re-yields
/// `item` unchanged.
///
/// The callback for an element runs when that element is pulled, before it
/// reaches the next stage. Nothing happens until something pulls, see
/// [`consume_all`](super::consume_all).
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{Pipe, for_each, to_array};
///
/// let mut seen = Vec::new();
/// let items = vec![3, 1, 2]
///     .pipe(for_each(|item: &i32, index| seen.push((index, *item))))
///     .pipe(to_array());
///
/// assert_eq!(items, vec![3, 1, 2]);
/// assert_eq!(seen, vec![(0, 3), (1, 1), (2, 2)]);
/// ```
#[inline]
pub const fn for_each<T, F>(func: F) -> ForEach<T, F>
where
    F: FnMut(&T, usize),
{
    ForEach {
        function: func,
        marker: PhantomData,
    }
}

impl<I, T, F> Stage<I> for ForEach<T, F>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, usize),
{
    type Output = Inspected<I::IntoIter, F>;

    #[inline]
    fn apply(self, input: I) -> Self::Output {
        Inspected {
            items: input.into_iter().enumerate(),
            function: self.function,
        }
    }
}

/// Lazy iterator returned by applying [`for_each`].
pub struct Inspected<I, F> {
    items: Enumerate<I>,
    function: F,
}

impl<I, F> Iterator for Inspected<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, usize),
{
    type Item = I::Item;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let (index, item) = self.items.next()?;
        (self.function)(&item, index);
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<I, F> ExactSizeIterator for Inspected<I, F>
where
    I: ExactSizeIterator,
    F: FnMut(&I::Item, usize),
{
}

impl<I, F> FusedIterator for Inspected<I, F>
where
    I: FusedIterator,
    F: FnMut(&I::Item, usize),
{
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

macro_rules! impl_transformer_traits {
    ($($transformer:ident),* $(,)?) => {
        $(
            impl<T, F: Clone> Clone for $transformer<T, F> {
                #[inline]
                fn clone(&self) -> Self {
                    Self {
                        function: self.function.clone(),
                        marker: PhantomData,
                    }
                }
            }

            impl<T, F> fmt::Debug for $transformer<T, F> {
                fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                    formatter
                        .debug_struct(stringify!($transformer))
                        .finish_non_exhaustive()
                }
            }
        )*
    };
}

impl_transformer_traits!(Map, FlatMap, Filter, ForEach);

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_map_index_restarts_per_application() {
        let stage = map(|x: i32, index| (x, index));
        let first: Vec<_> = stage.clone().apply(vec![7, 8]).collect();
        let second: Vec<_> = stage.apply(vec![9]).collect();
        assert_eq!(first, vec![(7, 0), (8, 1)]);
        assert_eq!(second, vec![(9, 0)]);
    }

    #[test]
    fn test_map_is_lazy() {
        let calls = RefCell::new(0);
        let mut mapped = map(|x: i32, _| {
            *calls.borrow_mut() += 1;
            x
        })
        .apply(vec![1, 2, 3]);
        assert_eq!(*calls.borrow(), 0);
        assert_eq!(mapped.next(), Some(1));
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_mapped_exact_size() {
        let mapped = map(|x: i32, _| x).apply(vec![1, 2, 3]);
        assert_eq!(mapped.len(), 3);
    }

    #[test]
    fn test_flat_map_skips_empty_sub_sequences() {
        let result: Vec<i32> = flat_map(|x: i32, _| if x % 2 == 0 { vec![x, x] } else { vec![] })
            .apply(1..=4)
            .collect();
        assert_eq!(result, vec![2, 2, 4, 4]);
    }

    #[test]
    fn test_flat_map_index_counts_outer_items() {
        let result: Vec<usize> = flat_map(|n: usize, index| std::iter::repeat_n(index, n))
            .apply(vec![2, 0, 3])
            .collect();
        assert_eq!(result, vec![0, 0, 2, 2, 2]);
    }

    #[test]
    fn test_filter_index_counts_rejected_items() {
        let indices = RefCell::new(Vec::new());
        let result: Vec<char> = filter(|item: &char, index| {
            indices.borrow_mut().push(index);
            item.is_uppercase()
        })
        .apply("aBcD".chars())
        .collect();
        assert_eq!(result, vec!['B', 'D']);
        assert_eq!(*indices.borrow(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_for_each_runs_before_yield() {
        let log = RefCell::new(Vec::new());
        let mut inspected =
            for_each(|item: &i32, _| log.borrow_mut().push(*item)).apply(vec![5, 6]);
        assert!(log.borrow().is_empty());
        assert_eq!(inspected.next(), Some(5));
        assert_eq!(*log.borrow(), vec![5]);
    }

    #[test]
    fn test_transformer_debug() {
        let stage = filter(|_: &i32, _| true);
        assert_eq!(format!("{stage:?}"), "Filter { .. }");
    }
}
