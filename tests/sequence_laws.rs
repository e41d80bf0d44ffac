//! Property-based tests for the sequence combinators.
//!
//! This module verifies the shape-preservation laws of every combinator:
//!
//! - **Range Law**: `range(start, end, step)` is the arithmetic progression stopping before `end`
//! - **Map Law**: element `i` of `map(f)(s)` is `f(s[i], i)` and the length is unchanged
//! - **Filter Law**: `filter(p)(s)` is the order-preserving subsequence where `p(s[i], i)` holds
//! - **Flat Map Law**: `flat_map(g)(s)` is the concatenation of `g(s[i], i)`
//! - **For Each Law**: `for_each(f)(s)` is `s`, with `f` called once per element in order
//! - **Max Law**: `max` agrees with the standard library maximum
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use chain_iterate::sequence::{
    Pipe, Stage, filter, flat_map, for_each, map, max, range, reduce, to_array,
};
use proptest::prelude::*;
use std::cell::RefCell;

fn arithmetic_progression(start: i32, end: i32, step: i32) -> Vec<i32> {
    let mut expected = Vec::new();
    let mut current = start;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        expected.push(current);
        current += step;
    }
    expected
}

// =============================================================================
// Producer Laws
// =============================================================================

proptest! {
    /// Range Law: a bounded range equals the explicit progression
    #[test]
    fn prop_range_is_arithmetic_progression(
        start in -1000i32..1000,
        end in -1000i32..1000,
        step in prop_oneof![-50i32..0, 1i32..50],
    ) {
        let elements = range(start, Some(end), step).unwrap().pipe(to_array());
        prop_assert_eq!(elements, arithmetic_progression(start, end, step));
    }

    /// Zero step is rejected whatever the other arguments are
    #[test]
    fn prop_range_zero_step_is_rejected(start in any::<i64>(), end in any::<Option<i64>>()) {
        prop_assert!(range(start, end, 0).is_err());
    }

    /// A restarted range yields the same elements as the original traversal
    #[test]
    fn prop_range_restart_is_identical(
        start in -100i32..100,
        end in -100i32..100,
        step in 1i32..10,
    ) {
        let mut sequence = range(start, Some(end), step).unwrap();
        let first: Vec<i32> = sequence.by_ref().collect();
        let second: Vec<i32> = sequence.restart().collect();
        prop_assert_eq!(first, second);
    }
}

// =============================================================================
// Transformer Laws
// =============================================================================

proptest! {
    /// Map Law: length and per-element values are preserved
    #[test]
    fn prop_map_applies_function_with_index(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let function = |x: i32, index: usize| i64::from(x) * 3 + index as i64;
        let mapped = items.clone().pipe(map(function)).pipe(to_array());

        prop_assert_eq!(mapped.len(), items.len());
        for (index, (value, item)) in mapped.iter().zip(items.iter()).enumerate() {
            prop_assert_eq!(*value, function(*item, index));
        }
    }

    /// Map Composition Law: mapping twice equals mapping the composed function
    #[test]
    fn prop_map_composition(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let function1 = |x: i32, _| x.wrapping_add(1);
        let function2 = |x: i32, _| x.wrapping_mul(2);

        let left = items.clone().pipe(map(function1)).pipe(map(function2)).pipe(to_array());
        let right = items
            .pipe(map(move |x: i32, index| function2(function1(x, index), index)))
            .pipe(to_array());

        prop_assert_eq!(left, right);
    }

    /// Filter Law: order-preserving subsequence, predicate called once per input with its position
    #[test]
    fn prop_filter_is_ordered_subsequence(items in prop::collection::vec(any::<i16>(), 0..64)) {
        let indices = RefCell::new(Vec::new());
        let kept = items
            .clone()
            .pipe(filter(|x: &i16, index| {
                indices.borrow_mut().push(index);
                x % 2 == 0
            }))
            .pipe(to_array());

        let expected: Vec<i16> = items.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(kept, expected);
        prop_assert_eq!(indices.into_inner(), (0..items.len()).collect::<Vec<_>>());
    }

    /// Flat Map Law: output is the in-order concatenation of the sub-sequences
    #[test]
    fn prop_flat_map_concatenates(items in prop::collection::vec(0u8..5, 0..32)) {
        let expand = |n: u8, index: usize| vec![index; usize::from(n)];
        let flattened = items.clone().pipe(flat_map(expand)).pipe(to_array());

        let expected: Vec<usize> = items
            .iter()
            .enumerate()
            .flat_map(|(index, n)| expand(*n, index))
            .collect();
        let total: usize = items.iter().map(|n| usize::from(*n)).sum();

        prop_assert_eq!(flattened.len(), total);
        prop_assert_eq!(flattened, expected);
    }

    /// For Each Law: the sequence is unchanged and the callback sees every element in order
    #[test]
    fn prop_for_each_is_identity(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let observed = RefCell::new(Vec::new());
        let passed = items
            .clone()
            .pipe(for_each(|item: &i32, index| observed.borrow_mut().push((index, *item))))
            .pipe(to_array());

        let expected: Vec<(usize, i32)> = items.iter().copied().enumerate().collect();
        prop_assert_eq!(passed, items);
        prop_assert_eq!(observed.into_inner(), expected);
    }
}

// =============================================================================
// Consumer Laws
// =============================================================================

proptest! {
    /// Max Law: agrees with Iterator::max, falling back on empty input
    #[test]
    fn prop_max_matches_std(
        items in prop::collection::vec(any::<i64>(), 0..64),
        fallback in any::<Option<i64>>(),
    ) {
        let expected = items.iter().copied().max().or(fallback);
        prop_assert_eq!(max(fallback).apply(items), expected);
    }

    /// Reduce Law: a sum reducer agrees with Iterator::sum
    #[test]
    fn prop_reduce_sum(items in prop::collection::vec(-1000i64..1000, 0..64)) {
        let expected: i64 = items.iter().sum();
        prop_assert_eq!(items.pipe(reduce(0, |a, b: i64| a + b)), expected);
    }
}
