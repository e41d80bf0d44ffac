//! Lazy sequence producers, transformers and consumers.
//!
//! A *sequence* is anything implementing [`IntoIterator`]. Evaluation is
//! pull-based: nothing runs until a consumer (or any other code) asks the
//! resulting iterator for its next element, and each pull does exactly the
//! work needed for one element.
//!
//! - **Producers** build a fresh sequence: [`range`], [`range_from`]
//! - **Transformers** turn one sequence into another: [`map`], [`flat_map`],
//!   [`filter`], [`for_each`]
//! - **Consumers** drain a sequence into a value: [`reduce`], [`max`],
//!   [`to_array`], [`to_readonly_array`], [`consume_all`]
//!
//! Transformers and consumers are [`Stage`]s. Chain them with [`Pipe::pipe`],
//! the `then` method every stage has, or the `pipe!` / `compose!` macros.
//!
//! # Errors
//!
//! Only [`range`] validates its arguments, see [`SequenceError`]. A panic in
//! a callback unwinds straight to whoever is pulling. Fallible callbacks and
//! fallible sources are handled by the `try_*` combinators, which return the
//! first `Err` untouched.
//!
//! # Examples
//!
//! ```rust
//! use chain_iterate::sequence::{Pipe, filter, map, range, to_array};
//!
//! let result = range(0, Some(5), 1)?
//!     .pipe(map(|x: i32, _| x * 2))
//!     .pipe(filter(|x: &i32, _| x % 2 == 0))
//!     .pipe(to_array());
//!
//! assert_eq!(result, vec![0, 2, 4, 6, 8]);
//! # Ok::<(), chain_iterate::sequence::SequenceError>(())
//! ```

mod consume;
mod error;
#[cfg(feature = "fallible")]
mod fallible;
mod range;
mod stage;
mod transform;

pub use consume::{
    ConsumeAll, Max, Reduce, ToArray, ToReadonlyArray, consume_all, max, reduce, to_array,
    to_readonly_array,
};
pub use error::SequenceError;
#[cfg(feature = "fallible")]
pub use fallible::{
    TryConsumeAll, TryMap, TryMapped, TryReduce, TryToArray, try_consume_all, try_map,
    try_reduce, try_to_array,
};
pub use range::{Range, RangeInteger, RangeParameters, range, range_from};
pub use stage::{Composed, Pipe, Stage};
pub use transform::{
    Filter, Filtered, FlatMap, FlatMapped, ForEach, Inspected, Map, Mapped, filter, flat_map,
    for_each, map,
};
