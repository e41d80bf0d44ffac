//! The `range` producer.
//!
//! A [`Range`] is an arithmetic progression of integers, finite when an
//! exclusive end bound is given and infinite otherwise. The bound is
//! direction-aware: a positive step stops before reaching `end` from below,
//! a negative step stops before reaching it from above.
//!
//! # Examples
//!
//! ```rust
//! use chain_iterate::sequence::range;
//!
//! let ascending: Vec<i32> = range(0, Some(10), 3)?.collect();
//! assert_eq!(ascending, vec![0, 3, 6, 9]);
//!
//! let descending: Vec<i32> = range(5, Some(0), -2)?.collect();
//! assert_eq!(descending, vec![5, 3, 1]);
//!
//! let unbounded: Vec<i32> = range(1, None, 1)?.take(3).collect();
//! assert_eq!(unbounded, vec![1, 2, 3]);
//! # Ok::<(), chain_iterate::sequence::SequenceError>(())
//! ```

use std::fmt;
use std::iter::FusedIterator;

use super::error::SequenceError;

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`Range`] can step over.
///
/// Implemented for every primitive integer type. This trait is sealed.
pub trait RangeInteger: sealed::Sealed + Copy + PartialOrd + fmt::Debug {
    /// The additive identity.
    const ZERO: Self;
    /// The default step.
    const ONE: Self;

    /// Adds `step`, returning `None` on overflow.
    fn checked_step(self, step: Self) -> Option<Self>;
}

macro_rules! impl_range_integer {
    ($($integer:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $integer {}

            impl RangeInteger for $integer {
                const ZERO: Self = 0;
                const ONE: Self = 1;

                #[inline]
                fn checked_step(self, step: Self) -> Option<Self> {
                    self.checked_add(step)
                }
            }
        )*
    };
}

impl_range_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// The arguments a [`Range`] was created from.
///
/// Keeping the parameters separate from the traversal cursor is what makes
/// a range restartable: [`Range::restart`] rebuilds a fresh traversal from
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "T: serde::Serialize",
        deserialize = "T: RangeInteger + serde::Deserialize<'de>"
    ))
)]
pub struct RangeParameters<T> {
    /// The first element.
    pub start: T,
    /// The exclusive bound, or `None` for an infinite sequence.
    #[cfg_attr(feature = "serde", serde(default))]
    pub end: Option<T>,
    /// The distance between consecutive elements. Never zero in a [`Range`].
    #[cfg_attr(feature = "serde", serde(default = "default_step"))]
    pub step: T,
}

#[cfg(feature = "serde")]
const fn default_step<T: RangeInteger>() -> T {
    T::ONE
}

impl<T: RangeInteger> RangeParameters<T> {
    /// Returns `true` if `value` lies before the end bound in the direction of the step.
    #[inline]
    fn admits(&self, value: T) -> bool {
        match self.end {
            None => true,
            Some(end) if self.step > T::ZERO => value < end,
            Some(end) => value > end,
        }
    }
}

/// A lazy arithmetic progression produced by [`range`].
///
/// A `Range` value is single-pass: once drained it stays exhausted.
/// Use [`Range::restart`] to traverse the same progression again.
///
/// When the next element would overflow `T` the sequence ends instead of
/// wrapping around.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    parameters: RangeParameters<T>,
    cursor: Option<T>,
}

impl<T: RangeInteger> Range<T> {
    /// Creates a range from validated parameters.
    ///
    /// # Errors
    ///
    /// Returns [`SequenceError::InvalidArgument`] if `parameters.step` is zero.
    pub fn new(parameters: RangeParameters<T>) -> Result<Self, SequenceError> {
        if parameters.step == T::ZERO {
            tracing::debug!(
                start = ?parameters.start,
                end = ?parameters.end,
                "range rejected a zero step"
            );
            return Err(SequenceError::zero_step());
        }
        tracing::trace!(
            start = ?parameters.start,
            end = ?parameters.end,
            step = ?parameters.step,
            "range created"
        );
        Ok(Self {
            cursor: Some(parameters.start),
            parameters,
        })
    }

    /// Returns the parameters this range was created from.
    #[inline]
    pub const fn parameters(&self) -> &RangeParameters<T> {
        &self.parameters
    }

    /// Returns a fresh traversal of the same progression.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chain_iterate::sequence::range;
    ///
    /// let mut first = range(0, Some(3), 1)?;
    /// assert_eq!(first.by_ref().count(), 3);
    /// assert_eq!(first.next(), None);
    ///
    /// let again: Vec<i32> = first.restart().collect();
    /// assert_eq!(again, vec![0, 1, 2]);
    /// # Ok::<(), chain_iterate::sequence::SequenceError>(())
    /// ```
    #[must_use]
    pub const fn restart(&self) -> Self {
        Self {
            parameters: self.parameters,
            cursor: Some(self.parameters.start),
        }
    }
}

impl<T: RangeInteger> Iterator for Range<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor {
            Some(current) if self.parameters.admits(current) => {
                self.cursor = current.checked_step(self.parameters.step);
                Some(current)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            None => (0, Some(0)),
            Some(_) => (0, None),
        }
    }
}

impl<T: RangeInteger> FusedIterator for Range<T> {}

impl<T: RangeInteger> TryFrom<RangeParameters<T>> for Range<T> {
    type Error = SequenceError;

    fn try_from(parameters: RangeParameters<T>) -> Result<Self, Self::Error> {
        Self::new(parameters)
    }
}

static_assertions::assert_impl_all!(Range<i64>: Send, Sync, Clone, FusedIterator);

/// Creates a lazy integer sequence from `start`, stepping by `step`, stopping
/// strictly before `end`.
///
/// With `end == None` the sequence is infinite (until `T` would overflow).
///
/// # Errors
///
/// Returns [`SequenceError::InvalidArgument`] if `step` is zero. The check
/// happens here, before any element is produced.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{SequenceError, range};
///
/// let elements: Vec<u8> = range(250, None, 2)?.collect();
/// assert_eq!(elements, vec![250, 252, 254]);
///
/// assert!(matches!(range(0, Some(3), 0), Err(SequenceError::InvalidArgument { .. })));
/// # Ok::<(), SequenceError>(())
/// ```
pub fn range<T: RangeInteger>(
    start: T,
    end: Option<T>,
    step: T,
) -> Result<Range<T>, SequenceError> {
    Range::new(RangeParameters { start, end, step })
}

/// Creates an infinite ascending sequence from `start` with step one.
///
/// Equivalent to `range(start, None, 1)`, which cannot fail.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::range_from;
///
/// let naturals: Vec<u64> = range_from(1).take(4).collect();
/// assert_eq!(naturals, vec![1, 2, 3, 4]);
/// ```
pub fn range_from<T: RangeInteger>(start: T) -> Range<T> {
    Range {
        parameters: RangeParameters {
            start,
            end: None,
            step: T::ONE,
        },
        cursor: Some(start),
    }
}

#[cfg(feature = "serde")]
impl<T> serde::Serialize for Range<T>
where
    T: RangeInteger + serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.parameters, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for Range<T>
where
    T: RangeInteger + serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let parameters = <RangeParameters<T> as serde::Deserialize>::deserialize(deserializer)?;
        Self::new(parameters).map_err(serde::de::Error::custom)
    }
}
