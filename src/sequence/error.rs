//! Error types for sequence construction.
//!
//! Only producers validate their arguments. Errors raised while a sequence
//! is being traversed are never wrapped: panics unwind to the puller and
//! `Result` items are handed back verbatim by the fallible combinators.

use std::fmt;

/// Represents errors raised when a sequence cannot be constructed.
///
/// # Examples
///
/// ```rust
/// use chain_iterate::sequence::{SequenceError, range};
///
/// let error = range(0, Some(10), 0).unwrap_err();
/// assert!(matches!(error, SequenceError::InvalidArgument { .. }));
/// assert_eq!(format!("{error}"), "range: step cannot be 0");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// An argument made the requested sequence ambiguous or non-terminating.
    ///
    /// Raised synchronously, before any element is produced.
    InvalidArgument {
        /// The name of the function that rejected the argument.
        function: &'static str,
        /// The name of the rejected argument.
        argument: &'static str,
        /// Why the argument was rejected.
        reason: &'static str,
    },
}

impl SequenceError {
    pub(crate) const fn zero_step() -> Self {
        Self::InvalidArgument {
            function: "range",
            argument: "step",
            reason: "cannot be 0",
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument {
                function,
                argument,
                reason,
            } => write!(formatter, "{function}: {argument} {reason}"),
        }
    }
}

impl std::error::Error for SequenceError {}
