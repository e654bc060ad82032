//! Heap error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during heap construction and insertion.
///
/// "Not found" is not an error: [`Heap::remove`](crate::Heap::remove),
/// [`Heap::contains`](crate::Heap::contains) and
/// [`Heap::index_of`](crate::Heap::index_of) report absence through their
/// return values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeapError {
    /// A caller-supplied argument was rejected (absent element, negative
    /// initial capacity, zero capacity ceiling).
    InvalidArgument {
        /// Human-readable description of the rejected argument.
        reason: String,
    },
    /// The requested capacity cannot be provided.
    ///
    /// Raised when the request exceeds the capacity ceiling, when the growth
    /// arithmetic overflows (`requested == usize::MAX`), or when the
    /// allocator refuses the reservation.
    AllocationFailure {
        /// Number of slots requested.
        requested: usize,
        /// Largest number of slots the heap may hold.
        limit: usize,
    },
}

impl HeapError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(limit: usize) -> Self {
        Self::AllocationFailure {
            requested: usize::MAX,
            limit,
        }
    }
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::AllocationFailure { requested, limit } if *requested == usize::MAX => {
                write!(f, "heap capacity overflow (limit {limit} slots)")
            }
            Self::AllocationFailure { requested, limit } => {
                write!(
                    f,
                    "heap allocation failed: requested {requested} slots, limit {limit} slots"
                )
            }
        }
    }
}

impl Error for HeapError {}
