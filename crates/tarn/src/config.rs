//! Heap construction parameters.

use crate::error::HeapError;
use crate::order::Orientation;

/// Configuration for a [`Heap`](crate::Heap).
///
/// Controls orientation, the initial buffer size and the capacity ceiling.
/// Validated at construction; all values are immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeapConfig {
    /// Min-heap or max-heap. Default: [`Orientation::Min`].
    pub orientation: Orientation,

    /// Number of slots allocated up front.
    ///
    /// Default: 10. Zero defers allocation until the first insertion, which
    /// then allocates [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    /// Negative values are rejected by [`validate`](Self::validate).
    pub initial_capacity: isize,

    /// Largest number of slots the heap may ever hold.
    ///
    /// Default: `isize::MAX - 8`. Growth is clamped to this ceiling and
    /// requests beyond it fail with [`HeapError::AllocationFailure`]. The
    /// storage additionally never exceeds `isize::MAX` bytes.
    pub max_capacity: usize,
}

impl HeapConfig {
    /// Capacity used by default and when growing out of an empty buffer.
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Default capacity ceiling: the platform array limit minus a small
    /// header reserve.
    pub const DEFAULT_MAX_CAPACITY: usize = isize::MAX as usize - 8;

    /// Create a config for the given orientation with default sizing.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            initial_capacity: Self::DEFAULT_CAPACITY as isize,
            max_capacity: Self::DEFAULT_MAX_CAPACITY,
        }
    }

    /// Set the initial capacity.
    pub fn with_initial_capacity(mut self, initial_capacity: isize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the capacity ceiling.
    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = max_capacity;
        self
    }

    /// Check the config and return the initial capacity in slots.
    ///
    /// # Errors
    ///
    /// - [`HeapError::InvalidArgument`] if `initial_capacity` is negative or
    ///   `max_capacity` is zero.
    /// - [`HeapError::AllocationFailure`] if `initial_capacity` exceeds
    ///   `max_capacity`.
    pub fn validate(&self) -> Result<usize, HeapError> {
        let initial = usize::try_from(self.initial_capacity).map_err(|_| {
            HeapError::invalid(format!("illegal capacity: {}", self.initial_capacity))
        })?;
        if self.max_capacity == 0 {
            return Err(HeapError::invalid("max_capacity must be at least 1"));
        }
        if initial > self.max_capacity {
            return Err(HeapError::AllocationFailure {
                requested: initial,
                limit: self.max_capacity,
            });
        }
        Ok(initial)
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::new(Orientation::Min)
    }
}
