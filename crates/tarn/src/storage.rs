//! Growable slot buffer backing a heap.
//!
//! [`Storage`] keeps the live elements in `slots[..len]` and tracks its own
//! logical capacity, so the growth policy is exact and observable:
//!
//! ```text
//! capacity 0   --first insert-->  max(DEFAULT_CAPACITY, min)
//! capacity c   --full-->          c + c / 2   (or exactly `min` if that is larger)
//! beyond ceiling                  clamp to ceiling, or AllocationFailure if `min` > ceiling
//! ```
//!
//! Every growth step allocates one new buffer and moves the live elements
//! across with their indices intact.

use std::mem;

use tracing::debug;

use crate::config::HeapConfig;
use crate::error::HeapError;

pub(crate) struct Storage<E> {
    /// Live elements. The vector's own capacity is at least `capacity`,
    /// so pushes below `capacity` never reallocate behind our back.
    slots: Vec<E>,
    /// Logical capacity in slots.
    capacity: usize,
    /// Largest capacity this storage may grow to.
    ceiling: usize,
}

impl<E> Storage<E> {
    /// Allocate storage with exactly `capacity` slots.
    ///
    /// Zero capacity allocates nothing; the first insertion grows to
    /// [`HeapConfig::DEFAULT_CAPACITY`].
    pub(crate) fn try_with_capacity(capacity: usize, max_capacity: usize) -> Result<Self, HeapError> {
        let ceiling = Self::ceiling_for(max_capacity);
        if capacity > ceiling {
            return Err(HeapError::AllocationFailure {
                requested: capacity,
                limit: ceiling,
            });
        }
        Ok(Self {
            slots: Self::allocate(capacity, ceiling)?,
            capacity,
            ceiling,
        })
    }

    /// Allocate `capacity` slots under the default ceiling.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            ceiling: Self::ceiling_for(HeapConfig::DEFAULT_MAX_CAPACITY).max(capacity),
        }
    }

    /// Adopt an existing vector; capacity becomes its length.
    pub(crate) fn from_vec(slots: Vec<E>) -> Self {
        let capacity = slots.len();
        let ceiling = Self::ceiling_for(HeapConfig::DEFAULT_MAX_CAPACITY).max(capacity);
        Self {
            slots,
            capacity,
            ceiling,
        }
    }

    /// The configured ceiling, further bounded so the buffer never exceeds
    /// `isize::MAX` bytes.
    fn ceiling_for(max_capacity: usize) -> usize {
        match mem::size_of::<E>() {
            0 => max_capacity,
            size => max_capacity.min(isize::MAX as usize / size),
        }
    }

    fn allocate(capacity: usize, ceiling: usize) -> Result<Vec<E>, HeapError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| HeapError::AllocationFailure {
                requested: capacity,
                limit: ceiling,
            })?;
        Ok(slots)
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[E] {
        &self.slots
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [E] {
        &mut self.slots
    }

    /// Capacity to grow to so that at least `min_capacity` slots fit.
    pub(crate) fn new_capacity(&self, min_capacity: usize) -> Result<usize, HeapError> {
        let limit = self.ceiling;
        if min_capacity > limit {
            return Err(HeapError::AllocationFailure {
                requested: min_capacity,
                limit,
            });
        }
        let old = self.capacity;
        let grown = old
            .checked_add(old >> 1)
            .ok_or_else(|| HeapError::overflow(limit))?;
        if grown <= min_capacity {
            if old == 0 {
                return Ok(HeapConfig::DEFAULT_CAPACITY.max(min_capacity).min(limit));
            }
            return Ok(min_capacity);
        }
        Ok(grown.min(limit))
    }

    /// Replace the buffer with a larger one holding at least `min_capacity`
    /// slots. Live elements keep their indices.
    pub(crate) fn grow(&mut self, min_capacity: usize) -> Result<(), HeapError> {
        let new_capacity = self.new_capacity(min_capacity)?;
        let mut next = Self::allocate(new_capacity, self.ceiling)?;
        next.append(&mut self.slots);
        debug!(
            old_capacity = self.capacity,
            new_capacity,
            len = next.len(),
            "heap storage grown"
        );
        self.slots = next;
        self.capacity = new_capacity;
        Ok(())
    }

    /// Make room for one more element, growing if every slot is taken.
    pub(crate) fn reserve_one(&mut self) -> Result<(), HeapError> {
        if self.slots.len() == self.capacity {
            let min_capacity = self
                .slots
                .len()
                .checked_add(1)
                .ok_or_else(|| HeapError::overflow(self.ceiling))?;
            self.grow(min_capacity)?;
        }
        Ok(())
    }

    /// Place `element` in the first free slot and return its index.
    ///
    /// Callers reserve room first with [`reserve_one`](Self::reserve_one).
    pub(crate) fn push_slot(&mut self, element: E) -> usize {
        debug_assert!(self.slots.len() < self.capacity, "push_slot without room");
        self.slots.push(element);
        self.slots.len() - 1
    }

    /// Take the element out of the last live slot, clearing it.
    pub(crate) fn pop_slot(&mut self) -> Option<E> {
        self.slots.pop()
    }

    /// Drop every live element. Capacity is kept.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    /// Release unused slots; capacity becomes the live count.
    pub(crate) fn shrink_to_fit(&mut self) {
        if self.capacity == self.slots.len() {
            return;
        }
        self.slots.shrink_to_fit();
        debug!(
            old_capacity = self.capacity,
            new_capacity = self.slots.len(),
            "heap storage shrunk"
        );
        self.capacity = self.slots.len();
    }

    /// Copy of the live elements in a buffer sized exactly to them.
    pub(crate) fn duplicate(&self) -> Self
    where
        E: Clone,
    {
        let mut slots = Vec::with_capacity(self.slots.len());
        slots.extend_from_slice(&self.slots);
        Self {
            capacity: slots.len(),
            slots,
            ceiling: self.ceiling,
        }
    }

    pub(crate) fn into_vec(self) -> Vec<E> {
        self.slots
    }
}
