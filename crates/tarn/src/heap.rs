//! The lock-guarded binary heap.
//!
//! [`Heap`] keeps its elements in a growable array laid out as an implicit
//! binary tree. Structural mutation (insert, removal, sort, clear) happens
//! under a single `Mutex`; the live size is mirrored in an atomic so that
//! [`size`](Heap::size) and [`is_empty`](Heap::is_empty) never block.

use std::fmt;
use std::mem;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use tracing::{trace, warn};

use crate::config::HeapConfig;
use crate::error::HeapError;
use crate::order::Orientation;
use crate::sift::{heapify, sift_down, sift_up};
use crate::sort::{sort_buffered, sort_in_place};
use crate::storage::Storage;

/// A resizable binary heap with min or max orientation.
///
/// Every structural operation is atomic with respect to the others, so a
/// `Heap` can be shared between threads behind a plain `&` or an `Arc`.
///
/// # Example
///
/// ```
/// use tarn::{Heap, Orientation};
///
/// let heap = Heap::new(Orientation::Max);
/// for v in [3, 5, 9, 1] {
///     heap.push(v).unwrap();
/// }
/// assert_eq!(heap.peek(), Some(9));
/// assert_eq!(heap.sort(), Some(vec![9, 5, 3, 1]));
/// assert_eq!(heap.pop(), Some(9));
/// assert_eq!(heap.size(), 3);
/// ```
///
/// # Sorting
///
/// [`sort`](Self::sort) and [`sort_buffered`](Self::sort_buffered) return
/// the elements in extraction order (the sequence repeated
/// [`pop`](Self::pop) calls would produce). Afterwards the backing buffer
/// holds that same sequence, which is itself a valid heap layout, so the
/// heap keeps its size and remains usable.
pub struct Heap<E> {
    orientation: Orientation,
    storage: Mutex<Storage<E>>,
    /// Live element count, stored with `Release` while the lock is held.
    len: AtomicUsize,
}

// Compile-time assertion: Heap must be Send + Sync for sendable elements.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<Heap<u64>>();
    assert::<Heap<String>>();
};

impl<E: Ord> Heap<E> {
    /// Create an empty heap with [`HeapConfig::DEFAULT_CAPACITY`] slots.
    pub fn new(orientation: Orientation) -> Self {
        Self::from_storage(orientation, Storage::new(HeapConfig::DEFAULT_CAPACITY))
    }

    /// Create an empty heap with `initial_capacity` slots.
    ///
    /// Zero defers allocation to the first insertion.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArgument`] if `initial_capacity` is negative,
    /// [`HeapError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn with_capacity(orientation: Orientation, initial_capacity: isize) -> Result<Self, HeapError> {
        Self::from_config(HeapConfig::new(orientation).with_initial_capacity(initial_capacity))
    }

    /// Create an empty heap from a validated [`HeapConfig`].
    ///
    /// # Errors
    ///
    /// Any error from [`HeapConfig::validate`], or
    /// [`HeapError::AllocationFailure`] if the buffer cannot be allocated.
    pub fn from_config(config: HeapConfig) -> Result<Self, HeapError> {
        let initial = config.validate()?;
        let storage = Storage::try_with_capacity(initial, config.max_capacity)?;
        Ok(Self::from_storage(config.orientation, storage))
    }

    /// Build a heap from arbitrary elements in O(n).
    pub fn from_vec(orientation: Orientation, mut elements: Vec<E>) -> Self {
        heapify(&mut elements, orientation);
        Self::from_storage(orientation, Storage::from_vec(elements))
    }

    fn from_storage(orientation: Orientation, storage: Storage<E>) -> Self {
        let len = storage.len();
        Self {
            orientation,
            storage: Mutex::new(storage),
            len: AtomicUsize::new(len),
        }
    }

    /// The heap's orientation.
    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of live elements. Does not take the lock.
    #[inline]
    pub fn size(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns `true` if the heap holds no elements. Does not take the lock.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Current capacity in slots.
    pub fn capacity(&self) -> usize {
        self.lock().capacity()
    }

    /// Returns `true` if some element equals `x`.
    pub fn contains(&self, x: &E) -> bool {
        self.index_of(x).is_some()
    }

    /// Position of the first element equal to `x` in the backing array,
    /// scanning from the root.
    pub fn index_of(&self, x: &E) -> Option<usize> {
        self.lock().as_slice().iter().position(|e| e == x)
    }

    /// Insert an element. O(log n).
    ///
    /// # Errors
    ///
    /// [`HeapError::AllocationFailure`] if the heap is full and cannot grow.
    /// The heap is unchanged in that case.
    pub fn push(&self, element: E) -> Result<(), HeapError> {
        let mut storage = self.lock();
        storage.reserve_one()?;
        let pos = storage.push_slot(element);
        sift_up(storage.as_mut_slice(), pos, self.orientation);
        self.publish_len(&storage);
        Ok(())
    }

    /// Insert an element handed over from a nullable source.
    ///
    /// # Errors
    ///
    /// [`HeapError::InvalidArgument`] if `element` is `None` (the heap is
    /// unchanged), otherwise as [`push`](Self::push).
    pub fn add(&self, element: Option<E>) -> Result<(), HeapError> {
        match element {
            Some(element) => self.push(element),
            None => Err(HeapError::invalid("element must not be absent")),
        }
    }

    /// Remove and return the top element, or `None` if the heap is empty.
    ///
    /// The top always sits in slot 0, which is also the first slot a scan
    /// for an equal element visits, so duplicates elsewhere in the heap are
    /// never taken instead.
    pub fn pop(&self) -> Option<E> {
        let mut storage = self.lock();
        let top = self.remove_at(&mut storage, 0);
        self.publish_len(&storage);
        top
    }

    /// Remove the first element equal to `x`. O(n) scan plus O(log n) repair.
    ///
    /// Returns `false` if no element equals `x`. Which of several equal
    /// elements leaves the heap is unspecified.
    pub fn remove(&self, x: &E) -> bool {
        let mut storage = self.lock();
        let Some(index) = storage.as_slice().iter().position(|e| e == x) else {
            return false;
        };
        let removed = self.remove_at(&mut storage, index).is_some();
        self.publish_len(&storage);
        removed
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&self) {
        let mut storage = self.lock();
        storage.clear();
        self.publish_len(&storage);
    }

    /// Release unused capacity.
    pub fn shrink_to_fit(&self) {
        self.lock().shrink_to_fit();
    }

    /// Consume the heap and return its elements in extraction order.
    pub fn into_sorted_vec(self) -> Vec<E> {
        let orientation = self.orientation;
        let mut elements = self.into_vec();
        sort_in_place(&mut elements, orientation);
        elements
    }

    /// Consume the heap and return its elements in backing-array order.
    pub fn into_vec(self) -> Vec<E> {
        let orientation = self.orientation;
        match self.storage.into_inner() {
            Ok(storage) => storage.into_vec(),
            Err(poisoned) => {
                warn!("recovering heap storage from poisoned lock");
                let mut elements = poisoned.into_inner().into_vec();
                heapify(&mut elements, orientation);
                elements
            }
        }
    }

    /// Replace the element at `index` with the last live element and repair
    /// heap order around it. The vacated last slot is cleared.
    fn remove_at(&self, storage: &mut Storage<E>, index: usize) -> Option<E> {
        if index >= storage.len() {
            return None;
        }
        let replacement = storage.pop_slot()?;
        let last = storage.len();
        if index == last {
            return Some(replacement);
        }
        let slots = storage.as_mut_slice();
        let removed = mem::replace(&mut slots[index], replacement);
        // The replacement came from the unordered tail, so it may belong
        // below or above `index`.
        if sift_down(slots, index, last, self.orientation) == index {
            sift_up(slots, index, self.orientation);
        }
        Some(removed)
    }

    fn publish_len(&self, storage: &Storage<E>) {
        self.len.store(storage.len(), Ordering::Release);
    }

    /// Acquire the storage lock.
    ///
    /// A poisoned lock means an element's `Ord` impl panicked mid-operation.
    /// The buffer still holds every element exactly once, but heap order may
    /// be broken, so it is rebuilt before the guard is handed out.
    fn lock(&self) -> MutexGuard<'_, Storage<E>> {
        match self.storage.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                warn!("recovering heap storage from poisoned lock");
                let mut guard = poisoned.into_inner();
                self.storage.clear_poison();
                heapify(guard.as_mut_slice(), self.orientation);
                self.publish_len(&guard);
                guard
            }
        }
    }
}

impl<E: Ord + Clone> Heap<E> {
    /// Clone of the top element, or `None` if the heap is empty.
    ///
    /// The value may be stale by the time the caller acts on it; use
    /// [`pop`](Self::pop) to take the top atomically.
    pub fn peek(&self) -> Option<E> {
        self.lock().as_slice().first().cloned()
    }

    /// Heap sort reusing the backing buffer.
    ///
    /// Returns the elements in extraction order, or `None` if the heap is
    /// empty. The size is unchanged.
    pub fn sort(&self) -> Option<Vec<E>> {
        if self.is_empty() {
            return None;
        }
        let mut storage = self.lock();
        if storage.len() == 0 {
            return None;
        }
        trace!(len = storage.len(), orientation = ?self.orientation, "in-place heap sort");
        sort_in_place(storage.as_mut_slice(), self.orientation);
        Some(storage.as_slice().to_vec())
    }

    /// Heap sort collecting into a separately allocated buffer.
    ///
    /// Returns the elements in extraction order, or `None` if the heap is
    /// empty. The size is unchanged.
    pub fn sort_buffered(&self) -> Option<Vec<E>> {
        if self.is_empty() {
            return None;
        }
        let mut storage = self.lock();
        if storage.len() == 0 {
            return None;
        }
        trace!(len = storage.len(), orientation = ?self.orientation, "buffered heap sort");
        let slots = storage.as_mut_slice();
        let sorted = sort_buffered(slots, self.orientation);
        // Extraction leaves the backing buffer in reverse extraction order.
        slots.reverse();
        Some(sorted)
    }

    /// Snapshot of the live elements in backing-array order.
    pub fn to_vec(&self) -> Vec<E> {
        self.lock().as_slice().to_vec()
    }
}

impl<E: Ord> Default for Heap<E> {
    fn default() -> Self {
        Self::new(Orientation::Min)
    }
}

/// Copies the live elements into a buffer sized exactly to them, behind a
/// fresh lock. Elements are duplicated with `E::clone`, so `Arc`-like
/// elements are shared with the source heap rather than deep-copied.
impl<E: Ord + Clone> Clone for Heap<E> {
    fn clone(&self) -> Self {
        let storage = self.lock().duplicate();
        Self::from_storage(self.orientation, storage)
    }
}

impl<E: Ord + fmt::Debug> fmt::Debug for Heap<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let storage = self.lock();
        f.debug_struct("Heap")
            .field("orientation", &self.orientation)
            .field("elements", &storage.as_slice())
            .finish()
    }
}
