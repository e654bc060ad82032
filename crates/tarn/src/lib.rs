//! Lock-guarded binary heap with min/max orientation, removal by value and
//! heap sort.
//!
//! [`Heap`] stores its elements in a growable array laid out as an implicit
//! binary tree. Orientation is chosen once, at construction:
//!
//! ```text
//! Orientation::Min  -> smallest on top, extraction ascending
//! Orientation::Max  -> largest on top, extraction descending
//! ```
//!
//! # Architecture
//!
//! ```text
//! Heap<E>
//! ├── Orientation (effective order for every comparison)
//! ├── Mutex<Storage<E>>  (slot buffer, 1.5x growth, capacity ceiling)
//! │   ├── sift   (sift up / sift down / heapify through a single-write hole)
//! │   └── sort   (in-place and buffered heap sort)
//! └── AtomicUsize (live size, readable without the lock)
//! ```
//!
//! # Quick start
//!
//! ```
//! use tarn::{Heap, HeapConfig, HeapError, Orientation};
//!
//! let heap = Heap::new(Orientation::Min);
//! for v in [3, 5, 9, 1, 10, 8, 2, 12, 7, 4] {
//!     heap.push(v).unwrap();
//! }
//! assert_eq!(heap.peek(), Some(1));
//! assert!(heap.remove(&9));
//! assert_eq!(heap.sort(), Some(vec![1, 2, 3, 4, 5, 7, 8, 10, 12]));
//!
//! // Absent elements are rejected without touching the heap.
//! assert!(matches!(heap.add(None), Err(HeapError::InvalidArgument { .. })));
//! assert_eq!(heap.size(), 9);
//!
//! // A capacity ceiling turns runaway growth into an error.
//! let bounded = Heap::from_config(
//!     HeapConfig::new(Orientation::Max)
//!         .with_initial_capacity(0)
//!         .with_max_capacity(1),
//! )
//! .unwrap();
//! bounded.push("only").unwrap();
//! assert!(matches!(
//!     bounded.push("one more"),
//!     Err(HeapError::AllocationFailure { .. })
//! ));
//! ```
//!
//! # Concurrency
//!
//! All structural operations take the heap's lock for their full duration
//! and are atomic with respect to each other. [`Heap::size`] and
//! [`Heap::is_empty`] read an atomic mirror and never block. A value
//! returned by [`Heap::peek`] may be stale by the time it is used; callers
//! that need peek-then-act must synchronize externally or use
//! [`Heap::pop`].
//!
//! # Safety
//!
//! The only `unsafe` code lives in the private `raw` module, which
//! implements the single-write hole used while sifting.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod heap;
pub mod order;
mod raw;
mod sift;
mod sort;
mod storage;

// Public re-exports for the primary API surface.
pub use config::HeapConfig;
pub use error::HeapError;
pub use heap::Heap;
pub use order::Orientation;
