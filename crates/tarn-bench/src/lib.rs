//! Benchmark workloads for the Tarn heap.
//!
//! Provides deterministic inputs shared by the Criterion benches:
//!
//! - [`scrambled_input`]: a permutation of `0..n` with no sorted runs
//! - [`filled_heap`]: a heap built by repeated `push` from that input
//! - [`ticket_input`]: many elements over few priorities, for duplicate-heavy runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tarn::{Heap, Orientation};
use tarn_test_utils::{scramble, Ticket};

/// Element counts exercised by every size-parameterized bench.
pub const SIZES: [u32; 3] = [1_000, 10_000, 100_000];

/// Deterministic permutation of `0..n`.
///
/// `n` must not be a multiple of 7; every entry of [`SIZES`] qualifies.
pub fn scrambled_input(n: u32) -> Vec<u32> {
    scramble(n)
}

/// Heap of `0..n` built by `n` individual pushes starting from capacity zero,
/// so the growth path is part of the build.
pub fn filled_heap(orientation: Orientation, n: u32) -> Heap<u32> {
    let heap = Heap::with_capacity(orientation, 0).expect("zero capacity is valid");
    for v in scrambled_input(n) {
        heap.push(v).expect("default ceiling is far above bench sizes");
    }
    heap
}

/// `n` tickets spread over `priorities` distinct priorities.
pub fn ticket_input(n: u32, priorities: u32) -> Vec<Ticket> {
    scrambled_input(n)
        .into_iter()
        .map(|id| Ticket::new(id % priorities, id))
        .collect()
}
