//! Test utilities and fixtures for Tarn development.
//!
//! Provides a heap-order checker that works on any backing-array snapshot,
//! the reference scenario input, deterministic scrambled workloads and a
//! [`Ticket`] element type whose equality ignores its identity tag.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cmp::Ordering;

/// Reference input used by the ordering scenarios.
pub const SCENARIO_INPUT: [i32; 10] = [3, 5, 9, 1, 10, 8, 2, 12, 7, 4];

/// [`SCENARIO_INPUT`] in ascending order.
pub const SCENARIO_ASCENDING: [i32; 10] = [1, 2, 3, 4, 5, 7, 8, 9, 10, 12];

/// [`SCENARIO_INPUT`] in descending order.
pub const SCENARIO_DESCENDING: [i32; 10] = [12, 10, 9, 8, 7, 5, 4, 3, 2, 1];

/// Index of the first slot that compares strictly better than its parent
/// under `compare`, or `None` if `slots` is in heap order.
///
/// `compare` is the heap's effective order, e.g.
/// `|a, b| heap.orientation().compare(a, b)`.
pub fn first_order_violation<E, F>(slots: &[E], compare: F) -> Option<usize>
where
    F: Fn(&E, &E) -> Ordering,
{
    (1..slots.len()).find(|&i| compare(&slots[(i - 1) / 2], &slots[i]) == Ordering::Greater)
}

/// Deterministic permutation of `0..n` (for `n` not divisible by 7).
///
/// Good enough to defeat already-sorted fast paths without pulling in a
/// random number generator.
pub fn scramble(n: u32) -> Vec<u32> {
    (0..n).map(|i| (i.wrapping_mul(7).wrapping_add(13)) % n).collect()
}

/// Element with a priority and an identity tag.
///
/// Ordering and equality look only at `priority`, so two tickets with the
/// same priority are interchangeable as far as the heap is concerned. The
/// `id` lets tests observe which of several equal elements moved where.
#[derive(Clone, Copy, Debug)]
pub struct Ticket {
    pub priority: u32,
    pub id: u32,
}

impl Ticket {
    pub fn new(priority: u32, id: u32) -> Self {
        Self { priority, id }
    }
}

impl PartialEq for Ticket {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl Eq for Ticket {}

impl PartialOrd for Ticket {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ticket {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_violation() {
        let slots = [1, 5, 2, 4];
        assert_eq!(first_order_violation(&slots, |a, b| a.cmp(b)), Some(3));
        assert_eq!(first_order_violation(&slots, |a, b| b.cmp(a)), Some(1));
        assert_eq!(first_order_violation(&[1, 2, 3], |a, b| a.cmp(b)), None);
    }

    #[test]
    fn scramble_is_permutation() {
        let mut values = scramble(1000);
        values.sort_unstable();
        assert_eq!(values, (0..1000).collect::<Vec<_>>());
    }

    #[test]
    fn tickets_compare_by_priority_only() {
        assert_eq!(Ticket::new(3, 1), Ticket::new(3, 2));
        assert!(Ticket::new(2, 9) < Ticket::new(3, 0));
    }
}
