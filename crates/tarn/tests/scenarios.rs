//! Integration test: end-to-end heap behaviour through the public API.
//!
//! Covers the reference ordering scenarios (min/max extraction, sort,
//! removal, absent-element rejection) plus the extraction-order law, sort
//! determinism and growth correctness with duplicate priorities.

use tarn::{Heap, HeapConfig, HeapError, Orientation};
use tarn_test_utils::{
    first_order_violation, scramble, Ticket, SCENARIO_ASCENDING, SCENARIO_DESCENDING,
    SCENARIO_INPUT,
};

fn scenario_heap(orientation: Orientation) -> Heap<i32> {
    let heap = Heap::new(orientation);
    for v in SCENARIO_INPUT {
        heap.push(v).unwrap();
    }
    heap
}

fn assert_ordered<E: Ord + Clone + std::fmt::Debug>(heap: &Heap<E>) {
    let slots = heap.to_vec();
    let o = heap.orientation();
    assert_eq!(
        first_order_violation(&slots, |a, b| o.compare(a, b)),
        None,
        "heap order violated: {slots:?}"
    );
}

fn drain<E: Ord>(heap: &Heap<E>) -> Vec<E> {
    std::iter::from_fn(|| heap.pop()).collect()
}

// ── Reference scenarios ─────────────────────────────────────────────

#[test]
fn min_heap_extracts_ascending() {
    let heap = scenario_heap(Orientation::Min);
    assert_eq!(heap.peek(), Some(1));
    assert_eq!(drain(&heap), SCENARIO_ASCENDING);
    assert!(heap.is_empty());
}

#[test]
fn max_heap_extracts_descending() {
    let heap = scenario_heap(Orientation::Max);
    assert_eq!(heap.peek(), Some(12));
    assert_eq!(drain(&heap), SCENARIO_DESCENDING);
}

#[test]
fn sort_keeps_size() {
    let heap = scenario_heap(Orientation::Min);
    assert_eq!(heap.sort(), Some(SCENARIO_ASCENDING.to_vec()));
    assert_eq!(heap.size(), 10);
}

#[test]
fn remove_keeps_heap_order() {
    let heap = scenario_heap(Orientation::Min);
    assert!(heap.remove(&9));
    assert!(!heap.contains(&9));
    assert_eq!(heap.size(), 9);
    assert_ordered(&heap);
}

#[test]
fn absent_element_is_rejected() {
    let heap = scenario_heap(Orientation::Min);
    let err = heap.add(None).unwrap_err();
    assert!(matches!(err, HeapError::InvalidArgument { .. }));
    assert_eq!(err.to_string(), "invalid argument: element must not be absent");
    assert_eq!(heap.size(), 10);
}

// ── Laws ────────────────────────────────────────────────────────────

#[test]
fn extraction_is_sorted_for_scrambled_input() {
    for orientation in [Orientation::Min, Orientation::Max] {
        let heap = Heap::new(orientation);
        for v in scramble(500) {
            heap.push(v).unwrap();
        }
        assert_ordered(&heap);

        let mut expected: Vec<u32> = (0..500).collect();
        if orientation.is_max() {
            expected.reverse();
        }
        assert_eq!(drain(&heap), expected);
    }
}

#[test]
fn sort_is_deterministic_across_insertion_orders() {
    let mut reversed = SCENARIO_INPUT;
    reversed.reverse();
    for orientation in [Orientation::Min, Orientation::Max] {
        let a = Heap::from_vec(orientation, SCENARIO_INPUT.to_vec());
        let b = Heap::new(orientation);
        for v in reversed {
            b.push(v).unwrap();
        }
        let sorted = a.sort();
        assert_eq!(sorted, b.sort());
        assert_eq!(sorted, b.sort_buffered());
    }
}

#[test]
fn sorted_heap_stays_usable() {
    let heap = scenario_heap(Orientation::Min);
    heap.sort_buffered().unwrap();
    assert_ordered(&heap);
    heap.push(0).unwrap();
    assert!(heap.remove(&12));
    assert_eq!(heap.pop(), Some(0));
    assert_eq!(drain(&heap), [1, 2, 3, 4, 5, 7, 8, 9, 10]);
}

#[test]
fn push_pop_round_trip_restores_size() {
    let heap = scenario_heap(Orientation::Max);
    heap.push(6).unwrap();
    assert_eq!(heap.size(), 11);
    assert_eq!(heap.pop(), Some(12));
    assert_eq!(heap.size(), 10);
}

// ── Growth ──────────────────────────────────────────────────────────

#[test]
fn growth_keeps_every_duplicate() {
    let heap = Heap::with_capacity(Orientation::Min, 0).unwrap();
    // 40 tickets over 4 priorities forces several growth steps.
    for id in 0..40 {
        heap.push(Ticket::new(id % 4, id)).unwrap();
    }
    assert_eq!(heap.size(), 40);
    assert!(heap.capacity() >= 40);
    assert_ordered(&heap);

    let drained = drain(&heap);
    let priorities: Vec<u32> = drained.iter().map(|t| t.priority).collect();
    let mut expected: Vec<u32> = (0..40).map(|id| id % 4).collect();
    expected.sort_unstable();
    assert_eq!(priorities, expected);

    let mut ids: Vec<u32> = drained.iter().map(|t| t.id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..40).collect::<Vec<_>>());
}

#[test]
fn removing_a_duplicate_takes_exactly_one() {
    let heap = Heap::new(Orientation::Max);
    for id in 0..6 {
        heap.push(Ticket::new(if id < 3 { 7 } else { id }, id)).unwrap();
    }
    assert!(heap.remove(&Ticket::new(7, 99)));
    assert_eq!(heap.size(), 5);
    assert_ordered(&heap);
    let sevens = heap.to_vec().iter().filter(|t| t.priority == 7).count();
    assert_eq!(sevens, 2);
}

#[test]
fn capacity_ceiling_is_enforced() {
    let config = HeapConfig::new(Orientation::Min)
        .with_initial_capacity(4)
        .with_max_capacity(6);
    let heap = Heap::from_config(config).unwrap();
    for v in 0..6 {
        heap.push(v).unwrap();
    }
    assert_eq!(heap.capacity(), 6);
    let err = heap.push(6).unwrap_err();
    assert_eq!(
        err,
        HeapError::AllocationFailure {
            requested: 7,
            limit: 6
        }
    );
    assert_eq!(heap.size(), 6);
    assert_eq!(heap.into_sorted_vec(), [0, 1, 2, 3, 4, 5]);
}

#[test]
fn invalid_configs_are_rejected() {
    assert!(matches!(
        Heap::<i32>::with_capacity(Orientation::Max, -5),
        Err(HeapError::InvalidArgument { .. })
    ));
    assert!(matches!(
        Heap::<i32>::from_config(HeapConfig::new(Orientation::Min).with_max_capacity(0)),
        Err(HeapError::InvalidArgument { .. })
    ));
    assert!(matches!(
        Heap::<i32>::from_config(
            HeapConfig::new(Orientation::Min)
                .with_initial_capacity(20)
                .with_max_capacity(10)
        ),
        Err(HeapError::AllocationFailure { .. })
    ));
}
