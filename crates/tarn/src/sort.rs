//! Heap sort over a heap-ordered buffer.
//!
//! Both variants run the same extraction loop: swap the root with the last
//! live slot, shrink the live range by one and sift the new root down. They
//! differ only in where the extracted values are collected.
//!
//! ```text
//! in-place:  [ heap ........ | extracted (back-to-front) ]  -> reverse
//! buffered:  [ heap ........ | residue ]    out: [ extracted (front-to-back) ]
//! ```

use crate::order::Orientation;
use crate::sift::sift_down;

/// Sort a heap-ordered buffer into extraction order, reusing the buffer.
///
/// Extracted roots fill the buffer from the back, so the finished buffer is
/// reversed once at the end. The result is ascending for a min-heap and
/// descending for a max-heap.
pub(crate) fn sort_in_place<E: Ord>(slots: &mut [E], orientation: Orientation) {
    let mut live = slots.len();
    while live > 1 {
        live -= 1;
        slots.swap(0, live);
        sift_down(slots, 0, live, orientation);
    }
    slots.reverse();
}

/// Collect a heap-ordered buffer's extraction order into a new vector.
///
/// Extracted roots are written front-to-back into the output. The input
/// buffer is consumed by the extraction loop and left holding its elements
/// in reverse extraction order.
pub(crate) fn sort_buffered<E: Ord + Clone>(slots: &mut [E], orientation: Orientation) -> Vec<E> {
    let mut sorted = Vec::with_capacity(slots.len());
    let mut live = slots.len();
    while live > 0 {
        live -= 1;
        slots.swap(0, live);
        sorted.push(slots[live].clone());
        if live > 0 {
            sift_down(slots, 0, live, orientation);
        }
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sift::heapify;

    fn heap_of(values: &[i32], orientation: Orientation) -> Vec<i32> {
        let mut slots = values.to_vec();
        heapify(&mut slots, orientation);
        slots
    }

    const INPUT: [i32; 10] = [3, 5, 9, 1, 10, 8, 2, 12, 7, 4];

    #[test]
    fn in_place_min_is_ascending() {
        let mut slots = heap_of(&INPUT, Orientation::Min);
        sort_in_place(&mut slots, Orientation::Min);
        assert_eq!(slots, [1, 2, 3, 4, 5, 7, 8, 9, 10, 12]);
    }

    #[test]
    fn in_place_max_is_descending() {
        let mut slots = heap_of(&INPUT, Orientation::Max);
        sort_in_place(&mut slots, Orientation::Max);
        assert_eq!(slots, [12, 10, 9, 8, 7, 5, 4, 3, 2, 1]);
    }

    #[test]
    fn buffered_matches_in_place() {
        for orientation in [Orientation::Min, Orientation::Max] {
            let mut a = heap_of(&INPUT, orientation);
            let mut b = a.clone();
            sort_in_place(&mut a, orientation);
            let sorted = sort_buffered(&mut b, orientation);
            assert_eq!(sorted, a);
        }
    }

    #[test]
    fn buffered_leaves_reverse_residue() {
        let mut slots = heap_of(&INPUT, Orientation::Min);
        let sorted = sort_buffered(&mut slots, Orientation::Min);
        let mut reversed = sorted.clone();
        reversed.reverse();
        assert_eq!(slots, reversed);
    }

    #[test]
    fn trivial_lengths() {
        let mut empty: Vec<i32> = Vec::new();
        sort_in_place(&mut empty, Orientation::Min);
        assert!(sort_buffered(&mut empty, Orientation::Min).is_empty());

        let mut one = vec![7];
        sort_in_place(&mut one, Orientation::Max);
        assert_eq!(one, [7]);
        assert_eq!(sort_buffered(&mut one, Orientation::Max), [7]);
    }

    #[test]
    fn duplicates_survive() {
        let mut slots = heap_of(&[4, 1, 4, 1, 4], Orientation::Min);
        sort_in_place(&mut slots, Orientation::Min);
        assert_eq!(slots, [1, 1, 4, 4, 4]);
    }
}
