//! Heap-order repair: sift up, sift down and bottom-up construction.
//!
//! All routines operate on a plain slice laid out as an implicit binary
//! tree (`parent(i) = (i - 1) / 2`, children `2i + 1` and `2i + 2`) and
//! compare through [`Orientation::compare`]. Each one lifts the moving
//! element into a [`Hole`] and writes it back exactly once.

use crate::order::Orientation;
use crate::raw::Hole;

/// Move the element at `pos` toward the root while it is strictly better
/// than its parent. Returns the element's final index.
pub(crate) fn sift_up<E: Ord>(slots: &mut [E], pos: usize, orientation: Orientation) -> usize {
    let mut hole = Hole::new(slots, pos);
    while hole.pos() > 0 {
        let parent = (hole.pos() - 1) / 2;
        if orientation
            .compare(hole.element(), hole.get(parent))
            .is_ge()
        {
            break;
        }
        hole.move_to(parent);
    }
    hole.pos()
}

/// Move the element at `pos` toward the leaves of the tree `slots[..end]`
/// while a child is strictly better. Returns the element's final index.
///
/// Of two children the right one is taken only if it is strictly better
/// than the left one.
pub(crate) fn sift_down<E: Ord>(
    slots: &mut [E],
    pos: usize,
    end: usize,
    orientation: Orientation,
) -> usize {
    let mut hole = Hole::new(&mut slots[..end], pos);
    let mut child = 2 * hole.pos() + 1;
    while child < end {
        let right = child + 1;
        if right < end && orientation.compare(hole.get(child), hole.get(right)).is_gt() {
            child = right;
        }
        if orientation
            .compare(hole.element(), hole.get(child))
            .is_le()
        {
            break;
        }
        hole.move_to(child);
        child = 2 * hole.pos() + 1;
    }
    hole.pos()
}

/// Arrange an arbitrary slice into heap order in O(n).
pub(crate) fn heapify<E: Ord>(slots: &mut [E], orientation: Orientation) {
    let len = slots.len();
    for pos in (0..len / 2).rev() {
        sift_down(slots, pos, len, orientation);
    }
}
