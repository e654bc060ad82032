//! Single-write hole used by the sift routines.
//!
//! Sifting lifts one element out of the buffer, shifts parents or children
//! into the vacated slot, and writes the lifted element exactly once when
//! its final position is known. This module is the only place in the
//! workspace that contains `unsafe` code; every block carries a
//! `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::mem::ManuallyDrop;
use std::ptr;

/// A slice with one logically vacated slot.
///
/// The element lifted out of `pos` lives in `elt` until the hole is dropped,
/// at which point it is written into whichever slot the hole occupies then.
/// Drop also runs on unwind, so a panicking comparison never leaves a
/// duplicated or missing element behind.
pub(crate) struct Hole<'a, E> {
    data: &'a mut [E],
    elt: ManuallyDrop<E>,
    pos: usize,
}

impl<'a, E> Hole<'a, E> {
    /// Lift the element at `pos` out of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is out of bounds.
    pub(crate) fn new(data: &'a mut [E], pos: usize) -> Self {
        assert!(pos < data.len(), "hole position {pos} out of bounds");
        // SAFETY: `pos` is in bounds. The slot is treated as vacated from
        // here on; `Drop` writes `elt` back into the current hole.
        let elt = unsafe { ptr::read(data.as_ptr().add(pos)) };
        Self {
            data,
            elt: ManuallyDrop::new(elt),
            pos,
        }
    }

    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// The lifted element.
    #[inline]
    pub(crate) fn element(&self) -> &E {
        &self.elt
    }

    /// The element at `index`, which must not be the hole itself.
    #[inline]
    pub(crate) fn get(&self, index: usize) -> &E {
        debug_assert!(index != self.pos);
        &self.data[index]
    }

    /// Move the element at `index` into the hole. The hole moves to `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds or is the hole itself.
    #[inline]
    pub(crate) fn move_to(&mut self, index: usize) {
        assert!(
            index < self.data.len() && index != self.pos,
            "invalid hole move from {} to {index}",
            self.pos
        );
        // SAFETY: both positions are in bounds and distinct, so the copy does
        // not overlap. The destination is the vacated slot, so nothing is
        // overwritten; the source becomes the new vacated slot.
        unsafe {
            let base = self.data.as_mut_ptr();
            ptr::copy_nonoverlapping(base.add(index), base.add(self.pos), 1);
        }
        self.pos = index;
    }
}

impl<E> Drop for Hole<'_, E> {
    fn drop(&mut self) {
        let pos = self.pos;
        // SAFETY: `pos` is in bounds (checked by `new` and `move_to`) and is
        // the vacated slot; filling it with the lifted element restores a
        // buffer in which every element appears exactly once.
        unsafe {
            ptr::copy_nonoverlapping(&*self.elt, self.data.as_mut_ptr().add(pos), 1);
        }
    }
}
