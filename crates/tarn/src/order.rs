//! Heap orientation and the effective order used by every comparison.

use std::cmp::Ordering;

/// Whether the heap keeps its smallest or its largest element on top.
///
/// Fixed when the heap is built; a heap never changes orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Smallest element on top; extraction yields ascending order.
    #[default]
    Min,
    /// Largest element on top; extraction yields descending order.
    Max,
}

impl Orientation {
    /// Compare two elements under the effective order.
    ///
    /// `Less` means `a` belongs closer to the root than `b`: natural order
    /// for [`Min`](Self::Min), inverted natural order for [`Max`](Self::Max).
    #[inline]
    pub fn compare<E: Ord>(self, a: &E, b: &E) -> Ordering {
        match self {
            Self::Min => a.cmp(b),
            Self::Max => b.cmp(a),
        }
    }

    /// Returns `true` for a max-heap.
    #[inline]
    pub fn is_max(self) -> bool {
        self == Self::Max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn min_uses_natural_order() {
        assert_eq!(Orientation::Min.compare(&1, &2), Ordering::Less);
        assert_eq!(Orientation::Min.compare(&2, &1), Ordering::Greater);
        assert_eq!(Orientation::Min.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn max_inverts_natural_order() {
        assert_eq!(Orientation::Max.compare(&1, &2), Ordering::Greater);
        assert_eq!(Orientation::Max.compare(&2, &1), Ordering::Less);
        assert_eq!(Orientation::Max.compare(&3, &3), Ordering::Equal);
    }

    #[test]
    fn default_is_min() {
        assert_eq!(Orientation::default(), Orientation::Min);
        assert!(!Orientation::Min.is_max());
        assert!(Orientation::Max.is_max());
    }
}
