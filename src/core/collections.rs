//! Collection aliases used by the triangulation and its test suites.

#![forbid(unsafe_code)]

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Fast non-cryptographic `HashSet` for key and point bookkeeping.
///
/// Entries are always arena keys or lattice points, never
/// attacker-controlled data, so the non-DoS-resistant `FxHasher` is
/// appropriate. The randomized test suites use it to track distinct
/// inserted points.
pub type FastHashSet<T> = FxHashSet<T>;

/// Small-optimized buffer: stack storage up to `N` elements, heap beyond.
pub type SmallBuffer<T, const N: usize> = SmallVec<[T; N]>;

/// Inline capacity of the flip work stack.
///
/// An insertion seeds at most eight edges and each flip pushes four more;
/// the local impact radius rarely spills this.
pub const FLIP_QUEUE_INLINE: usize = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_buffer_spills_to_heap() {
        let mut buffer: SmallBuffer<u32, 4> = SmallBuffer::new();
        for i in 0..4 {
            buffer.push(i);
        }
        assert!(!buffer.spilled());
        buffer.push(4);
        assert!(buffer.spilled());
        assert_eq!(buffer.len(), 5);
    }

    #[test]
    fn fast_hash_set_basic_operations() {
        let mut set: FastHashSet<u32> = FastHashSet::default();
        set.insert(9);
        assert!(set.contains(&9));
        assert!(!set.insert(9));
        assert_eq!(set.len(), 1);
    }
}
