//! Delaunay repair by edge-flip propagation.
//!
//! After a split, the affected edges go onto an explicit work stack. Each
//! popped edge is tested with the exact in-circle predicate against its
//! quadrilateral; a failing edge is flipped in place and the four outer
//! edges of the quadrilateral are pushed back for re-examination. The stack
//! legally carries sentinel and boundary entries, and the drain loop
//! filters both, so callers can seed it with raw twin snapshots.
//!
//! A flip rewrites exactly the two half-edge slots that formed the old
//! diagonal; they keep their indices and become the new diagonal. The four
//! outer edges keep their indices and their external twins, so every key
//! held elsewhere (including entries still on the stack) stays valid.
//!
//! Each flip strictly decreases the set of in-circle violations over a
//! finite set of triangulations, so the drain terminates.
//!
//! # References
//!
//! - Edelsbrunner & Shah (1996), "Incremental Topological Flipping Works
//!   for Regular Triangulations"

#![forbid(unsafe_code)]

use crate::core::collections::{SmallBuffer, FLIP_QUEUE_INLINE};
use crate::core::half_edge::HalfEdgeKey;
use crate::core::triangulation::Triangulation;
use crate::geometry::predicates::in_circle;

/// Work stack of edges whose Delaunay status needs (re-)checking.
pub(crate) type FlipQueue = SmallBuffer<HalfEdgeKey, FLIP_QUEUE_INLINE>;

/// Drains the work stack, flipping every edge that violates the
/// empty-circumcircle property.
pub(crate) fn restore_delaunay(tri: &mut Triangulation, queue: &mut FlipQueue) {
    while let Some(he) = queue.pop() {
        if he.is_none() {
            continue;
        }
        let twin = tri.twin(he);
        if twin.is_none() {
            // Boundary edges are never flipped.
            continue;
        }

        // The quadrilateral around the shared diagonal, CCW from the far
        // vertex of the `he` triangle.
        let l0 = tri.next(he);
        let l1 = tri.next(l0);
        let l2 = tri.next(twin);
        let l3 = tri.next(l2);

        let v0 = tri.origin(l0);
        let v1 = tri.origin(l1);
        let v2 = tri.origin(l2);
        let v3 = tri.origin(l3);

        let status = in_circle(
            tri.position(v0),
            tri.position(v1),
            tri.position(v2),
            tri.position(v3),
        );
        if status.is_delaunay() {
            continue;
        }

        let t0 = tri.twin(l0);
        let t1 = tri.twin(l1);
        let t2 = tri.twin(l2);
        let t3 = tri.twin(l3);

        // Re-triangulate the quadrilateral along the other diagonal. The
        // old diagonal slots become the new diagonal (v1, v3).
        tri.disconnect_triangle(he);
        tri.disconnect_triangle(twin);

        tri.connect_triangle((l0, t0, v0), (he, HalfEdgeKey::NONE, v1), (l3, t3, v3));
        tri.connect_triangle((l2, t2, v2), (twin, he, v3), (l1, t1, v1));

        queue.extend([t0, t1, t2, t3]);
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vertex::VertexKey;
    use crate::geometry::point::Point;
    use crate::geometry::predicates::{orient2d, InCircle};

    /// Two points whose connecting quadrilateral forces a flip.
    #[test]
    fn non_delaunay_diagonal_is_flipped() {
        let mut tri = Triangulation::new();
        // A shallow pair near the bottom edge: after the second insertion
        // the repair pass must have removed every in-circle violation.
        let a = tri.insert(Point::new(1 << 30, 1 << 20)).unwrap();
        let b = tri.insert(Point::new(3 << 30, 1 << 21)).unwrap();
        assert!(tri.is_valid().is_ok());
        assert!(tri.validate_delaunay().is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn flip_preserves_outer_keys_and_twins() {
        let mut tri = Triangulation::new();
        for point in [
            Point::new(1 << 29, 1 << 31),
            Point::new(1 << 31, 1 << 29),
            Point::new(3 << 29, 3 << 29),
        ] {
            tri.insert(point).unwrap();
            // Twin symmetry is exactly the outer-key contract: every
            // neighbor's twin reference survived the repair pass.
            for (i, he) in tri.half_edges().iter().enumerate() {
                if he.twin().is_some() {
                    let back = tri.twin(he.twin());
                    assert_eq!(back, HalfEdgeKey::new(i as u32));
                }
            }
        }
    }

    #[test]
    fn drain_filters_sentinel_and_boundary_entries() {
        let mut tri = Triangulation::new();
        let before = tri.half_edges().to_vec();
        let mut queue: FlipQueue = FlipQueue::new();
        // Sentinel, a boundary edge, and the already-Delaunay diagonal.
        queue.extend([
            HalfEdgeKey::NONE,
            HalfEdgeKey::new(0),
            HalfEdgeKey::new(2),
        ]);
        restore_delaunay(&mut tri, &mut queue);
        assert_eq!(tri.half_edges(), &before[..]);
    }

    #[test]
    fn quadrilateral_stays_ccw_after_repair() {
        let mut tri = Triangulation::new();
        tri.insert(Point::new(5, 7)).unwrap();
        tri.insert(Point::new(u32::MAX - 3, 11)).unwrap();
        for i in 0..tri.half_edge_count() {
            let he = HalfEdgeKey::new(i as u32);
            let a = tri.position(tri.origin(he));
            let b = tri.position(tri.dest(he));
            let c = tri.position(tri.origin(tri.next(tri.next(he))));
            assert!(orient2d(a, b, c).is_positive());
        }
    }

    #[test]
    fn interior_edges_satisfy_in_circle_after_repair() {
        let mut tri = Triangulation::new();
        for point in [
            Point::new(1 << 31, 1 << 30),
            Point::new(1 << 30, 1 << 31),
            Point::new(3 << 29, 1 << 28),
        ] {
            tri.insert(point).unwrap();
        }
        for i in 0..tri.half_edge_count() {
            let he = HalfEdgeKey::new(i as u32);
            let twin = tri.twin(he);
            if twin.is_none() {
                continue;
            }
            let l0 = tri.next(he);
            let l1 = tri.next(l0);
            let l2 = tri.next(twin);
            let l3 = tri.next(l2);
            let p = |v: VertexKey| tri.position(v);
            let status = in_circle(
                p(tri.origin(l0)),
                p(tri.origin(l1)),
                p(tri.origin(l2)),
                p(tri.origin(l3)),
            );
            assert_ne!(status, InCircle::INSIDE);
        }
    }
}
