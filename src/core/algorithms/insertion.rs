//! The incremental insertion driver.
//!
//! An insertion locates the containing triangle, classifies the point
//! against its edges, performs the matching local surgery (triangle split
//! for an interior point, edge split for a point interior to an edge,
//! nothing for a point already in the mesh), and then drains the flip queue
//! seeded by the surgery until the empty-circumcircle property holds again.
//!
//! Both splits allocate every slot they need before the first disconnect
//! and the driver reserves arena capacity before allocating anything, so an
//! insertion either completes or fails with the mesh untouched.

#![forbid(unsafe_code)]

use crate::core::algorithms::flips::{self, FlipQueue};
use crate::core::algorithms::locate::{self, LocateError, LocateResult};
use crate::core::half_edge::HalfEdgeKey;
use crate::core::triangulation::{Triangulation, TriangulationError};
use crate::core::vertex::VertexKey;
use crate::geometry::point::Point;

/// Error during vertex insertion.
#[derive(Debug, thiserror::Error)]
pub enum InsertionError {
    /// Point location failed.
    #[error("location error: {0}")]
    Location(#[from] LocateError),

    /// An arena could not grow.
    #[error("triangulation error: {0}")]
    Triangulation(#[from] TriangulationError),
}

/// Worst-case number of half-edges one insertion appends: an interior edge
/// split. A triangle split also needs 6; a boundary edge split needs 3.
const MAX_NEW_HALF_EDGES: usize = 6;

/// Inserts `point` into the triangulation. See [`Triangulation::insert`].
pub(crate) fn insert_vertex(
    tri: &mut Triangulation,
    point: Point,
) -> Result<VertexKey, InsertionError> {
    let located = locate::locate(tri, point, HalfEdgeKey::new(0))?;

    // Reserve everything up front: past this point nothing can fail, so a
    // reservation error cannot leave a half-built insertion behind.
    if !matches!(located, LocateResult::OnVertex(_)) {
        tri.reserve_vertices(1)?;
        tri.reserve_half_edges(MAX_NEW_HALF_EDGES)?;
    }

    let mut queue = FlipQueue::new();
    let vertex = match located {
        // Exact coincidence, including the domain corners: nothing to do.
        LocateResult::OnVertex(v) => return Ok(v),
        LocateResult::OnEdge(he) => {
            let mid = tri.alloc_vertex(point);
            split_edge(tri, he, mid, &mut queue);
            mid
        }
        LocateResult::Interior(he) => {
            let vertex = tri.alloc_vertex(point);
            split_triangle(tri, he, vertex, &mut queue);
            vertex
        }
    };
    flips::restore_delaunay(tri, &mut queue);
    Ok(vertex)
}

/// Replaces the triangle at `h0` by three triangles sharing `apex`.
///
/// The three original slots become the triangle that keeps the external
/// twin `t0`; two fresh triangles take the other two external twins. The
/// spokes around `apex` pair up across the three triangles, and the
/// external twins are seeded for repair.
fn split_triangle(
    tri: &mut Triangulation,
    h0: HalfEdgeKey,
    apex: VertexKey,
    queue: &mut FlipQueue,
) {
    let h1 = tri.next(h0);
    let h2 = tri.next(h1);

    let v0 = tri.origin(h0);
    let v1 = tri.origin(h1);
    let v2 = tri.origin(h2);

    let t0 = tri.twin(h0);
    let t1 = tri.twin(h1);
    let t2 = tri.twin(h2);

    let n = tri.alloc_half_edges(6);
    tri.disconnect_triangle(h0);

    tri.connect_triangle(
        (h0, t0, v0),
        (h1, HalfEdgeKey::NONE, v1),
        (h2, HalfEdgeKey::NONE, apex),
    );
    tri.connect_triangle(
        (n, t1, v1),
        (n.offset(1), HalfEdgeKey::NONE, v2),
        (n.offset(2), h1, apex),
    );
    tri.connect_triangle(
        (n.offset(3), t2, v2),
        (n.offset(4), h2, v0),
        (n.offset(5), n.offset(1), apex),
    );

    queue.extend([t0, t1, t2]);
}

/// Splits the edge `a0` (and its twin, when interior) at the vertex `mid`.
///
/// ```text
///             v0                            v0
///           / | \                         / | \
///          /  |  \                       /  |  \
///         /   |   \                     /   |   \
///     n0 /    |    \ n3             n0 /    |    \ n3
///       /c1   |   a2\                 /c1 c0|b0 b2\
///      /      |      \               /      |      \
///     /       |       \             /   c2  |  b1   \
/// v1 +      c0|a0      + v3  =>  v1 +------ m -------+ v3
///     \       |       /             \   d1  |  a2   /
///      \      |      /               \      |      /
///       \c2   |   a1/                 \d2 d0|a0 a1/
///     n1 \    |    / n2             n1 \    |    / n2
///         \   |   /                     \   |   /
///          \  |  /                       \  |  /
///           \ | /                         \ | /
///             v2                            v2
/// ```
///
/// On the boundary (`c0` absent) only the right half exists: 3 fresh slots,
/// two triangles. Interior splits mirror the construction with 6 fresh
/// slots and four triangles. The slots of the split edge stay in use as two
/// of the spokes of `mid`, and the edges on the rim of the affected region
/// are seeded for repair.
fn split_edge(tri: &mut Triangulation, a0: HalfEdgeKey, mid: VertexKey, queue: &mut FlipQueue) {
    let c0 = tri.twin(a0);
    let on_boundary = c0.is_none();

    let a1 = tri.next(a0);
    let a2 = tri.next(a1);
    let n2 = tri.twin(a1);
    let n3 = tri.twin(a2);

    let v0 = tri.origin(a0);
    let v2 = tri.origin(a1);
    let v3 = tri.origin(a2);

    if on_boundary {
        let b0 = tri.alloc_half_edges(3);
        let b1 = b0.offset(1);
        let b2 = b0.offset(2);

        tri.disconnect_triangle(a0);

        tri.connect_triangle(
            (a0, HalfEdgeKey::NONE, mid),
            (a1, n2, v2),
            (a2, HalfEdgeKey::NONE, v3),
        );
        tri.connect_triangle((b0, HalfEdgeKey::NONE, v0), (b1, a2, mid), (b2, n3, v3));

        queue.extend([a1, a2, b2]);
    } else {
        let c1 = tri.next(c0);
        let c2 = tri.next(c1);
        let n0 = tri.twin(c1);
        let n1 = tri.twin(c2);
        let v1 = tri.origin(c2);

        let b0 = tri.alloc_half_edges(6);
        let b1 = b0.offset(1);
        let b2 = b0.offset(2);
        let d0 = b0.offset(3);
        let d1 = b0.offset(4);
        let d2 = b0.offset(5);

        tri.disconnect_triangle(a0);
        tri.disconnect_triangle(c0);

        tri.connect_triangle(
            (a0, HalfEdgeKey::NONE, mid),
            (a1, n2, v2),
            (a2, HalfEdgeKey::NONE, v3),
        );
        tri.connect_triangle(
            (c0, HalfEdgeKey::NONE, mid),
            (c1, n0, v0),
            (c2, HalfEdgeKey::NONE, v1),
        );
        tri.connect_triangle((b0, c0, v0), (b1, a2, mid), (b2, n3, v3));
        tri.connect_triangle((d0, a0, v2), (d1, c2, mid), (d2, n1, v1));

        queue.extend([a0, a1, a2, b0, b2, c1, c2, d2]);
    }
}

// =============================================================================
// TESTS
// =============================================================================
