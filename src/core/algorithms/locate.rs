//! Point location by directed walk.
//!
//! The walk starts from a seed half-edge and repeatedly tests the query
//! point against the three edges of the current triangle. The first edge
//! with the query strictly on its outside sends the walk across to the
//! neighboring triangle; when no edge does, the triangle contains the query
//! in the closed sense and the three recorded orientations classify the
//! containment exactly (interior, on an edge, or on a vertex).
//!
//! Crossing is always safe inside the domain: the bounding square encloses
//! every representable point, so only a corrupted mesh could steer the walk
//! through a boundary edge. The walk is not polynomial in the worst case but
//! terminates on any Delaunay mesh; a defensive step bound of twice the
//! arena size converts a cycle caused by a mesh corruption bug into an
//! error instead of a hang.
//!
//! # References
//!
//! - O. Devillers, S. Pion, and M. Teillaud, "Walking in a Triangulation",
//!   International Journal of Foundations of Computer Science, 2001.

#![forbid(unsafe_code)]

use crate::core::half_edge::HalfEdgeKey;
use crate::core::triangulation::Triangulation;
use crate::core::vertex::VertexKey;
use crate::geometry::point::Point;
use crate::geometry::predicates::{orient2d, Orientation};

/// Result of a point location query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocateResult {
    /// The point is strictly inside the triangle entered at this half-edge.
    Interior(HalfEdgeKey),
    /// The point lies in the interior of this half-edge's segment.
    OnEdge(HalfEdgeKey),
    /// The point coincides with this vertex.
    OnVertex(VertexKey),
}

/// Error during point location.
#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    /// The walk crossed more triangles than the step bound allows.
    #[error("point location exceeded {steps} triangle crossings without converging")]
    CycleDetected {
        /// Crossings performed before giving up.
        steps: usize,
    },

    /// The walk tried to leave through the outer boundary.
    #[error("point location tried to cross boundary half-edge {half_edge}")]
    WalkEscaped {
        /// The boundary half-edge whose outside contains the query.
        half_edge: HalfEdgeKey,
    },

    /// The query lies on all three edges of the located triangle, which
    /// requires a zero-area triangle.
    #[error("located degenerate triangle at {half_edge}")]
    DegenerateTriangle {
        /// Entry half-edge of the degenerate triangle.
        half_edge: HalfEdgeKey,
    },
}

/// Walks from `seed` to the triangle containing `query`.
///
/// On success returns an entry half-edge of the containing triangle and the
/// orientations of `query` against its three edges in traversal order; none
/// of them is negative.
pub(crate) fn walk(
    tri: &Triangulation,
    query: Point,
    seed: HalfEdgeKey,
) -> Result<(HalfEdgeKey, [Orientation; 3]), LocateError> {
    let limit = 2 * tri.half_edge_count();
    let mut he = seed;
    let mut steps = 0_usize;

    'triangle: loop {
        let mut signs = [Orientation::DEGENERATE; 3];
        for sign in &mut signs {
            let a = tri.position(tri.origin(he));
            let b = tri.position(tri.dest(he));
            let orientation = orient2d(a, b, query);
            if orientation.is_negative() {
                let twin = tri.twin(he);
                if twin.is_none() {
                    return Err(LocateError::WalkEscaped { half_edge: he });
                }
                steps += 1;
                if steps > limit {
                    return Err(LocateError::CycleDetected { steps });
                }
                he = twin;
                continue 'triangle;
            }
            *sign = orientation;
            he = tri.next(he);
        }
        return Ok((he, signs));
    }
}

/// Locates `query` and classifies its containment.
///
/// The classification encodes which of the three edge orientations are
/// strictly positive: all three means the interior, one zero pins an edge,
/// and two zeros pin the shared vertex of those edges. All three zero would
/// require a zero-area triangle and is reported as
/// [`LocateError::DegenerateTriangle`].
pub(crate) fn locate(
    tri: &Triangulation,
    query: Point,
    seed: HalfEdgeKey,
) -> Result<LocateResult, LocateError> {
    let (he, signs) = walk(tri, query, seed)?;

    let mask = usize::from(signs[0].is_positive())
        | usize::from(signs[1].is_positive()) << 1
        | usize::from(signs[2].is_positive()) << 2;

    let result = match mask {
        0b111 => LocateResult::Interior(he),

        // One zero orientation: the query is interior to that edge.
        0b110 => LocateResult::OnEdge(he),
        0b101 => LocateResult::OnEdge(tri.next(he)),
        0b011 => LocateResult::OnEdge(tri.next(tri.next(he))),

        // Two zero orientations: the query is their shared endpoint.
        0b010 => LocateResult::OnVertex(tri.origin(he)),
        0b100 => LocateResult::OnVertex(tri.origin(tri.next(he))),
        0b001 => LocateResult::OnVertex(tri.origin(tri.next(tri.next(he)))),

        _ => return Err(LocateError::DegenerateTriangle { half_edge: he }),
    };

    if let LocateResult::OnVertex(v) = result {
        debug_assert_eq!(tri.position(v), query);
    }
    Ok(result)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::triangulation::DOMAIN_CORNERS;

    const MID: u32 = 1 << 31;

    #[test]
    fn locates_interior_point() {
        let tri = Triangulation::new();
        // Below the 0-2 diagonal: inside triangle (0, 1, 2).
        let result = locate(&tri, Point::new(MID, 10), HalfEdgeKey::new(0)).unwrap();
        let LocateResult::Interior(he) = result else {
            panic!("expected interior containment, got {result:?}");
        };
        let tri_vertices = [
            tri.origin(he),
            tri.origin(tri.next(he)),
            tri.origin(tri.next(tri.next(he))),
        ];
        assert!(tri_vertices.iter().all(|v| v.index() < 3));
    }

    #[test]
    fn locates_point_on_diagonal() {
        let tri = Triangulation::new();
        let result = locate(&tri, Point::new(MID, MID), HalfEdgeKey::new(0)).unwrap();
        let LocateResult::OnEdge(he) = result else {
            panic!("expected on-edge containment, got {result:?}");
        };
        // The hit edge is the 0-2 diagonal, in either direction.
        let endpoints = [tri.origin(he).index(), tri.dest(he).index()];
        assert!(endpoints == [0, 2] || endpoints == [2, 0]);
    }

    #[test]
    fn locates_every_corner_exactly() {
        let tri = Triangulation::new();
        for (i, corner) in DOMAIN_CORNERS.iter().enumerate() {
            let result = locate(&tri, *corner, HalfEdgeKey::new(0)).unwrap();
            assert_eq!(
                result,
                LocateResult::OnVertex(VertexKey::new(i as u32)),
                "corner {corner}"
            );
        }
    }

    #[test]
    fn walk_signs_are_never_negative() {
        let tri = Triangulation::new();
        let (_, signs) = walk(&tri, Point::new(3, 5), HalfEdgeKey::new(0)).unwrap();
        assert!(signs.iter().all(|s| !s.is_negative()));
    }

    #[test]
    fn walk_crosses_the_diagonal_when_seeded_on_the_far_side() {
        let tri = Triangulation::new();
        // Point in triangle (2, 3, 0); seed half-edge 0 is in (0, 1, 2).
        let query = Point::new(10, MID);
        let (he, _) = walk(&tri, query, HalfEdgeKey::new(0)).unwrap();
        let owners = [
            tri.origin(he).index(),
            tri.origin(tri.next(he)).index(),
            tri.origin(tri.next(tri.next(he))).index(),
        ];
        assert!(owners.contains(&3), "walk ended in {owners:?}");
    }
}
