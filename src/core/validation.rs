//! Structural and geometric invariant checkers.
//!
//! [`Triangulation::is_valid`] runs the structural invariants (triangle
//! cycles, twin symmetry, strict CCW orientation, the boundary contract,
//! and the Euler characteristic) and returns the first failure.
//! [`Triangulation::validate_delaunay`] runs the global empty-circumcircle
//! scan separately, since it costs an exact in-circle test per interior
//! edge. The focused helpers are public so tests can pinpoint a single
//! broken invariant.

#![forbid(unsafe_code)]

use crate::core::half_edge::HalfEdgeKey;
use crate::core::triangulation::Triangulation;
use crate::geometry::predicates::{in_circle, orient2d, InCircle};
use thiserror::Error;

/// A broken triangulation invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A half-edge slot is free or refers outside the arenas.
    #[error("half-edge {half_edge} is free or out of range")]
    UnboundHalfEdge {
        /// The offending slot.
        half_edge: HalfEdgeKey,
    },

    /// Following `next` three times does not return to the start.
    #[error("half-edge {half_edge} is not on a 3-cycle of next links")]
    BrokenNextCycle {
        /// The offending slot.
        half_edge: HalfEdgeKey,
    },

    /// `twin(twin(e))` is not `e`, or the twins disagree on endpoints.
    #[error("half-edge {half_edge} has an inconsistent twin link")]
    TwinMismatch {
        /// The offending slot.
        half_edge: HalfEdgeKey,
    },

    /// A triangle is not strictly CCW.
    #[error("triangle at half-edge {half_edge} is not strictly CCW")]
    NonPositiveTriangle {
        /// Entry half-edge of the offending triangle.
        half_edge: HalfEdgeKey,
    },

    /// A boundary half-edge does not lie on a side of the domain square.
    #[error("boundary half-edge {half_edge} leaves the domain square sides")]
    BoundaryOffSquare {
        /// The offending boundary half-edge.
        half_edge: HalfEdgeKey,
    },

    /// The boundary half-edges do not form a single closed cycle.
    #[error("boundary cycle covers {found} of {expected} boundary half-edges")]
    BoundaryCycleBroken {
        /// Number of boundary half-edges in the arena.
        expected: usize,
        /// Number reached from the first one along the outer face.
        found: usize,
    },

    /// A domain corner is missing from the boundary cycle.
    #[error("domain corner {corner} is not an origin on the boundary cycle")]
    MissingCorner {
        /// Index of the missing corner, 0–3.
        corner: usize,
    },

    /// `V - E + F` differs from 2.
    #[error("Euler characteristic violated: V={vertices}, E={edges}, F={faces}")]
    EulerCharacteristic {
        /// Vertex count.
        vertices: usize,
        /// Undirected edge count.
        edges: usize,
        /// Face count, including the outer face.
        faces: usize,
    },

    /// An interior edge violates the empty-circumcircle property.
    #[error("interior edge {half_edge} violates the empty-circumcircle property")]
    NonDelaunayEdge {
        /// The offending interior half-edge.
        half_edge: HalfEdgeKey,
    },
}

impl Triangulation {
    /// Checks every structural invariant, returning the first failure.
    ///
    /// Covers half-edge binding, triangle `next` cycles, twin symmetry,
    /// strict CCW orientation, the boundary contract, and the Euler
    /// characteristic. Does not include the global Delaunay scan; see
    /// [`Triangulation::validate_delaunay`].
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn is_valid(&self) -> Result<(), ValidationError> {
        self.validate_half_edges()?;
        self.validate_orientation()?;
        self.validate_boundary()?;
        self.validate_euler()
    }

    /// Checks that every half-edge is bound, in range, on a 3-cycle, and
    /// twin-symmetric.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnboundHalfEdge`],
    /// [`ValidationError::BrokenNextCycle`], or
    /// [`ValidationError::TwinMismatch`].
    pub fn validate_half_edges(&self) -> Result<(), ValidationError> {
        let he_count = self.half_edge_count() as u32;
        let vtx_count = self.vertex_count() as u32;

        for (i, he) in self.half_edges().iter().enumerate() {
            let key = HalfEdgeKey::new(i as u32);
            let in_range = he.origin().is_some()
                && he.origin().index() < vtx_count
                && he.next().is_some()
                && he.next().index() < he_count
                && (he.twin().is_none() || he.twin().index() < he_count);
            if !in_range {
                return Err(ValidationError::UnboundHalfEdge { half_edge: key });
            }
        }

        for (i, he) in self.half_edges().iter().enumerate() {
            let key = HalfEdgeKey::new(i as u32);
            if self.next(self.next(he.next())) != key {
                return Err(ValidationError::BrokenNextCycle { half_edge: key });
            }
            let twin = he.twin();
            if twin.is_some() {
                let counter_directed = self.twin(twin) == key
                    && self.origin(twin) == self.dest(key)
                    && self.dest(twin) == he.origin();
                if !counter_directed {
                    return Err(ValidationError::TwinMismatch { half_edge: key });
                }
            }
        }
        Ok(())
    }

    /// Checks that every triangle is strictly CCW.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonPositiveTriangle`].
    pub fn validate_orientation(&self) -> Result<(), ValidationError> {
        for i in 0..self.half_edge_count() {
            let key = HalfEdgeKey::new(i as u32);
            let a = self.position(self.origin(key));
            let b = self.position(self.dest(key));
            let c = self.position(self.origin(self.next(self.next(key))));
            if !orient2d(a, b, c).is_positive() {
                return Err(ValidationError::NonPositiveTriangle { half_edge: key });
            }
        }
        Ok(())
    }

    /// Checks the boundary contract: every boundary half-edge lies on a
    /// side of the domain square, the boundary forms one closed cycle, and
    /// all four corners sit on it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BoundaryOffSquare`],
    /// [`ValidationError::BoundaryCycleBroken`], or
    /// [`ValidationError::MissingCorner`].
    pub fn validate_boundary(&self) -> Result<(), ValidationError> {
        use crate::core::triangulation::DOMAIN_CORNERS;

        let expected = self
            .half_edges()
            .iter()
            .filter(|he| he.is_boundary())
            .count();

        let mut found = 0_usize;
        let mut corner_seen = [false; 4];
        for key in self.boundary_edges() {
            found += 1;
            let a = self.position(self.origin(key));
            let b = self.position(self.dest(key));
            let on_side = (a.y == 0 && b.y == 0)
                || (a.x == u32::MAX && b.x == u32::MAX)
                || (a.y == u32::MAX && b.y == u32::MAX)
                || (a.x == 0 && b.x == 0);
            if !on_side {
                return Err(ValidationError::BoundaryOffSquare { half_edge: key });
            }
            for (c, seen) in DOMAIN_CORNERS.iter().zip(&mut corner_seen) {
                if a == *c {
                    *seen = true;
                }
            }
        }

        if found != expected {
            return Err(ValidationError::BoundaryCycleBroken { expected, found });
        }
        if let Some(corner) = corner_seen.iter().position(|seen| !seen) {
            return Err(ValidationError::MissingCorner { corner });
        }
        Ok(())
    }

    /// Checks the Euler characteristic `V - E + F = 2`, counting the outer
    /// face.
    ///
    /// Every interior undirected edge carries two half-edges and every
    /// boundary edge one, so `E = (half_edges + boundary) / 2`; faces are
    /// `half_edges / 3` triangles plus the outer face.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EulerCharacteristic`].
    pub fn validate_euler(&self) -> Result<(), ValidationError> {
        let vertices = self.vertex_count();
        let half_edges = self.half_edge_count();
        let boundary = self
            .half_edges()
            .iter()
            .filter(|he| he.is_boundary())
            .count();

        let edges = (half_edges + boundary) / 2;
        let faces = half_edges / 3 + 1;
        let consistent = half_edges % 3 == 0
            && (half_edges + boundary) % 2 == 0
            && vertices + faces == edges + 2;
        if !consistent {
            return Err(ValidationError::EulerCharacteristic {
                vertices,
                edges,
                faces,
            });
        }
        Ok(())
    }

    /// Checks the empty-circumcircle property of every interior edge.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::NonDelaunayEdge`] for the first interior
    /// edge whose quadrilateral fails the exact in-circle test.
    pub fn validate_delaunay(&self) -> Result<(), ValidationError> {
        for i in 0..self.half_edge_count() {
            let key = HalfEdgeKey::new(i as u32);
            let twin = self.twin(key);
            // Each undirected edge is tested once, from its lower slot.
            if twin.is_none() || twin < key {
                continue;
            }
            let l0 = self.next(key);
            let l1 = self.next(l0);
            let l2 = self.next(twin);
            let l3 = self.next(l2);
            let status = in_circle(
                self.position(self.origin(l0)),
                self.position(self.origin(l1)),
                self.position(self.origin(l2)),
                self.position(self.origin(l3)),
            );
            if status == InCircle::INSIDE {
                return Err(ValidationError::NonDelaunayEdge { half_edge: key });
            }
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::point::Point;

    #[test]
    fn fresh_triangulation_is_valid() {
        let tri = Triangulation::new();
        assert!(tri.is_valid().is_ok());
        assert!(tri.validate_delaunay().is_ok());
    }

    #[test]
    fn validation_passes_after_each_kind_of_split() {
        let mut tri = Triangulation::new();
        for point in [
            Point::new(1 << 31, 1 << 31), // interior edge split on the diagonal
            Point::new(1 << 31, 0),       // boundary edge split
            Point::new(1 << 20, 1 << 30), // triangle split
        ] {
            tri.insert(point).unwrap();
            assert!(tri.is_valid().is_ok());
            assert!(tri.validate_delaunay().is_ok());
        }
    }

    #[test]
    fn corrupted_twin_is_reported() {
        let mut tri = Triangulation::new();
        // Sever one side of the diagonal twin pair by hand.
        tri.half_edges[2].twin = HalfEdgeKey::NONE;
        assert!(matches!(
            tri.validate_half_edges(),
            Err(ValidationError::TwinMismatch { .. })
        ));
    }

    #[test]
    fn corrupted_next_is_reported() {
        let mut tri = Triangulation::new();
        tri.half_edges[1].next = HalfEdgeKey::new(0);
        assert!(matches!(
            tri.validate_half_edges(),
            Err(ValidationError::BrokenNextCycle { .. })
        ));
    }

    #[test]
    fn free_slot_is_reported() {
        let mut tri = Triangulation::new();
        tri.alloc_half_edges(3);
        assert!(matches!(
            tri.is_valid(),
            Err(ValidationError::UnboundHalfEdge { .. })
        ));
    }

    #[test]
    fn euler_characteristic_of_small_meshes() {
        let mut tri = Triangulation::new();
        assert!(tri.validate_euler().is_ok());
        tri.insert(Point::new(12_345, 9)).unwrap();
        tri.insert(Point::new(1 << 31, 1 << 31)).unwrap();
        assert!(tri.validate_euler().is_ok());
    }
}
