//! The triangulation arena and its public read interface.
//!
//! A [`Triangulation`] owns two growable arenas, one of vertices and one of
//! half-edges, and hands out [`VertexKey`]/[`HalfEdgeKey`] indices into
//! them. Keys are
//! stable for the lifetime of the structure: arena growth may move storage
//! but never renumbers a slot, vertices are append-only, and half-edge slots
//! are rewritten in place by the surgery operations rather than freed.
//!
//! The structure is single-threaded and synchronous. Every public operation
//! runs to completion; a failed insertion leaves the mesh exactly as it was.

#![forbid(unsafe_code)]

use crate::core::algorithms::insertion::{self, InsertionError};
use crate::core::algorithms::locate::{self, LocateError, LocateResult};
use crate::core::half_edge::{HalfEdge, HalfEdgeKey};
use crate::core::vertex::{Vertex, VertexKey};
use crate::geometry::point::Point;
use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use thiserror::Error;

/// Corner positions of the domain square, in CCW order starting at the
/// origin. These are part of the construction contract: a fresh
/// triangulation holds exactly these four vertices under keys 0 through 3.
pub const DOMAIN_CORNERS: [Point; 4] = [
    Point::new(0, 0),
    Point::new(u32::MAX, 0),
    Point::new(u32::MAX, u32::MAX),
    Point::new(0, u32::MAX),
];

/// Floor on every arena growth step, in elements.
const GROWTH_FLOOR: u64 = 1024;

/// Arena-level failure while growing the triangulation.
#[derive(Debug, Error)]
pub enum TriangulationError {
    /// Growing further would need keys at or above the sentinel index.
    #[error("{arena} arena cannot grow to {required} slots; keys are capped below {cap}", cap = u32::MAX)]
    CapacityExhausted {
        /// Which arena hit the cap.
        arena: &'static str,
        /// Total slot count that was requested.
        required: u64,
    },

    /// The allocator refused to grow an arena.
    #[error("arena allocation failed: {source}")]
    Allocation {
        /// The underlying reservation error.
        #[from]
        source: TryReserveError,
    },
}

/// An incremental Delaunay triangulation of the `u32` lattice square.
///
/// Constructed with the four domain corners and two seed triangles, then
/// grown one point at a time with [`Triangulation::insert`]. After every
/// successful insertion the mesh satisfies the empty-circumcircle property;
/// [`Triangulation::is_valid`] and [`Triangulation::validate_delaunay`]
/// check the full invariant set.
///
/// # Examples
///
/// ```
/// use lattice_delaunay::prelude::*;
///
/// let mut tri = Triangulation::new();
/// assert_eq!(tri.vertex_count(), 4);
/// assert_eq!(tri.half_edge_count(), 6);
///
/// let v = tri.insert(Point::new(1 << 31, 1 << 30)).unwrap();
/// assert_eq!(v.index(), 4);
/// assert!(tri.is_valid().is_ok());
/// assert!(tri.validate_delaunay().is_ok());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Triangulation {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) half_edges: Vec<HalfEdge>,
}

impl Triangulation {
    /// Creates the two-triangle triangulation of the domain square.
    ///
    /// The corners of [`DOMAIN_CORNERS`] become vertices 0–3 and the square
    /// is split into the triangles `(0, 1, 2)` and `(2, 3, 0)` along the
    /// diagonal `0↔2`: six half-edges, four on the boundary, one interior
    /// twin pair.
    #[must_use]
    pub fn new() -> Self {
        let mut tri = Self {
            vertices: Vec::with_capacity(GROWTH_FLOOR as usize),
            half_edges: Vec::with_capacity(GROWTH_FLOOR as usize),
        };

        let corners = DOMAIN_CORNERS.map(|p| tri.alloc_vertex(p));
        let h = tri.alloc_half_edges(6);

        tri.connect_triangle(
            (h, HalfEdgeKey::NONE, corners[0]),
            (h.offset(1), HalfEdgeKey::NONE, corners[1]),
            (h.offset(2), HalfEdgeKey::NONE, corners[2]),
        );
        tri.connect_triangle(
            (h.offset(3), HalfEdgeKey::NONE, corners[2]),
            (h.offset(4), HalfEdgeKey::NONE, corners[3]),
            (h.offset(5), h.offset(2), corners[0]),
        );

        tri
    }

    // -------------------------------------------------------------------------
    // Read access

    /// Number of vertices in the arena.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of half-edges in the arena.
    #[must_use]
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// All vertices, indexed by key.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All half-edges, indexed by key.
    #[must_use]
    pub fn half_edges(&self) -> &[HalfEdge] {
        &self.half_edges
    }

    /// The vertex under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn vertex(&self, key: VertexKey) -> &Vertex {
        &self.vertices[key.index() as usize]
    }

    /// The half-edge under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn half_edge(&self, key: HalfEdgeKey) -> &HalfEdge {
        &self.half_edges[key.index() as usize]
    }

    /// Position of the vertex under `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn position(&self, key: VertexKey) -> Point {
        self.vertex(key).point()
    }

    /// Origin vertex of a half-edge.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn origin(&self, key: HalfEdgeKey) -> VertexKey {
        self.half_edge(key).origin()
    }

    /// Destination vertex of a half-edge: the origin of its successor.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn dest(&self, key: HalfEdgeKey) -> VertexKey {
        self.origin(self.next(key))
    }

    /// Successor of a half-edge CCW around its triangle.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn next(&self, key: HalfEdgeKey) -> HalfEdgeKey {
        self.half_edge(key).next()
    }

    /// Twin of a half-edge; [`HalfEdgeKey::NONE`] on the boundary.
    ///
    /// # Panics
    ///
    /// Panics if `key` is the sentinel or outside the arena.
    #[must_use]
    pub fn twin(&self, key: HalfEdgeKey) -> HalfEdgeKey {
        self.half_edge(key).twin()
    }

    /// Iterates the outer boundary cycle in CCW order.
    ///
    /// Yields every half-edge whose twin is [`HalfEdgeKey::NONE`], starting
    /// from the lowest-numbered one and following the outer face.
    #[must_use]
    pub fn boundary_edges(&self) -> BoundaryEdges<'_> {
        let start = self
            .half_edges
            .iter()
            .position(HalfEdge::is_boundary)
            .map_or(HalfEdgeKey::NONE, |i| HalfEdgeKey::new(i as u32));
        BoundaryEdges {
            tri: self,
            start,
            current: start,
            remaining: self.half_edge_count(),
        }
    }

    /// Number of undirected edges incident to `vertex`.
    ///
    /// Counts outgoing half-edges, plus the one incoming boundary edge when
    /// the vertex lies on the outer boundary. Linear in the arena size; the
    /// data model keeps no per-vertex edge pointer.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is the sentinel or outside the arena.
    #[must_use]
    pub fn vertex_degree(&self, vertex: VertexKey) -> usize {
        assert!((vertex.index() as usize) < self.vertices.len());
        self.half_edges
            .iter()
            .enumerate()
            .filter(|(i, he)| {
                he.origin() == vertex
                    || (he.is_boundary() && self.dest(HalfEdgeKey::new(*i as u32)) == vertex)
            })
            .count()
    }

    // -------------------------------------------------------------------------
    // Mutation entry points

    /// Inserts a point, restoring the Delaunay property.
    ///
    /// Returns the new vertex key, or the existing key when `point`
    /// coincides with a vertex already in the mesh (including the four
    /// corners). The whole `u32` lattice lies inside the domain square, so
    /// every point is insertable.
    ///
    /// # Errors
    ///
    /// Returns an error if the point cannot be located
    /// ([`InsertionError::Location`]) or an arena cannot grow
    /// ([`InsertionError::Triangulation`]). On error the mesh is unchanged.
    pub fn insert(&mut self, point: Point) -> Result<VertexKey, InsertionError> {
        insertion::insert_vertex(self, point)
    }

    /// Locates `point`, classifying it against the containing triangle.
    ///
    /// # Errors
    ///
    /// Returns [`LocateError`] when the walk exceeds its defensive step
    /// bound or reaches a degenerate configuration; neither occurs on a
    /// valid mesh.
    pub fn locate(&self, point: Point) -> Result<LocateResult, LocateError> {
        locate::locate(self, point, HalfEdgeKey::new(0))
    }

    // -------------------------------------------------------------------------
    // Arena management

    /// Ensures capacity for `extra` more vertices.
    pub(crate) fn reserve_vertices(&mut self, extra: usize) -> Result<(), TriangulationError> {
        reserve(&mut self.vertices, extra, "vertex")
    }

    /// Ensures capacity for `extra` more half-edges.
    pub(crate) fn reserve_half_edges(&mut self, extra: usize) -> Result<(), TriangulationError> {
        reserve(&mut self.half_edges, extra, "half-edge")
    }

    /// Appends a vertex. Capacity must have been reserved.
    pub(crate) fn alloc_vertex(&mut self, point: Point) -> VertexKey {
        debug_assert!((self.vertices.len() as u64) < u64::from(u32::MAX));
        let key = VertexKey::new(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(point));
        key
    }

    /// Appends `count` free half-edge slots, returning the first key.
    /// Capacity must have been reserved.
    pub(crate) fn alloc_half_edges(&mut self, count: u32) -> HalfEdgeKey {
        debug_assert!(count > 0);
        debug_assert!(self.half_edges.len() as u64 + u64::from(count) < u64::from(u32::MAX));
        let first = HalfEdgeKey::new(self.half_edges.len() as u32);
        self.half_edges
            .extend(std::iter::repeat(HalfEdge::FREE).take(count as usize));
        first
    }
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Grows `arena` so it can hold `extra` more elements.
///
/// Growth steps are `max(required, GROWTH_FLOOR, capacity / 2)` additional
/// slots, capped at the sentinel index, so insertion cost stays amortized
/// O(1) while keys remain representable.
fn reserve<T>(
    arena: &mut Vec<T>,
    extra: usize,
    name: &'static str,
) -> Result<(), TriangulationError> {
    let required = arena.len() as u64 + extra as u64;
    if required >= u64::from(u32::MAX) {
        return Err(TriangulationError::CapacityExhausted {
            arena: name,
            required,
        });
    }
    let allocated = arena.capacity() as u64;
    if required > allocated {
        let grow = required.max(GROWTH_FLOOR).max((allocated + 1) / 2);
        let target = (allocated + grow).min(u64::from(u32::MAX) - 1);
        debug_assert!(required <= target);
        arena.try_reserve_exact((target - arena.len() as u64) as usize)?;
    }
    Ok(())
}

/// Iterator over the outer boundary cycle. See
/// [`Triangulation::boundary_edges`].
#[derive(Debug)]
pub struct BoundaryEdges<'a> {
    tri: &'a Triangulation,
    start: HalfEdgeKey,
    current: HalfEdgeKey,
    /// Step guard: a valid boundary cycle is no longer than the arena.
    remaining: usize,
}

impl Iterator for BoundaryEdges<'_> {
    type Item = HalfEdgeKey;

    fn next(&mut self) -> Option<HalfEdgeKey> {
        if self.current.is_none() || self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let yielded = self.current;

        // Successor on the outer face: rotate around the destination vertex
        // until the outgoing boundary edge comes up.
        let mut succ = self.tri.next(yielded);
        while self.tri.twin(succ).is_some() {
            succ = self.tri.next(self.tri.twin(succ));
        }
        self.current = if succ == self.start {
            HalfEdgeKey::NONE
        } else {
            succ
        };
        Some(yielded)
    }
}

// =============================================================================
// TESTS
// =============================================================================
