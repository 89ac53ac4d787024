//! Half-edge surgery primitives.
//!
//! These four operations are the only code allowed to mutate the `next` and
//! `twin` fields of a half-edge; every higher-level mutation (triangle
//! split, edge split, flip) is a composition of them. Each connect requires
//! its slot to be in the free state and each disconnect returns it there,
//! severing the twin link symmetrically, so a partially rewired mesh is
//! caught immediately in debug builds.
//!
//! Twin wiring protocol: when two slots touched by the same composite
//! operation pair up, only the one connected *later* names the other as
//! `twin`; the earlier one is connected with the sentinel and
//! `connect_half_edge` writes the back-link.

#![forbid(unsafe_code)]

use crate::core::half_edge::{HalfEdge, HalfEdgeKey};
use crate::core::triangulation::Triangulation;
use crate::core::vertex::VertexKey;
use crate::geometry::predicates::orient2d;

impl Triangulation {
    /// Wires a free slot into a triangle: sets origin and successor, and
    /// cross-links the twin when one is given.
    pub(crate) fn connect_half_edge(
        &mut self,
        key: HalfEdgeKey,
        next: HalfEdgeKey,
        twin: HalfEdgeKey,
        origin: VertexKey,
    ) {
        debug_assert!(key.is_some() && next.is_some() && origin.is_some());
        let slot = &mut self.half_edges[key.index() as usize];
        debug_assert!(slot.is_free());
        slot.origin = origin;
        slot.next = next;
        if twin.is_some() {
            slot.twin = twin;
            let opposite = &mut self.half_edges[twin.index() as usize];
            debug_assert!(opposite.twin.is_none());
            opposite.twin = key;
        }
    }

    /// Returns a slot to the free state, severing its twin link on both
    /// sides.
    pub(crate) fn disconnect_half_edge(&mut self, key: HalfEdgeKey) {
        let twin = self.half_edges[key.index() as usize].twin;
        if twin.is_some() {
            self.half_edges[twin.index() as usize].twin = HalfEdgeKey::NONE;
        }
        self.half_edges[key.index() as usize] = HalfEdge::FREE;
    }

    /// Wires three free slots into one CCW triangle.
    ///
    /// Each argument is `(slot, twin, origin)`. The triangle must be
    /// strictly CCW; a zero-area triangle is never created.
    pub(crate) fn connect_triangle(
        &mut self,
        (e0, twin0, v0): (HalfEdgeKey, HalfEdgeKey, VertexKey),
        (e1, twin1, v1): (HalfEdgeKey, HalfEdgeKey, VertexKey),
        (e2, twin2, v2): (HalfEdgeKey, HalfEdgeKey, VertexKey),
    ) {
        debug_assert!(
            orient2d(self.position(v0), self.position(v1), self.position(v2)).is_positive(),
            "triangle ({v0}, {v1}, {v2}) is not strictly CCW",
        );

        self.connect_half_edge(e0, e1, twin0, v0);
        self.connect_half_edge(e1, e2, twin1, v1);
        self.connect_half_edge(e2, e0, twin2, v2);
    }

    /// Disconnects the triangle containing `e0`, freeing all three slots.
    pub(crate) fn disconnect_triangle(&mut self, e0: HalfEdgeKey) {
        let e1 = self.next(e0);
        let e2 = self.next(e1);
        self.disconnect_half_edge(e0);
        self.disconnect_half_edge(e1);
        self.disconnect_half_edge(e2);
    }
}

// =============================================================================
// TESTS
// =============================================================================
