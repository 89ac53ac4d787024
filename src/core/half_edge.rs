//! Directed half-edges and their arena keys.
//!
//! Three consecutive half-edges linked through `next` form one CCW
//! triangle; there is no explicit face record. The `twin` link pairs the two
//! directed sides of an interior edge and is [`HalfEdgeKey::NONE`] on the
//! outer boundary. A slot whose `origin` and `next` are both sentinels is
//! *free*: allocated but not yet wired into any triangle.

#![forbid(unsafe_code)]

use crate::core::vertex::VertexKey;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a half-edge in the triangulation arena.
///
/// Same representation contract as [`VertexKey`]: raw `u32` index with the
/// all-ones pattern reserved as the [`HalfEdgeKey::NONE`] sentinel.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct HalfEdgeKey(u32);

impl HalfEdgeKey {
    /// Sentinel for "no half-edge": a missing twin or a free slot.
    pub const NONE: Self = Self(u32::MAX);

    /// Wraps a raw arena index.
    ///
    /// The all-ones pattern yields [`HalfEdgeKey::NONE`].
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// `true` for the [`HalfEdgeKey::NONE`] sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// `true` for any key other than [`HalfEdgeKey::NONE`].
    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }

    /// The key `offset` slots after this one.
    ///
    /// Used to address the members of a freshly allocated burst.
    #[must_use]
    pub(crate) const fn offset(self, offset: u32) -> Self {
        Self(self.0 + offset)
    }
}

impl fmt::Display for HalfEdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "h-")
        } else {
            write!(f, "h{}", self.0)
        }
    }
}

/// A directed edge of the triangulation.
///
/// Carries the vertex at its origin, the next half-edge CCW around the
/// incident triangle, and the opposing half-edge of the adjacent triangle
/// (or [`HalfEdgeKey::NONE`] on the boundary). Fields are only ever mutated
/// through the surgery primitives in [`crate::core::operations`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HalfEdge {
    pub(crate) origin: VertexKey,
    pub(crate) next: HalfEdgeKey,
    pub(crate) twin: HalfEdgeKey,
}

impl HalfEdge {
    /// A free slot: allocated but not wired into any triangle.
    pub(crate) const FREE: Self = Self {
        origin: VertexKey::NONE,
        next: HalfEdgeKey::NONE,
        twin: HalfEdgeKey::NONE,
    };

    /// The vertex at the origin of this half-edge.
    #[must_use]
    pub const fn origin(&self) -> VertexKey {
        self.origin
    }

    /// The next half-edge CCW around the incident triangle.
    #[must_use]
    pub const fn next(&self) -> HalfEdgeKey {
        self.next
    }

    /// The opposing half-edge, or [`HalfEdgeKey::NONE`] on the boundary.
    #[must_use]
    pub const fn twin(&self) -> HalfEdgeKey {
        self.twin
    }

    /// `true` when this half-edge lies on the outer boundary.
    #[must_use]
    pub const fn is_boundary(&self) -> bool {
        self.twin.is_none()
    }

    /// `true` for a slot in the free state.
    #[must_use]
    pub(crate) const fn is_free(&self) -> bool {
        self.origin.is_none() && self.next.is_none() && self.twin.is_none()
    }
}
