//! Triangulation vertices and their arena keys.
//!
//! Vertices are append-only: once allocated, a vertex keeps its key and its
//! position for the lifetime of the triangulation. All references between
//! mesh elements are arena keys, never pointers, so arena growth can move
//! storage without invalidating anything a caller holds.

#![forbid(unsafe_code)]

use crate::geometry::point::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key of a vertex in the triangulation arena.
///
/// The raw index is a `u32`; the all-ones pattern is reserved as the
/// [`VertexKey::NONE`] sentinel and is never a valid arena slot, which caps
/// the arena at `u32::MAX - 1` addressable vertices.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct VertexKey(u32);

impl VertexKey {
    /// Sentinel for "no vertex"; marks free half-edge slots.
    pub const NONE: Self = Self(u32::MAX);

    /// Wraps a raw arena index.
    ///
    /// The all-ones pattern yields [`VertexKey::NONE`].
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Raw arena index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }

    /// `true` for the [`VertexKey::NONE`] sentinel.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// `true` for any key other than [`VertexKey::NONE`].
    #[must_use]
    pub const fn is_some(self) -> bool {
        !self.is_none()
    }
}

impl fmt::Display for VertexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "v-")
        } else {
            write!(f, "v{}", self.0)
        }
    }
}

/// A vertex of the triangulation.
///
/// Wraps one immutable [`Point`]. The four corner vertices of the domain
/// square always occupy keys 0 through 3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vertex {
    point: Point,
}

impl Vertex {
    /// Creates a vertex at `point`.
    #[must_use]
    pub(crate) const fn new(point: Point) -> Self {
        Self { point }
    }

    /// The vertex position.
    #[must_use]
    pub const fn point(&self) -> Point {
        self.point
    }
}
