//! Lattice points for the triangulation domain.
//!
//! Coordinates are unsigned 32-bit integers and the domain is the full
//! square `[0, 2^32 - 1]^2`. Coordinates are exact; no floating point
//! appears anywhere in a geometric decision, which is what makes the
//! predicates in [`crate::geometry::predicates`] total and deterministic.

#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the `u32` lattice.
///
/// # Examples
///
/// ```
/// use lattice_delaunay::geometry::point::Point;
///
/// let p = Point::new(7, u32::MAX);
/// assert_eq!(p.x, 7);
/// assert_eq!(format!("{p}"), "(7, 4294967295)");
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: u32,
    /// Vertical coordinate.
    pub y: u32,
}

impl Point {
    /// Creates a point from its coordinates.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}
