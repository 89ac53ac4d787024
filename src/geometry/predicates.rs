//! Exact geometric predicates on lattice points.
//!
//! Both predicates decide the sign of an integer polynomial in the input
//! coordinates, evaluated in the multi-word arithmetic of
//! [`crate::geometry::bigint`]. Every branch the triangulation takes
//! (walking, containment classification, flip decisions) reduces to one of
//! these signs, so the results are exact for the full `u32` coordinate range
//! and the triangulation is deterministic for any input sequence.
//!
//! The in-circle test uses the angle-sum formulation
//! `sin(∠123)·cos(∠341) + cos(∠123)·sin(∠341)` expanded symbolically to
//! integer products. Compared with the textbook 4×4 determinant this keeps
//! every factor at 67 bits and the whole test within a 4-word product for
//! 32-bit inputs, instead of growing cubic terms in the coordinates.

#![forbid(unsafe_code)]

use crate::geometry::bigint::FixedInt;
use crate::geometry::point::Point;
use std::fmt;

/// Orientation of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The triple winds clockwise (negative signed area).
    NEGATIVE,
    /// The points are collinear.
    DEGENERATE,
    /// The triple winds counter-clockwise (positive signed area).
    POSITIVE,
}

impl Orientation {
    /// Maps the sign of a signed area to an orientation.
    #[must_use]
    pub const fn from_sign(sign: i32) -> Self {
        match sign {
            s if s < 0 => Self::NEGATIVE,
            0 => Self::DEGENERATE,
            _ => Self::POSITIVE,
        }
    }

    /// `true` for [`Orientation::POSITIVE`].
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::POSITIVE)
    }

    /// `true` for [`Orientation::NEGATIVE`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Self::NEGATIVE)
    }

    /// `true` for [`Orientation::DEGENERATE`].
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        matches!(self, Self::DEGENERATE)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Position of the fourth quadrilateral vertex relative to the circumcircle
/// of the first three.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InCircle {
    /// Strictly outside the circumcircle: the shared diagonal is Delaunay.
    OUTSIDE,
    /// Cocircular: either diagonal is admissible; treated as Delaunay.
    BOUNDARY,
    /// Strictly inside the circumcircle: the shared diagonal must be
    /// flipped.
    INSIDE,
}

impl InCircle {
    /// `true` when the tested diagonal satisfies the empty-circumcircle
    /// property (cocircular configurations count as satisfying it).
    #[must_use]
    pub const fn is_delaunay(self) -> bool {
        !matches!(self, Self::INSIDE)
    }
}

impl fmt::Display for InCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OUTSIDE => write!(f, "OUTSIDE"),
            Self::BOUNDARY => write!(f, "BOUNDARY"),
            Self::INSIDE => write!(f, "INSIDE"),
        }
    }
}

/// Widens a coordinate product into a 2-word accumulator.
fn product(a: u32, b: u32) -> FixedInt<2> {
    FixedInt::from_unsigned(u64::from(a) * u64::from(b))
}

/// Exact orientation of the triple `(p1, p2, p3)`.
///
/// Decides the sign of `(x1·y2 + x2·y3 + x3·y1) − (x1·y3 + x2·y1 + x3·y2)`,
/// twice the signed area of the triangle. Each summand is a 64-bit product;
/// the three-term sums fit in 66 bits, so a 2-word accumulator never wraps.
///
/// # Examples
///
/// ```
/// use lattice_delaunay::geometry::point::Point;
/// use lattice_delaunay::geometry::predicates::{orient2d, Orientation};
///
/// let a = Point::new(0, 0);
/// let b = Point::new(10, 0);
/// let c = Point::new(0, 10);
/// assert_eq!(orient2d(a, b, c), Orientation::POSITIVE);
/// assert_eq!(orient2d(b, a, c), Orientation::NEGATIVE);
/// assert_eq!(orient2d(a, b, Point::new(20, 0)), Orientation::DEGENERATE);
/// ```
#[must_use]
pub fn orient2d(p1: Point, p2: Point, p3: Point) -> Orientation {
    let a = product(p1.x, p2.y) + product(p2.x, p3.y) + product(p3.x, p1.y);
    let b = product(p1.x, p3.y) + product(p2.x, p1.y) + product(p3.x, p2.y);
    debug_assert!(a.fits_unsigned(66));
    debug_assert!(b.fits_unsigned(66));

    Orientation::from_sign((a - b).signum())
}

/// Exact in-circle test for the diagonal `p1–p3` of the convex
/// quadrilateral `p1 p2 p3 p4` (vertices in CCW order).
///
/// Decides the sign of `sin(∠123)·cos(∠341) + cos(∠123)·sin(∠341)`, the sine
/// of the angle sum at `p2` and `p4`, expanded to integer arithmetic. The
/// sign is negative exactly when that angle sum exceeds π, i.e. when `p4`
/// lies strictly inside the circumcircle of `(p1, p2, p3)` and the diagonal
/// has to be flipped.
///
/// Each sin/cos factor is a 67-bit signed 2-word value; the two
/// cross-products and their sum are 4-word signed values whose sign is the
/// answer.
///
/// # Examples
///
/// ```
/// use lattice_delaunay::geometry::point::Point;
/// use lattice_delaunay::geometry::predicates::{in_circle, InCircle};
///
/// // Four corners of a square are cocircular.
/// let status = in_circle(
///     Point::new(0, 0),
///     Point::new(4, 0),
///     Point::new(4, 4),
///     Point::new(0, 4),
/// );
/// assert_eq!(status, InCircle::BOUNDARY);
/// assert!(status.is_delaunay());
/// ```
#[must_use]
pub fn in_circle(p1: Point, p2: Point, p3: Point, p4: Point) -> InCircle {
    // sin_123 = (x3y1 + x1y2 + x2y3) - (x2y1 + x3y2 + x1y3)
    let sin_123_a = product(p3.x, p1.y) + product(p1.x, p2.y) + product(p2.x, p3.y);
    let sin_123_b = product(p2.x, p1.y) + product(p3.x, p2.y) + product(p1.x, p3.y);
    debug_assert!(sin_123_a.fits_unsigned(66));
    debug_assert!(sin_123_b.fits_unsigned(66));
    let sin_123 = sin_123_a - sin_123_b;

    // sin_341 = (x4y1 + x1y3 + x3y4) - (x4y3 + x1y4 + x3y1)
    let sin_341_a = product(p4.x, p1.y) + product(p1.x, p3.y) + product(p3.x, p4.y);
    let sin_341_b = product(p4.x, p3.y) + product(p1.x, p4.y) + product(p3.x, p1.y);
    debug_assert!(sin_341_a.fits_unsigned(66));
    debug_assert!(sin_341_b.fits_unsigned(66));
    let sin_341 = sin_341_a - sin_341_b;

    // cos_123 = (x2^2 + x1x3 + y2^2 + y1y3) - (y2y3 + x1x2 + x2x3 + y1y2)
    let cos_123_a = product(p2.x, p2.x) + product(p1.x, p3.x)
        + (product(p2.y, p2.y) + product(p1.y, p3.y));
    let cos_123_b = product(p2.y, p3.y) + product(p1.x, p2.x)
        + (product(p2.x, p3.x) + product(p1.y, p2.y));
    debug_assert!(cos_123_a.fits_unsigned(66));
    debug_assert!(cos_123_b.fits_unsigned(66));
    let cos_123 = cos_123_a - cos_123_b;

    // cos_341 = (x1x3 + x4^2 + y1y3 + y4^2) - (y1y4 + y3y4 + x1x4 + x3x4)
    let cos_341_a = product(p1.x, p3.x) + product(p4.x, p4.x)
        + (product(p1.y, p3.y) + product(p4.y, p4.y));
    let cos_341_b = product(p1.y, p4.y) + product(p3.y, p4.y)
        + (product(p1.x, p4.x) + product(p3.x, p4.x));
    debug_assert!(cos_341_a.fits_unsigned(66));
    debug_assert!(cos_341_b.fits_unsigned(66));
    let cos_341 = cos_341_a - cos_341_b;

    let test = sin_123.widening_mul_signed(cos_341) + cos_123.widening_mul_signed(sin_341);

    match test.signum() {
        s if s < 0 => InCircle::INSIDE,
        0 => InCircle::BOUNDARY,
        _ => InCircle::OUTSIDE,
    }
}

// =============================================================================
// TESTS
// =============================================================================
