//! Property-based tests for the exact predicates and the integer kernel.
//!
//! The orientation predicate has an independent oracle: the signed area
//! doubled fits comfortably in `i128`, so a direct computation checks every
//! multi-word path. The in-circle test outgrows `i128`, so it is checked
//! against its algebraic symmetries and hand-verifiable configurations
//! instead. The kernel's widening multiply is checked against native
//! 128-bit products.

use lattice_delaunay::prelude::*;
use proptest::prelude::*;

/// Strategy for an arbitrary lattice point over the full domain.
fn lattice_point() -> impl Strategy<Value = Point> {
    (any::<u32>(), any::<u32>()).prop_map(|(x, y)| Point::new(x, y))
}

fn sign_of(o: Orientation) -> i32 {
    match o {
        Orientation::NEGATIVE => -1,
        Orientation::DEGENERATE => 0,
        Orientation::POSITIVE => 1,
    }
}

/// Independent orientation oracle: twice the signed area in `i128`.
fn orient2d_oracle(a: Point, b: Point, c: Point) -> i32 {
    let (ax, ay) = (i128::from(a.x), i128::from(a.y));
    let (bx, by) = (i128::from(b.x), i128::from(b.y));
    let (cx, cy) = (i128::from(c.x), i128::from(c.y));
    let det = (bx - ax) * (cy - ay) - (cx - ax) * (by - ay);
    match det.cmp(&0) {
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Greater => 1,
    }
}

proptest! {
    #[test]
    fn prop_orient2d_matches_i128_oracle(
        a in lattice_point(),
        b in lattice_point(),
        c in lattice_point(),
    ) {
        prop_assert_eq!(sign_of(orient2d(a, b, c)), orient2d_oracle(a, b, c));
    }

    #[test]
    fn prop_orient2d_antisymmetry(
        a in lattice_point(),
        b in lattice_point(),
        c in lattice_point(),
    ) {
        prop_assert_eq!(sign_of(orient2d(a, b, c)), -sign_of(orient2d(b, a, c)));
    }

    #[test]
    fn prop_orient2d_cyclic_invariance(
        a in lattice_point(),
        b in lattice_point(),
        c in lattice_point(),
    ) {
        let abc = orient2d(a, b, c);
        prop_assert_eq!(abc, orient2d(b, c, a));
        prop_assert_eq!(abc, orient2d(c, a, b));
    }

    /// Exact collinearity: zero iff the i128 determinant is zero, which a
    /// scaled segment construction hits on purpose.
    #[test]
    fn prop_orient2d_collinear_iff_zero(
        a in lattice_point(),
        step_x in 0_u32..1024,
        step_y in 0_u32..1024,
        scale in 1_u32..1024,
    ) {
        let b = Point::new(
            a.x.saturating_add(step_x),
            a.y.saturating_add(step_y),
        );
        let c = Point::new(
            a.x.saturating_add(step_x.saturating_mul(scale)),
            a.y.saturating_add(step_y.saturating_mul(scale)),
        );
        // Unless saturation bent the segment, a, b, c are collinear.
        if orient2d_oracle(a, b, c) == 0 {
            prop_assert!(orient2d(a, b, c).is_degenerate());
        } else {
            prop_assert!(!orient2d(a, b, c).is_degenerate());
        }
    }

    /// Swapping the roles of the two triangles leaves the verdict intact:
    /// the expansion is symmetric under (p1 p3)(p2 p4).
    #[test]
    fn prop_in_circle_opposite_triangle_symmetry(
        p1 in lattice_point(),
        p2 in lattice_point(),
        p3 in lattice_point(),
        p4 in lattice_point(),
    ) {
        prop_assert_eq!(in_circle(p1, p2, p3, p4), in_circle(p3, p4, p1, p2));
    }

    /// Any axis-aligned rectangle is a cocircular quadrilateral.
    #[test]
    fn prop_in_circle_rectangle_is_cocircular(
        x0 in any::<u32>(),
        y0 in any::<u32>(),
        w in 1_u32..=u16::MAX as u32,
        h in 1_u32..=u16::MAX as u32,
    ) {
        prop_assume!(x0.checked_add(w).is_some() && y0.checked_add(h).is_some());
        let status = in_circle(
            Point::new(x0, y0),
            Point::new(x0 + w, y0),
            Point::new(x0 + w, y0 + h),
            Point::new(x0, y0 + h),
        );
        prop_assert_eq!(status, InCircle::BOUNDARY);
    }

    #[test]
    fn prop_widening_mul_matches_i128(x in any::<i64>(), y in any::<i64>()) {
        let product = FixedInt::<2>::from_signed(x).widening_mul_signed(FixedInt::from_signed(y));
        let expected = i128::from(x) * i128::from(y);
        let words = product.words();
        prop_assert_eq!(words[0], expected as u64);
        prop_assert_eq!(words[1], (expected >> 64) as u64);
        let extension = if expected < 0 { u64::MAX } else { 0 };
        prop_assert_eq!(words[2], extension);
        prop_assert_eq!(words[3], extension);
        prop_assert_eq!(i128::from(product.signum()), expected.signum());
    }

    #[test]
    fn prop_add_sub_round_trip(x in any::<i64>(), y in any::<i64>()) {
        let a = FixedInt::<2>::from_signed(x);
        let b = FixedInt::<2>::from_signed(y);
        prop_assert_eq!(a + b - b, a);
        prop_assert_eq!((a - a).signum(), 0);
    }
}
