//! Randomized invariant tests.
//!
//! Seeded pseudo-random insertion runs that re-check the full invariant set
//! (triangle cycles, twin symmetry, strict orientation, boundary closure,
//! Euler characteristic, and the empty-circumcircle property) either after
//! every insertion (small runs) or at a fixed cadence (large runs, where a
//! per-insertion scan would dominate the test time).

use lattice_delaunay::core::collections::FastHashSet;
use lattice_delaunay::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn assert_fully_valid(tri: &Triangulation) {
    tri.is_valid().unwrap();
    tri.validate_delaunay().unwrap();
}

#[test]
fn uniform_points_validated_after_every_insertion() {
    let mut rng = StdRng::seed_from_u64(0xDE1A);
    let mut tri = Triangulation::new();
    let mut edges = tri.half_edge_count();

    for i in 0..500 {
        let p = Point::new(rng.random::<u32>(), rng.random::<u32>());
        tri.insert(p)
            .unwrap_or_else(|e| panic!("insertion {i} of {p} failed: {e}"));
        assert!(tri.half_edge_count() >= edges, "half-edge count shrank");
        edges = tri.half_edge_count();
        assert_fully_valid(&tri);
    }
}

#[test]
fn clustered_points_validated_after_every_insertion() {
    // A tight cluster forces long walks and many flips through
    // near-degenerate quadrilaterals.
    let mut rng = StdRng::seed_from_u64(0xC1_0551);
    let mut tri = Triangulation::new();
    let center = 1_u32 << 31;

    for _ in 0..300 {
        let dx = rng.random_range(0..4096_u32);
        let dy = rng.random_range(0..4096_u32);
        tri.insert(Point::new(center + dx, center + dy)).unwrap();
        assert_fully_valid(&tri);
    }
}

#[test]
fn grid_points_with_many_collinear_and_cocircular_ties() {
    // A coarse lattice maximizes exact ties: collinear triples on every
    // row and column and cocircular quadruples on every grid square.
    let mut tri = Triangulation::new();
    let step = 1_u32 << 28;
    for i in 1..8 {
        for j in 1..8 {
            tri.insert(Point::new(i * step, j * step)).unwrap();
            assert_fully_valid(&tri);
        }
    }
    assert_eq!(tri.vertex_count(), 4 + 49);
}

#[test]
fn ten_thousand_points_validated_at_cadence() {
    const CADENCE: usize = 1000;
    let mut rng = StdRng::seed_from_u64(173);
    let mut tri = Triangulation::new();
    let mut distinct: FastHashSet<Point> = DOMAIN_CORNERS.iter().copied().collect();
    let mut edges = tri.half_edge_count();

    for i in 1..=10_000 {
        let p = Point::new(rng.random::<u32>(), rng.random::<u32>());
        distinct.insert(p);
        tri.insert(p).unwrap();
        assert!(tri.half_edge_count() >= edges, "half-edge count shrank");
        edges = tri.half_edge_count();
        if i % CADENCE == 0 {
            assert_fully_valid(&tri);
        }
    }

    // Exact duplicates collapse onto the existing vertex; everything else
    // allocates.
    assert_eq!(tri.vertex_count(), distinct.len());
    assert_fully_valid(&tri);
}

#[test]
fn boundary_heavy_run_keeps_the_square_closed() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut tri = Triangulation::new();

    for _ in 0..200 {
        let c = rng.random::<u32>();
        let p = match rng.random_range(0..4_u8) {
            0 => Point::new(c, 0),
            1 => Point::new(u32::MAX, c),
            2 => Point::new(c, u32::MAX),
            _ => Point::new(0, c),
        };
        tri.insert(p).unwrap();
        assert_fully_valid(&tri);
    }

    // Every distinct inserted point lies on the boundary, so the cycle
    // grew by exactly the number of fresh vertices.
    let boundary = tri.boundary_edges().count();
    assert_eq!(boundary, tri.vertex_count());
}
