//! # lattice-delaunay
//!
//! Incremental 2D [Delaunay triangulation](https://en.wikipedia.org/wiki/Delaunay_triangulation)
//! of integer points over the full `u32` lattice square.
//!
//! # Features
//!
//! - Incremental insertion with flip-based Delaunay repair
//! - Half-edge mesh with arena-allocated, index-stable elements
//! - Exact multi-word integer predicates: every geometric decision is the
//!   sign of an integer expression, so results are deterministic and robust
//!   for every coordinate configuration in the domain
//! - Point location by directed walk with exact containment classification
//! - Structural and Delaunay validation helpers
//! - Serialization/Deserialization with [serde](https://serde.rs)
//!
//! # Basic Usage
//!
//! The triangulation starts as the domain square (four corner vertices and
//! two seed triangles) and grows one point at a time:
//!
//! ```rust
//! use lattice_delaunay::prelude::*;
//!
//! let mut tri = Triangulation::new();
//! assert_eq!(tri.vertex_count(), 4);
//!
//! // Insert a few points; every insertion re-establishes the Delaunay
//! // property before returning.
//! let a = tri.insert(Point::new(1 << 31, 1 << 30)).unwrap();
//! let b = tri.insert(Point::new(1 << 30, 1 << 31)).unwrap();
//! assert_ne!(a, b);
//!
//! // Inserting a coincident point returns the existing vertex.
//! assert_eq!(tri.insert(Point::new(1 << 31, 1 << 30)).unwrap(), a);
//!
//! // Read access goes through stable keys.
//! assert_eq!(tri.position(a), Point::new(1 << 31, 1 << 30));
//! assert!(tri.is_valid().is_ok());
//! assert!(tri.validate_delaunay().is_ok());
//! ```
//!
//! # Triangulation Invariants
//!
//! After every successful insertion the mesh satisfies:
//!
//! - **Triangle cycles** – every half-edge closes a 3-cycle of `next`
//!   links.
//! - **Twin symmetry** – twins are mutual and counter-directed over the
//!   same endpoints.
//! - **Strict orientation** – every triangle is strictly CCW; no zero-area
//!   triangle is ever created.
//! - **Boundary closure** – the boundary half-edges form one closed CCW
//!   cycle along the four sides of the domain square.
//! - **Empty circumcircle** – no interior edge's quadrilateral violates the
//!   exact in-circle test.
//! - **Key stability** – vertex keys are never reused and half-edge slots
//!   are rewritten in place, never freed.
//!
//! [`core::triangulation::Triangulation::is_valid`] checks the structural
//! invariants and [`core::triangulation::Triangulation::validate_delaunay`]
//! the geometric one; both are exercised after every insertion in the test
//! suite.
//!
//! # Exactness
//!
//! Coordinates are `u32` and all predicates are evaluated in fixed-width
//! multi-word integer arithmetic ([`geometry::bigint`]): a 2-word
//! accumulator for orientation signs and a 4-word product for the in-circle
//! test. There is no floating point anywhere in a decision, and therefore
//! no tolerance tuning and no near-degeneracy failure mode; cocircular
//! configurations are resolved deterministically as "do not flip".

// Forbid unsafe code throughout the entire crate
#![forbid(unsafe_code)]

/// Primary data structures and algorithms for building and querying the
/// triangulation: the arena, the half-edge surgery primitives, point
/// location, insertion, and flip-based Delaunay repair.
pub mod core {
    /// Triangulation algorithms: location, insertion, and repair.
    pub mod algorithms {
        /// Delaunay repair by edge-flip propagation.
        pub(crate) mod flips;
        /// The incremental insertion driver and split operations.
        pub mod insertion;
        /// Point location by directed walk.
        pub mod locate;
        pub use insertion::*;
        pub use locate::*;
    }
    /// Collection aliases for the triangulation internals.
    pub mod collections;
    pub mod half_edge;
    pub mod operations;
    pub mod triangulation;
    pub mod validation;
    pub mod vertex;
    // Re-export the `core` modules.
    pub use half_edge::*;
    pub use triangulation::*;
    pub use validation::*;
    pub use vertex::*;
}

/// Geometric types and exact predicates: lattice points, the multi-word
/// integer kernel, and the orientation / in-circle tests built on it.
pub mod geometry {
    pub mod bigint;
    pub mod point;
    pub mod predicates;
    pub use bigint::*;
    pub use point::*;
    pub use predicates::*;
}

/// A prelude module that re-exports the commonly used types.
pub mod prelude {
    pub use crate::core::{
        algorithms::{InsertionError, LocateError, LocateResult},
        half_edge::{HalfEdge, HalfEdgeKey},
        triangulation::{Triangulation, TriangulationError, DOMAIN_CORNERS},
        validation::ValidationError,
        vertex::{Vertex, VertexKey},
    };
    pub use crate::geometry::{
        bigint::FixedInt,
        point::Point,
        predicates::{in_circle, orient2d, InCircle, Orientation},
    };
}

/// The function `is_normal` checks that structs implement `auto` traits.
/// Traits are checked at compile time, so this function is only used for
/// testing.
#[must_use]
pub const fn is_normal<T: Sized + Send + Sync + Unpin>() -> bool {
    true
}

// =============================================================================
// TESTS
// =============================================================================
