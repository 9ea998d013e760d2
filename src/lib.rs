#![cfg_attr(docsrs, feature(doc_cfg))]
//! # tri-refine
//!
//! tri-refine provides the user-pluggable refinement test of a triangular mesh
//! refinement engine: given one candidate triangle (origin, destination and
//! apex vertices plus its area) a predicate decides whether the triangle must
//! be split further or may be kept.
//!
//! ## Features
//! - [`suitability::TriangleSuitability`], the predicate seam, with a default
//!   that accepts every triangle
//! - [`suitability::graded::GradedBound`], a longest-edge test whose bound grows
//!   with squared distance from a reference point, giving a spatially graded
//!   mesh density
//! - Area caps, closure adapters and combinators for composing policies
//! - [`refine::RefinementHooks`] for installing a predicate into an engine at
//!   construction time, plus batch selection of triangles to split
//! - Optional `rayon` feature for parallel batch selection
//!
//! ## Purity
//!
//! Predicates read only their arguments: no shared state, no locks, no
//! allocation, no logging. They are `Send + Sync` and give the same verdict
//! whether called sequentially or from many worker threads.
//!
//! ## Usage
//!
//! ```rust
//! use tri_refine::prelude::*;
//!
//! let hooks = RefinementHooks::new(GradedBound::default());
//! let set = TriangleSet::from_flat(
//!     &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 10.0, 10.0, 10.1, 10.0, 10.0, 10.1],
//!     &[0, 1, 2, 3, 4, 5],
//! )?;
//! let selection = hooks.select(&set);
//! assert_eq!(selection.refine, vec![0]);
//! assert_eq!(selection.accept, vec![1]);
//! # Ok::<(), tri_refine::refine_error::RefineError>(())
//! ```

pub mod geometry;
pub mod refine;
pub mod refine_error;
pub mod suitability;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::geometry::triangle::CandidateTriangle;
    pub use crate::geometry::vertex::Vertex;
    #[cfg(feature = "rayon")]
    pub use crate::refine::par_select_triangles_for_refinement;
    pub use crate::refine::{
        select_triangles_for_refinement, RefinementHooks, RefinementSelection, TriangleSet,
    };
    pub use crate::refine_error::RefineError;
    pub use crate::suitability::area::MaxArea;
    pub use crate::suitability::compose::{AnyOf, FnSuitability};
    pub use crate::suitability::graded::{GradedBound, GradedBoundConfig, SpatialKey};
    pub use crate::suitability::{AlwaysAcceptable, TriangleSuitability, Verdict};
}
