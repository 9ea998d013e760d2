//! Boundary between suitability predicates and a refinement engine.
//!
//! An engine owns a [`RefinementHooks`] value built at construction time and
//! calls [`RefinementHooks::is_unsuitable`] once per candidate triangle. When
//! no predicate is installed every triangle is acceptable, so refinement is
//! driven only by the engine's own quality criteria.
//!
//! [`selection`] evaluates a whole batch of triangles and reports which ones
//! an engine should split next.

pub mod selection;

pub use selection::{
    select_triangles_for_refinement, RefinementSelection, TriangleSet,
};
#[cfg(feature = "rayon")]
pub use selection::par_select_triangles_for_refinement;

use crate::geometry::triangle::CandidateTriangle;
use crate::geometry::vertex::Vertex;
use crate::suitability::{AlwaysAcceptable, TriangleSuitability, Verdict};
use std::fmt;
use std::sync::Arc;

/// The user-pluggable refinement test installed in an engine.
///
/// Cloning shares the installed predicate.
///
/// ```rust
/// use tri_refine::geometry::vertex::Vertex;
/// use tri_refine::refine::RefinementHooks;
/// use tri_refine::suitability::graded::GradedBound;
///
/// let o = Vertex::new(0.0, 0.0);
/// let d = Vertex::new(1.0, 0.0);
/// let a = Vertex::new(0.0, 1.0);
///
/// assert!(!RefinementHooks::default().is_unsuitable(o, d, a, 0.5));
/// let hooks = RefinementHooks::new(GradedBound::default());
/// assert!(hooks.is_unsuitable(o, d, a, 0.5));
/// ```
#[derive(Clone)]
pub struct RefinementHooks {
    predicate: Arc<dyn TriangleSuitability>,
}

impl Default for RefinementHooks {
    fn default() -> Self {
        Self {
            predicate: Arc::new(AlwaysAcceptable),
        }
    }
}

impl RefinementHooks {
    /// Install `predicate` as the refinement test.
    pub fn new<P>(predicate: P) -> Self
    where
        P: TriangleSuitability + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
        }
    }

    /// Install an already shared predicate.
    pub fn from_shared(predicate: Arc<dyn TriangleSuitability>) -> Self {
        Self { predicate }
    }

    /// Replace the installed predicate, keeping the builder chain.
    pub fn with_predicate<P>(mut self, predicate: P) -> Self
    where
        P: TriangleSuitability + 'static,
    {
        self.predicate = Arc::new(predicate);
        self
    }

    /// The installed predicate.
    pub fn predicate(&self) -> &Arc<dyn TriangleSuitability> {
        &self.predicate
    }

    /// Classify one candidate triangle.
    #[inline]
    pub fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        self.predicate.assess(origin, destination, apex, area)
    }

    /// `true` when the triangle must be split.
    #[inline]
    pub fn is_unsuitable(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> bool {
        self.assess(origin, destination, apex, area).needs_refinement()
    }

    #[inline]
    pub fn assess_triangle(&self, triangle: &CandidateTriangle) -> Verdict {
        self.predicate.assess_triangle(triangle)
    }

    /// Classify every triangle in `set` with the installed predicate.
    pub fn select(&self, set: &TriangleSet) -> RefinementSelection {
        select_triangles_for_refinement(set, self.predicate.as_ref())
    }

    /// Parallel counterpart of [`RefinementHooks::select`].
    #[cfg(feature = "rayon")]
    pub fn par_select(&self, set: &TriangleSet) -> RefinementSelection {
        par_select_triangles_for_refinement(set, self.predicate.as_ref())
    }
}

impl fmt::Debug for RefinementHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefinementHooks").finish_non_exhaustive()
    }
}
