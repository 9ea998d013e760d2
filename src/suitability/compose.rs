//! User callbacks and combinations of predicates.

use crate::geometry::vertex::Vertex;
use crate::suitability::{TriangleSuitability, Verdict};
use std::fmt;
use std::sync::Arc;

/// Adapts a closure into a [`TriangleSuitability`].
///
/// The closure receives `(origin, destination, apex, area)` and returns `true`
/// when the triangle needs refinement. It must be pure for the predicate
/// contract to hold; nothing here can enforce that.
///
/// ```rust
/// use tri_refine::geometry::vertex::Vertex;
/// use tri_refine::suitability::TriangleSuitability;
/// use tri_refine::suitability::compose::FnSuitability;
///
/// let right_half_only =
///     FnSuitability::new(|o: Vertex, _d: Vertex, _a: Vertex, area: f64| o.x > 0.0 && area > 0.1);
/// let o = Vertex::new(1.0, 0.0);
/// assert!(right_half_only.needs_refinement(o, o, o, 0.2));
/// ```
#[derive(Clone)]
pub struct FnSuitability<F> {
    f: F,
}

impl<F> FnSuitability<F>
where
    F: Fn(Vertex, Vertex, Vertex, f64) -> bool + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnSuitability<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSuitability").finish_non_exhaustive()
    }
}

impl<F> TriangleSuitability for FnSuitability<F>
where
    F: Fn(Vertex, Vertex, Vertex, f64) -> bool + Send + Sync,
{
    #[inline]
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        Verdict::from_unsuitable((self.f)(origin, destination, apex, area))
    }
}

/// Refines a triangle when any member predicate asks for it.
///
/// Members are consulted in insertion order and evaluation stops at the
/// first [`Verdict::NeedsRefinement`]. With no members every triangle is
/// acceptable.
#[derive(Clone, Default)]
pub struct AnyOf {
    members: Vec<Arc<dyn TriangleSuitability>>,
}

impl AnyOf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a member predicate.
    pub fn with<P>(mut self, predicate: P) -> Self
    where
        P: TriangleSuitability + 'static,
    {
        self.members.push(Arc::new(predicate));
        self
    }

    /// Append an already shared member predicate.
    pub fn with_shared(mut self, predicate: Arc<dyn TriangleSuitability>) -> Self {
        self.members.push(predicate);
        self
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl fmt::Debug for AnyOf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnyOf")
            .field("members", &self.members.len())
            .finish()
    }
}

impl TriangleSuitability for AnyOf {
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        let unsuitable = self
            .members
            .iter()
            .any(|p| p.needs_refinement(origin, destination, apex, area));
        Verdict::from_unsuitable(unsuitable)
    }
}
