//! Triangle suitability predicates.
//!
//! A refinement engine asks one question of every candidate triangle: does it
//! need to be split, or may refinement stop here? [`TriangleSuitability`] is
//! the seam where that decision is plugged in. Implementations receive the
//! three corners and the caller-supplied area and return a [`Verdict`].
//!
//! # Contract
//! - Pure: the verdict depends only on `(origin, destination, apex, area)`.
//!   No state is retained between calls and inputs are never mutated.
//! - Total: every input yields a verdict. Degenerate triangles (zero area,
//!   collinear or coincident corners) are ordinary input.
//! - Non-finite input is not validated. Comparisons involving NaN are false,
//!   so a NaN-poisoned measure typically lands on [`Verdict::Acceptable`].
//! - `Send + Sync`: engines may call the same predicate from many threads.
//!
//! # Implementations
//! - [`AlwaysAcceptable`]: the default when nothing is installed.
//! - [`graded::GradedBound`]: longest edge against a bound that grows with
//!   distance from a reference point.
//! - [`area::MaxArea`]: a global cap on the supplied area.
//! - [`compose::FnSuitability`] and [`compose::AnyOf`]: user callbacks and
//!   combinations.
//!
//! ```rust
//! use tri_refine::geometry::vertex::Vertex;
//! use tri_refine::suitability::{TriangleSuitability, Verdict};
//! use tri_refine::suitability::graded::GradedBound;
//!
//! let graded = GradedBound::default();
//! let verdict = graded.assess(
//!     Vertex::new(0.0, 0.0),
//!     Vertex::new(1.0, 0.0),
//!     Vertex::new(0.0, 1.0),
//!     0.5,
//! );
//! assert_eq!(verdict, Verdict::NeedsRefinement);
//! ```

pub mod area;
pub mod compose;
pub mod graded;

use crate::geometry::triangle::CandidateTriangle;
use crate::geometry::vertex::Vertex;
use crate::refine_error::RefineError;
use std::sync::Arc;

/// Outcome of a suitability test.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The triangle is unsuitable and should be split.
    NeedsRefinement,
    /// The triangle may be kept as is.
    Acceptable,
}

impl Verdict {
    #[inline]
    pub fn needs_refinement(self) -> bool {
        matches!(self, Verdict::NeedsRefinement)
    }

    #[inline]
    pub fn is_acceptable(self) -> bool {
        matches!(self, Verdict::Acceptable)
    }

    /// Map an "unsuitable" flag to a verdict.
    #[inline]
    pub fn from_unsuitable(unsuitable: bool) -> Self {
        if unsuitable {
            Verdict::NeedsRefinement
        } else {
            Verdict::Acceptable
        }
    }
}

/// `true` means the triangle needs refinement.
impl From<Verdict> for bool {
    fn from(v: Verdict) -> bool {
        v.needs_refinement()
    }
}

/// A rule deciding whether a candidate triangle needs further refinement.
pub trait TriangleSuitability: Send + Sync {
    /// Classify the triangle `(origin, destination, apex)` with the given area.
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict;

    /// Classify a bundled [`CandidateTriangle`].
    #[inline]
    fn assess_triangle(&self, triangle: &CandidateTriangle) -> Verdict {
        self.assess(
            triangle.origin,
            triangle.destination,
            triangle.apex,
            triangle.area,
        )
    }

    /// Shorthand for `assess(..).needs_refinement()`.
    #[inline]
    fn needs_refinement(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> bool {
        self.assess(origin, destination, apex, area).needs_refinement()
    }
}

impl<T: TriangleSuitability + ?Sized> TriangleSuitability for &T {
    #[inline]
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        (**self).assess(origin, destination, apex, area)
    }
}

impl<T: TriangleSuitability + ?Sized> TriangleSuitability for Box<T> {
    #[inline]
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        (**self).assess(origin, destination, apex, area)
    }
}

impl<T: TriangleSuitability + ?Sized> TriangleSuitability for Arc<T> {
    #[inline]
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Verdict {
        (**self).assess(origin, destination, apex, area)
    }
}

/// Accepts every triangle; installing it disables user-driven refinement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AlwaysAcceptable;

impl TriangleSuitability for AlwaysAcceptable {
    #[inline]
    fn assess(&self, _origin: Vertex, _destination: Vertex, _apex: Vertex, _area: f64) -> Verdict {
        Verdict::Acceptable
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<(), RefineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(RefineError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        })
    }
}

pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<(), RefineError> {
    finite(name, value)?;
    if value < 0.0 {
        return Err(RefineError::InvalidParameter {
            name,
            value,
            reason: "must be non-negative",
        });
    }
    Ok(())
}
