//! Spatially graded longest-edge predicate.
//!
//! [`GradedBound`] flags a triangle for refinement when the square of its
//! longest edge exceeds a bound that grows with the squared distance between a
//! key point of the triangle and a fixed reference point:
//!
//! ```text
//! maxlen = max(|O-A|², |D-A|², |O-D|²)
//! bound  = coefficient * |K - R|² + offset
//! refine = maxlen > bound
//! ```
//!
//! `K` is the origin vertex by default (see [`SpatialKey`]) and `R` the
//! reference point. The default policy uses `R = (0, 0)`, `coefficient = 0.05`
//! and `offset = 0.02`, which gives a mesh that is fine near the origin and
//! coarsens quadratically away from it.
//!
//! Measuring the longest edge rather than the area also catches long, thin
//! triangles whose area alone would pass. The supplied area is ignored.
//!
//! # Non-finite input
//! Coordinates are not validated per call. A NaN coordinate in the key point
//! makes the bound NaN, and a NaN apex makes the longest edge NaN; either way
//! `maxlen > bound` is false and the triangle is reported
//! [`Verdict::Acceptable`].
//!
//! # Configuration
//! ```rust
//! use tri_refine::geometry::vertex::Vertex;
//! use tri_refine::suitability::graded::{GradedBound, GradedBoundConfig, SpatialKey};
//!
//! let cfg = GradedBoundConfig {
//!     reference: Vertex::new(2.0, 1.0),
//!     coefficient: 0.1,
//!     offset: 0.01,
//!     key: SpatialKey::Centroid,
//! };
//! let graded = GradedBound::try_from_config(cfg)?;
//! assert_eq!(graded.bound_at(Vertex::new(2.0, 1.0)), 0.01);
//! # Ok::<(), tri_refine::refine_error::RefineError>(())
//! ```

use crate::geometry::triangle::{centroid, longest_edge_squared};
use crate::geometry::vertex::Vertex;
use crate::refine_error::RefineError;
use crate::suitability::{finite, non_negative, TriangleSuitability, Verdict};

/// Sample policy: growth of the bound per unit of squared distance.
pub const DEFAULT_COEFFICIENT: f64 = 0.05;
/// Sample policy: bound at the reference point itself.
pub const DEFAULT_OFFSET: f64 = 0.02;

/// Which point of a triangle is measured against the reference point.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpatialKey {
    /// The triangle's origin vertex.
    #[default]
    OriginVertex,
    /// The mean of the three corners.
    Centroid,
}

impl SpatialKey {
    #[inline]
    fn locate(self, origin: Vertex, destination: Vertex, apex: Vertex) -> Vertex {
        match self {
            SpatialKey::OriginVertex => origin,
            SpatialKey::Centroid => centroid(origin, destination, apex),
        }
    }
}

/// Parameters for [`GradedBound`].
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GradedBoundConfig {
    /// Point around which the mesh is finest.
    pub reference: Vertex,
    /// Growth of the bound per unit of squared distance from `reference`.
    pub coefficient: f64,
    /// Bound at `reference`.
    pub offset: f64,
    /// Point of the triangle used to measure the distance.
    pub key: SpatialKey,
}

impl Default for GradedBoundConfig {
    fn default() -> Self {
        Self {
            reference: Vertex::ORIGIN,
            coefficient: DEFAULT_COEFFICIENT,
            offset: DEFAULT_OFFSET,
            key: SpatialKey::OriginVertex,
        }
    }
}

/// Longest-edge predicate with a bound graded by distance from a reference point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GradedBound {
    reference: Vertex,
    coefficient: f64,
    offset: f64,
    key: SpatialKey,
}

impl Default for GradedBound {
    fn default() -> Self {
        let cfg = GradedBoundConfig::default();
        Self {
            reference: cfg.reference,
            coefficient: cfg.coefficient,
            offset: cfg.offset,
            key: cfg.key,
        }
    }
}

impl GradedBound {
    /// Build a predicate keyed to the origin vertex.
    ///
    /// Returns an error if any parameter is non-finite or if `coefficient` or
    /// `offset` is negative.
    pub fn new(reference: Vertex, coefficient: f64, offset: f64) -> Result<Self, RefineError> {
        Self::try_from_config(GradedBoundConfig {
            reference,
            coefficient,
            offset,
            key: SpatialKey::OriginVertex,
        })
    }

    /// Validate `cfg` and build the predicate.
    pub fn try_from_config(cfg: GradedBoundConfig) -> Result<Self, RefineError> {
        finite("reference.x", cfg.reference.x)?;
        finite("reference.y", cfg.reference.y)?;
        non_negative("coefficient", cfg.coefficient)?;
        non_negative("offset", cfg.offset)?;
        if cfg.offset == 0.0 {
            log::warn!(
                "graded bound vanishes at reference point {:?}; refinement around it will not terminate",
                cfg.reference
            );
        }
        Ok(Self {
            reference: cfg.reference,
            coefficient: cfg.coefficient,
            offset: cfg.offset,
            key: cfg.key,
        })
    }

    /// Replace the spatial key.
    pub fn with_key(mut self, key: SpatialKey) -> Self {
        self.key = key;
        self
    }

    /// The parameters this predicate was built from.
    pub fn config(&self) -> GradedBoundConfig {
        GradedBoundConfig {
            reference: self.reference,
            coefficient: self.coefficient,
            offset: self.offset,
            key: self.key,
        }
    }

    pub fn reference(&self) -> Vertex {
        self.reference
    }

    pub fn key(&self) -> SpatialKey {
        self.key
    }

    /// Largest permitted squared edge length for a triangle keyed at `point`.
    #[inline]
    pub fn bound_at(&self, point: Vertex) -> f64 {
        self.coefficient * point.distance_squared(self.reference) + self.offset
    }
}

impl TryFrom<GradedBoundConfig> for GradedBound {
    type Error = RefineError;

    fn try_from(cfg: GradedBoundConfig) -> Result<Self, Self::Error> {
        GradedBound::try_from_config(cfg)
    }
}

impl TriangleSuitability for GradedBound {
    #[inline]
    fn assess(&self, origin: Vertex, destination: Vertex, apex: Vertex, _area: f64) -> Verdict {
        let maxlen = longest_edge_squared(origin, destination, apex);
        let key = self.key.locate(origin, destination, apex);
        Verdict::from_unsuitable(maxlen > self.bound_at(key))
    }
}
