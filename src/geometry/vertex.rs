//! `Vertex`: a planar point handed to suitability predicates.
//!
//! Vertices are owned by the calling mesh engine and passed by value; a
//! predicate never keeps or mutates them.

use std::fmt;

/// A 2D vertex with double-precision coordinates.
#[derive(Copy, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    /// The coordinate origin `(0, 0)`.
    pub const ORIGIN: Vertex = Vertex { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Vertex { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared(self, other: Vertex) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Squared distance from the coordinate origin.
    #[inline]
    pub fn norm_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// True when both coordinates are finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vertex").field(&self.x).field(&self.y).finish()
    }
}

impl From<[f64; 2]> for Vertex {
    fn from([x, y]: [f64; 2]) -> Self {
        Vertex { x, y }
    }
}

impl From<(f64, f64)> for Vertex {
    fn from((x, y): (f64, f64)) -> Self {
        Vertex { x, y }
    }
}

impl From<Vertex> for [f64; 2] {
    fn from(v: Vertex) -> Self {
        [v.x, v.y]
    }
}
