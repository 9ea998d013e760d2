//! Candidate triangles and the edge measures used by suitability tests.
//!
//! # Corner naming
//! A candidate triangle is presented as `origin`, `destination` and `apex`.
//! The edge vectors are taken relative to the apex (`O - A`, `D - A`) plus
//! the base edge `O - D`; [`edge_lengths_squared`] returns them in that order.
//!
//! All measures here are squared so that the hot path never calls `sqrt`.

use crate::geometry::vertex::Vertex;

/// One triangle as seen by a suitability predicate.
///
/// The `area` is whatever the caller supplies. Predicates trust it and never
/// recompute it from the vertices.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CandidateTriangle {
    pub origin: Vertex,
    pub destination: Vertex,
    pub apex: Vertex,
    pub area: f64,
}

impl CandidateTriangle {
    pub fn new(origin: Vertex, destination: Vertex, apex: Vertex, area: f64) -> Self {
        Self {
            origin,
            destination,
            apex,
            area,
        }
    }

    /// Build a candidate whose area is the signed area of the three vertices.
    pub fn with_computed_area(origin: Vertex, destination: Vertex, apex: Vertex) -> Self {
        Self::new(origin, destination, apex, signed_area(origin, destination, apex))
    }

    /// Squared edge lengths `[|O-A|², |D-A|², |O-D|²]`.
    #[inline]
    pub fn edge_lengths_squared(&self) -> [f64; 3] {
        edge_lengths_squared(self.origin, self.destination, self.apex)
    }

    /// Squared length of the longest edge.
    #[inline]
    pub fn longest_edge_squared(&self) -> f64 {
        longest_edge_squared(self.origin, self.destination, self.apex)
    }

    /// Arithmetic mean of the three corners.
    #[inline]
    pub fn centroid(&self) -> Vertex {
        centroid(self.origin, self.destination, self.apex)
    }
}

/// Squared edge lengths `[|O-A|², |D-A|², |O-D|²]`.
#[inline]
pub fn edge_lengths_squared(origin: Vertex, destination: Vertex, apex: Vertex) -> [f64; 3] {
    let dxoa = origin.x - apex.x;
    let dyoa = origin.y - apex.y;
    let dxda = destination.x - apex.x;
    let dyda = destination.y - apex.y;
    let dxod = origin.x - destination.x;
    let dyod = origin.y - destination.y;
    [
        dxoa * dxoa + dyoa * dyoa,
        dxda * dxda + dyda * dyda,
        dxod * dxod + dyod * dyod,
    ]
}

/// Squared length of the longest edge.
///
/// The maximum is formed with plain `>` comparisons (`|D-A|²` against
/// `|O-A|²`, then `|O-D|²` against the winner) rather than `f64::max`, so a
/// NaN edge never wins a comparison and IEEE semantics decide what survives.
#[inline]
pub fn longest_edge_squared(origin: Vertex, destination: Vertex, apex: Vertex) -> f64 {
    let [oalen, dalen, odlen] = edge_lengths_squared(origin, destination, apex);
    let maxlen = if dalen > oalen { dalen } else { oalen };
    if odlen > maxlen { odlen } else { maxlen }
}

/// Signed area of the triangle `(origin, destination, apex)`.
///
/// Positive for counter-clockwise corners, negative for clockwise, zero for
/// collinear or coincident corners.
#[inline]
pub fn signed_area(origin: Vertex, destination: Vertex, apex: Vertex) -> f64 {
    0.5 * ((destination.x - origin.x) * (apex.y - origin.y)
        - (destination.y - origin.y) * (apex.x - origin.x))
}

#[inline]
pub fn centroid(origin: Vertex, destination: Vertex, apex: Vertex) -> Vertex {
    Vertex::new(
        (origin.x + destination.x + apex.x) / 3.0,
        (origin.y + destination.y + apex.y) / 3.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vertex {
        Vertex::new(x, y)
    }

    #[test]
    fn right_triangle_edges() {
        let tri = CandidateTriangle::with_computed_area(v(0.0, 0.0), v(1.0, 0.0), v(0.0, 1.0));
        assert_eq!(tri.edge_lengths_squared(), [1.0, 2.0, 1.0]);
        assert_eq!(tri.longest_edge_squared(), 2.0);
        assert_eq!(tri.area, 0.5);
    }

    #[test]
    fn orientation_sign() {
        let ccw = signed_area(v(0.0, 0.0), v(2.0, 0.0), v(0.0, 2.0));
        let cw = signed_area(v(0.0, 0.0), v(0.0, 2.0), v(2.0, 0.0));
        assert_eq!(ccw, 2.0);
        assert_eq!(cw, -2.0);
        assert_eq!(signed_area(v(0.0, 0.0), v(1.0, 1.0), v(2.0, 2.0)), 0.0);
    }

    #[test]
    fn coincident_corners_have_no_length() {
        let p = v(3.0, -4.0);
        assert_eq!(edge_lengths_squared(p, p, p), [0.0, 0.0, 0.0]);
        assert_eq!(longest_edge_squared(p, p, p), 0.0);
    }

    #[test]
    fn longest_edge_is_order_independent_for_finite_input() {
        let (a, b, c) = (v(0.0, 0.0), v(5.0, 0.0), v(1.0, 1.0));
        let expected = 25.0;
        assert_eq!(longest_edge_squared(a, b, c), expected);
        assert_eq!(longest_edge_squared(b, c, a), expected);
        assert_eq!(longest_edge_squared(c, a, b), expected);
    }

    #[test]
    fn nan_apex_poisons_the_maximum() {
        let maxlen = longest_edge_squared(v(0.0, 0.0), v(1.0, 0.0), v(f64::NAN, 0.0));
        assert!(maxlen.is_nan());
    }

    #[test]
    fn centroid_is_the_mean() {
        let c = centroid(v(0.0, 0.0), v(3.0, 0.0), v(0.0, 3.0));
        assert_eq!(c, v(1.0, 1.0));
    }
}
