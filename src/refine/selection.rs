//! Batch classification of candidate triangles.
//!
//! # Input layout
//! A [`TriangleSet`] is the vertex/triangle record an engine hands over
//! between refinement passes: a vertex list plus index triples whose corners
//! are read as `(origin, destination, apex)`. The area passed to the
//! predicate is the signed area of those corners, computed here once so the
//! predicate never has to.

use crate::geometry::triangle::{signed_area, CandidateTriangle};
use crate::geometry::vertex::Vertex;
use crate::refine_error::RefineError;
use crate::suitability::TriangleSuitability;

/// Vertices and index triples describing candidate triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TriangleSet {
    vertices: Vec<Vertex>,
    triangles: Vec<[usize; 3]>,
}

impl TriangleSet {
    /// Build a set, checking that every corner index names a vertex.
    pub fn new(vertices: Vec<Vertex>, triangles: Vec<[usize; 3]>) -> Result<Self, RefineError> {
        let len = vertices.len();
        for (triangle, corners) in triangles.iter().enumerate() {
            if let Some(&index) = corners.iter().find(|&&i| i >= len) {
                return Err(RefineError::VertexIndexOutOfBounds {
                    triangle,
                    index,
                    len,
                });
            }
        }
        Ok(Self {
            vertices,
            triangles,
        })
    }

    /// Build a set from interleaved `x, y` coordinates and flat index triples.
    pub fn from_flat(points: &[f64], triangles: &[usize]) -> Result<Self, RefineError> {
        if points.len() % 2 != 0 {
            return Err(RefineError::SliceLengthMismatch {
                what: "point list",
                len: points.len(),
                multiple: 2,
            });
        }
        if triangles.len() % 3 != 0 {
            return Err(RefineError::SliceLengthMismatch {
                what: "triangle list",
                len: triangles.len(),
                multiple: 3,
            });
        }
        let vertices = points
            .chunks_exact(2)
            .map(|xy| Vertex::new(xy[0], xy[1]))
            .collect();
        let triangles = triangles
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        Self::new(vertices, triangles)
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.triangles
    }

    /// Number of triangles.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// The `i`-th triangle with its signed area, or `None` if out of range.
    pub fn candidate(&self, i: usize) -> Option<CandidateTriangle> {
        self.triangles.get(i).map(|&t| self.candidate_of(t))
    }

    /// Iterate over all candidates in index order.
    pub fn candidates(&self) -> impl ExactSizeIterator<Item = CandidateTriangle> + '_ {
        self.triangles.iter().map(|&t| self.candidate_of(t))
    }

    #[inline]
    fn candidate_of(&self, [o, d, a]: [usize; 3]) -> CandidateTriangle {
        // Indices were checked in `new`.
        let (origin, destination, apex) = (self.vertices[o], self.vertices[d], self.vertices[a]);
        CandidateTriangle::new(origin, destination, apex, signed_area(origin, destination, apex))
    }
}

/// Triangle indices split by verdict, each list in ascending order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefinementSelection {
    /// Triangles that need refinement.
    pub refine: Vec<usize>,
    /// Triangles that may be kept.
    pub accept: Vec<usize>,
}

impl RefinementSelection {
    /// True when no triangle needs refinement.
    pub fn is_empty(&self) -> bool {
        self.refine.is_empty()
    }

    /// Total number of classified triangles.
    pub fn total(&self) -> usize {
        self.refine.len() + self.accept.len()
    }
}

/// Classify every triangle in `set` with `predicate`.
pub fn select_triangles_for_refinement<P>(set: &TriangleSet, predicate: &P) -> RefinementSelection
where
    P: TriangleSuitability + ?Sized,
{
    let mut selection = RefinementSelection::default();
    for (i, candidate) in set.candidates().enumerate() {
        if predicate.assess_triangle(&candidate).needs_refinement() {
            selection.refine.push(i);
        } else {
            selection.accept.push(i);
        }
    }
    log::debug!(
        "refinement selection: {} of {} triangles need refinement",
        selection.refine.len(),
        selection.total()
    );
    selection
}

/// Parallel counterpart of [`select_triangles_for_refinement`].
///
/// Produces exactly the same selection; the predicate is shared across
/// worker threads.
#[cfg(feature = "rayon")]
pub fn par_select_triangles_for_refinement<P>(
    set: &TriangleSet,
    predicate: &P,
) -> RefinementSelection
where
    P: TriangleSuitability + ?Sized,
{
    use rayon::prelude::*;

    let flags: Vec<bool> = set
        .triangles()
        .par_iter()
        .map(|&t| predicate.assess_triangle(&set.candidate_of(t)).needs_refinement())
        .collect();
    let mut selection = RefinementSelection::default();
    for (i, refine) in flags.into_iter().enumerate() {
        if refine {
            selection.refine.push(i);
        } else {
            selection.accept.push(i);
        }
    }
    log::debug!(
        "parallel refinement selection: {} of {} triangles need refinement",
        selection.refine.len(),
        selection.total()
    );
    selection
}
