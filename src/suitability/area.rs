//! Global maximum-area constraint.

use crate::geometry::vertex::Vertex;
use crate::refine_error::RefineError;
use crate::suitability::{finite, TriangleSuitability, Verdict};

/// Refine any triangle whose supplied area exceeds a fixed limit.
///
/// The magnitude of the area is compared, so clockwise triangles reported
/// with a negative signed area are treated like their mirror image. A NaN
/// area is never larger than the limit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MaxArea {
    max_area: f64,
}

impl MaxArea {
    /// Returns an error unless `max_area` is finite and strictly positive.
    pub fn new(max_area: f64) -> Result<Self, RefineError> {
        finite("max_area", max_area)?;
        if max_area <= 0.0 {
            return Err(RefineError::InvalidParameter {
                name: "max_area",
                value: max_area,
                reason: "must be positive",
            });
        }
        Ok(Self { max_area })
    }

    pub fn max_area(&self) -> f64 {
        self.max_area
    }
}

impl TriangleSuitability for MaxArea {
    #[inline]
    fn assess(&self, _origin: Vertex, _destination: Vertex, _apex: Vertex, area: f64) -> Verdict {
        Verdict::from_unsuitable(area.abs() > self.max_area)
    }
}
