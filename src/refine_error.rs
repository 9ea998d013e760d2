//! RefineError: Unified error type for tri-refine public APIs
//!
//! Suitability predicates themselves never fail. This error type covers the
//! fallible edges of the crate: validating predicate parameters at
//! construction time and validating batch triangle input handed to the
//! refinement driver.

use thiserror::Error;

/// Unified error type for tri-refine operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RefineError {
    /// A predicate parameter was rejected at construction time.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// A triangle corner referenced a vertex that does not exist.
    #[error("triangle {triangle} references vertex {index}, but only {len} vertices exist")]
    VertexIndexOutOfBounds {
        triangle: usize,
        index: usize,
        len: usize,
    },
    /// A flat input array did not have a length divisible by its record size.
    #[error("{what} has length {len}, expected a multiple of {multiple}")]
    SliceLengthMismatch {
        what: &'static str,
        len: usize,
        multiple: usize,
    },
}
