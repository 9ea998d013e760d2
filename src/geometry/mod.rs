//! Geometry primitives for tri-refine.
//!
//! This module provides the planar vertex type and the squared edge measures
//! that suitability predicates evaluate on every candidate triangle.

pub mod triangle;
pub mod vertex;
