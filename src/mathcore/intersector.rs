//! `mathcore::intersector` submodule is a stateless library of intersection and overlap tests between
//! geometric primitives.
//!
//! Every test is a free function. Tests that compute geometry return it wrapped in `Option`
//! (`None` means that primitives do not intersect) and pure tests return `bool`.
//! Degenerate inputs (parallel lines, zero-length vectors, coplanar rays) are legitimate
//! negative results and are never reported as errors.
//!
//! Functions are grouped into several submodules, all of which are re-exported here:
//! * points - point containment and distances;
//! * lines - intersections of two-dimensional lines, segments and rays;
//! * planes - intersections with planes;
//! * rays - intersections of three-dimensional rays;
//! * polygons - polygon clipping and the Separating Axis Theorem;
//! * splitting - splitting of triangles by planes.
//!

// submodules and public re-exports
mod lines;
pub use lines::*;
mod planes;
pub use planes::*;
mod points;
pub use points::*;
mod polygons;
pub use polygons::*;
mod rays;
pub use rays::*;
mod splitting;
pub use splitting::*;

use crate::mathcore::{floats::almost_equal, vectors::Vector2};

/// [`MinimumTranslationVector`] struct describes the smallest displacement that separates two
/// overlapping shapes.
///
/// Moving the first shape by `normal * depth` separates shapes (or leaves them touching).
/// Zero depth and zero normal (the `Default` value) mean that shapes do not overlap.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct MinimumTranslationVector {
    /// Unit direction in which the first shape should be moved.
    ///
    pub normal: Vector2,
    /// Distance on which the first shape should be moved.
    ///
    pub depth: f32,
}
impl MinimumTranslationVector {
    /// Returns translation that separates shapes (`normal * depth`).
    ///
    pub fn translation(&self) -> Vector2 {
        self.normal * self.depth
    }
}
impl PartialEq for MinimumTranslationVector {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && almost_equal(self.depth, other.depth)
    }
}
