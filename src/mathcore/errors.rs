//! `mathcore::errors` submodule defines [`GeometryError`] which describes violated
//! preconditions of geometric functions.
//!
//! Degenerate geometry (parallel lines, zero-length vectors, coplanar rays) is never an error -
//! such cases are legitimate negative results and are reported with `None` or `false`.
//! [`GeometryError`] is only returned when the input itself is malformed.
//!

use thiserror::Error;

/// [`GeometryError`] enum lists contract violations that can be detected in inputs
/// of geometric functions.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GeometryError {
    /// Flat triangle array length is not a multiple of 9.
    ///
    #[error("triangle array length {len} is not a multiple of 9")]
    TriangleArrayLength {
        /// Length of given array.
        ///
        len: usize,
    },
    /// Triangle length is not equal to 3 vertices of expected size.
    ///
    #[error("triangle length {len} is not equal to {expected}")]
    TriangleLength {
        /// Length of given triangle.
        ///
        len: usize,
        /// Expected length (three vertices).
        ///
        expected: usize,
    },
    /// Index array length is not a multiple of 3.
    ///
    #[error("index array length {len} is not a multiple of 3")]
    IndexArrayLength {
        /// Length of given array.
        ///
        len: usize,
    },
    /// Triangle vertex list length is not a multiple of 3.
    ///
    #[error("triangle list length {len} is not a multiple of 3")]
    TriangleListLength {
        /// Length of given list.
        ///
        len: usize,
    },
    /// Vertex has less than 3 components, so position can not be read from it.
    ///
    #[error("vertex size {size} is less than 3")]
    VertexSize {
        /// Given vertex size.
        ///
        size: usize,
    },
    /// Index points outside of the vertex array.
    ///
    #[error("index {index} is out of bounds of {count} vertices")]
    IndexOutOfBounds {
        /// Given index.
        ///
        index: usize,
        /// Amount of vertices in the vertex array.
        ///
        count: usize,
    },
    /// Polygon requires at least 3 vertices.
    ///
    #[error("polygon requires at least 3 vertices, {count} were given")]
    NotEnoughVertices {
        /// Amount of given vertices.
        ///
        count: usize,
    },
    /// Coordinates array can not be split into `(x, y)` pairs.
    ///
    #[error("coordinate array length {len} is odd")]
    OddCoordinateCount {
        /// Length of given array.
        ///
        len: usize,
    },
    /// Matrix does not represent affine transform (last row is not `0 0 1`).
    ///
    #[error("matrix is not affine")]
    NotAffine,
}
