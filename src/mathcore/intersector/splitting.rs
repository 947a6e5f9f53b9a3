//! `intersector::splitting` submodule implements splitting of triangles by planes.
//!
//! Triangle is given by flat array of its three vertices. Each vertex consists of
//! `num_attributes` values, first three of which are its position; other attributes
//! (texture coordinates, colors and so on) are interpolated along the split edges.
//!

use crate::mathcore::{
    errors::GeometryError,
    intersector::intersect_line_plane,
    planes::{Plane, PlaneSide},
    vectors::Vector3,
};
use log::error;

/// [`SplitTriangle`] struct holds result of splitting triangle by plane.
///
/// Each side can hold up to 2 triangles. If plane does not cross triangle, the whole triangle
/// is stored on one side and `total` is 1. Otherwise triangle is split into 3 triangles:
/// one of the sides holds 1 triangle and the other holds 2.
///
/// Split structure can be reused for several splits of triangles with the same vertex size.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::{split_triangle, SplitTriangle};
/// # use ggeometry::mathcore::planes::Plane;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let plane: Plane = Plane::new(Vector3::X, -0.5);
/// let mut split: SplitTriangle = SplitTriangle::new(3);
///
/// split_triangle(&[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &plane, &mut split);
/// assert_eq!(split.total(), 3);
/// assert_eq!(split.num_front(), 1);
/// assert_eq!(split.num_back(), 2);
/// assert_eq!(split.front().len(), 9);
/// assert_eq!(split.back().len(), 18);
///
/// split_triangle(&[1.0, 0.0, 0.0, 2.0, 0.0, 0.0, 1.0, 1.0, 0.0], &plane, &mut split);
/// assert_eq!(split.total(), 1);
/// assert_eq!(split.num_front(), 1);
/// assert!(split.back().is_empty());
/// ```
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitTriangle {
    /// Triangles in front of the plane.
    ///
    front: Vec<f32>,
    /// Triangles behind the plane.
    ///
    back: Vec<f32>,
    /// Scratch vertex that is created on split edge.
    ///
    edge_split: Vec<f32>,

    /// Amount of triangles in front of the plane.
    ///
    num_front: usize,
    /// Amount of triangles behind the plane.
    ///
    num_back: usize,
    /// Total amount of triangles.
    ///
    total: usize,

    /// Amount of values per vertex.
    ///
    stride: usize,
    /// Whether vertices are currently pushed to the front side.
    ///
    is_front_current: bool,
    /// Write position in front buffer.
    ///
    front_offset: usize,
    /// Write position in back buffer.
    ///
    back_offset: usize,
}
impl SplitTriangle {
    /// Creates split structure for triangles whose vertices consist of `num_attributes` values.
    ///
    /// # Errors
    /// Returns [`GeometryError::VertexSize`] if `num_attributes` is less than 3.
    ///
    pub fn try_new(num_attributes: usize) -> Result<Self, GeometryError> {
        if num_attributes < 3 {
            return Err(GeometryError::VertexSize {
                size: num_attributes,
            });
        }
        Ok(SplitTriangle {
            front: vec![0.0; num_attributes * 3 * 2],
            back: vec![0.0; num_attributes * 3 * 2],
            edge_split: vec![0.0; num_attributes],
            stride: num_attributes,
            ..Default::default()
        })
    }
    /// Creates split structure for triangles whose vertices consist of `num_attributes` values.
    ///
    /// # Panics
    /// Panics if `num_attributes` is less than 3.
    ///
    pub fn new(num_attributes: usize) -> Self {
        expect_valid(SplitTriangle::try_new(num_attributes))
    }

    /// Returns amount of values per vertex.
    ///
    pub fn num_attributes(&self) -> usize {
        self.stride
    }
    /// Returns amount of triangles in front of the plane (points on the plane are in front of it).
    ///
    pub fn num_front(&self) -> usize {
        self.num_front
    }
    /// Returns amount of triangles behind the plane.
    ///
    pub fn num_back(&self) -> usize {
        self.num_back
    }
    /// Returns total amount of triangles (1 or 3 after split, 0 before the first split).
    ///
    pub fn total(&self) -> usize {
        self.total
    }
    /// Returns triangles in front of the plane.
    ///
    pub fn front(&self) -> &[f32] {
        &self.front[..self.num_front * 3 * self.stride]
    }
    /// Returns triangles behind the plane.
    ///
    pub fn back(&self) -> &[f32] {
        &self.back[..self.num_back * 3 * self.stride]
    }

    /// Clears the result of previous split.
    ///
    fn reset(&mut self) {
        self.is_front_current = false;
        self.front_offset = 0;
        self.back_offset = 0;
        self.num_front = 0;
        self.num_back = 0;
        self.total = 0;
    }
    /// Pushes vertex to the current side.
    ///
    fn push(&mut self, vertex: &[f32]) {
        let stride: usize = self.stride;
        if self.is_front_current {
            self.front[self.front_offset..self.front_offset + stride].copy_from_slice(vertex);
            self.front_offset += stride;
        } else {
            self.back[self.back_offset..self.back_offset + stride].copy_from_slice(vertex);
            self.back_offset += stride;
        }
    }
    /// Pushes vertex that was created on split edge to the current side.
    ///
    fn push_edge_split(&mut self) {
        let edge_split: Vec<f32> = std::mem::take(&mut self.edge_split);
        self.push(&edge_split);
        self.edge_split = edge_split;
    }
    /// Computes vertex at which edge crosses plane, interpolating all its attributes.
    ///
    fn split_edge(&mut self, start: &[f32], end: &[f32], plane: &Plane) {
        let start_position: Vector3 = Vector3::new(start[0], start[1], start[2]);
        let end_position: Vector3 = Vector3::new(end[0], end[1], end[2]);
        let (t, point): (f32, Vector3) = intersect_line_plane(start_position, end_position, plane)
            .unwrap_or((0.0, start_position));

        self.edge_split[..3].copy_from_slice(&point.elements());
        for (value, (a, b)) in self.edge_split[3..]
            .iter_mut()
            .zip(start[3..].iter().zip(&end[3..]))
        {
            *value = a + t * (b - a);
        }
    }
}

/// Unwraps result, logging and panicking on error.
///
fn expect_valid<T>(result: Result<T, GeometryError>) -> T {
    result.unwrap_or_else(|error| {
        error!("Triangle can not be split: {error}");
        panic!("{error}")
    })
}

/// Splits triangle by plane and stores the result in given split structure.
///
/// Vertices that lie on the plane are considered to be in front of it.
/// If the whole triangle is on one side, it is copied to that side. Otherwise every crossed edge
/// is split at the plane, all attributes of new vertices are interpolated with the same parameter,
/// and the side that gets a quadrilateral is triangulated as a fan.
///
/// # Errors
/// Returns [`GeometryError::TriangleLength`] if length of triangle is not equal to
/// `3 * split.num_attributes()`.
///
pub fn try_split_triangle(
    triangle: &[f32],
    plane: &Plane,
    split: &mut SplitTriangle,
) -> Result<(), GeometryError> {
    let stride: usize = split.stride;
    if triangle.len() != stride * 3 {
        return Err(GeometryError::TriangleLength {
            len: triangle.len(),
            expected: stride * 3,
        });
    }
    if stride < 3 {
        return Err(GeometryError::VertexSize { size: stride });
    }

    let vertices: [&[f32]; 3] = [
        &triangle[..stride],
        &triangle[stride..stride * 2],
        &triangle[stride * 2..],
    ];
    let is_back: [bool; 3] = vertices.map(|vertex| {
        plane.test_point(Vector3::new(vertex[0], vertex[1], vertex[2])) == PlaneSide::Back
    });

    split.reset();
    if is_back[0] == is_back[1] && is_back[1] == is_back[2] {
        split.total = 1;
        if is_back[0] {
            split.num_back = 1;
            split.back[..triangle.len()].copy_from_slice(triangle);
        } else {
            split.num_front = 1;
            split.front[..triangle.len()].copy_from_slice(triangle);
        }
        return Ok(());
    }

    split.total = 3;
    split.num_front = is_back.iter().filter(|&&back| !back).count();
    split.num_back = split.total - split.num_front;

    split.is_front_current = !is_back[0];
    for first in 0..3 {
        let second: usize = (first + 1) % 3;
        split.push(vertices[first]);
        if is_back[first] != is_back[second] {
            split.split_edge(vertices[first], vertices[second], plane);
            split.push_edge_split();
            split.is_front_current = !split.is_front_current;
            split.push_edge_split();
        }
    }

    let quad: &mut Vec<f32> = if split.num_front == 2 {
        &mut split.front
    } else {
        &mut split.back
    };
    quad.copy_within(stride * 2..stride * 4, stride * 3);
    quad.copy_within(0..stride, stride * 5);
    Ok(())
}
/// Splits triangle by plane and stores the result in given split structure.
///
/// # Panics
/// Panics if length of triangle is not equal to `3 * split.num_attributes()`
/// (see [`try_split_triangle`]).
///
pub fn split_triangle(triangle: &[f32], plane: &Plane, split: &mut SplitTriangle) {
    expect_valid(try_split_triangle(triangle, plane, split))
}
/// Splits triangle by plane and returns new split structure.
///
/// Vertex size is inferred from the length of triangle.
///
/// # Panics
/// Panics if length of triangle is not a multiple of 3 or its vertices have less than 3 values.
///
pub fn split_triangle_new(triangle: &[f32], plane: &Plane) -> SplitTriangle {
    let mut split: SplitTriangle = SplitTriangle::new(triangle.len() / 3);
    split_triangle(triangle, plane, &mut split);
    split
}

#[cfg(test)]
mod tests {
    use super::{split_triangle, split_triangle_new, try_split_triangle, SplitTriangle};
    use crate::mathcore::{errors::GeometryError, floats::almost_equal, planes::Plane, vectors::Vector3};
    use test_log::test;

    fn assert_values(actual: &[f32], expected: &[f32]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(almost_equal(*a, *e), "{actual:?} != {expected:?}");
        }
    }

    #[test]
    fn one_side() {
        let plane: Plane = Plane::new(Vector3::Z, 0.0);

        let above: [f32; 9] = [0.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 1.0, 2.0];
        let split: SplitTriangle = split_triangle_new(&above, &plane);
        assert_eq!(split.total(), 1);
        assert_eq!(split.num_front(), 1);
        assert_eq!(split.num_back(), 0);
        assert_eq!(split.front(), &above);
        assert!(split.back().is_empty());

        let below: [f32; 9] = [0.0, 0.0, -1.0, 1.0, 0.0, -1.0, 0.0, 1.0, -2.0];
        let split: SplitTriangle = split_triangle_new(&below, &plane);
        assert_eq!(split.total(), 1);
        assert_eq!(split.num_back(), 1);
        assert_eq!(split.back(), &below);
        assert!(split.front().is_empty());

        let touching: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 1.0];
        let split: SplitTriangle = split_triangle_new(&touching, &plane);
        assert_eq!(split.total(), 1);
        assert_eq!(split.num_front(), 1);
    }

    #[test]
    fn crossing() {
        let plane: Plane = Plane::new(Vector3::Z, 0.0);
        // position and texture coordinates
        let triangle: [f32; 15] = [
            0.0, 0.0, -1.0, 0.0, 0.0, //
            1.0, 0.0, 1.0, 1.0, 0.0, //
            0.0, 1.0, 1.0, 0.0, 1.0,
        ];
        let mut split: SplitTriangle = SplitTriangle::new(5);
        split_triangle(&triangle, &plane, &mut split);

        assert_eq!(split.total(), 3);
        assert_eq!(split.num_front(), 2);
        assert_eq!(split.num_back(), 1);

        let v1: [f32; 5] = [0.0, 0.0, -1.0, 0.0, 0.0];
        let v2: [f32; 5] = [1.0, 0.0, 1.0, 1.0, 0.0];
        let v3: [f32; 5] = [0.0, 1.0, 1.0, 0.0, 1.0];
        let s1: [f32; 5] = [0.5, 0.0, 0.0, 0.5, 0.0];
        let s3: [f32; 5] = [0.0, 0.5, 0.0, 0.0, 0.5];
        assert_values(split.back(), &[v1, s1, s3].concat());
        assert_values(split.front(), &[s1, v2, v3, v3, s3, s1].concat());

        split_triangle(&triangle[..], &Plane::new(Vector3::Z, 5.0), &mut split);
        assert_eq!(split.total(), 1);
        assert_eq!(split.num_front(), 1);
        assert_eq!(split.num_back(), 0);
    }

    #[test]
    fn malformed() {
        let plane: Plane = Plane::new(Vector3::Z, 0.0);
        let mut split: SplitTriangle = SplitTriangle::new(4);
        assert_eq!(
            try_split_triangle(&[0.0; 9], &plane, &mut split),
            Err(GeometryError::TriangleLength { len: 9, expected: 12 })
        );
        assert_eq!(
            SplitTriangle::try_new(2),
            Err(GeometryError::VertexSize { size: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "is less than 3")]
    fn short_vertices() {
        let _ = split_triangle_new(&[0.0; 6], &Plane::new(Vector3::Z, 0.0));
    }
}
