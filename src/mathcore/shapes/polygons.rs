//! `shapes::polygons` submodule implements [`Polygon`] - transformable two-dimensional polygon
//! that caches its world vertices.
//!

use crate::mathcore::{
    affine::Affine2,
    errors::GeometryError,
    floats::is_zero,
    intersector::is_point_in_polygon,
    shapes::{PolygonLike, Rectangle, Shape},
    transforms::{Rotatable, Scalable, Transform, Translatable},
    vectors::{Point, Vector2, Vertex},
    Angle,
};
use log::trace;
use std::sync::OnceLock;

/// [`Polygon`] struct represents transformable two-dimensional polygon.
///
/// Polygon stores its vertices in local coordinates together with its position, origin, angle and scale.
/// World vertices are calculated by scaling and rotating local vertices around origin and then by
/// moving them by position. World vertices are cached on first access and cache is dropped on
/// every mutation.
///
/// # Examples
/// ### Initialization
/// ```rust
/// # use ggeometry::mathcore::shapes::{Polygon, PolygonLike, Shape};
/// # use ggeometry::mathcore::vectors::{Point, Vertex};
/// let square: Polygon = Polygon::new(vec![
///     Vertex::new(0.0, 0.0),
///     Vertex::new(1.0, 0.0),
///     Vertex::new(1.0, 1.0),
///     Vertex::new(0.0, 1.0),
/// ]);
/// assert!(square.contains_point(Point::new(0.5, 0.5)));
/// assert!(!square.contains_point(Point::new(1.5, 1.5)));
/// assert_eq!(square.area(), 1.0);
/// ```
///
/// ### Transformation
/// ```rust
/// # use ggeometry::mathcore::shapes::{Polygon, PolygonLike};
/// # use ggeometry::mathcore::transforms::{Rotatable, Scalable, Translatable};
/// # use ggeometry::mathcore::vectors::{Point, Vector2, Vertex};
/// # use ggeometry::mathcore::Angle;
/// let mut square: Polygon = Polygon::new(vec![
///     Vertex::new(-1.0, -1.0),
///     Vertex::new(1.0, -1.0),
///     Vertex::new(1.0, 1.0),
///     Vertex::new(-1.0, 1.0),
/// ]);
/// square.scale_on(Vector2::new(2.0, 1.0));
/// square.rotate_on(Angle::DEG90);
/// square.translate_on(Vector2::new(5.0, 0.0));
/// assert_eq!(
///     square.vertices(),
///     [
///         Vertex::new(6.0, -2.0),
///         Vertex::new(6.0, 2.0),
///         Vertex::new(4.0, 2.0),
///         Vertex::new(4.0, -2.0),
///     ]
/// );
/// ```
///
#[derive(Clone, Debug)]
pub struct Polygon {
    /// Vertices in local coordinates.
    ///
    local_vertices: Vec<Vertex>,

    /// Position of polygon.
    ///
    position: Point,
    /// Local point around which polygon is rotated and scaled.
    ///
    origin: Point,
    /// Angle at which polygon is currently rotated.
    ///
    angle: Angle,
    /// Scale factors along x and y axes.
    ///
    scale: Vector2,

    /// Cached world vertices.
    ///
    world_vertices: OnceLock<Vec<Vertex>>,
}
impl Polygon {
    /// Constructs polygon from its local vertices.
    ///
    /// Polygon is not transformed: its position and origin are zero, angle is zero and scale is one.
    ///
    pub fn new(vertices: Vec<Vertex>) -> Self {
        Polygon {
            local_vertices: vertices,

            position: Point::zero(),
            origin: Point::zero(),
            angle: Angle::zero(),
            scale: Vector2::one(),

            world_vertices: OnceLock::new(),
        }
    }
    /// Constructs polygon from flat array of coordinates (`[x1, y1, x2, y2, ...]`).
    ///
    /// # Errors
    /// Fails with [`GeometryError::OddCoordinateCount`] if coordinates can not be split into pairs
    /// and with [`GeometryError::NotEnoughVertices`] if there are less than 3 vertices.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::shapes::Polygon;
    /// # use ggeometry::mathcore::errors::GeometryError;
    /// assert!(Polygon::try_from_coordinates(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]).is_ok());
    /// assert_eq!(
    ///     Polygon::try_from_coordinates(&[0.0, 0.0, 1.0, 0.0]).err(),
    ///     Some(GeometryError::NotEnoughVertices { count: 2 })
    /// );
    /// ```
    ///
    pub fn try_from_coordinates(coordinates: &[f32]) -> Result<Self, GeometryError> {
        if coordinates.len() % 2 != 0 {
            return Err(GeometryError::OddCoordinateCount {
                len: coordinates.len(),
            });
        }
        let vertices: Vec<Vertex> = coordinates
            .chunks_exact(2)
            .map(|pair| Vertex::new(pair[0], pair[1]))
            .collect();
        if vertices.len() < 3 {
            return Err(GeometryError::NotEnoughVertices {
                count: vertices.len(),
            });
        }
        Ok(Polygon::new(vertices))
    }

    /// Drops cached world vertices.
    ///
    fn invalidate(&mut self) {
        let _ = self.world_vertices.take();
    }

    /// Returns vertices in local coordinates.
    ///
    pub fn local_vertices(&self) -> &[Vertex] {
        &self.local_vertices
    }
    /// Replaces local vertices.
    ///
    pub fn set_vertices(&mut self, vertices: Vec<Vertex>) {
        self.local_vertices = vertices;
        self.invalidate();
    }

    /// Returns local point around which polygon is rotated and scaled.
    ///
    pub fn origin(&self) -> Point {
        self.origin
    }
    /// Sets local point around which polygon is rotated and scaled.
    ///
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
        self.invalidate();
    }

    /// Returns affine transform that maps local vertices into world vertices.
    ///
    pub fn transform(&self) -> Affine2 {
        Transform::combine([
            Transform::Translation {
                vector: -self.origin,
            },
            Transform::Scaling { scale: self.scale },
            Transform::Rotation { angle: self.angle },
            Transform::Translation {
                vector: self.position + self.origin,
            },
        ])
    }

    /// Returns signed area of polygon in world coordinates.
    ///
    /// Area is positive if vertices are ordered counterclockwise and negative otherwise.
    ///
    pub fn signed_area(&self) -> f32 {
        let vertices: &[Vertex] = self.vertices();
        let n: usize = vertices.len();
        let doubled: f32 = (0..n).fold(0.0, |acc, i| {
            acc + vertices[i].cross_product(vertices[(i + 1) % n])
        });
        doubled / 2.0
    }
    /// Returns whether vertices are ordered counterclockwise.
    ///
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }
    /// Returns centroid (center of mass) of polygon in world coordinates.
    ///
    /// Centroid of polygon with zero area is an average of its vertices.
    ///
    pub fn centroid(&self) -> Point {
        let vertices: &[Vertex] = self.vertices();
        let n: usize = vertices.len();
        if n == 0 {
            return Point::zero();
        }

        let area: f32 = self.signed_area();
        if is_zero(area) {
            return vertices.iter().fold(Point::zero(), |acc, vertex| acc + *vertex) / n as f32;
        }
        let sum: Point = (0..n).fold(Point::zero(), |acc, i| {
            let (current, next): (Vertex, Vertex) = (vertices[i], vertices[(i + 1) % n]);
            acc + (current + next) * current.cross_product(next)
        });
        sum / (6.0 * area)
    }
    /// Returns the smallest axis-aligned rectangle that contains polygon.
    ///
    /// Bounding rectangle of polygon without vertices is zero rectangle.
    ///
    pub fn bounding_rectangle(&self) -> Rectangle {
        let vertices: &[Vertex] = self.vertices();
        let Some(first) = vertices.first() else {
            return Rectangle::default();
        };
        let (min, max): (Point, Point) = vertices
            .iter()
            .fold((*first, *first), |(min, max), vertex| {
                (min.min(*vertex), max.max(*vertex))
            });
        Rectangle::from_corners(min, max)
    }
}
impl PartialEq for Polygon {
    /// Polygons are equal if their local vertices and transforms are equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        self.local_vertices == other.local_vertices
            && self.position == other.position
            && self.origin == other.origin
            && self.angle == other.angle
            && self.scale == other.scale
    }
}
impl Shape for Polygon {
    fn perimeter(&self) -> f32 {
        self.edges().iter().map(|edge| edge.length()).sum()
    }

    fn area(&self) -> f32 {
        self.signed_area().abs()
    }

    /// Returns whether polygon contains point (even-odd rule).
    ///
    fn contains_point(&self, point: Point) -> bool {
        is_point_in_polygon(self.vertices(), point)
    }
}
impl PolygonLike for Polygon {
    fn vertices(&self) -> &[Vertex] {
        self.world_vertices.get_or_init(|| {
            trace!(
                "Rebuilding world vertices of polygon with {} vertices",
                self.local_vertices.len()
            );
            let transform: Affine2 = self.transform();
            self.local_vertices
                .iter()
                .map(|vertex| transform.apply_to(*vertex))
                .collect()
        })
    }
}
impl Translatable for Polygon {
    fn position(&self) -> Point {
        self.position
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.position += vector;
        self.invalidate();
    }
}
impl Rotatable for Polygon {
    fn angle(&self) -> Angle {
        self.angle
    }

    fn rotate_on(&mut self, angle: Angle) {
        self.angle += angle;
        self.invalidate();
    }
}
impl Scalable for Polygon {
    fn scale(&self) -> Vector2 {
        self.scale
    }

    fn scale_on(&mut self, scale: Vector2) {
        self.scale = self.scale.scale(scale);
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::Polygon;
    use crate::mathcore::{
        errors::GeometryError,
        floats::almost_equal,
        shapes::{PolygonLike, Rectangle, Shape},
        transforms::{Rotatable, Scalable, Translatable},
        vectors::{Point, Vector2, Vertex},
        Angle,
    };

    fn unit_square() -> Polygon {
        Polygon::new(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(1.0, 0.0),
            Vertex::new(1.0, 1.0),
            Vertex::new(0.0, 1.0),
        ])
    }

    #[test]
    fn cache() {
        let mut polygon: Polygon = unit_square();
        assert_eq!(polygon.vertices(), polygon.local_vertices());

        polygon.translate_on(Vector2::new(2.0, 0.0));
        assert_eq!(polygon.vertices()[0], Vertex::new(2.0, 0.0));
        polygon.translate_to(Point::new(-1.0, -1.0));
        assert_eq!(polygon.vertices()[2], Vertex::new(0.0, 0.0));

        polygon.set_vertices(vec![
            Vertex::new(0.0, 0.0),
            Vertex::new(2.0, 0.0),
            Vertex::new(0.0, 2.0),
        ]);
        assert_eq!(polygon.vertices().len(), 3);
        assert_eq!(polygon.vertices()[1], Vertex::new(1.0, -1.0));

        let clone: Polygon = polygon.clone();
        assert_eq!(clone, polygon);
        assert_eq!(clone.vertices(), polygon.vertices());
    }

    #[test]
    fn transforms() {
        let mut polygon: Polygon = unit_square();
        polygon.set_origin(Point::new(0.5, 0.5));
        polygon.rotate_on(Angle::DEG45);
        polygon.rotate_on(Angle::DEG45);
        assert_eq!(polygon.angle(), Angle::DEG90);
        assert_eq!(polygon.vertices()[0], Vertex::new(1.0, 0.0));

        polygon.rotate_to(Angle::zero());
        polygon.set_scale(Vector2::new(3.0, 1.0));
        assert_eq!(polygon.scale(), Vector2::new(3.0, 1.0));
        assert_eq!(polygon.vertices()[0], Vertex::new(-1.0, 0.0));
        assert_eq!(polygon.vertices()[2], Vertex::new(2.0, 1.0));
        assert!(almost_equal(polygon.area(), 3.0));
        assert_eq!(polygon.centroid(), Point::new(0.5, 0.5));
        assert_eq!(
            polygon.bounding_rectangle(),
            Rectangle::new(-1.0, 0.0, 3.0, 1.0)
        );
    }

    #[test]
    fn measures() {
        let square: Polygon = unit_square();
        assert!(square.is_counter_clockwise());
        assert_eq!(square.signed_area(), 1.0);
        assert_eq!(square.perimeter(), 4.0);
        assert_eq!(square.centroid(), Point::new(0.5, 0.5));

        let clockwise: Polygon = Polygon::new(square.local_vertices().iter().rev().copied().collect());
        assert!(!clockwise.is_counter_clockwise());
        assert_eq!(clockwise.signed_area(), -1.0);
        assert_eq!(clockwise.area(), 1.0);

        assert!(square.contains_point(Point::new(0.5, 0.5)));
        assert!(!square.contains_point(Point::new(1.5, 1.5)));
        assert!(clockwise.contains_point(Point::new(0.5, 0.5)));

        let empty: Polygon = Polygon::new(Vec::new());
        assert_eq!(empty.area(), 0.0);
        assert_eq!(empty.centroid(), Point::zero());
        assert_eq!(empty.bounding_rectangle(), Rectangle::default());
    }

    #[test]
    fn coordinates() {
        let triangle: Polygon =
            Polygon::try_from_coordinates(&[0.0, 0.0, 4.0, 0.0, 0.0, 3.0]).expect("Coordinates are valid");
        assert_eq!(triangle.area(), 6.0);
        assert_eq!(triangle.perimeter(), 12.0);

        assert_eq!(
            Polygon::try_from_coordinates(&[0.0, 0.0, 4.0, 0.0, 0.0]),
            Err(GeometryError::OddCoordinateCount { len: 5 })
        );
        assert_eq!(
            Polygon::try_from_coordinates(&[]),
            Err(GeometryError::NotEnoughVertices { count: 0 })
        );
    }
}
