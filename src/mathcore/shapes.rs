//! `mathcore::shapes` submodule defines several traits and implements structs that are representing various shapes and geometrical primitives.
//!

// submodules and public re-exports
mod polygons;
pub use polygons::*;

use crate::mathcore::{
    affine::Affine2,
    floats::{almost_equal, FloatOperations},
    intersector::{distance_segment_point, intersect_segments, nearest_segment_point},
    transforms::{Rotatable, Transform, Translatable},
    vectors::{Point, Vector2, Vertex},
    Angle,
};
use std::f32::consts::PI;

/// [`Segment`] struct represents two-dimensional line segment.
///
/// This struct is not an implementor of [`Shape`] trait because most of associated functions make
/// no sense for line segment (e.g. `perimeter` and `area` from [`Shape`]).
/// Transform traits that are implemented ([`Translatable`] and [`Rotatable`]) supply comments on
/// what is considered position and angle of a line segment.
///
/// `Segment.point1` is considered as base, so that the slope is defined as
/// `self.point2 - self.point1`.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Segment {
    /// First point of segment.
    ///
    pub point1: Point,
    /// Second point of segment.
    ///
    pub point2: Point,
}
impl Segment {
    /// Constructs segment from its endpoints.
    ///
    pub const fn new(point1: Point, point2: Point) -> Self {
        Segment { point1, point2 }
    }

    /// Returns length of a segment.
    ///
    pub fn length(&self) -> f32 {
        self.slope().magnitude()
    }

    /// Returns slope of a segment.
    ///
    pub fn slope(&self) -> Vector2 {
        self.point2 - self.point1
    }
    /// Returns `k` coefficient of a line that contains this segment.
    ///
    /// `k` stands for a gradient or a tangent of inclination angle of a line or a derivative from its equation ->
    /// `y = kx + b`, `k = tg(a) = dy/dx`.
    /// For vertical lines `k` equals `+inf`/`-inf` depending on direction of a segment.
    ///
    pub fn k(&self) -> f32 {
        let slope: Vector2 = self.slope().correct_to(0);
        if almost_equal(slope.y, 0.0) {
            0.0
        } else if almost_equal(slope.x, 0.0) {
            if slope.y > 0.0 {
                f32::INFINITY
            } else {
                f32::NEG_INFINITY
            }
        } else {
            slope.y / slope.x
        }
    }
    /// Returns `b` coefficient of a line that contains this segment.
    ///
    /// `b` stands for height or y-intercept -> `y = kx + b`, `b = y - kx`.
    ///
    pub fn b(&self) -> f32 {
        self.point2.y - self.k() * self.point2.x
    }

    /// Returns point at which two segments intersect.
    ///
    /// If segments are parallel (even if they are collinear and overlap), `None` is returned.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::shapes::Segment;
    /// # use ggeometry::mathcore::vectors::Point;
    /// let s1: Segment = Segment::new(Point::new(0.0, 0.0), Point::new(2.0, 2.0));
    /// let s2: Segment = Segment::new(Point::new(0.0, 2.0), Point::new(2.0, 0.0));
    /// assert_eq!(s1.intersection(s2), Some(Point::new(1.0, 1.0)));
    /// ```
    ///
    pub fn intersection(self, other: Segment) -> Option<Point> {
        intersect_segments(self.point1, self.point2, other.point1, other.point2)
    }
    /// Returns point of segment that is the nearest to the given point.
    ///
    pub fn nearest_point(&self, point: Point) -> Point {
        nearest_segment_point(self.point1, self.point2, point)
    }
    /// Returns distance from segment to the given point.
    ///
    pub fn distance_to_point(&self, point: Point) -> f32 {
        distance_segment_point(self.point1, self.point2, point)
    }
}
impl FloatOperations for Segment {
    fn correct_to(self, digits: i32) -> Self {
        Segment {
            point1: self.point1.correct_to(digits),
            point2: self.point2.correct_to(digits),
        }
    }

    fn round_up_to(self, digits: i32) -> Self {
        Segment {
            point1: self.point1.round_up_to(digits),
            point2: self.point2.round_up_to(digits),
        }
    }
}
impl Translatable for Segment {
    /// For a line segment, position is a midpoint.
    ///
    fn position(&self) -> Point {
        (self.point1 + self.point2) * 0.5
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.point1 += vector;
        self.point2 += vector;
    }
}
impl Rotatable for Segment {
    /// For a line segment, angle is inclination angle of a line that contains line segment.
    ///
    fn angle(&self) -> Angle {
        Angle::from_radians(self.k().atan())
    }

    /// Rotates segment around its midpoint.
    ///
    fn rotate_on(&mut self, angle: Angle) {
        let midpoint: Vector2 = self.position();
        let transform: Affine2 = Transform::combine([
            Transform::Translation { vector: -midpoint },
            Transform::Rotation { angle },
            Transform::Translation { vector: midpoint },
        ]);
        self.point1 = transform.apply_to(self.point1);
        self.point2 = transform.apply_to(self.point2);
    }
}

/// [`Shape`] trait defines two-dimensional shape on a plane which can be moved.
///
pub trait Shape: Translatable {
    /// Returns perimeter of a shape.
    ///
    fn perimeter(&self) -> f32;
    /// Returns total surface area of a shape.
    ///
    fn area(&self) -> f32;

    /// Returns whether shape contains point or not.
    ///
    fn contains_point(&self, point: Point) -> bool;
}
/// [`PolygonLike`] trait defines shapes that can be represented by a list of vertices.
///
pub trait PolygonLike: Shape {
    /// Returns shared slice with polygon's vertices in world coordinates.
    ///
    fn vertices(&self) -> &[Vertex];

    /// Returns `Vec` with polygon's edges.
    ///
    /// Length of `self.edges()` is guaranteed to be equal to `self.vertices().len()`.
    ///
    fn edges(&self) -> Vec<Segment> {
        let vertices: &[Vertex] = self.vertices();
        let n: usize = vertices.len();

        let mut edges: Vec<Segment> = Vec::with_capacity(n);
        for i in 0..n {
            edges.push(Segment {
                point1: vertices[i],
                point2: vertices[(i + 1) % n],
            });
        }
        edges
    }
}

/// [`Circle`] struct represents circle on a plane.
///
/// Radius is expected to be non-negative, but it is not validated.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Circle {
    /// Center of a circle.
    ///
    pub center: Point,
    /// Radius of a circle.
    ///
    pub radius: f32,
}
impl Circle {
    /// Constructs circle from its center and radius.
    ///
    pub const fn new(center: Point, radius: f32) -> Self {
        Circle { center, radius }
    }

    /// Returns circumference of a circle.
    ///
    pub fn circumference(&self) -> f32 {
        2.0 * PI * self.radius
    }

    /// Returns whether circles overlap (touching circles do not overlap).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::shapes::Circle;
    /// # use ggeometry::mathcore::vectors::Point;
    /// let c1: Circle = Circle::new(Point::zero(), 1.0);
    /// assert!(c1.overlaps(&Circle::new(Point::new(1.5, 0.0), 1.0)));
    /// assert!(!c1.overlaps(&Circle::new(Point::new(2.0, 0.0), 1.0)));
    /// ```
    ///
    pub fn overlaps(&self, other: &Circle) -> bool {
        let radius_sum: f32 = self.radius + other.radius;
        self.center.sqr_distance(other.center) < radius_sum * radius_sum
    }
    /// Returns whether other circle lies in this circle (touching from inside is allowed).
    ///
    pub fn contains(&self, other: &Circle) -> bool {
        let radius_diff: f32 = self.radius - other.radius;
        if radius_diff < 0.0 {
            return false;
        }
        self.center.sqr_distance(other.center) <= radius_diff * radius_diff
    }
}
impl Shape for Circle {
    fn perimeter(&self) -> f32 {
        self.circumference()
    }

    fn area(&self) -> f32 {
        PI * self.radius * self.radius
    }

    /// Points that lie on the circle are considered lying inside.
    ///
    fn contains_point(&self, point: Point) -> bool {
        self.center.sqr_distance(point) <= self.radius * self.radius
    }
}
impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && almost_equal(self.radius, other.radius)
    }
}
impl Translatable for Circle {
    fn position(&self) -> Point {
        self.center
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.center += vector;
    }
}

/// [`Ellipse`] struct represents axis-aligned ellipse on a plane.
///
/// Sizes are expected to be non-negative, but they are not validated.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Ellipse {
    /// Center of an ellipse.
    ///
    pub center: Point,
    /// Width of an ellipse (doubled semi-axis along x).
    ///
    pub width: f32,
    /// Height of an ellipse (doubled semi-axis along y).
    ///
    pub height: f32,
}
impl Ellipse {
    /// Constructs ellipse from its center and sizes.
    ///
    pub const fn new(center: Point, width: f32, height: f32) -> Self {
        Ellipse {
            center,
            width,
            height,
        }
    }

    /// Returns approximate circumference of an ellipse.
    ///
    /// Ramanujan's approximation is used: `PI * (3(a + b) - sqrt((3a + b)(a + 3b)))`.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::shapes::Ellipse;
    /// # use ggeometry::mathcore::vectors::Point;
    /// # use std::f32::consts::PI;
    /// let circle: Ellipse = Ellipse::new(Point::zero(), 2.0, 2.0);
    /// assert!((circle.circumference() - 2.0 * PI).abs() < 0.0001);
    /// ```
    ///
    pub fn circumference(&self) -> f32 {
        let (a, b): (f32, f32) = (self.width / 2.0, self.height / 2.0);
        PI * (3.0 * (a + b) - ((3.0 * a + b) * (a + 3.0 * b)).sqrt())
    }
}
impl Shape for Ellipse {
    fn perimeter(&self) -> f32 {
        self.circumference()
    }

    fn area(&self) -> f32 {
        PI * (self.width / 2.0) * (self.height / 2.0)
    }

    /// Points that lie on the ellipse are considered lying inside.
    ///
    fn contains_point(&self, point: Point) -> bool {
        let (a, b): (f32, f32) = (self.width / 2.0, self.height / 2.0);
        let local: Vector2 = point - self.center;
        (local.x * local.x) / (a * a) + (local.y * local.y) / (b * b) <= 1.0
    }
}
impl PartialEq for Ellipse {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
            && almost_equal(self.width, other.width)
            && almost_equal(self.height, other.height)
    }
}
impl Translatable for Ellipse {
    fn position(&self) -> Point {
        self.center
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.center += vector;
    }
}

/// [`Rectangle`] struct represents axis-aligned rectangle on a plane.
///
/// `(x, y)` is the bottom-left corner of a rectangle.
/// Sizes are expected to be non-negative, but they are not validated.
///
#[derive(Copy, Clone, Debug, Default)]
pub struct Rectangle {
    /// X coordinate of the bottom-left corner.
    ///
    pub x: f32,
    /// Y coordinate of the bottom-left corner.
    ///
    pub y: f32,
    /// Width of a rectangle.
    ///
    pub width: f32,
    /// Height of a rectangle.
    ///
    pub height: f32,
}
impl Rectangle {
    /// Constructs rectangle from its bottom-left corner and sizes.
    ///
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rectangle {
            x,
            y,
            width,
            height,
        }
    }
    /// Constructs the smallest rectangle that contains both given points.
    ///
    pub fn from_corners(corner1: Point, corner2: Point) -> Self {
        let (min, max): (Point, Point) = (corner1.min(corner2), corner1.max(corner2));
        Rectangle::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Returns center of a rectangle.
    ///
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
    /// Returns corners of a rectangle in counterclockwise order starting from the bottom-left one.
    ///
    pub fn corners(&self) -> [Vertex; 4] {
        let (right, top): (f32, f32) = (self.x + self.width, self.y + self.height);
        [
            Vertex::new(self.x, self.y),
            Vertex::new(right, self.y),
            Vertex::new(right, top),
            Vertex::new(self.x, top),
        ]
    }

    /// Returns whether other rectangle lies in this rectangle (boundary included).
    ///
    pub fn contains(&self, other: &Rectangle) -> bool {
        other.x >= self.x
            && other.x + other.width <= self.x + self.width
            && other.y >= self.y
            && other.y + other.height <= self.y + self.height
    }
    /// Returns whether rectangles overlap (touching rectangles do not overlap).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::shapes::Rectangle;
    /// let r1: Rectangle = Rectangle::new(0.0, 0.0, 4.0, 4.0);
    /// assert!(r1.overlaps(&Rectangle::new(2.0, 2.0, 4.0, 4.0)));
    /// assert!(!r1.overlaps(&Rectangle::new(4.0, 0.0, 4.0, 4.0)));
    /// ```
    ///
    pub fn overlaps(&self, other: &Rectangle) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
    /// Returns the smallest rectangle that contains both rectangles.
    ///
    pub fn merge(&self, other: &Rectangle) -> Rectangle {
        let min_x: f32 = self.x.min(other.x);
        let min_y: f32 = self.y.min(other.y);
        let max_x: f32 = (self.x + self.width).max(other.x + other.width);
        let max_y: f32 = (self.y + self.height).max(other.y + other.height);
        Rectangle::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }
}
impl Shape for Rectangle {
    fn perimeter(&self) -> f32 {
        2.0 * (self.width + self.height)
    }

    fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Points that lie on the border are considered lying inside.
    ///
    fn contains_point(&self, point: Point) -> bool {
        self.x <= point.x
            && point.x <= self.x + self.width
            && self.y <= point.y
            && point.y <= self.y + self.height
    }
}
impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.x, other.x)
            && almost_equal(self.y, other.y)
            && almost_equal(self.width, other.width)
            && almost_equal(self.height, other.height)
    }
}
impl Translatable for Rectangle {
    /// For a rectangle, position is its bottom-left corner.
    ///
    fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    fn translate_on(&mut self, vector: Vector2) {
        self.x += vector.x;
        self.y += vector.y;
    }
}
