//! `intersector::points` submodule implements point containment tests and point distances.
//!

use crate::mathcore::{
    vectors::{Point, Vector2, Vector3, Vertex},
    Sign,
};

/// Returns whether point lies in three-dimensional triangle.
///
/// Point is assumed to lie in the plane of triangle - that is not verified.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::is_point_in_triangle;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let (t1, t2, t3): (Vector3, Vector3, Vector3) =
///     (Vector3::zero(), Vector3::X, Vector3::Y);
/// assert!(is_point_in_triangle(Vector3::new(0.2, 0.2, 0.0), t1, t2, t3));
/// assert!(!is_point_in_triangle(Vector3::new(0.8, 0.8, 0.0), t1, t2, t3));
/// ```
///
pub fn is_point_in_triangle(point: Vector3, t1: Vector3, t2: Vector3, t3: Vector3) -> bool {
    let (a, b, c): (Vector3, Vector3, Vector3) = (t1 - point, t2 - point, t3 - point);

    let u: Vector3 = b ^ c;
    let w: Vector3 = c ^ a;
    if u * w < 0.0 {
        return false;
    }
    let v: Vector3 = a ^ b;
    u * v >= 0.0
}
/// Returns whether point lies in two-dimensional triangle.
///
/// Winding of triangle does not matter.
///
pub fn is_point_in_triangle_2d(point: Point, a: Point, b: Point, c: Point) -> bool {
    let (px1, py1): (f32, f32) = (point.x - a.x, point.y - a.y);
    let side12: bool = (b.x - a.x) * py1 - (b.y - a.y) * px1 > 0.0;
    if ((c.x - a.x) * py1 - (c.y - a.y) * px1 > 0.0) == side12 {
        return false;
    }
    ((c.x - b.x) * (point.y - b.y) - (c.y - b.y) * (point.x - b.x) > 0.0) == side12
}

/// Returns whether point lies in polygon (even-odd rule).
///
/// Ray is cast from the point along x axis and crossings with polygon's edges are counted.
/// Polygon may be concave and its winding does not matter.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::is_point_in_polygon;
/// # use ggeometry::mathcore::vectors::{Point, Vertex};
/// let square: [Vertex; 4] = [
///     Vertex::new(0.0, 0.0),
///     Vertex::new(1.0, 0.0),
///     Vertex::new(1.0, 1.0),
///     Vertex::new(0.0, 1.0),
/// ];
/// assert!(is_point_in_polygon(&square, Point::new(0.5, 0.5)));
/// assert!(!is_point_in_polygon(&square, Point::new(1.5, 1.5)));
/// ```
///
pub fn is_point_in_polygon(polygon: &[Vertex], point: Point) -> bool {
    let Some(mut last) = polygon.last().copied() else {
        return false;
    };
    let mut inside: bool = false;
    for &vertex in polygon {
        if ((vertex.y < point.y && last.y >= point.y) || (last.y < point.y && vertex.y >= point.y))
            && vertex.x + (point.y - vertex.y) / (last.y - vertex.y) * (last.x - vertex.x) < point.x
        {
            inside = !inside;
        }
        last = vertex;
    }
    inside
}
/// Returns whether point lies in polygon that is given by flat array of coordinates (`[x1, y1, x2, y2, ...]`).
///
/// Trailing unpaired coordinate is ignored.
///
pub fn is_point_in_polygon_coordinates(polygon: &[f32], x: f32, y: f32) -> bool {
    let vertices: Vec<Vertex> = polygon
        .chunks_exact(2)
        .map(|pair| Vertex::new(pair[0], pair[1]))
        .collect();
    is_point_in_polygon(&vertices, Point::new(x, y))
}

/// Returns on which side of the line (that is given by two points) point lies.
///
/// `Sign::Positive` stands for the left side (counterclockwise), `Sign::Negative` for the right one and
/// `Sign::Zero` means that point lies on the line.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::point_line_side;
/// # use ggeometry::mathcore::vectors::Point;
/// # use ggeometry::mathcore::Sign;
/// let (l1, l2): (Point, Point) = (Point::zero(), Point::new(1.0, 0.0));
/// assert_eq!(point_line_side(l1, l2, Point::new(5.0, 1.0)), Sign::Positive);
/// assert_eq!(point_line_side(l1, l2, Point::new(5.0, -1.0)), Sign::Negative);
/// assert_eq!(point_line_side(l1, l2, Point::new(5.0, 0.0)), Sign::Zero);
/// ```
///
pub fn point_line_side(line_point1: Point, line_point2: Point, point: Point) -> Sign {
    Sign::from(
        (line_point2.x - line_point1.x) * (point.y - line_point1.y)
            - (line_point2.y - line_point1.y) * (point.x - line_point1.x),
    )
}

/// Returns distance from infinite line (that is given by two points) to the point.
///
pub fn distance_line_point(start: Point, end: Point, point: Point) -> f32 {
    let normal_length: f32 = (end - start).magnitude();
    ((point.x - start.x) * (end.y - start.y) - (point.y - start.y) * (end.x - start.x)).abs()
        / normal_length
}
/// Returns distance from segment to the point.
///
pub fn distance_segment_point(start: Point, end: Point, point: Point) -> f32 {
    nearest_segment_point(start, end, point).distance(point)
}
/// Returns point of segment that is the nearest to the given point.
///
/// Point is projected onto the line and the projection is clamped to segment's endpoints.
/// Segment of zero length returns its start.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::nearest_segment_point;
/// # use ggeometry::mathcore::vectors::Point;
/// let (start, end): (Point, Point) = (Point::zero(), Point::new(4.0, 0.0));
/// assert_eq!(nearest_segment_point(start, end, Point::new(1.0, 3.0)), Point::new(1.0, 0.0));
/// assert_eq!(nearest_segment_point(start, end, Point::new(-1.0, 3.0)), start);
/// assert_eq!(nearest_segment_point(start, end, Point::new(9.0, 3.0)), end);
/// ```
///
pub fn nearest_segment_point(start: Point, end: Point, point: Point) -> Point {
    let direction: Vector2 = end - start;
    let sqr_length: f32 = direction.sqr_magnitude();
    if sqr_length == 0.0 {
        return start;
    }
    let t: f32 = ((point - start) * direction) / sqr_length;
    if t <= 0.0 {
        start
    } else if t >= 1.0 {
        end
    } else {
        start + direction * t
    }
}
