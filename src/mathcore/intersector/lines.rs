//! `intersector::lines` submodule implements intersections of two-dimensional lines, segments and rays
//! with each other and with shapes.
//!

use crate::mathcore::{
    intersector::{nearest_segment_point, MinimumTranslationVector},
    shapes::{Circle, Rectangle, Shape},
    vectors::{Point, Vector2, Vertex},
};

/// Returns point at which two infinite lines intersect.
///
/// First line is given by `p1` and `p2` and the second one by `p3` and `p4`.
/// If lines are parallel, `None` is returned.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_lines;
/// # use ggeometry::mathcore::vectors::Point;
/// assert_eq!(
///     intersect_lines(
///         Point::new(0.0, 0.0), Point::new(1.0, 1.0),
///         Point::new(4.0, 0.0), Point::new(3.0, 1.0),
///     ),
///     Some(Point::new(2.0, 2.0))
/// );
/// ```
///
pub fn intersect_lines(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let (x1, y1, x2, y2): (f32, f32, f32, f32) = (p1.x, p1.y, p2.x, p2.y);
    let (x3, y3, x4, y4): (f32, f32, f32, f32) = (p3.x, p3.y, p4.x, p4.y);

    let d: f32 = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if d == 0.0 {
        return None;
    }
    let ua: f32 = ((x4 - x3) * (y1 - y3) - (y4 - y3) * (x1 - x3)) / d;
    Some(p1 + (p2 - p1) * ua)
}
/// Returns point at which two segments intersect.
///
/// First segment is given by `p1` and `p2` and the second one by `p3` and `p4`.
/// If segments are parallel (even if they are collinear and overlap), `None` is returned.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_segments;
/// # use ggeometry::mathcore::vectors::Point;
/// assert_eq!(
///     intersect_segments(
///         Point::new(0.0, 0.0), Point::new(2.0, 2.0),
///         Point::new(0.0, 2.0), Point::new(2.0, 0.0),
///     ),
///     Some(Point::new(1.0, 1.0))
/// );
/// ```
///
pub fn intersect_segments(p1: Point, p2: Point, p3: Point, p4: Point) -> Option<Point> {
    let (x1, y1, x2, y2): (f32, f32, f32, f32) = (p1.x, p1.y, p2.x, p2.y);
    let (x3, y3, x4, y4): (f32, f32, f32, f32) = (p3.x, p3.y, p4.x, p4.y);

    let d: f32 = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
    if d == 0.0 {
        return None;
    }

    let (yd, xd): (f32, f32) = (y1 - y3, x1 - x3);
    let ua: f32 = ((x4 - x3) * yd - (y4 - y3) * xd) / d;
    if !(0.0..=1.0).contains(&ua) {
        return None;
    }
    let ub: f32 = ((x2 - x1) * yd - (y2 - y1) * xd) / d;
    if !(0.0..=1.0).contains(&ub) {
        return None;
    }
    Some(p1 + (p2 - p1) * ua)
}
/// Returns parameter on the first ray at which it intersects the second one.
///
/// Intersection point can be found as `start1 + direction1 * t`.
/// Rays are treated as infinite lines, so parameter may be negative.
/// If rays are parallel, `None` is returned.
///
pub fn intersect_ray_ray(
    start1: Point,
    direction1: Vector2,
    start2: Point,
    direction2: Vector2,
) -> Option<f32> {
    let difference: Vector2 = start2 - start1;
    let d1xd2: f32 = direction1.cross_product(direction2);
    if d1xd2 == 0.0 {
        return None;
    }
    Some(difference.x * (direction2.y / d1xd2) - difference.y * (direction2.x / d1xd2))
}

/// Returns whether infinite line (that is given by two points) crosses any edge of polygon.
///
pub fn intersect_line_polygon(p1: Point, p2: Point, polygon: &[Vertex]) -> bool {
    let Some(mut last) = polygon.last().copied() else {
        return false;
    };
    let (x1, y1, x2, y2): (f32, f32, f32, f32) = (p1.x, p1.y, p2.x, p2.y);
    for &vertex in polygon {
        let (x3, y3, x4, y4): (f32, f32, f32, f32) = (last.x, last.y, vertex.x, vertex.y);
        let d: f32 = (y4 - y3) * (x2 - x1) - (x4 - x3) * (y2 - y1);
        if d != 0.0 {
            let (yd, xd): (f32, f32) = (y1 - y3, x1 - x3);
            let ub: f32 = ((x2 - x1) * yd - (y2 - y1) * xd) / d;
            if (0.0..=1.0).contains(&ub) {
                return true;
            }
        }
        last = vertex;
    }
    false
}
/// Returns whether segment crosses any edge of polygon.
///
/// Segment that lies completely inside polygon does not cross its edges.
///
pub fn intersect_segment_polygon(p1: Point, p2: Point, polygon: &[Vertex]) -> bool {
    let Some(mut last) = polygon.last().copied() else {
        return false;
    };
    for &vertex in polygon {
        if intersect_segments(p1, p2, last, vertex).is_some() {
            return true;
        }
        last = vertex;
    }
    false
}
/// Returns whether segment intersects rectangle.
///
/// Segment that lies completely inside rectangle intersects it.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_segment_rectangle;
/// # use ggeometry::mathcore::shapes::Rectangle;
/// # use ggeometry::mathcore::vectors::Point;
/// let rect: Rectangle = Rectangle::new(0.0, 0.0, 2.0, 2.0);
/// assert!(intersect_segment_rectangle(Point::new(-1.0, 1.0), Point::new(3.0, 1.0), &rect));
/// assert!(intersect_segment_rectangle(Point::new(0.5, 0.5), Point::new(1.5, 1.5), &rect));
/// assert!(!intersect_segment_rectangle(Point::new(-1.0, 3.0), Point::new(3.0, 3.0), &rect));
/// ```
///
pub fn intersect_segment_rectangle(start: Point, end: Point, rectangle: &Rectangle) -> bool {
    let [bottom_left, bottom_right, top_right, top_left]: [Vertex; 4] = rectangle.corners();
    intersect_segments(start, end, bottom_left, top_left).is_some()
        || intersect_segments(start, end, bottom_left, bottom_right).is_some()
        || intersect_segments(start, end, bottom_right, top_right).is_some()
        || intersect_segments(start, end, top_left, top_right).is_some()
        || rectangle.contains_point(start)
}
/// Returns minimum translation vector if segment intersects circle.
///
/// Normal points from the nearest point of segment to circle's center,
/// so moving circle by `normal * depth` separates shapes.
/// If segment passes through the center, normal is perpendicular to the segment
/// and depth is equal to the radius.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::{intersect_segment_circle, MinimumTranslationVector};
/// # use ggeometry::mathcore::shapes::Circle;
/// # use ggeometry::mathcore::vectors::{Point, Vector2};
/// let circle: Circle = Circle::new(Point::new(1.0, 0.5), 1.0);
/// let mtv: MinimumTranslationVector =
///     intersect_segment_circle(Point::new(0.0, 0.0), Point::new(2.0, 0.0), &circle)
///         .expect("Segment intersects circle");
/// assert_eq!(mtv.normal, Vector2::new(0.0, 1.0));
/// assert_eq!(mtv.depth, 0.5);
/// ```
///
pub fn intersect_segment_circle(
    start: Point,
    end: Point,
    circle: &Circle,
) -> Option<MinimumTranslationVector> {
    let nearest: Point = nearest_segment_point(start, end, circle.center);
    let distance: f32 = nearest.distance(circle.center);
    if distance >= circle.radius {
        return None;
    }
    if nearest == circle.center {
        // segment passes through the center, so it is pushed out sideways
        let side: Vector2 = Vector2::new(end.y - start.y, start.x - end.x);
        let normal: Vector2 = if side == Vector2::zero() {
            Vector2::new(0.0, 1.0)
        } else {
            side.normalized()
        };
        return Some(MinimumTranslationVector {
            normal,
            depth: circle.radius,
        });
    }
    Some(MinimumTranslationVector {
        normal: (circle.center - nearest).normalized(),
        depth: circle.radius - distance,
    })
}
/// Returns whether segment intersects circle.
///
/// Circle is given by its center and squared radius, touching is not intersection.
///
pub fn intersects_segment_circle(
    start: Point,
    end: Point,
    center: Point,
    squared_radius: f32,
) -> bool {
    nearest_segment_point(start, end, center).sqr_distance(center) < squared_radius
}

#[cfg(test)]
mod tests {
    use super::{
        intersect_line_polygon, intersect_lines, intersect_ray_ray, intersect_segment_circle,
        intersect_segment_polygon, intersect_segment_rectangle, intersect_segments,
        intersects_segment_circle,
    };
    use crate::mathcore::{
        intersector::MinimumTranslationVector,
        shapes::{Circle, Rectangle},
        vectors::{Point, Vector2, Vertex},
    };
    use test_log::test;

    #[test]
    fn lines() {
        let (p1, p2, p3, p4): (Point, Point, Point, Point) = (
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(5.0, -1.0),
            Point::new(5.0, 1.0),
        );
        assert_eq!(intersect_lines(p1, p2, p3, p4), Some(Point::new(5.0, 0.0)));
        assert_eq!(intersect_lines(p2, p1, p4, p3), Some(Point::new(5.0, 0.0)));
        assert!(intersect_segments(p1, p2, p3, p4).is_none());
        assert!(intersect_lines(p1, p2, Point::new(0.0, 1.0), Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn segments() {
        assert_eq!(
            intersect_segments(
                Point::new(0.0, 0.0),
                Point::new(2.0, 2.0),
                Point::new(0.0, 2.0),
                Point::new(2.0, 0.0)
            ),
            Some(Point::new(1.0, 1.0))
        );
        assert_eq!(
            intersect_segments(
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 2.0)
            ),
            Some(Point::new(2.0, 0.0))
        );
        assert!(intersect_segments(
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(3.0, 0.0)
        )
        .is_none());
    }

    #[test]
    fn rays() {
        let t: f32 = intersect_ray_ray(
            Point::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Point::new(3.0, -2.0),
            Vector2::new(0.0, 1.0),
        )
        .expect("Rays are not parallel");
        assert_eq!(t, 3.0);
        assert!(intersect_ray_ray(
            Point::new(0.0, 0.0),
            Vector2::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Vector2::new(2.0, 2.0),
        )
        .is_none());
    }

    #[test]
    fn shapes() {
        let square: [Vertex; 4] = [
            Vertex::new(0.0, 0.0),
            Vertex::new(2.0, 0.0),
            Vertex::new(2.0, 2.0),
            Vertex::new(0.0, 2.0),
        ];
        assert!(intersect_line_polygon(
            Point::new(10.0, 1.0),
            Point::new(11.0, 1.0),
            &square
        ));
        assert!(!intersect_line_polygon(
            Point::new(10.0, 3.0),
            Point::new(11.0, 3.0),
            &square
        ));
        assert!(intersect_segment_polygon(
            Point::new(1.0, 1.0),
            Point::new(3.0, 1.0),
            &square
        ));
        assert!(!intersect_segment_polygon(
            Point::new(0.5, 1.0),
            Point::new(1.5, 1.0),
            &square
        ));

        let rect: Rectangle = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        assert!(intersect_segment_rectangle(
            Point::new(1.0, -1.0),
            Point::new(1.0, 0.5),
            &rect
        ));
        assert!(!intersect_segment_rectangle(
            Point::new(3.0, -1.0),
            Point::new(3.0, 5.0),
            &rect
        ));

        let circle: Circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        assert!(intersect_segment_circle(Point::new(1.0, -1.0), Point::new(1.0, 1.0), &circle).is_none());
        assert!(!intersects_segment_circle(
            Point::new(1.0, -1.0),
            Point::new(1.0, 1.0),
            circle.center,
            1.0
        ));
        assert!(intersects_segment_circle(
            Point::new(0.5, -1.0),
            Point::new(0.5, 1.0),
            circle.center,
            1.0
        ));
        let mtv = intersect_segment_circle(Point::new(-0.5, -1.0), Point::new(-0.5, 1.0), &circle)
            .expect("Segment crosses circle");
        assert_eq!(mtv.normal, Vector2::new(1.0, 0.0));
        assert_eq!(mtv.depth, 0.5);
        assert_eq!(mtv.translation(), Vector2::new(0.5, 0.0));
    }

    #[test]
    fn segment_through_circle_center() {
        let circle: Circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        let mtv: MinimumTranslationVector =
            intersect_segment_circle(Point::new(-2.0, 0.0), Point::new(2.0, 0.0), &circle)
                .expect("Segment crosses circle");
        assert_eq!(mtv.normal, Vector2::new(0.0, -1.0));
        assert_eq!(mtv.depth, 1.0);

        let moved: Circle = Circle::new(circle.center + mtv.translation(), circle.radius);
        assert!(intersect_segment_circle(Point::new(-2.0, 0.0), Point::new(2.0, 0.0), &moved).is_none());

        let dot: MinimumTranslationVector =
            intersect_segment_circle(Point::zero(), Point::zero(), &circle)
                .expect("Degenerate segment lies in circle");
        assert_eq!(dot.normal.magnitude(), 1.0);
        assert_eq!(dot.depth, 1.0);
    }
}
