//! `intersector::polygons` submodule implements polygon clipping, the Separating Axis Theorem
//! and overlap tests of simple shapes.
//!

use crate::mathcore::{
    intersector::{
        intersect_lines, intersect_segments, is_point_in_polygon, point_line_side,
        MinimumTranslationVector,
    },
    shapes::{Circle, Polygon, PolygonLike, Rectangle},
    vectors::{Point, Vector2, Vector3, Vertex},
    Sign,
};
use log::trace;

/// Returns intersection of two polygons.
///
/// Sutherland–Hodgman algorithm is used: first polygon is clipped by every edge of the second one,
/// so the second polygon should be convex. Winding of either polygon does not matter.
/// Resulting polygon is given in world coordinates (its transform is identity).
///
/// `None` is returned if either polygon has no vertices or nothing remains after clipping.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_polygons;
/// # use ggeometry::mathcore::shapes::{Polygon, Shape};
/// # use ggeometry::mathcore::vectors::Vertex;
/// let square = |x: f32, y: f32, size: f32| Polygon::new(vec![
///     Vertex::new(x, y),
///     Vertex::new(x + size, y),
///     Vertex::new(x + size, y + size),
///     Vertex::new(x, y + size),
/// ]);
/// let overlap: Polygon = intersect_polygons(&square(0.0, 0.0, 2.0), &square(1.0, 1.0, 2.0))
///     .expect("Squares overlap");
/// assert_eq!(overlap.area(), 1.0);
/// assert!(intersect_polygons(&square(0.0, 0.0, 1.0), &square(5.0, 5.0, 1.0)).is_none());
/// ```
///
pub fn intersect_polygons(p1: &Polygon, p2: &Polygon) -> Option<Polygon> {
    let subject: &[Vertex] = p1.vertices();
    let clip: &[Vertex] = p2.vertices();
    if subject.is_empty() || clip.is_empty() {
        return None;
    }

    let orientation: Sign = Sign::from(p2.signed_area());
    let mut input: Vec<Vertex> = subject.to_vec();
    let mut output: Vec<Vertex> = Vec::with_capacity(subject.len() * 2);
    for (i, &edge_start) in clip.iter().enumerate() {
        let edge_end: Vertex = clip[(i + 1) % clip.len()];
        let is_inside =
            |point: Point| point_line_side(edge_start, edge_end, point) * orientation == Sign::Positive;

        let mut previous: Vertex = input.last().copied()?;
        for &current in &input {
            if is_inside(current) {
                if !is_inside(previous) {
                    if let Some(entry) = intersect_lines(previous, current, edge_start, edge_end) {
                        if output.last() != Some(&entry) {
                            output.push(entry);
                        }
                    }
                }
                output.push(current);
            } else if is_inside(previous) {
                if let Some(exit) = intersect_lines(previous, current, edge_start, edge_end) {
                    output.push(exit);
                }
            }
            previous = current;
        }
        std::mem::swap(&mut input, &mut output);
        output.clear();
    }

    if input.is_empty() {
        None
    } else {
        Some(Polygon::new(input))
    }
}
/// Converts flat array of coordinates to vertices (trailing unpaired coordinate is ignored).
///
fn coordinates_to_vertices(coordinates: &[f32]) -> Vec<Vertex> {
    coordinates
        .chunks_exact(2)
        .map(|pair| Vertex::new(pair[0], pair[1]))
        .collect()
}
/// Returns whether two polygons that are given by flat arrays of coordinates intersect.
///
/// Polygons intersect if one of them contains the first vertex of the other or
/// if any of their edges cross.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_polygons_coordinates;
/// let square: [f32; 8] = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
/// let inner: [f32; 6] = [0.5, 0.5, 1.5, 0.5, 1.0, 1.5];
/// let far: [f32; 6] = [5.0, 5.0, 6.0, 5.0, 5.5, 6.0];
/// assert!(intersect_polygons_coordinates(&square, &inner));
/// assert!(!intersect_polygons_coordinates(&square, &far));
/// ```
///
pub fn intersect_polygons_coordinates(p1: &[f32], p2: &[f32]) -> bool {
    let (vertices1, vertices2): (Vec<Vertex>, Vec<Vertex>) =
        (coordinates_to_vertices(p1), coordinates_to_vertices(p2));
    let (Some(&first1), Some(&first2)) = (vertices1.first(), vertices2.first()) else {
        return false;
    };
    is_point_in_polygon(&vertices1, first2)
        || is_point_in_polygon(&vertices2, first1)
        || edges_cross(&vertices1, &vertices2)
}
/// Returns whether any edges of two polygons that are given by flat arrays of coordinates cross.
///
pub fn intersect_polygon_edges(p1: &[f32], p2: &[f32]) -> bool {
    edges_cross(&coordinates_to_vertices(p1), &coordinates_to_vertices(p2))
}
/// Returns whether any edges of two polygons cross.
///
fn edges_cross(p1: &[Vertex], p2: &[Vertex]) -> bool {
    let closed_edges = |polygon: &[Vertex]| -> Vec<(Vertex, Vertex)> {
        polygon
            .iter()
            .enumerate()
            .map(|(i, &vertex)| (polygon[(i + polygon.len() - 1) % polygon.len()], vertex))
            .collect()
    };
    let edges2: Vec<(Vertex, Vertex)> = closed_edges(p2);
    closed_edges(p1).into_iter().any(|(a1, a2)| {
        edges2
            .iter()
            .any(|&(b1, b2)| intersect_segments(a1, a2, b1, b2).is_some())
    })
}

/// Returns unit normals of polygon's edges.
///
/// Edges of zero length have no normal and are skipped.
///
fn edge_axes(vertices: &[Vertex]) -> impl Iterator<Item = Vector2> + '_ {
    vertices.iter().enumerate().filter_map(move |(i, &start)| {
        let end: Vertex = vertices[(i + 1) % vertices.len()];
        let axis: Vector2 = Vector2::new(start.y - end.y, -(start.x - end.x));
        let length: f32 = axis.magnitude();
        if length == 0.0 {
            trace!("Skipping zero-length edge at {start:?} while searching for separating axis");
            return None;
        }
        Some(axis / length)
    })
}
/// Returns projection (as `(min, max)` interval) of vertices onto the axis.
///
fn project(vertices: &[Vertex], axis: Vector2) -> (f32, f32) {
    vertices
        .iter()
        .fold((f32::MAX, -f32::MAX), |(min, max), &vertex| {
            let projection: f32 = vertex * axis;
            (min.min(projection), max.max(projection))
        })
}
/// Returns whether two convex polygons overlap.
///
/// This is the Separating Axis Theorem test that returns on the first separating axis and
/// does not compute minimum translation vector. Touching polygons overlap.
/// Polygons without a single edge of non-zero length never overlap.
///
pub fn overlaps_convex_polygons(vertices1: &[Vertex], vertices2: &[Vertex]) -> bool {
    if vertices1.is_empty() || vertices2.is_empty() {
        return false;
    }
    let mut axes = edge_axes(vertices2).chain(edge_axes(vertices1)).peekable();
    if axes.peek().is_none() {
        return false;
    }
    !axes.any(|axis| {
        let (min1, max1): (f32, f32) = project(vertices1, axis);
        let (min2, max2): (f32, f32) = project(vertices2, axis);
        max1 < min2 || max2 < min1
    })
}
/// Returns minimum translation vector of two convex polygons if they overlap.
///
/// Separating Axis Theorem is used: both polygons are projected onto the normals of every edge
/// (edges of the second polygon are tested first) and the first separating axis ends the test.
/// Otherwise the axis with the smallest overlap is chosen and oriented so that moving the first
/// polygon by `normal * depth` separates polygons. If one projection contains the other,
/// the smaller of two remaining gaps is added to the depth.
///
/// Touching polygons overlap with zero depth.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::{overlap_convex_polygons, MinimumTranslationVector};
/// # use ggeometry::mathcore::vectors::{Vector2, Vertex};
/// let square = |x: f32| [
///     Vertex::new(x, 0.0),
///     Vertex::new(x + 2.0, 0.0),
///     Vertex::new(x + 2.0, 2.0),
///     Vertex::new(x, 2.0),
/// ];
/// let mtv: MinimumTranslationVector = overlap_convex_polygons(&square(0.0), &square(1.0))
///     .expect("Squares overlap");
/// assert_eq!(mtv.normal, Vector2::new(-1.0, 0.0));
/// assert_eq!(mtv.depth, 1.0);
/// assert!(overlap_convex_polygons(&square(0.0), &square(3.0)).is_none());
/// ```
///
pub fn overlap_convex_polygons(
    vertices1: &[Vertex],
    vertices2: &[Vertex],
) -> Option<MinimumTranslationVector> {
    if vertices1.is_empty() || vertices2.is_empty() {
        return None;
    }

    let mut mtv: MinimumTranslationVector = MinimumTranslationVector {
        normal: Vector2::zero(),
        depth: f32::MAX,
    };
    for (a, b, shifted) in [(vertices2, vertices1, true), (vertices1, vertices2, false)] {
        for axis in edge_axes(a) {
            let (min_a, max_a): (f32, f32) = project(a, axis);
            let (min_b, max_b): (f32, f32) = project(b, axis);
            if max_a < min_b || max_b < min_a {
                return None;
            }

            let mut overlap: f32 = max_a.min(max_b) - min_a.max(min_b);
            let is_contained: bool =
                (min_a < min_b && max_a > max_b) || (min_b < min_a && max_b > max_a);
            let (near_gap, far_gap): (f32, f32) = ((min_a - min_b).abs(), (max_a - max_b).abs());
            if is_contained {
                overlap += near_gap.min(far_gap);
            }

            if mtv.depth > overlap {
                let keeps_direction: bool = if shifted { min_a < min_b } else { min_a > min_b };
                let mut normal: Vector2 = if keeps_direction { axis } else { -axis };
                if is_contained && near_gap <= far_gap {
                    normal = -normal;
                }
                mtv = MinimumTranslationVector {
                    normal,
                    depth: overlap,
                };
            }
        }
    }

    if mtv.depth == f32::MAX {
        None
    } else {
        Some(mtv)
    }
}
/// Returns minimum translation vector of two convex polygon shapes if they overlap.
///
/// World vertices of polygons are used (see [`overlap_convex_polygons`]).
///
pub fn overlap_convex_polygon_shapes(
    p1: &Polygon,
    p2: &Polygon,
) -> Option<MinimumTranslationVector> {
    overlap_convex_polygons(p1.vertices(), p2.vertices())
}

/// Returns whether circles overlap (touching circles do not overlap).
///
pub fn overlaps_circles(c1: &Circle, c2: &Circle) -> bool {
    c1.overlaps(c2)
}
/// Returns whether rectangles overlap (touching rectangles do not overlap).
///
pub fn overlaps_rectangles(r1: &Rectangle, r2: &Rectangle) -> bool {
    r1.overlaps(r2)
}
/// Returns whether circle overlaps rectangle.
///
/// The closest point of rectangle to the center of circle is found by clamping,
/// touching shapes do not overlap.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::overlaps_circle_rectangle;
/// # use ggeometry::mathcore::shapes::{Circle, Rectangle};
/// # use ggeometry::mathcore::vectors::Point;
/// let rect: Rectangle = Rectangle::new(0.0, 0.0, 2.0, 2.0);
/// assert!(overlaps_circle_rectangle(&Circle::new(Point::new(3.0, 1.0), 1.5), &rect));
/// assert!(!overlaps_circle_rectangle(&Circle::new(Point::new(3.0, 3.0), 1.0), &rect));
/// ```
///
pub fn overlaps_circle_rectangle(circle: &Circle, rectangle: &Rectangle) -> bool {
    let closest: Point = Point::new(
        circle
            .center
            .x
            .clamp(rectangle.x, rectangle.x + rectangle.width),
        circle
            .center
            .y
            .clamp(rectangle.y, rectangle.y + rectangle.height),
    );
    closest.sqr_distance(circle.center) < circle.radius * circle.radius
}
/// Returns intersection of two rectangles if they overlap.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_rectangles;
/// # use ggeometry::mathcore::shapes::Rectangle;
/// assert_eq!(
///     intersect_rectangles(&Rectangle::new(0.0, 0.0, 4.0, 4.0), &Rectangle::new(2.0, 2.0, 4.0, 4.0)),
///     Some(Rectangle::new(2.0, 2.0, 2.0, 2.0))
/// );
/// ```
///
pub fn intersect_rectangles(r1: &Rectangle, r2: &Rectangle) -> Option<Rectangle> {
    if !r1.overlaps(r2) {
        return None;
    }
    let x: f32 = r1.x.max(r2.x);
    let y: f32 = r1.y.max(r2.y);
    let right: f32 = (r1.x + r1.width).min(r2.x + r2.width);
    let top: f32 = (r1.y + r1.height).min(r2.y + r2.height);
    Some(Rectangle::new(x, y, right - x, top - y))
}

/// Returns whether projections of two vertex sets overlap on every given axis.
///
/// This is three-dimensional Separating Axis Theorem test: caller supplies candidate axes
/// (for example face normals and cross products of edges).
///
pub fn has_overlap(axes: &[Vector3], a_vertices: &[Vector3], b_vertices: &[Vector3]) -> bool {
    let project = |vertices: &[Vector3], axis: Vector3| -> (f32, f32) {
        vertices
            .iter()
            .fold((f32::MAX, -f32::MAX), |(min, max), &vertex| {
                let projection: f32 = vertex * axis;
                (min.min(projection), max.max(projection))
            })
    };
    axes.iter().all(|&axis| {
        let (min_a, max_a): (f32, f32) = project(a_vertices, axis);
        let (min_b, max_b): (f32, f32) = project(b_vertices, axis);
        !(max_a < min_b || max_b < min_a)
    })
}

#[cfg(test)]
mod tests {
    use super::{
        has_overlap, intersect_polygon_edges, intersect_polygons, intersect_polygons_coordinates,
        intersect_rectangles, overlap_convex_polygon_shapes, overlap_convex_polygons,
        overlaps_circle_rectangle, overlaps_circles, overlaps_convex_polygons, overlaps_rectangles,
    };
    use crate::mathcore::{
        bounds::BoundingBox,
        floats::almost_equal,
        intersector::MinimumTranslationVector,
        shapes::{Circle, Polygon, Rectangle, Shape},
        transforms::Translatable,
        vectors::{Point, Vector2, Vector3, Vertex},
    };
    use test_log::test;

    fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Vec<Vertex> {
        Rectangle::new(x, y, width, height).corners().to_vec()
    }

    #[test]
    fn clipping() {
        let p1: Polygon = Polygon::new(rectangle(0.0, 0.0, 2.0, 2.0));
        let p2: Polygon = Polygon::new(rectangle(1.0, 1.0, 2.0, 2.0));

        let overlap: Polygon = intersect_polygons(&p1, &p2).expect("Squares overlap");
        assert!(almost_equal(overlap.area(), 1.0));
        assert!(overlap.contains_point(Point::new(1.5, 1.5)));
        assert!(!overlap.contains_point(Point::new(0.5, 0.5)));

        let mut clockwise: Vec<Vertex> = rectangle(1.0, 1.0, 2.0, 2.0);
        clockwise.reverse();
        let overlap: Polygon =
            intersect_polygons(&p1, &Polygon::new(clockwise)).expect("Squares overlap");
        assert!(almost_equal(overlap.area(), 1.0));

        let mut moved: Polygon = p2.clone();
        moved.translate_on(Vector2::new(5.0, 0.0));
        assert!(intersect_polygons(&p1, &moved).is_none());
        assert!(intersect_polygons(&p1, &Polygon::new(Vec::new())).is_none());
    }

    #[test]
    fn coordinates() {
        let square: [f32; 8] = [0.0, 0.0, 2.0, 0.0, 2.0, 2.0, 0.0, 2.0];
        let crossing: [f32; 6] = [1.0, -1.0, 3.0, 1.0, 1.0, 3.0];
        let outside: [f32; 6] = [3.0, 0.0, 4.0, 0.0, 4.0, 1.0];
        assert!(intersect_polygons_coordinates(&square, &crossing));
        assert!(intersect_polygon_edges(&square, &crossing));
        assert!(!intersect_polygons_coordinates(&square, &outside));
        assert!(!intersect_polygon_edges(&square, &[0.5, 0.5, 1.5, 0.5, 1.0, 1.5]));
        assert!(!intersect_polygons_coordinates(&square, &[]));
    }

    #[test]
    fn separating_axis() {
        let square: Vec<Vertex> = rectangle(0.0, 0.0, 2.0, 2.0);

        let mtv: MinimumTranslationVector =
            overlap_convex_polygons(&square, &rectangle(1.0, 0.0, 2.0, 2.0)).expect("Squares overlap");
        assert_eq!(mtv.normal, Vector2::new(-1.0, 0.0));
        assert_eq!(mtv.depth, 1.0);

        let mtv: MinimumTranslationVector =
            overlap_convex_polygons(&square, &rectangle(0.0, 1.5, 2.0, 2.0)).expect("Squares overlap");
        assert_eq!(mtv.normal, Vector2::new(0.0, -1.0));
        assert_eq!(mtv.depth, 0.5);

        let touching: MinimumTranslationVector =
            overlap_convex_polygons(&square, &rectangle(2.0, 0.0, 2.0, 2.0)).expect("Squares touch");
        assert_eq!(touching.depth, 0.0);
        assert!(overlaps_convex_polygons(&square, &rectangle(2.0, 0.0, 2.0, 2.0)));

        assert!(overlap_convex_polygons(&square, &rectangle(2.5, 0.0, 2.0, 2.0)).is_none());
        assert!(!overlaps_convex_polygons(&square, &rectangle(2.5, 0.0, 2.0, 2.0)));
        assert!(overlap_convex_polygons(&square, &[]).is_none());
    }

    #[test]
    fn degenerate_polygons() {
        let point1: [Vertex; 3] = [Vertex::zero(); 3];
        let point2: [Vertex; 3] = [Vertex::new(50.0, 50.0); 3];
        assert!(!overlaps_convex_polygons(&point1, &point2));
        assert!(overlap_convex_polygons(&point1, &point2).is_none());
        assert!(!overlaps_convex_polygons(&point1, &point1));
        assert!(overlap_convex_polygons(&point1, &point1).is_none());

        let square: Vec<Vertex> = rectangle(0.0, 0.0, 2.0, 2.0);
        let inside: [Vertex; 3] = [Vertex::new(1.0, 1.0); 3];
        let outside: [Vertex; 3] = [Vertex::new(5.0, 1.0); 3];
        assert!(overlaps_convex_polygons(&inside, &square));
        assert!(overlap_convex_polygons(&inside, &square).is_some());
        assert!(!overlaps_convex_polygons(&outside, &square));
        assert!(overlap_convex_polygons(&outside, &square).is_none());
    }

    #[test]
    fn contained_polygons() {
        let outer: Vec<Vertex> = rectangle(0.0, 0.0, 4.0, 4.0);
        let inner: Vec<Vertex> = rectangle(1.0, 0.5, 1.0, 1.0);

        let mtv: MinimumTranslationVector =
            overlap_convex_polygons(&inner, &outer).expect("Outer polygon contains inner one");
        assert_eq!(mtv.normal, Vector2::new(0.0, -1.0));
        assert_eq!(mtv.depth, 1.5);

        let mtv: MinimumTranslationVector =
            overlap_convex_polygons(&outer, &inner).expect("Outer polygon contains inner one");
        assert_eq!(mtv.normal, Vector2::new(0.0, 1.0));
        assert_eq!(mtv.depth, 1.5);
    }

    #[test]
    fn polygon_shapes() {
        let p1: Polygon = Polygon::new(rectangle(0.0, 0.0, 2.0, 2.0));
        let mut p2: Polygon = Polygon::new(rectangle(0.0, 0.0, 2.0, 2.0));
        p2.translate_on(Vector2::new(1.0, 0.0));
        let mtv: MinimumTranslationVector = overlap_convex_polygon_shapes(&p1, &p2).expect("Shapes overlap");
        assert_eq!(mtv.translation(), Vector2::new(-1.0, 0.0));
    }

    #[test]
    fn simple_shapes() {
        let circle: Circle = Circle::new(Point::new(0.0, 0.0), 1.0);
        assert!(overlaps_circles(&circle, &Circle::new(Point::new(1.5, 0.0), 1.0)));
        assert!(!overlaps_circles(&circle, &Circle::new(Point::new(2.0, 0.0), 1.0)));

        let r1: Rectangle = Rectangle::new(0.0, 0.0, 4.0, 4.0);
        let r2: Rectangle = Rectangle::new(2.0, 2.0, 4.0, 4.0);
        assert!(overlaps_rectangles(&r1, &r2));
        assert_eq!(intersect_rectangles(&r1, &r2), Some(Rectangle::new(2.0, 2.0, 2.0, 2.0)));
        assert_eq!(intersect_rectangles(&r1, &Rectangle::new(4.0, 0.0, 1.0, 1.0)), None);

        assert!(overlaps_circle_rectangle(&Circle::new(Point::new(2.0, 2.0), 0.5), &r1));
        assert!(overlaps_circle_rectangle(&Circle::new(Point::new(-0.5, 2.0), 1.0), &r1));
        assert!(!overlaps_circle_rectangle(&Circle::new(Point::new(-1.0, 2.0), 1.0), &r1));
    }

    #[test]
    fn three_dimensional_axes() {
        let axes: [Vector3; 3] = [Vector3::X, Vector3::Y, Vector3::Z];
        let a: [Vector3; 8] = BoundingBox::new(Vector3::zero(), Vector3::one()).corners();
        let b: [Vector3; 8] =
            BoundingBox::new(Vector3::one() * 0.5, Vector3::one() * 1.5).corners();
        let c: [Vector3; 8] =
            BoundingBox::new(Vector3::new(2.0, 0.0, 0.0), Vector3::new(3.0, 1.0, 1.0)).corners();
        assert!(has_overlap(&axes, &a, &b));
        assert!(!has_overlap(&axes, &a, &c));
        assert!(has_overlap(&[], &a, &c));
    }
}
