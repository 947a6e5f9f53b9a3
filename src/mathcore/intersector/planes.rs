//! `intersector::planes` submodule implements intersections of segments, lines, boxes and other planes
//! with planes.
//!

use crate::mathcore::{
    bounds::BoundingBox,
    floats::is_zero,
    planes::{Plane, PlaneSide},
    vectors::Vector3,
};

/// Returns point at which segment intersects plane.
///
/// `None` is returned if segment is parallel to the plane or does not reach it.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_segment_plane;
/// # use ggeometry::mathcore::planes::Plane;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let plane: Plane = Plane::new(Vector3::Z, 0.0);
/// assert_eq!(
///     intersect_segment_plane(Vector3::new(1.0, 1.0, -1.0), Vector3::new(1.0, 1.0, 3.0), &plane),
///     Some(Vector3::new(1.0, 1.0, 0.0))
/// );
/// assert_eq!(
///     intersect_segment_plane(Vector3::new(1.0, 1.0, 1.0), Vector3::new(1.0, 1.0, 3.0), &plane),
///     None
/// );
/// ```
///
pub fn intersect_segment_plane(start: Vector3, end: Vector3, plane: &Plane) -> Option<Vector3> {
    let direction: Vector3 = end - start;
    let denominator: f32 = direction * plane.normal;
    if denominator == 0.0 {
        return None;
    }
    let t: f32 = -(start * plane.normal + plane.d) / denominator;
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    Some(start + direction * t)
}
/// Returns parameter and point at which infinite line (that is given by two points) intersects plane.
///
/// Point is equal to `start + (end - start) * t`.
/// Line that lies on the plane intersects it at `start` (`t == 0`), and line that is parallel
/// to the plane does not intersect it.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_line_plane;
/// # use ggeometry::mathcore::planes::Plane;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let plane: Plane = Plane::new(Vector3::Z, 0.0);
/// let (t, point): (f32, Vector3) =
///     intersect_line_plane(Vector3::new(0.0, 0.0, 1.0), Vector3::new(0.0, 0.0, 3.0), &plane)
///         .expect("Line is not parallel to the plane");
/// assert_eq!(t, -0.5);
/// assert_eq!(point, Vector3::zero());
/// ```
///
pub fn intersect_line_plane(start: Vector3, end: Vector3, plane: &Plane) -> Option<(f32, Vector3)> {
    let direction: Vector3 = end - start;
    let denominator: f32 = direction * plane.normal;
    if denominator != 0.0 {
        let t: f32 = -(start * plane.normal + plane.d) / denominator;
        Some((t, start + direction * t))
    } else if plane.test_point(start) == PlaneSide::OnPlane {
        Some((0.0, start))
    } else {
        None
    }
}
/// Returns point at which three planes intersect.
///
/// If any two of planes are parallel (or all three share a line), `None` is returned.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_planes;
/// # use ggeometry::mathcore::planes::Plane;
/// # use ggeometry::mathcore::vectors::Vector3;
/// assert_eq!(
///     intersect_planes(
///         &Plane::new(Vector3::X, -1.0),
///         &Plane::new(Vector3::Y, -2.0),
///         &Plane::new(Vector3::Z, -3.0),
///     ),
///     Some(Vector3::new(1.0, 2.0, 3.0))
/// );
/// ```
///
pub fn intersect_planes(a: &Plane, b: &Plane, c: &Plane) -> Option<Vector3> {
    let bc: Vector3 = b.normal ^ c.normal;
    let ca: Vector3 = c.normal ^ a.normal;
    let ab: Vector3 = a.normal ^ b.normal;

    let determinant: f32 = ab * c.normal;
    if is_zero(determinant) {
        return None;
    }
    Some((bc * -a.d + ca * -b.d + ab * -c.d) / determinant)
}

/// Returns whether axis-aligned box intersects plane.
///
/// Box is projected onto the normal of plane and compared with the distance from its center.
///
pub fn intersect_bounds_plane_fast(bounds: &BoundingBox, plane: &Plane) -> bool {
    let center: Vector3 = bounds.center();
    let half: Vector3 = bounds.half_dimensions();
    let normal: Vector3 = plane.normal;
    let radius: f32 =
        half.x * normal.x.abs() + half.y * normal.y.abs() + half.z * normal.z.abs();
    plane.distance(center).abs() <= radius
}
