//! `intersector::rays` submodule implements intersections of three-dimensional rays with planes,
//! triangles, spheres and boxes.
//!
//! Functions that work on triangle collections have two forms: `try_*` functions return
//! [`GeometryError`] when the collection is malformed and their counterparts panic in that case.
//!

use crate::mathcore::{
    bounds::BoundingBox,
    errors::GeometryError,
    floats::{is_zero, FLOAT_ROUNDING_ERROR},
    intersector::is_point_in_triangle,
    matrices::Matrix4,
    planes::{Plane, PlaneSide},
    rays::Ray,
    vectors::Vector3,
};
use log::{debug, error, trace};

/// Returns point at which ray intersects plane.
///
/// Ray that lies on the plane intersects it at its origin.
/// Planes that are behind the origin of ray are not intersected.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_ray_plane;
/// # use ggeometry::mathcore::planes::Plane;
/// # use ggeometry::mathcore::rays::Ray;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let plane: Plane = Plane::new(Vector3::Y, 0.0);
/// let ray: Ray = Ray::new(Vector3::new(1.0, 5.0, 1.0), -Vector3::Y);
/// assert_eq!(intersect_ray_plane(&ray, &plane), Some(Vector3::new(1.0, 0.0, 1.0)));
/// assert_eq!(intersect_ray_plane(&Ray::new(ray.origin, Vector3::Y), &plane), None);
/// ```
///
pub fn intersect_ray_plane(ray: &Ray, plane: &Plane) -> Option<Vector3> {
    let denominator: f32 = ray.direction * plane.normal;
    if denominator != 0.0 {
        let t: f32 = -(ray.origin * plane.normal + plane.d) / denominator;
        if t < 0.0 {
            return None;
        }
        Some(ray.end_point(t))
    } else if plane.test_point(ray.origin) == PlaneSide::OnPlane {
        Some(ray.origin)
    } else {
        None
    }
}

/// Returns point at which ray intersects triangle.
///
/// Möller–Trumbore algorithm is used. If ray is parallel to the plane of triangle, it intersects
/// triangle only when its origin lies in it (and then the origin is returned). Intersections that are
/// closer to the origin than `FLOAT_ROUNDING_ERROR` are snapped to the origin.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_ray_triangle;
/// # use ggeometry::mathcore::rays::Ray;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let ray: Ray = Ray::new(Vector3::new(0.2, 0.2, 1.0), -Vector3::Z);
/// assert_eq!(
///     intersect_ray_triangle(&ray, Vector3::zero(), Vector3::X, Vector3::Y),
///     Some(Vector3::new(0.2, 0.2, 0.0))
/// );
/// ```
///
pub fn intersect_ray_triangle(
    ray: &Ray,
    t1: Vector3,
    t2: Vector3,
    t3: Vector3,
) -> Option<Vector3> {
    let edge1: Vector3 = t2 - t1;
    let edge2: Vector3 = t3 - t1;

    let pvec: Vector3 = ray.direction ^ edge2;
    let determinant: f32 = edge1 * pvec;
    if is_zero(determinant) {
        trace!("Ray {ray:?} is parallel to triangle ({t1:?}, {t2:?}, {t3:?}), testing its origin");
        let plane: Plane = Plane::from_points(t1, t2, t3);
        if plane.test_point(ray.origin) == PlaneSide::OnPlane
            && is_point_in_triangle(ray.origin, t1, t2, t3)
        {
            return Some(ray.origin);
        }
        return None;
    }

    let inverse_determinant: f32 = 1.0 / determinant;
    let tvec: Vector3 = ray.origin - t1;
    let u: f32 = (tvec * pvec) * inverse_determinant;
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let qvec: Vector3 = tvec ^ edge1;
    let v: f32 = (ray.direction * qvec) * inverse_determinant;
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t: f32 = (edge2 * qvec) * inverse_determinant;
    if t < 0.0 {
        return None;
    }
    if t <= FLOAT_ROUNDING_ERROR {
        Some(ray.origin)
    } else {
        Some(ray.end_point(t))
    }
}
/// Returns intersection of ray with triangles that is the nearest to the origin of ray.
///
fn nearest_triangle_hit(
    ray: &Ray,
    triangles: impl Iterator<Item = (Vector3, Vector3, Vector3)>,
) -> Option<Vector3> {
    triangles
        .filter_map(|(t1, t2, t3)| intersect_ray_triangle(ray, t1, t2, t3))
        .min_by(|a, b| {
            a.sqr_distance(ray.origin)
                .total_cmp(&b.sqr_distance(ray.origin))
        })
}
/// Unwraps result of `try_*` function, logging and panicking on error.
///
fn expect_valid<T>(result: Result<T, GeometryError>) -> T {
    result.unwrap_or_else(|error| {
        error!("Malformed triangle collection: {error}");
        panic!("{error}")
    })
}

/// Returns intersection of ray with triangles that is the nearest to the origin of ray.
///
/// Triangles are given by flat array of coordinates (`[x1, y1, z1, x2, ...]`), 9 values per triangle.
///
/// # Errors
/// Returns [`GeometryError::TriangleArrayLength`] if length of array is not a multiple of 9.
///
pub fn try_intersect_ray_triangles(
    ray: &Ray,
    triangles: &[f32],
) -> Result<Option<Vector3>, GeometryError> {
    if triangles.len() % 9 != 0 {
        return Err(GeometryError::TriangleArrayLength {
            len: triangles.len(),
        });
    }
    let vertex = |chunk: &[f32]| Vector3::new(chunk[0], chunk[1], chunk[2]);
    Ok(nearest_triangle_hit(
        ray,
        triangles
            .chunks_exact(9)
            .map(|triangle| (vertex(&triangle[0..3]), vertex(&triangle[3..6]), vertex(&triangle[6..9]))),
    ))
}
/// Returns intersection of ray with triangles that is the nearest to the origin of ray.
///
/// # Panics
/// Panics if length of array is not a multiple of 9 (see [`try_intersect_ray_triangles`]).
///
pub fn intersect_ray_triangles(ray: &Ray, triangles: &[f32]) -> Option<Vector3> {
    expect_valid(try_intersect_ray_triangles(ray, triangles))
}
/// Returns intersection of ray with indexed triangles that is the nearest to the origin of ray.
///
/// Vertices are given by flat array in which each vertex occupies `vertex_size` values,
/// first three of which are its position. Every three indices form a triangle.
///
/// # Errors
/// Returns [`GeometryError::IndexArrayLength`] if amount of indices is not a multiple of 3,
/// [`GeometryError::VertexSize`] if `vertex_size` is less than 3 and
/// [`GeometryError::IndexOutOfBounds`] if any index points outside of vertex array.
///
pub fn try_intersect_ray_indexed_triangles(
    ray: &Ray,
    vertices: &[f32],
    indices: &[usize],
    vertex_size: usize,
) -> Result<Option<Vector3>, GeometryError> {
    if indices.len() % 3 != 0 {
        return Err(GeometryError::IndexArrayLength { len: indices.len() });
    }
    if vertex_size < 3 {
        return Err(GeometryError::VertexSize { size: vertex_size });
    }
    let count: usize = vertices.len() / vertex_size;
    if let Some(&index) = indices.iter().find(|&&index| index >= count) {
        return Err(GeometryError::IndexOutOfBounds { index, count });
    }

    let vertex = |index: usize| {
        let offset: usize = index * vertex_size;
        Vector3::new(vertices[offset], vertices[offset + 1], vertices[offset + 2])
    };
    Ok(nearest_triangle_hit(
        ray,
        indices
            .chunks_exact(3)
            .map(|triangle| (vertex(triangle[0]), vertex(triangle[1]), vertex(triangle[2]))),
    ))
}
/// Returns intersection of ray with indexed triangles that is the nearest to the origin of ray.
///
/// # Panics
/// Panics if indices or vertices are malformed (see [`try_intersect_ray_indexed_triangles`]).
///
pub fn intersect_ray_indexed_triangles(
    ray: &Ray,
    vertices: &[f32],
    indices: &[usize],
    vertex_size: usize,
) -> Option<Vector3> {
    expect_valid(try_intersect_ray_indexed_triangles(
        ray,
        vertices,
        indices,
        vertex_size,
    ))
}
/// Returns intersection of ray with triangles that is the nearest to the origin of ray.
///
/// Every three vertices of list form a triangle.
///
/// # Errors
/// Returns [`GeometryError::TriangleListLength`] if length of list is not a multiple of 3.
///
pub fn try_intersect_ray_triangle_list(
    ray: &Ray,
    triangles: &[Vector3],
) -> Result<Option<Vector3>, GeometryError> {
    if triangles.len() % 3 != 0 {
        return Err(GeometryError::TriangleListLength {
            len: triangles.len(),
        });
    }
    Ok(nearest_triangle_hit(
        ray,
        triangles
            .chunks_exact(3)
            .map(|triangle| (triangle[0], triangle[1], triangle[2])),
    ))
}
/// Returns intersection of ray with triangles that is the nearest to the origin of ray.
///
/// # Panics
/// Panics if length of list is not a multiple of 3 (see [`try_intersect_ray_triangle_list`]).
///
pub fn intersect_ray_triangle_list(ray: &Ray, triangles: &[Vector3]) -> Option<Vector3> {
    expect_valid(try_intersect_ray_triangle_list(ray, triangles))
}

/// Returns the first point at which ray intersects sphere.
///
/// Spheres whose centers are behind the origin of ray are not intersected.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_ray_sphere;
/// # use ggeometry::mathcore::rays::Ray;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let ray: Ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::Z);
/// assert_eq!(intersect_ray_sphere(&ray, Vector3::zero(), 1.0), Some(Vector3::new(0.0, 0.0, -1.0)));
/// ```
///
pub fn intersect_ray_sphere(ray: &Ray, center: Vector3, radius: f32) -> Option<Vector3> {
    let length: f32 = ray.direction * (center - ray.origin);
    if length < 0.0 {
        return None;
    }
    let sqr_distance: f32 = center.sqr_distance(ray.end_point(length));
    let sqr_radius: f32 = radius * radius;
    if sqr_distance > sqr_radius {
        return None;
    }
    Some(ray.end_point(length - (sqr_radius - sqr_distance).sqrt()))
}

/// Returns the first point at which ray intersects axis-aligned box.
///
/// If origin of ray lies in the box, origin is returned.
/// Faces of the box are tested one by one and the closest hit is clamped into the box.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::bounds::BoundingBox;
/// # use ggeometry::mathcore::intersector::intersect_ray_bounds;
/// # use ggeometry::mathcore::rays::Ray;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let bounds: BoundingBox = BoundingBox::new(Vector3::zero(), Vector3::one() * 2.0);
/// let ray: Ray = Ray::new(Vector3::new(-1.0, 1.0, 1.0), Vector3::X);
/// assert_eq!(intersect_ray_bounds(&ray, &bounds), Some(Vector3::new(0.0, 1.0, 1.0)));
/// ```
///
pub fn intersect_ray_bounds(ray: &Ray, bounds: &BoundingBox) -> Option<Vector3> {
    if bounds.contains_point(ray.origin) {
        return Some(ray.origin);
    }

    let origin: [f32; 3] = ray.origin.elements();
    let direction: [f32; 3] = ray.direction.elements();
    let (min, max): ([f32; 3], [f32; 3]) = (bounds.min.elements(), bounds.max.elements());

    let mut lowest: Option<f32> = None;
    for axis in 0..3 {
        let faces: [(f32, bool); 2] = [
            (min[axis], origin[axis] <= min[axis] && direction[axis] > 0.0),
            (max[axis], origin[axis] >= max[axis] && direction[axis] < 0.0),
        ];
        for (face, is_facing) in faces {
            if !is_facing {
                continue;
            }
            let t: f32 = (face - origin[axis]) / direction[axis];
            if t < 0.0 || lowest.is_some_and(|lowest| t >= lowest) {
                continue;
            }
            let hit: [f32; 3] = ray.end_point(t).elements();
            if (0..3)
                .filter(|&other| other != axis)
                .all(|other| (min[other]..=max[other]).contains(&hit[other]))
            {
                lowest = Some(t);
            }
        }
    }
    lowest.map(|t| ray.end_point(t).max(bounds.min).min(bounds.max))
}
/// Returns whether ray intersects axis-aligned box (slab test).
///
pub fn intersect_ray_bounds_fast(ray: &Ray, bounds: &BoundingBox) -> bool {
    intersect_ray_bounds_fast_center(ray, bounds.center(), bounds.dimensions())
}
/// Returns whether ray intersects axis-aligned box that is given by its center and dimensions (slab test).
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::intersector::intersect_ray_bounds_fast_center;
/// # use ggeometry::mathcore::rays::Ray;
/// # use ggeometry::mathcore::vectors::Vector3;
/// let ray: Ray = Ray::new(Vector3::new(-5.0, 0.0, 0.0), Vector3::new(1.0, 0.1, 0.0));
/// assert!(intersect_ray_bounds_fast_center(&ray, Vector3::zero(), Vector3::one() * 2.0));
/// assert!(!intersect_ray_bounds_fast_center(&ray, Vector3::new(0.0, 5.0, 0.0), Vector3::one() * 2.0));
/// ```
///
pub fn intersect_ray_bounds_fast_center(ray: &Ray, center: Vector3, dimensions: Vector3) -> bool {
    let division: Vector3 = ray.direction.map(|a| 1.0 / a);
    let half: Vector3 = dimensions / 2.0;

    let slab = |center: f32, half: f32, origin: f32, division: f32| -> (f32, f32) {
        let near: f32 = (center - half - origin) * division;
        let far: f32 = (center + half - origin) * division;
        if near > far {
            (far, near)
        } else {
            (near, far)
        }
    };
    let (min_x, max_x): (f32, f32) = slab(center.x, half.x, ray.origin.x, division.x);
    let (min_y, max_y): (f32, f32) = slab(center.y, half.y, ray.origin.y, division.y);
    let (min_z, max_z): (f32, f32) = slab(center.z, half.z, ray.origin.z, division.z);

    let min: f32 = min_x.max(min_y).max(min_z);
    let max: f32 = max_x.min(max_y).min(max_z);
    max >= 0.0 && max >= min
}

/// Returns the first point at which ray intersects oriented box.
///
/// Oriented box is axis-aligned box that is transformed by given matrix.
/// Ray is moved into the space of the box by the inverse of transform, so `None` is returned
/// if transform is not invertible.
///
pub fn intersect_ray_oriented_bounds(
    ray: &Ray,
    bounds: &BoundingBox,
    transform: &Matrix4,
) -> Option<Vector3> {
    let Some(inverse) = transform.inverse() else {
        debug!("Transform of oriented box is not invertible: {transform:?}");
        return None;
    };
    let local_ray: Ray = ray.transformed(&inverse);
    intersect_ray_bounds(&local_ray, bounds).map(|point| transform.apply_to(point))
}
/// Returns whether ray intersects oriented box (slab test along basis axes of the transform).
///
/// Transform is assumed to consist of rotation and translation only.
///
pub fn intersect_ray_oriented_bounds_fast(
    ray: &Ray,
    bounds: &BoundingBox,
    transform: &Matrix4,
) -> bool {
    let mut t_min: f32 = 0.0;
    let mut t_max: f32 = f32::MAX;

    let delta: Vector3 = transform.translation() - ray.origin;
    let (min, max): ([f32; 3], [f32; 3]) = (bounds.min.elements(), bounds.max.elements());
    for i in 0..3 {
        let axis: Vector3 = transform.axis(i);
        let e: f32 = axis * delta;
        let f: f32 = ray.direction * axis;

        if f.abs() > FLOAT_ROUNDING_ERROR {
            let mut t1: f32 = (e + min[i]) / f;
            let mut t2: f32 = (e + max[i]) / f;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_max = t_max.min(t2);
            t_min = t_min.max(t1);
            if t_max < t_min {
                return false;
            }
        } else if -e + min[i] > 0.0 || -e + max[i] < 0.0 {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::{
        intersect_ray_bounds, intersect_ray_bounds_fast, intersect_ray_indexed_triangles,
        intersect_ray_oriented_bounds, intersect_ray_oriented_bounds_fast, intersect_ray_plane,
        intersect_ray_sphere, intersect_ray_triangle, intersect_ray_triangle_list,
        intersect_ray_triangles, try_intersect_ray_indexed_triangles,
        try_intersect_ray_triangle_list, try_intersect_ray_triangles,
    };
    use crate::mathcore::{
        bounds::BoundingBox, errors::GeometryError, matrices::Matrix4, planes::Plane,
        quaternions::Quaternion, rays::Ray, vectors::Vector3, Angle,
    };
    use test_log::test;

    #[test]
    fn plane() {
        let plane: Plane = Plane::new(Vector3::Z, -1.0);
        let ray: Ray = Ray::new(Vector3::new(3.0, 4.0, 0.0), Vector3::new(0.0, 1.0, 1.0));
        assert_eq!(intersect_ray_plane(&ray, &plane), Some(Vector3::new(3.0, 5.0, 1.0)));

        let lying: Ray = Ray::new(Vector3::new(3.0, 4.0, 1.0), Vector3::X);
        assert_eq!(intersect_ray_plane(&lying, &plane), Some(lying.origin));
        let parallel: Ray = Ray::new(Vector3::new(3.0, 4.0, 2.0), Vector3::X);
        assert_eq!(intersect_ray_plane(&parallel, &plane), None);
    }

    #[test]
    fn triangle() {
        let (t1, t2, t3): (Vector3, Vector3, Vector3) = (Vector3::zero(), Vector3::X, Vector3::Y);

        let ray: Ray = Ray::new(Vector3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_ray_triangle(&ray, t1, t2, t3), Some(Vector3::new(0.2, 0.2, 0.0)));
        assert_eq!(intersect_ray_triangle(&ray, t1, t3, t2), Some(Vector3::new(0.2, 0.2, 0.0)));

        let behind: Ray = Ray::new(Vector3::new(0.2, 0.2, -1.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_ray_triangle(&behind, t1, t2, t3), None);
        let outside: Ray = Ray::new(Vector3::new(0.8, 0.8, 1.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_ray_triangle(&outside, t1, t2, t3), None);

        let touching: Ray = Ray::new(Vector3::new(0.2, 0.2, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(intersect_ray_triangle(&touching, t1, t2, t3), Some(touching.origin));
    }

    #[test]
    fn coplanar_triangle() {
        let (t1, t2, t3): (Vector3, Vector3, Vector3) = (Vector3::zero(), Vector3::X, Vector3::Y);

        let inside: Ray = Ray::new(Vector3::new(0.2, 0.2, 0.0), Vector3::X);
        assert_eq!(intersect_ray_triangle(&inside, t1, t2, t3), Some(inside.origin));
        let outside: Ray = Ray::new(Vector3::new(-2.0, 0.2, 0.0), Vector3::X);
        assert_eq!(intersect_ray_triangle(&outside, t1, t2, t3), None);
    }

    #[test]
    fn triangle_collections() {
        let ray: Ray = Ray::new(Vector3::new(0.2, 0.2, 1.0), Vector3::new(0.0, 0.0, -1.0));

        let triangles: [f32; 18] = [
            0.0, 0.0, -1.0, 1.0, 0.0, -1.0, 0.0, 1.0, -1.0, //
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        ];
        assert_eq!(intersect_ray_triangles(&ray, &triangles), Some(Vector3::new(0.2, 0.2, 0.0)));
        assert_eq!(intersect_ray_triangles(&ray, &triangles[..9]), Some(Vector3::new(0.2, 0.2, -1.0)));
        assert_eq!(intersect_ray_triangles(&ray, &[]), None);
        assert_eq!(
            try_intersect_ray_triangles(&ray, &triangles[..10]),
            Err(GeometryError::TriangleArrayLength { len: 10 })
        );

        let vertices: [f32; 20] = [
            0.0, 0.0, -1.0, 9.0, //
            1.0, 0.0, -1.0, 9.0, //
            0.0, 1.0, -1.0, 9.0, //
            0.0, 0.0, 0.5, 9.0, //
            1.0, 0.0, 0.5, 9.0,
        ];
        let indices: [usize; 6] = [0, 1, 2, 3, 4, 2];
        assert_eq!(
            intersect_ray_indexed_triangles(&ray, &vertices, &indices, 4),
            Some(Vector3::new(0.2, 0.2, 0.2))
        );
        assert_eq!(
            intersect_ray_indexed_triangles(&ray, &vertices, &indices[..3], 4),
            Some(Vector3::new(0.2, 0.2, -1.0))
        );
        assert_eq!(
            try_intersect_ray_indexed_triangles(&ray, &vertices, &indices[..4], 4),
            Err(GeometryError::IndexArrayLength { len: 4 })
        );
        assert_eq!(
            try_intersect_ray_indexed_triangles(&ray, &vertices, &indices, 2),
            Err(GeometryError::VertexSize { size: 2 })
        );
        assert_eq!(
            try_intersect_ray_indexed_triangles(&ray, &vertices, &[0, 1, 5], 4),
            Err(GeometryError::IndexOutOfBounds { index: 5, count: 5 })
        );

        let list: [Vector3; 3] = [Vector3::zero(), Vector3::X, Vector3::Y];
        assert_eq!(intersect_ray_triangle_list(&ray, &list), Some(Vector3::new(0.2, 0.2, 0.0)));
        assert_eq!(
            try_intersect_ray_triangle_list(&ray, &list[..2]),
            Err(GeometryError::TriangleListLength { len: 2 })
        );
    }

    #[test]
    #[should_panic(expected = "multiple of 9")]
    fn malformed_triangles() {
        let ray: Ray = Ray::new(Vector3::zero(), Vector3::X);
        let _ = intersect_ray_triangles(&ray, &[0.0; 4]);
    }

    #[test]
    fn sphere() {
        let ray: Ray = Ray::new(Vector3::new(0.0, 0.0, -5.0), Vector3::Z);
        assert_eq!(intersect_ray_sphere(&ray, Vector3::zero(), 1.0), Some(Vector3::new(0.0, 0.0, -1.0)));
        assert_eq!(intersect_ray_sphere(&ray, Vector3::new(0.0, 0.0, -10.0), 1.0), None);
        assert_eq!(intersect_ray_sphere(&ray, Vector3::new(0.0, 3.0, 0.0), 1.0), None);
    }

    #[test]
    fn bounds() {
        let bounds: BoundingBox = BoundingBox::new(Vector3::zero(), Vector3::one() * 2.0);

        let ray: Ray = Ray::new(Vector3::new(1.0, 1.0, 5.0), -Vector3::Z);
        assert_eq!(intersect_ray_bounds(&ray, &bounds), Some(Vector3::new(1.0, 1.0, 2.0)));
        assert!(intersect_ray_bounds_fast(&ray, &bounds));

        let inside: Ray = Ray::new(Vector3::one(), Vector3::X);
        assert_eq!(intersect_ray_bounds(&inside, &bounds), Some(inside.origin));
        assert!(intersect_ray_bounds_fast(&inside, &bounds));

        let away: Ray = Ray::new(Vector3::new(1.0, 1.0, 5.0), Vector3::Z);
        assert_eq!(intersect_ray_bounds(&away, &bounds), None);
        assert!(!intersect_ray_bounds_fast(&away, &bounds));

        let miss: Ray = Ray::new(Vector3::new(-1.0, 3.0, 1.0), Vector3::X);
        assert_eq!(intersect_ray_bounds(&miss, &bounds), None);
        assert!(!intersect_ray_bounds_fast(&miss, &bounds));
    }

    #[test]
    fn oriented_bounds() {
        let bounds: BoundingBox = BoundingBox::new(-Vector3::one(), Vector3::one());
        let transform: Matrix4 = Matrix4::from_translation_rotation_scale(
            Vector3::new(5.0, 0.0, 0.0),
            Quaternion::from_axis_angle(Vector3::Z, Angle::DEG45),
            Vector3::one(),
        );

        let ray: Ray = Ray::new(Vector3::new(0.0, 0.5, 0.0), Vector3::X);
        let hit: Vector3 =
            intersect_ray_oriented_bounds(&ray, &bounds, &transform).expect("Ray hits the box");
        assert!((hit - Vector3::new(5.5 - 2.0_f32.sqrt(), 0.5, 0.0)).magnitude() < 0.0001);
        assert!(intersect_ray_oriented_bounds_fast(&ray, &bounds, &transform));

        let miss: Ray = Ray::new(Vector3::new(0.0, 3.0, 0.0), Vector3::X);
        assert_eq!(intersect_ray_oriented_bounds(&miss, &bounds, &transform), None);
        assert!(!intersect_ray_oriented_bounds_fast(&miss, &bounds, &transform));

        let flat: Matrix4 = Matrix4::from_scaling(Vector3::new(1.0, 1.0, 0.0));
        assert_eq!(intersect_ray_oriented_bounds(&ray, &bounds, &flat), None);
    }
}
