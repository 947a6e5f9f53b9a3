use ggeometry::mathcore::{
    bounds::BoundingBox,
    intersector::{
        intersect_lines, intersect_ray_bounds, intersect_ray_bounds_fast,
        intersect_ray_oriented_bounds, intersect_ray_oriented_bounds_fast, intersect_ray_triangle,
        overlap_convex_polygons, overlaps_convex_polygons, split_triangle_new, SplitTriangle,
    },
    matrices::Matrix4,
    planes::Plane,
    quaternions::Quaternion,
    rays::Ray,
    shapes::Rectangle,
    vectors::{Point, Vector2, Vector3, Vertex},
    Angle,
};
use proptest::prelude::*;
use std::f32::consts::TAU;

fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Vec<Vertex> {
    Rectangle::new(x, y, width, height).corners().to_vec()
}

fn regular_polygon(center: Point, radius: f32, sides: usize, phase: f32) -> Vec<Vertex> {
    (0..sides)
        .map(|i| {
            let angle: f32 = phase + i as f32 * TAU / sides as f32;
            center + Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

fn translated(vertices: &[Vertex], translation: Vector2) -> Vec<Vertex> {
    vertices.iter().map(|&vertex| vertex + translation).collect()
}

/// Checks that moving the first polygon by its minimum translation vector separates polygons.
fn separates(vertices1: &[Vertex], vertices2: &[Vertex]) -> Result<(), TestCaseError> {
    let overlap = overlap_convex_polygons(vertices1, vertices2);
    prop_assert_eq!(overlap.is_some(), overlaps_convex_polygons(vertices1, vertices2));
    if let Some(mtv) = overlap {
        prop_assert!(mtv.depth >= 0.0);
        let moved: Vec<Vertex> = translated(vertices1, mtv.translation());
        if let Some(rest) = overlap_convex_polygons(&moved, vertices2) {
            prop_assert!(rest.depth < 0.001, "{:?} still overlaps by {}", mtv, rest.depth);
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn mtv_separates_rectangles(
        (x1, y1, w1, h1) in (-10.0f32..10.0, -10.0f32..10.0, 0.5f32..8.0, 0.5f32..8.0),
        (x2, y2, w2, h2) in (-10.0f32..10.0, -10.0f32..10.0, 0.5f32..8.0, 0.5f32..8.0),
    ) {
        separates(&rectangle(x1, y1, w1, h1), &rectangle(x2, y2, w2, h2))?;
    }

    #[test]
    fn mtv_separates_contained_rectangles(
        (x, y, width, height) in (-10.0f32..10.0, -10.0f32..10.0, 1.0f32..8.0, 1.0f32..8.0),
        (fx, fy, fw, fh) in (0.05f32..0.45, 0.05f32..0.45, 0.05f32..0.45, 0.05f32..0.45),
    ) {
        let outer: Vec<Vertex> = rectangle(x, y, width, height);
        let inner: Vec<Vertex> =
            rectangle(x + fx * width, y + fy * height, fw * width, fh * height);
        prop_assert!(overlap_convex_polygons(&inner, &outer).is_some());
        prop_assert!(overlap_convex_polygons(&outer, &inner).is_some());
        separates(&inner, &outer)?;
        separates(&outer, &inner)?;
    }

    #[test]
    fn mtv_separates_regular_polygons(
        (cx1, cy1, r1, n1, phase1) in (-5.0f32..5.0, -5.0f32..5.0, 0.5f32..4.0, 3usize..9, 0.0f32..TAU),
        (cx2, cy2, r2, n2, phase2) in (-5.0f32..5.0, -5.0f32..5.0, 0.5f32..4.0, 3usize..9, 0.0f32..TAU),
    ) {
        let p: Vec<Vertex> = regular_polygon(Point::new(cx1, cy1), r1, n1, phase1);
        let q: Vec<Vertex> = regular_polygon(Point::new(cx2, cy2), r2, n2, phase2);
        separates(&p, &q)?;
    }

    #[test]
    fn disjoint_rectangles_do_not_overlap(
        (x, y, w1, h1) in (-10.0f32..10.0, -10.0f32..10.0, 0.5f32..8.0, 0.5f32..8.0),
        (gap, dy, w2, h2) in (0.01f32..5.0, -10.0f32..10.0, 0.5f32..8.0, 0.5f32..8.0),
    ) {
        let left: Vec<Vertex> = rectangle(x, y, w1, h1);
        let right: Vec<Vertex> = rectangle(x + w1 + gap, y + dy, w2, h2);
        prop_assert!(overlap_convex_polygons(&left, &right).is_none());
        prop_assert!(!overlaps_convex_polygons(&right, &left));
    }

    #[test]
    fn line_intersection_ignores_point_order(
        (x1, y1, x2, y2) in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
        (x3, y3, x4, y4) in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
    ) {
        let (p1, p2, p3, p4): (Point, Point, Point, Point) =
            (Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3), Point::new(x4, y4));
        let (d1, d2): (Vector2, Vector2) = (p2 - p1, p4 - p3);
        prop_assume!(d1.magnitude() > 0.5 && d2.magnitude() > 0.5);
        prop_assume!(d1.cross_product(d2).abs() > 0.2 * d1.magnitude() * d2.magnitude());

        let direct: Point = intersect_lines(p1, p2, p3, p4).expect("Lines are not parallel");
        let swapped: Point = intersect_lines(p2, p1, p4, p3).expect("Lines are not parallel");
        prop_assert!((direct - swapped).magnitude() <= 0.001 * (1.0 + direct.magnitude()));
    }

    #[test]
    fn ray_triangle_intersection_is_idempotent(
        origin in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
        direction in (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0),
        t1 in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
        t2 in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
        t3 in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
    ) {
        let vector = |(x, y, z): (f32, f32, f32)| Vector3::new(x, y, z);
        let ray: Ray = Ray::new(vector(origin), vector(direction));
        let bits = |result: Option<Vector3>| result.map(|point| point.elements().map(f32::to_bits));

        let first = intersect_ray_triangle(&ray, vector(t1), vector(t2), vector(t3));
        let second = intersect_ray_triangle(&ray, vector(t1), vector(t2), vector(t3));
        prop_assert_eq!(bits(first), bits(second));
    }

    #[test]
    fn coplanar_ray_inside_triangle_hits_at_origin(
        (ax, ay, bx, by, cx, cy) in (
            -5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0,
        ),
        z in -5.0f32..5.0,
        (u, v) in (0.1f32..0.4, 0.1f32..0.4),
        (dx, dy) in (-1.0f32..1.0, -1.0f32..1.0),
    ) {
        let (t1, t2, t3): (Vector3, Vector3, Vector3) =
            (Vector3::new(ax, ay, z), Vector3::new(bx, by, z), Vector3::new(cx, cy, z));
        let (e1, e2): (Vector3, Vector3) = (t2 - t1, t3 - t1);
        prop_assume!((e1 ^ e2).magnitude() > 1.0);
        prop_assume!(dx.abs() + dy.abs() > 0.1);

        let origin: Vector3 = t1 + e1 * u + e2 * v;
        let ray: Ray = Ray::new(origin, Vector3::new(dx, dy, 0.0));
        prop_assert_eq!(intersect_ray_triangle(&ray, t1, t2, t3), Some(origin));
    }

    #[test]
    fn non_crossing_split_keeps_triangle(
        xy in prop::collection::vec(-5.0f32..5.0, 6),
        z in prop::collection::vec(1.0f32..5.0, 3),
        flipped in any::<bool>(),
    ) {
        let normal: Vector3 = if flipped { -Vector3::Z } else { Vector3::Z };
        let triangle: Vec<f32> = (0..3).flat_map(|i| [xy[2 * i], xy[2 * i + 1], z[i]]).collect();
        let split: SplitTriangle = split_triangle_new(&triangle, &Plane::new(normal, 0.0));

        prop_assert_eq!(split.total(), 1);
        prop_assert_eq!(split.num_front() + split.num_back(), 1);
        prop_assert!(split.front().is_empty() != split.back().is_empty());
        prop_assert_eq!(flipped, split.num_back() == 1);
    }

    #[test]
    fn crossing_split_creates_three_triangles(
        xy in prop::collection::vec(-5.0f32..5.0, 6),
        below in -5.0f32..-1.0,
        above in prop::collection::vec(1.0f32..5.0, 2),
        lonely in 0usize..3,
    ) {
        let mut z: [f32; 3] = [0.0; 3];
        z[lonely] = below;
        z[(lonely + 1) % 3] = above[0];
        z[(lonely + 2) % 3] = above[1];
        let triangle: Vec<f32> = (0..3).flat_map(|i| [xy[2 * i], xy[2 * i + 1], z[i]]).collect();
        let split: SplitTriangle = split_triangle_new(&triangle, &Plane::new(Vector3::Z, 0.0));

        prop_assert_eq!(split.total(), 3);
        prop_assert_eq!(split.num_front() + split.num_back(), 3);
        prop_assert_eq!(split.num_front(), 2);
        prop_assert_eq!(split.front().len(), 18);
        prop_assert_eq!(split.back().len(), 9);
    }

    #[test]
    fn fast_ray_bounds_test_agrees_with_exact_one(
        origin in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
        direction in (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0),
        corner1 in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
        corner2 in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
    ) {
        let vector = |(x, y, z): (f32, f32, f32)| Vector3::new(x, y, z);
        prop_assume!(vector(direction).magnitude() > 0.1);
        let ray: Ray = Ray::new(vector(origin), vector(direction));
        let bounds: BoundingBox = BoundingBox::new(vector(corner1), vector(corner2));

        prop_assert_eq!(
            intersect_ray_bounds(&ray, &bounds).is_some(),
            intersect_ray_bounds_fast(&ray, &bounds)
        );
    }

    #[test]
    fn fast_ray_oriented_bounds_test_agrees_with_exact_one(
        origin in (-10.0f32..10.0, -10.0f32..10.0, -10.0f32..10.0),
        direction in (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0),
        size in (0.5f32..4.0, 0.5f32..4.0, 0.5f32..4.0),
        translation in (-5.0f32..5.0, -5.0f32..5.0, -5.0f32..5.0),
        axis in (-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0),
        degrees in 0.0f32..360.0,
    ) {
        let vector = |(x, y, z): (f32, f32, f32)| Vector3::new(x, y, z);
        prop_assume!(vector(direction).magnitude() > 0.1);
        prop_assume!(vector(axis).magnitude() > 0.1);
        let ray: Ray = Ray::new(vector(origin), vector(direction));
        let bounds: BoundingBox = BoundingBox::new(-vector(size), vector(size));
        let transform: Matrix4 = Matrix4::from_translation_rotation_scale(
            vector(translation),
            Quaternion::from_axis_angle(vector(axis).normalized(), Angle::from_degrees(degrees)),
            Vector3::one(),
        );

        prop_assert_eq!(
            intersect_ray_oriented_bounds(&ray, &bounds, &transform).is_some(),
            intersect_ray_oriented_bounds_fast(&ray, &bounds, &transform)
        );
    }
}
