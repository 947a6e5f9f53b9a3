//! `mathcore::planes` submodule implements [`Plane`] which is represented by its normal and signed distance
//! from the origin.
//!

use crate::mathcore::{
    floats::{almost_equal, FLOAT_ROUNDING_ERROR},
    vectors::Vector3,
};

/// [`PlaneSide`] enum lists sides of plane on which point can lie.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaneSide {
    /// Point lies on the plane (within `FLOAT_ROUNDING_ERROR`).
    ///
    OnPlane,
    /// Point lies behind the plane (in the opposite direction of its normal).
    ///
    Back,
    /// Point lies in front of the plane (in the direction of its normal).
    ///
    Front,
}

/// [`Plane`] struct represents plane in three-dimensional space.
///
/// Plane consists of points `p` for which `normal * p + d == 0`.
/// Normal is expected to be unit vector.
///
#[derive(Copy, Clone, Debug)]
pub struct Plane {
    /// Unit normal of plane.
    ///
    pub normal: Vector3,
    /// Signed distance from the origin (with the opposite sign).
    ///
    pub d: f32,
}
impl Plane {
    /// Constructs plane from its normal and `d` component.
    ///
    /// Normal is normalized.
    ///
    pub fn new(normal: Vector3, d: f32) -> Self {
        Plane {
            normal: normal.normalized(),
            d,
        }
    }
    /// Constructs plane from its normal and point on the plane.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::planes::Plane;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let plane: Plane = Plane::from_normal_and_point(Vector3::Z, Vector3::new(1.0, 1.0, 2.0));
    /// assert_eq!(plane.d, -2.0);
    /// ```
    ///
    pub fn from_normal_and_point(normal: Vector3, point: Vector3) -> Self {
        let normal: Vector3 = normal.normalized();
        Plane {
            normal,
            d: -(normal * point),
        }
    }
    /// Constructs plane that passes through three points.
    ///
    /// Normal is `(point1 - point2) x (point2 - point3)`, so counterclockwise points look at the viewer.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::planes::Plane;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let plane: Plane = Plane::from_points(
    ///     Vector3::new(0.0, 0.0, 1.0),
    ///     Vector3::new(1.0, 0.0, 1.0),
    ///     Vector3::new(0.0, 1.0, 1.0),
    /// );
    /// assert_eq!(plane.normal, Vector3::Z);
    /// assert_eq!(plane.d, -1.0);
    /// ```
    ///
    pub fn from_points(point1: Vector3, point2: Vector3, point3: Vector3) -> Self {
        let normal: Vector3 = ((point1 - point2) ^ (point2 - point3)).normalized();
        Plane {
            normal,
            d: -(point1 * normal),
        }
    }

    /// Returns signed distance from plane to point.
    ///
    /// Distance is positive for points that are in front of the plane.
    ///
    pub fn distance(&self, point: Vector3) -> f32 {
        self.normal * point + self.d
    }
    /// Returns on which side of the plane point lies.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::planes::{Plane, PlaneSide};
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let plane: Plane = Plane::new(Vector3::Y, 0.0);
    /// assert_eq!(plane.test_point(Vector3::new(5.0, 0.0000001, 1.0)), PlaneSide::OnPlane);
    /// assert_eq!(plane.test_point(Vector3::new(5.0, -1.0, 1.0)), PlaneSide::Back);
    /// assert_eq!(plane.test_point(Vector3::new(5.0, 1.0, 1.0)), PlaneSide::Front);
    /// ```
    ///
    pub fn test_point(&self, point: Vector3) -> PlaneSide {
        let distance: f32 = self.distance(point);
        if distance.abs() <= FLOAT_ROUNDING_ERROR {
            PlaneSide::OnPlane
        } else if distance < 0.0 {
            PlaneSide::Back
        } else {
            PlaneSide::Front
        }
    }
    /// Returns whether plane faces the opposite direction of the given one.
    ///
    /// It is used in culling: plane is front facing for camera looking in `direction` if
    /// `normal * direction <= 0`.
    ///
    pub fn is_front_facing(&self, direction: Vector3) -> bool {
        self.normal * direction <= 0.0
    }
    /// Returns projection of point onto the plane.
    ///
    pub fn project(&self, point: Vector3) -> Vector3 {
        point - self.normal * self.distance(point)
    }
}
impl PartialEq for Plane {
    fn eq(&self, other: &Self) -> bool {
        self.normal == other.normal && almost_equal(self.d, other.d)
    }
}
impl Eq for Plane {}
