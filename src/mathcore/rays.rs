//! `mathcore::rays` submodule implements [`Ray`] - half-line that starts at its origin and
//! goes in its direction.
//!

use crate::mathcore::{matrices::Matrix4, vectors::Vector3};

/// [`Ray`] struct represents ray in three-dimensional space.
///
/// Direction is expected to be unit vector: [`Ray::new`] normalizes it, but fields are public and
/// are not validated after that.
///
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Ray {
    /// Starting point of ray.
    ///
    pub origin: Vector3,
    /// Unit direction of ray.
    ///
    pub direction: Vector3,
}
impl Ray {
    /// Constructs ray from its origin and direction.
    ///
    /// Direction is normalized.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::rays::Ray;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let ray: Ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 5.0));
    /// assert_eq!(ray.direction, Vector3::Z);
    /// ```
    ///
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Ray {
            origin,
            direction: direction.normalized(),
        }
    }

    /// Returns point on the ray at given distance from the origin.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::rays::Ray;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let ray: Ray = Ray::new(Vector3::one(), Vector3::X);
    /// assert_eq!(ray.end_point(2.0), Vector3::new(3.0, 1.0, 1.0));
    /// ```
    ///
    pub fn end_point(&self, distance: f32) -> Vector3 {
        self.origin + self.direction * distance
    }

    /// Returns ray that is transformed by given matrix.
    ///
    /// Both origin and point that lies on the ray at unit distance are transformed,
    /// and then direction is normalized again.
    ///
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let origin: Vector3 = matrix.apply_to(self.origin);
        let end: Vector3 = matrix.apply_to(self.origin + self.direction);
        Ray {
            origin,
            direction: (end - origin).normalized(),
        }
    }
}
