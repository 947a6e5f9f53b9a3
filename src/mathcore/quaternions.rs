//! `mathcore::quaternions` submodule implements [`Quaternion`] which is used to represent
//! rotations in three-dimensional space.
//!

use crate::mathcore::{
    floats::{almost_equal, FloatOperations},
    matrices::Matrix4,
    vectors::Vector3,
    Angle,
};
use std::ops::{Mul, Neg};

/// [`Quaternion`] struct represents quaternion `w + xi + yj + zk`.
///
/// Only unit quaternions represent rotations, and it is caller's responsibility to keep them normalized.
///
#[derive(Copy, Clone, Debug)]
pub struct Quaternion {
    /// X component of vector part.
    ///
    pub x: f32,
    /// Y component of vector part.
    ///
    pub y: f32,
    /// Z component of vector part.
    ///
    pub z: f32,
    /// Scalar part.
    ///
    pub w: f32,
}
impl Quaternion {
    /// Quaternion that represents no rotation.
    ///
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Initializes quaternion from its components.
    ///
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Quaternion { x, y, z, w }
    }
    /// Returns quaternion that represents no rotation.
    ///
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
    /// Constructs quaternion that rotates counterclockwise around given axis by given angle.
    ///
    /// Axis is normalized before use.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::quaternions::Quaternion;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// # use ggeometry::mathcore::Angle;
    /// let rotation: Quaternion = Quaternion::from_axis_angle(Vector3::Z, Angle::DEG90);
    /// assert_eq!(rotation.rotate(Vector3::X), Vector3::Y);
    /// ```
    ///
    pub fn from_axis_angle(axis: Vector3, angle: Angle) -> Self {
        let axis: Vector3 = axis.normalized();
        let (sin, cos): (f32, f32) = (angle.radians() / 2.0).sin_cos();
        Quaternion {
            x: axis.x * sin,
            y: axis.y * sin,
            z: axis.z * sin,
            w: cos,
        }
    }

    /// Returns elements of quaternion in `[x, y, z, w]` order.
    ///
    pub fn elements(&self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }
    /// Returns vector part of quaternion.
    ///
    pub fn vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Returns conjugate of quaternion (inverse rotation for unit quaternions).
    ///
    pub fn conjugate(self) -> Self {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }
    /// Performs dot product operation on two quaternions.
    ///
    pub fn dot_product(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
    /// Returns squared magnitude of quaternion.
    ///
    pub fn sqr_magnitude(&self) -> f32 {
        self.dot_product(*self)
    }
    /// Returns magnitude of quaternion.
    ///
    pub fn magnitude(&self) -> f32 {
        self.sqr_magnitude().sqrt()
    }
    /// Returns new quaternion that is normalized.
    ///
    /// Quaternion of zero length can not be normalized, so it is returned unchanged.
    ///
    pub fn normalized(self) -> Self {
        let magnitude: f32 = self.magnitude();
        if magnitude == 0.0 || magnitude == 1.0 {
            return self;
        }
        let [x, y, z, w]: [f32; 4] = self.elements().map(|elem| elem / magnitude);
        Quaternion { x, y, z, w }
    }

    /// Rotates vector by this quaternion.
    ///
    pub fn rotate(&self, vector: Vector3) -> Vector3 {
        let q: Vector3 = self.vector();
        let t: Vector3 = q.cross_product(vector) * 2.0;
        vector + t * self.w + q.cross_product(t)
    }

    /// Returns rotation matrix that corresponds to this quaternion.
    ///
    pub fn to_matrix(&self) -> Matrix4 {
        let (x, y, z, w): (f32, f32, f32, f32) = (self.x, self.y, self.z, self.w);
        let (xx, yy, zz): (f32, f32, f32) = (x * x, y * y, z * z);
        let (xy, xz, yz): (f32, f32, f32) = (x * y, x * z, y * z);
        let (xw, yw, zw): (f32, f32, f32) = (x * w, y * w, z * w);
        Matrix4::from([
            [
                1.0 - 2.0 * (yy + zz),
                2.0 * (xy - zw),
                2.0 * (xz + yw),
                0.0,
            ],
            [
                2.0 * (xy + zw),
                1.0 - 2.0 * (xx + zz),
                2.0 * (yz - xw),
                0.0,
            ],
            [
                2.0 * (xz - yw),
                2.0 * (yz + xw),
                1.0 - 2.0 * (xx + yy),
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}
impl Mul<Self> for Quaternion {
    type Output = Self;

    /// Returns Hamilton product of two quaternions (`self * rhs` applies `rhs` rotation first).
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion {
            x: self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            y: self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            z: self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            w: self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        }
    }
}
impl Neg for Quaternion {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: -self.w,
        }
    }
}
impl FloatOperations for Quaternion {
    fn correct_to(self, digits: i32) -> Self {
        let [x, y, z, w]: [f32; 4] = self.elements().correct_to(digits);
        Quaternion { x, y, z, w }
    }

    fn round_up_to(self, digits: i32) -> Self {
        let [x, y, z, w]: [f32; 4] = self.elements().round_up_to(digits);
        Quaternion { x, y, z, w }
    }
}
impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.elements()
            .iter()
            .zip(other.elements().iter())
            .all(|(&a, &b)| almost_equal(a, b))
    }
}
impl Eq for Quaternion {}
impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}
