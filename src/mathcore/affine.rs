//! `mathcore::affine` submodule implements [`Affine2`] - two-dimensional affine transform which is stored
//! as 2x3 matrix.
//!
//! Affine transforms are cheaper than general [`Matrix3`](crate::mathcore::matrices::Matrix3)
//! transforms because their last row is always `0 0 1`.
//!

use crate::mathcore::{
    errors::GeometryError,
    floats::{almost_equal, is_zero, FloatOperations},
    matrices::Matrix3,
    vectors::Vector2,
    Angle,
};
use std::ops::Mul;

/// [`Affine2`] struct represents two-dimensional affine transform.
///
/// Matrix is stored in row-major order:
/// ```text
/// | m00 m01 m02 |
/// | m10 m11 m12 |
/// |  0   0   1  |
/// ```
///
#[derive(Copy, Clone, Debug)]
pub struct Affine2 {
    /// First row, first column.
    ///
    pub m00: f32,
    /// First row, second column.
    ///
    pub m01: f32,
    /// First row, third column (x translation).
    ///
    pub m02: f32,

    /// Second row, first column.
    ///
    pub m10: f32,
    /// Second row, second column.
    ///
    pub m11: f32,
    /// Second row, third column (y translation).
    ///
    pub m12: f32,
}
impl Affine2 {
    /// Identity transform.
    ///
    pub const IDENTITY: Affine2 = Affine2 {
        m00: 1.0,
        m01: 0.0,
        m02: 0.0,
        m10: 0.0,
        m11: 1.0,
        m12: 0.0,
    };

    /// Returns identity transform.
    ///
    pub const fn identity() -> Self {
        Self::IDENTITY
    }
    /// Constructs transform that translates points by given vector.
    ///
    pub fn from_translation(vector: Vector2) -> Self {
        Affine2 {
            m02: vector.x,
            m12: vector.y,
            ..Self::IDENTITY
        }
    }
    /// Constructs transform that rotates points counterclockwise by given angle.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::affine::Affine2;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// # use ggeometry::mathcore::Angle;
    /// let rotation: Affine2 = Affine2::from_rotation(Angle::DEG90);
    /// assert_eq!(rotation.apply_to(Vector2::new(0.0, 2.0)), Vector2::new(-2.0, 0.0));
    /// ```
    ///
    pub fn from_rotation(angle: Angle) -> Self {
        let (sin, cos): (f32, f32) = angle.sin_cos();
        Affine2 {
            m00: cos,
            m01: -sin,
            m10: sin,
            m11: cos,
            ..Self::IDENTITY
        }
    }
    /// Constructs transform that scales points along axes by components of given vector.
    ///
    pub fn from_scaling(scale: Vector2) -> Self {
        Affine2 {
            m00: scale.x,
            m11: scale.y,
            ..Self::IDENTITY
        }
    }
    /// Constructs transform that shears points (`x' = x + shear.x * y`, `y' = y + shear.y * x`).
    ///
    pub fn from_shear(shear: Vector2) -> Self {
        Affine2 {
            m01: shear.x,
            m10: shear.y,
            ..Self::IDENTITY
        }
    }

    /// Returns transform that applies `self` and then `other`.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::affine::Affine2;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// let transform: Affine2 = Affine2::from_scaling(Vector2::new(2.0, 2.0))
    ///     .then(Affine2::from_translation(Vector2::new(1.0, 0.0)));
    /// assert_eq!(transform.apply_to(Vector2::new(1.0, 1.0)), Vector2::new(3.0, 2.0));
    /// ```
    ///
    pub fn then(self, other: Affine2) -> Self {
        other * self
    }

    /// Returns determinant of the linear part of the transform.
    ///
    pub fn determinant(&self) -> f32 {
        self.m00 * self.m11 - self.m01 * self.m10
    }
    /// Returns inverse transform.
    ///
    /// Transforms which determinant is zero (within `FLOAT_ROUNDING_ERROR`) are not invertible,
    /// so `None` is returned.
    ///
    pub fn inverse(&self) -> Option<Self> {
        let det: f32 = self.determinant();
        if is_zero(det) {
            return None;
        }
        let inv_det: f32 = 1.0 / det;
        Some(Affine2 {
            m00: self.m11 * inv_det,
            m01: -self.m01 * inv_det,
            m02: (self.m01 * self.m12 - self.m11 * self.m02) * inv_det,
            m10: -self.m10 * inv_det,
            m11: self.m00 * inv_det,
            m12: (self.m10 * self.m02 - self.m00 * self.m12) * inv_det,
        })
    }

    /// Transforms given point.
    ///
    pub fn apply_to(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            self.m00 * point.x + self.m01 * point.y + self.m02,
            self.m10 * point.x + self.m11 * point.y + self.m12,
        )
    }
    /// Returns translation part of the transform.
    ///
    pub fn translation(&self) -> Vector2 {
        Vector2::new(self.m02, self.m12)
    }

    /// Returns elements of the transform in row-major order.
    ///
    pub fn elements(&self) -> [f32; 6] {
        [self.m00, self.m01, self.m02, self.m10, self.m11, self.m12]
    }
}
impl Mul<Self> for Affine2 {
    type Output = Self;

    /// Multiplies transforms as 3x3 matrices (`self * rhs` applies `rhs` first).
    ///
    fn mul(self, rhs: Self) -> Self::Output {
        Affine2 {
            m00: self.m00 * rhs.m00 + self.m01 * rhs.m10,
            m01: self.m00 * rhs.m01 + self.m01 * rhs.m11,
            m02: self.m00 * rhs.m02 + self.m01 * rhs.m12 + self.m02,
            m10: self.m10 * rhs.m00 + self.m11 * rhs.m10,
            m11: self.m10 * rhs.m01 + self.m11 * rhs.m11,
            m12: self.m10 * rhs.m02 + self.m11 * rhs.m12 + self.m12,
        }
    }
}
impl FloatOperations for Affine2 {
    fn correct_to(self, digits: i32) -> Self {
        let [m00, m01, m02, m10, m11, m12]: [f32; 6] = self.elements().correct_to(digits);
        Affine2 {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
        }
    }

    fn round_up_to(self, digits: i32) -> Self {
        let [m00, m01, m02, m10, m11, m12]: [f32; 6] = self.elements().round_up_to(digits);
        Affine2 {
            m00,
            m01,
            m02,
            m10,
            m11,
            m12,
        }
    }
}
impl PartialEq for Affine2 {
    fn eq(&self, other: &Self) -> bool {
        self.elements()
            .iter()
            .zip(other.elements().iter())
            .all(|(&a, &b)| almost_equal(a, b))
    }
}
impl Eq for Affine2 {}
impl Default for Affine2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}
impl TryFrom<Matrix3> for Affine2 {
    type Error = GeometryError;

    /// Takes first two rows of matrix.
    ///
    /// Fails with [`GeometryError::NotAffine`] if last row of matrix is not `0 0 1`.
    ///
    fn try_from(matrix: Matrix3) -> Result<Self, Self::Error> {
        if matrix[2] != [0.0, 0.0, 1.0] {
            return Err(GeometryError::NotAffine);
        }
        Ok(Affine2 {
            m00: matrix[0][0],
            m01: matrix[0][1],
            m02: matrix[0][2],
            m10: matrix[1][0],
            m11: matrix[1][1],
            m12: matrix[1][2],
        })
    }
}
