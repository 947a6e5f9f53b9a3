//! `mathcore::vectors` submodule implements two- and three-dimensional vectors which can be used to represent
//! points, directions, normals and other things.
//!

use crate::mathcore::{
    floats::{almost_equal, is_zero, FloatOperations},
    matrices::Matrix4,
    quaternions::Quaternion,
    Angle,
};
use std::{
    fmt::Debug,
    ops::{Add, AddAssign, BitXor, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

// Macros that implement all common associated functions and methods on vectors could be replaced
// by traits and their default implementations, but there are severity of architectural flaws
// (with generic consts it would be possible to implement those traits multiple times, with associated
// constants it would be impossible to implement until `generic_const_exprs` hits stable). So
// currently all of this is handled by macros.
//
/// [`impl_vector`] macro implements all common associated functions and methods on vectors.
///
/// This macro depends on manual implementation of `elements` and `set` functions and
/// `From<[f32; $size]>` trait implementation.
///
macro_rules! impl_vector {
    ($struct:ident, $size:expr) => {
        impl $struct {
            /// Initializes vector with zeroes.
            ///
            pub fn zero() -> Self {
                Self::from([0.0; $size])
            }
            /// Initializes vector with ones.
            ///
            pub fn one() -> Self {
                Self::from([1.0; $size])
            }

            /// Applies function to every vector element and returns changed vector.
            ///
            /// Allows to perform custom operations on each vector element.
            ///
            pub fn map(self, f: impl Fn(f32) -> f32) -> Self {
                let mut elements: [f32; $size] = self.elements();
                elements.iter_mut().for_each(|elem| *elem = f(*elem));
                Self::from(elements)
            }
            /// Combines vectors by applying function on their elements.
            ///
            /// Allows performing operations with 2 vectors.
            ///
            pub fn combine(self, other: Self, f: impl Fn(f32, f32) -> f32) -> Self {
                let (e1, e2): ([f32; $size], [f32; $size]) = (self.elements(), other.elements());
                let mut elements: [f32; $size] = [0.0; $size];
                for i in 0..$size {
                    elements[i] = f(e1[i], e2[i]);
                }
                Self::from(elements)
            }

            /// Returns squared magnitude of a vector (vector length).
            ///
            pub fn sqr_magnitude(&self) -> f32 {
                self.elements().iter().fold(0.0, |acc, n| acc + *n * *n)
            }
            /// Returns magnitude of vector.
            ///
            pub fn magnitude(&self) -> f32 {
                self.sqr_magnitude().sqrt()
            }

            /// Returns squared distance between two points.
            ///
            pub fn sqr_distance(self, other: Self) -> f32 {
                (other - self).sqr_magnitude()
            }
            /// Returns distance between two points.
            ///
            pub fn distance(self, other: Self) -> f32 {
                (other - self).magnitude()
            }

            /// Returns whether every component of vector is zero within `FLOAT_ROUNDING_ERROR`.
            ///
            pub fn is_zero(&self) -> bool {
                self.elements().iter().all(|elem| is_zero(*elem))
            }

            /// Returns vector that is made from the largest components of two vectors.
            ///
            pub fn max(self, other: Self) -> Self {
                self.combine(other, |a, b| a.max(b))
            }
            /// Returns vector that is made from the smallest components of two vectors.
            ///
            pub fn min(self, other: Self) -> Self {
                self.combine(other, |a, b| a.min(b))
            }

            /// Multiplies two vectors component-wise.
            ///
            pub fn scale(self, other: Self) -> Self {
                self.combine(other, |a, b| a * b)
            }

            /// Performs dot product operation on two vectors.
            ///
            pub fn dot_product(self, other: Self) -> f32 {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .fold(0.0, |acc, (a, b)| acc + *a * *b)
            }

            /// Returns angle between two vectors.
            ///
            pub fn angle(self, other: Self) -> Angle {
                Angle::from_radians(
                    (self.dot_product(other) / (self.magnitude() * other.magnitude()))
                        .clamp(-1.0, 1.0)
                        .acos(),
                )
            }

            /// Returns new vector that is normalized.
            ///
            /// Vector of zero length can not be normalized, so zero vector is returned instead.
            ///
            pub fn normalized(self) -> Self {
                let sqr_magnitude: f32 = self.sqr_magnitude();
                if sqr_magnitude == 0.0 || sqr_magnitude == 1.0 {
                    return self;
                }
                self / sqr_magnitude.sqrt()
            }
            /// Returns new vector, which magnitude is clamped to max_magnitude.
            ///
            pub fn clamped_magnitude(self, max_magnitude: f32) -> Self {
                let magnitude: f32 = self.magnitude();
                if magnitude == 0.0 {
                    return self;
                }
                self * magnitude.min(max_magnitude) / magnitude
            }

            /// Linearly interpolates from this vector to `other` by `t`.
            ///
            /// `t` will be clamped between [0.0; 1.0].
            ///
            pub fn lerp(self, other: Self, t: f32) -> Self {
                let t: f32 = t.clamp(0.0, 1.0);
                self + (other - self) * t
            }
        }
        impl FloatOperations for $struct {
            /// Constructs new vector by rounding every vector component to given amount of digits after floating point.
            ///
            fn round_up_to(self, digits: i32) -> Self {
                self.map(|elem| elem.round_up_to(digits))
            }
            /// Constructs new vector by correcting every vector component that may be wronged by float operations.
            ///
            fn correct_to(self, digits: i32) -> Self {
                self.map(|elem| elem.correct_to(digits))
            }
        }
        impl PartialEq for $struct {
            fn eq(&self, other: &Self) -> bool {
                self.elements()
                    .iter()
                    .zip(other.elements().iter())
                    .all(|(&a, &b)| almost_equal(a, b))
            }
        }
        impl Eq for $struct {}
        impl Default for $struct {
            fn default() -> Self {
                Self::zero()
            }
        }
    };
}

// All the following macros depend on [`impl_vector`] macro.
/// [`impl_vector_vector_operations`] macro implements vector-vector operations for vector.
///
macro_rules! impl_vector_vector_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.combine(rhs, |a, b| a $op b)
            }
        }
    )+}
}
/// [`impl_vector_rhs_operations`] macro implements vector-rhs operations for vector.
///
macro_rules! impl_vector_rhs_operations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            type Output = Self;

            fn $method(self, rhs: $rhs) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    )+}
}
/// [`impl_vector_assignoperations`] macro implements `...Assign` trait for vector.
///
// This could've been integrated in `impl_vector_vector_operations` and
// `impl_vector_rhs_operations`
// macros but until `concat_idents` macro is in stable it is not possible.
macro_rules! impl_vector_assignoperations {
    ($struct_name:ident, $rhs:ty, ($(($trait:ident, $method:ident, $op:tt),)+)) => {$(
        impl $trait<$rhs> for $struct_name {
            fn $method(&mut self, rhs: $rhs) {
                *self = *self $op rhs;
            }
        }
    )+}
}
/// [`impl_vector_operations`] macro implements all operation traits for vector.
///
macro_rules! impl_vector_operations {
    ($struct_name:ident) => {
        impl Neg for $struct_name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                self.map(|a| -a)
            }
        }
        impl Mul for $struct_name {
            type Output = f32;

            /// Performs dot product operation on two vectors.
            ///
            fn mul(self, other: Self) -> Self::Output {
                self.dot_product(other)
            }
        }
        impl_vector_vector_operations!($struct_name, Self, ((Add, add, +),
                                                            (Sub, sub, -),));
        impl_vector_assignoperations!($struct_name, Self, ((AddAssign, add_assign, +),
                                                           (SubAssign, sub_assign, -),));
        impl_vector_rhs_operations!($struct_name, f32, ((Add, add, +),
                                                        (Sub, sub, -),
                                                        (Mul, mul, *),
                                                        (Div, div, /),));
        impl_vector_assignoperations!($struct_name, f32, ((AddAssign, add_assign, +),
                                                          (SubAssign, sub_assign, -),
                                                          (MulAssign, mul_assign, *),
                                                          (DivAssign, div_assign, /),));
    }
}

/// [`Vector2`] struct represents two-dimensional vector and two-dimensional point with `f32` coordinates on a plane.
///
#[derive(Copy, Clone, Debug)]
pub struct Vector2 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,
}
impl Vector2 {
    /// Initializes vector from its components.
    ///
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 2] {
        [self.x, self.y]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 2]) {
        self.x = elements[0];
        self.y = elements[1];
    }

    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    pub fn cross_product(self, other: Self) -> f32 {
        (self.x * other.y) - (self.y * other.x)
    }

    /// Returns vector that is perpendicular to this one (rotated by 90 degrees counterclockwise).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// assert_eq!(Vector2::new(2.0, 1.0).perpendicular(), Vector2::new(-1.0, 2.0));
    /// ```
    ///
    pub fn perpendicular(self) -> Self {
        Vector2 {
            x: -self.y,
            y: self.x,
        }
    }
    /// Returns vector that is rotated counterclockwise by given angle.
    ///
    pub fn rotated(self, angle: Angle) -> Self {
        let (sin, cos): (f32, f32) = angle.sin_cos();
        Vector2 {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }
}
impl_vector!(Vector2, 2);
impl_vector_operations!(Vector2);
impl BitXor for Vector2 {
    type Output = f32;

    /// Returns scalar that represents cross product of two-dimensional vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl From<[f32; 2]> for Vector2 {
    fn from(arr: [f32; 2]) -> Self {
        Vector2 {
            x: arr[0],
            y: arr[1],
        }
    }
}

/// Type alias for [`Vector2`].
///
pub type Point = Vector2;
/// Type alias for [`Vector2`].
///
pub type Vertex = Point;

/// [`Vector3`] struct represents three-dimensional vector and three-dimensional point with `f32` coordinates.
///
#[derive(Copy, Clone, Debug)]
pub struct Vector3 {
    /// X component of vector.
    ///
    pub x: f32,

    /// Y component of vector.
    ///
    pub y: f32,

    /// Z component of vector.
    ///
    pub z: f32,
}
impl Vector3 {
    /// Unit vector that is directed along x axis.
    ///
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// Unit vector that is directed along y axis.
    ///
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// Unit vector that is directed along z axis.
    ///
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Initializes vector from its components.
    ///
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector3 { x, y, z }
    }

    /// Returns elements of vector.
    ///
    pub fn elements(&self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }
    /// Sets from values to elements of vector.
    ///
    pub fn set(&mut self, elements: [f32; 3]) {
        self.x = elements[0];
        self.y = elements[1];
        self.z = elements[2];
    }

    /// Returns vector that represents cross product of three-dimensional vectors.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// assert_eq!(Vector3::X.cross_product(Vector3::Y), Vector3::Z);
    /// assert_eq!(Vector3::Y ^ Vector3::X, -Vector3::Z);
    /// ```
    ///
    pub fn cross_product(self, other: Self) -> Self {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Transforms point by given matrix (as affine transform, `w` is assumed to be 1.0).
    ///
    pub fn transformed(self, matrix: &Matrix4) -> Self {
        matrix.apply_to(self)
    }
    /// Transforms point by given matrix and divides result by `w`.
    ///
    /// This is the way points are transformed by projection matrices.
    ///
    pub fn projected(self, matrix: &Matrix4) -> Self {
        matrix.project(self)
    }
    /// Rotates vector by given quaternion.
    ///
    pub fn rotated(self, quaternion: Quaternion) -> Self {
        quaternion.rotate(self)
    }
}
impl_vector!(Vector3, 3);
impl_vector_operations!(Vector3);
impl BitXor for Vector3 {
    type Output = Vector3;

    /// Returns vector that represents cross product of three-dimensional vectors.
    ///
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.cross_product(rhs)
    }
}
impl From<[f32; 3]> for Vector3 {
    fn from(arr: [f32; 3]) -> Self {
        Vector3 {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }
}
impl From<(Vector2, f32)> for Vector3 {
    /// Extends two-dimensional vector with `z` component.
    ///
    fn from((vector, z): (Vector2, f32)) -> Self {
        Vector3 {
            x: vector.x,
            y: vector.y,
            z,
        }
    }
}

/// Type alias for [`Vector3`].
///
pub type Point3 = Vector3;
