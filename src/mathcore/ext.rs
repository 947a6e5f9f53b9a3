//! `mathcore::ext` hidden submodule supplies [`Sign`] and [`Angle`] helper types
//! that are shared by vectors, matrices, transforms and the intersector.
//!

use crate::mathcore::{
    floats::{almost_equal, FloatOperations},
    vectors::Vector2,
};
use std::{
    f32::consts::{PI, TAU},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// [`Sign`] enum describes orientation of a value: it is either negative, positive or zero.
///
/// Intersector uses it for sides of lines and for winding of polygons
/// (product of two signs tells whether they agree).
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::Sign;
/// let winding: Sign = Sign::from(-2.5);
/// assert_eq!(winding, Sign::Negative);
/// assert_eq!(winding * Sign::Negative, Sign::Positive);
/// assert_eq!(-winding, Sign::Positive);
/// assert_eq!(f32::from(winding), -1.0);
/// ```
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Value is less than zero.
    ///
    Negative = -1,
    /// Value is zero (either `0.0` or `-0.0`).
    ///
    Zero = 0,
    /// Value is greater than zero.
    ///
    Positive = 1,
}
impl From<f32> for Sign {
    fn from(value: f32) -> Self {
        if value > 0.0 {
            Sign::Positive
        } else if value < 0.0 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }
}
impl From<Sign> for f32 {
    fn from(sign: Sign) -> Self {
        match sign {
            Sign::Negative => -1.0,
            Sign::Zero => 0.0,
            Sign::Positive => 1.0,
        }
    }
}
impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}
impl Mul<Self> for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (lhs, rhs) if lhs == rhs => Sign::Positive,
            _ => Sign::Negative,
        }
    }
}

/// [`Angle`] is a newtype over radians that keeps its value in [0.0; TAU).
///
/// Non-finite values are replaced with zero angle.
/// Angles are compared approximately (see [`almost_equal`]).
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::Angle;
/// # use std::f32::consts::FRAC_PI_2;
/// let angle: Angle = Angle::from_radians(-FRAC_PI_2);
/// assert_eq!(angle, Angle::DEG270);
/// assert_eq!(angle, Angle::from_degrees(-90.0));
/// assert_eq!(angle + Angle::DEG90, Angle::zero());
/// ```
///
#[derive(Copy, Clone, Debug, Default, PartialOrd)]
pub struct Angle(f32);
/// Declares angle constants that are given in whole degrees.
///
macro_rules! impl_angle_constants {
    ($(($name:ident, $degrees:literal),)+) => {
        impl Angle {$(
            #[doc = concat!("Angle of ", stringify!($degrees), " degrees.")]
            ///
            pub const $name: Angle = Angle($degrees as f32 * (PI / 180.0));
        )+}
    };
}
impl_angle_constants!(
    (DEG30, 30),
    (DEG45, 45),
    (DEG60, 60),
    (DEG90, 90),
    (DEG120, 120),
    (DEG135, 135),
    (DEG150, 150),
    (DEG180, 180),
    (DEG210, 210),
    (DEG225, 225),
    (DEG240, 240),
    (DEG270, 270),
    (DEG300, 300),
    (DEG315, 315),
    (DEG330, 330),
);
impl Angle {
    /// Zero angle.
    ///
    pub const ZERO: Angle = Angle(0.0);

    /// Wraps radians into [0.0; TAU).
    ///
    fn wrap(radians: f32) -> f32 {
        if !radians.is_finite() {
            return 0.0;
        }
        let wrapped: f32 = radians.rem_euclid(TAU);
        // `rem_euclid` may round up to `TAU` for tiny negative inputs
        if wrapped >= TAU {
            0.0
        } else {
            wrapped
        }
    }

    /// Returns zero angle.
    ///
    pub const fn zero() -> Self {
        Angle::ZERO
    }
    /// Constructs angle from radians.
    ///
    pub fn from_radians(radians: f32) -> Self {
        Angle(Angle::wrap(radians))
    }
    /// Constructs angle from degrees.
    ///
    pub fn from_degrees(degrees: f32) -> Self {
        Angle::from_radians(degrees.to_radians())
    }
    /// Returns angle between positive x axis and given direction (counterclockwise).
    ///
    /// Zero vector has zero angle.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::Angle;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// assert_eq!(Angle::from_direction(Vector2::new(0.0, 2.0)), Angle::DEG90);
    /// assert_eq!(Angle::from_direction(Vector2::new(-1.0, -1.0)), Angle::DEG225);
    /// ```
    ///
    pub fn from_direction(direction: Vector2) -> Self {
        Angle::from_radians(direction.y.atan2(direction.x))
    }

    /// Returns angle in radians.
    ///
    pub fn radians(&self) -> f32 {
        self.0
    }
    /// Returns angle in degrees.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::Angle;
    /// assert_eq!(Angle::DEG135.degrees().round(), 135.0);
    /// ```
    ///
    pub fn degrees(&self) -> f32 {
        self.0.to_degrees()
    }

    /// Returns sine of angle.
    ///
    pub fn sin(&self) -> f32 {
        self.0.sin()
    }
    /// Returns cosine of angle.
    ///
    pub fn cos(&self) -> f32 {
        self.0.cos()
    }
    /// Returns `(sin, cos)` of angle.
    ///
    pub fn sin_cos(&self) -> (f32, f32) {
        self.0.sin_cos()
    }
}
impl FloatOperations for Angle {
    fn correct_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.correct_to(digits))
    }

    fn round_up_to(self, digits: i32) -> Self {
        Angle::from_radians(self.0.round_up_to(digits))
    }
}
impl Neg for Angle {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Angle::from_radians(-self.0)
    }
}
impl Add<Self> for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 + rhs.0)
    }
}
impl Sub<Self> for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Angle::from_radians(self.0 - rhs.0)
    }
}
impl Mul<f32> for Angle {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.0 * rhs)
    }
}
impl Div<f32> for Angle {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Angle::from_radians(self.0 / rhs)
    }
}
impl AddAssign<Self> for Angle {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign<Self> for Angle {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign<f32> for Angle {
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}
impl DivAssign<f32> for Angle {
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}
impl PartialEq for Angle {
    /// Angles just below `TAU` and just above zero are not considered equal.
    ///
    fn eq(&self, other: &Self) -> bool {
        almost_equal(self.0, other.0)
    }
}
impl Eq for Angle {}
