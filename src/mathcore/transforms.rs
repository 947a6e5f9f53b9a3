//! `mathcore::transforms` submodule implements enums and functions which use affine transforms to
//! perform translation, rotation, scaling and shearing operations on objects. This module
//! also defines traits that provide transforming interfaces to objects.
//!

use crate::mathcore::{
    affine::Affine2,
    matrices::Matrix3,
    vectors::{Point, Vector2},
    Angle,
};

/// [`Transform`] struct-like enum represents 4 basic affine transformations.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Transform {
    /// Translation moves an object along given vector.
    ///
    Translation {
        /// Vector along which object will be translated.
        ///
        vector: Vector2,
    },

    /// Rotation operation rotates the original object's coordinate system for the given angle.
    ///
    Rotation {
        /// Angle for which coordinate system will be rotated.
        ///
        angle: Angle,
    },

    /// Scaling transform changes the size of an object by expanding or contracting all vertices
    /// along axes by given scalar values.
    ///
    Scaling {
        /// Scaling factors along x and y axes.
        ///
        scale: Vector2,
    },

    /// Shear transform slants an object along axes.
    ///
    Shear {
        /// Shear factors (`x' = x + shear.x * y`, `y' = y + shear.y * x`).
        ///
        shear: Vector2,
    },
}
impl Transform {
    /// Constructs corresponding affine transform.
    ///
    /// # Examples
    /// ### Translation
    /// ```rust
    /// # use ggeometry::mathcore::transforms::Transform;
    /// # use ggeometry::mathcore::affine::Affine2;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// let transform: Transform = Transform::Translation { vector: Vector2 { x: 2.0, y: 3.0 } };
    /// let affine: Affine2 = transform.affine();
    /// let point: Vector2 = Vector2 { x: 0.0, y: 2.0 };
    /// assert_eq!(affine.apply_to(point), Vector2 { x: 2.0, y: 5.0 });  // x' = x1 + x2
    ///                                                                 // y' = y1 + y2
    /// ```
    ///
    /// ### Rotation
    /// ```rust
    /// # use ggeometry::mathcore::transforms::Transform;
    /// # use ggeometry::mathcore::affine::Affine2;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// # use ggeometry::mathcore::Angle;
    /// let transform: Transform = Transform::Rotation { angle: Angle::from_degrees(90.0) };
    /// let point: Vector2 = Vector2 { x: 0.0, y: 2.0 };
    /// assert_eq!(transform.affine().apply_to(point), Vector2 { x: -2.0, y: 0.0 });  // x' = x * cos(angle) - y * sin(angle)
    ///                                                                              // y' = x * sin(angle) + y * cos(angle)
    /// ```
    ///
    /// ### Scaling
    /// ```rust
    /// # use ggeometry::mathcore::transforms::Transform;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// let transform: Transform = Transform::Scaling { scale: Vector2 { x: 3.0, y: 2.0 } };
    /// let point: Vector2 = Vector2 { x: 2.0, y: 2.0 };
    /// assert_eq!(transform.affine().apply_to(point), Vector2 { x: 6.0, y: 4.0 });  // x' = x * x_scale
    ///                                                                             // y' = y * y_scale
    /// ```
    ///
    pub fn affine(self) -> Affine2 {
        match self {
            Self::Translation { vector } => Affine2::from_translation(vector),
            Self::Rotation { angle } => Affine2::from_rotation(angle),
            Self::Scaling { scale } => Affine2::from_scaling(scale),
            Self::Shear { shear } => Affine2::from_shear(shear),
        }
    }
    /// Constructs corresponding transformation matrix.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::transforms::Transform;
    /// # use ggeometry::mathcore::matrices::Matrix3;
    /// # use ggeometry::mathcore::vectors::Vector2;
    /// let transform: Transform = Transform::Translation { vector: Vector2 { x: 2.0, y: 3.0 } };
    /// let matrix: Matrix3 = transform.matrix();
    /// assert_eq!(matrix.as_array(),
    ///     [[1.0, 0.0, 2.0],
    ///      [0.0, 1.0, 3.0],
    ///      [0.0, 0.0, 1.0]]
    /// );
    /// ```
    ///
    pub fn matrix(self) -> Matrix3 {
        Matrix3::from(self.affine())
    }

    /// Combines given transforms.
    ///
    /// Transforms are applied in the given order, so if you need to combine transforms `A -> B -> C`
    /// just pass them in that order (affine multiplication will be performed in order `C * B * A`).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::{Angle, vectors::Vector2, transforms::Transform, affine::Affine2};
    /// let rotation: Transform = Transform::Rotation { angle: Angle::DEG90 };
    /// let translation: Transform = Transform::Translation { vector: Vector2 { x: 3.0, y: 2.0 } };
    /// let scale: Transform = Transform::Scaling { scale: Vector2 { x: 2.0, y: 2.0 } };
    ///
    /// let combined: Affine2 = Transform::combine([rotation, translation, scale]);
    /// assert_eq!(combined.apply_to(Vector2 { x: 1.0, y: 0.0 }), Vector2 { x: 6.0, y: 6.0 });  // rotation -> translation -> scaling
    /// ```
    ///
    pub fn combine(transforms: impl IntoIterator<Item = Transform>) -> Affine2 {
        transforms
            .into_iter()
            .fold(Affine2::identity(), |acc, transform| {
                acc.then(transform.affine())
            })
    }
}

/// [`Translatable`] trait defines properties of translatable objects (objects that can be moved
/// across plane).
///
pub trait Translatable {
    /// Returns position of object.
    ///
    fn position(&self) -> Point;

    /// Translates object by a given vector.
    ///
    fn translate_on(&mut self, vector: Vector2);
    /// Translates object to a given point in place.
    ///
    fn translate_to(&mut self, point: Point) {
        self.translate_on(point - self.position());
    }
}
/// [`Rotatable`] trait defines properties of rotating objects.
///
/// Rotation should be performed on counterclockwise direction (`Transform::Rotation` supplies it),
/// so implementations of this trait should be using `Transform::Rotation` to be uniform relating to other objects.
///
pub trait Rotatable {
    /// Returns current angle.
    ///
    fn angle(&self) -> Angle;

    /// Rotates object by a given angle counting from current rotation.
    ///
    fn rotate_on(&mut self, angle: Angle);
    /// Rotates object by a given angle counting from zero rotation (from zero).
    ///
    fn rotate_to(&mut self, angle: Angle) {
        self.rotate_on(angle - self.angle());
    }
}
/// [`Scalable`] trait defines properties of scalable objects (objects that can be resized).
///
pub trait Scalable {
    /// Returns current scale factors.
    ///
    fn scale(&self) -> Vector2;

    /// Multiplies object's scale factors by given factors.
    ///
    fn scale_on(&mut self, scale: Vector2);
    /// Sets object's scale factors to given values.
    ///
    /// Current scale factors should not be zero.
    ///
    fn set_scale(&mut self, scale: Vector2) {
        let current: Vector2 = self.scale();
        self.scale_on(Vector2::new(scale.x / current.x, scale.y / current.y));
    }
}
/// [`Transformable`] super-trait defines properties of transformable object.
///
/// This trait requires [`Translatable`], [`Rotatable`] and [`Scalable`] traits to be implemented.
/// This trait is automatically implemented if possible.
///
pub trait Transformable: Translatable + Rotatable + Scalable {}
impl<T: Translatable + Rotatable + Scalable> Transformable for T {}

#[cfg(test)]
mod tests {
    use super::Transform;
    use crate::mathcore::{affine::Affine2, matrices::Matrix3, vectors::Vector2, Angle};

    #[test]
    fn combine() {
        let transforms: [Transform; 4] = [
            Transform::Translation {
                vector: Vector2::new(-1.0, -1.0),
            },
            Transform::Shear {
                shear: Vector2::new(1.0, 0.0),
            },
            Transform::Rotation {
                angle: Angle::DEG180,
            },
            Transform::Scaling {
                scale: Vector2::new(1.0, 3.0),
            },
        ];
        let combined: Affine2 = Transform::combine(transforms);
        let manual: Vector2 = transforms
            .iter()
            .fold(Vector2::new(2.0, 3.0), |point, transform| {
                transform.affine().apply_to(point)
            });
        assert_eq!(combined.apply_to(Vector2::new(2.0, 3.0)), manual);
        assert_eq!(manual, Vector2::new(-3.0, -6.0));

        assert_eq!(Transform::combine([]), Affine2::identity());
        let matrix: Matrix3 = transforms
            .iter()
            .fold(Matrix3::identity(), |acc, transform| transform.matrix() * acc);
        assert_eq!(Matrix3::from(combined), matrix);
    }
}
