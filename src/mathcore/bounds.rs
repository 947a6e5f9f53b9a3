//! `mathcore::bounds` submodule implements [`BoundingBox`] - axis-aligned box in three-dimensional space.
//!

use crate::mathcore::{matrices::Matrix4, vectors::Vector3};

/// [`BoundingBox`] struct represents axis-aligned bounding box.
///
/// Every constructor sorts corners, so `min` is always less or equal to `max` component-wise
/// (unless box is empty, see [`BoundingBox::inf`]).
/// Degenerate boxes (boxes with zero dimensions) are legal.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BoundingBox {
    /// Minimum corner.
    ///
    pub min: Vector3,
    /// Maximum corner.
    ///
    pub max: Vector3,
}
impl BoundingBox {
    /// Constructs box from two opposite corners.
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::bounds::BoundingBox;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let bounds: BoundingBox = BoundingBox::new(Vector3::new(1.0, -1.0, 2.0), Vector3::new(-1.0, 1.0, 0.0));
    /// assert_eq!(bounds.min, Vector3::new(-1.0, -1.0, 0.0));
    /// assert_eq!(bounds.max, Vector3::new(1.0, 1.0, 2.0));
    /// ```
    ///
    pub fn new(corner1: Vector3, corner2: Vector3) -> Self {
        BoundingBox {
            min: corner1.min(corner2),
            max: corner1.max(corner2),
        }
    }
    /// Constructs empty box (`min` is positive infinity and `max` is negative infinity).
    ///
    /// Empty box is not valid, but can be extended by points.
    ///
    pub fn inf() -> Self {
        BoundingBox {
            min: Vector3::from([f32::INFINITY; 3]),
            max: Vector3::from([f32::NEG_INFINITY; 3]),
        }
    }
    /// Constructs the smallest box that contains all given points.
    ///
    /// If there are no points, empty box is returned.
    ///
    pub fn from_points(points: impl IntoIterator<Item = Vector3>) -> Self {
        points
            .into_iter()
            .fold(BoundingBox::inf(), |bounds, point| bounds.extend(point))
    }

    /// Returns box that is extended to contain given point.
    ///
    pub fn extend(self, point: Vector3) -> Self {
        BoundingBox {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }
    /// Returns box that is extended to contain given box.
    ///
    pub fn extend_bounds(self, other: BoundingBox) -> Self {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Returns whether box is not empty.
    ///
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }
    /// Returns center of box.
    ///
    pub fn center(&self) -> Vector3 {
        (self.min + self.max) / 2.0
    }
    /// Returns dimensions (width, height and depth) of box.
    ///
    pub fn dimensions(&self) -> Vector3 {
        self.max - self.min
    }
    /// Returns half of dimensions of box.
    ///
    pub fn half_dimensions(&self) -> Vector3 {
        self.dimensions() / 2.0
    }
    /// Returns 8 corners of box.
    ///
    pub fn corners(&self) -> [Vector3; 8] {
        let (min, max): (Vector3, Vector3) = (self.min, self.max);
        [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(min.x, max.y, max.z),
        ]
    }

    /// Returns whether point lies in the box (boundary included).
    ///
    pub fn contains_point(&self, point: Vector3) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
            && (self.min.z..=self.max.z).contains(&point.z)
    }
    /// Returns whether other box lies in this box (boundary included).
    ///
    /// Empty boxes neither contain nor are contained.
    ///
    pub fn contains(&self, other: &BoundingBox) -> bool {
        self.is_valid()
            && other.is_valid()
            && self.contains_point(other.min)
            && self.contains_point(other.max)
    }
    /// Returns whether boxes intersect (touching boxes intersect).
    ///
    /// # Example
    /// ```rust
    /// # use ggeometry::mathcore::bounds::BoundingBox;
    /// # use ggeometry::mathcore::vectors::Vector3;
    /// let a: BoundingBox = BoundingBox::new(Vector3::zero(), Vector3::one());
    /// let b: BoundingBox = BoundingBox::new(Vector3::one(), Vector3::one() * 2.0);
    /// let c: BoundingBox = BoundingBox::new(Vector3::one() * 1.5, Vector3::one() * 2.0);
    /// assert!(a.intersects(&b));
    /// assert!(!a.intersects(&c));
    /// ```
    ///
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Returns the smallest axis-aligned box that contains this box transformed by given matrix.
    ///
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        BoundingBox::from_points(self.corners().map(|corner| matrix.apply_to(corner)))
    }
}
impl Default for BoundingBox {
    /// Default box is degenerate box at the origin.
    ///
    fn default() -> Self {
        BoundingBox {
            min: Vector3::zero(),
            max: Vector3::zero(),
        }
    }
}
