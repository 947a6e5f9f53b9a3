//! `mathcore::collisions` submodule defines collision systems
//! that are used to detect and resolve collisions between two shapes.
//!

use crate::mathcore::{
    intersector::{overlap_convex_polygons, overlaps_convex_polygons, MinimumTranslationVector},
    shapes::{PolygonLike, Shape},
};

/// `CollisionSystem` trait defines systems that can detect collisions between two shapes and
/// resolve collisions between them.
///
pub trait CollisionSystem<S1, S2>
where
    S1: Shape,
    S2: Shape,
{
    /// Returns whether two shapes collide or not.
    ///
    fn is_colliding(&self, shape1: &S1, shape2: &S2) -> bool;
    /// Statically resolves collision between two shapes by moving the first one.
    ///
    fn resolve(&self, shape1: &mut S1, shape2: &S2);
}

/// `SATSystem` is a collision system that can detect and resolve collisions between two convex shapes
/// by using algorithm which is based on separating axis theorem.
///
/// One of main features of this system is that is returns early when there is no collision.
/// Collisions are resolved with minimum translation vector, so touching shapes are colliding
/// but are not moved.
///
#[derive(Copy, Clone, Debug)]
pub struct SATSystem;
impl SATSystem {
    /// Returns minimum translation vector that separates two convex shapes if they collide.
    ///
    pub fn minimum_translation_vector(
        &self,
        shape1: &impl PolygonLike,
        shape2: &impl PolygonLike,
    ) -> Option<MinimumTranslationVector> {
        overlap_convex_polygons(shape1.vertices(), shape2.vertices())
    }
}
impl<S1, S2> CollisionSystem<S1, S2> for SATSystem
where
    S1: PolygonLike,
    S2: PolygonLike,
{
    fn is_colliding(&self, shape1: &S1, shape2: &S2) -> bool {
        overlaps_convex_polygons(shape1.vertices(), shape2.vertices())
    }
    fn resolve(&self, shape1: &mut S1, shape2: &S2) {
        if let Some(mtv) = self.minimum_translation_vector(&*shape1, shape2) {
            shape1.translate_on(mtv.translation());
        }
    }
}

/// Returns whether two shapes are colliding or not.
///
/// Detection is performed by using provided collision system.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::collisions::{is_colliding, SATSystem};
/// # use ggeometry::mathcore::shapes::{Polygon, Rectangle};
/// let rect1: Polygon = Polygon::new(Rectangle::new(0.0, 0.0, 2.0, 2.0).corners().to_vec());
/// let rect2: Polygon = Polygon::new(Rectangle::new(1.0, 0.0, 2.0, 2.0).corners().to_vec());
/// let rect3: Polygon = Polygon::new(Rectangle::new(5.0, 0.0, 2.0, 2.0).corners().to_vec());
/// assert!(is_colliding(&SATSystem, &rect1, &rect2));
/// assert!(!is_colliding(&SATSystem, &rect1, &rect3));
/// ```
///
pub fn is_colliding<S1: Shape, S2: Shape>(
    collision_system: &(impl CollisionSystem<S1, S2> + ?Sized),
    shape1: &S1,
    shape2: &S2,
) -> bool {
    collision_system.is_colliding(shape1, shape2)
}
/// Statically resolves collision between two shapes.
///
/// Resolving is performed by using provided collision system.
///
/// # Example
/// ```rust
/// # use ggeometry::mathcore::collisions::{resolve, SATSystem};
/// # use ggeometry::mathcore::shapes::{Polygon, Rectangle};
/// # use ggeometry::mathcore::transforms::Translatable;
/// # use ggeometry::mathcore::vectors::Point;
/// let mut rect1: Polygon = Polygon::new(Rectangle::new(0.0, 0.0, 2.0, 2.0).corners().to_vec());
/// let rect2: Polygon = Polygon::new(Rectangle::new(1.0, 0.0, 2.0, 2.0).corners().to_vec());
/// resolve(&SATSystem, &mut rect1, &rect2);
/// assert_eq!(rect1.position(), Point::new(-1.0, 0.0));
/// ```
///
pub fn resolve<S1: Shape, S2: Shape>(
    collision_system: &(impl CollisionSystem<S1, S2> + ?Sized),
    shape1: &mut S1,
    shape2: &S2,
) {
    collision_system.resolve(shape1, shape2);
}
