//! `ggeometry::mathcore` module is a core that implements all geometry functionality of the crate.
//!
//! # Prelude
//! `ggeometry::mathcore` prelude can be imported with `use ggeometry::mathcore::prelude::*`.
//!
//! # Model
//! Vectors represent directions and coordinates, and transformations of objects are
//! expressed by matrices, affine transforms and quaternions.
//! Planes, rays, bounding boxes and two-dimensional shapes are built on top of vectors,
//! so every one of them is a small `Copy` value (except for polygons that own their vertices).
//!
//! The [`intersector`] submodule is a stateless library of pairwise intersection and overlap
//! tests over those values. Every test is a free function that takes its operands by value or
//! by reference and returns the computed geometry wrapped in `Option`
//! (`None` stands for 'no intersection').
//!

// submodules and public re-exports
mod ext;
pub use ext::*;

pub mod affine;
pub mod bounds;
pub mod collisions;
pub mod errors;
pub mod floats;
pub mod intersector;
pub mod matrices;
pub mod planes;
pub mod quaternions;
pub mod rays;
pub mod shapes;
pub mod transforms;
pub mod vectors;

// prelude
pub mod prelude;
