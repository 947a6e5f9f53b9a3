//! Prelude module: `mathcore::prelude` re-exports all `ggeometry::mathcore` items.
//!
//! # Examples
//! Import all the exports.
//!
//! ```rust
//! use ggeometry::mathcore::prelude::*;
//! ```
//!

// re-exports
pub use crate::mathcore::affine::*;
pub use crate::mathcore::bounds::*;
pub use crate::mathcore::collisions::*;
pub use crate::mathcore::errors::*;
pub use crate::mathcore::floats::*;
pub use crate::mathcore::intersector::*;
pub use crate::mathcore::matrices::*;
pub use crate::mathcore::planes::*;
pub use crate::mathcore::quaternions::*;
pub use crate::mathcore::rays::*;
pub use crate::mathcore::shapes::*;
pub use crate::mathcore::transforms::*;
pub use crate::mathcore::vectors::*;
pub use crate::mathcore::*;
