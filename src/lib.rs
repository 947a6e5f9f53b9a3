//! # GGEometry
//!
//! **GGEometry** - geometry and intersection core for 2d/3d games written in pure Rust.
//!
//! The crate supplies plain value types (vectors, matrices, planes, rays, boxes and shapes)
//! and a stateless library of intersection and overlap tests over them.
//!

#![warn(missing_docs, clippy::missing_docs_in_private_items)] // `missing_docs`
#![warn(unused_import_braces, unused_qualifications, unused_results)] // `unused_*`
#![warn(trivial_casts, trivial_numeric_casts)] // `casts`
#![warn(missing_copy_implementations, missing_debug_implementations)] // `missing_*_implementations`
#![warn(variant_size_differences, unreachable_pub)]

// crates
extern crate log;
extern crate thiserror;

// cores
pub mod mathcore;
