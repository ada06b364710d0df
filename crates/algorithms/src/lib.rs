#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Algorithms operating on recorded polygon outlines.
//!
//! This crate is reexported in [polyshape](../polyshape/index.html).

pub extern crate polyshape_path as path;

pub mod aabb;

pub use crate::path::geom;
pub use crate::path::math;
