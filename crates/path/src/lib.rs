#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and traits to build regular polygon outlines.
//!
//! Outlines are emitted into a [`PathSink`](builder/trait.PathSink.html), which
//! the caller owns. The provided [`Path`](path/struct.Path.html) records what it
//! receives and can be iterated, hit-tested or serialized to SVG.
//!
//! This crate is reexported in [polyshape](../polyshape/index.html).
//!
//! # Examples
//!
//! ```
//! use polyshape_path::{construct_polygon_path, Path, PathEvent, PolygonKind, RegularPolygon};
//! use polyshape_path::math::point;
//!
//! let hexagon = RegularPolygon::new(6, point(100.0, 100.0), 50.0, 8.0).unwrap();
//!
//! let mut path = Path::new();
//! let kind = construct_polygon_path(&mut path, &hexagon).unwrap();
//! assert_eq!(kind, PolygonKind::Rounded);
//!
//! for event in &path {
//!     match event {
//!         PathEvent::Begin { at } => { println!(" - move to {:?}", at); }
//!         PathEvent::Line { from, to } => { println!(" - line {:?} -> {:?}", from, to); }
//!         PathEvent::Arc { arc, .. } => { println!(" - arc around {:?}", arc.center); }
//!         PathEvent::End { close, .. } => { assert!(close); }
//!     }
//! }
//! ```
//!

pub use polyshape_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod builder;
mod events;
pub mod path;
pub mod polygon;
pub mod svg;

#[doc(inline)]
pub use crate::builder::{PathSink, Translated};
pub use crate::events::*;
pub use crate::geom::math;
pub use crate::geom::{Arc, PolygonError, RegularPolygon};
#[doc(inline)]
pub use crate::path::{Iter, Path, Verb};
#[doc(inline)]
pub use crate::polygon::{
    construct_polygon_path, construct_polygon_path_with_options, polygon_kind, PolygonKind,
    PolygonOptions,
};
#[doc(inline)]
pub use crate::svg::PathSerializer;

pub mod traits {
    //! `polyshape_path` traits reexported here for convenience.

    pub use crate::builder::PathSink;
}

/// The fill rule defines how to determine what is inside and what is outside of the shape.
///
/// See the SVG specification.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    #[inline]
    pub fn is_in(&self, winding_number: i32) -> bool {
        match *self {
            FillRule::EvenOdd => winding_number % 2 != 0,
            FillRule::NonZero => winding_number != 0,
        }
    }

    #[inline]
    pub fn is_out(&self, winding_number: i32) -> bool {
        !self.is_in(winding_number)
    }
}

/// The two possible orientations for the edges of a shape to be built in.
///
/// Positive winding corresponds to the positive orientation in trigonometry, which
/// appears clockwise on a y-down surface.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Winding {
    Positive,
    Negative,
}

impl Winding {
    /// The signed sweep of a full turn in this orientation, in degrees.
    #[inline]
    pub fn full_turn_degrees(self) -> f32 {
        match self {
            Winding::Positive => 360.0,
            Winding::Negative => -360.0,
        }
    }
}
