#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::excessive_precision)]

//! Regular polygon and arc math on top of euclid.
//!
//! This crate is reexported in [polyshape](../polyshape/index.html).
//!
//! # Overview.
//!
//! This crate implements the maths to work with:
//!
//! - the vertices of regular polygons, optionally pulled in by corner rounding,
//! - the vertices of "radar" shapes where each vertex has its own radius,
//! - circular and elliptic arcs,
//! - line segments.
//!
//! # Angles and coordinates
//!
//! Corner angles start on the positive x axis and grow with `i * 360° / side_count`.
//! Coordinates follow the mathematical convention: `y = r * sin(angle)`. On a y-down
//! surface this means vertices are laid out clockwise.
//!
//! ```
//! use polyshape_geom::vertices::regular_vertices;
//!
//! let square = regular_vertices(4, 10.0, 0.0).unwrap();
//! assert_eq!(square.len(), 4);
//! assert!((square[0].x - 10.0).abs() < 1e-5);
//! assert!((square[1].y - 10.0).abs() < 1e-5);
//! ```

// Reexport dependencies.
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod arc;
mod error;
mod line;
pub mod polygon;
pub mod vertices;

#[doc(inline)]
pub use crate::arc::{Arc, ArcFlags, SvgArc};
#[doc(inline)]
pub use crate::error::PolygonError;
#[doc(inline)]
pub use crate::line::LineSegment;
#[doc(inline)]
pub use crate::polygon::RegularPolygon;

pub mod math {
    //! f32 version of the euclid types used everywhere. The other polyshape
    //! crates reexport them.

    use crate::euclid;

    /// Alias for ```euclid::default::Point2D<f32>```.
    pub type Point = euclid::default::Point2D<f32>;

    /// Alias for ```euclid::default::Vector2D<f32>```.
    pub type Vector = euclid::default::Vector2D<f32>;

    /// Alias for ```euclid::default::Size2D<f32>```.
    pub type Size = euclid::default::Size2D<f32>;

    /// Alias for ```euclid::default::Rect<f32>```
    pub type Rect = euclid::default::Rect<f32>;

    /// Alias for ```euclid::default::Box2D<f32>```
    pub type Box2D = euclid::default::Box2D<f32>;

    /// Alias for ```euclid::default::Rotation2D<f32>```
    pub type Rotation = euclid::default::Rotation2D<f32>;

    /// An angle in radians (f32).
    pub type Angle = euclid::Angle<f32>;

    /// Shorthand for `Rect::new(Point::new(x, y), Size::new(w, h))`.
    #[inline]
    pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect {
            origin: point(x, y),
            size: size(w, h),
        }
    }

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(x, y)`.
    #[inline]
    pub fn size(w: f32, h: f32) -> Size {
        Size::new(w, h)
    }

    /// The square that circumscribes a circle.
    #[inline]
    pub fn circle_oval(center: Point, radius: f32) -> Rect {
        rect(
            center.x - radius,
            center.y - radius,
            radius * 2.0,
            radius * 2.0,
        )
    }
}
