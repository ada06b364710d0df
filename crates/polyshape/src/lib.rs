#![deny(bare_trait_objects)]

//! Regular polygon outlines in Rust.
//!
//! # Crates
//!
//! This meta-crate (`polyshape`) reexports the following sub-crates for convenience:
//!
//! * **polyshape_geom** - Vertex math for regular and radar polygons, arcs.
//! * **polyshape_path** - Path sinks, the polygon outline builder, SVG output.
//! * **polyshape_algorithms** - Hit testing and bounding boxes.
//!
//! Each `polyshape_<name>` crate is reexported as a `<name>` module in `polyshape`.
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Building the outline of a rounded hexagon
//!
//! ```
//! use polyshape::math::point;
//! use polyshape::path::{construct_polygon_path, Path, PolygonKind, RegularPolygon};
//!
//! let hexagon = RegularPolygon::new(6, point(100.0, 100.0), 50.0, 8.0).unwrap();
//!
//! let mut path = Path::new();
//! let kind = construct_polygon_path(&mut path, &hexagon).unwrap();
//!
//! assert_eq!(kind, PolygonKind::Rounded);
//! println!("<path d=\"{}\"/>", path.to_svg_path_data());
//! ```
//!
//! ## Radar vertices
//!
//! ```
//! use polyshape::geom::vertices::weighted_vertices;
//!
//! let vertices = weighted_vertices(&[1.0, 0.5, 0.25, 0.75, 1.0], 80.0, 5).unwrap();
//! assert_eq!(vertices.len(), 5);
//! assert!((vertices[0].x - 80.0).abs() < 1e-4);
//!
//! // The number of values must match the number of sides.
//! assert!(weighted_vertices(&[1.0, 0.5], 80.0, 5).is_err());
//! ```
//!
//! ## Drawing
//!
//! The crate does not render anything. Backends implement
//! [DrawingSurface](draw/trait.DrawingSurface.html) and receive finished paths from
//! [draw_polygon](draw/fn.draw_polygon.html).

pub extern crate polyshape_algorithms;

pub use polyshape_algorithms as algorithms;
pub use algorithms::geom;
pub use algorithms::path;

pub use path::math;

pub mod draw;
