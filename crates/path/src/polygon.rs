//! Regular polygon outlines.
//!
//! A regular polygon is emitted in one of three ways:
//!
//! - If the corner radius does not fit in the polygon's inscribed circle, the
//!   outline falls back to that circle.
//! - If the corner radius is (almost) zero, the outline is a sequence of line
//!   segments between the vertices.
//! - Otherwise each corner is replaced with an arc and the sink's arc contract
//!   inserts the straight edges between consecutive arcs.
//!
//! All three shapes are computed around the origin and emitted through a
//! [Translated](../builder/struct.Translated.html) sink, which moves them to the
//! polygon's center.

use crate::builder::{PathSink, Translated};
use crate::geom::vertices::corner_angles;
use crate::geom::{PolygonError, RegularPolygon};
use crate::math::{circle_oval, point};
use crate::{Path, Winding};

/// The construction a polygon resolves to.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PolygonKind {
    /// The corner radius exceeds the inscribed circle, which is emitted instead.
    Circle { radius: f32 },
    /// Straight edges only.
    Sharp,
    /// Straight edges joined by an arc at each corner.
    Rounded,
}

/// Parameters for the polygon outline builder.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PolygonOptions {
    /// Corner radii below this threshold produce sharp corners.
    ///
    /// Default value: `PolygonOptions::DEFAULT_CORNER_EPSILON`.
    pub corner_epsilon: f32,

    /// Orientation of the circle emitted when the corner radius is too large.
    ///
    /// Default value: `PolygonOptions::DEFAULT_CIRCLE_WINDING`, which is clockwise
    /// on a y-down surface.
    pub circle_winding: Winding,
}

impl PolygonOptions {
    /// Default threshold under which corners are not rounded.
    pub const DEFAULT_CORNER_EPSILON: f32 = 0.01;
    /// Default orientation of the fallback circle.
    pub const DEFAULT_CIRCLE_WINDING: Winding = Winding::Positive;

    pub const DEFAULT: Self = PolygonOptions {
        corner_epsilon: Self::DEFAULT_CORNER_EPSILON,
        circle_winding: Self::DEFAULT_CIRCLE_WINDING,
    };

    #[inline]
    pub fn with_corner_epsilon(mut self, epsilon: f32) -> Self {
        self.corner_epsilon = epsilon;
        self
    }

    #[inline]
    pub fn with_circle_winding(mut self, winding: Winding) -> Self {
        self.circle_winding = winding;
        self
    }
}

impl Default for PolygonOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decides which construction applies to a polygon, without emitting anything.
pub fn polygon_kind(polygon: &RegularPolygon, options: &PolygonOptions) -> PolygonKind {
    let in_radius = polygon.in_radius();

    if in_radius < polygon.corner_radius {
        PolygonKind::Circle { radius: in_radius }
    } else if polygon.corner_radius.abs() < options.corner_epsilon {
        PolygonKind::Sharp
    } else {
        PolygonKind::Rounded
    }
}

/// Resets the sink and fills it with the outline of a regular polygon.
///
/// Uses `PolygonOptions::DEFAULT`.
pub fn construct_polygon_path<S: PathSink>(
    sink: &mut S,
    polygon: &RegularPolygon,
) -> Result<PolygonKind, PolygonError> {
    construct_polygon_path_with_options(sink, polygon, &PolygonOptions::DEFAULT)
}

/// Resets the sink and fills it with the outline of a regular polygon.
///
/// The polygon is validated first: on error the sink is left untouched. On
/// success the sink contains a single closed sub-path.
pub fn construct_polygon_path_with_options<S: PathSink>(
    sink: &mut S,
    polygon: &RegularPolygon,
    options: &PolygonOptions,
) -> Result<PolygonKind, PolygonError> {
    polygon.validate()?;

    sink.reset();

    let kind = polygon_kind(polygon, options);
    let mut sink = Translated::new(sink, polygon.center.to_vector());

    match kind {
        PolygonKind::Circle { radius } => {
            sink.add_circle(point(0.0, 0.0), radius, options.circle_winding);
        }
        PolygonKind::Sharp => add_sharp_polygon(&mut sink, polygon),
        PolygonKind::Rounded => add_rounded_polygon(&mut sink, polygon),
    }

    Ok(kind)
}

fn add_sharp_polygon<S: PathSink>(sink: &mut S, polygon: &RegularPolygon) {
    let radius = polygon.outer_radius;
    for (index, angle) in corner_angles(polygon.side_count).enumerate() {
        let (sin, cos) = angle.radians.sin_cos();
        let corner = point(radius * cos, radius * sin);

        if index == 0 {
            sink.move_to(corner);
        } else {
            sink.line_to(corner);
        }
    }

    sink.close();
}

fn add_rounded_polygon<S: PathSink>(sink: &mut S, polygon: &RegularPolygon) {
    let side_count = polygon.side_count as f64;
    let corner_radius = polygon.corner_radius;

    let half_interior_corner_angle = 90.0 - 180.0 / side_count;
    let half_corner_arc_sweep_angle = (90.0 - half_interior_corner_angle) as f32;
    let distance_to_corner_arc_center = (polygon.outer_radius as f64
        - corner_radius as f64 / half_interior_corner_angle.to_radians().sin())
        as f32;

    for angle in corner_angles(polygon.side_count) {
        let (sin, cos) = angle.radians.sin_cos();
        let arc_center = point(
            distance_to_corner_arc_center * cos,
            distance_to_corner_arc_center * sin,
        );

        // Consecutive corners are connected by the straight edge the sink inserts
        // when an arc does not start at the current position.
        sink.arc_to(
            &circle_oval(arc_center, corner_radius),
            angle.to_degrees() - half_corner_arc_sweep_angle,
            2.0 * half_corner_arc_sweep_angle,
        );
    }

    // Draws the last straight edge.
    sink.close();
}

impl Path {
    /// Builds a new path containing the outline of a regular polygon.
    pub fn polygon(polygon: &RegularPolygon) -> Result<Path, PolygonError> {
        // The capacity depends on the side count, which must be checked first.
        polygon.validate()?;

        let mut path = Path::with_capacity(polygon.side_count as usize * 2 + 2);
        construct_polygon_path(&mut path, polygon)?;

        Ok(path)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geom::euclid::approxeq::ApproxEq;
    use crate::geom::vertices::regular_vertices;
    use crate::math::{vector, Point};
    use crate::{PathEvent, Verb};

    fn eps() -> Point {
        point(1e-3, 1e-3)
    }

    fn polygon(side_count: u32, outer_radius: f32, corner_radius: f32) -> RegularPolygon {
        RegularPolygon::new(side_count, point(0.0, 0.0), outer_radius, corner_radius).unwrap()
    }

    fn begin_and_lines(path: &Path) -> Vec<Point> {
        path.iter()
            .filter_map(|event| match event {
                PathEvent::Begin { at } => Some(at),
                PathEvent::Line { to, .. } => Some(to),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn triangle() {
        let path = Path::polygon(&polygon(3, 100.0, 0.0)).unwrap();

        let points = begin_and_lines(&path);
        let expected = [
            point(100.0, 0.0),
            point(-50.0, 86.60254),
            point(-50.0, -86.60254),
        ];
        assert_eq!(points.len(), 3);
        for (p, e) in points.iter().zip(&expected) {
            assert!(p.approx_eq_eps(e, &eps()), "{:?} != {:?}", p, e);
        }
        assert!(path.is_closed());
        assert_eq!(path.num_contours(), 1);
    }

    #[test]
    fn hexagon_falls_back_to_circle() {
        let mut path = Path::new();
        let kind = construct_polygon_path(&mut path, &polygon(6, 50.0, 60.0)).unwrap();

        let radius = match kind {
            PolygonKind::Circle { radius } => radius,
            kind => panic!("unexpected kind {:?}", kind),
        };
        assert!((radius - 43.30127).abs() < 1e-3);

        match path.verbs() {
            [Verb::MoveTo(at), Verb::Arc(arc), Verb::Close] => {
                assert!(at.approx_eq_eps(&point(radius, 0.0), &eps()));
                assert_eq!(arc.center, point(0.0, 0.0));
                assert_eq!(arc.radii, vector(radius, radius));
                assert!(arc.is_full_ellipse());
                // Clockwise on a y-down surface.
                assert!(arc.sweep_angle.radians > 0.0);
            }
            verbs => panic!("unexpected verbs {:?}", verbs),
        }
    }

    #[test]
    fn circle_does_not_depend_on_corner_radius() {
        let reference = Path::polygon(&polygon(5, 20.0, 19.0)).unwrap();
        for &corner_radius in &[20.0, 100.0, 1e6] {
            let path = Path::polygon(&polygon(5, 20.0, corner_radius)).unwrap();
            assert_eq!(path, reference);
        }
    }

    #[test]
    fn rounded_square() {
        let path = Path::polygon(&polygon(4, 10.0, 2.0)).unwrap();

        let arcs: Vec<_> = path
            .verbs()
            .iter()
            .filter_map(|verb| match verb {
                Verb::Arc(arc) => Some(*arc),
                _ => None,
            })
            .collect();
        assert_eq!(arcs.len(), 4);

        // The arc centers sit on the diagonals, pulled in by r / sin(45°).
        let distance = 10.0 - 2.0 * 2f32.sqrt();
        for (arc, expected_angle) in arcs.iter().zip(&[0.0f32, 90.0, 180.0, 270.0]) {
            let (sin, cos) = expected_angle.to_radians().sin_cos();
            assert!(arc
                .center
                .approx_eq_eps(&point(distance * cos, distance * sin), &eps()));
            assert_eq!(arc.radii, vector(2.0, 2.0));
            assert!((arc.sweep_angle.to_degrees() - 90.0).abs() < 1e-3);
            assert!((arc.start_angle.to_degrees() - (expected_angle - 45.0)).abs() < 1e-3);
        }

        // Arcs are connected by straight edges and the last edge is the close.
        let events: Vec<PathEvent> = path.iter().collect();
        let lines = events
            .iter()
            .filter(|event| match event {
                PathEvent::Line { .. } => true,
                _ => false,
            })
            .count();
        assert_eq!(lines, 3);
        match events.last() {
            Some(PathEvent::End { last, first, close }) => {
                assert!(*close);
                assert!(last.approx_eq_eps(&arcs[3].to(), &eps()));
                assert!(first.approx_eq_eps(&arcs[0].from(), &eps()));
            }
            event => panic!("unexpected event {:?}", event),
        }

        // Each edge is tangent to the arcs: it lies on the side of the square.
        let half_side = 10.0 * std::f32::consts::FRAC_1_SQRT_2;
        for event in &events {
            if let PathEvent::Line { from, to } = event {
                let mid = from.lerp(*to, 0.5);
                assert!((mid.to_vector().length() - half_side).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn tiny_rounding_matches_sharp_vertices() {
        for side_count in 3..12 {
            let sharp = Path::polygon(&polygon(side_count, 30.0, 0.0)).unwrap();
            let sharp_points = begin_and_lines(&sharp);

            let mut rounded = Path::new();
            let kind = construct_polygon_path_with_options(
                &mut rounded,
                &polygon(side_count, 30.0, 1e-4),
                &PolygonOptions::DEFAULT.with_corner_epsilon(0.0),
            )
            .unwrap();
            assert_eq!(kind, PolygonKind::Rounded);

            let corners: Vec<Point> = rounded
                .verbs()
                .iter()
                .filter_map(|verb| match verb {
                    Verb::Arc(arc) => Some(arc.sample(0.5)),
                    _ => None,
                })
                .collect();

            assert_eq!(corners.len(), sharp_points.len());
            for (a, b) in corners.iter().zip(&sharp_points) {
                assert!(a.approx_eq_eps(b, &eps()), "{:?} != {:?}", a, b);
            }
        }
    }

    #[test]
    fn sharp_vertices_match_vertex_geometry() {
        let path = Path::polygon(&polygon(7, 40.0, 0.0)).unwrap();
        let vertices = regular_vertices(7, 40.0, 0.0).unwrap();
        let points = begin_and_lines(&path);

        for (a, b) in points.iter().zip(&vertices) {
            assert!(a.approx_eq_eps(b, &eps()));
        }
    }

    #[test]
    fn kinds() {
        let options = PolygonOptions::DEFAULT;
        assert_eq!(polygon_kind(&polygon(4, 10.0, 0.0), &options), PolygonKind::Sharp);
        assert_eq!(polygon_kind(&polygon(4, 10.0, 0.009), &options), PolygonKind::Sharp);
        assert_eq!(polygon_kind(&polygon(4, 10.0, 0.01), &options), PolygonKind::Rounded);
        assert_eq!(polygon_kind(&polygon(4, 10.0, 7.0), &options), PolygonKind::Rounded);
        match polygon_kind(&polygon(4, 10.0, 7.1), &options) {
            PolygonKind::Circle { radius } => assert!((radius - 7.071068).abs() < 1e-4),
            kind => panic!("unexpected kind {:?}", kind),
        }
    }

    #[test]
    fn translation_applies_to_every_construction() {
        let offset = vector(120.0, -35.0);
        for &corner_radius in &[0.0, 3.0, 1000.0] {
            let at_origin = Path::polygon(&polygon(5, 25.0, corner_radius)).unwrap();
            let moved = Path::polygon(
                &RegularPolygon::new(5, point(120.0, -35.0), 25.0, corner_radius).unwrap(),
            )
            .unwrap();

            for (a, b) in at_origin.iter().zip(moved.iter()) {
                let a = a.translated(offset);
                assert!(a.from().approx_eq_eps(&b.from(), &eps()));
                assert!(a.to().approx_eq_eps(&b.to(), &eps()));
            }
            assert_eq!(at_origin.verbs().len(), moved.verbs().len());
        }
    }

    #[test]
    fn invalid_polygon_leaves_sink_untouched() {
        let mut path = Path::new();
        path.add_polygon(&[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);
        let before = path.clone();

        let invalid = RegularPolygon {
            side_count: 2,
            center: point(0.0, 0.0),
            outer_radius: 10.0,
            corner_radius: 0.0,
        };
        assert_eq!(
            construct_polygon_path(&mut path, &invalid),
            Err(PolygonError::TooFewSides { side_count: 2 })
        );
        assert_eq!(path, before);

        let invalid = RegularPolygon {
            outer_radius: -1.0,
            side_count: 5,
            ..invalid
        };
        assert!(construct_polygon_path(&mut path, &invalid).is_err());
        assert_eq!(path, before);
    }

    #[test]
    fn invalid_polygon_is_rejected_before_allocating() {
        let invalid = RegularPolygon {
            side_count: u32::MAX,
            center: point(0.0, 0.0),
            outer_radius: -1.0,
            corner_radius: 0.0,
        };

        assert_eq!(
            Path::polygon(&invalid),
            Err(PolygonError::InvalidOuterRadius { radius: -1.0 })
        );
    }

    #[test]
    fn construction_resets_and_is_idempotent() {
        let hexagon = polygon(6, 50.0, 5.0);
        let mut path = Path::new();
        path.add_circle(point(100.0, 100.0), 3.0, Winding::Negative);

        construct_polygon_path(&mut path, &hexagon).unwrap();
        let first = path.clone();
        construct_polygon_path(&mut path, &hexagon).unwrap();

        assert_eq!(path, first);
        assert_eq!(path.num_contours(), 1);
        assert!(path.is_closed());
    }

    #[test]
    fn circle_winding_option() {
        let mut path = Path::new();
        construct_polygon_path_with_options(
            &mut path,
            &polygon(3, 10.0, 9.0),
            &PolygonOptions::DEFAULT.with_circle_winding(Winding::Negative),
        )
        .unwrap();

        match path.verbs()[1] {
            Verb::Arc(arc) => assert!(arc.sweep_angle.radians < 0.0),
            verb => panic!("unexpected verb {:?}", verb),
        }
    }
}
