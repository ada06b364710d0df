//! Elliptic arc related maths and tools.

use std::f32::consts::PI;

use crate::math::{point, vector, Angle, Box2D, Point, Rect, Rotation, Vector};
use crate::LineSegment;

const TWO_PI: f32 = 2.0 * PI;

// Upper bound on the number of segments produced when flattening one arc.
const MAX_FLATTENING_SEGMENTS: f32 = 1024.0;

/// An elliptic arc curve segment.
///
/// Angles are measured from the positive x axis towards the positive y axis.
/// A positive sweep therefore runs clockwise on a y-down surface.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc {
    pub center: Point,
    pub radii: Vector,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
    pub x_rotation: Angle,
}

/// An elliptic arc curve segment using the SVG's end-point notation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

/// Flag parameters for arcs as described by the SVG specification.
///
/// For most situations using the SVG arc notation, there are four different arcs
/// (two different ellipses, each with two different arc sweeps) that satisfy the
/// arc parameters. The `large_arc` and `sweep` flags indicate which one of the
/// four arcs are drawn.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcFlags {
    /// Of the four candidate arc sweeps, two will represent an arc sweep of greater
    /// than or equal to 180 degrees (the "large-arc"), and two will represent an arc
    /// sweep of less than or equal to 180 degrees (the "small arc"). If `large_arc`
    /// is `true`, then one of the two larger arc sweeps will be chosen; otherwise one
    /// of the smaller arc sweeps will be chosen.
    pub large_arc: bool,
    /// If `sweep` is `true`, then the arc will be drawn in a "positive-angle" direction.
    pub sweep: bool,
}

impl Arc {
    /// A circular arc.
    pub fn circle(center: Point, radius: f32, start_angle: Angle, sweep_angle: Angle) -> Self {
        Arc {
            center,
            radii: vector(radius, radius),
            start_angle,
            sweep_angle,
            x_rotation: Angle::zero(),
        }
    }

    /// The arc of the ellipse inscribed in `oval`, with angles expressed in degrees.
    pub fn from_oval(oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) -> Self {
        Arc {
            center: oval.center(),
            radii: vector(oval.size.width * 0.5, oval.size.height * 0.5),
            start_angle: Angle::degrees(start_angle_degrees),
            sweep_angle: Angle::degrees(sweep_angle_degrees),
            x_rotation: Angle::zero(),
        }
    }

    /// Sample the curve at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.point_at_angle(self.get_angle(t))
    }

    /// Sample the curve's angle at t (expecting t between 0 and 1).
    #[inline]
    pub fn get_angle(&self, t: f32) -> Angle {
        self.start_angle + self.sweep_angle * t
    }

    #[inline]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    #[inline]
    pub fn from(&self) -> Point {
        self.sample(0.0)
    }

    #[inline]
    pub fn to(&self) -> Point {
        self.sample(1.0)
    }

    /// Whether the arc goes all the way around its ellipse.
    #[inline]
    pub fn is_full_ellipse(&self) -> bool {
        self.sweep_angle.radians.abs() >= TWO_PI - 1e-4
    }

    /// Split this curve into two sub-curves.
    pub fn split(&self, t: f32) -> (Arc, Arc) {
        let split_angle = self.sweep_angle * t;
        (
            Arc {
                sweep_angle: split_angle,
                ..*self
            },
            Arc {
                start_angle: self.start_angle + split_angle,
                sweep_angle: self.sweep_angle - split_angle,
                ..*self
            },
        )
    }

    #[inline]
    pub fn translate(&self, by: Vector) -> Self {
        Arc {
            center: self.center + by,
            ..*self
        }
    }

    /// Converts to the end-point notation used by SVG's `A` command.
    ///
    /// A full ellipse can't be expressed with a single SVG arc since its end points
    /// coincide. Split it first.
    pub fn to_svg_arc(&self) -> SvgArc {
        let sweep = self.sweep_angle.radians;
        SvgArc {
            from: self.from(),
            to: self.to(),
            radii: self.radii,
            x_rotation: self.x_rotation,
            flags: ArcFlags {
                large_arc: sweep.abs() > PI,
                sweep: sweep > 0.0,
            },
        }
    }

    /// The angle between two consecutive points of the flattened approximation.
    ///
    /// The approximation treats the arc as circular, using the larger radius.
    pub fn flattening_step(&self, tolerance: f32) -> f32 {
        let r = self.radii.x.abs().max(self.radii.y.abs());
        if r <= tolerance {
            return PI;
        }

        2.0 * (1.0 - tolerance / r).acos()
    }

    /// Approximates the curve with line segments, invoking a callback for each of them.
    pub fn for_each_flattened<F: FnMut(&LineSegment)>(&self, tolerance: f32, callback: &mut F) {
        let sweep = self.sweep_angle.radians.abs();
        let step = self.flattening_step(tolerance);
        let num_segments = if step.is_finite() && step > 0.0 {
            (sweep / step).ceil().max(1.0).min(MAX_FLATTENING_SEGMENTS)
        } else {
            MAX_FLATTENING_SEGMENTS
        } as u32;

        let mut from = self.from();
        for i in 1..=num_segments {
            let to = if i == num_segments {
                self.to()
            } else {
                self.sample(i as f32 / num_segments as f32)
            };
            callback(&LineSegment { from, to });
            from = to;
        }
    }

    /// Returns a conservative rectangle that contains the curve.
    pub fn fast_bounding_box(&self) -> Box2D {
        let r = self.radii.x.abs().max(self.radii.y.abs());
        let r = vector(r, r);
        Box2D {
            min: self.center - r,
            max: self.center + r,
        }
    }

    /// Returns the smallest rectangle that contains the curve.
    pub fn bounding_box(&self) -> Box2D {
        let from = self.from();
        let to = self.to();
        let mut min = from.min(to);
        let mut max = from.max(to);

        // Angles at which the ellipse reaches its horizontal and vertical extrema.
        let (sin_phi, cos_phi) = self.x_rotation.radians.sin_cos();
        let x_extremum = (-self.radii.y * sin_phi).atan2(self.radii.x * cos_phi);
        let y_extremum = (self.radii.y * cos_phi).atan2(self.radii.x * sin_phi);

        for &extremum in &[x_extremum, y_extremum] {
            for &angle in &[extremum, extremum + PI] {
                if self.contains_angle(angle) {
                    let p = self.point_at_angle(Angle::radians(angle));
                    min = min.min(p);
                    max = max.max(p);
                }
            }
        }

        Box2D { min, max }
    }

    fn contains_angle(&self, angle: f32) -> bool {
        let sweep = self.sweep_angle.radians;
        if sweep.abs() >= TWO_PI {
            return true;
        }

        let delta = ((angle - self.start_angle.radians) * sweep.signum()).rem_euclid(TWO_PI);

        delta <= sweep.abs()
    }

    #[inline]
    fn point_at_angle(&self, angle: Angle) -> Point {
        self.center + sample_ellipse(self.radii, self.x_rotation, angle).to_vector()
    }
}

fn sample_ellipse(radii: Vector, x_rotation: Angle, angle: Angle) -> Point {
    let (sin, cos) = angle.radians.sin_cos();
    Rotation::new(x_rotation).transform_point(point(radii.x * cos, radii.y * sin))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::euclid::approxeq::ApproxEq;
    use crate::math::circle_oval;

    fn approx(a: Point, b: Point) -> bool {
        a.approx_eq_eps(&b, &point(1e-4, 1e-4))
    }

    #[test]
    fn from_oval() {
        let arc = Arc::from_oval(&circle_oval(point(5.0, 5.0), 10.0), 0.0, 90.0);

        assert_eq!(arc.center, point(5.0, 5.0));
        assert_eq!(arc.radii, vector(10.0, 10.0));
        assert!(approx(arc.from(), point(15.0, 5.0)));
        assert!(approx(arc.to(), point(5.0, 15.0)));
        assert!(approx(arc.sample(0.5), point(5.0 + 50f32.sqrt(), 5.0 + 50f32.sqrt())));
    }

    #[test]
    fn negative_sweep() {
        let arc = Arc::circle(point(0.0, 0.0), 1.0, Angle::zero(), Angle::degrees(-90.0));
        assert!(approx(arc.to(), point(0.0, -1.0)));
        assert!(!arc.to_svg_arc().flags.sweep);
        assert!(!arc.to_svg_arc().flags.large_arc);
    }

    #[test]
    fn svg_flags() {
        let arc = Arc::circle(point(0.0, 0.0), 1.0, Angle::zero(), Angle::degrees(270.0));
        let svg = arc.to_svg_arc();
        assert!(svg.flags.sweep);
        assert!(svg.flags.large_arc);
        assert!(approx(svg.from, point(1.0, 0.0)));
        assert!(approx(svg.to, point(0.0, -1.0)));
    }

    #[test]
    fn split_full_circle() {
        let arc = Arc::circle(point(0.0, 0.0), 2.0, Angle::zero(), Angle::degrees(360.0));
        assert!(arc.is_full_ellipse());

        let (a, b) = arc.split(0.5);
        assert!(!a.is_full_ellipse());
        assert!(approx(a.to(), point(-2.0, 0.0)));
        assert!(approx(b.from(), point(-2.0, 0.0)));
        assert!(approx(b.to(), point(2.0, 0.0)));
    }

    #[test]
    fn bounding_boxes() {
        let quarter = Arc::circle(point(0.0, 0.0), 10.0, Angle::zero(), Angle::degrees(90.0));
        let bb = quarter.bounding_box();
        assert!(approx(bb.min, point(0.0, 0.0)));
        assert!(approx(bb.max, point(10.0, 10.0)));

        // Crosses the top of the circle.
        let top = Arc::circle(point(0.0, 0.0), 10.0, Angle::degrees(45.0), Angle::degrees(90.0));
        let bb = top.bounding_box();
        assert!((bb.max.y - 10.0).abs() < 1e-4);
        assert!((bb.min.x + 50f32.sqrt()).abs() < 1e-4);

        let full = Arc::circle(point(1.0, 1.0), 10.0, Angle::zero(), Angle::degrees(-360.0));
        let bb = full.bounding_box();
        assert!(approx(bb.min, point(-9.0, -9.0)));
        assert!(approx(bb.max, point(11.0, 11.0)));
        assert_eq!(full.fast_bounding_box(), bb_from(point(-9.0, -9.0), point(11.0, 11.0)));
    }

    fn bb_from(min: Point, max: Point) -> Box2D {
        Box2D { min, max }
    }

    #[test]
    fn flattening_stays_within_tolerance() {
        let arc = Arc::circle(point(3.0, -2.0), 50.0, Angle::degrees(10.0), Angle::degrees(200.0));
        let tolerance = 0.1;

        let mut count = 0;
        let mut previous = arc.from();
        arc.for_each_flattened(tolerance, &mut |segment| {
            assert_eq!(segment.from, previous);
            let mid = segment.sample(0.5);
            let distance = (mid - arc.center).length();
            assert!(50.0 - distance <= tolerance + 1e-3);
            previous = segment.to;
            count += 1;
        });

        assert_eq!(previous, arc.to());
        assert!(count > 1);
    }

    #[test]
    fn flattening_degenerate_input() {
        let arc = Arc::circle(point(0.0, 0.0), 0.0, Angle::zero(), Angle::degrees(90.0));
        let mut count = 0;
        arc.for_each_flattened(0.1, &mut |_| count += 1);
        assert_eq!(count, 1);

        let arc = Arc::circle(point(0.0, 0.0), 1.0, Angle::zero(), Angle::degrees(90.0));
        let mut count = 0;
        arc.for_each_flattened(f32::NAN, &mut |_| count += 1);
        assert_eq!(count, MAX_FLATTENING_SEGMENTS as u32);
    }
}
