//! Path building interface.
//!
//! ## `PathSink`
//!
//! The polygon outline builder does not own the path it produces. It appends
//! primitives to any type implementing [PathSink](trait.PathSink.html): a recorded
//! [Path](../path/struct.Path.html), an SVG [serializer](../svg/struct.PathSerializer.html),
//! or the caller's own rendering backend.
//!
//! Implementations must honor the arc contract of `arc_to`: when the path is empty
//! the arc starts a new sub-path at its first point, and when the current position
//! differs from the arc's first point a straight line is inserted to connect them.
//! Regular polygons with rounded corners are built by appending one arc per corner
//! and letting the sink fill in the straight edges.
//!
//! ## Examples
//!
//! ```
//! use polyshape_path::{Path, math::{point, rect}, traits::PathSink};
//!
//! let mut path = Path::new();
//!
//! // The first arc starts the sub-path, the second one is connected with a line.
//! path.arc_to(&rect(-1.0, -1.0, 2.0, 2.0), 0.0, 90.0);
//! path.arc_to(&rect(-11.0, -1.0, 2.0, 2.0), 90.0, 90.0);
//! path.close();
//!
//! assert_eq!(path.num_contours(), 1);
//! assert!(path.is_closed());
//! ```

use crate::math::*;
use crate::Winding;

/// The path building interface consumed by the polygon outline builder.
///
/// Positions are absolute. Angles of `arc_to` are in degrees, measured from the
/// positive x axis towards the positive y axis.
pub trait PathSink {
    /// Removes everything from the sink.
    fn reset(&mut self);

    /// Starts a new sub-path at a given position.
    fn move_to(&mut self, to: Point);

    /// Adds a line segment from the current position.
    ///
    /// If no sub-path is in progress, one is started first.
    fn line_to(&mut self, to: Point);

    /// Appends an arc of the ellipse inscribed in `oval`.
    ///
    /// If the path is empty, the arc's start becomes the start of a new sub-path.
    /// If the current position differs from the arc's start, a line segment
    /// connects them.
    fn arc_to(&mut self, oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32);

    /// Ends the current sub-path by connecting it back to its first position.
    fn close(&mut self);

    /// Adds a sub-path containing a circle starting on the positive x axis.
    fn add_circle(&mut self, center: Point, radius: f32, winding: Winding) {
        self.move_to(point(center.x + radius, center.y));
        self.arc_to(
            &circle_oval(center, radius),
            0.0,
            winding.full_turn_degrees(),
        );
        self.close();
    }

    /// Adds a closed sub-path from a sequence of points.
    fn add_polygon(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }

        self.move_to(points[0]);
        for p in &points[1..] {
            self.line_to(*p);
        }
        self.close();
    }

    /// Returns a sink that offsets all positions by a vector.
    fn with_offset(self, by: Vector) -> Translated<Self>
    where
        Self: Sized,
    {
        Translated::new(self, by)
    }
}

impl<'l, S: PathSink + ?Sized> PathSink for &'l mut S {
    #[inline]
    fn reset(&mut self) {
        (**self).reset();
    }

    #[inline]
    fn move_to(&mut self, to: Point) {
        (**self).move_to(to);
    }

    #[inline]
    fn line_to(&mut self, to: Point) {
        (**self).line_to(to);
    }

    #[inline]
    fn arc_to(&mut self, oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) {
        (**self).arc_to(oval, start_angle_degrees, sweep_angle_degrees);
    }

    #[inline]
    fn close(&mut self) {
        (**self).close();
    }
}

/// A sink adapter that offsets every position before forwarding it.
pub struct Translated<Sink> {
    sink: Sink,
    offset: Vector,
}

impl<Sink: PathSink> Translated<Sink> {
    #[inline]
    pub fn new(sink: Sink, offset: Vector) -> Self {
        Translated { sink, offset }
    }

    #[inline]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    #[inline]
    pub fn into_inner(self) -> Sink {
        self.sink
    }
}

impl<Sink: PathSink> PathSink for Translated<Sink> {
    #[inline]
    fn reset(&mut self) {
        self.sink.reset();
    }

    #[inline]
    fn move_to(&mut self, to: Point) {
        self.sink.move_to(to + self.offset);
    }

    #[inline]
    fn line_to(&mut self, to: Point) {
        self.sink.line_to(to + self.offset);
    }

    #[inline]
    fn arc_to(&mut self, oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) {
        self.sink.arc_to(
            &oval.translate(self.offset),
            start_angle_degrees,
            sweep_angle_degrees,
        );
    }

    #[inline]
    fn close(&mut self) {
        self.sink.close();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{Path, PathEvent};

    #[test]
    fn translated_sink() {
        let mut path = Path::new();
        {
            let mut sink = (&mut path).with_offset(vector(10.0, 20.0));
            assert_eq!(sink.offset(), vector(10.0, 20.0));
            sink.add_polygon(&[point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0)]);
        }

        let events: Vec<PathEvent> = path.iter().collect();
        assert_eq!(events[0], PathEvent::Begin { at: point(10.0, 20.0) });
        assert_eq!(
            events[2],
            PathEvent::Line {
                from: point(11.0, 20.0),
                to: point(11.0, 21.0),
            }
        );
        assert_eq!(
            events[3],
            PathEvent::End {
                last: point(11.0, 21.0),
                first: point(10.0, 20.0),
                close: true,
            }
        );
    }

    #[test]
    fn translated_arc() {
        let mut sink = Path::new().with_offset(vector(5.0, 5.0));
        sink.add_circle(point(0.0, 0.0), 2.0, Winding::Positive);
        let path = sink.into_inner();

        let arc = path
            .iter()
            .find_map(|event| match event {
                PathEvent::Arc { arc, .. } => Some(arc),
                _ => None,
            })
            .unwrap();
        assert_eq!(arc.center, point(5.0, 5.0));
        assert_eq!(arc.radii, vector(2.0, 2.0));
    }

    #[test]
    fn empty_polygon() {
        let mut path = Path::new();
        path.add_polygon(&[]);
        assert!(path.is_empty());
    }
}
