//! SVG path data output.

use std::fmt::{self, Write};

use crate::builder::PathSink;
use crate::geom::Arc;
use crate::math::{Point, Rect};
use crate::path::{Path, Verb};

/// A `PathSink` that builds a `String` representation of the path
/// using the SVG syntax.
///
/// No effort is put into making the output compact. The arc contract of the sink
/// is honored by recording into a [Path](../path/struct.Path.html) first.
#[derive(Clone, Debug, Default)]
pub struct PathSerializer {
    path: Path,
}

impl PathSerializer {
    pub fn new() -> Self {
        PathSerializer { path: Path::new() }
    }

    /// The SVG path data received so far.
    pub fn build(self) -> String {
        self.path.to_svg_path_data()
    }
}

impl PathSink for PathSerializer {
    fn reset(&mut self) {
        self.path.reset();
    }

    fn move_to(&mut self, to: Point) {
        self.path.move_to(to);
    }

    fn line_to(&mut self, to: Point) {
        self.path.line_to(to);
    }

    fn arc_to(&mut self, oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) {
        self.path
            .arc_to(oval, start_angle_degrees, sweep_angle_degrees);
    }

    fn close(&mut self) {
        self.path.close();
    }
}

impl Path {
    /// Serializes the path into the `d` attribute syntax of an SVG `<path>` element.
    ///
    /// Only absolute `M`, `L`, `A` and `Z` commands are written. Full ellipses are
    /// written as two half arcs.
    pub fn to_svg_path_data(&self) -> String {
        let mut out = String::new();
        // Writing into a String can't fail.
        self.write_svg_path_data(&mut out).ok();

        out
    }

    /// Same as `to_svg_path_data`, writing into any `fmt::Write` output.
    pub fn write_svg_path_data<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        for (i, verb) in self.verbs().iter().enumerate() {
            if i > 0 {
                out.write_char(' ')?;
            }

            match *verb {
                Verb::MoveTo(to) => write!(out, "M {} {}", to.x, to.y)?,
                Verb::LineTo(to) => write!(out, "L {} {}", to.x, to.y)?,
                Verb::Arc(arc) if arc.is_full_ellipse() => {
                    let (first, second) = arc.split(0.5);
                    write_arc(out, &first)?;
                    out.write_char(' ')?;
                    write_arc(out, &second)?;
                }
                Verb::Arc(arc) => write_arc(out, &arc)?,
                Verb::Close => out.write_char('Z')?,
            }
        }

        Ok(())
    }
}

fn write_arc<W: fmt::Write>(out: &mut W, arc: &Arc) -> fmt::Result {
    let svg = arc.to_svg_arc();
    write!(
        out,
        "A {} {} {} {} {} {} {}",
        svg.radii.x,
        svg.radii.y,
        svg.x_rotation.to_degrees(),
        if svg.flags.large_arc { 1u32 } else { 0 },
        if svg.flags.sweep { 1u32 } else { 0 },
        svg.to.x,
        svg.to.y,
    )
}
