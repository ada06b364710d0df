//! Bounding rectangle computation for paths.

use crate::math::{point, Box2D, Point};
use crate::path::PathEvent;

/// Computes a conservative axis-aligned rectangle that contains the path.
///
/// This bounding rectangle approximation is faster but less precise than
/// [`bounding_box`](fn.bounding_box.html): arcs contribute the box of their
/// whole circle.
pub fn fast_bounding_box<Iter, Evt>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = Evt>,
    Evt: FastBoundingBox,
{
    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);
    for e in path {
        e.min_max(&mut min, &mut max);
    }

    // Return an empty rectangle by default if there was no event in the path.
    if min == point(f32::MAX, f32::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

#[doc(hidden)]
pub trait FastBoundingBox {
    fn min_max(&self, min: &mut Point, max: &mut Point);
}

impl FastBoundingBox for PathEvent {
    fn min_max(&self, min: &mut Point, max: &mut Point) {
        match self {
            PathEvent::Begin { at } => {
                *min = Point::min(*min, *at);
                *max = Point::max(*max, *at);
            }
            PathEvent::Line { to, .. } => {
                *min = Point::min(*min, *to);
                *max = Point::max(*max, *to);
            }
            PathEvent::Arc { arc, .. } => {
                let r = arc.fast_bounding_box();
                *min = Point::min(*min, r.min);
                *max = Point::max(*max, r.max);
            }
            PathEvent::End { .. } => {}
        }
    }
}

/// Computes the smallest axis-aligned rectangle that contains the path.
pub fn bounding_box<Iter, Evt>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = Evt>,
    Evt: TightBoundingBox,
{
    let mut min = point(f32::MAX, f32::MAX);
    let mut max = point(f32::MIN, f32::MIN);

    for evt in path {
        evt.min_max(&mut min, &mut max);
    }

    // Return an empty rectangle by default if there was no event in the path.
    if min == point(f32::MAX, f32::MAX) {
        return Box2D::zero();
    }

    Box2D { min, max }
}

#[doc(hidden)]
pub trait TightBoundingBox {
    fn min_max(&self, min: &mut Point, max: &mut Point);
}

impl TightBoundingBox for PathEvent {
    fn min_max(&self, min: &mut Point, max: &mut Point) {
        match self {
            PathEvent::Begin { at } => {
                *min = Point::min(*min, *at);
                *max = Point::max(*max, *at);
            }
            PathEvent::Line { to, .. } => {
                *min = Point::min(*min, *to);
                *max = Point::max(*max, *to);
            }
            PathEvent::Arc { arc, .. } => {
                let r = arc.bounding_box();
                *min = Point::min(*min, r.min);
                *max = Point::max(*max, r.max);
            }
            PathEvent::End { .. } => {}
        }
    }
}

#[test]
fn simple_bounding_box() {
    use crate::math::circle_oval;
    use crate::path::traits::PathSink;
    use crate::path::Path;

    let mut path = Path::new();
    path.move_to(point(-10.0, -3.0));
    path.line_to(point(0.0, -12.0));
    path.line_to(point(5.0, 3.0));
    path.close();

    let expected = Box2D {
        min: point(-10.0, -12.0),
        max: point(5.0, 3.0),
    };
    assert_eq!(fast_bounding_box(&path), expected);
    assert_eq!(bounding_box(&path), expected);

    // A quarter of a circle.
    let mut path = Path::new();
    path.arc_to(&circle_oval(point(0.0, 0.0), 2.0), 0.0, 90.0);

    let fast = fast_bounding_box(path.iter());
    assert_eq!(fast.min, point(-2.0, -2.0));
    assert_eq!(fast.max, point(2.0, 2.0));

    let tight = bounding_box(path.iter());
    assert!(tight.min.x.abs() < 1e-5 && tight.min.y.abs() < 1e-5);
    assert!((tight.max.x - 2.0).abs() < 1e-5 && (tight.max.y - 2.0).abs() < 1e-5);

    assert_eq!(bounding_box(&Path::new()), Box2D::zero());
}

#[test]
fn polygon_bounding_box() {
    use crate::geom::RegularPolygon;
    use crate::path::Path;

    // Rounded corners pull the extent in from 10 to 10 - 2 * sqrt(2) + 2.
    let square = RegularPolygon::new(4, point(0.0, 0.0), 10.0, 2.0).unwrap();
    let path = Path::polygon(&square).unwrap();
    let extent = 10.0 - 2.0 * 2f32.sqrt() + 2.0;

    let tight = bounding_box(&path);
    assert!((tight.max.x - extent).abs() < 1e-3);
    assert!((tight.min.y + extent).abs() < 1e-3);

    // The fallback circle is centered on the polygon.
    let hexagon = RegularPolygon::new(6, point(10.0, 20.0), 50.0, 60.0).unwrap();
    let circle = bounding_box(&Path::polygon(&hexagon).unwrap());
    assert!((circle.min.x - (10.0 - 43.30127)).abs() < 1e-3);
    assert!((circle.max.y - (20.0 + 43.30127)).abs() < 1e-3);
}
