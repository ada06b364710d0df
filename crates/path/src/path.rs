//! The default path data structure.
//!

use crate::builder::PathSink;
use crate::geom::euclid::approxeq::ApproxEq;
use crate::geom::Arc;
use crate::math::*;
use crate::PathEvent;

use std::iter::IntoIterator;

// Two positions closer than this (on each axis) are treated as the same point when
// deciding whether an arc needs a connecting line.
const COINCIDENT_EPSILON: f32 = 1e-4;

/// A recorded path primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Verb {
    MoveTo(Point),
    LineTo(Point),
    Arc(Arc),
    Close,
}

/// A simple path data structure, recording what a [PathSink](../builder/trait.PathSink.html)
/// receives.
///
/// Every `LineTo` and `Arc` verb belongs to a sub-path started by a `MoveTo`. The
/// implicit commands required by the sink contract (starting a sub-path, connecting
/// an arc to the current position) are recorded as explicit verbs.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    verbs: Vec<Verb>,
    first: Point,
    current: Point,
    in_sub_path: bool,
}

impl Path {
    /// Creates an Empty `Path`.
    #[inline]
    pub fn new() -> Path {
        Path::default()
    }

    #[inline]
    pub fn with_capacity(verbs: usize) -> Path {
        Path {
            verbs: Vec::with_capacity(verbs),
            ..Path::default()
        }
    }

    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// The position the next primitive starts from, if any.
    #[inline]
    pub fn current_position(&self) -> Option<Point> {
        if self.is_empty() {
            return None;
        }

        Some(self.current)
    }

    /// The start of the first sub-path, if any.
    pub fn first_position(&self) -> Option<Point> {
        self.verbs.iter().find_map(|verb| match *verb {
            Verb::MoveTo(at) => Some(at),
            _ => None,
        })
    }

    /// Number of sub-paths.
    pub fn num_contours(&self) -> usize {
        self.verbs
            .iter()
            .filter(|verb| match verb {
                Verb::MoveTo(..) => true,
                _ => false,
            })
            .count()
    }

    /// Whether the path is non-empty and all of its sub-paths are closed.
    pub fn is_closed(&self) -> bool {
        if self.is_empty() {
            return false;
        }

        let mut open = false;
        for verb in &self.verbs {
            match verb {
                Verb::MoveTo(..) => {
                    if open {
                        return false;
                    }
                    open = true;
                }
                Verb::Close => {
                    open = false;
                }
                _ => {}
            }
        }

        !open
    }

    /// Iterates over the entire `Path`.
    pub fn iter(&self) -> Iter {
        Iter::new(&self.verbs)
    }

    /// Returns a copy of this path offset by a vector.
    pub fn translated(&self, by: Vector) -> Path {
        let verbs = self
            .verbs
            .iter()
            .map(|verb| match *verb {
                Verb::MoveTo(at) => Verb::MoveTo(at + by),
                Verb::LineTo(to) => Verb::LineTo(to + by),
                Verb::Arc(arc) => Verb::Arc(arc.translate(by)),
                Verb::Close => Verb::Close,
            })
            .collect();

        Path {
            verbs,
            first: self.first + by,
            current: self.current + by,
            in_sub_path: self.in_sub_path,
        }
    }
}

impl PathSink for Path {
    fn reset(&mut self) {
        self.verbs.clear();
        self.first = point(0.0, 0.0);
        self.current = point(0.0, 0.0);
        self.in_sub_path = false;
    }

    fn move_to(&mut self, to: Point) {
        self.verbs.push(Verb::MoveTo(to));
        self.first = to;
        self.current = to;
        self.in_sub_path = true;
    }

    fn line_to(&mut self, to: Point) {
        if !self.in_sub_path {
            // Starts from the origin on an empty path, from the start of the
            // previous sub-path after a close.
            let start = self.current;
            self.move_to(start);
        }

        self.verbs.push(Verb::LineTo(to));
        self.current = to;
    }

    fn arc_to(&mut self, oval: &Rect, start_angle_degrees: f32, sweep_angle_degrees: f32) {
        let arc = Arc::from_oval(oval, start_angle_degrees, sweep_angle_degrees);
        let from = arc.from();

        if !self.in_sub_path {
            self.move_to(from);
        } else if !self
            .current
            .approx_eq_eps(&from, &point(COINCIDENT_EPSILON, COINCIDENT_EPSILON))
        {
            self.verbs.push(Verb::LineTo(from));
        }

        self.verbs.push(Verb::Arc(arc));
        self.current = arc.to();
    }

    fn close(&mut self) {
        if !self.in_sub_path {
            return;
        }

        self.verbs.push(Verb::Close);
        self.current = self.first;
        self.in_sub_path = false;
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// An iterator of `PathEvent` over a `Path`.
///
/// Sub-paths that were not closed yield an `End` event with `close: false`.
#[derive(Clone)]
pub struct Iter<'l> {
    verbs: std::slice::Iter<'l, Verb>,
    first: Point,
    current: Point,
    in_sub_path: bool,
    pending: Option<PathEvent>,
}

impl<'l> Iter<'l> {
    fn new(verbs: &'l [Verb]) -> Self {
        Iter {
            verbs: verbs.iter(),
            first: point(0.0, 0.0),
            current: point(0.0, 0.0),
            in_sub_path: false,
            pending: None,
        }
    }

    fn end_sub_path(&mut self) -> Option<PathEvent> {
        if !self.in_sub_path {
            return None;
        }

        self.in_sub_path = false;
        Some(PathEvent::End {
            last: self.current,
            first: self.first,
            close: false,
        })
    }
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathEvent;

    fn next(&mut self) -> Option<PathEvent> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        match self.verbs.next() {
            Some(&Verb::MoveTo(at)) => {
                let previous = self.end_sub_path();
                self.first = at;
                self.current = at;
                self.in_sub_path = true;

                let begin = PathEvent::Begin { at };
                match previous {
                    Some(end) => {
                        self.pending = Some(begin);
                        Some(end)
                    }
                    None => Some(begin),
                }
            }
            Some(&Verb::LineTo(to)) => {
                let from = self.current;
                self.current = to;
                Some(PathEvent::Line { from, to })
            }
            Some(&Verb::Arc(arc)) => {
                let from = self.current;
                let to = arc.to();
                self.current = to;
                Some(PathEvent::Arc { from, arc, to })
            }
            Some(&Verb::Close) => {
                let last = self.current;
                self.current = self.first;
                self.in_sub_path = false;
                Some(PathEvent::End {
                    last,
                    first: self.first,
                    close: true,
                })
            }
            None => self.end_sub_path(),
        }
    }
}

#[test]
fn arc_on_empty_path_starts_sub_path() {
    let mut path = Path::new();
    path.arc_to(&circle_oval(point(0.0, 0.0), 1.0), 0.0, 90.0);

    match path.verbs() {
        [Verb::MoveTo(at), Verb::Arc(..)] => {
            assert!(at.approx_eq_eps(&point(1.0, 0.0), &point(1e-5, 1e-5)));
        }
        verbs => panic!("unexpected verbs {:?}", verbs),
    }
}

#[test]
fn arc_connects_with_line() {
    let mut path = Path::new();
    path.move_to(point(5.0, 5.0));
    path.arc_to(&circle_oval(point(0.0, 0.0), 1.0), 0.0, 90.0);

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(events.len(), 4);
    match events[1] {
        PathEvent::Line { from, to } => {
            assert_eq!(from, point(5.0, 5.0));
            assert!(to.approx_eq_eps(&point(1.0, 0.0), &point(1e-5, 1e-5)));
        }
        event => panic!("unexpected event {:?}", event),
    }
    match events[3] {
        PathEvent::End { close, .. } => assert!(!close),
        event => panic!("unexpected event {:?}", event),
    }
}

#[test]
fn coincident_arc_is_not_connected() {
    let mut path = Path::new();
    path.move_to(point(1.0, 0.0));
    path.arc_to(&circle_oval(point(0.0, 0.0), 1.0), 0.0, 90.0);

    assert_eq!(path.verbs().len(), 2);
    let to = path.current_position().unwrap();
    assert!(to.approx_eq_eps(&point(0.0, 1.0), &point(1e-5, 1e-5)));
}

#[test]
fn implicit_move_to() {
    let mut path = Path::new();
    path.line_to(point(1.0, 1.0));
    assert_eq!(
        path.verbs(),
        &[Verb::MoveTo(point(0.0, 0.0)), Verb::LineTo(point(1.0, 1.0))]
    );

    path.move_to(point(3.0, 3.0));
    path.line_to(point(4.0, 3.0));
    path.close();
    assert_eq!(path.current_position(), Some(point(3.0, 3.0)));

    // After a close, the next segment starts a sub-path at the previous start.
    path.line_to(point(5.0, 5.0));
    assert_eq!(path.num_contours(), 3);
    assert_eq!(
        &path.verbs()[5..],
        &[Verb::MoveTo(point(3.0, 3.0)), Verb::LineTo(point(5.0, 5.0))]
    );
    assert!(!path.is_closed());
}

#[test]
fn iterate_sub_paths() {
    let mut path = Path::new();
    path.move_to(point(0.0, 0.0));
    path.line_to(point(1.0, 0.0));
    path.move_to(point(10.0, 0.0));
    path.line_to(point(11.0, 0.0));
    path.close();

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(
        events,
        vec![
            PathEvent::Begin { at: point(0.0, 0.0) },
            PathEvent::Line {
                from: point(0.0, 0.0),
                to: point(1.0, 0.0)
            },
            PathEvent::End {
                last: point(1.0, 0.0),
                first: point(0.0, 0.0),
                close: false
            },
            PathEvent::Begin { at: point(10.0, 0.0) },
            PathEvent::Line {
                from: point(10.0, 0.0),
                to: point(11.0, 0.0)
            },
            PathEvent::End {
                last: point(11.0, 0.0),
                first: point(10.0, 0.0),
                close: true
            },
        ]
    );
    assert!(!path.is_closed());
    assert_eq!(path.first_position(), Some(point(0.0, 0.0)));
}

#[test]
fn reset_and_close() {
    let mut path = Path::new();
    path.close();
    assert!(path.is_empty());
    assert!(!path.is_closed());
    assert_eq!(path.current_position(), None);

    path.add_polygon(&[point(0.0, 0.0), point(1.0, 0.0), point(0.0, 1.0)]);
    assert!(path.is_closed());

    path.reset();
    assert!(path.is_empty());
    assert_eq!(path.iter().next(), None);
}

#[test]
fn translated_path() {
    let mut path = Path::new();
    path.add_circle(point(0.0, 0.0), 1.0, crate::Winding::Negative);
    let moved = path.translated(vector(2.0, 3.0));

    assert_eq!(moved.first_position(), Some(point(3.0, 3.0)));
    for (a, b) in path.iter().zip(moved.iter()) {
        assert_eq!(a.translated(vector(2.0, 3.0)), b);
    }
}
