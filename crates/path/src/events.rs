use crate::geom::Arc;
use crate::math::{Point, Vector};

/// Represents an event or edge of path.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin {
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
    },
    Arc {
        from: Point,
        arc: Arc,
        to: Point,
    },
    End {
        last: Point,
        first: Point,
        close: bool,
    },
}

impl PathEvent {
    pub fn is_edge(&self) -> bool {
        match self {
            &PathEvent::Line { .. } | &PathEvent::Arc { .. } | &PathEvent::End { close: true, .. } => {
                true
            }
            _ => false,
        }
    }

    pub fn from(&self) -> Point {
        match *self {
            PathEvent::Line { from, .. }
            | PathEvent::Arc { from, .. }
            | PathEvent::Begin { at: from }
            | PathEvent::End { last: from, .. } => from,
        }
    }

    pub fn to(&self) -> Point {
        match *self {
            PathEvent::Line { to, .. }
            | PathEvent::Arc { to, .. }
            | PathEvent::Begin { at: to }
            | PathEvent::End { first: to, .. } => to,
        }
    }

    pub fn translated(&self, by: Vector) -> Self {
        match *self {
            PathEvent::Begin { at } => PathEvent::Begin { at: at + by },
            PathEvent::Line { from, to } => PathEvent::Line {
                from: from + by,
                to: to + by,
            },
            PathEvent::Arc { from, arc, to } => PathEvent::Arc {
                from: from + by,
                arc: arc.translate(by),
                to: to + by,
            },
            PathEvent::End { last, first, close } => PathEvent::End {
                last: last + by,
                first: first + by,
                close,
            },
        }
    }
}
