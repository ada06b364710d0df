use crate::math::{Box2D, Point, Vector};

/// A linear segment.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

impl LineSegment {
    /// Sample the segment at t (expecting t between 0 and 1).
    #[inline]
    pub fn sample(&self, t: f32) -> Point {
        self.from.lerp(self.to, t)
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        self.to - self.from
    }

    #[inline]
    pub fn length(&self) -> f32 {
        self.to_vector().length()
    }

    /// Returns the smallest rectangle containing the segment.
    #[inline]
    pub fn bounding_box(&self) -> Box2D {
        Box2D {
            min: self.from.min(self.to),
            max: self.from.max(self.to),
        }
    }

    #[inline]
    pub fn translate(&self, by: Vector) -> Self {
        LineSegment {
            from: self.from + by,
            to: self.to + by,
        }
    }
}

#[test]
fn sample_and_bounds() {
    use crate::math::{point, vector};

    let segment = LineSegment {
        from: point(2.0, 5.0),
        to: point(-2.0, 2.0),
    };

    assert_eq!(segment.sample(0.5), point(0.0, 3.5));
    assert_eq!(segment.length(), 5.0);
    assert_eq!(
        segment.bounding_box(),
        Box2D {
            min: point(-2.0, 2.0),
            max: point(2.0, 5.0),
        }
    );
    assert_eq!(
        segment.translate(vector(1.0, 1.0)).from,
        point(3.0, 6.0)
    );
}
