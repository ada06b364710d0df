//! Regular polygon description.

use crate::error::{check_corner_radius, check_outer_radius, check_side_count};
use crate::math::{point, Angle, Point};
use crate::vertices::corner_angles;
use crate::PolygonError;

/// A regular polygon, optionally with rounded corners.
///
/// The polygon's first vertex sits on the positive x axis of its center; the others
/// follow at `360° / side_count` intervals.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct RegularPolygon {
    /// Number of sides, at least 3.
    pub side_count: u32,
    /// Center of the polygon.
    pub center: Point,
    /// Distance from the center to any vertex, ignoring corner rounding.
    pub outer_radius: f32,
    /// Radius of the arc replacing each corner. Zero for sharp corners.
    pub corner_radius: f32,
}

impl RegularPolygon {
    /// Creates a validated polygon.
    pub fn new(
        side_count: u32,
        center: Point,
        outer_radius: f32,
        corner_radius: f32,
    ) -> Result<Self, PolygonError> {
        let polygon = RegularPolygon {
            side_count,
            center,
            outer_radius,
            corner_radius,
        };
        polygon.validate()?;

        Ok(polygon)
    }

    /// A polygon with sharp corners centered on the origin.
    pub fn sharp(side_count: u32, outer_radius: f32) -> Result<Self, PolygonError> {
        Self::new(side_count, point(0.0, 0.0), outer_radius, 0.0)
    }

    /// Checks the numeric preconditions of the polygon operations.
    pub fn validate(&self) -> Result<(), PolygonError> {
        check_side_count(self.side_count)?;
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(PolygonError::InvalidCenter);
        }
        check_outer_radius(self.outer_radius)?;
        check_corner_radius(self.corner_radius)?;

        Ok(())
    }

    /// Radius of the inscribed circle, tangent to the middle of each edge.
    pub fn in_radius(&self) -> f32 {
        let half_central_angle = (180.0 / self.side_count as f64).to_radians();
        (self.outer_radius as f64 * half_central_angle.cos()) as f32
    }

    /// Angle between two consecutive vertices, seen from the center.
    #[inline]
    pub fn central_angle(&self) -> Angle {
        Angle::degrees(360.0 / self.side_count as f32)
    }

    /// Whether the corner radius is too large to fit in the polygon.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.in_radius() < self.corner_radius
    }

    /// Angle of the corner at `index`, from the positive x axis.
    pub fn corner_angle(&self, index: u32) -> Angle {
        let degrees = index as f64 * (360.0 / self.side_count as f64);
        Angle::radians(degrees.to_radians() as f32)
    }

    /// Position of the unrounded vertex at `index`, in absolute coordinates.
    pub fn vertex(&self, index: u32) -> Point {
        self.vertex_at(self.corner_angle(index))
    }

    /// Positions of the unrounded vertices, in absolute coordinates.
    pub fn vertices(&self) -> impl Iterator<Item = Point> + '_ {
        corner_angles(self.side_count).map(move |angle| self.vertex_at(angle))
    }

    fn vertex_at(&self, angle: Angle) -> Point {
        let (sin, cos) = angle.radians.sin_cos();
        point(
            self.center.x + self.outer_radius * cos,
            self.center.y + self.outer_radius * sin,
        )
    }
}
