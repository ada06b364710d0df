//! Vertex positions of regular polygons and radar shapes.
//!
//! All positions are relative to the center of the shape, with the first vertex
//! on the positive x axis and the following ones at increasing angles.
//!
//! ## Example
//!
//! ```
//! use polyshape_geom::vertices::weighted_vertices;
//!
//! // A radar chart with five axes.
//! let values = [1.0, 0.5, 0.8, 0.2, 0.6];
//! let points = weighted_vertices(&values, 100.0, 5).unwrap();
//!
//! assert_eq!(points.len(), 5);
//! assert!((points[0].x - 100.0).abs() < 1e-4);
//!
//! // The number of values must match the number of sides.
//! assert!(weighted_vertices(&values, 100.0, 6).is_err());
//! ```

use crate::error::{check_corner_radius, check_radius, check_side_count};
use crate::math::{point, Angle, Point};
use crate::PolygonError;

/// Parameters for `regular_vertices_with_options`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexOptions {
    /// Whether the effective radius is truncated to an integer before computing the
    /// vertex positions.
    ///
    /// Default value: `VertexOptions::DEFAULT_TRUNCATE_EFFECTIVE_RADIUS`.
    pub truncate_effective_radius: bool,
}

impl VertexOptions {
    /// Default truncation of the effective radius.
    pub const DEFAULT_TRUNCATE_EFFECTIVE_RADIUS: bool = true;

    pub const DEFAULT: Self = VertexOptions {
        truncate_effective_radius: Self::DEFAULT_TRUNCATE_EFFECTIVE_RADIUS,
    };

    /// Options keeping the fractional part of the effective radius.
    #[inline]
    pub fn exact() -> Self {
        Self::DEFAULT.with_truncated_radius(false)
    }

    #[inline]
    pub fn with_truncated_radius(mut self, truncate: bool) -> Self {
        self.truncate_effective_radius = truncate;
        self
    }
}

impl Default for VertexOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// An iterator over the corner angles of a regular polygon.
///
/// Yields `side_count` angles: `0`, `360° / side_count`, `2 * 360° / side_count`, etc.
#[derive(Clone, Debug)]
pub struct CornerAngles {
    index: u32,
    side_count: u32,
}

/// Returns an iterator over the corner angles of a polygon with `side_count` sides.
#[inline]
pub fn corner_angles(side_count: u32) -> CornerAngles {
    CornerAngles {
        index: 0,
        side_count,
    }
}

impl Iterator for CornerAngles {
    type Item = Angle;

    fn next(&mut self) -> Option<Angle> {
        if self.index >= self.side_count {
            return None;
        }

        let degrees = self.index as f64 * (360.0 / self.side_count as f64);
        self.index += 1;

        Some(Angle::radians(degrees.to_radians() as f32))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.side_count - self.index.min(self.side_count)) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for CornerAngles {}

/// The distance from the center at which a vertex lies once the corner is rounded.
///
/// Computed as `radius - (corner_radius / sin(half_corner_angle) - corner_radius)`,
/// where `half_corner_angle = 90° - (360° / side_count) / 2`. If `truncate` is set,
/// the result is truncated towards zero.
pub fn effective_radius(side_count: u32, radius: f32, corner_radius: f32, truncate: bool) -> f32 {
    let half_corner_angle = 90.0 - (360.0 / side_count as f64) / 2.0;
    let corner_radius = corner_radius as f64;
    let r = radius as f64 - (corner_radius / half_corner_angle.to_radians().sin() - corner_radius);

    if truncate {
        r.trunc() as f32
    } else {
        r as f32
    }
}

/// Computes the vertices of a regular polygon whose corners are pulled in by rounding.
///
/// Uses `VertexOptions::DEFAULT`, which truncates the effective radius.
pub fn regular_vertices(
    side_count: u32,
    radius: f32,
    corner_radius: f32,
) -> Result<Vec<Point>, PolygonError> {
    regular_vertices_with_options(side_count, radius, corner_radius, &VertexOptions::DEFAULT)
}

/// Computes the vertices of a regular polygon whose corners are pulled in by rounding.
pub fn regular_vertices_with_options(
    side_count: u32,
    radius: f32,
    corner_radius: f32,
    options: &VertexOptions,
) -> Result<Vec<Point>, PolygonError> {
    check_side_count(side_count)?;
    check_radius(radius)?;
    check_corner_radius(corner_radius)?;

    let r = effective_radius(
        side_count,
        radius,
        corner_radius,
        options.truncate_effective_radius,
    );

    Ok(corner_angles(side_count)
        .map(|angle| polar(r, angle))
        .collect())
}

/// Computes the vertices of a radar shape.
///
/// Vertex `i` lies at `dim_percentages[i] * radius_max` from the center. The number
/// of values must be equal to `side_count`.
pub fn weighted_vertices(
    dim_percentages: &[f32],
    radius_max: f32,
    side_count: u32,
) -> Result<Vec<Point>, PolygonError> {
    if dim_percentages.len() != side_count as usize {
        return Err(PolygonError::DimensionMismatch {
            expected: side_count as usize,
            actual: dim_percentages.len(),
        });
    }
    check_side_count(side_count)?;
    check_radius(radius_max)?;

    Ok(corner_angles(side_count)
        .zip(dim_percentages)
        .map(|(angle, percentage)| polar(percentage * radius_max, angle))
        .collect())
}

#[inline]
fn polar(radius: f32, angle: Angle) -> Point {
    let (sin, cos) = angle.radians.sin_cos();
    point(radius * cos, radius * sin)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::euclid::approxeq::ApproxEq;

    fn assert_points(actual: &[Point], expected: &[Point]) {
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(expected) {
            assert!(
                a.approx_eq_eps(e, &point(1e-3, 1e-3)),
                "{:?} != {:?}",
                a,
                e
            );
        }
    }

    #[test]
    fn square() {
        let vertices = regular_vertices(4, 10.0, 0.0).unwrap();
        assert_points(
            &vertices,
            &[
                point(10.0, 0.0),
                point(0.0, 10.0),
                point(-10.0, 0.0),
                point(0.0, -10.0),
            ],
        );
    }

    #[test]
    fn angles_are_evenly_spaced() {
        for side_count in 3..20 {
            let angles: Vec<Angle> = corner_angles(side_count).collect();
            assert_eq!(angles.len(), side_count as usize);
            assert_eq!(angles[0].radians, 0.0);

            let expected_step = std::f32::consts::PI * 2.0 / side_count as f32;
            for pair in angles.windows(2) {
                let step = pair[1].radians - pair[0].radians;
                assert!((step - expected_step).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn corner_angles_size_hint() {
        let mut angles = corner_angles(5);
        assert_eq!(angles.len(), 5);
        angles.next();
        angles.next();
        assert_eq!(angles.len(), 3);
        assert_eq!(angles.count(), 3);
    }

    #[test]
    fn effective_radius_truncation() {
        // Square: half corner angle is 45°, so the radius shrinks by r * (sqrt(2) - 1).
        let exact = effective_radius(4, 100.0, 10.0, false);
        assert!((exact - (100.0 - 10.0 * (2f32.sqrt() - 1.0))).abs() < 1e-4);
        assert_eq!(effective_radius(4, 100.0, 10.0, true), 95.0);

        assert_eq!(effective_radius(6, 10.0, 0.0, true), 10.0);
        assert_eq!(effective_radius(6, 10.5, 0.0, true), 10.0);
        assert_eq!(effective_radius(6, 10.5, 0.0, false), 10.5);
    }

    #[test]
    fn rounded_vertices_are_pulled_in() {
        let truncated = regular_vertices(4, 100.0, 10.0).unwrap();
        assert!((truncated[0].x - 95.0).abs() < 1e-4);

        let exact = regular_vertices_with_options(4, 100.0, 10.0, &VertexOptions::exact()).unwrap();
        assert!((exact[0].x - 95.857864).abs() < 1e-3);
    }

    #[test]
    fn regular_vertices_validation() {
        assert_eq!(
            regular_vertices(2, 10.0, 0.0),
            Err(PolygonError::TooFewSides { side_count: 2 })
        );
        assert_eq!(
            regular_vertices(3, -1.0, 0.0),
            Err(PolygonError::NegativeRadius { radius: -1.0 })
        );
        assert_eq!(
            regular_vertices(3, 1.0, -1.0),
            Err(PolygonError::NegativeCornerRadius { radius: -1.0 })
        );
    }

    #[test]
    fn weighted() {
        let vertices = weighted_vertices(&[1.0, 0.5, 0.0, 0.25], 10.0, 4).unwrap();
        assert_points(
            &vertices,
            &[
                point(10.0, 0.0),
                point(0.0, 5.0),
                point(0.0, 0.0),
                point(0.0, -2.5),
            ],
        );
    }

    #[test]
    fn weighted_length_mismatch() {
        let values = [0.5; 8];
        for &side_count in &[3u32, 5, 7] {
            for &len in &[0, side_count as usize - 1, side_count as usize + 1] {
                assert_eq!(
                    weighted_vertices(&values[..len], 10.0, side_count),
                    Err(PolygonError::DimensionMismatch {
                        expected: side_count as usize,
                        actual: len,
                    })
                );
            }
        }
    }
}
