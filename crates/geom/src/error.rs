#![allow(clippy::neg_cmp_op_on_partial_ord)]

use thiserror::Error;

/// Invalid input to one of the polygon operations.
///
/// Geometric degeneracies (for example a corner radius larger than the polygon
/// can hold) are not errors and never produce this type.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum PolygonError {
    #[error("A polygon needs at least 3 sides, got {side_count}.")]
    TooFewSides { side_count: u32 },
    #[error("The outer radius must be a finite positive number, got {radius}.")]
    InvalidOuterRadius { radius: f32 },
    #[error("The radius must be a finite non-negative number, got {radius}.")]
    NegativeRadius { radius: f32 },
    #[error("The corner radius must be a finite non-negative number, got {radius}.")]
    NegativeCornerRadius { radius: f32 },
    #[error("The center must have finite coordinates.")]
    InvalidCenter,
    #[error("dim_percentages length must equal side count (expected {expected}, got {actual}).")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("The tolerance threshold must be a finite positive number, got {tolerance}.")]
    InvalidTolerance { tolerance: f32 },
}

pub(crate) fn check_side_count(side_count: u32) -> Result<(), PolygonError> {
    if side_count < 3 {
        return Err(PolygonError::TooFewSides { side_count });
    }

    Ok(())
}

// Written as negated conditions so that NaN and infinities are rejected.
pub(crate) fn check_radius(radius: f32) -> Result<(), PolygonError> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(PolygonError::NegativeRadius { radius });
    }

    Ok(())
}

pub(crate) fn check_outer_radius(radius: f32) -> Result<(), PolygonError> {
    if !(radius.is_finite() && radius > 0.0) {
        return Err(PolygonError::InvalidOuterRadius { radius });
    }

    Ok(())
}

pub(crate) fn check_corner_radius(radius: f32) -> Result<(), PolygonError> {
    if !(radius.is_finite() && radius >= 0.0) {
        return Err(PolygonError::NegativeCornerRadius { radius });
    }

    Ok(())
}

impl PolygonError {
    /// Checks a flattening tolerance threshold.
    pub fn check_tolerance(tolerance: f32) -> Result<(), PolygonError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(PolygonError::InvalidTolerance { tolerance });
        }

        Ok(())
    }
}

#[test]
fn rejects_nan() {
    assert!(check_corner_radius(f32::NAN).is_err());
    assert!(check_outer_radius(f32::NAN).is_err());
    assert!(check_radius(f32::NAN).is_err());
    assert!(PolygonError::check_tolerance(f32::NAN).is_err());
    assert!(check_radius(0.0).is_ok());
    assert!(check_outer_radius(0.0).is_err());
}

#[test]
fn rejects_infinity() {
    for &value in &[f32::INFINITY, f32::NEG_INFINITY] {
        assert!(check_corner_radius(value).is_err());
        assert!(check_outer_radius(value).is_err());
        assert!(check_radius(value).is_err());
        assert!(PolygonError::check_tolerance(value).is_err());
    }
    assert_eq!(
        check_outer_radius(f32::INFINITY),
        Err(PolygonError::InvalidOuterRadius {
            radius: f32::INFINITY
        })
    );
    assert!(check_radius(f32::MAX).is_ok());
}

#[test]
fn error_messages() {
    let err = PolygonError::DimensionMismatch {
        expected: 5,
        actual: 4,
    };
    assert_eq!(
        err.to_string(),
        "dim_percentages length must equal side count (expected 5, got 4)."
    );
    assert_eq!(
        PolygonError::TooFewSides { side_count: 2 }.to_string(),
        "A polygon needs at least 3 sides, got 2."
    );
}
