//! Handing polygon outlines to a rendering backend.

use crate::path::{construct_polygon_path, Path, PolygonError, PolygonKind, RegularPolygon};

/// A rendering backend able to fill or stroke a path with some paint.
pub trait DrawingSurface {
    /// Color, gradient, stroke style or whatever else the backend draws with.
    type Paint;

    fn draw_path(&mut self, path: &Path, paint: &Self::Paint);
}

impl<'l, S: DrawingSurface + ?Sized> DrawingSurface for &'l mut S {
    type Paint = S::Paint;

    fn draw_path(&mut self, path: &Path, paint: &Self::Paint) {
        (**self).draw_path(path, paint);
    }
}

/// Builds the outline of a regular polygon and draws it on the surface.
///
/// The path is built from scratch for every call. Nothing is drawn if the polygon
/// is invalid.
pub fn draw_polygon<S: DrawingSurface>(
    surface: &mut S,
    polygon: &RegularPolygon,
    paint: &S::Paint,
) -> Result<PolygonKind, PolygonError> {
    polygon.validate()?;

    let mut path = Path::with_capacity(polygon.side_count as usize * 2 + 2);
    let kind = construct_polygon_path(&mut path, polygon)?;

    surface.draw_path(&path, paint);

    Ok(kind)
}
