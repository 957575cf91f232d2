use crate::{
    coords::parse_points,
    foundation::core::{Color, Point},
    foundation::error::BrushResult,
    paint::window::{DabStats, for_each_in_circle, validate_radius},
    surface::PixelSurface,
};

/// Parse `centers_encoding` and paint a hard-edged filled circle at each center.
pub fn brush<'s, S>(
    surface: &'s mut S,
    radius: f32,
    color: Color,
    centers_encoding: &str,
) -> BrushResult<&'s mut S>
where
    S: PixelSurface + ?Sized,
{
    let centers = parse_points(centers_encoding);
    brush_points(surface, radius, color, &centers)
}

/// Replace every pixel strictly inside `radius` of each center with `color`.
///
/// Uses the same candidate window and bounds rules as the soft brush.
#[tracing::instrument(skip(surface, centers), fields(centers = centers.len()))]
pub fn brush_points<'s, S>(
    surface: &'s mut S,
    radius: f32,
    color: Color,
    centers: &[Point],
) -> BrushResult<&'s mut S>
where
    S: PixelSurface + ?Sized,
{
    validate_radius(radius)?;

    let mut stats = DabStats::default();
    for &center in centers {
        stats.merge(for_each_in_circle(surface, center, radius, |s, x, y, _| {
            s.set_pixel(x, y, color);
        }));
    }

    tracing::debug!(
        centers = centers.len(),
        painted = stats.painted,
        skipped = stats.skipped,
        "solid brush applied"
    );
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/solid.rs"]
mod tests;
