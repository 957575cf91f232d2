use crate::{
    composite::{falloff_alpha, over},
    coords::parse_points,
    foundation::core::{Color, Point},
    foundation::error::BrushResult,
    paint::spec::BrushSpec,
    paint::window::{DabStats, for_each_in_circle, validate_radius},
    surface::PixelSurface,
};

/// The destination is treated as fully opaque.
const BACKGROUND_ALPHA: f32 = 1.0;

/// Soft-edged circular brush.
///
/// Each dab fades linearly from `alpha_at_center` at the center to 0 at the radius and is
/// composited "over" the surface. Dabs are applied in order, each on top of the result of
/// the previous one, so repeated or overlapping dabs accumulate.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftBrush;

impl SoftBrush {
    /// Paint every center of `spec` onto `surface`.
    pub fn apply<'s, S>(&self, spec: &BrushSpec, surface: &'s mut S) -> BrushResult<&'s mut S>
    where
        S: PixelSurface + ?Sized,
    {
        soft_brush_points(
            surface,
            spec.radius,
            spec.color,
            spec.alpha_at_center,
            &spec.centers,
        )
    }
}

/// Parse `centers_encoding` (`x10y20x30y40`) and paint a soft dab at each center.
///
/// See [`soft_brush_points`].
pub fn soft_brush<'s, S>(
    surface: &'s mut S,
    radius: f32,
    color: Color,
    alpha_at_center: f32,
    centers_encoding: &str,
) -> BrushResult<&'s mut S>
where
    S: PixelSurface + ?Sized,
{
    let centers = parse_points(centers_encoding);
    soft_brush_points(surface, radius, color, alpha_at_center, &centers)
}

/// Paint a soft dab of `color` at each center, in order.
///
/// Per pixel at distance `d < radius`:
/// `alpha_fg = alpha_at_center * (1 - d / radius)`, then the brush color is composited
/// over the (opaque) destination. Only RGB changes; the destination alpha is kept.
/// The brush color's own alpha is not used.
///
/// `alpha_at_center` is clamped to `[0, 1]` (NaN paints nothing). Fails with
/// [`crate::BrushError::InvalidArgument`] before touching any pixel if `radius` is not
/// finite and positive.
#[tracing::instrument(skip(surface, centers), fields(centers = centers.len()))]
pub fn soft_brush_points<'s, S>(
    surface: &'s mut S,
    radius: f32,
    color: Color,
    alpha_at_center: f32,
    centers: &[Point],
) -> BrushResult<&'s mut S>
where
    S: PixelSurface + ?Sized,
{
    validate_radius(radius)?;
    let alpha_at_center = if alpha_at_center.is_nan() {
        0.0
    } else {
        alpha_at_center.clamp(0.0, 1.0)
    };

    let mut stats = DabStats::default();
    for &center in centers {
        let dab = for_each_in_circle(surface, center, radius, |s, x, y, d| {
            let alpha_fg = falloff_alpha(alpha_at_center, d, radius);
            let bg = s.get_pixel(x, y);
            let (out, _alpha_out) = over(color, alpha_fg, bg, BACKGROUND_ALPHA);
            s.set_pixel(x, y, out.with_alpha(bg.a));
        });
        stats.merge(dab);
    }

    tracing::debug!(
        centers = centers.len(),
        painted = stats.painted,
        skipped = stats.skipped,
        "soft brush applied"
    );
    Ok(surface)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/soft.rs"]
mod tests;
