use crate::{
    foundation::core::Point,
    foundation::error::{BrushError, BrushResult},
    surface::PixelSurface,
};

/// Per-call pixel tallies, reported through `tracing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct DabStats {
    pub(crate) painted: u64,
    pub(crate) skipped: u64,
}

impl DabStats {
    pub(crate) fn merge(&mut self, other: DabStats) {
        self.painted += other.painted;
        self.skipped += other.skipped;
    }
}

pub(crate) fn validate_radius(radius: f32) -> BrushResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(BrushError::invalid_argument(format!(
            "brush radius must be finite and > 0, got {radius}"
        )));
    }
    Ok(())
}

/// Half-open integer interval `[c - r, c + r)` clipped to `[0, len)`.
///
/// Also returns the unclipped candidate count so callers can tally skips.
fn axis_window(c: i32, r: f32, len: u32) -> (i64, i64, u64) {
    let c = f64::from(c);
    let r = f64::from(r);
    let lo = (c - r).ceil() as i64;
    let hi = (c + r).ceil() as i64;
    let candidates = hi.saturating_sub(lo).max(0) as u64;
    (lo.max(0), hi.min(i64::from(len)), candidates)
}

/// Visit every pixel of `surface` strictly inside the circle of `radius` around
/// `center`, passing the pixel and its distance from the exact center.
///
/// Candidates come from the half-open bounding square; those off the surface or at
/// `d >= radius` are skipped. Each pixel is visited at most once.
pub(crate) fn for_each_in_circle<S, F>(
    surface: &mut S,
    center: Point,
    radius: f32,
    mut visit: F,
) -> DabStats
where
    S: PixelSurface + ?Sized,
    F: FnMut(&mut S, u32, u32, f32),
{
    let (x0, x1, nx) = axis_window(center.x, radius, surface.width());
    let (y0, y1, ny) = axis_window(center.y, radius, surface.height());

    let mut painted = 0u64;
    for y in y0..y1 {
        let dy = (y - i64::from(center.y)) as f32;
        for x in x0..x1 {
            let dx = (x - i64::from(center.x)) as f32;
            let d = (dx * dx + dy * dy).sqrt();
            if d >= radius {
                continue;
            }
            // Both axes are clipped to [0, len), which fits in u32.
            visit(&mut *surface, x as u32, y as u32, d);
            painted += 1;
        }
    }

    DabStats {
        painted,
        skipped: nx.saturating_mul(ny).saturating_sub(painted),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/window.rs"]
mod tests;
