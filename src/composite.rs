use crate::foundation::core::Color;

/// Straight-alpha Porter-Duff "over": `fg` with coverage `alpha_fg` on top of `bg`
/// with coverage `alpha_bg`.
///
/// Returns `(color_out, alpha_out)` where
/// `alpha_out = alpha_fg + alpha_bg * (1 - alpha_fg)` and
/// `color_out = (fg * alpha_fg + bg * alpha_bg * (1 - alpha_fg)) / alpha_out`.
///
/// Alphas are clamped to `[0, 1]`. A fully transparent result returns `bg` unchanged
/// with `alpha_out = 0`.
pub fn over(fg: Color, alpha_fg: f32, bg: Color, alpha_bg: f32) -> (Color, f32) {
    let alpha_fg = alpha_fg.clamp(0.0, 1.0);
    let alpha_bg = alpha_bg.clamp(0.0, 1.0);

    let alpha_out = alpha_fg + alpha_bg * (1.0 - alpha_fg);
    if alpha_out <= 0.0 {
        return (bg, 0.0);
    }

    let src = fg * alpha_fg;
    let dst = bg * alpha_bg * (1.0 - alpha_fg);
    ((src + dst) / alpha_out, alpha_out)
}

/// Linear radial falloff: `alpha_at_center` at `d = 0` down to 0 at `d = radius`.
///
/// Returns 0 for `d >= radius` and for a non-positive radius.
pub fn falloff_alpha(alpha_at_center: f32, d: f32, radius: f32) -> f32 {
    if radius <= 0.0 || d >= radius {
        return 0.0;
    }
    alpha_at_center * (1.0 - d / radius)
}

/// Blend scalar `start` (background) toward `end` (upper layer) by `alpha`.
pub fn blend(start: f32, end: f32, alpha: f32) -> f32 {
    start * (1.0 - alpha) + end * alpha
}

/// Constrain `val` to `[min, max]`.
pub fn clamp(val: f32, min: f32, max: f32) -> f32 {
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

#[cfg(test)]
#[path = "../tests/unit/composite.rs"]
mod tests;
