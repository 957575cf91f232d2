use crate::{foundation::core::Color, surface::PixelSurface};

/// Set every pixel of `surface` to `color`.
pub fn fill<S>(surface: &mut S, color: Color) -> &mut S
where
    S: PixelSurface + ?Sized,
{
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            surface.set_pixel(x, y, color);
        }
    }
    surface
}
