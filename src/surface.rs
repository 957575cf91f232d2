use image::{Rgb, Rgb32FImage, Rgba, Rgba32FImage};

use crate::foundation::core::Color;

/// A `width x height` grid of mutable float pixels.
///
/// Paint operations only call [`get_pixel`](Self::get_pixel) and
/// [`set_pixel`](Self::set_pixel) with coordinates inside the grid; implementations may
/// panic on out-of-range access.
pub trait PixelSurface {
    /// Width in pixels.
    fn width(&self) -> u32;

    /// Height in pixels.
    fn height(&self) -> u32;

    /// Read the pixel at `(x, y)`.
    fn get_pixel(&self, x: u32, y: u32) -> Color;

    /// Overwrite the pixel at `(x, y)`.
    fn set_pixel(&mut self, x: u32, y: u32, c: Color);

    /// True if the signed coordinate addresses a pixel of this surface.
    fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width()) && y < i64::from(self.height())
    }
}

/// RGB float image; always opaque. Writes drop the alpha channel.
impl PixelSurface for Rgb32FImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        let Rgb([r, g, b]) = *image::ImageBuffer::get_pixel(self, x, y);
        Color::rgb(r, g, b)
    }

    fn set_pixel(&mut self, x: u32, y: u32, c: Color) {
        image::ImageBuffer::put_pixel(self, x, y, Rgb([c.r, c.g, c.b]));
    }
}

impl PixelSurface for Rgba32FImage {
    fn width(&self) -> u32 {
        image::ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        image::ImageBuffer::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Color {
        let Rgba([r, g, b, a]) = *image::ImageBuffer::get_pixel(self, x, y);
        Color::rgba(r, g, b, a)
    }

    fn set_pixel(&mut self, x: u32, y: u32, c: Color) {
        image::ImageBuffer::put_pixel(self, x, y, Rgba([c.r, c.g, c.b, c.a]));
    }
}

/// New `width x height` RGB float surface filled with `color`.
pub fn solid_rgb(width: u32, height: u32, color: Color) -> Rgb32FImage {
    Rgb32FImage::from_pixel(width, height, Rgb([color.r, color.g, color.b]))
}

/// New `width x height` RGBA float surface filled with `color`.
pub fn solid_rgba(width: u32, height: u32, color: Color) -> Rgba32FImage {
    Rgba32FImage::from_pixel(width, height, Rgba([color.r, color.g, color.b, color.a]))
}

#[cfg(test)]
#[path = "../tests/unit/surface.rs"]
mod tests;
