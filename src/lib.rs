//! Softbrush paints soft-edged circular dabs onto float pixel surfaces.
//!
//! Every dab fades linearly from an opacity at its center to zero at its radius and is
//! composited with the straight-alpha Porter-Duff "over" operator. Dabs are applied in
//! order and accumulate: painting the same dab twice is not the same as painting it once.
//!
//! # Overview
//!
//! - [`soft_brush`] / [`soft_brush_points`] / [`SoftBrush`]: the soft brush.
//! - [`brush`] / [`brush_points`]: hard-edged filled circles.
//! - [`fill`]: flood a whole surface with one color.
//! - [`PixelSurface`]: the surface abstraction, implemented for `image`'s
//!   [`image::Rgb32FImage`] and [`image::Rgba32FImage`].
//! - [`PointListParser`]: decodes center lists such as `x10y20x30y40`.
//! - [`BrushSpec`]: serde data model of one brush call, loadable from JSON.
//!
//! Off-surface pixels are skipped, never written. The only failure is an invalid
//! radius, reported as [`BrushError::InvalidArgument`] before any pixel changes.
//!
//! ```
//! use softbrush::{Color, PixelSurface, soft_brush, solid_rgb};
//!
//! let mut canvas = solid_rgb(10, 10, Color::BLACK);
//! soft_brush(&mut canvas, 3.0, Color::WHITE, 1.0, "x5y5").unwrap();
//! assert_eq!(PixelSurface::get_pixel(&canvas, 5, 5), Color::WHITE);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod composite;
mod coords;
mod foundation;
mod paint;
mod surface;

pub use composite::{blend, clamp, falloff_alpha, over};
pub use coords::{PointListParser, parse_points};
pub use foundation::core::{Color, Point};
pub use foundation::error::{BrushError, BrushResult};
pub use paint::fill::fill;
pub use paint::soft::{SoftBrush, soft_brush, soft_brush_points};
pub use paint::solid::{brush, brush_points};
pub use paint::spec::BrushSpec;
pub use surface::{PixelSurface, solid_rgb, solid_rgba};
