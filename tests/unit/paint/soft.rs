use super::*;
use crate::surface::{solid_rgb, solid_rgba};

fn px<S: PixelSurface>(s: &S, x: u32, y: u32) -> Color {
    PixelSurface::get_pixel(s, x, y)
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() <= 1e-5
}

#[test]
fn white_dab_on_black_matches_reference_values() {
    let mut s = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut s, 3.0, Color::WHITE, 1.0, "x5y5").unwrap();

    assert_eq!(px(&s, 5, 5), Color::WHITE);
    assert_eq!(px(&s, 5, 2), Color::BLACK);

    let gray = px(&s, 5, 3);
    for c in [gray.r, gray.g, gray.b] {
        assert!(approx(c, 1.0 / 3.0), "got {c}");
    }
}

#[test]
fn center_receives_alpha_at_center() {
    let mut s = solid_rgb(9, 9, Color::BLACK);
    soft_brush_points(&mut s, 4.0, Color::WHITE, 0.6, &[Point::new(4, 4)]).unwrap();
    assert!(approx(px(&s, 4, 4).r, 0.6));
}

#[test]
fn intensity_never_increases_with_distance() {
    let mut s = solid_rgb(21, 1, Color::BLACK);
    soft_brush_points(&mut s, 8.0, Color::WHITE, 0.9, &[Point::new(10, 0)]).unwrap();

    let mut prev = f32::INFINITY;
    for x in 10..21 {
        let v = px(&s, x, 0).r;
        assert!(v <= prev, "x={x} v={v} prev={prev}");
        prev = v;
    }
    assert_eq!(px(&s, 18, 0), Color::BLACK);
    assert_eq!(px(&s, 2, 0), Color::BLACK);
}

#[test]
fn pixels_outside_radius_are_untouched() {
    let base = Color::rgb(0.25, 0.5, 0.75);
    let mut s = solid_rgb(12, 12, base);
    soft_brush_points(&mut s, 3.0, Color::WHITE, 1.0, &[Point::new(6, 6)]).unwrap();
    for y in 0..12u32 {
        for x in 0..12u32 {
            let dx = x as f32 - 6.0;
            let dy = y as f32 - 6.0;
            if (dx * dx + dy * dy).sqrt() >= 3.0 {
                assert_eq!(px(&s, x, y), base, "({x},{y})");
            }
        }
    }
}

#[test]
fn repeated_dab_is_not_idempotent() {
    let mut once = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut once, 4.0, Color::WHITE, 0.5, "x5y5").unwrap();

    let mut twice = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut twice, 4.0, Color::WHITE, 0.5, "x5y5x5y5").unwrap();

    assert!(approx(px(&once, 5, 5).r, 0.5));
    assert!(approx(px(&twice, 5, 5).r, 0.75));
    assert_ne!(px(&once, 5, 5), px(&twice, 5, 5));
}

#[test]
fn stroke_order_changes_overlap_color() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);

    let mut a = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut a, 4.0, red, 0.5, "x4y5").unwrap();
    soft_brush(&mut a, 4.0, blue, 0.5, "x6y5").unwrap();

    let mut b = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut b, 4.0, blue, 0.5, "x6y5").unwrap();
    soft_brush(&mut b, 4.0, red, 0.5, "x4y5").unwrap();

    assert_ne!(px(&a, 5, 5), px(&b, 5, 5));
}

#[test]
fn full_opacity_center_overwrites_regardless_of_order() {
    let red = Color::rgb(1.0, 0.0, 0.0);
    let blue = Color::rgb(0.0, 0.0, 1.0);

    let mut a = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut a, 3.0, red, 1.0, "x5y5").unwrap();
    soft_brush(&mut a, 3.0, blue, 1.0, "x5y5").unwrap();
    assert_eq!(px(&a, 5, 5), blue);
}

#[test]
fn corner_center_paints_quarter_disc_only() {
    let mut s = solid_rgb(10, 10, Color::BLACK);
    soft_brush(&mut s, 5.0, Color::WHITE, 1.0, "x0y0").unwrap();

    assert_eq!(px(&s, 0, 0), Color::WHITE);
    let painted = (0..10u32)
        .flat_map(|y| (0..10u32).map(move |x| (x, y)))
        .filter(|&(x, y)| px(&s, x, y) != Color::BLACK)
        .count();
    assert_eq!(painted, 22);
}

#[test]
fn invalid_radius_fails_without_touching_pixels() {
    for r in [0.0, -2.0, f32::NAN] {
        let mut s = solid_rgb(6, 6, Color::BLACK);
        let err = soft_brush(&mut s, r, Color::WHITE, 1.0, "x3y3").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(s.pixels().all(|p| p.0 == [0.0, 0.0, 0.0]));
    }
}

#[test]
fn empty_centers_is_noop() {
    let mut s = solid_rgb(4, 4, Color::BLACK);
    soft_brush(&mut s, 2.0, Color::WHITE, 1.0, "").unwrap();
    assert!(s.pixels().all(|p| p.0 == [0.0, 0.0, 0.0]));
}

#[test]
fn alpha_at_center_is_clamped() {
    let mut s = solid_rgb(5, 5, Color::BLACK);
    soft_brush(&mut s, 2.0, Color::WHITE, 3.0, "x2y2").unwrap();
    assert_eq!(px(&s, 2, 2), Color::WHITE);

    let mut s = solid_rgb(5, 5, Color::BLACK);
    soft_brush(&mut s, 2.0, Color::WHITE, f32::NAN, "x2y2").unwrap();
    assert_eq!(px(&s, 2, 2), Color::BLACK);
}

#[test]
fn rgba_destination_alpha_is_preserved() {
    let mut s = solid_rgba(5, 5, Color::rgba(0.0, 0.0, 0.0, 0.25));
    soft_brush(&mut s, 2.0, Color::rgba(1.0, 1.0, 1.0, 0.5), 1.0, "x2y2").unwrap();
    assert_eq!(px(&s, 2, 2), Color::rgba(1.0, 1.0, 1.0, 0.25));
}

#[test]
fn apply_uses_spec_fields() {
    let spec = BrushSpec::from_encoded(3.0, Color::WHITE, 1.0, "x5y5x1y1");
    let mut s = solid_rgb(10, 10, Color::BLACK);
    SoftBrush.apply(&spec, &mut s).unwrap();
    assert_eq!(px(&s, 5, 5), Color::WHITE);
    assert_eq!(px(&s, 1, 1), Color::WHITE);
}
