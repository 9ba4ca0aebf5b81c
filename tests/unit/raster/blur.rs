use super::*;
use crate::foundation::core::Rgba8;

#[test]
fn zero_sigma_is_identity() {
    let mut c = Canvas::new(3, 2, ColorMode::Rgba, Rgba8::new(1, 2, 3, 4));
    c.set_pixel(1, 1, Rgba8::new(200, 100, 50, 255));
    let before = c.clone();
    gaussian_blur(&mut c, 0.0).unwrap();
    assert_eq!(c, before);
}

#[test]
fn kernel_is_symmetric_and_sums_to_one() {
    for sigma in [0.3f32, 0.5, 1.2, 2.0, 25.0] {
        let k = Kernel::gaussian(sigma).unwrap();
        assert_eq!(k.radius, ((3.0 * sigma).ceil() as usize).max(1));
        assert_eq!(k.taps.len(), 2 * k.radius + 1);
        assert_eq!(k.taps.iter().map(|&t| u64::from(t)).sum::<u64>(), 1 << 16);
        for i in 0..k.radius {
            assert_eq!(k.taps[i], k.taps[k.taps.len() - 1 - i]);
            assert!(k.taps[i] <= k.taps[i + 1]);
        }
    }
    assert!(Kernel::gaussian(0.0).is_err());
}

#[test]
fn constant_canvas_is_unchanged() {
    let fill = Rgba8::new(10, 20, 30, 255);
    let mut c = Canvas::new(4, 3, ColorMode::Rgb, fill);
    gaussian_blur(&mut c, 2.0).unwrap();
    assert!(c.pixels().all(|px| px == fill.to_array()));
}

#[test]
fn single_pixel_spreads_and_conserves_energy() {
    let mut c = Canvas::new(5, 5, ColorMode::Rgb, Rgba8::new(0, 0, 0, 255));
    c.set_pixel(2, 2, Rgba8::new(255, 255, 255, 255));
    gaussian_blur(&mut c, 0.6).unwrap();

    let lit = c.pixels().filter(|px| px[0] != 0).count();
    assert!(lit > 1);
    let total: u32 = c.pixels().map(|px| u32::from(px[0])).sum();
    assert!((total as i32 - 255).abs() <= 4, "total {total}");
    assert_eq!(c.pixel(1, 2).unwrap().r, c.pixel(3, 2).unwrap().r);
    assert_eq!(c.pixel(2, 1).unwrap().r, c.pixel(2, 3).unwrap().r);
}

#[test]
fn one_pixel_wide_column_blurs_vertically_only() {
    let mut c = Canvas::new(1, 9, ColorMode::Rgba, Rgba8::TRANSPARENT);
    c.set_pixel(0, 4, Rgba8::new(160, 170, 180, 255));
    gaussian_blur(&mut c, 1.0).unwrap();
    assert!(c.pixel(0, 3).unwrap().a > 0);
    assert_eq!(c.pixel(0, 3).unwrap().a, c.pixel(0, 5).unwrap().a);
    assert!(c.pixel(0, 4).unwrap().a < 255);
}

#[test]
fn canvas_blur_rejects_negative_sigma() {
    let mut c = Canvas::new(2, 2, ColorMode::Rgb, Rgba8::new(1, 2, 3, 255));
    assert!(gaussian_blur(&mut c, -1.0).is_err());
    assert!(gaussian_blur(&mut c, f32::NAN).is_err());
}

#[test]
fn rgba_blur_keeps_color_of_translucent_band() {
    let mut c = Canvas::new(6, 12, ColorMode::Rgba, Rgba8::TRANSPARENT);
    for y in 4..8 {
        for x in 0..6 {
            c.set_pixel(x, y, Rgba8::new(160, 170, 180, 200));
        }
    }
    gaussian_blur(&mut c, 1.5).unwrap();

    let edge = c.pixel(3, 3).unwrap();
    let core = c.pixel(3, 5).unwrap();
    assert!(edge.a > 0 && edge.a < core.a);
    for px in [edge, core] {
        assert!((i32::from(px.r) - 160).abs() <= 3);
        assert!((i32::from(px.b) - 180).abs() <= 3);
    }
}

#[test]
fn rgb_blur_keeps_canvas_opaque() {
    let mut c = Canvas::new(5, 5, ColorMode::Rgb, Rgba8::new(0, 0, 0, 255));
    c.set_pixel(2, 2, Rgba8::new(255, 255, 255, 255));
    gaussian_blur(&mut c, 0.5).unwrap();
    assert!(c.pixels().all(|px| px[3] == 255));
    assert!(c.pixel(2, 2).unwrap().r < 255);
}
