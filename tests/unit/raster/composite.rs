use super::*;

#[test]
fn replace_writes_alpha_verbatim() {
    let dst = Rgba8::new(10, 20, 30, 255);
    let src = Rgba8::new(90, 60, 45, 200);
    assert_eq!(blend(dst, src, 255, Blend::Replace), src);
    assert_eq!(blend(dst, Rgba8::TRANSPARENT, 255, Blend::Replace), Rgba8::TRANSPARENT);
}

#[test]
fn replace_without_coverage_is_identity() {
    let dst = Rgba8::new(10, 20, 30, 255);
    assert_eq!(blend(dst, Rgba8::new(1, 2, 3, 4), 0, Blend::Replace), dst);
}

#[test]
fn over_opaque_source_wins() {
    let dst = Rgba8::new(10, 20, 30, 255);
    let src = Rgba8::new(200, 100, 50, 255);
    assert_eq!(blend(dst, src, 255, Blend::Over), src);
}

#[test]
fn over_translucent_onto_opaque_stays_opaque() {
    let dst = Rgba8::new(0, 0, 0, 255);
    let src = Rgba8::new(255, 255, 255, 51);
    let out = blend(dst, src, 255, Blend::Over);
    assert_eq!(out.a, 255);
    assert_eq!(out.r, 51);
    assert_eq!(out.g, 51);
}

#[test]
fn over_onto_transparent_keeps_source_color() {
    let src = Rgba8::new(160, 170, 180, 30);
    let out = blend(Rgba8::TRANSPARENT, src, 255, Blend::Over);
    assert_eq!(out, src);
}

#[test]
fn paste_masked_mixes_by_source_alpha_and_clips() {
    let mut dst = Canvas::new(4, 4, ColorMode::Rgb, Rgba8::new(0, 0, 0, 255));
    let src = Canvas::new(3, 3, ColorMode::Rgba, Rgba8::new(255, 255, 255, 255));
    paste_masked(&mut dst, &src, 2, -1);

    assert_eq!(dst.pixel(2, 0), Some(Rgba8::new(255, 255, 255, 255)));
    assert_eq!(dst.pixel(3, 1), Some(Rgba8::new(255, 255, 255, 255)));
    assert_eq!(dst.pixel(1, 0), Some(Rgba8::new(0, 0, 0, 255)));
    assert_eq!(dst.pixel(2, 2), Some(Rgba8::new(0, 0, 0, 255)));

    let half = Canvas::new(1, 1, ColorMode::Rgba, Rgba8::new(255, 255, 255, 128));
    paste_masked(&mut dst, &half, 0, 3);
    let px = dst.pixel(0, 3).unwrap();
    assert_eq!(px.a, 255);
    assert_eq!(px.r, 128);
}
