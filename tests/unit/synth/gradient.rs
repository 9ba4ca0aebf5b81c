use super::*;
use crate::foundation::core::Rgba8;
use crate::palette::PaletteColor;

fn column(c: &Canvas, x: u32) -> Vec<[u8; 3]> {
    (0..c.height())
        .map(|y| {
            let px = c.pixel(x, y).unwrap();
            [px.r, px.g, px.b]
        })
        .collect()
}

#[test]
fn vertical_golden_values() {
    let c = fill_gradient(
        1,
        5,
        Rgb8::new(0, 0, 0),
        Rgb8::new(255, 255, 255),
        Axis::Vertical,
    );
    assert_eq!(
        column(&c, 0),
        vec![
            [0, 0, 0],
            [51, 51, 51],
            [102, 102, 102],
            [153, 153, 153],
            [204, 204, 204]
        ]
    );
}

#[test]
fn four_rows_step_by_a_quarter() {
    let c = fill_gradient(
        2,
        4,
        Rgb8::new(0, 0, 0),
        Rgb8::new(200, 200, 200),
        Axis::Vertical,
    );
    let reds: Vec<u8> = column(&c, 1).iter().map(|px| px[0]).collect();
    assert_eq!(reds, vec![0, 50, 100, 150]);
}

#[test]
fn horizontal_golden_values() {
    let c = fill_gradient(
        3,
        2,
        Rgb8::new(10, 20, 30),
        Rgb8::new(30, 20, 10),
        Axis::Horizontal,
    );
    for y in 0..2 {
        assert_eq!(c.pixel(0, y), Some(Rgba8::new(10, 20, 30, 255)));
        assert_eq!(c.pixel(1, y), Some(Rgba8::new(17, 20, 23, 255)));
        assert_eq!(c.pixel(2, y), Some(Rgba8::new(23, 20, 17, 255)));
    }
}

#[test]
fn scene_sized_gradient_follows_the_line_ratio() {
    let a = PaletteColor::DeepBlack.rgb();
    let b = PaletteColor::Charcoal.rgb();
    let c = fill_gradient(1, 1200, a, b, Axis::Vertical);
    for y in 0..1200u32 {
        let want = Rgb8::lerp(a, b, f64::from(y) / 1200.0);
        assert_eq!(c.pixel(0, y), Some(want.opaque()), "row {y}");
    }
    assert_eq!(c.pixel(0, 409), Some(Rgba8::new(22, 25, 34, 255)));
}

#[test]
fn gradient_is_deterministic() {
    let a = Rgb8::new(15, 18, 25);
    let b = Rgb8::new(35, 40, 50);
    for axis in [Axis::Vertical, Axis::Horizontal] {
        let x = fill_gradient(37, 53, a, b, axis);
        let y = fill_gradient(37, 53, a, b, axis);
        assert_eq!(x.data(), y.data());
    }
}

#[test]
fn boundary_lines_match_endpoint_colors() {
    let a = Rgb8::new(15, 18, 25);
    let b = Rgb8::new(220, 225, 230);
    let near = |px: Rgba8, want: Rgb8| {
        px.r.abs_diff(want.r) <= 1 && px.g.abs_diff(want.g) <= 1 && px.b.abs_diff(want.b) <= 1
    };

    let v = fill_gradient(4, 1200, a, b, Axis::Vertical);
    for x in 0..4 {
        assert_eq!(v.pixel(x, 0), Some(a.opaque()));
        assert!(near(v.pixel(x, 1199).unwrap(), b));
    }
    let h = fill_gradient(1200, 4, a, b, Axis::Horizontal);
    for y in 0..4 {
        assert_eq!(h.pixel(0, y), Some(a.opaque()));
        assert!(near(h.pixel(1199, y).unwrap(), b));
    }
}

#[test]
fn rows_are_solid_and_monotonic() {
    let c = fill_gradient(
        16,
        40,
        Rgb8::new(0, 100, 200),
        Rgb8::new(200, 100, 0),
        Axis::Vertical,
    );
    let mut prev_r = 0u8;
    for y in 0..40 {
        let first = c.pixel(0, y).unwrap();
        for x in 1..16 {
            assert_eq!(c.pixel(x, y), Some(first));
        }
        assert!(first.r >= prev_r);
        assert_eq!(first.g, 100);
        prev_r = first.r;
    }
}

#[test]
fn single_line_gradient_is_the_start_color() {
    let c = fill_gradient(
        4,
        1,
        Rgb8::new(1, 2, 3),
        Rgb8::new(9, 9, 9),
        Axis::Vertical,
    );
    assert!(c.pixels().all(|px| px == [1, 2, 3, 255]));
}
