use crate::foundation::core::Rgba8;
use crate::foundation::math::mul_div255_u8;
use crate::raster::canvas::{Canvas, ColorMode};

/// How a fill combines with the pixels already on the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    /// Write the RGBA value as-is, alpha included.
    Replace,
    /// Straight-alpha source-over.
    Over,
}

/// Combine `src` into `dst` under `coverage` (0..=255).
pub fn blend(dst: Rgba8, src: Rgba8, coverage: u8, mode: Blend) -> Rgba8 {
    match mode {
        Blend::Replace => replace(dst, src, coverage),
        Blend::Over => over(dst, src, coverage),
    }
}

fn replace(dst: Rgba8, src: Rgba8, coverage: u8) -> Rgba8 {
    if coverage == 255 {
        return src;
    }
    let d = dst.to_array();
    let s = src.to_array();
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = lerp_u8(d[i], s[i], coverage);
    }
    Rgba8::from_array(out)
}

fn over(dst: Rgba8, src: Rgba8, coverage: u8) -> Rgba8 {
    let sa = mul_div255_u8(u16::from(src.a), u16::from(coverage));
    if sa == 0 {
        return dst;
    }
    let inv = 255 - u16::from(sa);
    let da_scaled = u16::from(mul_div255_u8(u16::from(dst.a), inv));
    let out_a = u16::from(sa) + da_scaled;

    let mix = |s: u8, d: u8| -> u8 {
        let num = u32::from(s) * u32::from(sa) + u32::from(d) * u32::from(da_scaled);
        ((num + u32::from(out_a) / 2) / u32::from(out_a)).min(255) as u8
    };
    Rgba8::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        out_a.min(255) as u8,
    )
}

fn lerp_u8(a: u8, b: u8, t: u8) -> u8 {
    let t = u16::from(t);
    let v = mul_div255_u8(u16::from(a), 255 - t) as u16 + mul_div255_u8(u16::from(b), t) as u16;
    v.min(255) as u8
}

/// Paste `src` onto `dst` with its top-left at `(x, y)`, using `src` alpha as the mask.
///
/// Color channels become `src·m + dst·(1−m)`. On RGBA targets alpha is mixed the same way; RGB
/// targets stay opaque.
pub fn paste_masked(dst: &mut Canvas, src: &Canvas, x: i64, y: i64) {
    for sy in 0..src.height() {
        let ty = y + i64::from(sy);
        if ty < 0 || ty >= i64::from(dst.height()) {
            continue;
        }
        for sx in 0..src.width() {
            let tx = x + i64::from(sx);
            if tx < 0 || tx >= i64::from(dst.width()) {
                continue;
            }
            let (Some(s), Some(d)) = (src.pixel(sx, sy), dst.pixel(tx as u32, ty as u32)) else {
                continue;
            };
            if s.a == 0 {
                continue;
            }
            let m = s.a;
            let a = match dst.mode() {
                ColorMode::Rgb => 255,
                ColorMode::Rgba => lerp_u8(d.a, s.a, m),
            };
            let out = Rgba8::new(
                lerp_u8(d.r, s.r, m),
                lerp_u8(d.g, s.g, m),
                lerp_u8(d.b, s.b, m),
                a,
            );
            dst.set_pixel(tx, ty, out);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
