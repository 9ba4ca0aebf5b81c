use crate::foundation::core::{Axis, Point, Rgb8};
use crate::raster::canvas::{Canvas, ColorMode};
use crate::raster::composite::Blend;
use crate::raster::draw::draw_line;

/// Fill a new opaque canvas with a linear blend from `from` to `to` along `axis`.
///
/// Line `i` of `n` gets `round(from·(1−t) + to·t)` with `t = i / n`. The first line is exactly
/// `from`; the last stops one step short of `to`. Deterministic: no randomness is involved.
pub fn fill_gradient(width: u32, height: u32, from: Rgb8, to: Rgb8, axis: Axis) -> Canvas {
    let mut canvas = Canvas::new(width, height, ColorMode::Rgb, from.opaque());
    let n = match axis {
        Axis::Vertical => height,
        Axis::Horizontal => width,
    };
    let steps = f64::from(n.max(1));

    for i in 0..n {
        let t = f64::from(i) / steps;
        let color = Rgb8::lerp(from, to, t).opaque();
        let p = f64::from(i);
        let (a, b) = match axis {
            Axis::Vertical => (Point::new(0.0, p), Point::new(f64::from(width), p)),
            Axis::Horizontal => (Point::new(p, 0.0), Point::new(p, f64::from(height))),
        };
        draw_line(&mut canvas, a, b, color, Blend::Replace);
    }
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/synth/gradient.rs"]
mod tests;
