use rand::Rng;

use crate::catalog::{TextureSpec, TextureStyle};
use crate::foundation::core::{Point, Rgb8, Rgba8, clamp_channel};
use crate::raster::canvas::{Canvas, ColorMode};
use crate::raster::composite::Blend;
use crate::raster::draw::{draw_line, fill_ellipse, inclusive_rect};
use crate::synth::noise::add_grain;
use crate::synth::params::{BrushstrokeParams, InventoryParams, RoughParams, TextureParams};

/// Builds one UI texture tile from a [`TextureSpec`].
#[derive(Clone, Copy, Debug)]
pub struct TextureComposer<'a> {
    params: &'a TextureParams,
}

impl<'a> TextureComposer<'a> {
    pub fn new(params: &'a TextureParams) -> Self {
        Self { params }
    }

    /// Fill with the opaque base color, apply the style, finish with grain.
    #[tracing::instrument(skip_all, fields(texture = %spec.name, style = %spec.style))]
    pub fn compose<R: Rng + ?Sized>(&self, spec: &TextureSpec, rng: &mut R) -> Canvas {
        let mut canvas = Canvas::new(
            spec.width,
            spec.height,
            ColorMode::Rgba,
            spec.base_color.opaque(),
        );
        match spec.style {
            TextureStyle::Rough => rough(&mut canvas, spec.base_color, &self.params.rough, rng),
            TextureStyle::Brushstroke => {
                brushstroke(&mut canvas, spec.base_color, &self.params.brushstroke, rng)
            }
            TextureStyle::Inventory => {
                inventory(&mut canvas, spec.base_color, &self.params.inventory, rng)
            }
        }
        add_grain(&mut canvas, self.params.grain, rng);
        canvas
    }
}

fn rough<R: Rng + ?Sized>(canvas: &mut Canvas, base: Rgb8, p: &RoughParams, rng: &mut R) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    let count = canvas.width() * canvas.height() / p.density_divisor.max(1);
    for _ in 0..count {
        let x = rng.random_range(0..w);
        let y = rng.random_range(0..h);
        let darkness = rng.random_range(p.darkness[0]..=p.darkness[1]);
        let size = rng.random_range(p.size[0]..=p.size[1]) as i32;
        let color = base.darken(darkness).with_alpha(p.alpha);
        fill_ellipse(
            canvas,
            inclusive_rect(x, y, x + size, y + size),
            color,
            Blend::Replace,
        );
    }
}

fn brushstroke<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    base: Rgb8,
    p: &BrushstrokeParams,
    rng: &mut R,
) {
    let (w, h) = (canvas.width() as i32, canvas.height() as i32);
    for y in 0..h {
        let variation = rng.random_range(-p.color_jitter..=p.color_jitter);
        let alpha = clamp_channel(p.alpha + rng.random_range(-p.alpha_jitter..=p.alpha_jitter));
        let yf = f64::from(y);
        draw_line(
            canvas,
            Point::new(0.0, yf),
            Point::new(f64::from(w), yf),
            base.offset(variation).with_alpha(alpha),
            Blend::Replace,
        );
    }

    let edge = p.notch_edge as i32;
    let r = p.notch_radius as i32;
    for _ in 0..p.notches {
        let x = if rng.random_bool(0.5) {
            rng.random_range(0..=edge)
        } else {
            rng.random_range((w - edge).max(0)..=w)
        };
        let y = rng.random_range(0..=h);
        fill_ellipse(
            canvas,
            inclusive_rect(x - r, y - r, x + r, y + r),
            Rgba8::TRANSPARENT,
            Blend::Replace,
        );
    }
}

/// Normalized distance of `(x, y)` from the tile centre: 0 at the centre, 1 at the corners.
///
/// The centre is `((w−1)/2, (h−1)/2)`, so the value is identical for a pixel and its 180°
/// rotation.
pub fn radial_falloff(x: u32, y: u32, width: u32, height: u32) -> f64 {
    let cx = f64::from(width.saturating_sub(1)) / 2.0;
    let cy = f64::from(height.saturating_sub(1)) / 2.0;
    let max = cx.hypot(cy);
    if max <= 0.0 {
        return 0.0;
    }
    (f64::from(x) - cx).hypot(f64::from(y) - cy) / max
}

fn inventory<R: Rng + ?Sized>(canvas: &mut Canvas, base: Rgb8, p: &InventoryParams, rng: &mut R) {
    let (w, h) = (canvas.width(), canvas.height());
    for y in 0..h {
        for x in 0..w {
            let darkness = (p.max_darkness * radial_falloff(x, y, w, h)) as i32;
            let mut shade = |c: u8| {
                clamp_channel(i32::from(c) - darkness + rng.random_range(-p.dither..=p.dither))
            };
            let px = Rgba8::new(shade(base.r), shade(base.g), shade(base.b), 255);
            canvas.set_pixel(i64::from(x), i64::from(y), px);
        }
    }

    let len = p.highlight_len.max(1);
    for i in 0..p.highlight_len {
        let alpha = (p.highlight_alpha * (1.0 - f64::from(i) / f64::from(len))) as u8;
        let i = f64::from(i);
        draw_line(
            canvas,
            Point::new(i, 0.0),
            Point::new(0.0, i),
            p.highlight_color.with_alpha(alpha),
            Blend::Over,
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/texture.rs"]
mod tests;
