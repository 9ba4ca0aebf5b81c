use std::f64::consts::PI;

use rand::Rng;

use crate::catalog::BrushSpec;
use crate::foundation::core::{Point, Rgba8, clamp_channel};
use crate::raster::canvas::{Canvas, ColorMode};
use crate::raster::composite::Blend;
use crate::raster::draw::{draw_line, fill_ellipse, inclusive_rect};
use crate::synth::params::BrushParams;

/// Swell of the stroke at fractional height `progress`: 0.7 at the ends, 1.0 in the middle.
pub fn stroke_wave(progress: f64) -> f64 {
    (progress * PI).sin() * 0.3 + 0.7
}

/// Paints the translucent speaker-label brush stroke.
#[derive(Clone, Copy, Debug)]
pub struct BrushStrokeComposer<'a> {
    params: &'a BrushParams,
}

impl<'a> BrushStrokeComposer<'a> {
    pub fn new(params: &'a BrushParams) -> Self {
        Self { params }
    }

    #[tracing::instrument(skip_all, fields(brush = %spec.name))]
    pub fn compose<R: Rng + ?Sized>(&self, spec: &BrushSpec, rng: &mut R) -> Canvas {
        let p = self.params;
        let mut canvas = Canvas::new(p.width, p.height, ColorMode::Rgba, Rgba8::TRANSPARENT);
        let (w, h) = (f64::from(p.width), f64::from(p.height));

        for y in p.row_margin..p.height.saturating_sub(p.row_margin) {
            let wave = stroke_wave(f64::from(y) / h);
            let start_jitter = rng.random_range(-p.edge_jitter..=p.edge_jitter);
            let end_jitter = rng.random_range(-p.edge_jitter..=p.edge_jitter);
            let start = (p.edge_margin - wave * p.taper + f64::from(start_jitter)) as i32;
            let end = (w - p.edge_margin + wave * p.taper + f64::from(end_jitter)) as i32;

            let variation = rng.random_range(-p.color_jitter..=p.color_jitter);
            let alpha = clamp_channel(
                (p.alpha * wave) as i32 + rng.random_range(-p.alpha_jitter..=p.alpha_jitter),
            );
            let yf = f64::from(y);
            draw_line(
                &mut canvas,
                Point::new(f64::from(start), yf),
                Point::new(f64::from(end), yf),
                spec.color.offset(variation).with_alpha(alpha),
                Blend::Replace,
            );
        }

        let [ix, iy] = p.dot_inset.map(|v| v as i32);
        let (wi, hi) = (p.width as i32, p.height as i32);
        for _ in 0..p.dots {
            let x = rng.random_range(ix..=(wi - ix).max(ix));
            let y = rng.random_range(iy..=(hi - iy).max(iy));
            let size = rng.random_range(p.dot_size[0]..=p.dot_size[1]) as i32;
            let variation = rng.random_range(-p.dot_jitter..=p.dot_jitter);
            fill_ellipse(
                &mut canvas,
                inclusive_rect(x, y, x + size, y + size),
                spec.color.offset(variation).with_alpha(p.dot_alpha),
                Blend::Replace,
            );
        }
        canvas
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/brush.rs"]
mod tests;
