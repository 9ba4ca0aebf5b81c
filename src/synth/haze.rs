use crate::foundation::error::RimeResult;
use crate::raster::blur::gaussian_blur;
use crate::raster::canvas::{Canvas, ColorMode};
use crate::raster::composite::paste_masked;
use crate::synth::params::HazeParams;

/// One translucent fog band of a scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HazeLayer {
    /// Row where the unblurred band starts.
    pub y: i64,
    pub alpha: u8,
    pub blur_radius: f32,
}

impl HazeLayer {
    /// Layer `index` sits at `height / 3 + index·spacing` with alpha `base + index·step`.
    pub fn for_index(index: u32, canvas_height: u32, params: &HazeParams) -> Self {
        let y = i64::from(canvas_height / 3) + i64::from(index) * i64::from(params.spacing);
        let alpha = (params.base_alpha + index * params.alpha_step).min(255) as u8;
        Self {
            y,
            alpha,
            blur_radius: params.blur_radius,
        }
    }

    /// Transparent margin kept above and below the band so the blur can feather its edges.
    pub fn padding(&self) -> u32 {
        (3.0 * self.blur_radius.max(0.0)).ceil() as u32
    }

    /// Render the blurred strip, `width` wide, with the band `padding()` rows from the top.
    pub fn render(&self, width: u32, params: &HazeParams) -> RimeResult<Canvas> {
        let pad = self.padding();
        let rows = params.band_height + 2 * pad;

        // The strip is uniform along x and the blur clamps at the edges, so blurring a single
        // column and repeating it is exact.
        let mut column = Canvas::new(1, rows, ColorMode::Rgba, params.color.with_alpha(0));
        for y in pad..pad + params.band_height {
            column.set_pixel(0, i64::from(y), params.color.with_alpha(self.alpha));
        }
        gaussian_blur(&mut column, self.blur_radius)?;

        let mut strip = Canvas::new(width, rows, ColorMode::Rgba, params.color.with_alpha(0));
        for y in 0..rows {
            let Some(px) = column.pixel(0, y) else {
                continue;
            };
            for x in 0..width {
                strip.set_pixel(i64::from(x), i64::from(y), px);
            }
        }
        Ok(strip)
    }

    pub fn composite_onto(&self, canvas: &mut Canvas, params: &HazeParams) -> RimeResult<()> {
        let strip = self.render(canvas.width(), params)?;
        paste_masked(canvas, &strip, 0, self.y - i64::from(self.padding()));
        Ok(())
    }
}

/// Composite every haze layer, back to front, onto `canvas`.
pub fn composite_haze(canvas: &mut Canvas, params: &HazeParams) -> RimeResult<()> {
    for index in 0..params.layers {
        HazeLayer::for_index(index, canvas.height(), params).composite_onto(canvas, params)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/synth/haze.rs"]
mod tests;
