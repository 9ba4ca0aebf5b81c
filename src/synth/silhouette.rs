use rand::Rng;
use smallvec::SmallVec;

use crate::foundation::core::{Point, Rect, Rgb8};
use crate::raster::canvas::Canvas;
use crate::raster::composite::Blend;
use crate::raster::draw::{fill_polygon, fill_rect};
use crate::synth::params::SilhouetteParams;

/// One window of a building's sparse window grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Window {
    pub rect: Rect,
    pub lit: bool,
}

/// A randomly generated building outline plus its windows.
///
/// Only lives for one draw call.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildingSilhouette {
    pub segments: u32,
    pub building_height: i32,
    pub top_y: i32,
    pub baseline: i32,
    /// Closed polygon: base-left, `segments + 1` roofline points, base-right.
    pub outline: SmallVec<[Point; 12]>,
    pub windows: Vec<Window>,
}

impl BuildingSilhouette {
    /// Generate a building spanning `[x, x + width]` standing on `baseline`.
    ///
    /// The height is drawn from `[canvas_height / 4, canvas_height / 2]`.
    pub fn generate<R: Rng + ?Sized>(
        x: i32,
        width: i32,
        canvas_height: u32,
        baseline: i32,
        params: &SilhouetteParams,
        rng: &mut R,
    ) -> Self {
        let h = canvas_height as i32;
        let building_height = rng.random_range(h / 4..=h / 2);
        let top_y = baseline - building_height;

        let segments = rng.random_range(params.segments[0]..=params.segments[1]).max(1);
        let seg_w = f64::from(width) / f64::from(segments);
        let mut outline = SmallVec::<[Point; 12]>::new();
        outline.push(Point::new(f64::from(x), f64::from(baseline)));
        for i in 0..=segments {
            let jitter = rng.random_range(params.roof_jitter[0]..=params.roof_jitter[1]);
            outline.push(Point::new(
                f64::from(x) + f64::from(i) * seg_w,
                f64::from(top_y + jitter),
            ));
        }
        outline.push(Point::new(f64::from(x + width), f64::from(baseline)));

        let windows = Self::window_grid(x, width, top_y, building_height, baseline, params, rng);

        Self {
            segments,
            building_height,
            top_y,
            baseline,
            outline,
            windows,
        }
    }

    fn window_grid<R: Rng + ?Sized>(
        x: i32,
        width: i32,
        top_y: i32,
        building_height: i32,
        baseline: i32,
        params: &SilhouetteParams,
        rng: &mut R,
    ) -> Vec<Window> {
        let rows = rng.random_range(params.window_rows[0]..=params.window_rows[1]).max(1) as i32;
        let cols = rng.random_range(params.window_cols[0]..=params.window_cols[1]).max(1) as i32;
        let [inset_x, inset_y] = params.window_inset.map(|v| v as i32);
        let [ww, wh] = params.window_size.map(|v| v as i32);
        let span_x = (width - 2 * inset_x).max(0);
        let span_y = (building_height - 2 * inset_y).max(0);

        let mut windows = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if !rng.random_bool(params.window_chance) {
                    continue;
                }
                let lit = rng.random_bool(params.lit_chance);
                let wx = x + inset_x + col * span_x / cols;
                let wy = top_y + inset_y + row * span_y / rows;
                if wy + wh > baseline || wx + ww > x + width {
                    continue;
                }
                windows.push(Window {
                    rect: Rect::new(
                        f64::from(wx),
                        f64::from(wy),
                        f64::from(wx + ww),
                        f64::from(wy + wh),
                    ),
                    lit,
                });
            }
        }
        windows
    }

    /// Fill the outline with `color`, then overlay the windows.
    ///
    /// Unlit windows use `color` darkened by `window_darken`; lit ones use `lit_color`.
    pub fn draw(&self, canvas: &mut Canvas, color: Rgb8, params: &SilhouetteParams) {
        fill_polygon(canvas, &self.outline, color.opaque(), Blend::Replace);
        let dark = color.darken(params.window_darken).opaque();
        let lit = params.lit_color.opaque();
        for w in &self.windows {
            fill_rect(canvas, w.rect, if w.lit { lit } else { dark }, Blend::Replace);
        }
    }
}

/// Generate one building and draw it; the silhouette is discarded afterwards.
pub fn render_silhouette<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    x: i32,
    width: i32,
    baseline: i32,
    color: Rgb8,
    params: &SilhouetteParams,
    rng: &mut R,
) {
    let building =
        BuildingSilhouette::generate(x, width, canvas.height(), baseline, params, rng);
    building.draw(canvas, color, params);
}

#[cfg(test)]
#[path = "../../tests/unit/synth/silhouette.rs"]
mod tests;
