use rand::Rng;

use crate::catalog::SceneConfig;
use crate::foundation::core::{Axis, Rgba8};
use crate::foundation::error::RimeResult;
use crate::raster::blur::gaussian_blur;
use crate::raster::canvas::{Canvas, ColorMode};
use crate::raster::composite::Blend;
use crate::raster::draw::{fill_ellipse, fill_rect, inclusive_rect};
use crate::synth::gradient::fill_gradient;
use crate::synth::haze::composite_haze;
use crate::synth::noise::add_grain;
use crate::synth::params::{DepthBand, SceneParams};
use crate::synth::silhouette::render_silhouette;

/// Stages of a scene background, in the only order they ever run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneStage {
    Sky,
    Haze,
    DistantBuildings,
    MidBuildings,
    ForegroundBuildings,
    Ground,
    Particles,
    Grain,
    SoftBlur,
}

impl SceneStage {
    pub const PIPELINE: [Self; 9] = [
        Self::Sky,
        Self::Haze,
        Self::DistantBuildings,
        Self::MidBuildings,
        Self::ForegroundBuildings,
        Self::Ground,
        Self::Particles,
        Self::Grain,
        Self::SoftBlur,
    ];

    /// Index into [`SceneParams::bands`] for building stages.
    fn band_index(self) -> Option<usize> {
        match self {
            Self::DistantBuildings => Some(0),
            Self::MidBuildings => Some(1),
            Self::ForegroundBuildings => Some(2),
            _ => None,
        }
    }
}

/// Builds one scene background from a [`SceneConfig`].
#[derive(Clone, Copy, Debug)]
pub struct SceneComposer<'a> {
    params: &'a SceneParams,
}

impl<'a> SceneComposer<'a> {
    pub fn new(params: &'a SceneParams) -> Self {
        Self { params }
    }

    /// Run every [`SceneStage`] in order and return the finished, opaque canvas.
    #[tracing::instrument(skip_all, fields(scene = %config.name))]
    pub fn compose<R: Rng + ?Sized>(&self, config: &SceneConfig, rng: &mut R) -> RimeResult<Canvas> {
        let p = self.params;
        let mut canvas = Canvas::new(p.width, p.height, ColorMode::Rgb, config.sky_top.opaque());
        for stage in SceneStage::PIPELINE {
            tracing::debug!(?stage, "scene stage");
            self.apply(stage, &mut canvas, config, rng)?;
        }
        Ok(canvas)
    }

    fn apply<R: Rng + ?Sized>(
        &self,
        stage: SceneStage,
        canvas: &mut Canvas,
        config: &SceneConfig,
        rng: &mut R,
    ) -> RimeResult<()> {
        let p = self.params;
        match stage {
            SceneStage::Sky => {
                *canvas = fill_gradient(
                    p.width,
                    p.height,
                    config.sky_top,
                    config.sky_bottom,
                    Axis::Vertical,
                );
            }
            SceneStage::Haze => composite_haze(canvas, &p.haze)?,
            SceneStage::DistantBuildings
            | SceneStage::MidBuildings
            | SceneStage::ForegroundBuildings => {
                if let Some(band) = stage.band_index().and_then(|i| p.bands.get(i)) {
                    self.draw_band(canvas, band, rng);
                }
            }
            SceneStage::Ground => {
                let top = p.ground_y() + p.ground_fill_offset as i32;
                let rect = inclusive_rect(0, top, p.width as i32, p.height as i32);
                fill_rect(canvas, rect, config.ground.opaque(), Blend::Replace);
            }
            SceneStage::Particles => self.scatter_particles(canvas, rng),
            SceneStage::Grain => add_grain(canvas, p.grain, rng),
            SceneStage::SoftBlur => gaussian_blur(canvas, p.final_blur)?,
        }
        Ok(())
    }

    fn draw_band<R: Rng + ?Sized>(&self, canvas: &mut Canvas, band: &DepthBand, rng: &mut R) {
        let p = self.params;
        let baseline = p.ground_y() + band.baseline_offset;
        let x_max = (p.width as i32 - band.x_max_inset).max(band.x_min);
        for _ in 0..band.count {
            let x = rng.random_range(band.x_min..=x_max);
            let w = rng.random_range(band.width[0]..=band.width[1]) as i32;
            render_silhouette(canvas, x, w, baseline, band.color, &p.silhouette, rng);
        }
    }

    fn scatter_particles<R: Rng + ?Sized>(&self, canvas: &mut Canvas, rng: &mut R) {
        let p = self.params;
        let color: Rgba8 = p.particle_color.opaque();
        for _ in 0..p.particle_count {
            let x = rng.random_range(0..=p.width as i32);
            let y = rng.random_range(0..=p.height as i32);
            let size = rng.random_range(p.particle_size[0]..=p.particle_size[1]) as i32;
            fill_ellipse(canvas, inclusive_rect(x, y, x + size, y + size), color, Blend::Replace);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/scene.rs"]
mod tests;
