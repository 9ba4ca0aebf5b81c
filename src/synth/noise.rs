use rand::Rng;

use crate::foundation::core::clamp_channel;
use crate::raster::canvas::Canvas;

/// Film grain: shift each pixel's R, G and B by one shared random delta in
/// `[-intensity, intensity]`, clamped to `0..=255`. Alpha passes through.
pub fn add_grain<R: Rng + ?Sized>(canvas: &mut Canvas, intensity: u8, rng: &mut R) {
    if intensity == 0 {
        return;
    }
    let i = i32::from(intensity);
    for px in canvas.pixels_mut() {
        let delta = rng.random_range(-i..=i);
        for c in &mut px[..3] {
            *c = clamp_channel(i32::from(*c) + delta);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/noise.rs"]
mod tests;
