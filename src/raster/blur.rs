use crate::foundation::core::Axis;
use crate::foundation::error::{RimeError, RimeResult};
use crate::foundation::math::mul_div255_u8;
use crate::raster::canvas::{Canvas, ColorMode};

/// Gaussian-blur a canvas in place.
///
/// `sigma` is the blur radius in pixels; the kernel spans `ceil(3·sigma)` pixels each side and
/// samples are clamped at the canvas edges. RGBA canvases are blurred premultiplied so
/// transparent pixels do not bleed their (meaningless) color.
pub fn gaussian_blur(canvas: &mut Canvas, sigma: f32) -> RimeResult<()> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(RimeError::render("blur sigma must be finite and >= 0"));
    }
    if sigma == 0.0 || canvas.width() == 0 || canvas.height() == 0 {
        return Ok(());
    }
    let kernel = Kernel::gaussian(sigma)?;
    let (w, h) = (canvas.width() as usize, canvas.height() as usize);
    let premul = canvas.mode() == ColorMode::Rgba;

    if premul {
        premultiply_in_place(canvas.data_mut());
    }
    let mut along_x = vec![0u8; canvas.data().len()];
    convolve(canvas.data(), &mut along_x, w, h, Axis::Horizontal, &kernel);
    convolve(&along_x, canvas.data_mut(), w, h, Axis::Vertical, &kernel);
    if premul {
        unpremultiply_in_place(canvas.data_mut());
    }
    Ok(())
}

/// Symmetric 1-D kernel with Q16 taps summing to exactly `1 << 16`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Kernel {
    radius: usize,
    taps: Vec<u32>,
}

impl Kernel {
    const ONE: i64 = 1 << 16;

    pub(crate) fn gaussian(sigma: f32) -> RimeResult<Self> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(RimeError::render("gaussian kernel needs sigma > 0"));
        }
        let sigma = f64::from(sigma);
        let radius = (3.0 * sigma).ceil().max(1.0) as usize;
        let falloff = |d: usize| {
            let d = d as f64;
            (-(d * d) / (2.0 * sigma * sigma)).exp()
        };
        let total: f64 = (0..=2 * radius).map(|i| falloff(i.abs_diff(radius))).sum();

        let mut taps: Vec<u32> = (0..=2 * radius)
            .map(|i| (falloff(i.abs_diff(radius)) / total * Self::ONE as f64).round() as u32)
            .collect();
        // Rounding drift goes to the centre tap.
        let drift = Self::ONE - taps.iter().map(|&t| i64::from(t)).sum::<i64>();
        taps[radius] = (i64::from(taps[radius]) + drift).clamp(0, Self::ONE) as u32;
        Ok(Self { radius, taps })
    }
}

/// One blur pass over packed RGBA8 lines running along `axis`, clamping at line ends.
fn convolve(src: &[u8], dst: &mut [u8], width: usize, height: usize, axis: Axis, k: &Kernel) {
    let row = width * 4;
    // (samples per line, number of lines, sample stride, line stride) in bytes.
    let (len, lines, step, line_step) = match axis {
        Axis::Horizontal => (width, height, 4, row),
        Axis::Vertical => (height, width, row, 4),
    };
    for line in 0..lines {
        let base = line * line_step;
        for i in 0..len {
            let mut acc = [0u64; 4];
            for (t, &weight) in k.taps.iter().enumerate() {
                let j = (i + t).saturating_sub(k.radius).min(len - 1);
                let px = &src[base + j * step..base + j * step + 4];
                for (a, &v) in acc.iter_mut().zip(px) {
                    *a += u64::from(weight) * u64::from(v);
                }
            }
            let at = base + i * step;
            for (out, a) in dst[at..at + 4].iter_mut().zip(acc) {
                *out = ((a + 0x8000) >> 16).min(255) as u8;
            }
        }
    }
}

fn premultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = mul_div255_u8(u16::from(*c), a);
        }
    }
}

fn unpremultiply_in_place(data: &mut [u8]) {
    for px in data.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/blur.rs"]
mod tests;
