use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder};

use crate::foundation::error::{RimeError, RimeResult};
use crate::raster::canvas::{Canvas, ColorMode};

/// Encode a canvas as an optimized PNG in its persisted layout.
///
/// [`ColorMode::Rgb`] canvases become 8-bit RGB files, [`ColorMode::Rgba`] canvases 8-bit RGBA.
pub fn encode_png(canvas: &Canvas) -> RimeResult<Vec<u8>> {
    let color = match canvas.mode() {
        ColorMode::Rgb => ExtendedColorType::Rgb8,
        ColorMode::Rgba => ExtendedColorType::Rgba8,
    };
    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, CompressionType::Best, FilterType::Adaptive)
        .write_image(&canvas.encoded_bytes(), canvas.width(), canvas.height(), color)
        .map_err(|e| RimeError::encode(format!("png encode failed: {e}")))?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
