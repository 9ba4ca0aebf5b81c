//! Raster primitives consumed by the generators: the pixel buffer, shape fills, Gaussian blur
//! and compositing.

/// Separable Gaussian blur.
pub mod blur;
/// Pixel buffer.
pub mod canvas;
/// Per-pixel blending and masked paste.
pub mod composite;
/// Rectangle, ellipse, polygon and line fills.
pub mod draw;
