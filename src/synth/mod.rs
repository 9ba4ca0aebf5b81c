//! Procedural generators. Every random choice is drawn from the caller's stream, so a composer
//! given the same parameters and the same stream paints the same pixels.

/// Speaker-label brush stroke.
pub mod brush;
/// Two-color linear gradients.
pub mod gradient;
/// Blurred atmospheric haze bands.
pub mod haze;
/// Per-pixel film grain.
pub mod noise;
/// Stylistic constants.
pub mod params;
/// Layered scene backgrounds.
pub mod scene;
/// Building silhouettes with window grids.
pub mod silhouette;
/// UI texture tiles.
pub mod texture;
