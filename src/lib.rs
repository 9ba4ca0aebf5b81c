//! Rimefall is a procedural generator for the raster art of a bleak, snow-bound survival story.
//!
//! A fixed catalog of scene backgrounds, UI texture tiles and a speaker-label brush stroke is
//! synthesized from randomized primitives and written out as optimized PNGs:
//!
//! - Resolve a [`CatalogDef`] into validated entries
//! - Run a [`CatalogDriver`] over it with a [`StyleConfig`]
//! - Persist through an [`AssetSink`] such as [`PngDirSink`]
#![forbid(unsafe_code)]

mod foundation;

/// Declarative image catalog and its validation.
pub mod catalog;
/// Catalog generation driver.
pub mod driver;
/// PNG encoding and asset sinks.
pub mod encode;
/// Fixed named colors.
pub mod palette;
/// Pixel buffer and drawing primitives.
pub mod raster;
/// Procedural generators.
pub mod synth;

pub use crate::foundation::core::{AssetKey, AssetKind, Axis, Point, Rect, Rgb8, Rgba8};
pub use crate::foundation::error::{RimeError, RimeResult};
pub use crate::foundation::math::{SynthRng, entry_rng, entry_seed};

pub use crate::catalog::{
    BrushDef, BrushSpec, CatalogDef, CatalogEntry, ColorDef, SceneConfig, SceneDef, TextureDef,
    TextureSpec, TextureStyle,
};
pub use crate::driver::{
    CatalogDriver, DEFAULT_SEED, GenerateOpts, RunReport, SkippedEntry, generate_catalog,
};
pub use crate::encode::png::encode_png;
pub use crate::encode::sink::{AssetSink, InMemorySink, PngDirSink};
pub use crate::palette::PaletteColor;
pub use crate::raster::canvas::{Canvas, ColorMode};
pub use crate::synth::params::StyleConfig;
