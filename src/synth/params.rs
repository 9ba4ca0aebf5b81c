//! Stylistic constants of every generator.
//!
//! Counts, opacity ranges and jitter amplitudes drive the look, not correctness. They live here as
//! plain data with `Default`s holding the house style so tests and callers can tune them without
//! touching the algorithms. Inclusive ranges are written `[lo, hi]`.

use serde::Serialize;

use crate::foundation::core::Rgb8;
use crate::palette::PaletteColor;

/// Every tunable used by the composers.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StyleConfig {
    pub scene: SceneParams,
    pub texture: TextureParams,
    pub brush: BrushParams,
}

/// Building silhouette generation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SilhouetteParams {
    /// Roofline segment count.
    pub segments: [u32; 2],
    /// Vertical perturbation of each roofline point.
    pub roof_jitter: [i32; 2],
    pub window_rows: [u32; 2],
    pub window_cols: [u32; 2],
    /// Chance that a grid cell gets a window.
    pub window_chance: f64,
    /// Chance that a drawn window is lit.
    pub lit_chance: f64,
    /// Window width and height.
    pub window_size: [u32; 2],
    /// Horizontal and vertical inset of the window grid inside the building.
    pub window_inset: [u32; 2],
    /// Per-channel darkening of unlit windows relative to the building fill.
    pub window_darken: u8,
    pub lit_color: Rgb8,
}

impl Default for SilhouetteParams {
    fn default() -> Self {
        Self {
            segments: [3, 8],
            roof_jitter: [-20, 30],
            window_rows: [3, 8],
            window_cols: [2, 5],
            window_chance: 0.3,
            lit_chance: 0.1,
            window_size: [8, 12],
            window_inset: [10, 20],
            window_darken: 15,
            lit_color: PaletteColor::Amber.rgb(),
        }
    }
}

/// One depth band of buildings in a scene.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DepthBand {
    pub name: &'static str,
    pub count: u32,
    /// Leftmost allowed start x.
    pub x_min: i32,
    /// Rightmost allowed start x, as an offset subtracted from the canvas width.
    pub x_max_inset: i32,
    pub width: [u32; 2],
    /// Baseline relative to the ground line.
    pub baseline_offset: i32,
    pub color: Rgb8,
}

/// Atmospheric haze bands.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HazeParams {
    pub layers: u32,
    pub band_height: u32,
    /// Vertical distance between consecutive layers.
    pub spacing: u32,
    pub base_alpha: u32,
    pub alpha_step: u32,
    pub blur_radius: f32,
    pub color: Rgb8,
}

impl Default for HazeParams {
    fn default() -> Self {
        Self {
            layers: 3,
            band_height: 50,
            spacing: 100,
            base_alpha: 30,
            alpha_step: 20,
            blur_radius: 25.0,
            color: PaletteColor::Fog.rgb(),
        }
    }
}

/// Scene background composition.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SceneParams {
    pub width: u32,
    pub height: u32,
    /// Ground line as a fraction of the height.
    pub ground_ratio: f64,
    /// Solid ground starts this far below the ground line.
    pub ground_fill_offset: u32,
    pub haze: HazeParams,
    pub silhouette: SilhouetteParams,
    /// Drawn back to front.
    pub bands: Vec<DepthBand>,
    pub particle_count: u32,
    pub particle_size: [u32; 2],
    pub particle_color: Rgb8,
    pub grain: u8,
    pub final_blur: f32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            width: 640,
            height: 1200,
            ground_ratio: 0.7,
            ground_fill_offset: 50,
            haze: HazeParams::default(),
            silhouette: SilhouetteParams::default(),
            bands: vec![
                DepthBand {
                    name: "distant",
                    count: 8,
                    x_min: -50,
                    x_max_inset: 0,
                    width: [40, 120],
                    baseline_offset: -50,
                    color: PaletteColor::Charcoal.rgb().lighten(40),
                },
                DepthBand {
                    name: "mid",
                    count: 6,
                    x_min: -30,
                    x_max_inset: 50,
                    width: [60, 150],
                    baseline_offset: 0,
                    color: PaletteColor::Charcoal.rgb(),
                },
                DepthBand {
                    name: "foreground",
                    count: 4,
                    x_min: -20,
                    x_max_inset: 100,
                    width: [80, 200],
                    baseline_offset: 100,
                    color: PaletteColor::DeepBlack.rgb(),
                },
            ],
            particle_count: 200,
            particle_size: [1, 3],
            particle_color: PaletteColor::SnowWhite.rgb(),
            grain: 12,
            final_blur: 0.5,
        }
    }
}

impl SceneParams {
    pub fn ground_y(&self) -> i32 {
        (f64::from(self.height) * self.ground_ratio) as i32
    }
}

/// Speckled "rough" tiles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RoughParams {
    /// One speckle per this many pixels.
    pub density_divisor: u32,
    pub size: [u32; 2],
    pub darkness: [u8; 2],
    pub alpha: u8,
}

impl Default for RoughParams {
    fn default() -> Self {
        Self {
            density_divisor: 20,
            size: [1, 4],
            darkness: [10, 40],
            alpha: 200,
        }
    }
}

/// Horizontal brushstroke tiles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrushstrokeParams {
    pub color_jitter: i32,
    pub alpha: i32,
    pub alpha_jitter: i32,
    pub notches: u32,
    /// Width of the left and right bands notches are carved in.
    pub notch_edge: u32,
    pub notch_radius: u32,
}

impl Default for BrushstrokeParams {
    fn default() -> Self {
        Self {
            color_jitter: 15,
            alpha: 200,
            alpha_jitter: 30,
            notches: 50,
            notch_edge: 10,
            notch_radius: 5,
        }
    }
}

/// Radially shaded inventory slots.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct InventoryParams {
    /// Darkening at the corners; zero at the centre.
    pub max_darkness: f64,
    pub dither: i32,
    /// Number of diagonals in the top-left highlight.
    pub highlight_len: u32,
    pub highlight_alpha: f64,
    pub highlight_color: Rgb8,
}

impl Default for InventoryParams {
    fn default() -> Self {
        Self {
            max_darkness: 30.0,
            dither: 5,
            highlight_len: 20,
            highlight_alpha: 30.0,
            highlight_color: PaletteColor::Fog.rgb(),
        }
    }
}

/// UI texture tiles.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextureParams {
    pub grain: u8,
    pub rough: RoughParams,
    pub brushstroke: BrushstrokeParams,
    pub inventory: InventoryParams,
}

impl Default for TextureParams {
    fn default() -> Self {
        Self {
            grain: 8,
            rough: RoughParams::default(),
            brushstroke: BrushstrokeParams::default(),
            inventory: InventoryParams::default(),
        }
    }
}

/// Standalone speaker-label brush stroke.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BrushParams {
    pub width: u32,
    pub height: u32,
    /// Rows skipped at the top and bottom.
    pub row_margin: u32,
    /// Horizontal margin the span bounds start from.
    pub edge_margin: f64,
    /// How far the span widens at the widest row.
    pub taper: f64,
    pub edge_jitter: i32,
    pub color_jitter: i32,
    pub alpha: f64,
    pub alpha_jitter: i32,
    pub dots: u32,
    /// Horizontal and vertical inset of the dot area.
    pub dot_inset: [u32; 2],
    pub dot_size: [u32; 2],
    pub dot_jitter: i32,
    pub dot_alpha: u8,
}

impl Default for BrushParams {
    fn default() -> Self {
        Self {
            width: 200,
            height: 40,
            row_margin: 5,
            edge_margin: 10.0,
            taper: 8.0,
            edge_jitter: 2,
            color_jitter: 10,
            alpha: 220.0,
            alpha_jitter: 20,
            dots: 100,
            dot_inset: [15, 8],
            dot_size: [1, 3],
            dot_jitter: 20,
            dot_alpha: 180,
        }
    }
}
