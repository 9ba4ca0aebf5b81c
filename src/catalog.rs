//! The declarative list of images to generate.
//!
//! [`CatalogDef`] is plain data (serializable, built once at startup, never mutated). Resolving it
//! validates every entry into an immutable [`CatalogEntry`]; malformed entries surface as
//! [`RimeError::Config`] before any pixel work happens for them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{AssetKey, AssetKind, Rgb8};
use crate::foundation::error::{RimeError, RimeResult};
use crate::palette::PaletteColor;

/// A color as written in the catalog: a palette name or an `[r, g, b]` tuple.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorDef {
    Named(String),
    Rgb(Vec<i64>),
}

impl ColorDef {
    pub fn named(c: PaletteColor) -> Self {
        Self::Named(c.name().to_string())
    }

    pub fn rgb(r: i64, g: i64, b: i64) -> Self {
        Self::Rgb(vec![r, g, b])
    }

    pub fn resolve(&self) -> RimeResult<Rgb8> {
        match self {
            Self::Named(name) => PaletteColor::from_name(name)
                .map(PaletteColor::rgb)
                .ok_or_else(|| RimeError::config(format!("unknown palette color '{name}'"))),
            Self::Rgb(parts) => match parts.as_slice() {
                &[r, g, b] => Rgb8::try_from_components(r, g, b).ok_or_else(|| {
                    RimeError::config(format!(
                        "color tuple {parts:?} has components outside 0..=255"
                    ))
                }),
                _ => Err(RimeError::config(format!(
                    "color tuple {parts:?} must have exactly 3 components"
                ))),
            },
        }
    }
}

/// Texture synthesis style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextureStyle {
    /// Scattered darker speckles.
    Rough,
    /// Horizontal streaks with notched edges.
    Brushstroke,
    /// Radial vignette with a lit top-left bevel.
    Inventory,
}

impl TextureStyle {
    pub const ALL: [Self; 3] = [Self::Rough, Self::Brushstroke, Self::Inventory];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rough => "rough",
            Self::Brushstroke => "brushstroke",
            Self::Inventory => "inventory",
        }
    }
}

impl FromStr for TextureStyle {
    type Err = RimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| {
                RimeError::config(format!(
                    "unknown texture style '{s}' (expected rough, brushstroke or inventory)"
                ))
            })
    }
}

impl fmt::Display for TextureStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scene entry as written in the catalog. Missing roles fall back to the palette defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sky_top: Option<ColorDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sky_bottom: Option<ColorDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ground_color: Option<ColorDef>,
}

/// Texture entry as written in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureDef {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub base_color: ColorDef,
    pub style: String,
}

/// Brush-stroke label entry as written in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrushDef {
    pub name: String,
    pub color: ColorDef,
}

/// Resolved scene color roles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub name: String,
    pub sky_top: Rgb8,
    pub sky_bottom: Rgb8,
    pub ground: Rgb8,
}

/// Resolved texture parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureSpec {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub base_color: Rgb8,
    pub style: TextureStyle,
}

/// Resolved brush-stroke parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrushSpec {
    pub name: String,
    pub color: Rgb8,
}

impl SceneDef {
    pub fn resolve(&self) -> RimeResult<SceneConfig> {
        let role = |c: &Option<ColorDef>, default: PaletteColor| -> RimeResult<Rgb8> {
            c.as_ref().map_or(Ok(default.rgb()), ColorDef::resolve)
        };
        Ok(SceneConfig {
            name: self.name.clone(),
            sky_top: role(&self.sky_top, PaletteColor::Charcoal)?,
            sky_bottom: role(&self.sky_bottom, PaletteColor::Slate)?,
            ground: role(&self.ground_color, PaletteColor::Ash)?,
        })
    }
}

impl TextureDef {
    pub fn resolve(&self) -> RimeResult<TextureSpec> {
        let style = self.style.parse::<TextureStyle>()?;
        if self.width == 0 || self.height == 0 {
            return Err(RimeError::config(format!(
                "texture '{}' has empty size {}x{}",
                self.name, self.width, self.height
            )));
        }
        Ok(TextureSpec {
            name: self.name.clone(),
            width: self.width,
            height: self.height,
            base_color: self.base_color.resolve()?,
            style,
        })
    }
}

impl BrushDef {
    pub fn resolve(&self) -> RimeResult<BrushSpec> {
        Ok(BrushSpec {
            name: self.name.clone(),
            color: self.color.resolve()?,
        })
    }
}

/// One validated unit of work.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatalogEntry {
    Scene(SceneConfig),
    Texture(TextureSpec),
    Brush(BrushSpec),
}

impl CatalogEntry {
    pub fn key(&self) -> AssetKey {
        match self {
            Self::Scene(s) => AssetKey::new(AssetKind::Background, &s.name),
            Self::Texture(t) => AssetKey::new(AssetKind::Texture, &t.name),
            Self::Brush(b) => AssetKey::new(AssetKind::Texture, &b.name),
        }
    }
}

/// The full declarative catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDef {
    #[serde(default)]
    pub scenes: Vec<SceneDef>,
    #[serde(default)]
    pub textures: Vec<TextureDef>,
    #[serde(default)]
    pub brushes: Vec<BrushDef>,
}

impl CatalogDef {
    /// The fixed catalog: ten scene backgrounds, six UI textures and the speaker brush stroke.
    pub fn builtin() -> Self {
        use PaletteColor::*;

        let n = ColorDef::named;
        let scene = |name: &str, top: ColorDef, bottom: ColorDef, ground: ColorDef| SceneDef {
            name: name.to_string(),
            sky_top: Some(top),
            sky_bottom: Some(bottom),
            ground_color: Some(ground),
        };
        let texture = |name: &str, w: u32, h: u32, base: ColorDef, style: TextureStyle| {
            TextureDef {
                name: name.to_string(),
                width: w,
                height: h,
                base_color: base,
                style: style.as_str().to_string(),
            }
        };

        Self {
            scenes: vec![
                scene("scene_00_home", n(DeepBlack), n(Charcoal), n(Ash)),
                scene("scene_01_street", n(Charcoal), n(Slate), n(Fog)),
                scene(
                    "scene_02_restarea",
                    n(DeepBlack),
                    ColorDef::rgb(50, 40, 35),
                    n(EarthBrown),
                ),
                scene("scene_03_highway", n(Slate), n(Fog), n(SnowWhite)),
                scene(
                    "scene_04_daejeon",
                    ColorDef::rgb(20, 25, 40),
                    n(Charcoal),
                    n(Ash),
                ),
                scene("scene_05_shelter", n(Charcoal), n(Slate), n(EarthBrown)),
                scene("scene_06_gyeongnam", n(Slate), n(Fog), n(SnowWhite)),
                scene("scene_07_busan_outer", n(ColdBlue), n(Slate), n(Ash)),
                scene(
                    "scene_08_sanctuary",
                    n(Charcoal),
                    ColorDef::rgb(60, 70, 90),
                    n(Slate),
                ),
                scene(
                    "scene_09_ending",
                    ColorDef::rgb(80, 70, 60),
                    ColorDef::rgb(120, 100, 80),
                    n(Fog),
                ),
            ],
            textures: vec![
                texture("inv_slot", 64, 64, n(EarthBrown), TextureStyle::Inventory),
                texture(
                    "inv_slot_empty",
                    64,
                    64,
                    ColorDef::rgb(30, 25, 20),
                    TextureStyle::Inventory,
                ),
                texture("btn_texture", 280, 50, n(EarthBrown), TextureStyle::Rough),
                texture("btn_texture_hover", 280, 50, n(Rust), TextureStyle::Rough),
                texture(
                    "soundbox_texture",
                    300,
                    150,
                    ColorDef::rgb(40, 50, 65),
                    TextureStyle::Rough,
                ),
                texture(
                    "textbox_bg",
                    300,
                    200,
                    ColorDef::rgb(10, 12, 18),
                    TextureStyle::Rough,
                ),
            ],
            brushes: vec![BrushDef {
                name: "speaker_brush".to_string(),
                color: n(Rust),
            }],
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len() + self.textures.len() + self.brushes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate every entry, in catalog order: scenes, textures, brushes.
    ///
    /// Each item carries the entry's intended key and either the resolved entry or the
    /// configuration error that rejected it. A key seen twice rejects the later entry.
    pub fn resolve_entries(&self) -> Vec<(AssetKey, RimeResult<CatalogEntry>)> {
        let mut out = Vec::with_capacity(self.len());
        let mut seen = HashSet::new();
        let mut push = |key: AssetKey, entry: RimeResult<CatalogEntry>| {
            let entry = if seen.insert(key.clone()) {
                entry
            } else {
                Err(RimeError::config(format!("duplicate catalog entry '{key}'")))
            };
            out.push((key, entry));
        };

        for s in &self.scenes {
            let key = AssetKey::new(AssetKind::Background, &s.name);
            push(key, s.resolve().map(CatalogEntry::Scene));
        }
        for t in &self.textures {
            let key = AssetKey::new(AssetKind::Texture, &t.name);
            push(key, t.resolve().map(CatalogEntry::Texture));
        }
        for b in &self.brushes {
            let key = AssetKey::new(AssetKind::Texture, &b.name);
            push(key, b.resolve().map(CatalogEntry::Brush));
        }
        out
    }
}

#[cfg(test)]
#[path = "../tests/unit/catalog/catalog.rs"]
mod tests;
