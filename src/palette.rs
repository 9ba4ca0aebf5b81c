//! The fixed "frozen silence" palette shared by every generator.

use crate::foundation::core::Rgb8;

/// Named palette entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    DeepBlack,
    Charcoal,
    Slate,
    Ash,
    Fog,
    SnowWhite,
    EarthBrown,
    Rust,
    Amber,
    ColdBlue,
}

impl PaletteColor {
    pub const ALL: [Self; 10] = [
        Self::DeepBlack,
        Self::Charcoal,
        Self::Slate,
        Self::Ash,
        Self::Fog,
        Self::SnowWhite,
        Self::EarthBrown,
        Self::Rust,
        Self::Amber,
        Self::ColdBlue,
    ];

    pub const fn rgb(self) -> Rgb8 {
        match self {
            Self::DeepBlack => Rgb8::new(15, 18, 25),
            Self::Charcoal => Rgb8::new(35, 40, 50),
            Self::Slate => Rgb8::new(70, 80, 95),
            Self::Ash => Rgb8::new(110, 120, 130),
            Self::Fog => Rgb8::new(160, 170, 180),
            Self::SnowWhite => Rgb8::new(220, 225, 230),
            Self::EarthBrown => Rgb8::new(60, 45, 35),
            Self::Rust => Rgb8::new(90, 60, 45),
            Self::Amber => Rgb8::new(180, 140, 60),
            Self::ColdBlue => Rgb8::new(80, 100, 130),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::DeepBlack => "deep_black",
            Self::Charcoal => "charcoal",
            Self::Slate => "slate",
            Self::Ash => "ash",
            Self::Fog => "fog",
            Self::SnowWhite => "snow_white",
            Self::EarthBrown => "earth_brown",
            Self::Rust => "rust",
            Self::Amber => "amber",
            Self::ColdBlue => "cold_blue",
        }
    }

    /// Resolve a palette entry by its snake_case name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}
