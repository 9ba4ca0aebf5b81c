use std::fmt;

pub use kurbo::{Point, Rect};

/// Opaque 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from wide components, rejecting anything outside `0..=255`.
    pub fn try_from_components(r: i64, g: i64, b: i64) -> Option<Self> {
        let c = |v: i64| u8::try_from(v).ok();
        Some(Self::new(c(r)?, c(g)?, c(b)?))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Add the same signed delta to every channel, clamping to `0..=255`.
    pub fn offset(self, delta: i32) -> Self {
        self.offset_each([delta; 3])
    }

    /// Add a per-channel signed delta, clamping to `0..=255`.
    pub fn offset_each(self, delta: [i32; 3]) -> Self {
        Self::new(
            clamp_channel(i32::from(self.r) + delta[0]),
            clamp_channel(i32::from(self.g) + delta[1]),
            clamp_channel(i32::from(self.b) + delta[2]),
        )
    }

    /// Subtract `amount` from every channel, flooring at 0.
    pub fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
        )
    }

    /// Add `amount` to every channel, capping at 255.
    pub fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
        )
    }

    pub fn with_alpha(self, a: u8) -> Rgba8 {
        Rgba8::new(self.r, self.g, self.b, a)
    }

    pub fn opaque(self) -> Rgba8 {
        self.with_alpha(255)
    }

    /// Linear interpolation `a·(1−t) + b·t`, rounded per channel.
    pub fn lerp(a: Self, b: Self, t: f64) -> Self {
        let mix = |x: u8, y: u8| -> u8 {
            let v = f64::from(x) * (1.0 - t) + f64::from(y) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Straight (non-premultiplied) RGBA8 color; `a == 255` is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(self) -> Rgb8 {
        Rgb8::new(self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_array(px: [u8; 4]) -> Self {
        Self::new(px[0], px[1], px[2], px[3])
    }
}

/// Clamp a widened channel value back into `0..=255`.
pub fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Direction along which a gradient varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// One solid color per row; color varies top to bottom.
    Vertical,
    /// One solid color per column; color varies left to right.
    Horizontal,
}

/// Which output directory an asset lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Background,
    Texture,
}

impl AssetKind {
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Background => "backgrounds",
            Self::Texture => "textures",
        }
    }
}

/// Catalog key of one generated image.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub kind: AssetKind,
    pub name: String,
}

impl AssetKey {
    pub fn new(kind: AssetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.png", self.name)
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind.dir_name(), self.file_name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
