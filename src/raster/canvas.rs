use crate::foundation::core::Rgba8;

/// Channel layout a canvas is persisted with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Opaque image; alpha is pinned at 255 and dropped on encode.
    Rgb,
    /// Image with a meaningful alpha channel.
    Rgba,
}

/// Mutable 2D pixel buffer: straight RGBA8, tightly packed, row-major.
///
/// Width and height are fixed for the canvas lifetime. In [`ColorMode::Rgb`] every write keeps
/// alpha at 255.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    mode: ColorMode,
    data: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas filled with `fill`.
    pub fn new(width: u32, height: u32, mode: ColorMode, fill: Rgba8) -> Self {
        let fill = match mode {
            ColorMode::Rgb => Rgba8 { a: 255, ..fill },
            ColorMode::Rgba => fill,
        };
        let n = (width as usize).saturating_mul(height as usize);
        Self {
            width,
            height,
            mode,
            data: fill.to_array().repeat(n),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    /// Raw straight RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < i64::from(self.width) && y < i64::from(self.height)
    }

    /// Read one pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Write one pixel; writes outside the canvas are dropped.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: Rgba8) {
        if !self.contains(x, y) {
            return;
        }
        let px = match self.mode {
            ColorMode::Rgb => Rgba8 { a: 255, ..px },
            ColorMode::Rgba => px,
        };
        let i = self.index(x as u32, y as u32);
        self.data[i..i + 4].copy_from_slice(&px.to_array());
    }

    /// Iterate over pixels as mutable 4-byte RGBA slices in row-major order.
    pub fn pixels_mut(&mut self) -> std::slice::ChunksExactMut<'_, u8> {
        self.data.chunks_exact_mut(4)
    }

    /// Iterate over pixels as 4-byte RGBA slices in row-major order.
    pub fn pixels(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(4)
    }

    /// Packed bytes in the canvas' persisted layout (RGB8 or RGBA8).
    pub fn encoded_bytes(&self) -> Vec<u8> {
        match self.mode {
            ColorMode::Rgba => self.data.clone(),
            ColorMode::Rgb => {
                let mut out = Vec::with_capacity(self.data.len() / 4 * 3);
                for px in self.data.chunks_exact(4) {
                    out.extend_from_slice(&px[..3]);
                }
                out
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
