use std::fs;
use std::path::{Path, PathBuf};

use crate::encode::png::encode_png;
use crate::foundation::core::{AssetKey, AssetKind};
use crate::foundation::error::{RimeError, RimeResult};
use crate::raster::canvas::Canvas;

/// Sink contract for consuming finished assets.
///
/// `begin` is called once before the first `write`, `end` once after the last. Each key is written
/// at most once per run.
pub trait AssetSink: Send {
    /// Called once before any asset is written.
    fn begin(&mut self) -> RimeResult<()>;
    /// Persist one finished canvas under `key`.
    fn write(&mut self, key: &AssetKey, canvas: &Canvas) -> RimeResult<()>;
    /// Called once after the last asset is written.
    fn end(&mut self) -> RimeResult<()>;
}

/// Writes `<root>/backgrounds/<name>.png` and `<root>/textures/<name>.png`.
///
/// Files are encoded fully in memory, written to a sibling temp file and renamed into place, so a
/// failed write never leaves a truncated PNG behind.
#[derive(Debug)]
pub struct PngDirSink {
    root: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            written: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Destination path of `key`.
    pub fn path_for(&self, key: &AssetKey) -> PathBuf {
        self.root.join(key.kind.dir_name()).join(key.file_name())
    }

    /// Paths written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl AssetSink for PngDirSink {
    fn begin(&mut self) -> RimeResult<()> {
        for kind in [AssetKind::Background, AssetKind::Texture] {
            let dir = self.root.join(kind.dir_name());
            fs::create_dir_all(&dir).map_err(|e| RimeError::io(&dir, e))?;
        }
        self.written.clear();
        Ok(())
    }

    fn write(&mut self, key: &AssetKey, canvas: &Canvas) -> RimeResult<()> {
        let bytes = encode_png(canvas)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("png.part");

        fs::write(&tmp, &bytes).map_err(|e| RimeError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(RimeError::io(&path, e));
        }

        tracing::info!(path = %path.display(), bytes = bytes.len(), "saved");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> RimeResult<()> {
        tracing::debug!(count = self.written.len(), "png sink finished");
        Ok(())
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    began: bool,
    ended: bool,
    pub(crate) assets: Vec<(AssetKey, Canvas)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured assets in write order.
    pub fn assets(&self) -> &[(AssetKey, Canvas)] {
        &self.assets
    }

    pub fn get(&self, key: &AssetKey) -> Option<&Canvas> {
        self.assets.iter().find(|(k, _)| k == key).map(|(_, c)| c)
    }

    /// Whether `begin` and `end` were both called.
    pub fn finished(&self) -> bool {
        self.began && self.ended
    }
}

impl AssetSink for InMemorySink {
    fn begin(&mut self) -> RimeResult<()> {
        self.began = true;
        self.ended = false;
        self.assets.clear();
        Ok(())
    }

    fn write(&mut self, key: &AssetKey, canvas: &Canvas) -> RimeResult<()> {
        self.assets.push((key.clone(), canvas.clone()));
        Ok(())
    }

    fn end(&mut self) -> RimeResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
