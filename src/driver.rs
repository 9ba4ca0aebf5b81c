//! Catalog driver: resolve the catalog, synthesize every valid entry, persist it through an
//! [`AssetSink`] and report what was written and what was skipped.

use rayon::prelude::*;

use crate::catalog::{CatalogDef, CatalogEntry};
use crate::encode::sink::AssetSink;
use crate::foundation::core::AssetKey;
use crate::foundation::error::{RimeError, RimeResult};
use crate::foundation::math::entry_rng;
use crate::raster::canvas::Canvas;
use crate::synth::brush::BrushStrokeComposer;
use crate::synth::params::StyleConfig;
use crate::synth::scene::SceneComposer;
use crate::synth::texture::TextureComposer;

/// Seed used when the caller does not pick one.
pub const DEFAULT_SEED: u64 = 0x5249_4d45;

/// Run options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOpts {
    /// Run seed; every entry derives its own stream from it and its name.
    pub seed: u64,
    /// Synthesize entries in parallel when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            parallel: false,
            threads: None,
        }
    }
}

/// A catalog entry rejected by validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedEntry {
    pub key: AssetKey,
    pub reason: String,
}

/// Outcome of one catalog run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Keys persisted, in catalog order.
    pub written: Vec<AssetKey>,
    pub skipped: Vec<SkippedEntry>,
}

impl RunReport {
    /// `true` when every catalog entry was written.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Invokes the composers once per catalog entry.
#[derive(Clone, Debug)]
pub struct CatalogDriver<'a> {
    style: &'a StyleConfig,
    opts: GenerateOpts,
}

impl<'a> CatalogDriver<'a> {
    pub fn new(style: &'a StyleConfig, opts: GenerateOpts) -> Self {
        Self { style, opts }
    }

    pub fn opts(&self) -> &GenerateOpts {
        &self.opts
    }

    /// Synthesize one resolved entry from its own random stream.
    pub fn render_entry(&self, entry: &CatalogEntry) -> RimeResult<Canvas> {
        let key = entry.key();
        let mut rng = entry_rng(self.opts.seed, &key.name);
        tracing::info!(entry = %key, "generating");
        match entry {
            CatalogEntry::Scene(scene) => {
                SceneComposer::new(&self.style.scene).compose(scene, &mut rng)
            }
            CatalogEntry::Texture(texture) => {
                Ok(TextureComposer::new(&self.style.texture).compose(texture, &mut rng))
            }
            CatalogEntry::Brush(brush) => {
                Ok(BrushStrokeComposer::new(&self.style.brush).compose(brush, &mut rng))
            }
        }
    }

    /// Generate every entry of `catalog` into `sink`.
    ///
    /// Entries that fail validation are logged, recorded in the report and skipped. Any other
    /// error aborts the run. Canvases reach the sink in catalog order either way.
    #[tracing::instrument(skip_all, fields(entries = catalog.len(), parallel = self.opts.parallel))]
    pub fn run(&self, catalog: &CatalogDef, sink: &mut dyn AssetSink) -> RimeResult<RunReport> {
        let mut report = RunReport::default();
        let mut jobs = Vec::with_capacity(catalog.len());
        for (key, resolved) in catalog.resolve_entries() {
            match resolved {
                Ok(entry) => jobs.push(entry),
                Err(e) if !e.is_fatal() => {
                    tracing::error!(entry = %key, error = %e, "skipping catalog entry");
                    report.skipped.push(SkippedEntry {
                        key,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        // Validate the pool before touching the output.
        let pool = if self.opts.parallel {
            Some(build_thread_pool(self.opts.threads)?)
        } else {
            None
        };

        sink.begin()?;
        match pool {
            Some(pool) => {
                let rendered = pool.install(|| {
                    jobs.par_iter()
                        .map(|entry| self.render_entry(entry))
                        .collect::<Vec<_>>()
                });
                for (entry, canvas) in jobs.iter().zip(rendered) {
                    let key = entry.key();
                    sink.write(&key, &canvas?)?;
                    report.written.push(key);
                }
            }
            None => {
                for entry in &jobs {
                    let key = entry.key();
                    let canvas = self.render_entry(entry)?;
                    sink.write(&key, &canvas)?;
                    report.written.push(key);
                }
            }
        }
        sink.end()?;

        tracing::info!(
            written = report.written.len(),
            skipped = report.skipped.len(),
            "catalog complete"
        );
        Ok(report)
    }
}

/// Generate `catalog` into `sink` with the given style constants and options.
pub fn generate_catalog(
    catalog: &CatalogDef,
    style: &StyleConfig,
    sink: &mut dyn AssetSink,
    opts: &GenerateOpts,
) -> RimeResult<RunReport> {
    CatalogDriver::new(style, opts.clone()).run(catalog, sink)
}

fn build_thread_pool(threads: Option<usize>) -> RimeResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RimeError::config(
            "generation 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RimeError::render(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../tests/unit/driver.rs"]
mod tests;
