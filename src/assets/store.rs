use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;

use crate::assets::decode::load_image;

/// Prepared raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Memoized per-ornament rasters, keyed by source path.
///
/// The cache tracks the scene-store generation it was filled against. A newer
/// generation clears everything before the next fill, so completions belonging
/// to a stale ornament list can never leak into a newer draw pass.
#[derive(Debug, Default)]
pub struct RasterCache {
    entries: HashMap<PathBuf, Arc<PreparedImage>>,
    generation: u64,
}

impl RasterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure rasters exist for every path in `sources`, decoding missing ones.
    ///
    /// `generation` is the scene-store generation the caller observed; a change
    /// invalidates every memoized entry first. Decodes fan out across the batch
    /// (and fan back in before returning), so the wait is bounded by the slowest
    /// file rather than the sum. Files that fail to decode are logged and left
    /// absent; the renderer skips ornaments without a prepared raster.
    pub fn ensure_batch(&mut self, sources: &[PathBuf], generation: u64) -> usize {
        if generation != self.generation {
            self.entries.clear();
            self.generation = generation;
        }

        let missing: Vec<&PathBuf> = sources
            .iter()
            .filter(|p| !self.entries.contains_key(p.as_path()))
            .collect();
        if missing.is_empty() {
            return 0;
        }

        let decoded: Vec<(PathBuf, Option<Arc<PreparedImage>>)> = missing
            .par_iter()
            .map(|path| {
                let img = match load_image(path) {
                    Ok(img) => Some(Arc::new(img)),
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "ornament decode failed");
                        None
                    }
                };
                ((*path).clone(), img)
            })
            .collect();

        let mut loaded = 0usize;
        for (path, img) in decoded {
            if let Some(img) = img {
                self.entries.insert(path, img);
                loaded += 1;
            }
        }
        loaded
    }

    /// Look up the memoized raster for `source`, if decoding succeeded.
    pub fn get(&self, source: &Path) -> Option<&Arc<PreparedImage>> {
        self.entries.get(source)
    }

    /// Number of memoized rasters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no rasters are memoized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
