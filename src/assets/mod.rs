//! Asset handling: preset catalog, image decoding, and memoized rasters.

/// Preset catalog: trees, backgrounds, and sound choices.
pub mod catalog;
/// Image decoding into premultiplied RGBA rasters.
pub mod decode;
/// Memoized raster cache keyed by asset path.
pub mod store;
