//! Tinsel is a headless Christmas-tree scene decorator and video exporter.
//!
//! Users supply ornament images, arrange them over a background and tree
//! overlay on a fixed-size canvas, and export the composed scene as an MP4
//! with an audio track. The public API is session-oriented:
//!
//! - Load a [`SceneDef`] manifest (or start from `SceneDef::default()`)
//! - Create a [`DecoratorSession`]
//! - Mutate the scene, feed pointer events, call [`DecoratorSession::frame`]
//! - Export through [`DecoratorSession::export`] (system `ffmpeg` on PATH)
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Asset handling: preset catalog, image decoding, memoized rasters.
pub mod assets;
/// MP4 export: audio probing, frame sinks, export job.
pub mod export;
/// Pointer interaction: hit-testing and drag tracking.
pub mod interact;
/// CPU compositor.
pub mod render;
/// Scene state and layout.
pub mod scene;
/// Session-oriented editing API.
pub mod session;

pub use crate::foundation::core::{CanvasSize, FrameIndex, Fps, Point, Rect, Rgba8Premul, Vec2};
pub use crate::foundation::error::{TinselError, TinselResult};

pub use crate::assets::store::{PreparedImage, RasterCache};
pub use crate::export::encode::{
    AudioInputConfig, FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink, SinkConfig,
};
pub use crate::export::job::{
    DEFAULT_EXPORT_FILENAME, DEFAULT_EXPORT_FPS, ExportConfig, ExportReport, Exporter, FrameSource,
};
pub use crate::interact::drag::{CursorHint, DragController, PointerResponse};
pub use crate::interact::pointer::ViewTransform;
pub use crate::render::compositor::Highlight;
pub use crate::render::surface::Surface;
pub use crate::scene::model::{
    BackgroundPreset, CanvasPreset, ItemFit, ItemSize, MAX_ORNAMENTS, Ornament, SceneDef,
    SoundChoice, SoundPreset, TreePreset,
};
pub use crate::scene::store::{AddOutcome, BatchSource, SceneStore};
pub use crate::session::decorator::{DecoratorSession, SessionExportOpts};
