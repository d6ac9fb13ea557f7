//! MP4 export: audio probing, `ffmpeg` frame sinks, and the export job.

/// Audio track probing and selection.
pub mod audio;
/// `ffmpeg` process management and frame encoding.
pub mod encode;
/// Export job orchestration.
pub mod job;
