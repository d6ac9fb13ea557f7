use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::export::audio::{ffmpeg_tools_available, probe_audio_duration};
use crate::export::encode::{
    AudioInputConfig, FfmpegSink, FfmpegSinkOpts, FrameSink, SinkConfig,
};
use crate::foundation::core::{CanvasSize, FrameIndex, Fps};
use crate::foundation::error::{TinselError, TinselResult};
use crate::render::surface::Surface;

/// Fixed default output filename for exported videos.
pub const DEFAULT_EXPORT_FILENAME: &str = "christmas_tree.mp4";

/// Default export frame rate.
pub const DEFAULT_EXPORT_FPS: Fps = Fps { num: 30, den: 1 };

/// Parameters for one export run.
#[derive(Clone, Debug)]
pub struct ExportConfig {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Audio track muxed into the output; the video holds for its duration.
    pub audio_path: PathBuf,
    /// Canvas dimensions of the frames that will be pushed.
    pub canvas: CanvasSize,
    /// Output frame rate.
    pub fps: Fps,
}

/// Visual material for an export.
pub enum FrameSource<'a> {
    /// One captured frame, held for the audio's duration.
    Still(&'a Surface),
    /// Freshly composed frames, one per timeline index.
    Animated(&'a mut dyn FnMut(FrameIndex) -> TinselResult<Surface>),
}

/// Summary of a finished export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Number of frames pushed into the sink.
    pub frames: u64,
    /// Audio duration the video was sized to, in seconds.
    pub duration_secs: f64,
    /// Final output path.
    pub out_path: PathBuf,
}

/// Explicitly owned export resource with single-flight admission control.
///
/// The encoder path is strictly sequential; a second export requested while one
/// is in flight is rejected with [`TinselError::Export`] instead of re-entering.
#[derive(Debug, Default)]
pub struct Exporter {
    in_flight: AtomicBool,
}

impl Exporter {
    /// Create an idle exporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `true` while an export is running.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Export to MP4 through the system `ffmpeg`.
    ///
    /// Probes the audio duration, sizes the frame count to cover it, and
    /// streams frames into an [`FfmpegSink`]. `progress` receives percentages
    /// in `[0, 100]` derived from frames pushed versus frames total.
    pub fn export_mp4(
        &self,
        cfg: &ExportConfig,
        source: FrameSource<'_>,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> TinselResult<ExportReport> {
        if !ffmpeg_tools_available() {
            return Err(TinselError::export(
                "ffmpeg and ffprobe are required for MP4 export, but were not found on PATH",
            ));
        }
        let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(&cfg.out_path));
        self.run(cfg, source, &mut sink, progress)
    }

    /// Export into an arbitrary sink (tests use [`crate::export::encode::InMemorySink`]).
    pub fn run(
        &self,
        cfg: &ExportConfig,
        source: FrameSource<'_>,
        sink: &mut dyn FrameSink,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> TinselResult<ExportReport> {
        let duration_secs = probe_audio_duration(&cfg.audio_path)?;
        self.run_with_duration(cfg, duration_secs, source, sink, progress)
    }

    /// [`Exporter::run`] with an already-known audio duration (skips ffprobe).
    pub fn run_with_duration(
        &self,
        cfg: &ExportConfig,
        duration_secs: f64,
        source: FrameSource<'_>,
        sink: &mut dyn FrameSink,
        mut progress: Option<&mut dyn FnMut(f32)>,
    ) -> TinselResult<ExportReport> {
        let _flight = self.admit()?;

        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(TinselError::export(format!(
                "audio duration {duration_secs} is not usable"
            )));
        }
        let frames_total = cfg.fps.secs_to_frames_ceil(duration_secs).max(1);

        tracing::info!(
            out = %cfg.out_path.display(),
            audio = %cfg.audio_path.display(),
            duration_secs,
            frames_total,
            "export started"
        );

        sink.begin(SinkConfig {
            width: cfg.canvas.width,
            height: cfg.canvas.height,
            fps: cfg.fps,
            audio: Some(AudioInputConfig {
                path: cfg.audio_path.clone(),
            }),
        })?;

        match source {
            FrameSource::Still(frame) => {
                for i in 0..frames_total {
                    sink.push_frame(FrameIndex(i), frame)?;
                    report_progress(&mut progress, i + 1, frames_total);
                }
            }
            FrameSource::Animated(compose) => {
                for i in 0..frames_total {
                    let frame = compose(FrameIndex(i))?;
                    sink.push_frame(FrameIndex(i), &frame)?;
                    report_progress(&mut progress, i + 1, frames_total);
                }
            }
        }
        sink.end()?;

        tracing::info!(out = %cfg.out_path.display(), frames_total, "export finished");
        Ok(ExportReport {
            frames: frames_total,
            duration_secs,
            out_path: cfg.out_path.clone(),
        })
    }

    fn admit(&self) -> TinselResult<FlightGuard<'_>> {
        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(TinselError::export("export already in progress"));
        }
        Ok(FlightGuard(&self.in_flight))
    }
}

struct FlightGuard<'a>(&'a AtomicBool);

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

fn report_progress(progress: &mut Option<&mut dyn FnMut(f32)>, pushed: u64, total: u64) {
    if let Some(cb) = progress.as_mut() {
        cb(((pushed as f64 / total as f64) * 100.0).min(100.0) as f32);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/export/job.rs"]
mod tests;
