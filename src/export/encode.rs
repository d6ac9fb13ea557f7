use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, Command, Stdio};

use crate::foundation::core::{FrameIndex, Fps, mul_div255};
use crate::foundation::error::{TinselError, TinselResult};
use crate::render::surface::Surface;

/// Configuration provided to a [`FrameSink`] at the start of an export.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
    /// Optional audio track muxed into the output.
    pub audio: Option<AudioInputConfig>,
}

/// Audio input for sinks that mux an audio track.
#[derive(Debug, Clone)]
pub struct AudioInputConfig {
    /// Path to an audio file `ffmpeg` can demux (mp3, wav, aac, ...).
    pub path: PathBuf,
}

/// Sink contract for consuming composed frames in timeline order.
///
/// Ordering contract: `push_frame` is called in strictly increasing
/// `FrameIndex` order within one export.
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> TinselResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> TinselResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> TinselResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, Surface)>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, Surface)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> TinselResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> TinselResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> TinselResult<()> {
        Ok(())
    }
}

/// Options for [`FfmpegSink`] MP4 output.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    /// Output MP4 file path.
    pub out_path: PathBuf,
    /// Overwrite output file if it already exists.
    pub overwrite: bool,
    /// Background color used to flatten alpha (RGBA8, straight alpha).
    pub bg_rgba: [u8; 4],
}

impl FfmpegSinkOpts {
    /// Create options for outputting an MP4 to `out_path`.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
        }
    }
}

/// Sink that spawns the system `ffmpeg` and streams raw frames to stdin.
///
/// Audio is optional and provided through `SinkConfig.audio`; when present the
/// output stops at the shorter of video and audio (`-shortest`).
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,

    child: Option<Child>,
    stdin: Option<ChildStdin>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,

    scratch: Vec<u8>,
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FfmpegSink {
    /// Create a new sink that streams into `ffmpeg`.
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            child: None,
            stdin: None,
            stderr_drain: None,
            scratch: Vec::new(),
            cfg: None,
            last_idx: None,
        }
    }
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> TinselResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(TinselError::validation(
                "ffmpeg sink width/height must be non-zero",
            ));
        }
        if !cfg.width.is_multiple_of(2) || !cfg.height.is_multiple_of(2) {
            return Err(TinselError::validation(
                "ffmpeg sink width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(TinselError::validation(
                "ffmpeg sink fps numerator/denominator must be non-zero",
            ));
        }

        ensure_parent_dir(&self.opts.out_path)?;
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(TinselError::validation(format!(
                "output file '{}' already exists",
                self.opts.out_path.display()
            )));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());

        if self.opts.overwrite {
            cmd.arg("-y");
        } else {
            cmd.arg("-n");
        }

        // Input: raw RGBA8 frames on stdin. `ffmpeg` does not understand premul,
        // so push_frame flattens alpha over the configured background first.
        cmd.args([
            "-loglevel",
            "error",
            "-f",
            "rawvideo",
            "-pix_fmt",
            "rgba",
            "-s",
            &format!("{}x{}", cfg.width, cfg.height),
            "-r",
            &format!("{}/{}", cfg.fps.num, cfg.fps.den),
            "-i",
            "pipe:0",
        ]);

        if let Some(audio) = cfg.audio.as_ref() {
            cmd.arg("-i").arg(&audio.path).args([
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-c:a",
                "aac",
                "-b:a",
                "192k",
                "-shortest",
                "-movflags",
                "+faststart",
            ]);
        } else {
            cmd.args([
                "-an",
                "-c:v",
                "libx264",
                "-pix_fmt",
                "yuv420p",
                "-movflags",
                "+faststart",
            ]);
        }
        cmd.arg(&self.opts.out_path);

        let mut child = cmd.spawn().map_err(|e| {
            TinselError::export(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| TinselError::export("failed to open ffmpeg stdin (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| TinselError::export("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut stderr_bytes = Vec::new();
            stderr.read_to_end(&mut stderr_bytes)?;
            Ok(stderr_bytes)
        });

        self.scratch = vec![0u8; cfg.width as usize * cfg.height as usize * 4];
        self.child = Some(child);
        self.stdin = Some(stdin);
        self.stderr_drain = Some(stderr_drain);
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &Surface) -> TinselResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| TinselError::export("ffmpeg sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(TinselError::export(
                "ffmpeg sink received out-of-order frame index",
            ));
        }
        self.last_idx = Some(idx);

        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(TinselError::validation(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if frame.data.len() != self.scratch.len() {
            return Err(TinselError::validation(
                "frame.data size mismatch with width*height*4",
            ));
        }

        flatten_premul_over_bg_to_opaque_rgba8(&mut self.scratch, &frame.data, self.opts.bg_rgba)?;

        let Some(stdin) = self.stdin.as_mut() else {
            return Err(TinselError::export("ffmpeg sink is already finalized"));
        };

        use std::io::Write as _;
        stdin.write_all(&self.scratch).map_err(|e| {
            TinselError::export(format!("failed to write frame to ffmpeg stdin: {e}"))
        })?;
        Ok(())
    }

    fn end(&mut self) -> TinselResult<()> {
        drop(self.stdin.take());
        let mut child = self
            .child
            .take()
            .ok_or_else(|| TinselError::export("ffmpeg sink not started"))?;

        let status = child
            .wait()
            .map_err(|e| TinselError::export(format!("failed to wait for ffmpeg to finish: {e}")))?;
        let stderr_bytes = match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| TinselError::export("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| TinselError::export(format!("ffmpeg stderr read failed: {e}")))?,
            None => Vec::new(),
        };

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr_bytes);
            return Err(TinselError::export(format!(
                "ffmpeg exited with status {}: {}",
                status,
                stderr.trim()
            )));
        }

        self.cfg = None;
        Ok(())
    }
}

fn flatten_premul_over_bg_to_opaque_rgba8(
    dst: &mut [u8],
    src_premul: &[u8],
    bg_rgba: [u8; 4],
) -> TinselResult<()> {
    if dst.len() != src_premul.len() || !dst.len().is_multiple_of(4) {
        return Err(TinselError::validation(
            "flatten_premul_over_bg_to_opaque_rgba8 expects equal-length rgba8 buffers",
        ));
    }

    let bg_r = bg_rgba[0] as u16;
    let bg_g = bg_rgba[1] as u16;
    let bg_b = bg_rgba[2] as u16;

    for (d, s) in dst.chunks_exact_mut(4).zip(src_premul.chunks_exact(4)) {
        let a = s[3] as u16;
        if a == 255 {
            d.copy_from_slice(s);
            d[3] = 255;
            continue;
        }

        let inv = 255u16 - a;
        let r = s[0] as u16 + mul_div255(bg_r, inv);
        let g = s[1] as u16 + mul_div255(bg_g, inv);
        let b = s[2] as u16 + mul_div255(bg_b, inv);

        d[0] = r.min(255) as u8;
        d[1] = g.min(255) as u8;
        d[2] = b.min(255) as u8;
        d[3] = 255;
    }

    Ok(())
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> TinselResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
