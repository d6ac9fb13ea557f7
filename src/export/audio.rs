use std::path::Path;

use crate::foundation::error::{TinselError, TinselResult};

/// Probe an audio file's duration in seconds through `ffprobe`.
///
/// A missing file, ffprobe failure, or non-finite/zero duration is a
/// precondition failure for export and surfaces as [`TinselError::Export`].
pub fn probe_audio_duration(path: &Path) -> TinselResult<f64> {
    #[derive(serde::Deserialize)]
    struct ProbeFormat {
        duration: Option<String>,
    }
    #[derive(serde::Deserialize)]
    struct ProbeOut {
        format: ProbeFormat,
    }

    if !path.is_file() {
        return Err(TinselError::export(format!(
            "audio file '{}' not found",
            path.display()
        )));
    }

    let out = std::process::Command::new("ffprobe")
        .args([
            "-v",
            "error",
            "-print_format",
            "json",
            "-show_format",
        ])
        .arg(path)
        .output()
        .map_err(|e| TinselError::export(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(TinselError::export(format!(
            "ffprobe failed for '{}': {}",
            path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }

    let parsed: ProbeOut = serde_json::from_slice(&out.stdout)
        .map_err(|e| TinselError::export(format!("ffprobe json parse failed: {e}")))?;
    let duration: f64 = parsed
        .format
        .duration
        .ok_or_else(|| TinselError::export("couldn't read audio duration"))?
        .parse()
        .map_err(|e| TinselError::export(format!("couldn't parse audio duration: {e}")))?;

    if !duration.is_finite() || duration <= 0.0 {
        return Err(TinselError::export(format!(
            "audio duration {duration} is not usable"
        )));
    }
    Ok(duration)
}

/// Return `true` when both `ffmpeg` and `ffprobe` can be invoked from `PATH`.
pub fn ffmpeg_tools_available() -> bool {
    tool_on_path("ffmpeg") && tool_on_path("ffprobe")
}

fn tool_on_path(name: &str) -> bool {
    std::process::Command::new(name)
        .arg("-version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
