use std::path::{Path, PathBuf};

use crate::scene::model::{BackgroundPreset, SoundChoice, SoundPreset, TreePreset};

/// Manifest-relative path of the bundled default audio track.
pub const DEFAULT_AUDIO_REL_PATH: &str = "audio/default.mp3";

impl BackgroundPreset {
    /// Asset path relative to the assets root.
    pub fn rel_path(self) -> &'static str {
        match self {
            Self::ClassicTree => "images/ctree.jpg",
            Self::Snowy => "images/snowy.jpg",
            Self::Fireplace => "images/fireplace.jpg",
        }
    }
}

impl TreePreset {
    /// Asset path relative to the assets root.
    pub fn rel_path(self) -> &'static str {
        match self {
            Self::GreenFir => "images/tree_green.png",
            Self::LitFir => "images/tree_lit.png",
        }
    }
}

impl SoundPreset {
    /// Asset path relative to the assets root.
    pub fn rel_path(self) -> &'static str {
        match self {
            Self::JingleBells => DEFAULT_AUDIO_REL_PATH,
            Self::SilentNight => "audio/silent_night.mp3",
        }
    }
}

/// Resolve a sound choice to a concrete audio file path.
///
/// [`SoundChoice::Default`] falls back to the bundled default track under the
/// assets root; custom paths pass through untouched.
pub fn resolve_sound(choice: &SoundChoice, assets_root: &Path) -> PathBuf {
    match choice {
        SoundChoice::Default => assets_root.join(DEFAULT_AUDIO_REL_PATH),
        SoundChoice::Preset(p) => assets_root.join(p.rel_path()),
        SoundChoice::Custom(path) => path.clone(),
    }
}
