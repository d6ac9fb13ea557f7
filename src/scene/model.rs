use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{CanvasSize, Point, Rect};
use crate::foundation::error::{TinselError, TinselResult};

/// Maximum number of ornaments a scene may hold.
pub const MAX_ORNAMENTS: usize = 20;

/// Default ornament footprint width in canvas pixels.
pub const DEFAULT_ITEM_WIDTH: f64 = 200.0;

/// Default ornament footprint aspect ratio (width / height).
pub const DEFAULT_ITEM_ASPECT: f64 = 3.0 / 4.0;

/// How an ornament image is fitted into its footprint rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemFit {
    /// Scale-and-crop so the footprint is fully filled.
    Cover,
    /// Scale so the whole image is visible, letterboxing inside the footprint.
    #[default]
    Contain,
}

/// Ornament footprint size in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemSize {
    /// Footprint width.
    pub width: f64,
    /// Footprint height.
    pub height: f64,
}

impl Default for ItemSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_ITEM_WIDTH,
            height: DEFAULT_ITEM_WIDTH / DEFAULT_ITEM_ASPECT,
        }
    }
}

impl ItemSize {
    /// Footprint rectangle for an ornament anchored at `pos` (top-left).
    pub fn footprint(self, pos: Point) -> Rect {
        Rect::new(pos.x, pos.y, pos.x + self.width, pos.y + self.height)
    }
}

/// One user-supplied ornament: an image source plus its canvas position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ornament {
    /// Image file path, resolved relative to the scene manifest's directory.
    pub source: PathBuf,
    /// Top-left anchored canvas position in pixels.
    pub position: Point,
}

/// Background image presets bundled with the application assets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundPreset {
    /// The classic decorated-room backdrop.
    #[default]
    ClassicTree,
    /// Snowy outdoor backdrop.
    Snowy,
    /// Fireplace interior backdrop.
    Fireplace,
}

/// Tree overlay presets drawn inset over the background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreePreset {
    /// A plain green fir.
    GreenFir,
    /// A fir with warm string lights.
    LitFir,
}

/// Canvas size presets selectable in the UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanvasPreset {
    /// 1080x1350 portrait (the default).
    #[default]
    Portrait,
    /// 600x600 square (the classic layout).
    Square,
}

impl CanvasPreset {
    /// Pixel dimensions of this preset.
    pub fn size(self) -> CanvasSize {
        match self {
            Self::Portrait => CanvasSize { width: 1080, height: 1350 },
            Self::Square => CanvasSize { width: 600, height: 600 },
        }
    }
}

/// Sound track presets bundled with the application assets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundPreset {
    /// The bundled default track.
    #[default]
    JingleBells,
    /// Silent-night preset.
    SilentNight,
}

/// The audio source used for export.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundChoice {
    /// Use the bundled default track.
    #[default]
    Default,
    /// One of the bundled presets.
    Preset(SoundPreset),
    /// A user-supplied audio file path.
    Custom(PathBuf),
}

/// Serializable scene manifest: selections plus the ornament list.
///
/// The manifest is the boundary format consumed by the CLI and is also the
/// snapshot shape a session can be constructed from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDef {
    /// Canvas size preset.
    #[serde(default)]
    pub canvas: CanvasPreset,
    /// Background preset.
    #[serde(default)]
    pub background: BackgroundPreset,
    /// Optional tree overlay preset.
    #[serde(default)]
    pub tree: Option<TreePreset>,
    /// Audio source for export.
    #[serde(default)]
    pub sound: SoundChoice,
    /// Ornament footprint size.
    #[serde(default)]
    pub item_size: ItemSize,
    /// Ornament fit mode.
    #[serde(default)]
    pub item_fit: ItemFit,
    /// Ordered ornament list; order is draw order (last is topmost).
    #[serde(default)]
    pub ornaments: Vec<Ornament>,
}

impl SceneDef {
    /// Parse a scene manifest from JSON bytes.
    pub fn from_json(bytes: &[u8]) -> TinselResult<Self> {
        let def: Self = serde_json::from_slice(bytes)
            .map_err(|e| TinselError::serde(format!("parse scene manifest: {e}")))?;
        def.validate()?;
        Ok(def)
    }

    /// Validate manifest invariants.
    pub fn validate(&self) -> TinselResult<()> {
        if self.ornaments.len() > MAX_ORNAMENTS {
            return Err(TinselError::validation(format!(
                "scene holds {} ornaments, maximum is {MAX_ORNAMENTS}",
                self.ornaments.len()
            )));
        }
        if !(self.item_size.width.is_finite() && self.item_size.width > 0.0)
            || !(self.item_size.height.is_finite() && self.item_size.height > 0.0)
        {
            return Err(TinselError::validation(
                "item_size width/height must be finite and > 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
