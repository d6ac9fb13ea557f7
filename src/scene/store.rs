use std::path::{Path, PathBuf};

use crate::foundation::core::Point;
use crate::foundation::error::{TinselError, TinselResult};
use crate::scene::layout::reconcile_positions;
use crate::scene::model::{
    BackgroundPreset, CanvasPreset, ItemFit, ItemSize, MAX_ORNAMENTS, Ornament, SceneDef,
    SoundChoice, TreePreset,
};

/// Where an incoming ornament batch came from.
///
/// Drag-and-drop batches are filtered down to image files; file-picker batches
/// are accepted as-is (the picker dialog already constrained the selection).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BatchSource {
    /// A file-picker dialog selection.
    Picker,
    /// A drag-and-drop file list.
    DragDrop,
}

/// Result of adding an ornament batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AddOutcome {
    /// Number of files accepted into the scene.
    pub accepted: usize,
    /// Number of files rejected (over cap, or filtered as non-images).
    pub rejected: usize,
    /// Human-readable notice to surface when files were rejected.
    pub notice: Option<String>,
}

/// Mutable scene state: the ordered ornament list, per-ornament positions, and
/// the current selection (background, tree, canvas, sound).
///
/// Invariant: `positions.len() == sources.len()` at every public-API boundary;
/// every ornament-list mutation reconciles positions and bumps the generation
/// counter used to invalidate memoized rasters.
#[derive(Clone, Debug)]
pub struct SceneStore {
    canvas: CanvasPreset,
    background: BackgroundPreset,
    tree: Option<TreePreset>,
    sound: SoundChoice,
    item_size: ItemSize,
    item_fit: ItemFit,

    sources: Vec<PathBuf>,
    positions: Vec<Point>,
    generation: u64,
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::from_def(SceneDef::default())
    }
}

impl SceneStore {
    /// Build a store from a validated scene manifest.
    pub fn from_def(def: SceneDef) -> Self {
        let (sources, positions) = def
            .ornaments
            .into_iter()
            .map(|o| (o.source, o.position))
            .unzip();
        Self {
            canvas: def.canvas,
            background: def.background,
            tree: def.tree,
            sound: def.sound,
            item_size: def.item_size,
            item_fit: def.item_fit,
            sources,
            positions,
            generation: 0,
        }
    }

    /// Snapshot the store back into a serializable manifest.
    pub fn to_def(&self) -> SceneDef {
        SceneDef {
            canvas: self.canvas,
            background: self.background,
            tree: self.tree,
            sound: self.sound.clone(),
            item_size: self.item_size,
            item_fit: self.item_fit,
            ornaments: self
                .sources
                .iter()
                .zip(&self.positions)
                .map(|(source, &position)| Ornament {
                    source: source.clone(),
                    position,
                })
                .collect(),
        }
    }

    /// Add a batch of ornament image files.
    ///
    /// Drag-and-drop batches are filtered to image files first. When the cap
    /// would be exceeded, exactly `MAX_ORNAMENTS - current` files are accepted
    /// and the outcome carries a user-visible notice.
    pub fn add_ornaments(
        &mut self,
        batch: impl IntoIterator<Item = PathBuf>,
        source: BatchSource,
    ) -> AddOutcome {
        let mut incoming: Vec<PathBuf> = batch.into_iter().collect();
        let mut filtered = 0usize;
        if source == BatchSource::DragDrop {
            let before = incoming.len();
            incoming.retain(|p| is_image_path(p));
            filtered = before - incoming.len();
        }

        let room = MAX_ORNAMENTS.saturating_sub(self.sources.len());
        let over_cap = incoming.len().saturating_sub(room);
        incoming.truncate(room);

        let accepted = incoming.len();
        if accepted > 0 {
            self.sources.extend(incoming);
            self.touch_ornaments();
        }

        let mut notice = None;
        if over_cap > 0 {
            notice = Some(format!(
                "Maximum {MAX_ORNAMENTS} ornaments allowed; {over_cap} file(s) were not added."
            ));
        } else if filtered > 0 {
            notice = Some(format!("{filtered} non-image file(s) were ignored."));
        }

        tracing::debug!(accepted, rejected = over_cap + filtered, "ornament batch added");
        AddOutcome {
            accepted,
            rejected: over_cap + filtered,
            notice,
        }
    }

    /// Remove one ornament by index.
    pub fn remove_ornament(&mut self, index: usize) -> TinselResult<()> {
        if index >= self.sources.len() {
            return Err(TinselError::validation(format!(
                "ornament index {index} out of range ({} ornaments)",
                self.sources.len()
            )));
        }
        self.sources.remove(index);
        self.positions.remove(index);
        self.touch_ornaments();
        Ok(())
    }

    /// Remove all ornaments. A declined confirmation (`confirmed == false`)
    /// leaves the scene untouched; returns whether anything changed.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        if !confirmed || self.sources.is_empty() {
            return false;
        }
        self.sources.clear();
        self.positions.clear();
        self.touch_ornaments();
        true
    }

    /// Replace one ornament's position (drag updates land here).
    ///
    /// No clamping is applied: ornaments may sit partially or fully off-canvas.
    pub fn set_position(&mut self, index: usize, pos: Point) -> TinselResult<()> {
        let slot = self.positions.get_mut(index).ok_or_else(|| {
            TinselError::validation(format!("position index {index} out of range"))
        })?;
        *slot = pos;
        Ok(())
    }

    /// Ornament image sources in draw order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Per-ornament positions, parallel to [`SceneStore::sources`].
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Number of ornaments in the scene.
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Return `true` when the scene holds no ornaments.
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Generation counter, bumped on every ornament-list mutation.
    ///
    /// Raster caches compare against this to discard stale entries, which also
    /// closes the stale-completion race a reactive implementation would hit.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Selected canvas preset.
    pub fn canvas(&self) -> CanvasPreset {
        self.canvas
    }

    /// Selected background preset.
    pub fn background(&self) -> BackgroundPreset {
        self.background
    }

    /// Selected tree overlay, if any.
    pub fn tree(&self) -> Option<TreePreset> {
        self.tree
    }

    /// Selected audio source.
    pub fn sound(&self) -> &SoundChoice {
        &self.sound
    }

    /// Ornament footprint size.
    pub fn item_size(&self) -> ItemSize {
        self.item_size
    }

    /// Ornament fit mode.
    pub fn item_fit(&self) -> ItemFit {
        self.item_fit
    }

    /// Select a canvas preset.
    pub fn set_canvas(&mut self, preset: CanvasPreset) {
        self.canvas = preset;
    }

    /// Select a background preset.
    pub fn set_background(&mut self, preset: BackgroundPreset) {
        self.background = preset;
    }

    /// Select (or clear) the tree overlay.
    pub fn set_tree(&mut self, preset: Option<TreePreset>) {
        self.tree = preset;
    }

    /// Select the audio source used for export.
    pub fn set_sound(&mut self, choice: SoundChoice) {
        self.sound = choice;
    }

    /// Set the ornament footprint size.
    pub fn set_item_size(&mut self, size: ItemSize) {
        self.item_size = size;
    }

    /// Set the ornament fit mode.
    pub fn set_item_fit(&mut self, fit: ItemFit) {
        self.item_fit = fit;
    }

    fn touch_ornaments(&mut self) {
        reconcile_positions(&mut self.positions, self.sources.len());
        self.generation += 1;
        debug_assert_eq!(self.positions.len(), self.sources.len());
    }
}

fn is_image_path(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "bmp"
    )
}

#[cfg(test)]
#[path = "../../tests/unit/scene/store.rs"]
mod tests;
