use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::assets::catalog::resolve_sound;
use crate::assets::decode::load_image;
use crate::assets::store::{PreparedImage, RasterCache};
use crate::export::job::{
    DEFAULT_EXPORT_FPS, ExportConfig, ExportReport, Exporter, FrameSource,
};
use crate::foundation::core::{FrameIndex, Point};
use crate::foundation::error::{TinselError, TinselResult};
use crate::interact::drag::{DragController, PointerResponse};
use crate::interact::pointer::ViewTransform;
use crate::render::compositor::{Highlight, render_scene};
use crate::render::surface::Surface;
use crate::scene::model::{
    BackgroundPreset, CanvasPreset, ItemFit, ItemSize, SceneDef, SoundChoice, TreePreset,
};
use crate::scene::store::{AddOutcome, BatchSource, SceneStore};

/// Options for exporting the current scene as an MP4.
#[derive(Clone, Debug)]
pub struct SessionExportOpts {
    /// Output MP4 path.
    pub out_path: PathBuf,
    /// Re-invoke the renderer for every frame instead of holding one capture.
    pub animate: bool,
}

/// The decorator editing session.
///
/// Redraws are explicit: every mutating operation marks the session dirty,
/// and [`frame`] recomposes only when dirty. Export always captures a clean
/// frame (no hover/drag highlight), so interaction state never leaks into
/// the output.
///
/// [`frame`]: DecoratorSession::frame
pub struct DecoratorSession {
    store: SceneStore,
    cache: RasterCache,
    drag: DragController,
    exporter: Exporter,

    assets_root: PathBuf,
    view: ViewTransform,

    background: Option<Arc<PreparedImage>>,
    background_for: Option<BackgroundPreset>,
    tree: Option<Arc<PreparedImage>>,
    tree_for: Option<TreePreset>,

    last_frame: Option<Surface>,
    dirty: bool,
}

impl DecoratorSession {
    /// Create a session from a validated scene manifest.
    ///
    /// `assets_root` anchors the preset background/tree/sound asset paths.
    pub fn new(def: SceneDef, assets_root: impl Into<PathBuf>) -> TinselResult<Self> {
        def.validate()?;
        let store = SceneStore::from_def(def);
        let canvas = store.canvas().size();
        Ok(Self {
            store,
            cache: RasterCache::new(),
            drag: DragController::new(),
            exporter: Exporter::new(),
            assets_root: assets_root.into(),
            view: ViewTransform::identity(canvas),
            background: None,
            background_for: None,
            tree: None,
            tree_for: None,
            last_frame: None,
            dirty: true,
        })
    }

    /// Read-only access to the scene state.
    pub fn scene(&self) -> &SceneStore {
        &self.store
    }

    /// Snapshot the session's scene as a serializable manifest.
    pub fn to_def(&self) -> SceneDef {
        self.store.to_def()
    }

    /// Return `true` when the next [`DecoratorSession::frame`] will recompose.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Add a batch of ornament image files. Marks dirty when anything landed.
    pub fn add_ornaments(
        &mut self,
        batch: impl IntoIterator<Item = PathBuf>,
        source: BatchSource,
    ) -> AddOutcome {
        let outcome = self.store.add_ornaments(batch, source);
        if outcome.accepted > 0 {
            self.dirty = true;
        }
        outcome
    }

    /// Remove one ornament by index.
    pub fn remove_ornament(&mut self, index: usize) -> TinselResult<()> {
        self.store.remove_ornament(index)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove all ornaments; a declined confirmation leaves the scene as-is.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        let changed = self.store.clear_all(confirmed);
        if changed {
            self.dirty = true;
        }
        changed
    }

    /// Select a canvas preset.
    pub fn set_canvas(&mut self, preset: CanvasPreset) {
        self.store.set_canvas(preset);
        self.view = ViewTransform::identity(preset.size());
        self.dirty = true;
    }

    /// Select a background preset.
    pub fn set_background(&mut self, preset: BackgroundPreset) {
        self.store.set_background(preset);
        self.dirty = true;
    }

    /// Select (or clear) the tree overlay.
    pub fn set_tree(&mut self, preset: Option<TreePreset>) {
        self.store.set_tree(preset);
        self.dirty = true;
    }

    /// Select the audio source used for export. Does not affect drawing.
    pub fn set_sound(&mut self, choice: SoundChoice) {
        self.store.set_sound(choice);
    }

    /// Set the ornament footprint size.
    pub fn set_item_size(&mut self, size: ItemSize) {
        self.store.set_item_size(size);
        self.dirty = true;
    }

    /// Set the ornament fit mode.
    pub fn set_item_fit(&mut self, fit: ItemFit) {
        self.store.set_item_fit(fit);
        self.dirty = true;
    }

    /// Tell the session how large the canvas is displayed on screen, so pointer
    /// coordinates can be mapped back to backing pixels.
    pub fn set_display_size(&mut self, width: f64, height: f64) {
        self.view.display_width = width;
        self.view.display_height = height;
    }

    /// Pointer-down at a display-space position.
    pub fn pointer_down(&mut self, display: Point) -> PointerResponse {
        let pos = self.view.to_canvas(display);
        let resp = self.drag.on_down(&self.store, pos);
        self.dirty |= resp.redraw;
        resp
    }

    /// Pointer-move to a display-space position (canvas or document level).
    pub fn pointer_move(&mut self, display: Point) -> PointerResponse {
        let pos = self.view.to_canvas(display);
        let resp = self.drag.on_move(&mut self.store, pos);
        self.dirty |= resp.redraw;
        resp
    }

    /// Pointer-up anywhere (canvas or document level).
    pub fn pointer_up(&mut self) -> PointerResponse {
        let resp = self.drag.on_up();
        self.dirty |= resp.redraw;
        resp
    }

    /// Pointer left the canvas element.
    pub fn pointer_leave(&mut self) -> PointerResponse {
        let resp = self.drag.on_leave();
        self.dirty |= resp.redraw;
        resp
    }

    /// Return `true` while a drag gesture is active (the embedder routes
    /// document-level pointer events into the session while this holds).
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Compose the current frame, redrawing only when dirty.
    pub fn frame(&mut self) -> TinselResult<&Surface> {
        if self.dirty || self.last_frame.is_none() {
            let highlight = self
                .drag
                .dragged()
                .map(|i| (i, Highlight::Dragged))
                .or_else(|| self.drag.hovered().map(|i| (i, Highlight::Hovered)));
            let surface = self.compose(highlight)?;
            self.last_frame = Some(surface);
            self.dirty = false;
        }
        self.last_frame
            .as_ref()
            .ok_or_else(|| TinselError::asset("no composed frame available"))
    }

    /// Export the scene as an MP4 via the system `ffmpeg`.
    ///
    /// The audio source is the scene's sound choice, falling back to the
    /// bundled default track. `progress` receives percentages in `[0, 100]`.
    pub fn export(
        &mut self,
        opts: &SessionExportOpts,
        progress: Option<&mut dyn FnMut(f32)>,
    ) -> TinselResult<ExportReport> {
        let audio_path = resolve_sound(self.store.sound(), &self.assets_root);
        let cfg = ExportConfig {
            out_path: opts.out_path.clone(),
            audio_path,
            canvas: self.store.canvas().size(),
            fps: DEFAULT_EXPORT_FPS,
        };

        // Capture without interaction highlights.
        let clean = self.compose(None)?;

        if opts.animate {
            let store = &self.store;
            let cache = &self.cache;
            let background = self.background.as_deref().ok_or_else(|| {
                TinselError::export("background raster missing at export time")
            })?;
            let tree = self.tree.as_deref();
            let mut compose = move |_idx: FrameIndex| {
                Ok(render_scene(store, cache, background, tree, None))
            };
            self.exporter
                .export_mp4(&cfg, FrameSource::Animated(&mut compose), progress)
        } else {
            self.exporter
                .export_mp4(&cfg, FrameSource::Still(&clean), progress)
        }
    }

    fn compose(&mut self, highlight: Option<(usize, Highlight)>) -> TinselResult<Surface> {
        self.ensure_chrome_loaded()?;
        self.cache
            .ensure_batch(self.store.sources(), self.store.generation());

        let background = self
            .background
            .as_deref()
            .ok_or_else(|| TinselError::asset("background raster not loaded"))?;
        let tree = self.tree.as_deref();
        Ok(render_scene(
            &self.store,
            &self.cache,
            background,
            tree,
            highlight,
        ))
    }

    /// Load (or reload) the background and tree overlay rasters.
    ///
    /// Composition only proceeds once both are ready; a selection change
    /// reloads just the raster that changed.
    fn ensure_chrome_loaded(&mut self) -> TinselResult<()> {
        let bg = self.store.background();
        if self.background_for != Some(bg) {
            let path = self.assets_root.join(bg.rel_path());
            self.background = Some(Arc::new(load_image(&path)?));
            self.background_for = Some(bg);
        }

        let tree = self.store.tree();
        if self.tree_for != tree {
            self.tree = match tree {
                Some(preset) => {
                    let path = self.assets_root.join(preset.rel_path());
                    Some(Arc::new(load_image(&path)?))
                }
                None => None,
            };
            self.tree_for = tree;
        }
        Ok(())
    }

    /// Assets root the session resolves preset paths against.
    pub fn assets_root(&self) -> &Path {
        &self.assets_root
    }
}
