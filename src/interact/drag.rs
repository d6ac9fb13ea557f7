use crate::foundation::core::{Point, Vec2};
use crate::interact::pointer::hit_test;
use crate::scene::store::SceneStore;

/// Cursor feedback for the embedding view layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorHint {
    /// Nothing under the pointer.
    #[default]
    Default,
    /// An ornament is under the idle pointer.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// What the embedder should do after feeding a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerResponse {
    /// The scene changed visually and needs a redraw.
    pub redraw: bool,
    /// Consume the platform event (suppress default touch scrolling).
    pub consume: bool,
    /// Cursor to display.
    pub cursor: CursorHint,
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum DragPhase {
    Idle,
    Dragging { index: usize, grab_offset: Vec2 },
}

/// Pointer-drag state machine over the ornament list.
///
/// `idle -> (down over an ornament) -> dragging -> (up) -> idle`. While
/// dragging, every move replaces the grabbed ornament's position with
/// `pointer - grab_offset`; leave events only clear hover when not dragging, so
/// a drag survives the pointer exiting the canvas bounds (the embedder routes
/// document-level move/up events here while [`DragController::is_dragging`]).
/// Touch input uses the same entry points.
#[derive(Clone, Debug)]
pub struct DragController {
    phase: DragPhase,
    hovered: Option<usize>,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new()
    }
}

impl DragController {
    /// Create an idle controller.
    pub fn new() -> Self {
        Self {
            phase: DragPhase::Idle,
            hovered: None,
        }
    }

    /// Return `true` while a drag gesture is active.
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Index of the actively dragged ornament, if any.
    pub fn dragged(&self) -> Option<usize> {
        match self.phase {
            DragPhase::Dragging { index, .. } => Some(index),
            DragPhase::Idle => None,
        }
    }

    /// Index of the ornament under the idle pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Pointer-down at `pos` (canvas pixels).
    pub fn on_down(&mut self, store: &SceneStore, pos: Point) -> PointerResponse {
        let Some(index) = hit_test(store.positions(), store.item_size(), pos) else {
            return PointerResponse::default();
        };

        let grab_offset = pos - store.positions()[index];
        self.phase = DragPhase::Dragging { index, grab_offset };
        self.hovered = None;
        PointerResponse {
            redraw: true,
            consume: true,
            cursor: CursorHint::Grabbing,
        }
    }

    /// Pointer-move to `pos` (canvas pixels).
    pub fn on_move(&mut self, store: &mut SceneStore, pos: Point) -> PointerResponse {
        match self.phase {
            DragPhase::Idle => {
                let hovered = hit_test(store.positions(), store.item_size(), pos);
                let redraw = hovered != self.hovered;
                self.hovered = hovered;
                PointerResponse {
                    redraw,
                    consume: false,
                    cursor: if hovered.is_some() {
                        CursorHint::Grab
                    } else {
                        CursorHint::Default
                    },
                }
            }
            DragPhase::Dragging { index, grab_offset } => {
                // Exact inverse of the grab: no drift across moves. A stale
                // index (ornament removed mid-drag) ends the gesture.
                if store.set_position(index, pos - grab_offset).is_err() {
                    self.phase = DragPhase::Idle;
                    return PointerResponse {
                        redraw: true,
                        consume: false,
                        cursor: CursorHint::Default,
                    };
                }
                PointerResponse {
                    redraw: true,
                    consume: true,
                    cursor: CursorHint::Grabbing,
                }
            }
        }
    }

    /// Pointer-up (or document-level up while dragging).
    pub fn on_up(&mut self) -> PointerResponse {
        let redraw = self.is_dragging() || self.hovered.is_some();
        self.phase = DragPhase::Idle;
        self.hovered = None;
        PointerResponse {
            redraw,
            consume: false,
            cursor: CursorHint::Default,
        }
    }

    /// Pointer left the canvas element. Has no effect while dragging.
    pub fn on_leave(&mut self) -> PointerResponse {
        if self.is_dragging() {
            return PointerResponse {
                redraw: false,
                consume: false,
                cursor: CursorHint::Grabbing,
            };
        }
        let redraw = self.hovered.is_some();
        self.hovered = None;
        PointerResponse {
            redraw,
            consume: false,
            cursor: CursorHint::Default,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interact/drag.rs"]
mod tests;
