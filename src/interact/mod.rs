//! Pointer interaction: display-to-canvas mapping, hit-testing, drag tracking.

/// Drag tracking for ornament moves.
pub mod drag;
/// Display-to-canvas pointer mapping and hit-testing.
pub mod pointer;
