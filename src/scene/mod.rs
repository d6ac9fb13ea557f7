//! Scene state: ornament list, selection presets, and deterministic layout.

/// Deterministic default placement grid.
pub mod layout;
/// Scene data model: presets, ornaments, and sizes.
pub mod model;
/// Mutable scene store with dirty tracking.
pub mod store;
