//! Session-oriented editing API: explicit mutate, redraw-if-dirty, export.

/// The `Decorator` session facade.
pub mod decorator;
