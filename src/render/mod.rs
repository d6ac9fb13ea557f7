//! CPU compositor: cover/contain fitting, premultiplied blits, scene passes.

/// Scene compositing passes over premultiplied surfaces.
pub mod compositor;
/// Cover/contain fit rectangle computations.
pub mod fit;
/// Premultiplied RGBA surface type and PNG encoding.
pub mod surface;
