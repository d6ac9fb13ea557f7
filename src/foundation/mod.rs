//! Foundation types shared across the crate: geometry, canvas metadata, errors.

pub(crate) mod core;
pub(crate) mod error;
