/// Convenience result type used across Tinsel.
pub type TinselResult<T> = Result<T, TinselError>;

/// Top-level error taxonomy used by session and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum TinselError {
    /// Invalid user-provided or scene-manifest data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while loading or decoding image/audio assets.
    #[error("asset error: {0}")]
    Asset(String),

    /// Errors while capturing frames or running the ffmpeg encode pipeline.
    #[error("export error: {0}")]
    Export(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TinselError {
    /// Build a [`TinselError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TinselError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// Build a [`TinselError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }

    /// Build a [`TinselError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
