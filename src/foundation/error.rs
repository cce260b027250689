/// Convenience result type used across the importer.
pub type ImporterResult<T> = Result<T, ImporterError>;

/// Top-level error taxonomy used by importer APIs.
///
/// Only fatal conditions live here. Rectangles dropped at grid edges, blank slices and
/// missing pivot maps are normal outcomes and never surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum ImporterError {
    /// Slicing configuration that cannot produce a usable grid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid user-provided settings, paths or template names.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while decoding pixel data.
    #[error("image error: {0}")]
    Image(String),

    /// Errors when serializing or deserializing settings documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImporterError {
    /// Build an [`ImporterError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build an [`ImporterError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImporterError::Image`] value.
    pub fn image(msg: impl Into<String>) -> Self {
        Self::Image(msg.into())
    }

    /// Build an [`ImporterError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
