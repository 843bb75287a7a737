//! Error types for curio.

use thiserror::Error;

/// Result type for curio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for curio operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The prediction oracle errored or timed out.
    #[error("Oracle call failed: {0}")]
    Oracle(String),

    /// No image could be retrieved for an item.
    #[error("Image unavailable: {0}")]
    ImageUnavailable(String),

    /// A ground-truth item was requested by an id the corpus does not contain.
    ///
    /// This indicates a caller bug, so it is a hard failure rather than a
    /// recorded per-item degradation.
    #[error("Unknown ground-truth item: {0}")]
    UnknownItem(String),

    /// The corpus selected for an evaluation run contains no items.
    #[error("Evaluation corpus is empty")]
    EmptyCorpus,

    /// A ground-truth record failed validation at load time.
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// IO error while loading a corpus file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error while loading a corpus or replayed predictions.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an oracle failure error.
    pub fn oracle(msg: impl Into<String>) -> Self {
        Error::Oracle(msg.into())
    }

    /// Create an image-unavailable error.
    pub fn image_unavailable(msg: impl Into<String>) -> Self {
        Error::ImageUnavailable(msg.into())
    }

    /// Create an unknown-item error.
    pub fn unknown_item(id: impl Into<String>) -> Self {
        Error::UnknownItem(id.into())
    }

    /// Create a corpus validation error.
    pub fn corpus(msg: impl Into<String>) -> Self {
        Error::Corpus(msg.into())
    }
}
