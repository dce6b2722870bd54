//! Error types for blockstep-core.

use crate::inference::InferenceError;
use thiserror::Error;

/// Error type for blockstep-core operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Failed to load model: {0}")]
    ModelLoad(#[source] InferenceError),

    #[error("Model shape mismatch: {what} is {actual}, window expects {expected}")]
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("Operation not valid in session state {0:?}")]
    InvalidState(crate::session::SessionState),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, Error>;
