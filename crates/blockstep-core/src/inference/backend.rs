//! Inference backend abstraction — framework-agnostic model execution.
//!
//! Defines the [`InferenceBackend`] trait that model runtimes (ONNX Runtime,
//! candle, Burn, a hand-written DSP stand-in) implement. All operations use
//! flat `&[f32]` data, so no framework tensor types cross the boundary.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model asset not found: {}", .0.display())]
    AssetMissing(PathBuf),

    #[error("Model load failed: {0}")]
    LoadFailed(String),

    #[error("Forward pass failed: {0}")]
    RunFailed(String),

    #[error("No model loaded")]
    NotLoaded,
}

/// Location of a model file: `<root>/<name>.<format>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelAsset {
    pub name: String,
    pub format: String,
    pub root: PathBuf,
}

impl ModelAsset {
    pub fn new(
        name: impl Into<String>,
        format: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            root: root.into(),
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format)
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(self.file_name())
    }
}

/// Flat tensor sizes a loaded model declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelShape {
    pub input: usize,
    pub params: usize,
    pub output: usize,
}

impl ModelShape {
    pub fn new(input: usize, params: usize, output: usize) -> Self {
        Self {
            input,
            params,
            output,
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackendCapabilities {
    /// e.g. "ONNX Runtime", "closure"
    pub name: String,
    pub has_gpu: bool,
}

/// A model runtime driven synchronously from the audio thread.
///
/// # Lifecycle
///
/// 1. [`load`](Self::load) once during session setup; the returned shape is
///    checked against the session's window geometry
/// 2. [`run`](Self::run) once per trigger on the audio thread
/// 3. [`release`](Self::release) exactly once at session cleanup
///
/// `run` is timed by the caller and must not allocate or block on anything
/// but its own computation.
pub trait InferenceBackend {
    fn load(&mut self, session_id: &str, asset: &ModelAsset) -> Result<ModelShape, InferenceError>;

    /// `input.len()`, `params.len()` and `output.len()` match the shape
    /// returned by [`load`](Self::load).
    fn run(&mut self, input: &[f32], params: &[f32], output: &mut [f32])
        -> Result<(), InferenceError>;

    fn release(&mut self);

    fn capabilities(&self) -> BackendCapabilities;
}
