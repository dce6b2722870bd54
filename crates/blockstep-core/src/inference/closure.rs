//! Backend built from a plain forward closure.

use super::backend::{
    BackendCapabilities, InferenceBackend, InferenceError, ModelAsset, ModelShape,
};

/// Forward pass: `(window, params, output)`. Must fill `output` without allocating.
pub type ForwardFn = Box<dyn FnMut(&[f32], &[f32], &mut [f32]) + Send>;

/// [`InferenceBackend`] running a Rust closure in place of a model runtime.
///
/// Useful for benchmarking the buffering path, for tests, and for DSP
/// stand-ins of models that are still being trained.
pub struct ClosureBackend {
    name: String,
    shape: ModelShape,
    forward: ForwardFn,
    require_asset: bool,
    loaded: bool,
}

impl ClosureBackend {
    pub fn new(
        name: impl Into<String>,
        shape: ModelShape,
        forward: impl FnMut(&[f32], &[f32], &mut [f32]) + Send + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            shape,
            forward: Box::new(forward),
            require_asset: false,
            loaded: false,
        }
    }

    /// Emits the newest `shape.output` samples of each window unchanged.
    pub fn identity(shape: ModelShape) -> Self {
        Self::new("identity", shape, |input, _params, output| {
            let start = input.len() - output.len();
            output.copy_from_slice(&input[start..]);
        })
    }

    /// Identity scaled by `gain`.
    pub fn gain(shape: ModelShape, gain: f32) -> Self {
        Self::new("gain", shape, move |input, _params, output| {
            let start = input.len() - output.len();
            for (o, &i) in output.iter_mut().zip(&input[start..]) {
                *o = i * gain;
            }
        })
    }

    /// Fail [`load`](InferenceBackend::load) when the asset file does not exist.
    pub fn require_asset(mut self, require: bool) -> Self {
        self.require_asset = require;
        self
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }
}

impl InferenceBackend for ClosureBackend {
    fn load(&mut self, session_id: &str, asset: &ModelAsset) -> Result<ModelShape, InferenceError> {
        if self.require_asset {
            let path = asset.path();
            if !path.is_file() {
                return Err(InferenceError::AssetMissing(path));
            }
        }
        if self.shape.output > self.shape.input {
            return Err(InferenceError::LoadFailed(format!(
                "{}: output {} longer than input {}",
                self.name, self.shape.output, self.shape.input
            )));
        }
        tracing::debug!(
            session_id,
            model = %asset.file_name(),
            backend = %self.name,
            "closure model loaded"
        );
        self.loaded = true;
        Ok(self.shape)
    }

    #[inline]
    fn run(
        &mut self,
        input: &[f32],
        params: &[f32],
        output: &mut [f32],
    ) -> Result<(), InferenceError> {
        if !self.loaded {
            return Err(InferenceError::NotLoaded);
        }
        (self.forward)(input, params, output);
        Ok(())
    }

    fn release(&mut self) {
        self.loaded = false;
    }

    fn capabilities(&self) -> BackendCapabilities {
        BackendCapabilities {
            name: format!("closure/{}", self.name),
            has_gpu: false,
        }
    }
}
