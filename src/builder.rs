//! Builder for configuring and constructing a [`Harness`].

use crate::harness::Harness;
use crate::{Error, Result};
use blockstep_core::{
    ClosureBackend, InferenceBackend, ModelPreset, ModelShape, OfflineHost, Session, SessionConfig,
};

/// Without an explicit backend the harness runs an identity
/// [`ClosureBackend`] shaped to the configured window, which is enough to
/// benchmark the buffering path and to check self-test alignment.
///
/// # Example
///
/// ```ignore
/// use blockstep::prelude::*;
///
/// let report = Harness::builder()
///     .preset(ModelPreset::Ed)
///     .self_test()
///     .input(signal)
///     .sample_rate(48000.0)
///     .period_frames(128)
///     .build()?
///     .run()?;
///
/// println!("{}", report.summary().unwrap());
/// ```
pub struct HarnessBuilder {
    config: Option<SessionConfig>,
    backend: Option<Box<dyn InferenceBackend + Send>>,
    input: Vec<f32>,
    sample_rate: f64,
    period_frames: usize,
    self_test: bool,
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self {
            config: None,
            backend: None,
            input: Vec::new(),
            sample_rate: 48000.0,
            period_frames: 128,
            self_test: false,
        }
    }
}

impl HarnessBuilder {
    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Shorthand for `config(SessionConfig::preset(preset))`.
    pub fn preset(self, preset: ModelPreset) -> Self {
        self.config(SessionConfig::preset(preset))
    }

    pub fn backend(mut self, backend: impl InferenceBackend + Send + 'static) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Mono input signal.
    pub fn input(mut self, samples: Vec<f32>) -> Self {
        self.input = samples;
        self
    }

    /// Default: 48000
    pub fn sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Default: 128
    pub fn period_frames(mut self, frames: usize) -> Self {
        self.period_frames = frames;
        self
    }

    /// Switch the configured session to self-test rendering.
    pub fn self_test(mut self) -> Self {
        self.self_test = true;
        self
    }

    pub fn build(self) -> Result<Harness> {
        let mut config = self
            .config
            .unwrap_or_else(|| SessionConfig::preset(ModelPreset::Topline));
        if self.self_test {
            config = config.with_mode(blockstep_core::RenderMode::SelfTest);
        }
        config.validate()?;

        if self.period_frames == 0 {
            return Err(Error::Harness("period_frames must be at least 1".into()));
        }

        let backend = self.backend.unwrap_or_else(|| {
            let window = &config.window;
            Box::new(ClosureBackend::identity(ModelShape::new(
                window.window_samples,
                window.aux_param_count,
                window.output_samples,
            )))
        });

        let session = Session::with_boxed_backend(config, backend);
        let host = OfflineHost::new(self.input, self.sample_rate, self.period_frames);
        Ok(Harness::from_parts(session, host))
    }
}
