//! Window geometry shared by every stage of the pipeline.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Immutable per-session window geometry.
///
/// A trigger fires every `stride_samples` inputs and reads `window_samples`
/// from history. When the stride is shorter than the window, the window carries
/// `window - stride` samples of prior context.
///
/// The write cursor starts `preroll_samples` ahead of the read cursor, so the
/// first windows read silence instead of uninitialized history. With the
/// default pre-roll of one full window the output lags the input by exactly
/// one stride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSpec {
    pub window_samples: usize,
    pub stride_samples: usize,
    pub output_samples: usize,
    #[serde(default)]
    pub aux_param_count: usize,
    /// Default: `window_samples`
    #[serde(default)]
    pub preroll_samples: Option<usize>,
    /// Start of the window slice re-emitted in self-test mode.
    /// Default: `window_samples - output_samples` (the newest samples)
    #[serde(default)]
    pub passthrough_offset: Option<usize>,
}

impl WindowSpec {
    /// Non-overlapping window: W = S = O.
    pub fn block(size: usize) -> Self {
        Self {
            window_samples: size,
            stride_samples: size,
            output_samples: size,
            aux_param_count: 0,
            preroll_samples: None,
            passthrough_offset: None,
        }
    }

    /// Window of `window` samples advanced by `stride`, emitting `stride` samples.
    pub fn sliding(window: usize, stride: usize) -> Self {
        Self {
            window_samples: window,
            stride_samples: stride,
            output_samples: stride,
            aux_param_count: 0,
            preroll_samples: None,
            passthrough_offset: None,
        }
    }

    pub fn with_output(mut self, output_samples: usize) -> Self {
        self.output_samples = output_samples;
        self
    }

    pub fn with_aux_params(mut self, count: usize) -> Self {
        self.aux_param_count = count;
        self
    }

    pub fn with_preroll(mut self, samples: usize) -> Self {
        self.preroll_samples = Some(samples);
        self
    }

    pub fn with_passthrough_offset(mut self, offset: usize) -> Self {
        self.passthrough_offset = Some(offset);
        self
    }

    #[inline]
    pub fn preroll(&self) -> usize {
        self.preroll_samples.unwrap_or(self.window_samples)
    }

    #[inline]
    pub fn passthrough_offset(&self) -> usize {
        self.passthrough_offset
            .unwrap_or(self.window_samples.saturating_sub(self.output_samples))
    }

    /// Samples of prior context carried by each window beyond the stride.
    #[inline]
    pub fn context_samples(&self) -> usize {
        self.window_samples.saturating_sub(self.stride_samples)
    }

    /// Delay between an input sample and its self-test echo in the output.
    ///
    /// Zero for an acausal pre-roll, which [`validate`](Self::validate) rejects.
    #[inline]
    pub fn latency_samples(&self) -> usize {
        (self.preroll() + self.stride_samples).saturating_sub(self.window_samples)
    }

    /// Smallest history capacity that keeps the oldest windowed sample alive
    /// until its trigger.
    #[inline]
    pub fn min_history(&self) -> usize {
        self.window_samples.max(self.preroll() + self.stride_samples)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window_samples == 0 {
            return Err(Error::InvalidConfig("window_samples must be > 0".into()));
        }
        if self.stride_samples == 0 {
            return Err(Error::InvalidConfig("stride_samples must be > 0".into()));
        }
        if self.output_samples == 0 || self.output_samples > self.stride_samples {
            return Err(Error::InvalidConfig(format!(
                "output_samples {} out of range (1-{})",
                self.output_samples, self.stride_samples
            )));
        }
        if self.preroll() < self.context_samples() {
            return Err(Error::InvalidConfig(format!(
                "preroll_samples {} shorter than window context {}",
                self.preroll(),
                self.context_samples()
            )));
        }
        if self.passthrough_offset() + self.output_samples > self.window_samples {
            return Err(Error::InvalidConfig(format!(
                "passthrough_offset {} + output_samples {} exceeds window {}",
                self.passthrough_offset(),
                self.output_samples,
                self.window_samples
            )));
        }
        Ok(())
    }
}

/// Window layouts of the bundled benchmark models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelPreset {
    /// One sample in, one sample out.
    Baseline,
    /// LSTM amp model: 5-sample causal context, runs every sample.
    GuitarLstm,
    /// 16-sample blocks, no overlap.
    Topline,
    /// Encoder-decoder compressor: 32-sample window, 16-sample hop, 4 conditioning params.
    Ed,
}

impl ModelPreset {
    pub const ALL: [ModelPreset; 4] = [
        ModelPreset::Baseline,
        ModelPreset::GuitarLstm,
        ModelPreset::Topline,
        ModelPreset::Ed,
    ];

    pub fn model_name(self) -> &'static str {
        match self {
            ModelPreset::Baseline => "baseline",
            ModelPreset::GuitarLstm => "GuitarLSTM",
            ModelPreset::Topline => "topline",
            ModelPreset::Ed => "ED",
        }
    }

    pub fn window(self) -> WindowSpec {
        match self {
            ModelPreset::Baseline => WindowSpec::block(1).with_preroll(0),
            ModelPreset::GuitarLstm => WindowSpec::sliding(5, 1).with_preroll(4),
            ModelPreset::Topline => WindowSpec::block(16),
            ModelPreset::Ed => WindowSpec::sliding(32, 16)
                .with_aux_params(4)
                .with_preroll(16),
        }
    }
}

impl std::str::FromStr for ModelPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(ModelPreset::Baseline),
            "guitarlstm" | "guitar_lstm" | "guitar-lstm" => Ok(ModelPreset::GuitarLstm),
            "topline" => Ok(ModelPreset::Topline),
            "ed" => Ok(ModelPreset::Ed),
            other => Err(Error::InvalidConfig(format!("unknown preset: {other}"))),
        }
    }
}
