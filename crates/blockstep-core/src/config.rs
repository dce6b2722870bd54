//! Session configuration.

use crate::inference::ModelAsset;
use crate::timing::TimingLogFile;
use crate::window::{ModelPreset, WindowSpec};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What the session writes to the output stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Model output.
    #[default]
    Production,
    /// A slice of the raw input window, so the buffering path can be checked
    /// against an untrained model. The model still runs and is still timed.
    SelfTest,
}

/// Configuration for one benchmarking session.
///
/// Sample rate and period size come from the host at setup.
///
/// ```toml
/// model_name = "ED"
/// mode = "self_test"
/// log_dir = "/sdcard"
///
/// [window]
/// window_samples = 32
/// stride_samples = 16
/// output_samples = 16
/// aux_param_count = 4
/// preroll_samples = 16
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_session_id")]
    pub session_id: String,
    pub model_name: String,
    #[serde(default = "default_model_format")]
    pub model_format: String,
    #[serde(default = "default_dir")]
    pub asset_root: PathBuf,
    #[serde(default = "default_dir")]
    pub log_dir: PathBuf,
    /// Record inference timings and stop once the log is full.
    #[serde(default = "default_true")]
    pub timing_enabled: bool,
    #[serde(default = "default_test_duration")]
    pub test_duration_secs: f64,
    /// Default: one second of audio at the host sample rate.
    #[serde(default)]
    pub history_capacity: Option<usize>,
    #[serde(default)]
    pub mode: RenderMode,
    pub window: WindowSpec,
    /// Constant conditioning vector. Empty means all zeros.
    #[serde(default)]
    pub aux_params: Vec<f32>,
}

fn default_session_id() -> String {
    "session1".to_string()
}

fn default_model_format() -> String {
    "onnx".to_string()
}

fn default_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_true() -> bool {
    true
}

fn default_test_duration() -> f64 {
    10.0
}

impl SessionConfig {
    pub fn new(model_name: impl Into<String>, window: WindowSpec) -> Self {
        Self {
            session_id: default_session_id(),
            model_name: model_name.into(),
            model_format: default_model_format(),
            asset_root: default_dir(),
            log_dir: default_dir(),
            timing_enabled: true,
            test_duration_secs: default_test_duration(),
            history_capacity: None,
            mode: RenderMode::default(),
            window,
            aux_params: Vec::new(),
        }
    }

    pub fn preset(preset: ModelPreset) -> Self {
        Self::new(preset.model_name(), preset.window())
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }

    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_model_format(mut self, format: impl Into<String>) -> Self {
        self.model_format = format.into();
        self
    }

    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_test_duration(mut self, secs: f64) -> Self {
        self.test_duration_secs = secs;
        self
    }

    /// Run without a timing log and without a stop condition.
    pub fn without_timing(mut self) -> Self {
        self.timing_enabled = false;
        self
    }

    pub fn with_history_capacity(mut self, samples: usize) -> Self {
        self.history_capacity = Some(samples);
        self
    }

    pub fn with_aux_params(mut self, params: Vec<f32>) -> Self {
        self.aux_params = params;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.window.validate()?;

        if self.model_name.is_empty() {
            return Err(Error::InvalidConfig("model_name is empty".into()));
        }
        if self.timing_enabled
            && !(self.test_duration_secs.is_finite() && self.test_duration_secs > 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "test_duration_secs {} must be positive",
                self.test_duration_secs
            )));
        }
        if !self.aux_params.is_empty() && self.aux_params.len() != self.window.aux_param_count {
            return Err(Error::InvalidConfig(format!(
                "{} aux_params given, window declares {}",
                self.aux_params.len(),
                self.window.aux_param_count
            )));
        }
        if let Some(capacity) = self.history_capacity {
            self.check_history(capacity)?;
        }
        Ok(())
    }

    /// History ring size for a stream at `sample_rate`.
    pub fn history_capacity_for(&self, sample_rate: f64) -> usize {
        self.history_capacity
            .unwrap_or_else(|| (sample_rate as usize).max(self.window.min_history()))
    }

    pub(crate) fn check_history(&self, capacity: usize) -> Result<()> {
        let min = self.window.min_history();
        if capacity < min {
            return Err(Error::InvalidConfig(format!(
                "history_capacity {capacity} below the {min} samples this window needs"
            )));
        }
        Ok(())
    }

    /// Aux parameter vector, zero-filled when none were configured.
    pub fn resolved_aux_params(&self) -> Vec<f32> {
        if self.aux_params.is_empty() {
            vec![0.0; self.window.aux_param_count]
        } else {
            self.aux_params.clone()
        }
    }

    pub fn asset(&self) -> ModelAsset {
        ModelAsset::new(&self.model_name, &self.model_format, &self.asset_root)
    }

    pub fn timing_log(&self) -> TimingLogFile {
        TimingLogFile::new(
            &self.log_dir,
            &self.model_name,
            self.window.output_samples,
            &self.model_format,
        )
    }
}
