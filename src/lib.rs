//! # Blockstep - Real-time Neural Audio Benchmarking
//!
//! Runs a fixed-shape inference model over a live audio stream in
//! stride-sized steps, writes its output back with deterministic latency, and
//! logs how long every invocation took.
//!
//! ## Architecture
//!
//! Blockstep is an umbrella crate over:
//! - **blockstep-core** - Windowing pipeline (history ring, triggers, scatter,
//!   timing log), session controller, inference and host seams
//! - **harness** - Offline driver that runs a session over an in-memory signal
//! - **wav** - WAV input/output for offline runs
//!
//! ## Quick Start
//!
//! ```ignore
//! use blockstep::prelude::*;
//!
//! let report = Harness::builder()
//!     .preset(ModelPreset::Topline)
//!     .input(blockstep::wav::read_wav_mono("guitar.wav")?.samples)
//!     .build()?
//!     .run()?;
//!
//! println!("{}", report.summary().unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `default` - `wav` and `cli`
//! - `wav` - WAV file input/output
//! - `cli` - `blockstep-bench` runner

/// Re-export of blockstep-core for direct access
pub use blockstep_core as core;

pub use blockstep_core::{
    // Host
    AudioPeriod,
    BackendCapabilities,
    CleanupReport,
    ClosureBackend,
    HostInfo,
    // Inference
    InferenceBackend,
    InferenceError,
    ModelAsset,
    ModelPreset,
    ModelShape,
    OfflineHost,
    RenderMode,
    RenderStatus,
    ScatterStats,

    // Session
    Session,
    SessionConfig,
    SessionState,
    TimingLogFile,
    // Timing
    TimingRecorder,
    TimingSummary,
    WindowSpec,
};

mod error;
pub use error::{Error, Result};

mod builder;
mod harness;

pub use builder::HarnessBuilder;
pub use harness::{Harness, HarnessReport};

#[cfg(feature = "wav")]
pub mod wav;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::{Harness, HarnessBuilder, HarnessReport};

    pub use crate::core::{
        AudioPeriod, ClosureBackend, HostInfo, InferenceBackend, ModelPreset, ModelShape,
        OfflineHost, RenderMode, RenderStatus, Session, SessionConfig, SessionState, TimingSummary,
        WindowSpec,
    };
}
