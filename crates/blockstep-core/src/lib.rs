//! Block-synchronous windowing for real-time neural audio inference.
//!
//! A [`Session`] sits in a host's per-period callback. Every input sample is
//! pushed into a circular history; every `stride` samples a window of recent
//! history is handed to an [`InferenceBackend`], the call is timed, and the
//! resulting block is written back onto the frames that produced it.
//!
//! # Primary API
//!
//! - [`Session`]: setup / render / cleanup lifecycle
//! - [`SessionConfig`] / [`WindowSpec`] / [`ModelPreset`]: window geometry and run settings
//! - [`InferenceBackend`]: model runtime seam, with [`ClosureBackend`] as a stand-in
//! - [`AudioPeriod`] / [`OfflineHost`]: host buffer access
//! - [`TimingRecorder`] / [`TimingSummary`] / [`TimingLogFile`]: instrumentation
//!
//! # Example
//!
//! ```ignore
//! use blockstep_core::prelude::*;
//!
//! let config = SessionConfig::preset(ModelPreset::Ed).with_mode(RenderMode::SelfTest);
//! let mut session = Session::new(config, ClosureBackend::identity(ModelShape::new(32, 4, 16)));
//!
//! let mut host = OfflineHost::new(input, 48000.0, 128);
//! session.setup(&host.info())?;
//! while let Some(mut period) = host.next_period() {
//!     session.render(&mut period)?;
//! }
//! println!("{}", session.cleanup().summary.unwrap());
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod config;
pub use config::{RenderMode, SessionConfig};

pub mod host;
pub use host::{AudioPeriod, HostInfo, OfflineHost, OfflinePeriod};

pub mod inference;
pub use inference::{
    BackendCapabilities, ClosureBackend, ForwardFn, InferenceBackend, InferenceError, ModelAsset,
    ModelShape,
};

pub mod scatter;
pub use scatter::{OutputScatter, ScatterStats, FAN_OUT_CHANNELS};

mod session;
pub use session::{CleanupReport, RenderStatus, Session, SessionState};

pub mod timing;
pub use timing::{log_capacity, TimingLogFile, TimingRecorder, TimingSummary};

pub mod window;
pub use window::{CircularBuffer, ModelPreset, TriggerScheduler, WindowAssembler, WindowSpec};

pub mod prelude {
    pub use crate::{
        AudioPeriod, ClosureBackend, CleanupReport, Error, HostInfo, InferenceBackend,
        ModelPreset, ModelShape, OfflineHost, RenderMode, RenderStatus, Result, Session,
        SessionConfig, SessionState, TimingSummary, WindowSpec,
    };
}
