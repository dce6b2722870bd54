//! Inference latency instrumentation.

mod log_file;
mod recorder;
mod summary;

pub use log_file::TimingLogFile;
pub use recorder::{log_capacity, TimingRecorder};
pub use summary::TimingSummary;
