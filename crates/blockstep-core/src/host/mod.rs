//! Audio host seam: what a session needs from whoever owns the audio device.

mod offline;

pub use offline::{OfflineHost, OfflinePeriod};

/// Stream parameters known before the first period.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostInfo {
    pub sample_rate: f64,
    /// Frames per render callback.
    pub period_frames: usize,
}

impl HostInfo {
    pub fn new(sample_rate: f64, period_frames: usize) -> Self {
        Self {
            sample_rate,
            period_frames,
        }
    }
}

/// One render callback's worth of audio.
///
/// Frame indices are relative to the start of the period. Output frames
/// not written during the callback are whatever the host put there (the
/// offline host zero-fills).
pub trait AudioPeriod {
    fn frames(&self) -> usize;

    fn output_channels(&self) -> usize;

    fn read(&self, frame: usize, channel: usize) -> f32;

    fn write(&mut self, frame: usize, channel: usize, value: f32);

    /// Ask the host to stop delivering periods after this one.
    fn request_stop(&mut self);
}
