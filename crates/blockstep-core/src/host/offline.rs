//! Offline host: drives a session from an in-memory signal, no audio device.

use super::{AudioPeriod, HostInfo};

/// Mono-in, stereo-out host that slices a buffer into fixed-size periods.
///
/// The final period is shorter when the input length is not a multiple of
/// the period size. A stop request is honoured between periods.
pub struct OfflineHost {
    input: Vec<f32>,
    left: Vec<f32>,
    right: Vec<f32>,
    sample_rate: f64,
    period_frames: usize,
    position: usize,
    periods: usize,
    stop_requests: usize,
}

impl OfflineHost {
    /// # Panics
    ///
    /// Panics if `period_frames` is zero.
    pub fn new(input: Vec<f32>, sample_rate: f64, period_frames: usize) -> Self {
        assert!(period_frames > 0, "period size must be non-zero");
        let len = input.len();
        Self {
            input,
            left: vec![0.0; len],
            right: vec![0.0; len],
            sample_rate,
            period_frames,
            position: 0,
            periods: 0,
            stop_requests: 0,
        }
    }

    pub fn info(&self) -> HostInfo {
        HostInfo::new(self.sample_rate, self.period_frames)
    }

    /// Hand out the next period, or `None` once the input is exhausted or a
    /// stop was requested.
    pub fn next_period(&mut self) -> Option<OfflinePeriod<'_>> {
        if self.stop_requests > 0 || self.position >= self.input.len() {
            return None;
        }
        let start = self.position;
        let end = (start + self.period_frames).min(self.input.len());
        self.position = end;
        self.periods += 1;

        let left = &mut self.left[start..end];
        let right = &mut self.right[start..end];
        left.fill(0.0);
        right.fill(0.0);

        Some(OfflinePeriod {
            input: &self.input[start..end],
            left,
            right,
            stop_requests: &mut self.stop_requests,
        })
    }

    /// Frames delivered so far.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn periods_rendered(&self) -> usize {
        self.periods
    }

    pub fn stop_requests(&self) -> usize {
        self.stop_requests
    }

    pub fn is_stopped(&self) -> bool {
        self.stop_requests > 0
    }

    pub fn left(&self) -> &[f32] {
        &self.left
    }

    pub fn right(&self) -> &[f32] {
        &self.right
    }

    /// Rendered output truncated to the frames actually delivered.
    pub fn into_output(mut self) -> (Vec<f32>, Vec<f32>) {
        self.left.truncate(self.position);
        self.right.truncate(self.position);
        (self.left, self.right)
    }
}

/// A period borrowed from an [`OfflineHost`].
pub struct OfflinePeriod<'a> {
    input: &'a [f32],
    left: &'a mut [f32],
    right: &'a mut [f32],
    stop_requests: &'a mut usize,
}

impl AudioPeriod for OfflinePeriod<'_> {
    #[inline]
    fn frames(&self) -> usize {
        self.input.len()
    }

    fn output_channels(&self) -> usize {
        2
    }

    #[inline]
    fn read(&self, frame: usize, channel: usize) -> f32 {
        if channel == 0 {
            self.input[frame]
        } else {
            0.0
        }
    }

    #[inline]
    fn write(&mut self, frame: usize, channel: usize, value: f32) {
        match channel {
            0 => self.left[frame] = value,
            1 => self.right[frame] = value,
            _ => {}
        }
    }

    fn request_stop(&mut self) {
        *self.stop_requests += 1;
    }
}
