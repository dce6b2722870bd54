//! Fixed-capacity per-invocation latency log.

use std::time::Duration;

/// Log capacity for a benchmark of `duration_secs` at `sample_rate`, one
/// entry per `output_samples`-sized block.
pub fn log_capacity(sample_rate: f64, duration_secs: f64, output_samples: usize) -> usize {
    (sample_rate * duration_secs / output_samples as f64).ceil() as usize
}

/// Pre-allocated log of inference durations in microseconds.
///
/// Never grows past its capacity: once full, further records are refused.
/// Invocations slower than the stride budget are counted as overruns.
pub struct TimingRecorder {
    entries: Vec<u64>,
    capacity: usize,
    budget: Duration,
    overruns: u64,
}

impl TimingRecorder {
    /// `budget` is the real-time allowance per invocation, normally one stride.
    pub fn new(capacity: usize, budget: Duration) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            capacity,
            budget,
            overruns: 0,
        }
    }

    /// Returns `false` without recording when the log is already full.
    #[inline]
    pub fn record(&mut self, elapsed: Duration) -> bool {
        if self.is_full() {
            return false;
        }
        if elapsed > self.budget {
            self.overruns += 1;
        }
        self.entries.push(elapsed.as_micros() as u64);
        true
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Recorded durations in invocation order.
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_formula() {
        assert_eq!(log_capacity(48000.0, 10.0, 16), 30000);
        assert_eq!(log_capacity(48000.0, 10.0, 1), 480000);
        assert_eq!(log_capacity(44100.0, 10.0, 16), 27563);
    }

    #[test]
    fn test_records_until_full() {
        let mut recorder = TimingRecorder::new(3, Duration::from_millis(1));
        assert!(recorder.is_empty());
        for us in [10, 20, 30] {
            assert!(!recorder.is_full());
            assert!(recorder.record(Duration::from_micros(us)));
        }
        assert!(recorder.is_full());
        assert!(!recorder.record(Duration::from_micros(40)));
        assert_eq!(recorder.entries(), &[10, 20, 30]);
        assert_eq!(recorder.len(), recorder.capacity());
    }

    #[test]
    fn test_truncates_to_whole_microseconds() {
        let mut recorder = TimingRecorder::new(1, Duration::from_secs(1));
        recorder.record(Duration::from_nanos(1_999));
        assert_eq!(recorder.entries(), &[1]);
    }

    #[test]
    fn test_counts_overruns() {
        let mut recorder = TimingRecorder::new(4, Duration::from_micros(333));
        recorder.record(Duration::from_micros(100));
        recorder.record(Duration::from_micros(333));
        recorder.record(Duration::from_micros(334));
        recorder.record(Duration::from_millis(2));
        assert_eq!(recorder.overruns(), 2);
    }

    #[test]
    fn test_zero_capacity_is_immediately_full() {
        let mut recorder = TimingRecorder::new(0, Duration::ZERO);
        assert!(recorder.is_full());
        assert!(!recorder.record(Duration::ZERO));
    }
}
