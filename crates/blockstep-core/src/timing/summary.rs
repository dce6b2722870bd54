//! Aggregate statistics over a timing log.

use std::fmt;

/// Latency summary in microseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSummary {
    pub count: usize,
    pub min: u64,
    pub max: u64,
    pub mean: f64,
    pub p50: u64,
    pub p99: u64,
    pub overruns: u64,
}

impl TimingSummary {
    /// `None` for an empty log. Sorts a copy, so call off the audio thread.
    pub fn from_entries(entries: &[u64], overruns: u64) -> Option<Self> {
        if entries.is_empty() {
            return None;
        }
        let mut sorted = entries.to_vec();
        sorted.sort_unstable();

        let sum: u128 = sorted.iter().map(|&e| e as u128).sum();
        Some(Self {
            count: sorted.len(),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            mean: sum as f64 / sorted.len() as f64,
            p50: percentile(&sorted, 50.0),
            p99: percentile(&sorted, 99.0),
            overruns,
        })
    }
}

/// Nearest-rank percentile of an ascending slice.
fn percentile(sorted: &[u64], pct: f64) -> u64 {
    let rank = (pct / 100.0 * sorted.len() as f64).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}

impl fmt::Display for TimingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} runs, min {} us, mean {:.1} us, p50 {} us, p99 {} us, max {} us, {} overruns",
            self.count, self.min, self.mean, self.p50, self.p99, self.max, self.overruns
        )
    }
}
