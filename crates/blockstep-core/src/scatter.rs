//! Retroactive placement of inference output into the period buffer.

use crate::host::AudioPeriod;

/// Output channels a mono block is duplicated to.
pub const FAN_OUT_CHANNELS: usize = 2;

/// Bookkeeping for [`OutputScatter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScatterStats {
    /// Block samples written to the period (counted once, not per channel).
    pub written: u64,
    /// Block samples whose target frame was already handed back to the host.
    pub dropped: u64,
}

/// Writes each output block onto the frames that produced it.
///
/// A block of `O` samples completed by input frame `n` lands on frames
/// `n - O + 1 ..= n`. Targets before the start of the current period can no
/// longer be written and are dropped; this only happens when the period size
/// is not a multiple of the stride.
#[derive(Debug, Default)]
pub struct OutputScatter {
    stats: ScatterStats,
}

impl OutputScatter {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn scatter<P: AudioPeriod + ?Sized>(
        &mut self,
        block: &[f32],
        completed_frame: usize,
        period: &mut P,
    ) {
        let channels = period.output_channels().min(FAN_OUT_CHANNELS);
        let elapsed = completed_frame + 1;
        let skip = block.len().saturating_sub(elapsed);
        let first_frame = elapsed + skip - block.len();

        if skip > 0 {
            if self.stats.dropped == 0 {
                tracing::warn!(
                    skipped = skip,
                    "output block reaches into a previous period; leading samples dropped"
                );
            }
            self.stats.dropped += skip as u64;
        }

        for (offset, &sample) in block[skip..].iter().enumerate() {
            let frame = first_frame + offset;
            for channel in 0..channels {
                period.write(frame, channel, sample);
            }
        }
        self.stats.written += (block.len() - skip) as u64;
    }

    pub fn stats(&self) -> ScatterStats {
        self.stats
    }
}
