//! Stride counter deciding when a window is complete.

/// Fires once every `stride` ticks.
#[derive(Debug, Clone)]
pub struct TriggerScheduler {
    stride: usize,
    counter: usize,
    fired: u64,
}

impl TriggerScheduler {
    /// # Panics
    ///
    /// Panics if `stride` is zero.
    pub fn new(stride: usize) -> Self {
        assert!(stride > 0, "trigger stride must be non-zero");
        Self {
            stride,
            counter: 0,
            fired: 0,
        }
    }

    /// Count one incoming sample. Returns `true` when it completes a stride.
    #[inline]
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        if self.counter == self.stride {
            self.counter = 0;
            self.fired += 1;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn triggers_fired(&self) -> u64 {
        self.fired
    }
}
