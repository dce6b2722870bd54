//! Builds the flat inference window from history.

use super::history::CircularBuffer;

/// Owns the scratch window handed to the inference backend.
pub struct WindowAssembler {
    window: Box<[f32]>,
    stride: usize,
}

impl WindowAssembler {
    pub fn new(window_samples: usize, stride_samples: usize) -> Self {
        Self {
            window: vec![0.0; window_samples].into_boxed_slice(),
            stride: stride_samples,
        }
    }

    /// Gather the window at the history's read cursor, then step the read
    /// cursor forward by one stride.
    #[inline]
    pub fn assemble(&mut self, history: &mut CircularBuffer) -> &[f32] {
        history.gather_at_read(&mut self.window);
        history.advance_read(self.stride);
        &self.window
    }

    /// The most recently assembled window.
    #[inline]
    pub fn window(&self) -> &[f32] {
        &self.window
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }
}
