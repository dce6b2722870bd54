//! Circular sample history with independent write and read cursors.

/// Fixed-capacity ring of mono samples.
///
/// Storage is zero-filled at construction and never reallocated. The write
/// cursor advances on every [`push`](Self::push); the read cursor only moves
/// through [`advance_read`](Self::advance_read), once per trigger.
pub struct CircularBuffer {
    storage: Box<[f32]>,
    write_pos: usize,
    read_pos: usize,
}

impl CircularBuffer {
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be non-zero");
        Self {
            storage: vec![0.0; capacity].into_boxed_slice(),
            write_pos: 0,
            read_pos: 0,
        }
    }

    /// Ring with the write cursor already `preroll` samples ahead of the read
    /// cursor. The skipped slots stay at zero.
    pub fn with_preroll(capacity: usize, preroll: usize) -> Self {
        let mut buffer = Self::new(capacity);
        buffer.write_pos = preroll % capacity;
        buffer
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    #[inline]
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    #[inline]
    pub fn push(&mut self, sample: f32) {
        self.storage[self.write_pos] = sample;
        self.write_pos += 1;
        if self.write_pos == self.storage.len() {
            self.write_pos = 0;
        }
    }

    /// Copy `out.len()` samples starting at `start` into `out`, wrapping at the
    /// end of storage. Cursors are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `start >= capacity` or `out.len() > capacity`.
    #[inline]
    pub fn gather(&self, start: usize, out: &mut [f32]) {
        let capacity = self.storage.len();
        assert!(start < capacity, "gather start {start} outside history of {capacity}");
        assert!(
            out.len() <= capacity,
            "gather of {} samples exceeds history of {capacity}",
            out.len()
        );

        let tail_len = capacity - start;
        if out.len() <= tail_len {
            out.copy_from_slice(&self.storage[start..start + out.len()]);
        } else {
            let (tail, head) = out.split_at_mut(tail_len);
            tail.copy_from_slice(&self.storage[start..]);
            head.copy_from_slice(&self.storage[..head.len()]);
        }
    }

    /// Gather at the read cursor.
    #[inline]
    pub fn gather_at_read(&self, out: &mut [f32]) {
        self.gather(self.read_pos, out);
    }

    #[inline]
    pub fn advance_read(&mut self, samples: usize) {
        self.read_pos = (self.read_pos + samples) % self.storage.len();
    }
}
