use std::sync::Mutex;

use crate::model::circular_buffer::CircularBuffer;
use crate::model::sample::Sample;

/// A single logger instance: the circular sample buffer behind a lock.
///
/// The reference design guards every buffer operation with a critical
/// section; here that boundary is a real mutex, so `snapshot` always
/// observes a state that existed at one instant — never a half-applied
/// insert. Single-threaded callers pay one uncontended lock per call.
pub struct SensorLog {
    buffer: Mutex<CircularBuffer<Sample>>,
}

impl SensorLog {
    /// Reference buffer capacity: the 128 most recent samples.
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Creates a logger retaining up to `capacity` samples.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(CircularBuffer::new(capacity)),
        }
    }

    /// Clears the log back to the empty state. Idempotent; previously
    /// retained samples are discarded.
    pub fn reset(&self) {
        let mut buffer = self.buffer.lock().unwrap();
        buffer.reset();
        log::debug!("sensor log reset, capacity {}", buffer.capacity());
    }

    /// Stores `sample`, evicting the oldest retained sample when full.
    pub fn log(&self, sample: Sample) {
        let mut buffer = self.buffer.lock().unwrap();
        if buffer.is_full() {
            log::trace!("buffer full, evicting oldest sample");
        }
        buffer.push(sample);
    }

    /// Ordered copy of the retained samples, oldest first.
    pub fn snapshot(&self) -> Vec<Sample> {
        let buffer = self.buffer.lock().unwrap();
        buffer.iter().copied().collect()
    }

    /// Number of samples currently retained.
    pub fn len(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.lock().unwrap().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.lock().unwrap().capacity()
    }

    /// Diagnostic: the next slot index to be written.
    pub fn cursor(&self) -> usize {
        self.buffer.lock().unwrap().cursor()
    }

    /// Diagnostic: raw slot contents at `index`, `None` out of range.
    pub fn slot(&self, index: usize) -> Option<Sample> {
        self.buffer.lock().unwrap().get(index).copied()
    }
}

impl Default for SensorLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}
