use foundation::{Sample, SensorLog};

/// Reference buffer capacity used across the scenario tests.
pub const CAPACITY: usize = 128;

/// A recognizable sample whose fields encode its insertion index.
pub fn sample_at(i: u32) -> Sample {
    Sample::new(i, i as f32, -(i as f32), 0.5)
}

/// Logs `count` indexed samples, timestamps `0..count`.
pub fn fill(log: &SensorLog, count: u32) {
    for i in 0..count {
        log.log(sample_at(i));
    }
}

/// Timestamps of the retained samples, oldest first.
pub fn timestamps(log: &SensorLog) -> Vec<u32> {
    log.snapshot()
        .iter()
        .map(|sample| sample.timestamp_ms)
        .collect()
}
