use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::sample::{ACC_RANGE_G, Sample};

/// Source of accelerometer samples: the producer side of the logger.
///
/// Implementations fill in the sample fields however they like; the
/// logger stores whatever it is handed.
pub trait SensorSource {
    fn read(&mut self) -> Sample;
}

/// Mock accelerometer: current epoch-milliseconds timestamp and uniform
/// random accelerations in [-16.0, +16.0] G on each axis.
pub struct MockSensor {
    rng: StdRng,
}

impl MockSensor {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic sample stream for tests and reproducible demo runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn epoch_ms() -> u32 {
        // Truncates to 32 bits like the reference sensor; wrap-around is
        // acceptable, the buffer imposes no timestamp ordering.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u32)
            .unwrap_or(0)
    }
}

impl SensorSource for MockSensor {
    fn read(&mut self) -> Sample {
        Sample {
            timestamp_ms: Self::epoch_ms(),
            acc_x: self.rng.gen_range(-ACC_RANGE_G..=ACC_RANGE_G),
            acc_y: self.rng.gen_range(-ACC_RANGE_G..=ACC_RANGE_G),
            acc_z: self.rng.gen_range(-ACC_RANGE_G..=ACC_RANGE_G),
        }
    }
}

impl Default for MockSensor {
    fn default() -> Self {
        Self::new()
    }
}
