use serde::{Deserialize, Serialize};

/// Producer contract: each acceleration axis stays within ±16 G.
/// The buffer treats samples as opaque payload and never checks this.
pub const ACC_RANGE_G: f32 = 16.0;

/// One timestamped three-axis accelerometer reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch timestamp, millisecond resolution.
    pub timestamp_ms: u32,
    /// X-axis acceleration (G).
    pub acc_x: f32,
    /// Y-axis acceleration (G).
    pub acc_y: f32,
    /// Z-axis acceleration (G).
    pub acc_z: f32,
}

impl Sample {
    pub fn new(timestamp_ms: u32, acc_x: f32, acc_y: f32, acc_z: f32) -> Self {
        Self {
            timestamp_ms,
            acc_x,
            acc_y,
            acc_z,
        }
    }

    /// The defined zero sample used for cleared buffer slots.
    pub fn zeroed() -> Self {
        Self::default()
    }
}
