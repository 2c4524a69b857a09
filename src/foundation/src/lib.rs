pub mod api;
pub mod model;

pub use api::render::{Format, write_csv, write_json};
pub use api::sensor::{MockSensor, SensorSource};
pub use model::circular_buffer::CircularBuffer;
pub use model::sample::Sample;
pub use model::sensor_log::SensorLog;
