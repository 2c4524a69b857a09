pub mod circular_buffer;
pub mod sample;
pub mod sensor_log;
