pub mod render;
pub mod sensor;
