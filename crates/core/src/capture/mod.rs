pub mod confidence;
pub mod error;
pub mod frame_buffer;
pub mod frame_sample;
pub mod frame_selector;
pub mod fusion;
