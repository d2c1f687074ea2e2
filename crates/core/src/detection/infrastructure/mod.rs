pub mod frame_brightness_sampler;
pub mod image_frame_reader;
pub mod recorded_detector;
