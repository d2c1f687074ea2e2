pub mod brightness_sampler;
pub mod landmark_detector;
