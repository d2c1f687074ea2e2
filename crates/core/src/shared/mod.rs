pub mod config;
pub mod frame;
pub mod landmarks;
pub mod point;
pub mod pose;
pub mod rect;
