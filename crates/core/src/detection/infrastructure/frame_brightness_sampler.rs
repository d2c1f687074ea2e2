use ndarray::s;

use crate::detection::domain::brightness_sampler::{BrightnessSampler, NEUTRAL_BRIGHTNESS};
use crate::shared::frame::Frame;
use crate::shared::rect::BoundingBox;

/// Samples mean brightness over a frame region by averaging all channel
/// bytes inside the clamped pixel rectangle.
///
/// Sub-pixel region edges are truncated to whole pixels. Regions that
/// clamp to zero area return [`NEUTRAL_BRIGHTNESS`].
#[derive(Default)]
pub struct FrameBrightnessSampler;

impl FrameBrightnessSampler {
    pub fn new() -> Self {
        Self
    }
}

impl BrightnessSampler for FrameBrightnessSampler {
    fn average_brightness(&self, frame: &Frame, region: &BoundingBox) -> f64 {
        if region.is_degenerate() {
            return NEUTRAL_BRIGHTNESS;
        }

        let x0 = (region.x.max(0.0) as usize).min(frame.width() as usize);
        let y0 = (region.y.max(0.0) as usize).min(frame.height() as usize);
        let x1 = ((region.x + region.width).max(0.0) as usize).min(frame.width() as usize);
        let y1 = ((region.y + region.height).max(0.0) as usize).min(frame.height() as usize);

        if x0 >= x1 || y0 >= y1 {
            return NEUTRAL_BRIGHTNESS;
        }

        let view = frame.as_ndarray();
        let roi = view.slice(s![y0..y1, x0..x1, ..]);
        let sum: u64 = roi.iter().map(|&b| b as u64).sum();
        sum as f64 / roi.len() as f64
    }
}
