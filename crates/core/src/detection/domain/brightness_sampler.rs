use crate::shared::frame::Frame;
use crate::shared::rect::BoundingBox;

/// Midpoint of the 0-255 brightness scale, returned for degenerate
/// sampling regions so lighting checks see "neither bright nor dark".
pub const NEUTRAL_BRIGHTNESS: f64 = 127.5;

/// Domain interface for average-brightness sampling over a frame region.
///
/// Returns a value in [0, 255]. Degenerate (zero-area) regions yield
/// [`NEUTRAL_BRIGHTNESS`] rather than an error.
pub trait BrightnessSampler: Send {
    fn average_brightness(&self, frame: &Frame, region: &BoundingBox) -> f64;
}
