use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::frame::Frame;
use crate::shared::landmarks::LandmarkSet;
use crate::shared::pose::PoseAngles;
use crate::shared::rect::BoundingBox;

/// One detected face: bounding box, head pose, named landmark groups,
/// and an optional tracking id carried across frames.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DetectedFace {
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub pose: PoseAngles,
    #[serde(default)]
    pub landmarks: LandmarkSet,
    #[serde(default)]
    pub tracking_id: Option<u32>,
}

#[derive(Error, Debug)]
pub enum DetectorError {
    #[error("detector invoked before initialization")]
    NotInitialized,
}

/// Domain interface for face landmark detection.
///
/// Implementations may be stateful (e.g., tracking across frames),
/// hence `&mut self`. At most one face is reported per frame; `None`
/// means no face was present and is not an error. The detector is a
/// scoped resource owned by the caller; this crate never manages its
/// lifecycle beyond invoking it.
pub trait LandmarkDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Option<DetectedFace>, Box<dyn std::error::Error>>;
}
