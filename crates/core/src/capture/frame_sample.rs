use crate::shared::landmarks::LandmarkSet;
use crate::shared::pose::PoseAngles;
use crate::shared::rect::BoundingBox;

/// One accepted frame's detector output, kept only for the duration of
/// a capture sequence. Pixel data is not retained.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSample {
    pub landmarks: LandmarkSet,
    pub pose: PoseAngles,
    pub bounding_box: BoundingBox,
}

impl FrameSample {
    pub fn new(landmarks: LandmarkSet, pose: PoseAngles, bounding_box: BoundingBox) -> Self {
        Self {
            landmarks,
            pose,
            bounding_box,
        }
    }
}
