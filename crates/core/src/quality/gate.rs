//! Combined per-frame admissibility check.
//!
//! A failing gate is advisory state for the live preview, never an
//! error: capture is withheld while the caller relays the feedback.

use log::debug;

use crate::detection::domain::landmark_detector::DetectedFace;
use crate::quality::face_size::{validate_face_size, FaceSizeValidation};
use crate::quality::head_pose::{validate_head_pose, PoseValidation};
use crate::quality::lighting::{validate_lighting, LightingValidation};
use crate::shared::config::EngineConfig;

pub const NO_FACE_MESSAGE: &str = "No face detected";
pub const READY_MESSAGE: &str = "Ready";

#[derive(Clone, Debug, PartialEq)]
pub struct QualityGateResult {
    pub passed: bool,
    pub face_detected: bool,
    pub face_size: FaceSizeValidation,
    pub pose: PoseValidation,
    pub lighting: LightingValidation,
    /// Feedback for failed sub-checks, in face-size, pose, lighting order.
    pub failure_reasons: Vec<String>,
}

impl QualityGateResult {
    /// Synthetic result for a frame with no detected face.
    ///
    /// All three sub-checks are marked failed with zeroed fields; the
    /// individual checks are never run against empty data, keeping
    /// divide-by-zero paths out of the no-face case entirely.
    pub fn no_face(config: &EngineConfig) -> Self {
        Self {
            passed: false,
            face_detected: false,
            face_size: FaceSizeValidation::failed_empty(config),
            pose: PoseValidation::failed_empty(config),
            lighting: LightingValidation::failed_empty(),
            failure_reasons: vec![NO_FACE_MESSAGE.to_string()],
        }
    }

    /// First failure reason, "No face detected" when no face was found,
    /// or "Ready" when every check passed.
    pub fn primary_message(&self) -> &str {
        if !self.face_detected {
            return NO_FACE_MESSAGE;
        }
        match self.failure_reasons.first() {
            Some(reason) => reason,
            None => READY_MESSAGE,
        }
    }
}

/// Runs all three sub-checks against one detected face.
///
/// `left_brightness` / `right_brightness` are raw 0-255 samples over the
/// corresponding halves of the face box, from the pixel-sampling
/// collaborator.
pub fn evaluate_quality_gate(
    face: &DetectedFace,
    image_width: f64,
    left_brightness: f64,
    right_brightness: f64,
    config: &EngineConfig,
) -> QualityGateResult {
    let face_size = validate_face_size(face.bounding_box.width, image_width, config);
    let pose = validate_head_pose(&face.pose, config);
    let lighting = validate_lighting(left_brightness, right_brightness, config);

    let failure_reasons: Vec<String> = [
        face_size.feedback(),
        pose.feedback(),
        lighting.feedback(),
    ]
    .into_iter()
    .flatten()
    .collect();

    let passed = face_size.passed && pose.passed && lighting.passed;
    debug!(
        "quality gate: size={} pose={} lighting={} -> {}",
        face_size.passed, pose.passed, lighting.passed, passed
    );

    QualityGateResult {
        passed,
        face_detected: true,
        face_size,
        pose,
        lighting,
        failure_reasons,
    }
}
