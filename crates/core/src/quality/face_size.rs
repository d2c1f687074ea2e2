use crate::shared::config::EngineConfig;

/// Result of the face-size admissibility check.
///
/// `passed` is fixed at construction from the other fields and is never
/// mutated independently of them.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceSizeValidation {
    pub passed: bool,
    pub face_width_ratio: f64,
    pub min_required: f64,
    pub max_allowed: f64,
}

impl FaceSizeValidation {
    /// Used by the synthetic no-face gate result; all ratios zeroed.
    pub(crate) fn failed_empty(config: &EngineConfig) -> Self {
        Self {
            passed: false,
            face_width_ratio: 0.0,
            min_required: config.min_face_ratio,
            max_allowed: config.max_face_ratio,
        }
    }

    /// User-facing guidance when the check failed.
    pub fn feedback(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        if self.face_width_ratio < self.min_required {
            Some("Move closer to the camera".to_string())
        } else {
            Some("Move back from the camera".to_string())
        }
    }
}

/// Checks that the face box occupies an acceptable share of the image width.
pub fn validate_face_size(
    face_box_width: f64,
    image_width: f64,
    config: &EngineConfig,
) -> FaceSizeValidation {
    let ratio = if image_width > 0.0 {
        face_box_width / image_width
    } else {
        0.0
    };
    FaceSizeValidation {
        passed: ratio >= config.min_face_ratio && ratio <= config.max_face_ratio,
        face_width_ratio: ratio,
        min_required: config.min_face_ratio,
        max_allowed: config.max_face_ratio,
    }
}
