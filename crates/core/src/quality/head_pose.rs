use crate::shared::config::EngineConfig;
use crate::shared::pose::PoseAngles;

/// Result of the head-pose admissibility check.
#[derive(Clone, Debug, PartialEq)]
pub struct PoseValidation {
    pub passed: bool,
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    pub max_angle_allowed: f64,
}

impl PoseValidation {
    pub(crate) fn failed_empty(config: &EngineConfig) -> Self {
        Self {
            passed: false,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
            max_angle_allowed: config.max_pose_angle_deg,
        }
    }

    /// Guidance for the first violated axis, checked in pitch, yaw,
    /// roll order. Sign of the violating angle selects the direction.
    pub fn feedback(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        let max = self.max_angle_allowed;
        if self.pitch.abs() > max {
            Some(if self.pitch > 0.0 {
                "Tilt your head down slightly".to_string()
            } else {
                "Tilt your head up slightly".to_string()
            })
        } else if self.yaw.abs() > max {
            Some(if self.yaw > 0.0 {
                "Turn your head to the left slightly".to_string()
            } else {
                "Turn your head to the right slightly".to_string()
            })
        } else if self.roll.abs() > max {
            Some(if self.roll > 0.0 {
                "Straighten your head by tilting left".to_string()
            } else {
                "Straighten your head by tilting right".to_string()
            })
        } else {
            // Synthetic no-face validation carries zeroed angles.
            Some("Face the camera directly".to_string())
        }
    }
}

/// Checks that all three head-pose angles are within the per-axis limit.
pub fn validate_head_pose(pose: &PoseAngles, config: &EngineConfig) -> PoseValidation {
    let max = config.max_pose_angle_deg;
    PoseValidation {
        passed: pose.pitch.abs() <= max && pose.yaw.abs() <= max && pose.roll.abs() <= max,
        pitch: pose.pitch,
        yaw: pose.yaw,
        roll: pose.roll,
        max_angle_allowed: max,
    }
}
