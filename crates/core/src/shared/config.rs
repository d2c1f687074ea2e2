//! Engine tuning knobs with the documented defaults.

pub const DEFAULT_MIN_FACE_RATIO: f64 = 0.3;
pub const DEFAULT_MAX_FACE_RATIO: f64 = 0.8;
pub const DEFAULT_MAX_POSE_ANGLE_DEG: f64 = 15.0;
pub const DEFAULT_MAX_LIGHTING_ASYMMETRY: f64 = 0.3;
pub const DEFAULT_TARGET_FRAME_COUNT: usize = 10;

/// Quality gate thresholds and capture sequence sizing.
///
/// A value type with no ambient state; callers that need different
/// thresholds construct their own and pass it down.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EngineConfig {
    /// Face box width / image width lower bound ("move closer" below).
    pub min_face_ratio: f64,
    /// Face box width / image width upper bound ("move back" above).
    pub max_face_ratio: f64,
    /// Per-axis limit on |pitch|, |yaw|, |roll| in degrees.
    pub max_pose_angle_deg: f64,
    /// Limit on |L-R| / max(L,R) brightness asymmetry.
    pub max_lighting_asymmetry: f64,
    /// Frames collected before a capture sequence completes.
    pub target_frame_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_face_ratio: DEFAULT_MIN_FACE_RATIO,
            max_face_ratio: DEFAULT_MAX_FACE_RATIO,
            max_pose_angle_deg: DEFAULT_MAX_POSE_ANGLE_DEG,
            max_lighting_asymmetry: DEFAULT_MAX_LIGHTING_ASYMMETRY,
            target_frame_count: DEFAULT_TARGET_FRAME_COUNT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_documented_defaults() {
        let config = EngineConfig::default();
        assert_relative_eq!(config.min_face_ratio, 0.3);
        assert_relative_eq!(config.max_face_ratio, 0.8);
        assert_relative_eq!(config.max_pose_angle_deg, 15.0);
        assert_relative_eq!(config.max_lighting_asymmetry, 0.3);
        assert_eq!(config.target_frame_count, 10);
    }
}
