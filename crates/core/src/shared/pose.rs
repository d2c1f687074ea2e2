use serde::{Deserialize, Serialize};

/// Detector-reported head orientation in degrees.
///
/// Angles default to 0 when the detector omits them, so a face with no
/// pose estimate is treated as frontal rather than rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseAngles {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
}

impl PoseAngles {
    pub fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Sum of absolute angles, used by frame scoring.
    pub fn total_deviation(&self) -> f64 {
        self.pitch.abs() + self.yaw.abs() + self.roll.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_frontal() {
        let pose = PoseAngles::default();
        assert_relative_eq!(pose.pitch, 0.0);
        assert_relative_eq!(pose.yaw, 0.0);
        assert_relative_eq!(pose.roll, 0.0);
    }

    #[test]
    fn test_total_deviation_sums_absolute_values() {
        let pose = PoseAngles::new(-10.0, 5.0, -2.5);
        assert_relative_eq!(pose.total_deviation(), 17.5);
    }
}
