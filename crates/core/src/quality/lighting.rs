use crate::shared::config::EngineConfig;

/// Result of the lighting-symmetry check. Brightness values are
/// normalized to [0, 1] from the sampler's 0-255 range.
#[derive(Clone, Debug, PartialEq)]
pub struct LightingValidation {
    pub passed: bool,
    pub left_brightness: f64,
    pub right_brightness: f64,
    pub asymmetry: f64,
}

impl LightingValidation {
    pub(crate) fn failed_empty() -> Self {
        Self {
            passed: false,
            left_brightness: 0.0,
            right_brightness: 0.0,
            asymmetry: 0.0,
        }
    }

    /// Directs the user toward the dimmer side when the check failed.
    pub fn feedback(&self) -> Option<String> {
        if self.passed {
            return None;
        }
        if self.left_brightness > self.right_brightness {
            Some("Lighting is uneven, turn slightly toward your right".to_string())
        } else {
            Some("Lighting is uneven, turn slightly toward your left".to_string())
        }
    }
}

/// Checks left/right brightness balance over the face box halves.
///
/// `asymmetry = |L - R| / max(L, R)`, defined as 0 when both sides are
/// fully dark, so an unlit frame fails face detection rather than
/// dividing by zero here.
pub fn validate_lighting(
    left_raw: f64,
    right_raw: f64,
    config: &EngineConfig,
) -> LightingValidation {
    let left = (left_raw / 255.0).clamp(0.0, 1.0);
    let right = (right_raw / 255.0).clamp(0.0, 1.0);
    let max = left.max(right);
    let asymmetry = if max > 0.0 {
        (left - right).abs() / max
    } else {
        0.0
    };
    LightingValidation {
        passed: asymmetry <= config.max_lighting_asymmetry,
        left_brightness: left,
        right_brightness: right,
        asymmetry,
    }
}
