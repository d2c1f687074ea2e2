//! Closed metric catalog: identifier, derivation formula, clamp range,
//! trend direction, and confidence scaling per metric.
//!
//! Dispatch is a match over this enum; there is no string-keyed lookup
//! anywhere, so an unknown metric cannot exist at runtime.

use serde::{Deserialize, Serialize};

use crate::shared::landmarks::{LandmarkGroup, LandmarkSet};
use crate::shared::rect::BoundingBox;

/// Golden ratio, the reference facial height/width proportion.
pub const GOLDEN_RATIO: f64 = 1.618;

/// Score reported for symmetry when eye centers are unavailable.
const SYMMETRY_DEFAULT: f64 = 75.0;

/// Midpoint score for the contour-based proxy metrics when no contour
/// was detected.
const PROXY_DEFAULT: f64 = 50.0;

/// Whether larger values of a metric count as improvement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrendGoal {
    HigherIsBetter,
    /// Proximity to zero is the target; sign does not matter.
    NearerZeroIsBetter,
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum MetricId {
    Symmetry,
    ProportionalHarmony,
    CanthalTilt,
    JawDefinition,
    CheekboneProminence,
}

impl MetricId {
    pub const ALL: [MetricId; 5] = [
        MetricId::Symmetry,
        MetricId::ProportionalHarmony,
        MetricId::CanthalTilt,
        MetricId::JawDefinition,
        MetricId::CheekboneProminence,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MetricId::Symmetry => "Facial symmetry",
            MetricId::ProportionalHarmony => "Proportional harmony",
            MetricId::CanthalTilt => "Canthal tilt",
            MetricId::JawDefinition => "Jaw definition",
            MetricId::CheekboneProminence => "Cheekbone prominence",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            MetricId::CanthalTilt => "degrees",
            _ => "points",
        }
    }

    /// Documented clamp range for the metric's value.
    pub fn range(&self) -> (f64, f64) {
        match self {
            MetricId::Symmetry => (0.0, 100.0),
            MetricId::ProportionalHarmony => (-15.0, 15.0),
            MetricId::CanthalTilt => (-10.0, 15.0),
            MetricId::JawDefinition => (0.0, 100.0),
            MetricId::CheekboneProminence => (0.0, 100.0),
        }
    }

    /// Range used by neutral descriptions, narrower than the clamp range.
    pub fn typical_range(&self) -> (f64, f64) {
        match self {
            MetricId::Symmetry => (60.0, 95.0),
            MetricId::ProportionalHarmony => (-5.0, 5.0),
            MetricId::CanthalTilt => (-2.0, 8.0),
            MetricId::JawDefinition => (30.0, 85.0),
            MetricId::CheekboneProminence => (30.0, 85.0),
        }
    }

    pub fn trend_goal(&self) -> TrendGoal {
        match self {
            MetricId::ProportionalHarmony => TrendGoal::NearerZeroIsBetter,
            _ => TrendGoal::HigherIsBetter,
        }
    }

    /// The proxy metrics (jaw, cheekbone) estimate from contour density
    /// rather than direct anatomy and carry a reduced confidence.
    pub fn confidence_multiplier(&self) -> f64 {
        match self {
            MetricId::JawDefinition => 0.7,
            MetricId::CheekboneProminence => 0.8,
            _ => 1.0,
        }
    }

    /// Fixed uncertainty added on top of the cross-frame spread.
    pub fn extra_uncertainty(&self) -> f64 {
        match self {
            MetricId::JawDefinition => 5.0,
            MetricId::CheekboneProminence => 4.0,
            _ => 0.0,
        }
    }

    /// Computes the metric from one landmark set, clamped to [`range`].
    ///
    /// Missing landmark groups degrade to the documented defaults;
    /// this never fails.
    pub fn compute(&self, landmarks: &LandmarkSet, bounding_box: &BoundingBox) -> f64 {
        let value = match self {
            MetricId::Symmetry => symmetry(landmarks),
            MetricId::ProportionalHarmony => proportional_harmony(landmarks),
            MetricId::CanthalTilt => canthal_tilt(landmarks),
            MetricId::JawDefinition => jaw_definition(landmarks, bounding_box),
            MetricId::CheekboneProminence => cheekbone_prominence(landmarks, bounding_box),
        };
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

/// 0-100, higher = more symmetric.
///
/// Horizontal sub-score compares the eye centers' offsets about the
/// midline between them; vertical sub-score is their height difference
/// normalized by interocular distance. Sub-scores average evenly.
fn symmetry(landmarks: &LandmarkSet) -> f64 {
    let (Some(left), Some(right)) = (landmarks.left_eye_center(), landmarks.right_eye_center())
    else {
        return SYMMETRY_DEFAULT;
    };
    let iod = left.distance_to(&right);
    if iod <= 0.0 {
        return SYMMETRY_DEFAULT;
    }

    let midline_x = left.midpoint(&right).x;
    let left_offset = (midline_x - left.x).abs();
    let right_offset = (right.x - midline_x).abs();
    let horizontal = 100.0 * (1.0 - ((left_offset - right_offset).abs() / iod).min(1.0));

    let vertical = 100.0 * (1.0 - ((left.y - right.y).abs() / iod).min(1.0));

    (horizontal + vertical) / 2.0
}

/// -15..+15, 0 = facial height/width closest to the golden ratio.
fn proportional_harmony(landmarks: &LandmarkSet) -> f64 {
    let (Some(width), Some(height)) = (landmarks.facial_width(), landmarks.facial_height())
    else {
        return 0.0;
    };
    if width <= 0.0 {
        return 0.0;
    }
    (height / width - GOLDEN_RATIO) * 10.0
}

/// Eye-center line angle in degrees, positive when the right eye center
/// sits higher in the image (smaller y).
fn canthal_tilt(landmarks: &LandmarkSet) -> f64 {
    let (Some(left), Some(right)) = (landmarks.left_eye_center(), landmarks.right_eye_center())
    else {
        return 0.0;
    };
    let dx = right.x - left.x;
    if dx == 0.0 {
        return 0.0;
    }
    let dy = left.y - right.y;
    (dy / dx).atan().to_degrees()
}

/// Proxy estimate from contour point density and box aspect, not a
/// direct anatomical measurement.
fn jaw_definition(landmarks: &LandmarkSet, bounding_box: &BoundingBox) -> f64 {
    let contour = landmarks.group(LandmarkGroup::FaceContour);
    if contour.is_empty() {
        return PROXY_DEFAULT;
    }
    let density = contour.len() as f64 * 2.0;
    let aspect = if bounding_box.height > 0.0 {
        (bounding_box.width / bounding_box.height) * 25.0
    } else {
        0.0
    };
    density + aspect
}

/// Proxy estimate; see [`jaw_definition`].
fn cheekbone_prominence(landmarks: &LandmarkSet, bounding_box: &BoundingBox) -> f64 {
    let contour = landmarks.group(LandmarkGroup::FaceContour);
    if contour.is_empty() {
        return PROXY_DEFAULT;
    }
    let density = contour.len() as f64;
    let aspect = if bounding_box.height > 0.0 {
        (bounding_box.width / bounding_box.height) * 30.0
    } else {
        0.0
    };
    30.0 + density + aspect
}
