//! Measurement derivation over a fused landmark set.
//!
//! The engine does not consult the quality gate; whether to measure a
//! degraded capture is the orchestrating caller's policy, not ours.

use std::collections::BTreeMap;
use std::time::SystemTime;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::capture::confidence::confidence_from_frame_count;
use crate::capture::frame_sample::FrameSample;
use crate::capture::fusion::sample_uncertainty;
use crate::measurement::metric::MetricId;
use crate::shared::landmarks::LandmarkSet;
use crate::shared::rect::BoundingBox;

/// One derived facial measurement with its error bar and evidence
/// strength. Immutable once produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FacialMeasurement {
    pub metric_id: MetricId,
    pub value: f64,
    /// ± range in the same unit as `value`, from cross-frame spread
    /// plus the metric's fixed allowance.
    pub uncertainty: f64,
    /// Evidence strength in [0, 1].
    pub confidence: f64,
    pub measured_at: SystemTime,
}

/// Derives every cataloged metric from the fused landmarks.
///
/// `samples` are the per-frame inputs the fusion was built from; each
/// metric's uncertainty is the unbiased standard deviation of its value
/// computed independently per frame, and confidence is the frame-count
/// step scaled by the metric's multiplier.
pub fn derive_all(
    samples: &[FrameSample],
    fused: &LandmarkSet,
    bounding_box: &BoundingBox,
) -> BTreeMap<MetricId, FacialMeasurement> {
    let base_confidence = confidence_from_frame_count(samples.len());
    let measured_at = SystemTime::now();

    let mut measurements = BTreeMap::new();
    for metric in MetricId::ALL {
        let per_frame: Vec<f64> = samples
            .iter()
            .map(|s| metric.compute(&s.landmarks, &s.bounding_box))
            .collect();

        let value = metric.compute(fused, bounding_box);
        let uncertainty = sample_uncertainty(&per_frame) + metric.extra_uncertainty();
        let confidence = (base_confidence * metric.confidence_multiplier()).clamp(0.0, 1.0);

        debug!(
            "derived {:?}: {:.2} ± {:.2} (confidence {:.2})",
            metric, value, uncertainty, confidence
        );
        measurements.insert(
            metric,
            FacialMeasurement {
                metric_id: metric,
                value,
                uncertainty,
                confidence,
                measured_at,
            },
        );
    }
    measurements
}
