//! Confidence-weighted temporal fusion of measurement history.

use std::collections::BTreeMap;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

use crate::measurement::engine::FacialMeasurement;
use crate::measurement::metric::MetricId;

/// Discount applied to the best input confidence, reflecting
/// cross-capture variability no single confidence value captures.
pub const BASELINE_CONFIDENCE_DISCOUNT: f64 = 0.9;

/// Historical reference value for one metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaselineMetric {
    pub metric_id: MetricId,
    pub value: f64,
    pub confidence: f64,
}

/// Per-metric baselines computed from a set of historical captures.
/// Not persisted here; storage is a collaborator concern.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasurementBaseline {
    pub metrics: BTreeMap<MetricId, BaselineMetric>,
    pub computed_at: SystemTime,
}

impl MeasurementBaseline {
    pub fn metric(&self, id: MetricId) -> Option<&BaselineMetric> {
        self.metrics.get(&id)
    }
}

/// Computes the confidence-weighted average of every metric present in
/// at least one historical capture.
///
/// Absent metrics are omitted, never defaulted to zero; a metric whose
/// inputs all carry zero confidence is likewise omitted rather than
/// divided by zero.
pub fn compute_baseline(
    history: &[BTreeMap<MetricId, FacialMeasurement>],
) -> MeasurementBaseline {
    let mut metrics = BTreeMap::new();

    for metric in MetricId::ALL {
        let inputs: Vec<&FacialMeasurement> =
            history.iter().filter_map(|capture| capture.get(&metric)).collect();
        if inputs.is_empty() {
            continue;
        }

        let total_weight: f64 = inputs.iter().map(|m| m.confidence).sum();
        if total_weight <= 0.0 {
            continue;
        }
        let weighted_sum: f64 = inputs.iter().map(|m| m.value * m.confidence).sum();
        let best_confidence = inputs
            .iter()
            .map(|m| m.confidence)
            .fold(0.0_f64, f64::max);

        metrics.insert(
            metric,
            BaselineMetric {
                metric_id: metric,
                value: weighted_sum / total_weight,
                confidence: best_confidence * BASELINE_CONFIDENCE_DISCOUNT,
            },
        );
    }

    MeasurementBaseline {
        metrics,
        computed_at: SystemTime::now(),
    }
}

/// Signed difference between a current measurement and its baseline.
pub fn change_from_baseline(current: &FacialMeasurement, baseline: &BaselineMetric) -> f64 {
    current.value - baseline.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn measurement(metric: MetricId, value: f64, confidence: f64) -> FacialMeasurement {
        FacialMeasurement {
            metric_id: metric,
            value,
            uncertainty: 1.0,
            confidence,
            measured_at: SystemTime::UNIX_EPOCH,
        }
    }

    fn capture(entries: &[(MetricId, f64, f64)]) -> BTreeMap<MetricId, FacialMeasurement> {
        entries
            .iter()
            .map(|&(metric, value, confidence)| (metric, measurement(metric, value, confidence)))
            .collect()
    }

    #[test]
    fn test_documented_weighted_average_example() {
        // values [80, 90] with confidences [0.70, 0.90]:
        // (80*70 + 90*90) / 160 = 85.625; confidence 0.90 * 0.9 = 0.81
        let history = vec![
            capture(&[(MetricId::Symmetry, 80.0, 0.70)]),
            capture(&[(MetricId::Symmetry, 90.0, 0.90)]),
        ];
        let baseline = compute_baseline(&history);
        let symmetry = baseline.metric(MetricId::Symmetry).unwrap();
        assert_relative_eq!(symmetry.value, 85.625);
        assert_relative_eq!(symmetry.confidence, 0.81);
    }

    #[test]
    fn test_absent_metrics_are_omitted_not_zeroed() {
        let history = vec![capture(&[(MetricId::Symmetry, 80.0, 0.9)])];
        let baseline = compute_baseline(&history);
        assert!(baseline.metric(MetricId::CanthalTilt).is_none());
        assert_eq!(baseline.metrics.len(), 1);
    }

    #[test]
    fn test_metric_present_in_subset_of_captures() {
        let history = vec![
            capture(&[(MetricId::Symmetry, 80.0, 0.5)]),
            capture(&[
                (MetricId::Symmetry, 90.0, 0.5),
                (MetricId::CanthalTilt, 5.0, 0.8),
            ]),
        ];
        let baseline = compute_baseline(&history);
        assert_relative_eq!(baseline.metric(MetricId::Symmetry).unwrap().value, 85.0);
        assert_relative_eq!(baseline.metric(MetricId::CanthalTilt).unwrap().value, 5.0);
    }

    #[test]
    fn test_empty_history_yields_empty_baseline() {
        let baseline = compute_baseline(&[]);
        assert!(baseline.metrics.is_empty());
    }

    #[test]
    fn test_zero_total_weight_omits_metric() {
        let history = vec![capture(&[(MetricId::Symmetry, 80.0, 0.0)])];
        let baseline = compute_baseline(&[history[0].clone()]);
        assert!(baseline.metric(MetricId::Symmetry).is_none());
    }

    #[test]
    fn test_higher_confidence_input_dominates() {
        let history = vec![
            capture(&[(MetricId::Symmetry, 0.0, 0.1)]),
            capture(&[(MetricId::Symmetry, 100.0, 0.9)]),
        ];
        let baseline = compute_baseline(&history);
        assert_relative_eq!(baseline.metric(MetricId::Symmetry).unwrap().value, 90.0);
    }

    #[test]
    fn test_change_from_baseline_is_signed() {
        let current = measurement(MetricId::Symmetry, 88.0, 0.9);
        let base = BaselineMetric {
            metric_id: MetricId::Symmetry,
            value: 85.0,
            confidence: 0.8,
        };
        assert_relative_eq!(change_from_baseline(&current, &base), 3.0);
        let lower = measurement(MetricId::Symmetry, 80.0, 0.9);
        assert_relative_eq!(change_from_baseline(&lower, &base), -5.0);
    }
}
