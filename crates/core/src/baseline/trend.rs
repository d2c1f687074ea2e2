//! Improving / declining / stable classification against a baseline.

use serde::{Deserialize, Serialize};

use crate::measurement::metric::{MetricId, TrendGoal};

/// Changes smaller than this count as noise, not a trend.
pub const STABLE_BAND: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TrendDirection {
    Improving,
    Declining,
    Stable,
}

/// Classifies a metric's movement relative to its baseline.
///
/// For nearer-zero-is-better metrics (proportional harmony) the signal
/// is the change in distance from zero: drifting toward zero improves.
/// An earlier revision reported such metrics as permanently stable;
/// classifying on `|current| - |baseline|` replaces that behavior.
pub fn classify_trend(metric: MetricId, current: f64, baseline: f64) -> TrendDirection {
    let drift = match metric.trend_goal() {
        TrendGoal::HigherIsBetter => current - baseline,
        TrendGoal::NearerZeroIsBetter => baseline.abs() - current.abs(),
    };
    if drift.abs() < STABLE_BAND {
        TrendDirection::Stable
    } else if drift > 0.0 {
        TrendDirection::Improving
    } else {
        TrendDirection::Declining
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ── higher-is-better metrics ────────────────────────────────────

    #[rstest]
    #[case::clear_gain(90.0, 85.0, TrendDirection::Improving)]
    #[case::clear_loss(78.0, 85.0, TrendDirection::Declining)]
    #[case::tiny_gain(85.5, 85.0, TrendDirection::Stable)]
    #[case::tiny_loss(84.2, 85.0, TrendDirection::Stable)]
    #[case::unchanged(85.0, 85.0, TrendDirection::Stable)]
    fn test_symmetry_trends(
        #[case] current: f64,
        #[case] baseline: f64,
        #[case] expected: TrendDirection,
    ) {
        assert_eq!(classify_trend(MetricId::Symmetry, current, baseline), expected);
    }

    #[test]
    fn test_exact_band_edge_is_not_stable() {
        assert_eq!(
            classify_trend(MetricId::Symmetry, 86.0, 85.0),
            TrendDirection::Improving
        );
    }

    // ── nearer-zero-is-better (proportional harmony) ────────────────

    #[rstest]
    #[case::toward_zero_from_positive(2.0, 5.0, TrendDirection::Improving)]
    #[case::toward_zero_from_negative(-2.0, -5.0, TrendDirection::Improving)]
    #[case::away_from_zero(8.0, 5.0, TrendDirection::Declining)]
    #[case::sign_flip_same_distance(-5.0, 5.0, TrendDirection::Stable)]
    #[case::small_drift(5.5, 5.0, TrendDirection::Stable)]
    fn test_harmony_trends(
        #[case] current: f64,
        #[case] baseline: f64,
        #[case] expected: TrendDirection,
    ) {
        assert_eq!(
            classify_trend(MetricId::ProportionalHarmony, current, baseline),
            expected
        );
    }

    #[test]
    fn test_harmony_is_not_permanently_stable() {
        // Regression guard: large movement toward zero must register.
        assert_eq!(
            classify_trend(MetricId::ProportionalHarmony, 0.5, 10.0),
            TrendDirection::Improving
        );
    }
}
