//! Multi-frame landmark fusion and cross-frame spread estimation.
//!
//! Fusing a burst denoises detector jitter: each named point is the
//! positional mean of its counterparts across the frames that contain
//! the group. The detector contract guarantees consistent per-group
//! point ordering, so counterparts align by index; a frame whose group
//! length disagrees with the first contributing frame is skipped for
//! that group.

use crate::capture::frame_sample::FrameSample;
use crate::shared::landmarks::{LandmarkGroup, LandmarkSet};
use crate::shared::point::Point;
use crate::shared::rect::BoundingBox;

/// Uncertainty reported when fewer than two usable frames exist: a
/// deliberately wide error bar instead of a spuriously tight one.
pub const FALLBACK_UNCERTAINTY: f64 = 3.0;

/// Fuses a burst into one stable landmark set by per-point averaging.
///
/// Returns `None` for an empty burst. Groups populated in no frame are
/// absent from the fused set.
pub fn fuse_frames(samples: &[FrameSample]) -> Option<LandmarkSet> {
    if samples.is_empty() {
        return None;
    }

    let mut fused = LandmarkSet::new();
    for group in LandmarkGroup::ALL {
        if let Some(points) = fuse_group(samples, group) {
            fused.set_group(group, points);
        }
    }
    Some(fused)
}

fn fuse_group(samples: &[FrameSample], group: LandmarkGroup) -> Option<Vec<Point>> {
    let mut contributing = samples
        .iter()
        .map(|s| s.landmarks.group(group))
        .filter(|pts| !pts.is_empty());

    let first = contributing.next()?;
    let mut sums: Vec<(f64, f64)> = first.iter().map(|p| (p.x, p.y)).collect();
    let mut count = 1usize;

    for pts in contributing {
        if pts.len() != sums.len() {
            continue;
        }
        for (sum, p) in sums.iter_mut().zip(pts) {
            sum.0 += p.x;
            sum.1 += p.y;
        }
        count += 1;
    }

    let n = count as f64;
    Some(
        sums.into_iter()
            .map(|(sx, sy)| Point::new(sx / n, sy / n))
            .collect(),
    )
}

/// Mean bounding box across a burst, paired with the fused landmarks
/// for measurements that need box geometry.
pub fn mean_bounding_box(samples: &[FrameSample]) -> Option<BoundingBox> {
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    let sum = samples.iter().fold((0.0, 0.0, 0.0, 0.0), |acc, s| {
        let b = &s.bounding_box;
        (acc.0 + b.x, acc.1 + b.y, acc.2 + b.width, acc.3 + b.height)
    });
    Some(BoundingBox::new(sum.0 / n, sum.1 / n, sum.2 / n, sum.3 / n))
}

/// Unbiased sample standard deviation of a metric's per-frame values.
///
/// With fewer than two values the spread is unknowable and
/// [`FALLBACK_UNCERTAINTY`] is returned.
pub fn sample_uncertainty(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return FALLBACK_UNCERTAINTY;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::pose::PoseAngles;
    use crate::shared::rect::BoundingBox;
    use approx::assert_relative_eq;

    fn sample_with_left_eye(points: Vec<Point>) -> FrameSample {
        FrameSample::new(
            LandmarkSet::new().with_group(LandmarkGroup::LeftEye, points),
            PoseAngles::default(),
            BoundingBox::new(0.0, 0.0, 100.0, 100.0),
        )
    }

    // ── fusion ──────────────────────────────────────────────────────

    #[test]
    fn test_empty_burst_fuses_to_none() {
        assert!(fuse_frames(&[]).is_none());
    }

    #[test]
    fn test_single_frame_passes_through() {
        let samples = vec![sample_with_left_eye(vec![Point::new(10.0, 20.0)])];
        let fused = fuse_frames(&samples).unwrap();
        let eye = fused.group(LandmarkGroup::LeftEye);
        assert_relative_eq!(eye[0].x, 10.0);
        assert_relative_eq!(eye[0].y, 20.0);
    }

    #[test]
    fn test_points_average_across_frames() {
        let samples = vec![
            sample_with_left_eye(vec![Point::new(10.0, 20.0), Point::new(30.0, 40.0)]),
            sample_with_left_eye(vec![Point::new(14.0, 24.0), Point::new(34.0, 44.0)]),
        ];
        let fused = fuse_frames(&samples).unwrap();
        let eye = fused.group(LandmarkGroup::LeftEye);
        assert_eq!(eye.len(), 2);
        assert_relative_eq!(eye[0].x, 12.0);
        assert_relative_eq!(eye[0].y, 22.0);
        assert_relative_eq!(eye[1].x, 32.0);
        assert_relative_eq!(eye[1].y, 42.0);
    }

    #[test]
    fn test_frames_missing_a_group_do_not_dilute_it() {
        let samples = vec![
            sample_with_left_eye(vec![Point::new(10.0, 10.0)]),
            FrameSample::new(
                LandmarkSet::new(),
                PoseAngles::default(),
                BoundingBox::new(0.0, 0.0, 100.0, 100.0),
            ),
            sample_with_left_eye(vec![Point::new(20.0, 20.0)]),
        ];
        let fused = fuse_frames(&samples).unwrap();
        let eye = fused.group(LandmarkGroup::LeftEye);
        assert_relative_eq!(eye[0].x, 15.0);
    }

    #[test]
    fn test_mismatched_group_length_is_skipped() {
        let samples = vec![
            sample_with_left_eye(vec![Point::new(10.0, 10.0), Point::new(20.0, 20.0)]),
            sample_with_left_eye(vec![Point::new(99.0, 99.0)]),
        ];
        let fused = fuse_frames(&samples).unwrap();
        let eye = fused.group(LandmarkGroup::LeftEye);
        assert_eq!(eye.len(), 2);
        assert_relative_eq!(eye[0].x, 10.0);
    }

    #[test]
    fn test_group_absent_everywhere_stays_absent() {
        let samples = vec![sample_with_left_eye(vec![Point::new(1.0, 1.0)])];
        let fused = fuse_frames(&samples).unwrap();
        assert!(fused.group(LandmarkGroup::Mouth).is_empty());
    }

    // ── mean bounding box ───────────────────────────────────────────

    #[test]
    fn test_mean_bounding_box_empty_is_none() {
        assert!(mean_bounding_box(&[]).is_none());
    }

    #[test]
    fn test_mean_bounding_box_averages_components() {
        let samples = vec![
            FrameSample::new(
                LandmarkSet::new(),
                PoseAngles::default(),
                BoundingBox::new(10.0, 20.0, 100.0, 120.0),
            ),
            FrameSample::new(
                LandmarkSet::new(),
                PoseAngles::default(),
                BoundingBox::new(30.0, 40.0, 200.0, 240.0),
            ),
        ];
        let b = mean_bounding_box(&samples).unwrap();
        assert_relative_eq!(b.x, 20.0);
        assert_relative_eq!(b.y, 30.0);
        assert_relative_eq!(b.width, 150.0);
        assert_relative_eq!(b.height, 180.0);
    }

    // ── spread ──────────────────────────────────────────────────────

    #[test]
    fn test_uncertainty_fallback_below_two_values() {
        assert_relative_eq!(sample_uncertainty(&[]), FALLBACK_UNCERTAINTY);
        assert_relative_eq!(sample_uncertainty(&[42.0]), FALLBACK_UNCERTAINTY);
    }

    #[test]
    fn test_uncertainty_identical_values_is_zero() {
        assert_relative_eq!(sample_uncertainty(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_uncertainty_uses_unbiased_estimator() {
        // values 2, 4: mean 3, variance (1+1)/(2-1) = 2
        assert_relative_eq!(sample_uncertainty(&[2.0, 4.0]), 2.0_f64.sqrt());
    }

    #[test]
    fn test_uncertainty_grows_with_spread() {
        let tight = sample_uncertainty(&[10.0, 10.1, 9.9]);
        let loose = sample_uncertainty(&[10.0, 14.0, 6.0]);
        assert!(loose > tight);
    }
}
