//! Single-best-frame selection for independent single-shot captures.
//!
//! The fusion path is preferred when a continuous burst is available;
//! this scoring picks the steadiest, most fully-landmarked candidate
//! when only isolated frames exist.

use crate::capture::error::CaptureError;
use crate::capture::frame_sample::FrameSample;

/// Candidate score: frontal pose dominates, with bonuses for a larger
/// face box and richer landmark coverage.
pub fn score_frame(sample: &FrameSample) -> f64 {
    100.0 - sample.pose.total_deviation()
        + sample.bounding_box.area() / 1000.0
        + sample.landmarks.point_count() as f64 * 5.0
        + sample.landmarks.populated_group_count() as f64 * 3.0
}

/// Picks the maximum-scoring frame; the first frame encountered wins
/// ties, so selection is deterministic in insertion order.
///
/// An empty candidate list is the terminal "no usable face data" case.
pub fn select_best_frame(candidates: &[FrameSample]) -> Result<&FrameSample, CaptureError> {
    let mut best: Option<(&FrameSample, f64)> = None;
    for candidate in candidates {
        let score = score_frame(candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }
    best.map(|(sample, _)| sample)
        .ok_or(CaptureError::NoUsableFrames)
}
