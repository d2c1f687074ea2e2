//! Capture sequence orchestration: gate each frame, buffer the usable
//! ones, fuse, and measure.
//!
//! Frames are processed strictly one at a time; the detector is never
//! invoked concurrently and the buffer is only touched between calls.
//! Cancelling between frames discards the buffer with no other effect.

use std::collections::BTreeMap;

use log::info;

use crate::capture::error::CaptureError;
use crate::capture::frame_buffer::MultiFrameBuffer;
use crate::capture::frame_sample::FrameSample;
use crate::capture::fusion::{fuse_frames, mean_bounding_box};
use crate::detection::domain::brightness_sampler::BrightnessSampler;
use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::measurement::engine::{derive_all, FacialMeasurement};
use crate::measurement::metric::MetricId;
use crate::pipeline::session_logger::SessionLogger;
use crate::quality::gate::{evaluate_quality_gate, QualityGateResult};
use crate::shared::config::EngineConfig;
use crate::shared::frame::Frame;
use crate::shared::landmarks::LandmarkSet;
use crate::shared::rect::BoundingBox;

/// Fused output of a completed capture sequence.
#[derive(Clone, Debug)]
pub struct CaptureResult {
    pub fused_landmarks: LandmarkSet,
    pub bounding_box: BoundingBox,
    pub measurements: BTreeMap<MetricId, FacialMeasurement>,
    pub frame_count: usize,
}

/// One capture sequence: frames in, gate feedback out, measurements at
/// the end.
///
/// The session only buffers frames that pass the quality gate. Gate
/// failures are advisory and surface through the returned
/// [`QualityGateResult`] and the logger; detector failures propagate.
pub struct CaptureSession {
    detector: Box<dyn LandmarkDetector>,
    sampler: Box<dyn BrightnessSampler>,
    logger: Box<dyn SessionLogger>,
    config: EngineConfig,
    buffer: MultiFrameBuffer,
}

impl CaptureSession {
    pub fn new(
        detector: Box<dyn LandmarkDetector>,
        sampler: Box<dyn BrightnessSampler>,
        logger: Box<dyn SessionLogger>,
        config: EngineConfig,
    ) -> Self {
        let buffer = MultiFrameBuffer::new(config.target_frame_count);
        Self {
            detector,
            sampler,
            logger,
            config,
            buffer,
        }
    }

    /// Gates one frame, buffering it when it passes.
    ///
    /// Returns the gate result for live feedback regardless of outcome.
    pub fn process_frame(
        &mut self,
        frame: &Frame,
    ) -> Result<QualityGateResult, Box<dyn std::error::Error>> {
        let Some(face) = self.detector.detect(frame)? else {
            let gate = QualityGateResult::no_face(&self.config);
            self.logger.gate_feedback(gate.primary_message());
            return Ok(gate);
        };

        let face_box = face.bounding_box;
        let left = self
            .sampler
            .average_brightness(frame, &face_box.left_half());
        let right = self
            .sampler
            .average_brightness(frame, &face_box.right_half());

        let gate = evaluate_quality_gate(&face, frame.width() as f64, left, right, &self.config);
        if gate.passed {
            let accepted = self
                .buffer
                .push(FrameSample::new(face.landmarks, face.pose, face_box));
            if accepted {
                self.logger
                    .frame_progress(self.buffer.len(), self.buffer.target_frame_count());
            }
        } else {
            self.logger.gate_feedback(gate.primary_message());
        }
        Ok(gate)
    }

    pub fn captured_frame_count(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer reached the configured target.
    pub fn is_complete(&self) -> bool {
        self.buffer.is_complete()
    }

    /// Discards the in-progress sequence. No partial side effects.
    pub fn cancel(&mut self) {
        self.buffer.clear();
        self.logger.info("Capture cancelled, frames discarded");
    }

    /// Fuses the buffered frames and derives all measurements.
    ///
    /// A sequence that collected zero usable frames is the terminal
    /// "no usable face data" failure, never an empty measurement map.
    pub fn finish(mut self) -> Result<CaptureResult, CaptureError> {
        let samples = self.buffer.samples();
        let fused = fuse_frames(samples).ok_or(CaptureError::NoUsableFrames)?;
        let bounding_box = mean_bounding_box(samples).ok_or(CaptureError::NoUsableFrames)?;
        let measurements = derive_all(samples, &fused, &bounding_box);

        info!(
            "capture finished: {} frame(s), {} measurement(s)",
            samples.len(),
            measurements.len()
        );
        self.logger.info(&format!(
            "Capture complete with {} frame(s)",
            samples.len()
        ));
        self.logger.summary();

        Ok(CaptureResult {
            fused_landmarks: fused,
            bounding_box,
            measurements,
            frame_count: samples.len(),
        })
    }
}
