//! Replay detector backed by recorded detection output.
//!
//! Lets the pipeline run end-to-end from a JSON capture file instead of
//! camera hardware, both in the CLI and in tests.

use serde::{Deserialize, Serialize};

use crate::detection::domain::landmark_detector::{DetectedFace, DetectorError, LandmarkDetector};
use crate::shared::frame::Frame;

/// One recorded detector invocation: the reported face, or `None` for a
/// frame where no face was found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RecordedDetection {
    pub face: Option<DetectedFace>,
}

/// Replays a fixed sequence of detections in order, one per `detect` call.
///
/// Calls past the end of the recording report "no face", matching a
/// camera stream that has run out of usable frames. The initialization
/// precondition is modeled explicitly so callers exercise the same
/// `NotInitialized` path a real detector has.
pub struct RecordedDetector {
    detections: Vec<RecordedDetection>,
    cursor: usize,
    initialized: bool,
}

impl RecordedDetector {
    pub fn new(detections: Vec<RecordedDetection>) -> Self {
        Self {
            detections,
            cursor: 0,
            initialized: false,
        }
    }

    /// Parses a recording from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let detections: Vec<RecordedDetection> = serde_json::from_str(json)?;
        Ok(Self::new(detections))
    }

    pub fn initialize(&mut self) {
        self.initialized = true;
    }

    pub fn remaining(&self) -> usize {
        self.detections.len().saturating_sub(self.cursor)
    }
}

impl LandmarkDetector for RecordedDetector {
    fn detect(
        &mut self,
        _frame: &Frame,
    ) -> Result<Option<DetectedFace>, Box<dyn std::error::Error>> {
        if !self.initialized {
            return Err(Box::new(DetectorError::NotInitialized));
        }
        let detection = self.detections.get(self.cursor);
        self.cursor += 1;
        Ok(detection.and_then(|d| d.face.clone()))
    }
}
