use thiserror::Error;

/// Terminal capture failures the caller must handle (typically by
/// prompting a retake). Advisory gate failures are never errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CaptureError {
    #[error("no usable face data: every frame in the sequence was rejected")]
    NoUsableFrames,
}
