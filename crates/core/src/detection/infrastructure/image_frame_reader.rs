use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

#[derive(Error, Debug)]
pub enum FrameReadError {
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Decodes an image file into an RGB [`Frame`].
///
/// Capture recordings reference their frame files by path; this is the
/// boundary where those files become pixel data for brightness sampling.
pub fn read_frame(path: &Path) -> Result<Frame, FrameReadError> {
    let decoded = image::open(path).map_err(|source| FrameReadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(Frame::new(rgb.into_raw(), width, height, 3))
}
