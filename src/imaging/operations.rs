//! High-level frame operations.
//!
//! These functions combine calculations with backend execution.

use super::backend::{BackendError, Dimensions, FrameBackend};
use super::calculations::{calculate_centered_offset, calculate_fit_dimensions};
use image::RgbaImage;
use log::debug;
use std::path::{Path, PathBuf};

/// Result type for frame operations.
pub type Result<T> = std::result::Result<T, BackendError>;

/// A frame decoded from disk and sized for encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedFrame {
    pub source: PathBuf,
    /// Dimensions as decoded, before any downsizing.
    pub original: Dimensions,
    pub image: RgbaImage,
}

impl DecodedFrame {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::of(&self.image)
    }

    pub fn was_resized(&self) -> bool {
        self.original != self.dimensions()
    }
}

/// Load one frame: decode, downsize if an edge exceeds `max_dim`, convert to RGBA.
///
/// Everything happens in memory; no intermediate file is written.
pub fn load_frame(backend: &impl FrameBackend, path: &Path, max_dim: u32) -> Result<DecodedFrame> {
    let decoded = backend.decode(path)?;
    let original = Dimensions::from((decoded.width(), decoded.height()));
    let (width, height) = calculate_fit_dimensions(original.as_tuple(), max_dim);

    let sized = if (width, height) == original.as_tuple() {
        decoded
    } else {
        debug!(
            "resizing {} from {} to {}x{}",
            path.display(),
            original,
            width,
            height
        );
        backend.resize(&decoded, width, height)
    };

    Ok(DecodedFrame {
        source: path.to_path_buf(),
        original,
        image: sized.into_rgba8(),
    })
}

/// Center a frame on a transparent canvas of the given size.
///
/// A frame already matching the canvas is returned as a plain copy.
pub fn fit_to_canvas(frame: &RgbaImage, canvas: (u32, u32)) -> RgbaImage {
    if frame.dimensions() == canvas {
        return frame.clone();
    }
    let (x, y) = calculate_centered_offset(frame.dimensions(), canvas);
    let mut padded = RgbaImage::new(canvas.0, canvas.1);
    image::imageops::overlay(&mut padded, frame, x as i64, y as i64);
    padded
}
