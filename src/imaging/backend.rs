//! Frame backend trait and shared types.
//!
//! The [`FrameBackend`] trait defines the three operations the pipeline
//! needs: decode, resize, and encode.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image`
//! crate. Tests swap in a recording mock so assembly logic can be checked
//! without touching real files.

use super::params::EncodeParams;
use image::{DynamicImage, ImageError, RgbaImage};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures at the pixel/container layer.
///
/// Missing or unreadable inputs surface as `Decode` too, carrying the
/// underlying `ImageError::IoError`. Write failures surface as `Encode`.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Failed to decode {}: {source}", .path.display())]
    Decode { path: PathBuf, source: ImageError },
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode { path: PathBuf, source: ImageError },
}

/// Width and height of a frame in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn of(image: &RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
        }
    }

    pub fn as_tuple(self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for frame backends.
///
/// Everything above this trait (loading policy, canvas normalization,
/// boomerang assembly) is backend-agnostic.
pub trait FrameBackend {
    /// Decode an image file into pixels.
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError>;

    /// Resize to exact dimensions.
    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage;

    /// Encode frames, in order, into a single animation at `params.output`.
    ///
    /// Every frame is shown for `params.delay`. An existing file at the
    /// output path is replaced.
    fn encode(&self, params: &EncodeParams, frames: &[&RgbaImage]) -> Result<(), BackendError>;
}
