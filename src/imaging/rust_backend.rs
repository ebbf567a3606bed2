//! Pure Rust frame backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (PNG, JPEG, GIF) | `image::ImageReader` with content-sniffed format |
//! | Resize | `DynamicImage::resize_exact` with `Lanczos3` filter |
//! | Encode → GIF | `image::codecs::gif::GifEncoder` (NeuQuant palette per frame) |

use super::backend::{BackendError, FrameBackend};
use super::params::{EncodeParams, Repeat};
use image::codecs::gif::{self, GifEncoder};
use image::imageops::FilterType;
use image::{Delay, DynamicImage, Frame, ImageError, ImageReader, RgbaImage};
use std::path::Path;

/// Pure Rust backend using the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_error(path: &Path, source: ImageError) -> BackendError {
    BackendError::Decode {
        path: path.to_path_buf(),
        source,
    }
}

fn encode_error(path: &Path, source: ImageError) -> BackendError {
    BackendError::Encode {
        path: path.to_path_buf(),
        source,
    }
}

fn gif_repeat(repeat: Repeat) -> gif::Repeat {
    match repeat {
        Repeat::Infinite => gif::Repeat::Infinite,
        Repeat::Finite(n) => gif::Repeat::Finite(n),
    }
}

/// Encode frames into an in-memory GIF.
///
/// The encoder writes the GIF trailer when dropped, so the buffer is only
/// complete once this function returns.
fn encode_gif(params: &EncodeParams, frames: &[&RgbaImage]) -> Result<Vec<u8>, ImageError> {
    let mut buf = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut buf);
        encoder.set_repeat(gif_repeat(params.repeat))?;
        let delay = Delay::from_numer_denom_ms(params.delay.millis(), 1);
        encoder.encode_frames(
            frames
                .iter()
                .map(|f| Frame::from_parts((*f).clone(), 0, 0, delay)),
        )?;
    }
    Ok(buf)
}

impl FrameBackend for RustBackend {
    fn decode(&self, path: &Path) -> Result<DynamicImage, BackendError> {
        ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(path, ImageError::IoError(e)))?
            .decode()
            .map_err(|e| decode_error(path, e))
    }

    fn resize(&self, img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
        img.resize_exact(width, height, FilterType::Lanczos3)
    }

    fn encode(&self, params: &EncodeParams, frames: &[&RgbaImage]) -> Result<(), BackendError> {
        // Fully encode before touching the output path: an encoder failure
        // leaves any existing file intact.
        let bytes = encode_gif(params, frames).map_err(|e| encode_error(&params.output, e))?;
        std::fs::write(&params.output, bytes)
            .map_err(|e| encode_error(&params.output, ImageError::IoError(e)))
    }
}
