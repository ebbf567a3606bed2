//! Shared test utilities: synthetic image fixtures and GIF readback.

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, Frame, ImageFormat, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Write a solid-color PNG with the given dimensions, whatever the extension.
pub fn create_test_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    RgbImage::from_pixel(width, height, Rgb(color))
        .save_with_format(path, ImageFormat::Png)
        .unwrap();
}

/// Decode every frame of a GIF file.
pub fn decode_gif(path: &Path) -> Vec<Frame> {
    let file = std::io::BufReader::new(std::fs::File::open(path).unwrap());
    GifDecoder::new(file)
        .unwrap()
        .into_frames()
        .collect_frames()
        .unwrap()
}

/// File names of a list of paths, in order.
pub fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect()
}
