//! # boomerang-gif
//!
//! Turns a directory of still images into one looping animated GIF that plays
//! the frames forward and then backward.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      frames/        →  ordered frame paths   (*.png, sorted by name)
//! 2. Load      each path      →  RGBA frame            (fitted to 800px)
//! 3. Assemble  frames         →  forward + reverse     (2N frames, one canvas)
//! 4. Encode    sequence       →  frames/animated.gif   (fixed delay, loops forever)
//! ```
//!
//! Everything runs on one thread. All decoded frames are held in memory until
//! the encode, so peak memory grows with the number of frames.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists frame files directly inside a directory |
//! | [`assemble`] | Loads frames, builds the boomerang sequence, writes the GIF |
//! | [`imaging`] | Decode, fit and encode on top of the `image` crate |
//! | [`config`] | `boomerang.toml` loading, validation, and CLI overrides |
//! | [`output`] | CLI output formatting |
//!
//! # Example
//!
//! ```no_run
//! use boomerang_gif::{assemble, config, scan};
//! use std::path::Path;
//!
//! let dir = Path::new("shots");
//! let config = config::load_config(dir, &config::ConfigOverrides::default())?;
//! let output = dir.join("animated.gif");
//! let frames = scan::without_output(scan::from_directory(dir, &config.frames)?, &output);
//! assemble::write(&frames, &output, &config, None)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod config;
pub mod imaging;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
