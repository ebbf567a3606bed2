//! Parameter types for frame operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the high-level [`operations`](super::operations) module
//! and the [`backend`](super::backend) that does the pixel and container work.
//!
//! ## Types
//!
//! - [`FrameDelay`]: Per-frame display time in whole milliseconds.
//! - [`Repeat`]: Loop behavior of the animation (infinite by default).
//! - [`EncodeParams`]: Everything an encode needs: output path, delay, repeat.

use std::path::PathBuf;

/// Per-frame display duration in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDelay(pub u32);

impl FrameDelay {
    /// Convert a duration in seconds to milliseconds, rounded to the nearest ms.
    ///
    /// Negative and non-finite values saturate to 0 / `u32::MAX`; config
    /// validation rejects them before they get here.
    pub fn from_seconds(seconds: f64) -> Self {
        Self((seconds * 1000.0).round() as u32)
    }

    pub fn millis(self) -> u32 {
        self.0
    }
}

impl Default for FrameDelay {
    fn default() -> Self {
        Self::from_seconds(0.333)
    }
}

/// Repeats after the first play, as stored in the GIF loop extension.
///
/// `Finite(n)` plays the sequence `n + 1` times in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    #[default]
    Infinite,
    Finite(u16),
}

impl Repeat {
    /// Map a config loop count: 0 means loop forever, `n` adds `n` repeats.
    pub fn from_loop_count(count: u16) -> Self {
        match count {
            0 => Self::Infinite,
            n => Self::Finite(n),
        }
    }
}

/// Parameters for encoding a frame sequence into an animation file.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodeParams {
    pub output: PathBuf,
    pub delay: FrameDelay,
    pub repeat: Repeat,
}
