//! Boomerang assembly and encoding.
//!
//! Takes an ordered list of frame paths and writes one looping animation:
//!
//! ```text
//! paths      a.png  b.png  c.png
//! load       A      B      C          (each fitted to frames.max_dimension)
//! canvas     A'     B'     C'         (pad or strict, see CanvasPolicy)
//! boomerang  A' B' C' C' B' A'        (forward + exact reverse, 2N frames)
//! encode     animated.gif             (same delay on every frame)
//! ```
//!
//! The turnaround frame is shown twice because the reverse half includes the
//! last forward frame.
//!
//! Loading is fail-fast: the first frame that cannot be decoded aborts the
//! run and nothing is written. An empty path list is rejected with
//! [`AssembleError::EmptyInput`] instead of producing an empty GIF.
//!
//! Progress is reported over an optional channel of [`AssembleEvent`]s so the
//! caller decides how (and whether) to display it.

use crate::config::{CanvasPolicy, GifConfig};
use crate::imaging::{
    BackendError, DecodedFrame, Dimensions, EncodeParams, FrameBackend, FrameDelay, Repeat,
    RustBackend, calculate_canvas, fit_to_canvas, load_frame,
};
use image::RgbaImage;
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssembleError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error("No frames to assemble")]
    EmptyInput,
    #[error("Frame {} is {found}, expected {expected} (canvas = \"strict\")", .path.display())]
    MismatchedDimensions {
        path: PathBuf,
        expected: Dimensions,
        found: Dimensions,
    },
}

/// Progress reported while assembling.
#[derive(Debug, Clone, PartialEq)]
pub enum AssembleEvent {
    /// A frame was decoded and fitted. `index` is 1-based.
    FrameLoaded {
        index: usize,
        source: PathBuf,
        original: Dimensions,
        loaded: Dimensions,
    },
    /// The boomerang sequence is ready for encoding.
    SequenceAssembled {
        forward: usize,
        total: usize,
        canvas: Dimensions,
    },
    /// The animation was written.
    Written {
        output: PathBuf,
        frames: usize,
        delay_ms: u32,
    },
}

/// What a successful write produced.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteSummary {
    pub output: PathBuf,
    pub source_frames: usize,
    pub encoded_frames: usize,
    pub canvas: Dimensions,
    pub delay: FrameDelay,
}

/// The forward sequence followed by its exact reverse.
///
/// `[a, b, c]` becomes `[a, b, c, c, b, a]`: length `2N`, and element `i`
/// is element `2N - 1 - i`.
pub fn boomerang<T>(forward: &[T]) -> Vec<&T> {
    forward.iter().chain(forward.iter().rev()).collect()
}

/// Write a boomerang animation with the production backend.
pub fn write(
    paths: &[PathBuf],
    output: &Path,
    config: &GifConfig,
    events: Option<Sender<AssembleEvent>>,
) -> Result<WriteSummary, AssembleError> {
    write_with_backend(&RustBackend::new(), paths, output, config, events)
}

/// Write a boomerang animation using a specific backend (allows testing with mock).
pub fn write_with_backend(
    backend: &impl FrameBackend,
    paths: &[PathBuf],
    output: &Path,
    config: &GifConfig,
    events: Option<Sender<AssembleEvent>>,
) -> Result<WriteSummary, AssembleError> {
    if paths.is_empty() {
        return Err(AssembleError::EmptyInput);
    }

    let mut frames = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let frame = load_frame(backend, path, config.frames.max_dimension)?;
        emit(
            &events,
            AssembleEvent::FrameLoaded {
                index: i + 1,
                source: path.clone(),
                original: frame.original,
                loaded: frame.dimensions(),
            },
        );
        frames.push(frame);
    }

    let (canvas, images) = normalize(frames, config.animation.canvas)?;
    let sequence = boomerang(&images);
    debug!(
        "assembled {} frames from {} sources on a {} canvas",
        sequence.len(),
        images.len(),
        canvas
    );
    emit(
        &events,
        AssembleEvent::SequenceAssembled {
            forward: images.len(),
            total: sequence.len(),
            canvas,
        },
    );

    let params = EncodeParams {
        output: output.to_path_buf(),
        delay: FrameDelay::from_seconds(config.animation.duration_seconds),
        repeat: Repeat::from_loop_count(config.animation.loop_count),
    };
    backend.encode(&params, &sequence)?;

    info!("wrote {}", output.display());
    emit(
        &events,
        AssembleEvent::Written {
            output: params.output.clone(),
            frames: sequence.len(),
            delay_ms: params.delay.millis(),
        },
    );

    Ok(WriteSummary {
        output: params.output,
        source_frames: images.len(),
        encoded_frames: sequence.len(),
        canvas,
        delay: params.delay,
    })
}

/// Bring every frame to one canvas size according to `policy`.
fn normalize(
    frames: Vec<DecodedFrame>,
    policy: CanvasPolicy,
) -> Result<(Dimensions, Vec<RgbaImage>), AssembleError> {
    let dims: Vec<(u32, u32)> = frames.iter().map(|f| f.dimensions().as_tuple()).collect();
    let canvas = calculate_canvas(&dims).ok_or(AssembleError::EmptyInput)?;

    if policy == CanvasPolicy::Strict {
        let expected = frames[0].dimensions();
        if let Some(odd) = frames.iter().find(|f| f.dimensions() != expected) {
            return Err(AssembleError::MismatchedDimensions {
                path: odd.source.clone(),
                expected,
                found: odd.dimensions(),
            });
        }
    }

    let images = frames
        .into_iter()
        .map(|f| {
            if f.dimensions().as_tuple() == canvas {
                f.image
            } else {
                debug!("padding {} onto {}x{}", f.source.display(), canvas.0, canvas.1);
                fit_to_canvas(&f.image, canvas)
            }
        })
        .collect();

    Ok((Dimensions::from(canvas), images))
}

fn emit(events: &Option<Sender<AssembleEvent>>, event: AssembleEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is listening
        tx.send(event).ok();
    }
}
