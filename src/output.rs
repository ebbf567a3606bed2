//! CLI output formatting.
//!
//! Each entity line leads with a 3-digit positional index and the frame's
//! file name; dimensions follow as context.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Frames in shots/ (2)
//! 001 a.png
//! 002 b.png
//! ```
//!
//! ## Write
//!
//! ```text
//! 001 a.png 1000x500 → 800x400
//! 002 b.png 400x400
//! Sequence: 2 frames → 4 (boomerang) on 800x400
//! Wrote shots/animated.gif (4 frames, 333 ms each)
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout.

use crate::assemble::AssembleEvent;
use std::path::{Path, PathBuf};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format the frames discovered in a directory.
pub fn format_scan_output(frames: &[PathBuf], dir: &Path) -> Vec<String> {
    let mut lines = vec![format!("Frames in {} ({})", dir.display(), frames.len())];
    lines.extend(
        frames
            .iter()
            .enumerate()
            .map(|(i, path)| format!("{} {}", format_index(i + 1), file_name(path))),
    );
    lines
}

pub fn print_scan_output(frames: &[PathBuf], dir: &Path) {
    for line in format_scan_output(frames, dir) {
        println!("{}", line);
    }
}

/// Format a single assembly event.
pub fn format_assemble_event(event: &AssembleEvent) -> Vec<String> {
    match event {
        AssembleEvent::FrameLoaded {
            index,
            source,
            original,
            loaded,
        } => {
            let mut line = format!("{} {} {}", format_index(*index), file_name(source), original);
            if original != loaded {
                line.push_str(&format!(" → {}", loaded));
            }
            vec![line]
        }
        AssembleEvent::SequenceAssembled {
            forward,
            total,
            canvas,
        } => vec![format!(
            "Sequence: {} frames → {} (boomerang) on {}",
            forward, total, canvas
        )],
        AssembleEvent::Written {
            output,
            frames,
            delay_ms,
        } => vec![format!(
            "Wrote {} ({} frames, {} ms each)",
            output.display(),
            frames,
            delay_ms
        )],
    }
}
