//! Frame discovery.
//!
//! Lists the entries directly inside a source directory and keeps the regular
//! files whose name ends with the configured suffix (`.png` by default). The
//! match is case-sensitive and non-recursive:
//!
//! ```text
//! frames/
//! ├── 001.png        ✓ frame
//! ├── 002.png        ✓ frame
//! ├── 003.PNG        ✗ suffix is case-sensitive
//! ├── notes.txt      ✗
//! ├── animated.gif   ✗ other suffix, and always dropped as the output
//! └── extra/
//!     └── 004.png    ✗ nested files are ignored
//! ```
//!
//! ## Ordering
//!
//! With `frames.sort = true` (the default) frames are sorted by file name, so
//! `001.png` < `002.png` < `010.png`. Without sorting the order is whatever the
//! filesystem returns, which differs between platforms.
//!
//! An empty result is not an error here; the assembler decides what an
//! empty frame list means.
//!
//! ## Previous output
//!
//! With `frames.extension = "gif"` the last run's animation matches the
//! suffix. [`without_output`] drops it so repeated runs see the same frames.

use crate::config::FramesConfig;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Enumerate frame paths directly inside `dir`.
pub fn from_directory(dir: &Path, config: &FramesConfig) -> Result<Vec<PathBuf>, ScanError> {
    if !dir.is_dir() {
        return Err(ScanError::NotADirectory(dir.to_path_buf()));
    }

    let suffix = config.suffix();
    let mut frames = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let matches = name.to_str().is_some_and(|n| n.ends_with(&suffix));
        if matches && entry.path().is_file() {
            frames.push(dir.join(name));
        }
    }

    if config.sort {
        frames.sort();
    }

    debug!(
        "found {} {} frames in {}",
        frames.len(),
        suffix,
        dir.display()
    );
    Ok(frames)
}

/// Remove the file at `output` from a frame list.
///
/// Paths are compared after canonicalization, so `./shots/animated.gif` and
/// `shots/animated.gif` are the same file. A missing output cannot be in the
/// list and leaves it unchanged.
pub fn without_output(frames: Vec<PathBuf>, output: &Path) -> Vec<PathBuf> {
    let Ok(target) = output.canonicalize() else {
        return frames;
    };
    frames
        .into_iter()
        .filter(|frame| {
            let is_output = frame.canonicalize().is_ok_and(|p| p == target);
            if is_output {
                debug!("skipping previous output {}", frame.display());
            }
            !is_output
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::file_names;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn finds_only_top_level_png_files() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "b.png");
        touch(tmp.path(), "a.png");
        touch(tmp.path(), "notes.txt");
        touch(tmp.path(), "animated.gif");
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested"), "c.png");

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();

        assert_eq!(file_names(&frames), vec!["a.png", "b.png"]);
        assert!(frames.iter().all(|p| p.parent() == Some(tmp.path())));
    }

    #[test]
    fn suffix_is_case_sensitive() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "upper.PNG");
        touch(tmp.path(), "mixed.Png");
        touch(tmp.path(), "lower.png");

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();
        assert_eq!(file_names(&frames), vec!["lower.png"]);
    }

    #[test]
    fn name_must_end_with_suffix() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "frame.png.bak");
        touch(tmp.path(), "png");
        touch(tmp.path(), ".png");

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();
        // A bare ".png" still ends with the suffix
        assert_eq!(file_names(&frames), vec![".png"]);
    }

    #[test]
    fn directory_named_like_a_frame_is_skipped() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("folder.png")).unwrap();
        touch(tmp.path(), "real.png");

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();
        assert_eq!(file_names(&frames), vec!["real.png"]);
    }

    #[test]
    fn sorted_lexicographically_by_default() {
        let tmp = TempDir::new().unwrap();
        for name in ["010.png", "002.png", "001.png", "100.png"] {
            touch(tmp.path(), name);
        }

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();
        assert_eq!(
            file_names(&frames),
            vec!["001.png", "002.png", "010.png", "100.png"]
        );
    }

    #[test]
    fn unsorted_keeps_every_match() {
        let tmp = TempDir::new().unwrap();
        for name in ["c.png", "a.png", "b.png"] {
            touch(tmp.path(), name);
        }
        let config = FramesConfig {
            sort: false,
            ..Default::default()
        };

        let mut names = file_names(&from_directory(tmp.path(), &config).unwrap());
        names.sort();
        assert_eq!(names, vec!["a.png", "b.png", "c.png"]);
    }

    #[test]
    fn custom_extension() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.jpg");
        touch(tmp.path(), "b.png");
        let config = FramesConfig {
            extension: "jpg".to_string(),
            ..Default::default()
        };

        let frames = from_directory(tmp.path(), &config).unwrap();
        assert_eq!(file_names(&frames), vec!["a.jpg"]);
    }

    #[test]
    fn empty_directory_is_empty_list() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "readme.md");

        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();
        assert!(frames.is_empty());
    }

    #[test]
    fn missing_directory_errors() {
        let tmp = TempDir::new().unwrap();
        let result = from_directory(&tmp.path().join("nope"), &FramesConfig::default());
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn file_instead_of_directory_errors() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");
        let result = from_directory(&tmp.path().join("a.png"), &FramesConfig::default());
        assert!(matches!(result, Err(ScanError::NotADirectory(_))));
    }

    #[test]
    fn without_output_drops_previous_animation() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.gif");
        touch(tmp.path(), "b.gif");
        touch(tmp.path(), "animated.gif");
        let config = FramesConfig {
            extension: "gif".to_string(),
            ..Default::default()
        };

        let frames = from_directory(tmp.path(), &config).unwrap();
        assert_eq!(frames.len(), 3);

        let output = tmp.path().join(".").join("animated.gif");
        let frames = without_output(frames, &output);
        assert_eq!(file_names(&frames), vec!["a.gif", "b.gif"]);
    }

    #[test]
    fn without_output_ignores_missing_output() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "a.png");
        let frames = from_directory(tmp.path(), &FramesConfig::default()).unwrap();

        let frames = without_output(frames, &tmp.path().join("animated.gif"));
        assert_eq!(file_names(&frames), vec!["a.png"]);
    }
}
