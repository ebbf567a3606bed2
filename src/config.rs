//! Configuration module.
//!
//! Handles loading, validating, and layering `boomerang.toml`. Configuration
//! is layered: stock defaults, then an optional `boomerang.toml` in the source
//! directory, then command-line flags. Each layer is a sparse TOML table merged
//! on top of the previous one before deserializing.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [frames]
//! extension = "png"          # Case-sensitive file name suffix (without the dot)
//! max_dimension = 800        # Frames with a longer edge are scaled down
//! sort = true                # Sort by file name instead of raw directory order
//!
//! [animation]
//! duration_seconds = 0.333   # Display time of every frame
//! output = "animated.gif"    # Relative to the source directory
//! canvas = "pad"             # "pad" or "strict" for mixed frame sizes
//! loop_count = 0             # extra repeats, 0 = loop forever
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the optional config file inside the source directory.
pub const CONFIG_FILE_NAME: &str = "boomerang.toml";

/// Largest per-frame delay a GIF can store: 65535 centiseconds.
const MAX_DURATION_SECONDS: f64 = 655.35;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full configuration for one run.
///
/// All fields have defaults. Config files need only specify the values they
/// want to override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GifConfig {
    /// Frame discovery and loading.
    pub frames: FramesConfig,
    /// Sequence assembly and encoding.
    pub animation: AnimationConfig,
}

impl GifConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.frames.extension.is_empty() {
            return Err(ConfigError::Validation(
                "frames.extension must not be empty".into(),
            ));
        }
        if self.frames.max_dimension == 0 {
            return Err(ConfigError::Validation(
                "frames.max_dimension must be non-zero".into(),
            ));
        }
        let duration = self.animation.duration_seconds;
        if !duration.is_finite() || duration <= 0.0 || duration > MAX_DURATION_SECONDS {
            return Err(ConfigError::Validation(format!(
                "animation.duration_seconds must be in (0, {MAX_DURATION_SECONDS}], got {duration}"
            )));
        }
        if self.animation.output.is_empty() {
            return Err(ConfigError::Validation(
                "animation.output must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Frame discovery and loading settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FramesConfig {
    /// File name suffix (without the dot) that marks a frame. Case-sensitive.
    pub extension: String,
    /// Longest allowed edge in pixels; larger frames are scaled down.
    pub max_dimension: u32,
    /// Sort frames by file name. When false, directory order is kept as-is,
    /// which is not stable across platforms.
    pub sort: bool,
}

impl Default for FramesConfig {
    fn default() -> Self {
        Self {
            extension: "png".to_string(),
            max_dimension: 800,
            sort: true,
        }
    }
}

impl FramesConfig {
    /// The full suffix matched against file names, e.g. `".png"`.
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension)
    }
}

/// How frames of different sizes share one animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CanvasPolicy {
    /// Center every frame on a transparent canvas sized to the largest
    /// width and height.
    #[default]
    Pad,
    /// Refuse to encode frames whose dimensions differ.
    Strict,
}

/// Sequence assembly and encoding settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Display time of every frame, in seconds.
    pub duration_seconds: f64,
    /// Output file name, resolved against the source directory.
    pub output: String,
    /// Policy for frames with differing dimensions.
    pub canvas: CanvasPolicy,
    /// Repeats after the first play; 0 loops forever.
    pub loop_count: u16,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_seconds: 0.333,
            output: "animated.gif".to_string(),
            canvas: CanvasPolicy::Pad,
            loop_count: 0,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(GifConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `boomerang.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge overlays in order onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlays: impl IntoIterator<Item = toml::Value>,
) -> Result<GifConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_toml);
    let config: GifConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config for a source directory, applying `overrides` last.
///
/// `overrides` is typically built from command-line flags with
/// [`ConfigOverrides::to_toml`].
pub fn load_config(dir: &Path, overrides: &ConfigOverrides) -> Result<GifConfig, ConfigError> {
    let file = load_raw_config(dir)?;
    resolve_config(
        stock_defaults_value(),
        file.into_iter().chain(Some(overrides.to_toml())),
    )
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub max_dimension: Option<u32>,
    pub duration_seconds: Option<f64>,
    pub canvas: Option<CanvasPolicy>,
    pub no_sort: bool,
}

impl ConfigOverrides {
    /// Render the set overrides as a sparse TOML table.
    pub fn to_toml(&self) -> toml::Value {
        let mut frames = toml::Table::new();
        if let Some(max) = self.max_dimension {
            frames.insert("max_dimension".into(), toml::Value::Integer(max.into()));
        }
        if self.no_sort {
            frames.insert("sort".into(), toml::Value::Boolean(false));
        }

        let mut animation = toml::Table::new();
        if let Some(duration) = self.duration_seconds {
            animation.insert("duration_seconds".into(), toml::Value::Float(duration));
        }
        if let Some(canvas) = self.canvas {
            let name = match canvas {
                CanvasPolicy::Pad => "pad",
                CanvasPolicy::Strict => "strict",
            };
            animation.insert("canvas".into(), toml::Value::String(name.into()));
        }

        let mut root = toml::Table::new();
        if !frames.is_empty() {
            root.insert("frames".into(), toml::Value::Table(frames));
        }
        if !animation.is_empty() {
            root.insert("animation".into(), toml::Value::Table(animation));
        }
        toml::Value::Table(root)
    }
}

/// Returns a fully-commented stock `boomerang.toml`.
///
/// Printed by `--gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# boomerang-gif configuration
# ==========================
# Place this file as boomerang.toml in the frame directory.
# All settings are optional. Values shown below are the defaults.
# Command-line flags override anything set here.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Frame discovery and loading
# ---------------------------------------------------------------------------
[frames]
# File name suffix (without the dot) that marks a frame. Case-sensitive,
# so "png" does not match "FRAME.PNG".
extension = "png"

# Frames whose width or height exceeds this are scaled down, keeping
# their aspect ratio. Frames are never enlarged.
max_dimension = 800

# Sort frames by file name. Set to false to keep raw directory order,
# which differs between platforms and filesystems.
sort = true

# ---------------------------------------------------------------------------
# Animation
# ---------------------------------------------------------------------------
[animation]
# How long every frame is shown, in seconds (GIF stores milliseconds).
duration_seconds = 0.333

# Output file, relative to the frame directory.
output = "animated.gif"

# Frames of different sizes:
#   "pad"    - center each frame on a canvas as large as the largest frame
#   "strict" - fail instead of encoding mixed sizes
canvas = "pad"

# Extra repeats after the first play (2 plays the sequence three times).
# 0 loops forever.
loop_count = 0
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_values() {
        let config = GifConfig::default();
        assert_eq!(config.frames.extension, "png");
        assert_eq!(config.frames.max_dimension, 800);
        assert!(config.frames.sort);
        assert_eq!(config.animation.duration_seconds, 0.333);
        assert_eq!(config.animation.output, "animated.gif");
        assert_eq!(config.animation.canvas, CanvasPolicy::Pad);
        assert_eq!(config.animation.loop_count, 0);
    }

    #[test]
    fn frames_suffix_has_dot() {
        assert_eq!(FramesConfig::default().suffix(), ".png");
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[animation]
duration_seconds = 0.5
"#;
        let config: GifConfig = toml::from_str(toml).unwrap();
        // Overridden value
        assert_eq!(config.animation.duration_seconds, 0.5);
        // Default values preserved
        assert_eq!(config.animation.output, "animated.gif");
        assert_eq!(config.frames.max_dimension, 800);
    }

    #[test]
    fn parse_canvas_policy() {
        let config: GifConfig = toml::from_str("[animation]\ncanvas = \"strict\"").unwrap();
        assert_eq!(config.animation.canvas, CanvasPolicy::Strict);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<GifConfig, _> = toml::from_str("[frames]\nmax_dim = 10");
        assert!(result.is_err());
    }

    #[test]
    fn stock_config_parses_to_defaults() {
        let config: GifConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, GifConfig::default());
    }

    // =========================================================================
    // validate tests
    // =========================================================================

    #[test]
    fn validate_rejects_zero_max_dimension() {
        let mut config = GifConfig::default();
        config.frames.max_dimension = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn validate_rejects_bad_durations() {
        for duration in [0.0, -1.0, f64::NAN, f64::INFINITY, 700.0] {
            let mut config = GifConfig::default();
            config.animation.duration_seconds = duration;
            assert!(
                matches!(config.validate(), Err(ConfigError::Validation(_))),
                "{duration} should be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_empty_strings() {
        let mut config = GifConfig::default();
        config.frames.extension.clear();
        assert!(config.validate().is_err());

        let mut config = GifConfig::default();
        config.animation.output.clear();
        assert!(config.validate().is_err());
    }

    // =========================================================================
    // merge / load tests
    // =========================================================================

    #[test]
    fn merge_toml_overlay_wins_and_base_survives() {
        let base: toml::Value = toml::from_str("[a]\nx = 1\ny = 2").unwrap();
        let overlay: toml::Value = toml::from_str("[a]\ny = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"]["x"].as_integer(), Some(1));
        assert_eq!(merged["a"]["y"].as_integer(), Some(3));
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config, GifConfig::default());
    }

    #[test]
    fn load_config_reads_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            r#"
[frames]
max_dimension = 320

[animation]
loop_count = 2
"#,
        )
        .unwrap();

        let config = load_config(tmp.path(), &ConfigOverrides::default()).unwrap();
        assert_eq!(config.frames.max_dimension, 320);
        assert_eq!(config.animation.loop_count, 2);
        // Unspecified values should be defaults
        assert_eq!(config.frames.extension, "png");
    }

    #[test]
    fn load_config_overrides_beat_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILE_NAME),
            "[animation]\nduration_seconds = 1.0\noutput = \"loop.gif\"",
        )
        .unwrap();

        let overrides = ConfigOverrides {
            duration_seconds: Some(0.5),
            canvas: Some(CanvasPolicy::Strict),
            no_sort: true,
            ..Default::default()
        };
        let config = load_config(tmp.path(), &overrides).unwrap();

        assert_eq!(config.animation.duration_seconds, 0.5);
        assert_eq!(config.animation.canvas, CanvasPolicy::Strict);
        assert!(!config.frames.sort);
        // File value without a flag survives
        assert_eq!(config.animation.output, "loop.gif");
    }

    #[test]
    fn load_config_invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE_NAME), "this is not valid toml [[[").unwrap();

        let result = load_config(tmp.path(), &ConfigOverrides::default());
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_invalid_override_is_validation_error() {
        let tmp = TempDir::new().unwrap();
        let overrides = ConfigOverrides {
            max_dimension: Some(0),
            ..Default::default()
        };
        let result = load_config(tmp.path(), &overrides);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_overrides_render_empty_table() {
        let value = ConfigOverrides::default().to_toml();
        assert!(value.as_table().unwrap().is_empty());
    }
}
