//! Frame processing in pure Rust, built on the `image` crate.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::ImageReader` (format sniffed from content) |
//! | **Fit** | `calculate_fit_dimensions` + Lanczos3 `resize_exact` |
//! | **Canvas** | `imageops::overlay` onto a transparent RGBA canvas |
//! | **Encode → GIF** | `image::codecs::gif::GifEncoder` |
//!
//! The module is split into:
//! - **Calculations**: Pure functions for dimension math (unit testable)
//! - **Parameters**: Data structures describing an encode
//! - **Backend**: [`FrameBackend`] trait + [`RustBackend`]
//! - **Operations**: High-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, Dimensions, FrameBackend};
pub use calculations::{calculate_canvas, calculate_centered_offset, calculate_fit_dimensions};
pub use operations::{DecodedFrame, fit_to_canvas, load_frame};
pub use params::{EncodeParams, FrameDelay, Repeat};
pub use rust_backend::RustBackend;
