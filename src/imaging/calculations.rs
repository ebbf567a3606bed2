//! Pure calculation functions for frame dimensions.
//!
//! All functions here are pure and testable without any I/O or images.

/// Calculate the dimensions a frame is loaded at, given a maximum edge size.
///
/// Frames whose width and height are both within `max_dim` are returned
/// unchanged. Larger frames are scaled by a single ratio so the bounding edge
/// lands on `max_dim` and the other side is truncated toward zero. The result never
/// exceeds `max_dim` on either side and never enlarges.
///
/// # Arguments
/// * `source` - Decoded image dimensions (width, height)
/// * `max_dim` - Largest allowed edge in pixels
///
/// # Examples
/// ```
/// # use boomerang_gif::imaging::calculate_fit_dimensions;
/// // Width-bound landscape: ratio 0.8
/// assert_eq!(calculate_fit_dimensions((1000, 500), 800), (800, 400));
///
/// // Already within bounds
/// assert_eq!(calculate_fit_dimensions((400, 400), 800), (400, 400));
/// ```
pub fn calculate_fit_dimensions(source: (u32, u32), max_dim: u32) -> (u32, u32) {
    let (w, h) = source;
    if w <= max_dim && h <= max_dim {
        return source;
    }

    // ratio = min(max/w, max/h); the longer side is the bound one. Integer
    // math gives the exact truncation of side * ratio.
    let (max, w64, h64) = (max_dim as u64, w as u64, h as u64);
    let (new_w, new_h) = if w >= h {
        (max, h64 * max / w64)
    } else {
        (w64 * max / h64, max)
    };

    // Extreme aspect ratios can truncate the short side to zero
    (new_w.max(1) as u32, new_h.max(1) as u32)
}

/// Calculate a canvas that holds every frame: the per-axis maximum.
///
/// Returns `None` for an empty list.
pub fn calculate_canvas(dims: &[(u32, u32)]) -> Option<(u32, u32)> {
    dims.iter()
        .copied()
        .reduce(|(aw, ah), (bw, bh)| (aw.max(bw), ah.max(bh)))
}

/// Top-left offset that centers a frame on a canvas.
///
/// Odd leftovers go to the right/bottom edge. A frame larger than the canvas
/// on an axis gets offset 0 on that axis.
pub fn calculate_centered_offset(frame: (u32, u32), canvas: (u32, u32)) -> (u32, u32) {
    let (fw, fh) = frame;
    let (cw, ch) = canvas;
    (cw.saturating_sub(fw) / 2, ch.saturating_sub(fh) / 2)
}
