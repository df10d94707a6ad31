//! Centered crop geometry.
//!
//! The crop keeps the full extent of one axis and shrinks the other so the
//! frame matches the target aspect ratio, centered on the shrinking axis.
//! Every extent is rounded down to an even number of pixels because the
//! encoder's `yuv420p` output subsamples chroma 4:2:0.

use crate::config::AspectRatio;
use crate::error::{CoreError, CoreResult};

use std::fmt;

/// Crop rectangle in source pixel coordinates, `x2`/`y2` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRect {
    #[must_use]
    pub fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1)
    }

    /// ffmpeg `crop` filter for this rectangle (`crop=w:h:x:y`).
    #[must_use]
    pub fn to_filter(&self) -> String {
        format!("crop={}:{}:{}:{}", self.width(), self.height(), self.x1, self.y1)
    }
}

impl fmt::Display for CropRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.width(),
            self.height(),
            self.x1,
            self.y1
        )
    }
}

/// Rounds down to the nearest even integer.
#[inline]
fn even_floor(value: u32) -> u32 {
    value & !1
}

/// Computes the centered, even-aligned crop of a `width` x `height` frame
/// that matches `ratio`.
///
/// Fails with `InvalidCrop` when the frame is too small to produce a
/// non-empty even rectangle.
pub fn compute_center_crop(width: u32, height: u32, ratio: AspectRatio) -> CoreResult<CropRect> {
    if ratio.width == 0 || ratio.height == 0 {
        return Err(CoreError::InvalidCrop(format!(
            "aspect ratio {}:{} has a zero component",
            ratio.width, ratio.height
        )));
    }

    let (w, h) = (f64::from(width), f64::from(height));
    let target_width = h * f64::from(ratio.width) / f64::from(ratio.height);
    let target_height = w * f64::from(ratio.height) / f64::from(ratio.width);

    let rect = if target_width <= w {
        let x1 = even_floor(((w - target_width) / 2.0).floor() as u32);
        CropRect {
            x1,
            y1: 0,
            x2: x1 + even_floor(target_width.floor() as u32),
            y2: even_floor(height),
        }
    } else {
        let y1 = even_floor(((h - target_height) / 2.0).floor() as u32);
        CropRect {
            x1: 0,
            y1,
            x2: even_floor(width),
            y2: y1 + even_floor(target_height.floor() as u32),
        }
    };

    if rect.width() == 0 || rect.height() == 0 {
        return Err(CoreError::InvalidCrop(format!(
            "{width}x{height} frame is too small for a {}:{} crop",
            ratio.width, ratio.height
        )));
    }

    log::debug!(
        "Crop for {}x{} at {}:{}: {}",
        width,
        height,
        ratio.width,
        ratio.height,
        rect
    );
    Ok(rect)
}
