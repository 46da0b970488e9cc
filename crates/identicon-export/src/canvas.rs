//! The drawing capability every output backend provides.
//!
//! An identicon needs exactly one primitive: fill an axis-aligned tile
//! with a solid color. [`paint`] drives any [`Canvas`] through the pixel
//! map in order, so raster and vector backends share one definition of
//! what gets drawn.

use identicon_pipeline::{Identicon, Rect, Rgb};

use crate::error::ExportError;

/// A surface that can fill axis-aligned tiles.
///
/// Fills are opaque and unblended; where tiles overlap the later fill
/// wins.
pub trait Canvas {
    /// Fill `tile` with `color`.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::InvalidTile`] if the backend cannot
    /// represent the rectangle.
    fn fill_rect(&mut self, tile: Rect, color: Rgb) -> Result<(), ExportError>;
}

/// Reject tiles with zero or negative extent.
///
/// Backends call this before drawing; some (tiny-skia) would otherwise
/// accept an empty rectangle and silently draw nothing.
///
/// # Errors
///
/// Returns [`ExportError::InvalidTile`] if `tile` has no area.
pub fn check_tile(tile: Rect) -> Result<Rect, ExportError> {
    if tile.bottom_right.x <= tile.top_left.x || tile.bottom_right.y <= tile.top_left.y {
        return Err(ExportError::InvalidTile(tile));
    }
    Ok(tile)
}

/// Paint every tile of `identicon` onto `canvas`, in pixel-map order.
///
/// # Errors
///
/// Propagates the first error reported by the canvas.
pub fn paint<C: Canvas + ?Sized>(canvas: &mut C, identicon: &Identicon) -> Result<(), ExportError> {
    for &tile in identicon.pixel_map.rects() {
        canvas.fill_rect(tile, identicon.color)?;
    }
    Ok(())
}
