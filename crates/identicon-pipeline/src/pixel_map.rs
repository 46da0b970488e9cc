//! Pixel mapping: turn retained cells into 50×50 canvas rectangles.

use crate::types::{CELL_SIZE, Grid, GridCell, PixelMap, Point, Rect};

/// The tile covering one grid cell.
///
/// Row and column come from the cell's original index, so gaps left by
/// filtering stay gaps on the canvas.
#[must_use]
pub const fn cell_rect(cell: GridCell) -> Rect {
    let horizontal = cell.column() * CELL_SIZE;
    let vertical = cell.row() * CELL_SIZE;
    Rect::new(
        Point::new(horizontal, vertical),
        Point::new(horizontal + CELL_SIZE, vertical + CELL_SIZE),
    )
}

/// Map every cell of a (filtered) grid to its tile, preserving order.
#[must_use]
pub fn map_pixels(grid: &Grid) -> PixelMap {
    grid.iter().copied().map(cell_rect).collect()
}
