//! Shared types for the identicon pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::digest::DigestKind;

/// Number of cells along each side of the identicon grid.
pub const GRID_SIZE: u32 = 5;

/// Side length of one painted tile, in pixels.
pub const CELL_SIZE: u32 = 50;

/// Side length of the rendered canvas, in pixels.
pub const IMAGE_SIZE: u32 = GRID_SIZE * CELL_SIZE;

/// Number of cells in the unfiltered grid.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Length of the digest produced by every [`DigestKind`], in bytes.
pub const DIGEST_LEN: usize = 16;

/// The 16 bytes of a 128-bit digest, in big-endian digest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashBytes([u8; DIGEST_LEN]);

impl HashBytes {
    /// Wrap a raw digest.
    #[must_use]
    pub const fn new(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Lowercase hexadecimal rendering of the digest.
    #[must_use]
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for HashBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// An opaque 8-bit-per-channel color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Create a new color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// One position of the conceptual 5×5 matrix.
///
/// `index` is assigned once over the unfiltered 25-cell sequence
/// (row-major, 0 = top-left) and is never renumbered afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    /// The hash byte occupying this cell.
    pub value: u8,
    /// Row-major position in the full grid.
    pub index: u32,
}

impl GridCell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(value: u8, index: u32) -> Self {
        Self { value, index }
    }

    /// Zero-based row of this cell.
    #[must_use]
    pub const fn row(self) -> u32 {
        self.index / GRID_SIZE
    }

    /// Zero-based column of this cell.
    #[must_use]
    pub const fn column(self) -> u32 {
        self.index % GRID_SIZE
    }
}

/// An ordered sequence of grid cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Grid(Vec<GridCell>);

impl Grid {
    /// Create a grid from a vector of cells.
    #[must_use]
    pub const fn new(cells: Vec<GridCell>) -> Self {
        Self(cells)
    }

    /// Returns `true` if the grid has no cells.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of cells.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all cells.
    #[must_use]
    pub fn cells(&self) -> &[GridCell] {
        &self.0
    }

    /// Iterate over the cells in order.
    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.0.iter()
    }

    /// Consumes the grid and returns the underlying vector of cells.
    #[must_use]
    pub fn into_cells(self) -> Vec<GridCell> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<GridCell> for Grid {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// A point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// Pixels from the left edge.
    pub x: u32,
    /// Pixels from the top edge.
    pub y: u32,
}

impl Point {
    /// Create a new point.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle, inclusive top-left to exclusive
/// bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Upper-left corner.
    pub top_left: Point,
    /// Lower-right corner.
    pub bottom_right: Point,
}

impl Rect {
    /// Create a rectangle from its two corners.
    #[must_use]
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// Horizontal extent in pixels.
    #[must_use]
    pub const fn width(self) -> u32 {
        self.bottom_right.x - self.top_left.x
    }

    /// Vertical extent in pixels.
    #[must_use]
    pub const fn height(self) -> u32 {
        self.bottom_right.y - self.top_left.y
    }
}

/// Rectangles to paint, one per retained grid cell, in grid order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelMap(Vec<Rect>);

impl PixelMap {
    /// Create a pixel map from a vector of rectangles.
    #[must_use]
    pub const fn new(rects: Vec<Rect>) -> Self {
        Self(rects)
    }

    /// Returns `true` if there is nothing to paint.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of rectangles.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns a slice of all rectangles.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.0
    }

    /// Total painted area in square pixels.
    #[must_use]
    pub fn area(&self) -> u64 {
        self.0
            .iter()
            .map(|r| u64::from(r.width()) * u64::from(r.height()))
            .sum()
    }
}

impl FromIterator<Rect> for PixelMap {
    fn from_iter<I: IntoIterator<Item = Rect>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Canvas dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// The fixed identicon canvas.
    pub const IDENTICON: Self = Self {
        width: IMAGE_SIZE,
        height: IMAGE_SIZE,
    };
}

/// Configuration for the identicon pipeline.
///
/// Grid and canvas sizes are fixed constants; only the digest strategy
/// can be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IdenticonConfig {
    /// Which 128-bit digest turns the input into hash bytes.
    pub digest: DigestKind,
}

/// Everything a renderer needs: the color and the tiles to fill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identicon {
    /// Fill color for every tile.
    pub color: Rgb,
    /// Tiles to paint, in order.
    pub pixel_map: PixelMap,
    /// Canvas size; always [`Dimensions::IDENTICON`].
    pub dimensions: Dimensions,
}

/// Result of running the pipeline with every intermediate preserved.
///
/// Each field is produced by exactly one stage and never modified by a
/// later one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageState {
    /// Stage 1: digest of the input.
    pub hash_bytes: HashBytes,
    /// Stage 2: fill color.
    pub color: Rgb,
    /// Stage 3: the full mirrored 25-cell grid.
    pub full_grid: Grid,
    /// Stage 4: cells retained for painting, original indices intact.
    pub grid: Grid,
    /// Stage 5: one rectangle per retained cell.
    pub pixel_map: PixelMap,
}

impl ImageState {
    /// The renderer-facing subset of this state.
    #[must_use]
    pub fn identicon(&self) -> Identicon {
        Identicon {
            color: self.color,
            pixel_map: self.pixel_map.clone(),
            dimensions: Dimensions::IDENTICON,
        }
    }

    /// Consume the state, keeping only the renderer-facing subset.
    #[must_use]
    pub fn into_identicon(self) -> Identicon {
        Identicon {
            color: self.color,
            pixel_map: self.pixel_map,
            dimensions: Dimensions::IDENTICON,
        }
    }
}
