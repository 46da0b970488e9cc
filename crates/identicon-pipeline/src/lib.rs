//! identicon-pipeline: Pure identicon derivation pipeline (sans-IO).
//!
//! Turns an arbitrary string into the tiles of a 250×250 identicon
//! through:
//! hash -> color selection -> mirrored grid -> even-cell filter ->
//! pixel mapping.
//!
//! This crate has **no I/O dependencies** and no fallible steps -- it
//! operates on in-memory values and returns structured data. Rendering
//! lives in `identicon-export`, filesystem interaction in `identicon-io`.

pub mod color;
pub mod diagnostics;
pub mod digest;
pub mod filter;
pub mod grid;
pub mod pipeline;
pub mod pixel_map;
pub mod types;

pub use diagnostics::{PipelineDiagnostics, StageMetrics};
pub use digest::{DigestKind, Digester};
pub use pipeline::Pipeline;
pub use types::{
    CELL_COUNT, CELL_SIZE, DIGEST_LEN, Dimensions, GRID_SIZE, Grid, GridCell, HashBytes,
    IMAGE_SIZE, Identicon, IdenticonConfig, ImageState, PixelMap, Point, Rect, Rgb,
};

/// Run the full pipeline and keep only what a renderer needs.
///
/// # Pipeline steps
///
/// 1. Hash the UTF-8 bytes of `input` (128-bit digest)
/// 2. Take the first three digest bytes as the fill color
/// 3. Mirror 3-byte chunks into a 5×5 grid of indexed cells
/// 4. Drop odd-valued cells
/// 5. Map each remaining cell to its 50×50 tile
#[must_use]
pub fn process(input: &str, config: &IdenticonConfig) -> Identicon {
    process_staged(input, config).into_identicon()
}

/// Run the full pipeline, preserving every intermediate.
#[must_use]
pub fn process_staged(input: &str, config: &IdenticonConfig) -> ImageState {
    Pipeline::new(input, *config)
        .hash()
        .select_color()
        .build_grid()
        .filter_cells()
        .map_pixels()
        .into_state()
}
