//! Incremental pipeline: advance stage-by-stage, inspecting each
//! intermediate result before continuing.
//!
//! Unlike [`crate::process_staged`] which runs the entire pipeline in one
//! call, [`Pipeline`] lets the caller drive execution one step at a time:
//!
//! ```rust
//! # use identicon_pipeline::{IdenticonConfig, Pipeline};
//! let state = Pipeline::new("username", IdenticonConfig::default())
//!     .hash()
//!     .select_color()
//!     .build_grid()
//!     .filter_cells()
//!     .map_pixels()
//!     .into_state();
//!
//! assert_eq!(state.pixel_map.len(), 10);
//! ```
//!
//! Each stage method consumes `self` and returns the next pipeline state,
//! carrying all previously computed intermediates forward unchanged. No
//! stage can fail: the input is any string and every later stage is a
//! fixed-size transform of the digest.

use log::debug;

use crate::diagnostics::StageMetrics;
use crate::digest::Digester;
use crate::types::{
    DIGEST_LEN, Grid, HashBytes, IMAGE_SIZE, IdenticonConfig, ImageState, PixelMap, Rgb,
};

// ───────────────────────── Stage 0: Pending ──────────────────────────

/// Pipeline state before any processing has occurred.
///
/// Call [`hash`](Self::hash) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing: call .hash() to continue"]
pub struct Pending {
    config: IdenticonConfig,
    input: String,
}

impl Pending {
    /// The input string.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Digest the input and advance to the [`Hashed`] stage.
    pub fn hash(self) -> Hashed {
        let hash = self.config.digest.digest(self.input.as_bytes());
        debug!(
            "hash: {} bytes via {} -> {hash}",
            self.input.len(),
            self.config.digest
        );
        Hashed {
            config: self.config,
            input_len: self.input.len(),
            hash,
        }
    }
}

// ───────────────────────── Stage 1: Hashed ───────────────────────────

/// Pipeline state after hashing the input.
///
/// Call [`select_color`](Self::select_color) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing: call .select_color() to continue"]
pub struct Hashed {
    config: IdenticonConfig,
    input_len: usize,
    hash: HashBytes,
}

impl Hashed {
    /// The 16 digest bytes.
    #[must_use]
    pub const fn hash_bytes(&self) -> &HashBytes {
        &self.hash
    }

    /// Advance to the color selection stage.
    pub fn select_color(self) -> ColorSelected {
        let color = crate::color::select_color(&self.hash);
        debug!("color: ({}, {}, {})", color.r, color.g, color.b);
        ColorSelected {
            hash: self.hash,
            color,
        }
    }
}

// ───────────────────────── Stage 2: ColorSelected ────────────────────

/// Pipeline state after choosing the fill color.
///
/// Call [`build_grid`](Self::build_grid) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing: call .build_grid() to continue"]
pub struct ColorSelected {
    hash: HashBytes,
    color: Rgb,
}

impl ColorSelected {
    /// The fill color.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Advance to the grid construction stage.
    pub fn build_grid(self) -> GridBuilt {
        let full_grid = crate::grid::build_grid(&self.hash);
        debug!("grid: {} cells", full_grid.len());
        GridBuilt {
            hash: self.hash,
            color: self.color,
            full_grid,
        }
    }
}

// ───────────────────────── Stage 3: GridBuilt ────────────────────────

/// Pipeline state after building the mirrored 25-cell grid.
///
/// Call [`filter_cells`](Self::filter_cells) to advance to the next stage.
#[must_use = "pipeline stages are consumed by advancing: call .filter_cells() to continue"]
pub struct GridBuilt {
    hash: HashBytes,
    color: Rgb,
    full_grid: Grid,
}

impl GridBuilt {
    /// The full mirrored grid.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.full_grid
    }

    /// Advance to the cell filtering stage.
    pub fn filter_cells(self) -> Filtered {
        let grid = crate::filter::filter_cells(&self.full_grid);
        debug!(
            "filter: kept {} of {} cells",
            grid.len(),
            self.full_grid.len()
        );
        Filtered {
            hash: self.hash,
            color: self.color,
            full_grid: self.full_grid,
            grid,
        }
    }
}

// ───────────────────────── Stage 4: Filtered ─────────────────────────

/// Pipeline state after dropping odd-valued cells.
///
/// Call [`map_pixels`](Self::map_pixels) to advance to the final stage.
#[must_use = "pipeline stages are consumed by advancing: call .map_pixels() to continue"]
pub struct Filtered {
    hash: HashBytes,
    color: Rgb,
    full_grid: Grid,
    grid: Grid,
}

impl Filtered {
    /// The retained cells, original indices intact.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Advance to the pixel mapping stage, the final pipeline step.
    pub fn map_pixels(self) -> Mapped {
        let pixel_map = crate::pixel_map::map_pixels(&self.grid);
        debug!(
            "pixel map: {} tiles, {} px² painted",
            pixel_map.len(),
            pixel_map.area()
        );
        Mapped {
            hash: self.hash,
            color: self.color,
            full_grid: self.full_grid,
            grid: self.grid,
            pixel_map,
        }
    }
}

// ───────────────────────── Stage 5: Mapped ───────────────────────────

/// Pipeline state after pixel mapping (final stage).
///
/// Call [`into_state`](Self::into_state) to extract the [`ImageState`]
/// containing all intermediates.
#[must_use = "call .into_state() to extract the ImageState"]
pub struct Mapped {
    hash: HashBytes,
    color: Rgb,
    full_grid: Grid,
    grid: Grid,
    pixel_map: PixelMap,
}

impl Mapped {
    /// The tiles to paint.
    #[must_use]
    pub const fn pixel_map(&self) -> &PixelMap {
        &self.pixel_map
    }

    /// Consume the pipeline and return the full [`ImageState`].
    #[must_use]
    pub fn into_state(self) -> ImageState {
        ImageState {
            hash_bytes: self.hash,
            color: self.color,
            full_grid: self.full_grid,
            grid: self.grid,
            pixel_map: self.pixel_map,
        }
    }
}

// ───────────────────────── Reporting ──────────────────────────────────

/// Number of stages that do work (everything after [`Pending`]).
pub const STAGE_COUNT: usize = 5;

/// A stage that has run and can describe what it produced.
///
/// [`Pending`] does not implement this: nothing has happened yet.
pub trait PipelineStage {
    /// Stable stage name used in diagnostics output (e.g. `"grid"`).
    const NAME: &'static str;

    /// Summary of this stage's product.
    fn metrics(&self) -> StageMetrics;
}

impl PipelineStage for Hashed {
    const NAME: &'static str = "hash";

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Hash {
            input_bytes: self.input_len,
            digest: self.config.digest.to_string(),
            hex: self.hash.to_hex(),
        }
    }
}

impl PipelineStage for ColorSelected {
    const NAME: &'static str = "color";

    fn metrics(&self) -> StageMetrics {
        let Rgb { r, g, b } = self.color;
        StageMetrics::Color {
            r,
            g,
            b,
            hex: format!("#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

impl PipelineStage for GridBuilt {
    const NAME: &'static str = "grid";

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Grid {
            cell_count: self.full_grid.len(),
            unused_bytes: DIGEST_LEN % 3,
        }
    }
}

impl PipelineStage for Filtered {
    const NAME: &'static str = "filter";

    fn metrics(&self) -> StageMetrics {
        StageMetrics::Filter {
            retained: self.grid.len(),
            dropped: self.full_grid.len() - self.grid.len(),
        }
    }
}

impl PipelineStage for Mapped {
    const NAME: &'static str = "pixel_map";

    // Areas are at most 62 500, well inside f64's exact range.
    #[allow(clippy::cast_precision_loss)]
    fn metrics(&self) -> StageMetrics {
        let painted_area = self.pixel_map.area();
        let canvas_area = u64::from(IMAGE_SIZE) * u64::from(IMAGE_SIZE);
        StageMetrics::PixelMap {
            rect_count: self.pixel_map.len(),
            painted_area,
            coverage: painted_area as f64 / canvas_area as f64,
        }
    }
}

// ───────────────────── Pipeline entry point ──────────────────────────

/// Incremental identicon pipeline.
///
/// Created via [`Pipeline::new`], which stores the input and config
/// without doing any work. Each stage method consumes the current state
/// and returns the next, making it a compile-time error to skip stages
/// or call them out of order.
pub struct Pipeline;

impl Pipeline {
    /// Create a new pipeline from an input string and config.
    #[allow(clippy::new_ret_no_self)]
    pub fn new(input: impl Into<String>, config: IdenticonConfig) -> Pending {
        Pending {
            config,
            input: input.into(),
        }
    }
}
