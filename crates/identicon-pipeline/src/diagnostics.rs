//! Pipeline diagnostics: per-stage counts and summaries.
//!
//! Every stage after [`Pending`](crate::pipeline::Pending) reports a
//! [`StageMetrics`] describing what it produced. [`PipelineDiagnostics`]
//! walks a whole run and collects them in stage order, ready to be
//! serialized as JSON.

use serde::{Deserialize, Serialize};

use crate::pipeline::{Pipeline, PipelineStage, STAGE_COUNT};
use crate::types::{IdenticonConfig, ImageState};

/// Stage-specific metrics that vary by pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StageMetrics {
    /// Digest computation.
    Hash {
        /// Length of the UTF-8 input in bytes.
        input_bytes: usize,
        /// Digest algorithm name.
        digest: String,
        /// Lowercase hex of the digest.
        hex: String,
    },
    /// Color selection.
    Color {
        /// Red channel.
        r: u8,
        /// Green channel.
        g: u8,
        /// Blue channel.
        b: u8,
        /// `#rrggbb` form.
        hex: String,
    },
    /// Grid construction.
    Grid {
        /// Cells in the mirrored grid (always 25).
        cell_count: usize,
        /// Digest bytes not consumed by any row.
        unused_bytes: usize,
    },
    /// Even-value filtering.
    Filter {
        /// Cells kept for painting.
        retained: usize,
        /// Cells dropped because their value is odd.
        dropped: usize,
    },
    /// Cell to rectangle mapping.
    PixelMap {
        /// Number of tiles to paint.
        rect_count: usize,
        /// Painted area in square pixels.
        painted_area: u64,
        /// Painted fraction of the canvas (0.0 to 1.0).
        coverage: f64,
    },
}

/// Metrics for one stage, tagged with the stage name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageDiagnostics {
    /// Stage name, e.g. `"hash"`.
    pub stage: String,
    /// What the stage produced.
    pub metrics: StageMetrics,
}

/// Diagnostics collected from a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDiagnostics {
    /// The input string.
    pub input: String,
    /// Metrics for every stage that did work, in pipeline order.
    pub stages: Vec<StageDiagnostics>,
}

impl PipelineDiagnostics {
    /// Run the pipeline stage by stage, collecting metrics along the way.
    ///
    /// Returns the diagnostics together with the final state so callers
    /// can render without running the pipeline twice.
    #[must_use]
    pub fn collect(input: &str, config: IdenticonConfig) -> (Self, ImageState) {
        let mut stages = Vec::with_capacity(STAGE_COUNT);

        let hashed = Pipeline::new(input, config).hash();
        record(&mut stages, &hashed);
        let colored = hashed.select_color();
        record(&mut stages, &colored);
        let built = colored.build_grid();
        record(&mut stages, &built);
        let filtered = built.filter_cells();
        record(&mut stages, &filtered);
        let mapped = filtered.map_pixels();
        record(&mut stages, &mapped);

        let diagnostics = Self {
            input: input.to_owned(),
            stages,
        };
        (diagnostics, mapped.into_state())
    }

    /// Metrics recorded for the named stage, if any.
    #[must_use]
    pub fn stage(&self, name: &str) -> Option<&StageMetrics> {
        self.stages
            .iter()
            .find(|s| s.stage == name)
            .map(|s| &s.metrics)
    }
}

fn record<S: PipelineStage>(stages: &mut Vec<StageDiagnostics>, stage: &S) {
    stages.push(StageDiagnostics {
        stage: S::NAME.to_owned(),
        metrics: stage.metrics(),
    });
}
