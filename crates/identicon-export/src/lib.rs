//! identicon-export: Pure renderers and serializers (sans-IO)
//!
//! Turns an [`Identicon`](identicon_pipeline::Identicon) into output
//! bytes. Currently supports PNG (rasterized with `tiny-skia`, encoded
//! with `image`) and SVG.

pub mod canvas;
pub mod error;
pub mod format;
pub mod png;
pub mod raster;
pub mod svg;

pub use canvas::{Canvas, check_tile, paint};
pub use error::ExportError;
pub use format::OutputFormat;
pub use self::png::{encode_png, to_png};
pub use raster::{RasterCanvas, rasterize};
pub use self::svg::{SvgCanvas, SvgMetadata, to_svg};
