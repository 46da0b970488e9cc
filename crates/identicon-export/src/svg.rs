//! SVG export serializer.
//!
//! Emits one `<rect>` per tile using the [`svg`] crate for document
//! construction and XML escaping. `shape-rendering="crispEdges"` keeps
//! viewers from anti-aliasing tile borders, matching the PNG output.
//!
//! This is a pure function with no I/O -- it returns a `String`.

use identicon_pipeline::{Dimensions, Identicon, Rect, Rgb};
use ::svg::Document;
use ::svg::node::Node;
use ::svg::node::element::{Rectangle, Title};

use crate::canvas::{Canvas, check_tile, paint};
use crate::error::ExportError;

/// Metadata to embed in the SVG document.
#[derive(Debug, Clone, Default)]
pub struct SvgMetadata<'a> {
    /// Document title, emitted as `<title>`.
    ///
    /// Typically the input string the identicon was derived from.
    pub title: Option<&'a str>,
}

/// `#rrggbb` form of a color.
#[must_use]
pub fn hex_color(color: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// An SVG document behind the [`Canvas`] interface.
pub struct SvgCanvas {
    document: Document,
}

impl SvgCanvas {
    /// Start an empty document of the given size.
    #[must_use]
    pub fn new(dimensions: Dimensions, metadata: &SvgMetadata<'_>) -> Self {
        let Dimensions { width, height } = dimensions;
        let mut document = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height))
            .set("shape-rendering", "crispEdges");
        if let Some(title) = metadata.title {
            document = document.add(Title::new(title));
        }
        Self { document }
    }

    /// Serialize the document.
    #[must_use]
    pub fn finish(self) -> String {
        // The svg crate omits the XML declaration, so we prepend it.
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}\n",
            self.document
        )
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, tile: Rect, color: Rgb) -> Result<(), ExportError> {
        let tile = check_tile(tile)?;
        self.document.append(
            Rectangle::new()
                .set("x", tile.top_left.x)
                .set("y", tile.top_left.y)
                .set("width", tile.width())
                .set("height", tile.height())
                .set("fill", hex_color(color)),
        );
        Ok(())
    }
}

/// Serialize an identicon into an SVG string.
///
/// # Errors
///
/// Returns [`ExportError::InvalidTile`] for degenerate tiles.
pub fn to_svg(identicon: &Identicon, metadata: &SvgMetadata<'_>) -> Result<String, ExportError> {
    let mut canvas = SvgCanvas::new(identicon.dimensions, metadata);
    paint(&mut canvas, identicon)?;
    Ok(canvas.finish())
}
