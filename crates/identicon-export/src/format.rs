//! Output format selection.

use std::fmt;

use identicon_pipeline::Identicon;

use crate::error::ExportError;
use crate::png::to_png;
use crate::svg::{SvgMetadata, to_svg};

/// A lossless output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Portable Network Graphics raster.
    #[default]
    Png,
    /// Scalable Vector Graphics document.
    Svg,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }

    /// Render an identicon into this format's bytes.
    ///
    /// `title` is embedded where the format supports it.
    ///
    /// # Errors
    ///
    /// Returns any rendering or encoding error.
    pub fn encode(self, identicon: &Identicon, title: &str) -> Result<Vec<u8>, ExportError> {
        match self {
            Self::Png => to_png(identicon),
            Self::Svg => {
                let metadata = SvgMetadata { title: Some(title) };
                to_svg(identicon, &metadata).map(String::into_bytes)
            }
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use identicon_pipeline::{IdenticonConfig, process};

    use super::*;

    #[test]
    fn default_is_png() {
        assert_eq!(OutputFormat::default(), OutputFormat::Png);
        assert_eq!(OutputFormat::Png.extension(), "png");
        assert_eq!(OutputFormat::Svg.to_string(), "svg");
    }

    #[test]
    fn encode_dispatches_by_format() {
        let identicon = process("username", &IdenticonConfig::default());
        let png = OutputFormat::Png.encode(&identicon, "username").unwrap();
        let svg = OutputFormat::Svg.encode(&identicon, "username").unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert!(String::from_utf8(svg).unwrap().contains("<title>username</title>"));
    }
}
