//! Errors raised while turning an identicon into output bytes.

use identicon_pipeline::Rect;

/// Errors that can occur while rendering or encoding.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The raster canvas could not be allocated.
    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// A tile has zero or negative extent.
    #[error("tile {0:?} is not a valid rectangle")]
    InvalidTile(Rect),

    /// The canvas could not be encoded into image bytes.
    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use identicon_pipeline::Point;

    use super::*;

    #[test]
    fn canvas_display() {
        let err = ExportError::Canvas {
            width: 0,
            height: 250,
        };
        assert_eq!(err.to_string(), "cannot allocate a 0x250 canvas");
    }

    #[test]
    fn invalid_tile_display_names_the_tile() {
        let tile = Rect::new(Point::new(50, 50), Point::new(50, 100));
        let err = ExportError::InvalidTile(tile);
        assert!(err.to_string().starts_with("tile Rect"));
    }
}
