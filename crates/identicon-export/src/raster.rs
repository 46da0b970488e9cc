//! Raster rendering via `tiny-skia`.
//!
//! Tiles are filled without anti-aliasing onto a transparent canvas, so
//! every pixel is either fully transparent or exactly the fill color.

use identicon_pipeline::{Dimensions, Identicon, Rect, Rgb};
use image::{Rgba, RgbaImage};
use tiny_skia::{Paint, Pixmap, Transform};

use crate::canvas::{Canvas, check_tile, paint};
use crate::error::ExportError;

/// A `tiny-skia` pixmap behind the [`Canvas`] interface.
pub struct RasterCanvas {
    pixmap: Pixmap,
}

impl RasterCanvas {
    /// Allocate a transparent canvas.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Canvas`] if either dimension is zero.
    pub fn new(dimensions: Dimensions) -> Result<Self, ExportError> {
        let Dimensions { width, height } = dimensions;
        let pixmap = Pixmap::new(width, height).ok_or(ExportError::Canvas { width, height })?;
        Ok(Self { pixmap })
    }

    /// Convert the pixmap (premultiplied RGBA) to an `RgbaImage`
    /// (straight RGBA).
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        let pixmap = self.pixmap;
        RgbaImage::from_fn(pixmap.width(), pixmap.height(), |x, y| {
            pixmap.pixel(x, y).map_or(Rgba([0, 0, 0, 0]), |p| {
                let c = p.demultiply();
                Rgba([c.red(), c.green(), c.blue(), c.alpha()])
            })
        })
    }
}

impl Canvas for RasterCanvas {
    // Tile coordinates never exceed the 250 px canvas, so f32 is exact.
    #[allow(clippy::cast_precision_loss)]
    fn fill_rect(&mut self, tile: Rect, color: Rgb) -> Result<(), ExportError> {
        let tile = check_tile(tile)?;
        let rect = tiny_skia::Rect::from_ltrb(
            tile.top_left.x as f32,
            tile.top_left.y as f32,
            tile.bottom_right.x as f32,
            tile.bottom_right.y as f32,
        )
        .ok_or(ExportError::InvalidTile(tile))?;

        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, 255);
        paint.anti_alias = false;

        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
        Ok(())
    }
}

/// Render an identicon into an RGBA image.
///
/// # Errors
///
/// Returns [`ExportError::Canvas`] if the canvas cannot be allocated and
/// [`ExportError::InvalidTile`] for degenerate tiles.
pub fn rasterize(identicon: &Identicon) -> Result<RgbaImage, ExportError> {
    let mut canvas = RasterCanvas::new(identicon.dimensions)?;
    paint(&mut canvas, identicon)?;
    Ok(canvas.into_image())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use identicon_pipeline::{IdenticonConfig, PixelMap, Point, process};

    use super::*;

    const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

    #[test]
    fn canvas_is_250_square() {
        let img = rasterize(&process("username", &IdenticonConfig::default())).unwrap();
        assert_eq!(img.dimensions(), (250, 250));
    }

    #[test]
    fn painted_tiles_are_solid_and_gaps_transparent() {
        let img = rasterize(&process("username", &IdenticonConfig::default())).unwrap();
        let fill = Rgba([20, 196, 176, 255]);

        // Index 0 (top-left) and 16 (row 3, column 1) are painted.
        assert_eq!(*img.get_pixel(0, 0), fill);
        assert_eq!(*img.get_pixel(49, 49), fill);
        assert_eq!(*img.get_pixel(75, 175), fill);
        // Index 5 (row 1, column 0) and 24 (bottom-right) are not.
        assert_eq!(*img.get_pixel(25, 75), TRANSPARENT);
        assert_eq!(*img.get_pixel(249, 249), TRANSPARENT);
    }

    #[test]
    fn only_two_distinct_pixel_values() {
        let img = rasterize(&process("username", &IdenticonConfig::default())).unwrap();
        let fill = Rgba([20, 196, 176, 255]);
        assert!(img.pixels().all(|p| *p == fill || *p == TRANSPARENT));
        let painted = img.pixels().filter(|p| **p == fill).count();
        assert_eq!(painted, 10 * 50 * 50);
    }

    #[test]
    fn empty_pixel_map_renders_blank_canvas() {
        let identicon = Identicon {
            color: Rgb::new(1, 2, 3),
            pixel_map: PixelMap::default(),
            dimensions: Dimensions::IDENTICON,
        };
        let img = rasterize(&identicon).unwrap();
        assert!(img.pixels().all(|p| *p == TRANSPARENT));
    }

    #[test]
    fn later_fill_wins_on_overlap() {
        let mut canvas = RasterCanvas::new(Dimensions::IDENTICON).unwrap();
        let tile = Rect::new(Point::new(0, 0), Point::new(50, 50));
        canvas.fill_rect(tile, Rgb::new(255, 0, 0)).unwrap();
        canvas.fill_rect(tile, Rgb::new(0, 0, 255)).unwrap();
        let img = canvas.into_image();
        assert_eq!(*img.get_pixel(10, 10), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let result = RasterCanvas::new(Dimensions {
            width: 0,
            height: 250,
        });
        assert!(matches!(
            result,
            Err(ExportError::Canvas {
                width: 0,
                height: 250
            })
        ));
    }

    #[test]
    fn degenerate_tile_is_rejected() {
        let mut canvas = RasterCanvas::new(Dimensions::IDENTICON).unwrap();
        let tile = Rect::new(Point::new(50, 50), Point::new(50, 100));
        let result = canvas.fill_rect(tile, Rgb::new(0, 0, 0));
        assert!(matches!(result, Err(ExportError::InvalidTile(_))));
    }

    #[test]
    fn rejected_tile_leaves_canvas_untouched() {
        let mut canvas = RasterCanvas::new(Dimensions::IDENTICON).unwrap();
        let flat = Rect::new(Point::new(0, 0), Point::new(250, 0));
        assert!(canvas.fill_rect(flat, Rgb::new(9, 9, 9)).is_err());
        assert!(canvas.into_image().pixels().all(|p| *p == TRANSPARENT));
    }
}
