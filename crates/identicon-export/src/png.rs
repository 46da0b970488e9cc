//! PNG encoding.

use identicon_pipeline::Identicon;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};
use image::codecs::png::PngEncoder;

use crate::error::ExportError;
use crate::raster::rasterize;

/// Encode an RGBA image as PNG bytes.
///
/// # Errors
///
/// Returns [`ExportError::Encode`] if the encoder rejects the image.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    let encoder = PngEncoder::new(&mut buf);
    encoder.write_image(
        img.as_raw(),
        img.width(),
        img.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

/// Render an identicon and encode it as PNG.
///
/// # Errors
///
/// Returns any rendering or encoding error.
pub fn to_png(identicon: &Identicon) -> Result<Vec<u8>, ExportError> {
    let img = rasterize(identicon)?;
    let bytes = encode_png(&img)?;
    log::debug!("encoded {} tiles into {} PNG bytes", identicon.pixel_map.len(), bytes.len());
    Ok(bytes)
}
