use image::imageops::FilterType;
use image::DynamicImage;
use retro_quant::{IndexedImage, RenderedImage};
use std::io::Cursor;
use std::path::Path;

use crate::error::ConvertError;

/// Read and decode a raster file (PNG, JPEG or GIF).
pub fn decode_file(path: &Path) -> Result<DynamicImage, ConvertError> {
    let bytes = std::fs::read(path)?;
    image::load_from_memory(&bytes).map_err(|e| ConvertError::Decode {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Resize to exactly `width` x `height`, ignoring aspect ratio, and convert
/// to the quantizer's pixel model. Alpha is dropped.
pub fn to_indexed(
    img: &DynamicImage,
    width: usize,
    height: usize,
) -> Result<IndexedImage, ConvertError> {
    let resized = if img.width() as usize == width && img.height() as usize == height {
        img.to_rgb8()
    } else {
        img.resize_exact(width as u32, height as u32, FilterType::Triangle)
            .to_rgb8()
    };
    tracing::debug!(
        from_width = img.width(),
        from_height = img.height(),
        width,
        height,
        "Resized input"
    );
    Ok(IndexedImage::from_rgb_bytes(width, height, resized.as_raw())?)
}

/// Encode a rendered raster as an 8-bit RGB PNG.
pub fn encode_png(rendered: &RenderedImage) -> Result<Vec<u8>, ConvertError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder =
            png::Encoder::new(&mut buf, rendered.width() as u32, rendered.height() as u32);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
        writer
            .write_image_data(rendered.rgb())
            .map_err(|e| ConvertError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
