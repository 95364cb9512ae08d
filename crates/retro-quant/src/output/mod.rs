//! Output types for the quantization pipeline.
//!
//! [`QuantizedImage`] is the canonical result: one palette index and one bit
//! pattern per logical pixel, plus the palette and pixel stretch needed to
//! show it. [`QuantizedImage::render`] expands it to a display raster.

mod quantized_image;
mod render;

pub use quantized_image::QuantizedImage;
pub use render::RenderedImage;
