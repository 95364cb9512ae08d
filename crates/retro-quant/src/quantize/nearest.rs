//! Deterministic nearest-palette search.

use crate::color::{DistanceMetric, Rgb};
use crate::error::QuantError;
use crate::image::Pixel;
use crate::palette::Palette;

/// Index and distance of the entry in `colors` closest to `color`.
///
/// Entries are scanned in ascending index order and the first minimum wins,
/// so ties always resolve to the lowest index.
///
/// # Errors
///
/// [`QuantError::EmptyPalette`] if `colors` is empty.
pub fn nearest_index(
    color: Rgb,
    colors: &[Rgb],
    metric: DistanceMetric,
) -> Result<(usize, f32), QuantError> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &candidate) in colors.iter().enumerate() {
        let dist = metric.distance(color, candidate);
        if best.map_or(true, |(_, best_dist)| dist < best_dist) {
            best = Some((i, dist));
        }
    }
    best.ok_or(QuantError::EmptyPalette)
}

/// Nearest entry of `palette` to `color`, as `(index, distance)`.
///
/// ```
/// use retro_quant::{quantize_to_index, Palette, Rgb};
///
/// let palette = Palette::colodore();
/// let (idx, dist) = quantize_to_index(Rgb::from_u8(0x81, 0x33, 0x38), &palette).unwrap();
/// assert_eq!(idx, 2);
/// assert_eq!(dist, 0.0);
/// ```
#[inline]
pub fn quantize_to_index(color: Rgb, palette: &Palette) -> Result<(usize, f32), QuantError> {
    nearest_index(color, palette.colors(), palette.metric())
}

/// Copy of `pixel` with its nearest palette index and quantization error filled in.
pub fn quantize_pixel(pixel: Pixel, palette: &Palette) -> Result<Pixel, QuantError> {
    let (index, error) = quantize_to_index(pixel.color(), palette)?;
    let mut pixel = pixel;
    pixel.set_quantized(index, error)?;
    Ok(pixel)
}
