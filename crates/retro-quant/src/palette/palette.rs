//! Ordered hardware palette with nearest-color matching.

use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{DistanceMetric, Rgb};
use crate::error::QuantError;
use crate::quantize::quantize_to_index;

/// The Colodore rendition of the C64 VIC-II palette, in hardware index order.
pub const COLODORE: [[u8; 3]; 16] = [
    [0x00, 0x00, 0x00], // black
    [0xff, 0xff, 0xff], // white
    [0x81, 0x33, 0x38], // red
    [0x75, 0xce, 0xc8], // cyan
    [0x8e, 0x3c, 0x97], // purple
    [0x56, 0xac, 0x4d], // green
    [0x2e, 0x2c, 0x9b], // blue
    [0xed, 0xf0, 0x71], // yellow
    [0x8e, 0x50, 0x29], // orange
    [0x55, 0x38, 0x00], // brown
    [0xc4, 0x6c, 0x71], // light red
    [0x4a, 0x4a, 0x4a], // dark grey
    [0x7b, 0x7b, 0x7b], // grey
    [0xa9, 0xff, 0x9f], // light green
    [0x70, 0x6e, 0xeb], // light blue
    [0xb2, 0xb2, 0xb2], // light grey
];

/// A fixed, ordered set of reference colors.
///
/// Index `i` is the hardware identity of `colors[i]`. Indices are contiguous
/// (`0..len()`) and stable for the lifetime of the palette. A palette is never
/// empty.
///
/// # Example
///
/// ```
/// use retro_quant::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::from_u8(0, 0, 0), Rgb::from_u8(255, 255, 255)]).unwrap();
/// let (idx, _distance) = palette.find_nearest(Rgb::from_u8(200, 200, 200)).unwrap();
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
    metric: DistanceMetric,
}

impl Palette {
    /// Create a palette from colors in hardware index order.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::EmptyPalette`] if `colors` is empty
    /// - [`PaletteError::DuplicateColor`] if two entries have identical bytes
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(color.to_bytes()) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            metric: DistanceMetric::default(),
        })
    }

    /// Create a palette from hex strings such as `"#813338"`.
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| Rgb::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// The 16-color Colodore C64 palette.
    pub fn colodore() -> Self {
        Self {
            colors: COLODORE.iter().map(|&c| Rgb::from_bytes(c)).collect(),
            metric: DistanceMetric::default(),
        }
    }

    /// Replace the distance metric used by [`find_nearest`](Self::find_nearest).
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    #[inline]
    pub fn metric(&self) -> DistanceMetric {
        self.metric
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at hardware index `idx`, or `None` when out of range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// All colors in ascending index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Nearest palette entry to `color`, as `(index, distance)`.
    ///
    /// Ties resolve to the lowest index.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> Result<(usize, f32), QuantError> {
        quantize_to_index(color, self)
    }
}
