//! Ordered dithering.
//!
//! Ordered dithering perturbs every pixel color by a deterministic,
//! position-dependent offset read from a tiled threshold matrix. It runs once,
//! before any layer, and only touches colors.
//!
//! # Example
//!
//! ```
//! use retro_quant::{IndexedImage, OrderedDither, Rgb, ThresholdMatrix};
//!
//! let image = IndexedImage::from_colors(2, 2, &[Rgb::new(0.5, 0.5, 0.5); 4]).unwrap();
//! let dither = OrderedDither::new(ThresholdMatrix::bayer2(), 0.1);
//! let dithered = dither.apply(&image);
//!
//! assert!((dithered.pixel_at(0, 0).unwrap().color().r - 0.45).abs() < 1e-6);
//! ```

mod matrix;
mod ordered;

pub use matrix::ThresholdMatrix;
pub use ordered::{OrderedDither, DEFAULT_DEPTH};

/// Dither selection as exposed to configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherMode {
    /// Leave colors untouched.
    None,
    Bayer2,
    /// 4x4 Bayer matrix.
    #[default]
    Bayer4,
    Bayer8,
}

impl DitherMode {
    /// Parse a mode name (`none`, `bayer2`, `bayer4`, `bayer8`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(DitherMode::None),
            "bayer2" => Some(DitherMode::Bayer2),
            "bayer4" => Some(DitherMode::Bayer4),
            "bayer8" => Some(DitherMode::Bayer8),
            _ => None,
        }
    }

    /// Threshold matrix for this mode, `None` for [`DitherMode::None`].
    pub fn matrix(self) -> Option<ThresholdMatrix> {
        match self {
            DitherMode::None => None,
            DitherMode::Bayer2 => Some(ThresholdMatrix::bayer2()),
            DitherMode::Bayer4 => Some(ThresholdMatrix::bayer4()),
            DitherMode::Bayer8 => Some(ThresholdMatrix::bayer8()),
        }
    }

    /// Build the ditherer for this mode at the given depth.
    pub fn ditherer(self, depth: f32) -> Option<OrderedDither> {
        self.matrix().map(|m| OrderedDither::new(m, depth))
    }
}
