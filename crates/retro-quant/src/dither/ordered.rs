//! Ordered (threshold matrix) dithering over an [`IndexedImage`].

use super::matrix::ThresholdMatrix;
use crate::image::IndexedImage;

/// Default dither strength.
pub const DEFAULT_DEPTH: f32 = 0.1;

/// Ordered ditherer: a threshold matrix plus a strength ("depth").
///
/// Each pixel color is shifted on all three channels by
/// `depth * (v / (w * h) - 0.5)`, where `v` is the matrix entry at
/// `(x mod w, y mod h)`. Channels are floored at zero and never clamped above.
/// The operation is pure and a depth of zero is an exact no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedDither {
    matrix: ThresholdMatrix,
    depth: f32,
    offsets: Vec<f32>,
}

impl OrderedDither {
    pub fn new(matrix: ThresholdMatrix, depth: f32) -> Self {
        let offsets = matrix.normalized(depth);
        Self {
            matrix,
            depth,
            offsets,
        }
    }

    #[inline]
    pub fn matrix(&self) -> &ThresholdMatrix {
        &self.matrix
    }

    #[inline]
    pub fn depth(&self) -> f32 {
        self.depth
    }

    /// Offset added to every channel of the pixel at `(x, y)`.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> f32 {
        let mx = x % self.matrix.width();
        let my = y % self.matrix.height();
        self.offsets[my * self.matrix.width() + mx]
    }

    /// Return a dithered copy of `image`. Only colors change.
    pub fn apply(&self, image: &IndexedImage) -> IndexedImage {
        if self.depth == 0.0 {
            return image.clone();
        }
        image.map_pixels(|p| {
            let offset = self.offset(p.x(), p.y());
            p.with_color(p.color().offset_floor_zero(offset))
        })
    }
}
