//! Row-major image of [`Pixel`]s.

use crate::color::Rgb;
use crate::error::QuantError;

use super::pixel::Pixel;

/// Width and height of an image, in logical (hardware) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    #[inline]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Flat offset of `(x, y)`, or `None` outside the geometry.
    #[inline]
    pub fn offset(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

/// An image whose pixels carry quantization state.
///
/// Pixels are stored left to right, top to bottom: the pixel at offset
/// `y * width + x` always has position `(x, y)`.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedImage {
    geometry: Geometry,
    pixels: Vec<Pixel>,
}

impl IndexedImage {
    /// Build an image from row-major colors.
    ///
    /// # Errors
    ///
    /// [`QuantError::GeometryMismatch`] if `colors.len() != width * height`.
    pub fn from_colors(width: usize, height: usize, colors: &[Rgb]) -> Result<Self, QuantError> {
        let geometry = Geometry::new(width, height);
        if colors.len() != geometry.area() {
            return Err(QuantError::GeometryMismatch {
                expected: geometry.area(),
                actual: colors.len(),
            });
        }

        let pixels = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| Pixel::new(i % width, i / width, c))
            .collect();

        Ok(Self { geometry, pixels })
    }

    /// Build an image from packed `[R, G, B, R, G, B, ...]` bytes.
    pub fn from_rgb_bytes(width: usize, height: usize, rgb: &[u8]) -> Result<Self, QuantError> {
        if rgb.len() != width * height * 3 {
            return Err(QuantError::GeometryMismatch {
                expected: width * height * 3,
                actual: rgb.len(),
            });
        }
        let colors: Vec<Rgb> = rgb
            .chunks_exact(3)
            .map(|c| Rgb::from_u8(c[0], c[1], c[2]))
            .collect();
        Self::from_colors(width, height, &colors)
    }

    /// Build an image from pixels that already carry positions.
    ///
    /// # Errors
    ///
    /// - [`QuantError::GeometryMismatch`] if the pixel count is wrong
    /// - [`QuantError::CellOutOfBounds`] if a pixel is not at its row-major offset
    pub fn from_pixels(geometry: Geometry, pixels: Vec<Pixel>) -> Result<Self, QuantError> {
        if pixels.len() != geometry.area() {
            return Err(QuantError::GeometryMismatch {
                expected: geometry.area(),
                actual: pixels.len(),
            });
        }
        for (i, p) in pixels.iter().enumerate() {
            if geometry.offset(p.x(), p.y()) != Some(i) {
                return Err(QuantError::CellOutOfBounds { x: p.x(), y: p.y() });
            }
        }
        Ok(Self { geometry, pixels })
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.geometry.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.geometry.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> Option<&Pixel> {
        self.geometry.offset(x, y).map(|i| &self.pixels[i])
    }

    /// Apply `f` to every pixel, keeping geometry.
    pub(crate) fn map_pixels(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        Self {
            geometry: self.geometry,
            pixels: self.pixels.iter().map(|&p| f(p)).collect(),
        }
    }

    /// Number of pixels that carry a bit pattern.
    pub fn assigned_count(&self) -> usize {
        self.pixels.iter().filter(|p| p.has_bit_pattern()).count()
    }

    pub fn is_fully_assigned(&self) -> bool {
        self.pixels.iter().all(Pixel::has_bit_pattern)
    }
}
