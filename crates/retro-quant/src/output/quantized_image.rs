use crate::error::QuantError;
use crate::image::{BitPattern, IndexedImage};
use crate::palette::Palette;
use crate::pipeline::LayerReport;

use super::render::RenderedImage;

/// A fully resolved image: every logical pixel has a palette index and a
/// bit pattern.
///
/// # Example
///
/// ```
/// use retro_quant::{IndexedImage, Layer, ModeSpec, Palette, Pipeline, Rgb};
///
/// let mode = ModeSpec::new(
///     2,
///     1,
///     2,
///     Palette::colodore(),
///     vec![Layer::new(2, 1, [0, 1]).terminal()],
/// )
/// .unwrap();
/// let image = IndexedImage::from_colors(2, 1, &[Rgb::new(0.0, 0.0, 0.0), Rgb::new(1.0, 1.0, 1.0)]).unwrap();
/// let result = Pipeline::new(&mode).run(image).unwrap();
///
/// assert_eq!(result.indices(), vec![0, 1]);
/// let rendered = result.render();
/// assert_eq!(rendered.width(), 4);
/// assert_eq!(rendered.rgb(), &[0, 0, 0, 0, 0, 0, 255, 255, 255, 255, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizedImage {
    image: IndexedImage,
    palette: Palette,
    pixel_width: usize,
    reports: Vec<LayerReport>,
}

impl QuantizedImage {
    /// Wrap a pipeline result.
    ///
    /// # Errors
    ///
    /// [`QuantError::IncompleteCoverage`] if any pixel still lacks a bit
    /// pattern.
    pub fn new(
        image: IndexedImage,
        palette: Palette,
        pixel_width: usize,
        reports: Vec<LayerReport>,
    ) -> Result<Self, QuantError> {
        let missing = image.len() - image.assigned_count();
        if missing > 0 {
            return Err(QuantError::IncompleteCoverage { missing });
        }
        Ok(Self {
            image,
            palette,
            pixel_width,
            reports,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.height()
    }

    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The underlying pixels with their final state.
    #[inline]
    pub fn image(&self) -> &IndexedImage {
        &self.image
    }

    /// Per-layer statistics, in execution order.
    #[inline]
    pub fn reports(&self) -> &[LayerReport] {
        &self.reports
    }

    /// Palette index per logical pixel, row-major.
    pub fn indices(&self) -> Vec<usize> {
        self.image
            .pixels()
            .iter()
            .map(|p| p.palette_index().unwrap_or_default())
            .collect()
    }

    /// Bit pattern per logical pixel, row-major.
    pub fn bit_patterns(&self) -> Vec<BitPattern> {
        self.image
            .pixels()
            .iter()
            .map(|p| p.bit_pattern().unwrap_or(BitPattern(0)))
            .collect()
    }

    /// Number of distinct palette indices used.
    pub fn color_count(&self) -> usize {
        let mut seen = vec![false; self.palette.len()];
        for idx in self.indices() {
            if let Some(slot) = seen.get_mut(idx) {
                *slot = true;
            }
        }
        seen.into_iter().filter(|&s| s).count()
    }

    /// Sum of per-pixel quantization errors.
    pub fn total_error(&self) -> f32 {
        self.image
            .pixels()
            .iter()
            .map(|p| p.quantization_error())
            .sum()
    }

    /// Paint each logical pixel with its palette color, `pixel_width` display
    /// pixels wide.
    pub fn render(&self) -> RenderedImage {
        let width = self.width() * self.pixel_width;
        let mut rgb = Vec::with_capacity(width * self.height() * 3);
        for pixel in self.image.pixels() {
            let bytes = pixel
                .palette_index()
                .and_then(|idx| self.palette.get(idx))
                .map(|c| c.to_bytes())
                .unwrap_or_default();
            for _ in 0..self.pixel_width {
                rgb.extend_from_slice(&bytes);
            }
        }
        RenderedImage::new(width, self.height(), rgb)
    }
}
