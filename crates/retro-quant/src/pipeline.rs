//! Pipeline orchestrator: dither once, then run a mode's layers in order.

use tracing::debug;

use crate::dither::OrderedDither;
use crate::error::QuantError;
use crate::image::{decompose, recombine, IndexedImage};
use crate::mode::ModeSpec;
use crate::output::QuantizedImage;
use crate::palette::Palette;
use crate::quantize::{quantize_cell, Layer};

/// What one layer did to the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerReport {
    /// Cells the layer was split into.
    pub cells: usize,
    /// Pixels this layer claimed.
    pub stamped: usize,
    /// Pixels still without a bit pattern afterwards.
    pub remaining: usize,
}

/// Quantization builder for one [`ModeSpec`].
///
/// Dithering is optional and applied once, before the first layer. `run`
/// takes `&self`, so a pipeline can be reused across images.
///
/// # Example
///
/// ```
/// use retro_quant::{DitherMode, IndexedImage, ModeRegistry, Pipeline, Rgb, DEFAULT_DEPTH};
///
/// let registry = ModeRegistry::builtin();
/// let mode = registry.get("koala").unwrap();
///
/// let image = IndexedImage::from_colors(160, 200, &vec![Rgb::new(0.3, 0.5, 0.7); 160 * 200]).unwrap();
/// let pipeline = Pipeline::new(mode).dither(DitherMode::Bayer4.ditherer(DEFAULT_DEPTH));
/// let result = pipeline.run(image).unwrap();
///
/// assert!(result.image().is_fully_assigned());
/// assert_eq!(result.reports().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<'a> {
    mode: &'a ModeSpec,
    dither: Option<OrderedDither>,
}

impl<'a> Pipeline<'a> {
    pub fn new(mode: &'a ModeSpec) -> Self {
        Self { mode, dither: None }
    }

    /// Set (or clear, with `None`) the ditherer.
    pub fn dither(mut self, dither: impl Into<Option<OrderedDither>>) -> Self {
        self.dither = dither.into();
        self
    }

    #[inline]
    pub fn mode(&self) -> &ModeSpec {
        self.mode
    }

    /// Quantize `image` into the mode.
    ///
    /// # Errors
    ///
    /// - [`QuantError::GeometryMismatch`] if `image` is not exactly the
    ///   mode's logical resolution
    /// - any error raised by a layer; no partial result is returned
    pub fn run(&self, image: IndexedImage) -> Result<QuantizedImage, QuantError> {
        let geometry = self.mode.geometry();
        if image.geometry() != geometry {
            return Err(QuantError::GeometryMismatch {
                expected: geometry.area(),
                actual: image.len(),
            });
        }

        let mut current = match &self.dither {
            Some(dither) => {
                debug!(
                    width = dither.matrix().width(),
                    height = dither.matrix().height(),
                    depth = dither.depth(),
                    "Applying ordered dither"
                );
                dither.apply(&image)
            }
            None => image,
        };

        let palette = self.mode.palette();
        let mut reports = Vec::with_capacity(self.mode.layers().len());
        for (i, layer) in self.mode.layers().iter().enumerate() {
            let (next, report) = run_layer(current, palette, layer)?;
            debug!(
                layer = i,
                cell_width = layer.cell_width(),
                cell_height = layer.cell_height(),
                cells = report.cells,
                stamped = report.stamped,
                remaining = report.remaining,
                terminal = layer.is_terminal(),
                "Layer done"
            );
            reports.push(report);
            current = next;
        }

        QuantizedImage::new(current, palette.clone(), self.mode.pixel_width(), reports)
    }
}

/// Run one layer: decompose into cells, quantize each, recombine.
pub fn run_layer(
    image: IndexedImage,
    palette: &Palette,
    layer: &Layer,
) -> Result<(IndexedImage, LayerReport), QuantError> {
    let geometry = image.geometry();
    let cells = decompose(&image, layer.cell_width(), layer.cell_height())?;
    drop(image);

    let cell_count = cells.len();
    let mut stamped = 0;
    let mut quantized = Vec::with_capacity(cell_count);
    for cell in cells {
        let outcome = quantize_cell(cell, palette, layer)?;
        stamped += outcome.stamped;
        quantized.push(outcome.cell);
    }

    let image = recombine(geometry, quantized)?;
    let report = LayerReport {
        cells: cell_count,
        stamped,
        remaining: image.len() - image.assigned_count(),
    };
    Ok((image, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::dither::{DitherMode, DEFAULT_DEPTH};
    use crate::mode::ModeRegistry;
    use pretty_assertions::assert_eq;

    fn gradient(width: usize, height: usize) -> IndexedImage {
        let colors: Vec<Rgb> = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                Rgb::new(
                    x as f32 / width as f32,
                    y as f32 / height as f32,
                    ((x + y) % 7) as f32 / 7.0,
                )
            })
            .collect();
        IndexedImage::from_colors(width, height, &colors).unwrap()
    }

    #[test]
    fn test_rejects_wrong_geometry() {
        let registry = ModeRegistry::builtin();
        let mode = registry.get("hires").unwrap();
        let result = Pipeline::new(mode).run(gradient(10, 10));
        assert_eq!(
            result.unwrap_err(),
            QuantError::GeometryMismatch {
                expected: 64_000,
                actual: 100
            }
        );
    }

    #[test]
    fn test_every_builtin_resolves_all_pixels() {
        let registry = ModeRegistry::builtin();
        for (name, mode) in registry.iter() {
            let image = gradient(mode.width(), mode.height());
            let result = Pipeline::new(mode)
                .dither(DitherMode::Bayer4.ditherer(DEFAULT_DEPTH))
                .run(image)
                .unwrap();
            assert!(result.image().is_fully_assigned(), "mode {name}");
            assert_eq!(result.reports().last().unwrap().remaining, 0, "mode {name}");
            assert_eq!(result.reports().len(), mode.layers().len(), "mode {name}");
        }
    }

    #[test]
    fn test_reports_add_up() {
        let registry = ModeRegistry::builtin();
        let mode = registry.get("mcchar").unwrap();
        let result = Pipeline::new(mode).run(gradient(160, 200)).unwrap();

        let reports = result.reports();
        assert_eq!(reports[0].cells, 1);
        assert_eq!(reports[2].cells, 40 * 25);
        let stamped: usize = reports.iter().map(|r| r.stamped).sum();
        assert_eq!(stamped, 160 * 200);
    }

    #[test]
    fn test_run_layer_keeps_geometry() {
        let palette = Palette::colodore();
        let layer = Layer::new(3, 3, [0, 1]);
        let (image, report) = run_layer(gradient(8, 5), &palette, &layer).unwrap();

        assert_eq!((image.width(), image.height()), (8, 5));
        // 3x2 grid of clamped cells
        assert_eq!(report.cells, 6);
        assert_eq!(report.stamped + report.remaining, 40);
    }

    #[test]
    fn test_dither_none_matches_plain_run() {
        let registry = ModeRegistry::builtin();
        let mode = registry.get("hires2").unwrap();
        let plain = Pipeline::new(mode).run(gradient(320, 200)).unwrap();
        let cleared = Pipeline::new(mode)
            .dither(DitherMode::None.ditherer(DEFAULT_DEPTH))
            .run(gradient(320, 200))
            .unwrap();
        assert_eq!(plain, cleared);
    }
}
