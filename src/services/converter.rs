use retro_quant::{
    DistanceMetric, DitherMode, LayerReport, ModeRegistry, ModeSpec, Pipeline, QuantizedImage,
    DEFAULT_DEPTH, DEFAULT_MODE,
};
use std::path::Path;

use crate::error::ConvertError;
use crate::rendering::{decode_file, encode_png, to_indexed};

/// Settings for one conversion
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Registry name of the target mode
    pub mode: String,
    pub dither: DitherMode,
    /// Dither strength
    pub depth: f32,
    pub metric: DistanceMetric,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE.to_string(),
            dither: DitherMode::default(),
            depth: DEFAULT_DEPTH,
            metric: DistanceMetric::default(),
        }
    }
}

/// Result of a successful conversion, held in memory until written
pub struct Conversion {
    /// Encoded PNG
    pub png_bytes: Vec<u8>,
    pub width: usize,
    pub height: usize,
    /// Distinct palette colors in the result
    pub colors: usize,
    pub layers: Vec<LayerReport>,
}

/// Runs input raster -> mode -> PNG against a fixed mode registry
pub struct Converter<'a> {
    registry: &'a ModeRegistry,
}

impl<'a> Converter<'a> {
    pub fn new(registry: &'a ModeRegistry) -> Self {
        Self { registry }
    }

    /// Look up a mode by name
    pub fn mode(&self, name: &str) -> Result<&'a ModeSpec, ConvertError> {
        self.registry
            .get(name)
            .ok_or_else(|| ConvertError::UnknownMode {
                name: name.to_string(),
                available: self.registry.names().collect::<Vec<_>>().join(", "),
            })
    }

    /// Decode `input` and quantize it; nothing is written.
    pub fn quantize(
        &self,
        input: &Path,
        options: &ConvertOptions,
    ) -> Result<QuantizedImage, ConvertError> {
        let mode = self.mode(&options.mode)?;
        let img = decode_file(input)?;
        tracing::info!(
            input = %input.display(),
            width = img.width(),
            height = img.height(),
            mode = %options.mode,
            "Decoded input"
        );

        let indexed = to_indexed(&img, mode.width(), mode.height())?;
        let mode = if options.metric == mode.palette().metric() {
            mode.clone()
        } else {
            let palette = mode.palette().clone().with_distance_metric(options.metric);
            mode.clone().with_palette(palette)
        };

        let pipeline = Pipeline::new(&mode).dither(options.dither.ditherer(options.depth));
        Ok(pipeline.run(indexed)?)
    }

    /// Full conversion to PNG bytes.
    pub fn convert(&self, input: &Path, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
        let quantized = self.quantize(input, options)?;
        let rendered = quantized.render();
        let png_bytes = encode_png(&rendered)?;

        for (i, report) in quantized.reports().iter().enumerate() {
            tracing::debug!(
                layer = i,
                cells = report.cells,
                stamped = report.stamped,
                remaining = report.remaining,
                "Layer report"
            );
        }

        Ok(Conversion {
            png_bytes,
            width: rendered.width(),
            height: rendered.height(),
            colors: quantized.color_count(),
            layers: quantized.reports().to_vec(),
        })
    }

    /// Convert `input` and write the PNG to `output`. The output file is only
    /// touched after every earlier step has succeeded.
    pub fn convert_to_file(
        &self,
        input: &Path,
        output: &Path,
        options: &ConvertOptions,
    ) -> Result<Conversion, ConvertError> {
        let conversion = self.convert(input, options)?;
        std::fs::write(output, &conversion.png_bytes)?;
        tracing::info!(
            output = %output.display(),
            width = conversion.width,
            height = conversion.height,
            colors = conversion.colors,
            bytes = conversion.png_bytes.len(),
            "Wrote output"
        );
        Ok(conversion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert_eq!(options.mode, "koala");
        assert_eq!(options.dither, DitherMode::Bayer4);
        assert_eq!(options.depth, 0.1);
        assert_eq!(options.metric, DistanceMetric::Rgb);
    }

    #[test]
    fn test_unknown_mode() {
        let registry = ModeRegistry::builtin();
        let converter = Converter::new(&registry);
        match converter.mode("vic20") {
            Err(ConvertError::UnknownMode { name, available }) => {
                assert_eq!(name, "vic20");
                assert!(available.contains("koala"));
            }
            other => panic!("Expected UnknownMode, got {:?}", other.map(|m| m.width())),
        }
    }
}
