//! Geometry, palette and ordered layer list of a hardware graphics mode.

use std::collections::HashSet;

use crate::error::QuantError;
use crate::image::Geometry;
use crate::palette::Palette;
use crate::quantize::Layer;

/// A hardware graphics mode.
///
/// `width` x `height` is the logical resolution the pipeline works at.
/// Each logical pixel is `pixel_width` display pixels wide when rendered.
///
/// Construction validates the layer list: it must be non-empty and end with
/// the one and only terminal layer, so a run always resolves every pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeSpec {
    width: usize,
    height: usize,
    pixel_width: usize,
    palette: Palette,
    layers: Vec<Layer>,
}

impl ModeSpec {
    /// # Errors
    ///
    /// [`QuantError::InvalidModeSpec`] when the geometry or pixel width is
    /// zero, when the terminal layer is missing, duplicated or not last, or
    /// when a layer has an empty cell or repeated bit patterns.
    ///
    /// # Example
    ///
    /// ```
    /// use retro_quant::{Layer, ModeSpec, Palette};
    ///
    /// let mode = ModeSpec::new(
    ///     160,
    ///     200,
    ///     2,
    ///     Palette::colodore(),
    ///     vec![
    ///         Layer::new(160, 200, [0b00]),
    ///         Layer::new(4, 8, [0b01, 0b10, 0b11]).terminal(),
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(mode.display_width(), 320);
    ///
    /// // No terminal layer
    /// assert!(ModeSpec::new(8, 8, 1, Palette::colodore(), vec![Layer::new(8, 8, [0])]).is_err());
    /// ```
    pub fn new(
        width: usize,
        height: usize,
        pixel_width: usize,
        palette: Palette,
        layers: Vec<Layer>,
    ) -> Result<Self, QuantError> {
        let mode = Self {
            width,
            height,
            pixel_width,
            palette,
            layers,
        };
        mode.validate()?;
        Ok(mode)
    }

    /// Build a mode known to be valid. Only used for the built-in table,
    /// which is checked by its own tests.
    pub(super) fn new_unchecked(
        width: usize,
        height: usize,
        pixel_width: usize,
        palette: Palette,
        layers: Vec<Layer>,
    ) -> Self {
        let mode = Self {
            width,
            height,
            pixel_width,
            palette,
            layers,
        };
        debug_assert!(mode.validate().is_ok(), "invalid built-in mode");
        mode
    }

    fn validate(&self) -> Result<(), QuantError> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "geometry {}x{} must be non-empty",
                self.width, self.height
            )));
        }
        if self.pixel_width == 0 {
            return Err(invalid("pixel width must be at least 1".into()));
        }
        if self.layers.is_empty() {
            return Err(invalid("at least one layer is required".into()));
        }

        let terminals = self.layers.iter().filter(|l| l.is_terminal()).count();
        if terminals != 1 {
            return Err(invalid(format!(
                "exactly one terminal layer is required, found {terminals}"
            )));
        }
        if !self.layers.last().is_some_and(|l| l.is_terminal()) {
            return Err(invalid("the terminal layer must be last".into()));
        }

        for (i, layer) in self.layers.iter().enumerate() {
            if layer.cell_width() == 0 || layer.cell_height() == 0 {
                return Err(invalid(format!(
                    "layer {i}: cell size {}x{} must be non-empty",
                    layer.cell_width(),
                    layer.cell_height()
                )));
            }
            if layer.bit_patterns().is_empty() {
                return Err(invalid(format!("layer {i}: no bit patterns")));
            }
            let mut seen = HashSet::new();
            if let Some(dup) = layer.bit_patterns().iter().find(|p| !seen.insert(**p)) {
                return Err(invalid(format!("layer {i}: bit pattern {dup} repeated")));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.width, self.height)
    }

    /// Horizontal stretch of one logical pixel on the display.
    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.pixel_width
    }

    /// Rendered width in display pixels.
    #[inline]
    pub fn display_width(&self) -> usize {
        self.width * self.pixel_width
    }

    #[inline]
    pub fn display_height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Layers in execution order. The last one is terminal.
    #[inline]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Same mode with a different palette, e.g. one using another distance metric.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}

fn invalid(reason: String) -> QuantError {
    QuantError::InvalidModeSpec(reason)
}
