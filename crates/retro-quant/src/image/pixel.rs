//! Per-position color plus derived quantization state.

use std::fmt;

use crate::color::Rgb;
use crate::error::QuantError;

/// Small integer written to a hardware color register, selecting which of a
/// cell's reduced colors a pixel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BitPattern(pub u8);

impl fmt::Display for BitPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04b}", self.0)
    }
}

impl From<u8> for BitPattern {
    fn from(value: u8) -> Self {
        BitPattern(value)
    }
}

/// Quantization progress of a single pixel.
///
/// Transitions only move forward:
/// `Unassigned -> PartiallyQuantized -> BitPatternAssigned`
/// (a layer may also go straight from `Unassigned` to `BitPatternAssigned`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelState {
    /// Only a color is known.
    Unassigned,
    /// A palette index and error are known, but no layer has claimed the pixel.
    PartiallyQuantized,
    /// Final: index, error and bit pattern are set and will not change.
    BitPatternAssigned,
}

/// A pixel at a fixed position.
///
/// Position and color are set at ingestion. Palette index, quantization error
/// and bit pattern are filled in by layer passes; once a bit pattern is set
/// the pixel is frozen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pixel {
    x: usize,
    y: usize,
    color: Rgb,
    palette_index: Option<usize>,
    error: f32,
    bit_pattern: Option<BitPattern>,
}

impl Pixel {
    pub fn new(x: usize, y: usize, color: Rgb) -> Self {
        Self {
            x,
            y,
            color,
            palette_index: None,
            error: 0.0,
            bit_pattern: None,
        }
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    #[inline]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[inline]
    pub fn palette_index(&self) -> Option<usize> {
        self.palette_index
    }

    /// Distance between the pixel color and its chosen palette color.
    #[inline]
    pub fn quantization_error(&self) -> f32 {
        self.error
    }

    #[inline]
    pub fn bit_pattern(&self) -> Option<BitPattern> {
        self.bit_pattern
    }

    #[inline]
    pub fn has_bit_pattern(&self) -> bool {
        self.bit_pattern.is_some()
    }

    pub fn state(&self) -> PixelState {
        match (self.palette_index, self.bit_pattern) {
            (_, Some(_)) => PixelState::BitPatternAssigned,
            (Some(_), None) => PixelState::PartiallyQuantized,
            (None, None) => PixelState::Unassigned,
        }
    }

    /// Same pixel with a replaced color. Used by dithering, before any layer runs.
    #[inline]
    pub fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }

    /// Record an intermediate nearest-color result without claiming the pixel.
    pub fn set_quantized(&mut self, palette_index: usize, error: f32) -> Result<(), QuantError> {
        self.ensure_unstamped()?;
        self.palette_index = Some(palette_index);
        self.error = error;
        Ok(())
    }

    /// Claim the pixel with its final index, error and bit pattern.
    pub fn stamp(
        &mut self,
        palette_index: usize,
        error: f32,
        pattern: BitPattern,
    ) -> Result<(), QuantError> {
        self.ensure_unstamped()?;
        self.palette_index = Some(palette_index);
        self.error = error;
        self.bit_pattern = Some(pattern);
        Ok(())
    }

    fn ensure_unstamped(&self) -> Result<(), QuantError> {
        if self.bit_pattern.is_some() {
            return Err(QuantError::PatternAlreadyAssigned {
                x: self.x,
                y: self.y,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pixel_is_unassigned() {
        let p = Pixel::new(3, 4, Rgb::new(0.5, 0.5, 0.5));
        assert_eq!(p.state(), PixelState::Unassigned);
        assert_eq!(p.palette_index(), None);
        assert_eq!(p.bit_pattern(), None);
        assert_eq!((p.x(), p.y()), (3, 4));
    }

    #[test]
    fn test_state_progression() {
        let mut p = Pixel::new(0, 0, Rgb::new(0.5, 0.5, 0.5));
        p.set_quantized(12, 0.1).unwrap();
        assert_eq!(p.state(), PixelState::PartiallyQuantized);

        // A later layer may refine the intermediate result
        p.set_quantized(11, 0.05).unwrap();
        assert_eq!(p.palette_index(), Some(11));

        p.stamp(11, 0.05, BitPattern(0b10)).unwrap();
        assert_eq!(p.state(), PixelState::BitPatternAssigned);
        assert_eq!(p.bit_pattern(), Some(BitPattern(0b10)));
    }

    #[test]
    fn test_stamped_pixel_is_frozen() {
        let mut p = Pixel::new(7, 2, Rgb::new(1.0, 1.0, 1.0));
        p.stamp(1, 0.0, BitPattern(1)).unwrap();

        assert_eq!(
            p.stamp(0, 0.0, BitPattern(0)),
            Err(QuantError::PatternAlreadyAssigned { x: 7, y: 2 })
        );
        assert_eq!(
            p.set_quantized(0, 0.0),
            Err(QuantError::PatternAlreadyAssigned { x: 7, y: 2 })
        );
        assert_eq!(p.palette_index(), Some(1));
        assert_eq!(p.bit_pattern(), Some(BitPattern(1)));
    }

    #[test]
    fn test_with_color_keeps_position() {
        let p = Pixel::new(5, 6, Rgb::new(0.1, 0.2, 0.3)).with_color(Rgb::new(0.4, 0.5, 0.6));
        assert_eq!((p.x(), p.y()), (5, 6));
        assert_eq!(p.color(), Rgb::new(0.4, 0.5, 0.6));
    }

    #[test]
    fn test_bit_pattern_display() {
        assert_eq!(BitPattern(0b11).to_string(), "0b11");
        assert_eq!(BitPattern(0).to_string(), "0b00");
    }
}
