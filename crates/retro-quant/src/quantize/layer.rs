//! One reduction pass of a graphics mode.

use crate::image::BitPattern;

/// A reduction pass: cell size, admissible bit patterns, and whether it is the
/// terminal pass that must resolve every remaining pixel.
///
/// The number of bit patterns bounds how many colors a single cell of this
/// layer may introduce.
///
/// ```
/// use retro_quant::{BitPattern, Layer};
///
/// let layer = Layer::new(4, 8, [0b01, 0b10, 0b11]).terminal();
/// assert_eq!(layer.max_colors(), 3);
/// assert!(layer.is_terminal());
/// assert_eq!(layer.bit_patterns()[0], BitPattern(0b01));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    cell_width: usize,
    cell_height: usize,
    bit_patterns: Vec<BitPattern>,
    terminal: bool,
}

impl Layer {
    pub fn new(
        cell_width: usize,
        cell_height: usize,
        bit_patterns: impl IntoIterator<Item = u8>,
    ) -> Self {
        Self {
            cell_width,
            cell_height,
            bit_patterns: bit_patterns.into_iter().map(BitPattern).collect(),
            terminal: false,
        }
    }

    /// Mark this layer as the terminal pass.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    #[inline]
    pub fn cell_width(&self) -> usize {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> usize {
        self.cell_height
    }

    /// Admissible bit patterns, in assignment order (most frequent color first).
    #[inline]
    pub fn bit_patterns(&self) -> &[BitPattern] {
        &self.bit_patterns
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    #[inline]
    pub fn max_colors(&self) -> usize {
        self.bit_patterns.len()
    }
}
