//! Nearest-color quantization and layered palette reduction.
//!
//! A [`Layer`] describes one reduction pass: a cell size and the bit patterns
//! a cell may hand out. For every cell, the most frequent base-palette colors
//! among the still-unclaimed pixels are ranked and paired with the layer's bit
//! patterns in rank order ([`ReducedPalette`]). Non-terminal layers only claim
//! pixels whose nearest base color made the cut; the terminal layer forces
//! every remaining pixel onto the reduced palette.

mod layer;
mod nearest;
mod reduce;

pub use layer::Layer;
pub use nearest::{nearest_index, quantize_pixel, quantize_to_index};
pub use reduce::{quantize_cell, reduce_palette, CellOutcome, Histogram, ReducedEntry, ReducedPalette};
