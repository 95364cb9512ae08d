//! Image model: pixels with quantization state, the row-major
//! [`IndexedImage`], and rectangular [`Cell`] decomposition.

mod cell;
mod indexed_image;
mod pixel;

pub use cell::{cell_regions, decompose, recombine, Cell, Region};
pub use indexed_image::{Geometry, IndexedImage};
pub use pixel::{BitPattern, Pixel, PixelState};
