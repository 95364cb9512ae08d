#![allow(clippy::module_inception)]

//! retro-quant: palette quantization for constrained retro graphics modes
//!
//! Converts a full-color raster into the abstract representation a retro
//! graphics chip can display: every pixel ends up with an index into a fixed
//! hardware palette and a small bit pattern that selects one of its cell's
//! color registers.
//!
//! # Quick Start
//!
//! ```
//! use retro_quant::{DitherMode, IndexedImage, ModeRegistry, Pipeline, Rgb, DEFAULT_DEPTH};
//!
//! let registry = ModeRegistry::builtin();
//! let mode = registry.get("hires").unwrap();
//!
//! let image = IndexedImage::from_colors(320, 200, &vec![Rgb::new(0.8, 0.2, 0.2); 320 * 200]).unwrap();
//! let result = Pipeline::new(mode)
//!     .dither(DitherMode::Bayer4.ditherer(DEFAULT_DEPTH))
//!     .run(image)
//!     .unwrap();
//!
//! let rendered = result.render();
//! assert_eq!((rendered.width(), rendered.height()), (320, 200));
//! ```
//!
//! # Pipeline
//!
//! 1. **Dither** ([`OrderedDither`]): an optional position-dependent offset
//!    from a tiled threshold matrix, applied once to every color.
//! 2. **Layers** ([`Layer`]): in declared order, the image is split into
//!    cells of the layer's size. Per cell, the most frequent palette colors
//!    among unclaimed pixels are paired with the layer's bit patterns and
//!    matching pixels are claimed. The final, terminal layer claims
//!    everything that is left.
//! 3. **Output** ([`QuantizedImage`]): indices, bit patterns and a rendered
//!    RGB raster with the mode's pixel stretch applied.
//!
//! # Determinism
//!
//! All searches walk the palette in ascending index order and keep the first
//! minimum; frequency ties go to the lower index. Identical input always
//! gives identical output.
//!
//! # Modes
//!
//! [`ModeRegistry::builtin`] holds the Commodore 64 modes `hires`, `koala`,
//! `mcchar`, `hireschar`, `hires2` and `mcchar3`, all on the Colodore palette.
//! Custom modes are built with [`ModeSpec::new`], which rejects layer lists
//! that could leave pixels unresolved.

pub mod color;
pub mod dither;
pub mod error;
pub mod image;
pub mod mode;
pub mod output;
pub mod palette;
pub mod pipeline;
pub mod quantize;


pub use color::{DistanceMetric, Oklab, Rgb};
pub use dither::{DitherMode, OrderedDither, ThresholdMatrix, DEFAULT_DEPTH};
pub use error::QuantError;
pub use image::{BitPattern, Cell, Geometry, IndexedImage, Pixel, PixelState, Region};
pub use mode::{ModeRegistry, ModeSpec, DEFAULT_MODE};
pub use output::{QuantizedImage, RenderedImage};
pub use palette::{Palette, PaletteError, ParseColorError, COLODORE};
pub use pipeline::{LayerReport, Pipeline};
pub use quantize::{quantize_to_index, Layer, ReducedPalette};
