//! Color types and distance metrics
//!
//! - [`Rgb`]: gamma-encoded floating point RGB, the working color of every pixel.
//! - [`Oklab`]: perceptual color space, available as an alternative matching space.
//!
//! # Example
//!
//! ```
//! use retro_quant::{DistanceMetric, Rgb};
//!
//! let red = Rgb::from_u8(255, 0, 0);
//! let dark_red = Rgb::from_u8(128, 0, 0);
//! assert!(DistanceMetric::Rgb.distance(red, dark_red) > 0.0);
//! ```

mod metric;
mod oklab;
mod rgb;

pub use metric::DistanceMetric;
pub use oklab::Oklab;
pub use rgb::Rgb;
