//! Retrospex - convert images into Commodore 64 graphics modes.
//!
//! The quantization engine lives in the `retro-quant` crate; this crate adds
//! raster decode/encode, the YAML modes file and the command line.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
