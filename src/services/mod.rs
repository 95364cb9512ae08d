pub mod converter;

pub use converter::{Conversion, ConvertOptions, Converter};
