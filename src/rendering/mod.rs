pub mod raster;

pub use raster::{decode_file, encode_png, to_indexed};
