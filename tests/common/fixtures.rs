//! Test fixtures: input images and modes files written to temp dirs.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Colodore colors used to build inputs that quantize exactly
pub mod colors {
    pub const BLACK: [u8; 3] = [0x00, 0x00, 0x00];
    pub const WHITE: [u8; 3] = [0xff, 0xff, 0xff];
    pub const RED: [u8; 3] = [0x81, 0x33, 0x38];
    pub const BLUE: [u8; 3] = [0x2e, 0x2c, 0x9b];
    pub const YELLOW: [u8; 3] = [0xed, 0xf0, 0x71];
}

/// Smooth RGB gradient
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
        ])
    })
}

/// Vertical stripes cycling through `stripes`, each `stripe_width` wide
pub fn stripes(width: u32, height: u32, stripe_width: u32, stripes: &[[u8; 3]]) -> RgbImage {
    RgbImage::from_fn(width, height, |x, _| {
        Rgb(stripes[(x / stripe_width) as usize % stripes.len()])
    })
}

/// Save `img` as PNG into `dir` and return its path
pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).expect("Failed to write fixture image");
    path
}

/// Save a modes file into `dir` and return its path
pub fn write_modes_file(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("modes.yaml");
    std::fs::write(&path, yaml).expect("Failed to write modes file");
    path
}

/// A 16x8 two-color mode with 8x8 cells and a black/white palette
pub const BW_MODES_YAML: &str = r##"
modes:
  bw:
    width: 16
    height: 8
    pixel_width: 2
    palette: ["#000000", "#ffffff"]
    layers:
      - { cell_width: 8, cell_height: 8, bit_patterns: [0, 1], terminal: true }
"##;
