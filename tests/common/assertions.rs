//! Assertion helpers for tests.

use image::RgbImage;
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

/// Assert bytes are a PNG and decode them
pub fn assert_png(bytes: &[u8]) -> RgbImage {
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    image::load_from_memory(bytes)
        .expect("PNG should decode")
        .to_rgb8()
}

/// Assert every pixel is a color of `palette`
pub fn assert_colors_within(img: &RgbImage, palette: &[[u8; 3]]) {
    for (x, y, pixel) in img.enumerate_pixels() {
        assert!(
            palette.contains(&pixel.0),
            "Pixel ({x}, {y}) has color {:?} outside the palette",
            pixel.0
        );
    }
}

/// Distinct colors used in `img`
pub fn distinct_colors(img: &RgbImage) -> BTreeSet<[u8; 3]> {
    img.pixels().map(|p| p.0).collect()
}

/// Assert horizontally adjacent pairs are identical (pixel stretch of 2)
pub fn assert_double_wide(img: &RgbImage) {
    assert_eq!(img.width() % 2, 0, "Width {} is not even", img.width());
    for y in 0..img.height() {
        for x in (0..img.width()).step_by(2) {
            assert_eq!(
                img.get_pixel(x, y),
                img.get_pixel(x + 1, y),
                "Pixels ({x}, {y}) and ({}, {y}) differ",
                x + 1
            );
        }
    }
}
