//! Cell decomposition and recombination.
//!
//! Cells tile the image on a grid anchored at `(0, 0)` with stride
//! `(cell_width, cell_height)`, row-major. A cell that would cross the right
//! or bottom edge is clamped to the image boundary, so every pixel belongs to
//! exactly one cell whether or not the cell size divides the image size.

use crate::error::QuantError;

use super::indexed_image::{Geometry, IndexedImage};
use super::pixel::Pixel;

/// A rectangle in image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Region {
    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// A rectangular block of pixels that shares one palette reduction.
///
/// The cell owns its pixel buffer (row-major within [`Region`]); pixels keep
/// their absolute image coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    region: Region,
    pixels: Vec<Pixel>,
}

impl Cell {
    /// Wrap pixels belonging to `region`.
    ///
    /// # Errors
    ///
    /// - [`QuantError::GeometryMismatch`] if the pixel count differs from the region area
    /// - [`QuantError::CellOutOfBounds`] if a pixel lies outside the region
    pub fn new(region: Region, pixels: Vec<Pixel>) -> Result<Self, QuantError> {
        if pixels.len() != region.area() {
            return Err(QuantError::GeometryMismatch {
                expected: region.area(),
                actual: pixels.len(),
            });
        }
        if let Some(p) = pixels.iter().find(|p| !region.contains(p.x(), p.y())) {
            return Err(QuantError::CellOutOfBounds { x: p.x(), y: p.y() });
        }
        Ok(Self { region, pixels })
    }

    #[inline]
    pub fn region(&self) -> Region {
        self.region
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

/// Regions covering `geometry` with cells of the given size, edge cells clamped.
pub fn cell_regions(
    geometry: Geometry,
    cell_width: usize,
    cell_height: usize,
) -> Result<Vec<Region>, QuantError> {
    if cell_width == 0 || cell_height == 0 {
        return Err(QuantError::InvalidCellSize {
            width: cell_width,
            height: cell_height,
        });
    }

    let mut regions = Vec::new();
    for y in (0..geometry.height).step_by(cell_height) {
        for x in (0..geometry.width).step_by(cell_width) {
            regions.push(Region {
                x,
                y,
                width: cell_width.min(geometry.width - x),
                height: cell_height.min(geometry.height - y),
            });
        }
    }
    Ok(regions)
}

/// Split `image` into independently owned cells.
pub fn decompose(
    image: &IndexedImage,
    cell_width: usize,
    cell_height: usize,
) -> Result<Vec<Cell>, QuantError> {
    let width = image.width();
    cell_regions(image.geometry(), cell_width, cell_height)?
        .into_iter()
        .map(|region| {
            let mut pixels = Vec::with_capacity(region.area());
            for y in region.y..region.y + region.height {
                let row = y * width;
                pixels.extend_from_slice(&image.pixels()[row + region.x..row + region.x + region.width]);
            }
            Ok(Cell { region, pixels })
        })
        .collect()
}

/// Stitch cells back into a freshly allocated image, addressed by pixel coordinate.
///
/// # Errors
///
/// - [`QuantError::CellOutOfBounds`] for a pixel outside `geometry`
/// - [`QuantError::CellOverlap`] for a coordinate supplied twice
/// - [`QuantError::IncompleteCoverage`] if any coordinate is left unset
pub fn recombine(geometry: Geometry, cells: Vec<Cell>) -> Result<IndexedImage, QuantError> {
    let mut slots: Vec<Option<Pixel>> = vec![None; geometry.area()];

    for cell in cells {
        for pixel in cell.into_pixels() {
            let offset = geometry
                .offset(pixel.x(), pixel.y())
                .ok_or(QuantError::CellOutOfBounds {
                    x: pixel.x(),
                    y: pixel.y(),
                })?;
            if slots[offset].replace(pixel).is_some() {
                return Err(QuantError::CellOverlap {
                    x: pixel.x(),
                    y: pixel.y(),
                });
            }
        }
    }

    let missing = slots.iter().filter(|s| s.is_none()).count();
    if missing > 0 {
        return Err(QuantError::IncompleteCoverage { missing });
    }

    IndexedImage::from_pixels(geometry, slots.into_iter().flatten().collect())
}
