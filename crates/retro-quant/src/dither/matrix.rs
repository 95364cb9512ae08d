//! Threshold matrices for ordered dithering.

use crate::error::QuantError;

/// A rectangular threshold matrix.
///
/// Entries lie in `0..width * height`. The matrix tiles independently along
/// both axes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThresholdMatrix {
    width: usize,
    height: usize,
    values: Vec<u32>,
}

impl ThresholdMatrix {
    /// Create a matrix from rows.
    ///
    /// # Errors
    ///
    /// [`QuantError::InvalidMatrix`] if the matrix is empty, ragged, or holds
    /// an entry outside `0..width * height`.
    pub fn new(rows: &[&[u32]]) -> Result<Self, QuantError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 {
            return Err(QuantError::InvalidMatrix("matrix is empty".to_string()));
        }
        if let Some(row) = rows.iter().position(|r| r.len() != width) {
            return Err(QuantError::InvalidMatrix(format!(
                "row {row} has {} entries, expected {width}",
                rows[row].len()
            )));
        }

        let values: Vec<u32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        let cells = (width * height) as u32;
        if let Some(v) = values.iter().find(|&&v| v >= cells) {
            return Err(QuantError::InvalidMatrix(format!(
                "entry {v} outside 0..{cells}"
            )));
        }

        Ok(Self {
            width,
            height,
            values,
        })
    }

    fn from_static(width: usize, values: &[u32]) -> Self {
        Self {
            width,
            height: values.len() / width,
            values: values.to_vec(),
        }
    }

    pub fn bayer2() -> Self {
        Self::from_static(2, &[0, 2, 3, 1])
    }

    pub fn bayer4() -> Self {
        #[rustfmt::skip]
        let values = [
            0,  8,  2,  10,
            12, 4,  14, 6,
            3,  11, 1,  9,
            15, 7,  13, 5,
        ];
        Self::from_static(4, &values)
    }

    pub fn bayer8() -> Self {
        #[rustfmt::skip]
        let values = [
            0,  32, 8,  40, 2,  34, 10, 42,
            48, 16, 56, 24, 50, 18, 58, 26,
            12, 44, 4,  36, 14, 46, 6,  38,
            60, 28, 52, 20, 62, 30, 54, 22,
            3,  35, 11, 43, 1,  33, 9,  41,
            51, 19, 59, 27, 49, 17, 57, 25,
            15, 47, 7,  39, 13, 45, 5,  37,
            63, 31, 55, 23, 61, 29, 53, 21,
        ];
        Self::from_static(8, &values)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Entry at `(x mod width, y mod height)`.
    #[inline]
    pub fn value(&self, x: usize, y: usize) -> u32 {
        self.values[(y % self.height) * self.width + (x % self.width)]
    }

    /// Zero-mean offsets `depth * (v / (width * height) - 0.5)`, row-major.
    pub fn normalized(&self, depth: f32) -> Vec<f32> {
        let factor = 1.0 / (self.width * self.height) as f32;
        self.values
            .iter()
            .map(|&v| depth * (factor * v as f32 - 0.5))
            .collect()
    }
}
