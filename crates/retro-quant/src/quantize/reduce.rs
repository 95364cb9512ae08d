//! Per-cell frequency-based palette reduction and bit-pattern assignment.

use crate::color::Rgb;
use crate::error::QuantError;
use crate::image::{BitPattern, Cell, Pixel};
use crate::palette::Palette;

use super::layer::Layer;
use super::nearest::quantize_to_index;

/// Counts of unclaimed pixels per base-palette index.
///
/// Stored densely by index so iteration order is always ascending index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: Vec<usize>,
}

impl Histogram {
    /// Quantize every pixel without a bit pattern against `palette` and count
    /// the resulting indices. Already claimed pixels are not counted.
    pub fn from_pixels(pixels: &[Pixel], palette: &Palette) -> Result<Self, QuantError> {
        let mut counts = vec![0usize; palette.len()];
        for pixel in pixels.iter().filter(|p| !p.has_bit_pattern()) {
            let (idx, _) = quantize_to_index(pixel.color(), palette)?;
            counts[idx] += 1;
        }
        Ok(Self { counts })
    }

    #[inline]
    pub fn count(&self, index: usize) -> usize {
        self.counts.get(index).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of distinct indices that occur at least once.
    pub fn distinct(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }

    /// Occurring indices ordered by descending count, ties by ascending index.
    pub fn ranked(&self) -> Vec<(usize, usize)> {
        let mut ranked: Vec<(usize, usize)> = self
            .counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| (i, c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked
    }

    /// The `k` highest ranked indices (all of them if fewer occur).
    pub fn top(&self, k: usize) -> Vec<usize> {
        self.ranked().into_iter().take(k).map(|(i, _)| i).collect()
    }
}

/// One entry of a reduced palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReducedEntry {
    /// Index into the base palette.
    pub index: usize,
    pub pattern: BitPattern,
}

/// The colors a cell kept, in rank order, each paired with its bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReducedPalette {
    entries: Vec<ReducedEntry>,
}

impl ReducedPalette {
    /// Pair `ranked` base indices with `patterns` by position.
    ///
    /// # Errors
    ///
    /// [`QuantError::InsufficientBitPatterns`] if there are fewer patterns
    /// than indices. Nothing is truncated.
    pub fn assign(ranked: &[usize], patterns: &[BitPattern]) -> Result<Self, QuantError> {
        if patterns.len() < ranked.len() {
            return Err(QuantError::InsufficientBitPatterns {
                available: patterns.len(),
                required: ranked.len(),
            });
        }
        let entries = ranked
            .iter()
            .zip(patterns)
            .map(|(&index, &pattern)| ReducedEntry { index, pattern })
            .collect();
        Ok(Self { entries })
    }

    #[inline]
    pub fn entries(&self) -> &[ReducedEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bit pattern assigned to base index `index`, if it was kept.
    pub fn pattern_for(&self, index: usize) -> Option<BitPattern> {
        self.entries
            .iter()
            .find(|e| e.index == index)
            .map(|e| e.pattern)
    }

    /// Nearest kept color to `color`, as `(base index, distance, pattern)`.
    ///
    /// Ties resolve to the lowest base index, independent of rank.
    pub fn find_nearest(
        &self,
        color: Rgb,
        palette: &Palette,
    ) -> Result<(usize, f32, BitPattern), QuantError> {
        let metric = palette.metric();
        let mut best: Option<(usize, f32, BitPattern)> = None;
        for entry in &self.entries {
            let candidate = palette.get(entry.index).ok_or(QuantError::EmptyPalette)?;
            let dist = metric.distance(color, candidate);
            let better = match best {
                None => true,
                Some((best_idx, best_dist, _)) => {
                    dist < best_dist || (dist == best_dist && entry.index < best_idx)
                }
            };
            if better {
                best = Some((entry.index, dist, entry.pattern));
            }
        }
        best.ok_or(QuantError::EmptyPalette)
    }
}

/// Rank the unclaimed pixels' base colors and keep at most
/// `layer.max_colors()` of them.
///
/// # Errors
///
/// [`QuantError::InsufficientBitPatterns`] if unclaimed pixels exist but the
/// layer has no bit pattern to give them.
pub fn reduce_palette(
    pixels: &[Pixel],
    palette: &Palette,
    layer: &Layer,
) -> Result<ReducedPalette, QuantError> {
    let histogram = Histogram::from_pixels(pixels, palette)?;
    if histogram.distinct() > 0 && layer.bit_patterns().is_empty() {
        return Err(QuantError::InsufficientBitPatterns {
            available: 0,
            required: 1,
        });
    }
    let kept = histogram.top(layer.max_colors());
    ReducedPalette::assign(&kept, layer.bit_patterns())
}

/// Result of running one layer over one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutcome {
    pub cell: Cell,
    pub reduced: ReducedPalette,
    /// Pixels claimed by this layer in this cell.
    pub stamped: usize,
}

/// Run `layer` over a single cell.
///
/// Claimed pixels pass through untouched. On the terminal layer every other
/// pixel is forced onto the reduced palette; on other layers a pixel is only
/// claimed when its nearest base color was kept.
pub fn quantize_cell(cell: Cell, palette: &Palette, layer: &Layer) -> Result<CellOutcome, QuantError> {
    let reduced = reduce_palette(cell.pixels(), palette, layer)?;
    let region = cell.region();

    let mut stamped = 0;
    let mut pixels = cell.into_pixels();
    for pixel in pixels.iter_mut().filter(|p| !p.has_bit_pattern()) {
        if layer.is_terminal() {
            let (index, error, pattern) = reduced.find_nearest(pixel.color(), palette)?;
            pixel.stamp(index, error, pattern)?;
            stamped += 1;
        } else {
            let (index, error) = quantize_to_index(pixel.color(), palette)?;
            match reduced.pattern_for(index) {
                Some(pattern) => {
                    pixel.stamp(index, error, pattern)?;
                    stamped += 1;
                }
                None => pixel.set_quantized(index, error)?,
            }
        }
    }

    Ok(CellOutcome {
        cell: Cell::new(region, pixels)?,
        reduced,
        stamped,
    })
}
