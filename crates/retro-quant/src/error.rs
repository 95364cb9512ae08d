//! Unified error type for the quantization pipeline.
//!
//! Every failure is fatal for the run: the pipeline either produces a fully
//! resolved image or one of these errors, never a partial result.

use thiserror::Error;

use crate::palette::PaletteError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantError {
    #[error("Cannot measure distance against an empty palette")]
    EmptyPalette,

    #[error("Not enough bit patterns ({available}) for palette of length ({required})")]
    InsufficientBitPatterns { available: usize, required: usize },

    #[error("Pixel ({x}, {y}) already has a bit pattern assigned")]
    PatternAlreadyAssigned { x: usize, y: usize },

    #[error("Invalid cell size: {width}x{height}")]
    InvalidCellSize { width: usize, height: usize },

    #[error("Cells overlap at ({x}, {y})")]
    CellOverlap { x: usize, y: usize },

    #[error("Cell pixel ({x}, {y}) lies outside the image")]
    CellOutOfBounds { x: usize, y: usize },

    #[error("Cells leave {missing} pixels uncovered")]
    IncompleteCoverage { missing: usize },

    #[error("Pixel count {actual} does not match geometry ({expected} expected)")]
    GeometryMismatch { expected: usize, actual: usize },

    #[error("Invalid mode spec: {0}")]
    InvalidModeSpec(String),

    #[error("Invalid threshold matrix: {0}")]
    InvalidMatrix(String),

    #[error("Palette error: {0}")]
    Palette(#[from] PaletteError),
}
