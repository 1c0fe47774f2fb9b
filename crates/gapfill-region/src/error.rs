//! Error types for gapfill-region

use thiserror::Error;

/// Errors that can occur during region filling
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gapfill_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] gapfill_morph::MorphError),

    /// Seed outside the image
    #[error("invalid seed position: (row {row}, col {col}) outside {width}x{height}")]
    InvalidSeed {
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },

    /// Negative or unrepresentable gap width
    #[error("invalid gap width: {0}")]
    InvalidGap(i64),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
