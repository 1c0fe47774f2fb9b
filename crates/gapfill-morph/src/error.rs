//! Error types for gapfill-morph

use thiserror::Error;

/// Errors that can occur during morphological operations
#[derive(Debug, Error)]
pub enum MorphError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gapfill_core::Error),

    /// Invalid structuring element
    #[error("invalid structuring element: {0}")]
    InvalidSel(String),

    /// Boundary list was built for a mask of another size
    #[error("boundary built for {}x{} mask, applied to {}x{}", .boundary.0, .boundary.1, .mask.0, .mask.1)]
    BoundaryMismatch {
        boundary: (u32, u32),
        mask: (u32, u32),
    },
}

/// Result type for morphological operations
pub type MorphResult<T> = Result<T, MorphError>;
