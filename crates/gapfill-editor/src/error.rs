//! Error types for gapfill-editor

use gapfill_io::IoError;
use gapfill_region::RegionError;
use thiserror::Error;

/// Errors that can occur during editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] gapfill_core::Error),

    /// Fill error
    #[error("fill error: {0}")]
    Region(#[from] RegionError),

    /// Saving the result failed
    #[error("save error: {0}")]
    Io(#[from] IoError),

    /// Invalid editor configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Layer dimensions do not match the canvas
    #[error("layer is {actual_w}x{actual_h}, canvas is {expected_w}x{expected_h}")]
    LayerMismatch {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
