//! gapfill-region - Region filling for hand-drawn outlines
//!
//! This crate provides:
//!
//! - **Seeded flood fill** - fixed-range, 4-connected region growing from a
//!   seed into a separate mask ([`seed_fill`], [`seed_fill_into`])
//! - **Gap-aware fill** - flood fill that patches leaks through boundary
//!   breaks narrower than a configured gap width ([`GapFill`],
//!   [`fill_with_gap`])
//!
//! # Example
//!
//! ```
//! use gapfill_core::Raster;
//! use gapfill_region::fill_with_gap;
//!
//! let raster = Raster::new_filled(20, 20, 0xFFFF_FFFF).unwrap();
//! let mask = fill_with_gap(&raster, 10, 10, 4).unwrap();
//! assert_eq!(mask.count(), 400);
//! ```

mod error;
pub mod gapfill;
pub mod seedfill;

// Re-export core types
pub use gapfill_core;

pub use error::{RegionError, RegionResult};

pub use gapfill::{
    DEFAULT_GAP_WIDTH, FillOutcome, GapFill, GapFillOptions, GapFillResult, GapFillStages,
    fill_with_gap, gap_radius,
};
pub use seedfill::{FillSource, seed_fill, seed_fill_into};
