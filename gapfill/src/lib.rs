//! gapfill - Seeded region fill for imperfect outlines
//!
//! A flood fill from a seed point leaks through any break in the outline
//! around it. The gap-aware fill erodes the flooded region to cut the
//! leaks narrower than a chosen gap width, then restores everything that
//! was not part of the leak, so a hand-drawn outline that is almost closed
//! still yields one sealed region.
//!
//! # Overview
//!
//! - [`core`](gapfill_core): rasters, padded masks, seed points
//! - [`morph`]: disk structuring elements, edge-driven erosion and dilation
//! - [`region`]: seeded flood fill and the gap-aware fill
//! - [`io`]: PNG reading and writing
//! - [`editor`]: headless drawing editor producing stencils
//!
//! # Example
//!
//! ```
//! use gapfill::{Raster, fill_with_gap};
//!
//! let canvas = Raster::new_filled(64, 64, 0xFFFF_FFFF).unwrap();
//! let mask = fill_with_gap(&canvas, 32, 32, 10).unwrap();
//! assert_eq!(mask.count(), 64 * 64);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use gapfill_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use gapfill_editor as editor;
pub use gapfill_io as io;
pub use gapfill_morph as morph;
pub use gapfill_region as region;

// Main entry points
pub use gapfill_region::{FillOutcome, GapFill, GapFillOptions, GapFillResult, fill_with_gap};
