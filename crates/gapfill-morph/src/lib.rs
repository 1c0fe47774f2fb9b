//! gapfill-morph - Edge-driven binary morphology
//!
//! This crate provides the erosion and dilation used by the gap-aware
//! fill:
//!
//! - [`Sel`] - disk structuring element, `dx² + dy² < r²`
//! - [`Boundary`] - worklist of foreground pixels touching background
//! - [`erode`] / [`dilate`] - stamp the structuring element around every
//!   boundary pixel, reading only the untouched input
//!
//! Only boundary pixels trigger a stamp, so the cost is proportional to
//! the boundary length times the disk area rather than the image area.
//!
//! # Example
//!
//! ```
//! use gapfill_core::Mask;
//! use gapfill_morph::{dilate_disk, erode_disk};
//!
//! let mask = Mask::from_fn(20, 20, |x, y| (5..15).contains(&x) && (5..15).contains(&y))
//!     .unwrap();
//! let eroded = erode_disk(&mask, 2).unwrap();
//! assert!(eroded.count() < mask.count());
//! let dilated = dilate_disk(&mask, 2).unwrap();
//! assert!(dilated.count() > mask.count());
//! ```

pub mod binary;
pub mod boundary;
mod error;
pub mod sel;

pub use binary::{
    dilate, dilate_disk, dilate_with_boundary, erode, erode_disk, erode_with_boundary,
};
pub use boundary::Boundary;
pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};
