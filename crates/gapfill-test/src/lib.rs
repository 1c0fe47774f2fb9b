//! gapfill-test - Regression test helpers for the gapfill workspace
//!
//! This crate provides a small regression framework modeled on a
//! check-and-count style:
//!
//! - **Compare**: run checks and report failures (default)
//! - **Display**: additionally write masks to `tests/regout`
//!
//! plus synthetic drawing fixtures shared by the crates' tests.
//!
//! # Usage
//!
//! ```ignore
//! use gapfill_test::{RegParams, ring_with_break};
//!
//! let mut rp = RegParams::new("gapfill");
//! rp.compare_values(4452.0, count as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use gapfill_core::{Mask, Raster, color};

/// Fillable background color of the fixtures
pub const BACKGROUND: u32 = color::WHITE;
/// Barrier color of the fixtures
pub const BARRIER: u32 = 0xFF00_00FF;

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // gapfill-test is at crates/gapfill-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Blank `width` x `height` canvas in the background color.
pub fn blank_canvas(width: u32, height: u32) -> Raster {
    Raster::new_filled(width, height, BACKGROUND).expect("fixture dimensions are nonzero")
}

/// Euclidean distance from pixel (x, y) to (cx, cy).
pub fn distance(x: u32, y: u32, cx: f64, cy: f64) -> f64 {
    let dx = x as f64 - cx;
    let dy = y as f64 - cy;
    (dx * dx + dy * dy).sqrt()
}

/// Square canvas of side `size` with a barrier ring around its center.
///
/// Ring pixels satisfy `|d - radius| <= 1.5` (three pixels thick). When
/// `break_width > 0`, the ring is cut above the center by clearing the
/// `break_width` columns starting at `center - break_width / 2`.
pub fn ring_with_break(size: u32, radius: f64, break_width: u32) -> Raster {
    let c = (size / 2) as f64;
    let break_start = (size / 2).saturating_sub(break_width / 2);
    let break_end = break_start + break_width;

    let mut canvas = blank_canvas(size, size).to_mut();
    for y in 0..size {
        for x in 0..size {
            let on_ring = (distance(x, y, c, c) - radius).abs() <= 1.5;
            let in_break = (y as f64) < c && x >= break_start && x < break_end;
            if on_ring && !in_break {
                canvas.set_pixel_unchecked(x, y, BARRIER);
            }
        }
    }
    canvas.into()
}

/// Mask with a single foreground pixel at (x, y).
pub fn single_pixel_mask(width: u32, height: u32, x: u32, y: u32) -> Mask {
    Mask::from_fn(width, height, |px, py| px == x && py == y)
        .expect("fixture dimensions are nonzero")
}

/// Mask whose foreground is the rectangle `[x0, x1) x [y0, y1)`.
pub fn rect_mask(width: u32, height: u32, x0: u32, y0: u32, x1: u32, y1: u32) -> Mask {
    Mask::from_fn(width, height, |x, y| x >= x0 && x < x1 && y >= y0 && y < y1)
        .expect("fixture dimensions are nonzero")
}
