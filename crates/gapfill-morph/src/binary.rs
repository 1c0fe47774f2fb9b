//! Edge-driven binary erosion and dilation
//!
//! Both operations classify boundary pixels on the untouched input and
//! write only into a fresh output copy, so the result does not depend on
//! the order in which boundary pixels are visited.
//!
//! - Erosion writes background at every SEL hit around each boundary pixel.
//! - Dilation writes foreground at every SEL hit around each boundary pixel.
//!
//! Stamps are clipped to the image; the mask margin is never written.

use crate::{Boundary, MorphError, MorphResult, Sel};
use gapfill_core::Mask;
use tracing::trace;

/// Erode a mask by stamping background around its boundary pixels.
pub fn erode(mask: &Mask, sel: &Sel) -> MorphResult<Mask> {
    let boundary = Boundary::of(mask);
    erode_with_boundary(mask, &boundary, sel)
}

/// Dilate a mask by stamping foreground around its boundary pixels.
pub fn dilate(mask: &Mask, sel: &Sel) -> MorphResult<Mask> {
    let boundary = Boundary::of(mask);
    dilate_with_boundary(mask, &boundary, sel)
}

/// Erode with a disk of the given radius.
///
/// Radius 0 returns an unchanged copy.
pub fn erode_disk(mask: &Mask, radius: u32) -> MorphResult<Mask> {
    erode(mask, &Sel::create_disk(radius)?)
}

/// Dilate with a disk of the given radius.
///
/// Radius 0 returns an unchanged copy.
pub fn dilate_disk(mask: &Mask, radius: u32) -> MorphResult<Mask> {
    dilate(mask, &Sel::create_disk(radius)?)
}

/// Erode using a boundary list already computed for `mask`.
///
/// # Errors
///
/// Returns [`MorphError::BoundaryMismatch`] if `boundary` was built for a
/// mask of another size.
pub fn erode_with_boundary(mask: &Mask, boundary: &Boundary, sel: &Sel) -> MorphResult<Mask> {
    stamp(mask, boundary, sel, false)
}

/// Dilate using a boundary list already computed for `mask`.
///
/// # Errors
///
/// Returns [`MorphError::BoundaryMismatch`] if `boundary` was built for a
/// mask of another size.
pub fn dilate_with_boundary(mask: &Mask, boundary: &Boundary, sel: &Sel) -> MorphResult<Mask> {
    stamp(mask, boundary, sel, true)
}

fn stamp(mask: &Mask, boundary: &Boundary, sel: &Sel, value: bool) -> MorphResult<Mask> {
    let w = mask.width();
    let h = mask.height();
    if boundary.dimensions() != (w, h) {
        return Err(MorphError::BoundaryMismatch {
            boundary: boundary.dimensions(),
            mask: (w, h),
        });
    }

    let mut out = mask.clone();
    let hits: Vec<(i32, i32)> = sel.hit_offsets().collect();
    if hits.is_empty() {
        return Ok(out);
    }

    trace!(
        boundary = boundary.len(),
        hits = hits.len(),
        value,
        "stamping structuring element"
    );

    for &(x, y) in boundary.points() {
        for &(dx, dy) in &hits {
            let sx = x as i64 + dx as i64;
            let sy = y as i64 + dy as i64;
            if sx >= 0 && sy >= 0 && sx < w as i64 && sy < h as i64 {
                out.set_unchecked(sx as u32, sy as u32, value);
            }
        }
    }

    Ok(out)
}
