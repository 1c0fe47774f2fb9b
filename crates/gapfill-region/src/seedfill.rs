//! Seeded flood fill
//!
//! Grows a 4-connected region from a seed over cells whose value equals
//! the seed's value. The comparison is always against the value at the
//! seed ("fixed range"), never against the neighbor that was just
//! filled. The source is only read; the region is written into a separate
//! [`Mask`] whose margin stays background.
//!
//! Growth uses an explicit queue, so large regions never deepen the call
//! stack.

use crate::error::{RegionError, RegionResult};
use gapfill_core::{Mask, Raster, SeedPoint};
use std::collections::VecDeque;

/// A grid that can be flood filled.
pub trait FillSource {
    /// Image size as `(width, height)`.
    fn dimensions(&self) -> (u32, u32);

    /// Value at (x, y). Callers only ask for in-bounds coordinates.
    fn value_at(&self, x: u32, y: u32) -> u32;
}

impl FillSource for Raster {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[inline]
    fn value_at(&self, x: u32, y: u32) -> u32 {
        self.get_pixel_unchecked(x, y)
    }
}

impl FillSource for Mask {
    fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    #[inline]
    fn value_at(&self, x: u32, y: u32) -> u32 {
        u32::from(self.get(x, y))
    }
}

/// Resolve a seed to image coordinates.
pub(crate) fn seed_xy(seed: SeedPoint, width: u32, height: u32) -> RegionResult<(u32, u32)> {
    seed.to_xy(width, height)
        .ok_or(RegionError::InvalidSeed {
            row: seed.row(),
            col: seed.col(),
            width,
            height,
        })
}

/// Flood fill `source` from `seed` into a new mask.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is outside the image.
///
/// # Examples
///
/// ```
/// use gapfill_core::{Raster, SeedPoint};
/// use gapfill_region::seed_fill;
///
/// let raster = Raster::new_filled(10, 10, 0xFFFF_FFFF).unwrap();
/// let mask = seed_fill(&raster, SeedPoint::new(5, 5)).unwrap();
/// assert_eq!(mask.count(), 100);
/// ```
pub fn seed_fill<S: FillSource + ?Sized>(source: &S, seed: SeedPoint) -> RegionResult<Mask> {
    let (w, h) = source.dimensions();
    let mut out = Mask::new(w, h)?;
    seed_fill_into(source, seed, &mut out)?;
    Ok(out)
}

/// Flood fill `source` from `seed`, adding the region to `out`.
///
/// Pixels already set in `out` are treated as visited, so repeated calls
/// accumulate a union of regions. Returns the number of newly set pixels;
/// 0 when the seed pixel is already set.
///
/// # Errors
///
/// Returns [`RegionError::InvalidSeed`] if the seed is outside the image
/// and a dimension mismatch if `out` has another size.
pub fn seed_fill_into<S: FillSource + ?Sized>(
    source: &S,
    seed: SeedPoint,
    out: &mut Mask,
) -> RegionResult<usize> {
    let (w, h) = source.dimensions();
    if (out.width(), out.height()) != (w, h) {
        return Err(gapfill_core::Error::DimensionMismatch {
            expected: (w, h),
            actual: (out.width(), out.height()),
        }
        .into());
    }

    let (sx, sy) = seed_xy(seed, w, h)?;
    if out.get(sx, sy) {
        return Ok(0);
    }

    let target = source.value_at(sx, sy);
    let mut filled = 0usize;
    let mut queue = VecDeque::new();
    out.set_unchecked(sx, sy, true);
    queue.push_back((sx, sy));

    while let Some((x, y)) = queue.pop_front() {
        filled += 1;

        let mut visit = |nx: u32, ny: u32| {
            if !out.get(nx, ny) && source.value_at(nx, ny) == target {
                out.set_unchecked(nx, ny, true);
                queue.push_back((nx, ny));
            }
        };

        if x > 0 {
            visit(x - 1, y);
        }
        if x + 1 < w {
            visit(x + 1, y);
        }
        if y > 0 {
            visit(x, y - 1);
        }
        if y + 1 < h {
            visit(x, y + 1);
        }
    }

    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: u32 = 0xFFFF_FFFF;
    const RED: u32 = 0xFF00_00FF;

    /// 7x7 white raster with a red vertical wall at x = 3
    fn walled() -> Raster {
        let mut r = Raster::new_filled(7, 7, WHITE).unwrap().to_mut();
        for y in 0..7 {
            r.set_pixel(3, y, RED).unwrap();
        }
        r.into()
    }

    #[test]
    fn test_fill_stops_at_wall() {
        let mask = seed_fill(&walled(), SeedPoint::new(3, 1)).unwrap();
        assert_eq!(mask.count(), 21);
        assert!(mask.get(0, 0));
        assert!(!mask.get(3, 3));
        assert!(!mask.get(4, 3));
        assert!(mask.margin_is_clear());
    }

    #[test]
    fn test_fill_on_wall_fills_wall() {
        let mask = seed_fill(&walled(), SeedPoint::new(0, 3)).unwrap();
        assert_eq!(mask.count(), 7);
    }

    #[test]
    fn test_no_diagonal_leak() {
        // Diagonal wall: 4-connected fill cannot cross it
        let mut r = Raster::new_filled(5, 5, WHITE).unwrap().to_mut();
        for i in 0..5 {
            r.set_pixel(i, i, RED).unwrap();
        }
        let raster: Raster = r.into();
        let mask = seed_fill(&raster, SeedPoint::new(0, 4)).unwrap();
        assert_eq!(mask.count(), 10);
        assert!(!mask.get(0, 4));
    }

    #[test]
    fn test_invalid_seed() {
        let raster = walled();
        for seed in [
            SeedPoint::new(7, 0),
            SeedPoint::new(0, 7),
            SeedPoint::new(-1, 2),
        ] {
            assert!(matches!(
                seed_fill(&raster, seed),
                Err(RegionError::InvalidSeed { .. })
            ));
        }
    }

    #[test]
    fn test_fill_mask_background_component() {
        let mask = Mask::from_fn(6, 6, |x, _| x == 2).unwrap();
        let region = seed_fill(&mask, SeedPoint::new(0, 0)).unwrap();
        assert_eq!(region.count(), 12);
    }

    #[test]
    fn test_fill_into_accumulates() {
        let raster = walled();
        let mut out = Mask::new(7, 7).unwrap();
        assert_eq!(seed_fill_into(&raster, SeedPoint::new(0, 0), &mut out).unwrap(), 21);
        assert_eq!(seed_fill_into(&raster, SeedPoint::new(6, 2), &mut out).unwrap(), 0);
        assert_eq!(seed_fill_into(&raster, SeedPoint::new(0, 6), &mut out).unwrap(), 21);
        assert_eq!(out.count(), 42);
    }

    #[test]
    fn test_fill_into_size_mismatch() {
        let raster = walled();
        let mut out = Mask::new(6, 7).unwrap();
        assert!(matches!(
            seed_fill_into(&raster, SeedPoint::new(0, 0), &mut out),
            Err(RegionError::Core(_))
        ));
    }
}
