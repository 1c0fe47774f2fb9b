//! Mask and raster regression test
//!
//! Padded mask storage, set operations, and the shared/owned raster
//! handles.

use gapfill_core::{Error, Mask, Raster, SeedPoint, color};
use gapfill_test::{BARRIER, RegParams, rect_mask, ring_with_break};

#[test]
fn mask_reg() {
    let mut rp = RegParams::new("mask");

    // --- Test 1: Padding ---
    let mask = rect_mask(8, 6, 0, 0, 8, 6);
    rp.compare_values(10.0, mask.padded_width() as f64, 0.0);
    rp.compare_values(8.0, mask.padded_height() as f64, 0.0);
    rp.compare_values(48.0, mask.count() as f64, 0.0);
    rp.check(mask.margin_is_clear(), "full mask keeps a clear margin");
    rp.check(mask.touches_border(), "full mask touches border");
    rp.check(!mask.get_signed(-1, 0) && !mask.get_signed(8, 5), "margin reads background");
    rp.check(mask.get_padded(1, 1), "padded (1, 1) is image (0, 0)");

    // --- Test 2: Set operations ---
    let big = rect_mask(10, 10, 2, 2, 8, 8);
    let small = rect_mask(10, 10, 4, 4, 6, 6);
    let ring = big.subtract(&small).unwrap();
    rp.compare_values(32.0, ring.count() as f64, 0.0);
    rp.check(small.is_subset_of(&big), "inner square within outer");
    rp.check(!big.is_subset_of(&small), "outer not within inner");
    rp.compare_masks(&ring.union(&small).unwrap(), &big);
    rp.check(!big.touches_border(), "inner rectangle off the border");

    // --- Test 3: Size mismatch is an error ---
    let other = Mask::new(9, 10).unwrap();
    let err = big.subtract(&other).unwrap_err();
    rp.check(matches!(err, Error::DimensionMismatch { .. }), "subtract mismatch");

    // --- Test 4: Out-of-bounds writes are rejected ---
    let mut m = Mask::new(4, 4).unwrap();
    rp.check(m.set(4, 0, true).is_err(), "set outside rejected");
    rp.check(m.is_empty() && m.margin_is_clear(), "rejected write left no trace");
    m.set(3, 3, true).unwrap();
    rp.compare_values(1.0, m.count() as f64, 0.0);
    rp.check(m.foreground().eq([(3, 3)]), "foreground iterator");

    // --- Test 5: Raster handles ---
    let canvas = ring_with_break(100, 40.0, 4);
    rp.compare_values(2.0, canvas.distinct_values() as f64, 0.0);
    let shared = canvas.clone();
    rp.compare_values(2.0, canvas.ref_count() as f64, 0.0);
    let mut edited = shared.to_mut();
    edited.set_pixel(50, 50, BARRIER).unwrap();
    let edited: Raster = edited.into();
    rp.check(canvas.get_pixel(50, 50) == Some(color::WHITE), "source raster untouched");
    rp.check(edited.get_pixel(50, 50) == Some(BARRIER), "copy edited");
    rp.check(!edited.sizes_equal(&Raster::new(100, 99).unwrap()), "size check");

    // --- Test 6: Seed points ---
    let seed = SeedPoint::new(3, 7);
    rp.check(seed.to_xy(10, 5) == Some((7, 3)), "row/col map to y/x");
    rp.check(seed.to_xy(7, 5).is_none(), "column outside width");
    rp.check(SeedPoint::from_xy(7, 3) == seed, "from_xy inverts to_xy");

    assert!(rp.cleanup(), "mask regression test failed");
}
