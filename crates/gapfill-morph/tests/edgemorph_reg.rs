//! Edge-driven erosion and dilation regression test
//!
//! Checks the disk structuring element against small synthetic masks,
//! including the image-edge rule: pixels on the first or last row or
//! column never trigger a stamp.

use gapfill_core::Mask;
use gapfill_morph::{Boundary, Sel, dilate, dilate_disk, erode, erode_disk};
use gapfill_test::{RegParams, rect_mask, single_pixel_mask};

#[test]
fn edgemorph_reg() {
    let mut rp = RegParams::new("edgemorph");

    // --- Test 1: An isolated pixel erodes away ---
    eprintln!("=== Isolated pixel ===");
    let dot = single_pixel_mask(5, 5, 2, 2);
    let eroded = erode_disk(&dot, 1).unwrap();
    rp.compare_values(0.0, eroded.count() as f64, 0.0);
    rp.compare_values(1.0, dot.count() as f64, 0.0);

    // --- Test 2: Pixels on the image edge are never stamped from ---
    let edge_dot = single_pixel_mask(5, 5, 0, 2);
    let kept = erode_disk(&edge_dot, 1).unwrap();
    rp.compare_masks(&kept, &edge_dot);
    let full = Mask::from_fn(10, 10, |_, _| true).unwrap();
    rp.compare_masks(&erode_disk(&full, 3).unwrap(), &full);
    rp.check(Boundary::of(&full).is_empty(), "full mask has no boundary");

    // --- Test 3: Dilating a pixel gives the disk ---
    eprintln!("=== Dilated pixel ===");
    let center = single_pixel_mask(9, 9, 4, 4);
    let sel2 = Sel::create_disk(2).unwrap();
    rp.compare_values(9.0, sel2.hit_count() as f64, 0.0);
    rp.compare_values(9.0, dilate(&center, &sel2).unwrap().count() as f64, 0.0);
    // r = 3 keeps (±2, ±2) since 8 < 9, drops (±3, 0)
    let grown = dilate_disk(&center, 3).unwrap();
    rp.compare_values(25.0, grown.count() as f64, 0.0);
    rp.check(grown.get(2, 2) && grown.get(6, 6), "corner offsets kept");
    rp.check(!grown.get(1, 4) && !grown.get(7, 4), "axis offset 3 dropped");

    // --- Test 4: Stamps are clipped at the image edge ---
    let near_corner = single_pixel_mask(5, 5, 1, 1);
    let clipped = dilate_disk(&near_corner, 3).unwrap();
    rp.compare_values(16.0, clipped.count() as f64, 0.0);
    rp.check(clipped.margin_is_clear(), "margin clear after clipping");

    // --- Test 5: Opening of a square ---
    eprintln!("=== Opening ===");
    let square = rect_mask(20, 20, 5, 5, 15, 15);
    let shrunk = erode(&square, &sel2).unwrap();
    rp.compare_values(36.0, shrunk.count() as f64, 0.0);
    rp.compare_masks(&shrunk, &rect_mask(20, 20, 7, 7, 13, 13));
    let opened = dilate(&shrunk, &sel2).unwrap();
    rp.compare_values(64.0, opened.count() as f64, 0.0);
    rp.check(opened.is_subset_of(&square), "opening stays inside");
    rp.write_mask(&opened, "opened").unwrap();

    // --- Test 6: Inputs are untouched ---
    rp.compare_values(100.0, square.count() as f64, 0.0);
    rp.compare_values(1.0, center.count() as f64, 0.0);

    assert!(rp.cleanup(), "edgemorph regression test failed");
}
