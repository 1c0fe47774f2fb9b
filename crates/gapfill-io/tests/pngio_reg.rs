//! PNG file I/O regression test
//!
//! Writes a drawing canvas and a stencil mask to disk and reads them back.

use gapfill_io::{IoError, read_mask, read_raster, write_mask, write_raster};
use gapfill_test::{BARRIER, RegParams, rect_mask, ring_with_break};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("gapfill_pngio_reg_{}_{}", std::process::id(), name))
}

#[test]
fn pngio_reg() {
    let mut rp = RegParams::new("pngio");

    // --- Test 1: Canvas roundtrip ---
    let canvas = ring_with_break(100, 40.0, 4);
    let path = temp_path("canvas.png");
    write_raster(&canvas, &path).unwrap();
    let back = read_raster(&path).unwrap();
    rp.check(back == canvas, "canvas survives a file roundtrip");
    rp.check(back.get_pixel(50, 90) == Some(BARRIER), "barrier color kept");
    rp.compare_values(2.0, back.distinct_values() as f64, 0.0);
    let _ = std::fs::remove_file(&path);

    // --- Test 2: Stencil roundtrip ---
    let mask = rect_mask(30, 20, 3, 4, 17, 12);
    let path = temp_path("mask.png");
    write_mask(&mask, &path).unwrap();
    let stencil = read_raster(&path).unwrap();
    rp.compare_values(2.0, stencil.distinct_values() as f64, 0.0);
    let back = read_mask(&path).unwrap();
    rp.compare_masks(&back, &mask);
    rp.check(back.margin_is_clear(), "margin clear after read");
    let _ = std::fs::remove_file(&path);

    // --- Test 3: Missing file ---
    let missing = read_raster(temp_path("does_not_exist.png"));
    rp.check(matches!(missing, Err(IoError::Io(_))), "missing file is an io error");

    assert!(rp.cleanup(), "pngio regression test failed");
}
