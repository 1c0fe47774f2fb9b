//! gapfill-io - PNG I/O for rasters and fill masks
//!
//! The drawing canvas is read and written as a [`Raster`]; the result of a
//! fill is saved as an 8-bit grayscale stencil (foreground 255).
//!
//! # Example
//!
//! ```
//! use gapfill_core::Mask;
//! use gapfill_io::{read_mask_png, write_mask_png};
//! use std::io::Cursor;
//!
//! let mask = Mask::from_fn(8, 8, |x, _| x < 4).unwrap();
//! let mut buffer = Vec::new();
//! write_mask_png(&mask, &mut buffer).unwrap();
//! assert_eq!(read_mask_png(Cursor::new(buffer)).unwrap(), mask);
//! ```

mod error;
pub mod png;

pub use error::{IoError, IoResult};
pub use png::{
    MASK_OFF, MASK_ON, read_mask_png, read_raster_png, write_mask_png, write_raster_png,
};

use gapfill_core::{Mask, Raster};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Read a PNG file into a raster.
pub fn read_raster<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let file = File::open(path)?;
    read_raster_png(BufReader::new(file))
}

/// Write a raster to a PNG file.
pub fn write_raster<P: AsRef<Path>>(raster: &Raster, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_raster_png(raster, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a PNG file as a mask.
pub fn read_mask<P: AsRef<Path>>(path: P) -> IoResult<Mask> {
    let file = File::open(path)?;
    read_mask_png(BufReader::new(file))
}

/// Write a mask to a grayscale PNG file.
pub fn write_mask<P: AsRef<Path>>(mask: &Mask, path: P) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_mask_png(mask, &mut writer)?;
    writer.flush()?;
    Ok(())
}
