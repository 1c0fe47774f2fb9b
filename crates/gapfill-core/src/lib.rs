//! gapfill-core - Basic data structures for gap-aware seeded filling
//!
//! This crate provides the fundamental data structures used throughout
//! the gapfill workspace:
//!
//! - [`Raster`] / [`RasterMut`] - 32-bit color image (immutable / mutable)
//! - [`Mask`] - Binary mask with a permanent one-cell background margin
//! - [`SeedPoint`] - Signed (row, column) seed coordinate
//!
//! # Example
//!
//! ```
//! use gapfill_core::{Mask, Raster, SeedPoint};
//!
//! let raster = Raster::new(64, 48).unwrap();
//! assert_eq!(raster.width(), 64);
//!
//! let seed = SeedPoint::new(10, 20);
//! assert_eq!(seed.to_xy(raster.width(), raster.height()), Some((20, 10)));
//!
//! let mask = Mask::new(64, 48).unwrap();
//! assert_eq!(mask.count(), 0);
//! ```

pub mod error;
pub mod mask;
pub mod point;
pub mod raster;

pub use error::{Error, Result};
pub use mask::Mask;
pub use point::SeedPoint;
pub use raster::{Raster, RasterMut, filled_disk_offsets};

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque white
    pub const WHITE: u32 = 0xFFFF_FFFF;
    /// Opaque black
    pub const BLACK: u32 = 0x0000_00FF;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Extract alpha component from a 32-bit pixel.
    #[inline]
    pub fn alpha(pixel: u32) -> u8 {
        ((pixel >> ALPHA_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        compose_rgba(r, g, b, 255)
    }

    /// Compose a 32-bit RGBA pixel.
    #[inline]
    pub fn compose_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | ((a as u32) << ALPHA_SHIFT)
    }

    /// Extract RGBA values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgba(pixel: u32) -> (u8, u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel), alpha(pixel))
    }

}
