//! PNG image format support
//!
//! Rasters are read from any PNG layout the decoder can expand to 8-bit
//! gray, gray + alpha, RGB or RGBA, and written back as 8-bit RGBA. Masks
//! are written as 8-bit grayscale with foreground 255 and background 0,
//! the form consumed as a fill stencil.

use crate::{IoError, IoResult};
use gapfill_core::{Mask, Raster, color};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Gray value written for foreground mask pixels
pub const MASK_ON: u8 = 255;
/// Gray value written for background mask pixels
pub const MASK_OFF: u8 = 0;

/// Read a PNG image into a raster
pub fn read_raster_png<R: BufRead + Seek>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let samples = match (output_info.color_type, output_info.bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        (color_type, bit_depth) => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {:?} {:?}",
                color_type, bit_depth
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    let mut pixels = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height as usize {
        let row = &data[y * bytes_per_row..];
        for x in 0..width as usize {
            let px = &row[x * samples..x * samples + samples];
            let pixel = match samples {
                1 => color::compose_rgb(px[0], px[0], px[0]),
                2 => color::compose_rgba(px[0], px[0], px[0], px[1]),
                3 => color::compose_rgb(px[0], px[1], px[2]),
                _ => color::compose_rgba(px[0], px[1], px[2], px[3]),
            };
            pixels.push(pixel);
        }
    }

    Ok(Raster::from_data(width, height, pixels)?)
}

/// Write a raster as an 8-bit RGBA PNG
pub fn write_raster_png<W: Write>(raster: &Raster, writer: W) -> IoResult<()> {
    let mut data = Vec::with_capacity(raster.data().len() * 4);
    for &pixel in raster.data() {
        let (r, g, b, a) = color::extract_rgba(pixel);
        data.extend_from_slice(&[r, g, b, a]);
    }
    encode(
        writer,
        raster.width(),
        raster.height(),
        ColorType::Rgba,
        &data,
    )
}

/// Write a mask as an 8-bit grayscale PNG (foreground 255, background 0)
pub fn write_mask_png<W: Write>(mask: &Mask, writer: W) -> IoResult<()> {
    let data = mask.to_gray_bytes(MASK_ON, MASK_OFF);
    encode(
        writer,
        mask.width(),
        mask.height(),
        ColorType::Grayscale,
        &data,
    )
}

/// Read a PNG as a mask: any pixel with a nonzero color channel is
/// foreground; alpha is ignored.
pub fn read_mask_png<R: BufRead + Seek>(reader: R) -> IoResult<Mask> {
    let raster = read_raster_png(reader)?;
    let mask = Mask::from_fn(raster.width(), raster.height(), |x, y| {
        (raster.get_pixel_unchecked(x, y) >> color::BLUE_SHIFT) != 0
    })?;
    Ok(mask)
}

fn encode<W: Write>(
    writer: W,
    width: u32,
    height: u32,
    color_type: ColorType,
    data: &[u8],
) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
