/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Conversion of stored TGA pixels to RGBA
//!
//! Source pixels are always consumed front to back, the scan order decides
//! where each one lands in the output so that the output is top-left origin
//! whatever corner the file was written from.

use crate::header::{TgaHeader, TgaOrigin};

/// Layout of a stored pixel
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PixelFormat {
    /// One byte index into a BGR palette
    Indexed8,
    Grey8,
    /// Grey value followed by alpha
    Grey16,
    /// Little endian `ARRRRRGG GGGBBBBB`
    True16,
    /// BGR
    True24,
    /// BGRA
    True32
}

impl PixelFormat {
    /// Pick the stored layout for a validated header
    pub const fn from_header(header: &TgaHeader) -> PixelFormat {
        match header.pixel_depth {
            8 => {
                if header.is_grey_color() {
                    PixelFormat::Grey8
                } else {
                    PixelFormat::Indexed8
                }
            }
            16 => {
                if header.is_grey_color() {
                    PixelFormat::Grey16
                } else {
                    PixelFormat::True16
                }
            }
            24 => PixelFormat::True24,
            _ => PixelFormat::True32
        }
    }

    /// Number of source bytes consumed per pixel
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            PixelFormat::Indexed8 | PixelFormat::Grey8 => 1,
            PixelFormat::Grey16 | PixelFormat::True16 => 2,
            PixelFormat::True24 => 3,
            PixelFormat::True32 => 4
        }
    }
}

/// Destination traversal for source pixels
///
/// Rows run from `y_start` towards `y_end` (exclusive) in steps of `y_step`,
/// columns likewise.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ScanOrder {
    pub y_start: isize,
    pub y_step:  isize,
    pub y_end:   isize,
    pub x_start: isize,
    pub x_step:  isize,
    pub x_end:   isize
}

impl ScanOrder {
    pub fn new(origin: TgaOrigin, width: usize, height: usize) -> ScanOrder {
        let width = width as isize;
        let height = height as isize;

        let (y_start, y_step, y_end) = if origin.is_top() {
            (0, 1, height)
        } else {
            (height - 1, -1, -1)
        };

        let (x_start, x_step, x_end) = if origin.is_left() {
            (0, 1, width)
        } else {
            (width - 1, -1, -1)
        };

        ScanOrder {
            y_start,
            y_step,
            y_end,
            x_start,
            x_step,
            x_end
        }
    }
}

/// Convert stored pixels into `output` as RGBA
///
/// # Arguments
/// - `format`: Layout of the stored pixels
/// - `pixels`: Stored pixels, raw or RLE expanded
/// - `palette`: BGR palette, only read by [`PixelFormat::Indexed8`]
/// - `width`: Image width in pixels
/// - `scan`: Where consecutive source pixels land in the output
/// - `output`: At least `width*height*4` bytes, every pixel is overwritten
///
/// Missing source bytes and palette entries read as zero.
///
/// # Panics
/// If `output` is too small or `scan` addresses pixels outside
/// `width*height`, a scan from [`ScanOrder::new`] never does.
pub fn convert_to_rgba(
    format: PixelFormat, pixels: &[u8], palette: &[u8], width: usize, scan: ScanOrder,
    output: &mut [u8]
) {
    match format {
        PixelFormat::Indexed8 => scan_pixels(pixels, width, scan, output, |[index]: [u8; 1]| {
            let idx = usize::from(index) * 3;
            let entry = |i: usize| palette.get(idx + i).copied().unwrap_or(0);

            [entry(2), entry(1), entry(0), 255]
        }),
        PixelFormat::Grey8 => {
            scan_pixels(pixels, width, scan, output, |[v]: [u8; 1]| [v, v, v, 255])
        }
        PixelFormat::Grey16 => scan_pixels(pixels, width, scan, output, |[v, a]: [u8; 2]| {
            [v, v, v, a]
        }),
        PixelFormat::True16 => scan_pixels(pixels, width, scan, output, |bytes: [u8; 2]| {
            let color = u16::from_le_bytes(bytes);
            // channels are shifted into the high bits without
            // replicating them into the low ones
            let r = ((color & 0x7C00) >> 7) as u8;
            let g = ((color & 0x03E0) >> 2) as u8;
            let b = ((color & 0x001F) >> 3) as u8;
            let a = if color & 0x8000 != 0 { 0 } else { 255 };

            [r, g, b, a]
        }),
        PixelFormat::True24 => scan_pixels(pixels, width, scan, output, |[b, g, r]: [u8; 3]| {
            [r, g, b, 255]
        }),
        PixelFormat::True32 => {
            scan_pixels(pixels, width, scan, output, |[b, g, r, a]: [u8; 4]| {
                [r, g, b, a]
            })
        }
    }
}

fn scan_pixels<const SIZE: usize, F>(
    pixels: &[u8], width: usize, scan: ScanOrder, output: &mut [u8], convert: F
) where
    F: Fn([u8; SIZE]) -> [u8; 4]
{
    let mut source = pixels.chunks(SIZE);

    let mut y = scan.y_start;
    while y != scan.y_end {
        let mut x = scan.x_start;
        while x != scan.x_end {
            let mut px = [0_u8; SIZE];

            if let Some(chunk) = source.next() {
                px[..chunk.len()].copy_from_slice(chunk);
            }
            let offset = (x as usize + width * y as usize) * 4;
            output[offset..offset + 4].copy_from_slice(&convert(px));

            x += scan.x_step;
        }
        y += scan.y_step;
    }
}
