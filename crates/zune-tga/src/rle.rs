/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Run length decoding for TGA image types 9, 10 and 11
//!
//! Pixel data is a sequence of packets, each starting with a header byte.
//! The low 7 bits plus one give the number of pixels in the packet.
//! If the high bit is set the packet is a run, a single pixel follows and
//! is repeated, otherwise that many pixels follow verbatim.

use alloc::vec;
use alloc::vec::Vec;

use zune_core::log::warn;

use crate::constants::{RLE_COUNT_MASK, RLE_PACKET_FLAG};
use crate::errors::TgaDecodeErrors;

/// Expand RLE packets in `data` into exactly `output_size` bytes
///
/// # Arguments
/// - `data`: Encoded bytes, starting at the first packet header
/// - `pixel_size`: Bytes per pixel record, between 1 and 4
/// - `output_size`: Number of bytes to produce
/// - `strict`: Whether damaged streams are an error
///
/// A stream that ends early leaves the remaining output zeroed and
/// a packet running past the end of the output is clamped, both are
/// errors in strict mode.
pub(crate) fn decode_rle(
    data: &[u8], pixel_size: usize, output_size: usize, strict: bool
) -> Result<Vec<u8>, TgaDecodeErrors> {
    debug_assert!((1..=4).contains(&pixel_size));

    let mut output = vec![0_u8; output_size];
    let mut pixel = [0_u8; 4];
    let mut position = 0;
    let mut offset = 0;
    let mut overrun = false;

    while position < output_size {
        let Some(&packet) = data.get(offset) else {
            break;
        };
        offset += 1;

        let packet_length = (usize::from(packet & RLE_COUNT_MASK) + 1) * pixel_size;
        let remaining = output_size - position;

        if packet_length > remaining {
            overrun = true;
        }
        let length = packet_length.min(remaining);

        if packet & RLE_PACKET_FLAG != 0 {
            let pixel = &mut pixel[..pixel_size];
            copy_or_zero(data, offset, pixel);
            offset += pixel_size;

            for chunk in output[position..position + length].chunks_mut(pixel_size) {
                chunk.copy_from_slice(&pixel[..chunk.len()]);
            }
        } else {
            copy_or_zero(data, offset, &mut output[position..position + length]);
            // source advances by the full packet even when the output was clamped
            offset += packet_length;
        }
        position += length;
    }

    if overrun {
        if strict {
            return Err(TgaDecodeErrors::BadRle);
        }
        warn!("RLE packet runs past the end of the image, clamping");
    }

    if offset > data.len() || position < output_size {
        if strict {
            // an unfinished image needs at least one more packet header
            let needed = if position < output_size {
                offset.max(data.len()) + 1
            } else {
                offset
            };
            return Err(TgaDecodeErrors::TruncatedData(needed, data.len()));
        }
        warn!("RLE stream ended early, filling remaining pixels with zeroes");
    }

    Ok(output)
}

/// Copy `out.len()` bytes starting at `offset`, bytes past the
/// end of `data` are written as zero
pub(crate) fn copy_or_zero(data: &[u8], offset: usize, out: &mut [u8]) {
    let available = data.get(offset..).unwrap_or(&[]);
    let count = available.len().min(out.len());

    out[..count].copy_from_slice(&available[..count]);
    out[count..].fill(0);
}
