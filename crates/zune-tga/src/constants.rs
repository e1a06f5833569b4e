/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Size of the fixed header, the image ID field follows it
pub const TGA_HEADER_SIZE: usize = 18;

pub const TGA_ORIGIN_MASK: u8 = 0x30;
pub const TGA_ORIGIN_SHIFT: u8 = 4;

/// High bit of a packet header, set for run-length packets
pub const RLE_PACKET_FLAG: u8 = 0x80;
/// Low bits of a packet header, pixel count minus one
pub const RLE_COUNT_MASK: u8 = 0x7F;

pub const MAX_PALETTE_ENTRIES: u16 = 256;
pub const PALETTE_DEPTH: u8 = 24;
