/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use xxhash_rust::xxh3::xxh3_128;

mod tga;

/// Pixel layouts the sample builder knows how to write
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SampleKind {
    Indexed,
    Grey8,
    Grey16,
    True16,
    True24,
    True32
}

impl SampleKind {
    pub const ALL: [SampleKind; 6] = [
        SampleKind::Indexed,
        SampleKind::Grey8,
        SampleKind::Grey16,
        SampleKind::True16,
        SampleKind::True24,
        SampleKind::True32
    ];

    pub const fn depth(self) -> u8 {
        match self {
            SampleKind::Indexed | SampleKind::Grey8 => 8,
            SampleKind::Grey16 | SampleKind::True16 => 16,
            SampleKind::True24 => 24,
            SampleKind::True32 => 32
        }
    }

    /// Image type code for the raw or RLE variant
    pub const fn image_type(self, rle: bool) -> u8 {
        let code = match self {
            SampleKind::Indexed => 1,
            SampleKind::Grey8 | SampleKind::Grey16 => 3,
            _ => 2
        };
        if rle {
            code + 8
        } else {
            code
        }
    }
}

/// A synthetic TGA image, pixels are kept in stored order
pub struct Sample {
    pub kind:   SampleKind,
    pub width:  u16,
    pub height: u16,
    pub origin: u8,
    pub pixels: Vec<u8>
}

impl Sample {
    /// Build an image whose rows are made of short runs so both
    /// RLE packet kinds appear when encoded
    pub fn striped(kind: SampleKind, width: u16, height: u16, origin: u8) -> Sample {
        let size = usize::from(kind.depth() / 8);
        let mut pixels = Vec::new();

        for y in 0..height {
            for x in 0..width {
                let value = if x % 7 < 3 { y as u8 } else { (x * 31 + y) as u8 };
                pixels.extend(core::iter::repeat(value).take(size));
            }
        }
        Sample {
            kind,
            width,
            height,
            origin,
            pixels
        }
    }

    fn header(&self, rle: bool) -> Vec<u8> {
        let indexed = self.kind == SampleKind::Indexed;
        let mut header = vec![0_u8; 18];

        header[1] = u8::from(indexed);
        header[2] = self.kind.image_type(rle);
        if indexed {
            header[5..7].copy_from_slice(&256_u16.to_le_bytes());
            header[7] = 24;
        }
        header[12..14].copy_from_slice(&self.width.to_le_bytes());
        header[14..16].copy_from_slice(&self.height.to_le_bytes());
        header[16] = self.kind.depth();
        header[17] = self.origin << 4;

        if indexed {
            // palette entry i is (i, 255-i, i/2) in BGR order
            for i in 0..=255_u8 {
                header.extend_from_slice(&[i, 255 - i, i / 2]);
            }
        }
        header
    }

    /// Encode with uncompressed pixels
    pub fn encode_raw(&self) -> Vec<u8> {
        let mut file = self.header(false);
        file.extend_from_slice(&self.pixels);
        file
    }

    /// Encode with run length packets, runs of two or more pixels become
    /// run packets and everything else raw packets
    pub fn encode_rle(&self) -> Vec<u8> {
        let size = usize::from(self.kind.depth() / 8);
        let pixels: Vec<&[u8]> = self.pixels.chunks_exact(size).collect();
        let mut file = self.header(true);

        let mut i = 0;
        while i < pixels.len() {
            let mut run = 1;
            while i + run < pixels.len() && run < 128 && pixels[i + run] == pixels[i] {
                run += 1;
            }
            if run > 1 {
                file.push(0x80 | (run - 1) as u8);
                file.extend_from_slice(pixels[i]);
                i += run;
                continue;
            }
            let start = i;
            while i < pixels.len()
                && i - start < 128
                && (i + 1 == pixels.len() || pixels[i + 1] != pixels[i])
            {
                i += 1;
            }
            file.push((i - start - 1) as u8);
            for px in &pixels[start..i] {
                file.extend_from_slice(px);
            }
        }
        file
    }
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}
