/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! TGA header parsing and validation
//!
//! Every TGA file starts with a fixed 18 byte header, all multi-byte
//! fields are little endian.
//!
//! ```text
//! 0x00 BYTE  id length
//! 0x01 BYTE  color map type
//! 0x02 BYTE  image type
//! 0x03 WORD  color map index
//! 0x05 WORD  color map length
//! 0x07 BYTE  color map depth
//! 0x08 WORD  x offset
//! 0x0a WORD  y offset
//! 0x0c WORD  width
//! 0x0e WORD  height
//! 0x10 BYTE  pixel depth
//! 0x11 BYTE  flags
//! ```
//!
//! The header is followed by the image ID field (`id length` bytes),
//! the palette for indexed images and finally the pixel data.

use zune_core::bytestream::ZByteReader;
use zune_core::log::trace;
use zune_core::options::DecoderOptions;

use crate::constants::{
    MAX_PALETTE_ENTRIES, PALETTE_DEPTH, TGA_HEADER_SIZE, TGA_ORIGIN_MASK, TGA_ORIGIN_SHIFT
};
use crate::errors::TgaDecodeErrors;

/// Image types a TGA header can declare
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TgaImageType {
    NoData,
    Indexed,
    TrueColor,
    Greyscale,
    RleIndexed,
    RleTrueColor,
    RleGreyscale
}

impl TgaImageType {
    pub const fn from_u8(code: u8) -> Option<TgaImageType> {
        match code {
            0 => Some(TgaImageType::NoData),
            1 => Some(TgaImageType::Indexed),
            2 => Some(TgaImageType::TrueColor),
            3 => Some(TgaImageType::Greyscale),
            9 => Some(TgaImageType::RleIndexed),
            10 => Some(TgaImageType::RleTrueColor),
            11 => Some(TgaImageType::RleGreyscale),
            _ => None
        }
    }

    pub const fn to_u8(self) -> u8 {
        match self {
            TgaImageType::NoData => 0,
            TgaImageType::Indexed => 1,
            TgaImageType::TrueColor => 2,
            TgaImageType::Greyscale => 3,
            TgaImageType::RleIndexed => 9,
            TgaImageType::RleTrueColor => 10,
            TgaImageType::RleGreyscale => 11
        }
    }

    /// Whether pixel data is run length encoded
    pub const fn has_encoding(self) -> bool {
        matches!(
            self,
            TgaImageType::RleIndexed | TgaImageType::RleTrueColor | TgaImageType::RleGreyscale
        )
    }

    /// Whether pixels are indexes into a palette
    pub const fn has_color_map(self) -> bool {
        matches!(self, TgaImageType::Indexed | TgaImageType::RleIndexed)
    }

    pub const fn is_grey_color(self) -> bool {
        matches!(self, TgaImageType::Greyscale | TgaImageType::RleGreyscale)
    }
}

/// Corner of the image the first stored scan-line belongs to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TgaOrigin {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight
}

impl TgaOrigin {
    /// Extract the origin from bits 4 and 5 of the header flags
    pub const fn from_flags(flags: u8) -> TgaOrigin {
        match (flags & TGA_ORIGIN_MASK) >> TGA_ORIGIN_SHIFT {
            0 => TgaOrigin::BottomLeft,
            1 => TgaOrigin::BottomRight,
            2 => TgaOrigin::TopLeft,
            _ => TgaOrigin::TopRight
        }
    }

    pub const fn is_top(self) -> bool {
        matches!(self, TgaOrigin::TopLeft | TgaOrigin::TopRight)
    }

    pub const fn is_left(self) -> bool {
        matches!(self, TgaOrigin::TopLeft | TgaOrigin::BottomLeft)
    }
}

/// The fixed TGA header
///
/// A header is only handed out after it passed validation, see
/// [`TgaHeader::parse`]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TgaHeader {
    pub id_length:        u8,
    pub color_map_type:   u8,
    pub image_type:       TgaImageType,
    pub color_map_index:  u16,
    pub color_map_length: u16,
    pub color_map_depth:  u8,
    /// Origin offsets, kept for completeness, they do not
    /// influence pixel placement
    pub offset_x:         u16,
    pub offset_y:         u16,
    pub width:            u16,
    pub height:           u16,
    pub pixel_depth:      u8,
    pub flags:            u8
}

impl TgaHeader {
    /// Read and validate the fixed header at the start of `data`
    ///
    /// # Arguments
    /// - `data`: The whole file, only the first 18 bytes are read
    /// - `options`: Limits the header dimensions are checked against
    ///
    /// # Returns
    /// - On success: A validated header
    /// - On error: [`TgaDecodeErrors::UnsupportedImageType`] for an image type
    ///   code outside 0, 1, 2, 3, 9, 10 and 11, otherwise the first check
    ///   that failed, see [`validate`](Self::validate)
    pub fn parse(data: &[u8], options: &DecoderOptions) -> Result<TgaHeader, TgaDecodeErrors> {
        if data.len() < TGA_HEADER_SIZE {
            return Err(TgaDecodeErrors::TruncatedHeader);
        }
        // length was confirmed above so use the non failing routines
        let mut stream = ZByteReader::new(&data[..TGA_HEADER_SIZE]);

        let id_length = stream.get_u8();
        let color_map_type = stream.get_u8();
        let image_type_code = stream.get_u8();
        let color_map_index = stream.get_u16_le();
        let color_map_length = stream.get_u16_le();
        let color_map_depth = stream.get_u8();
        let offset_x = stream.get_u16_le();
        let offset_y = stream.get_u16_le();
        let width = stream.get_u16_le();
        let height = stream.get_u16_le();
        let pixel_depth = stream.get_u8();
        let flags = stream.get_u8();

        let image_type = TgaImageType::from_u8(image_type_code)
            .ok_or(TgaDecodeErrors::UnsupportedImageType(image_type_code))?;

        let header = TgaHeader {
            id_length,
            color_map_type,
            image_type,
            color_map_index,
            color_map_length,
            color_map_depth,
            offset_x,
            offset_y,
            width,
            height,
            pixel_depth,
            flags
        };
        header.validate(options)?;

        trace!("Image width: {}", header.width);
        trace!("Image height: {}", header.height);
        trace!("Image type: {:?}", header.image_type);
        trace!("Pixel depth: {}", header.pixel_depth);
        trace!("Origin: {:?}", header.origin());

        Ok(header)
    }

    /// Check that the header describes an image we can decode
    ///
    /// The image type itself was already checked by [`parse`](Self::parse),
    /// unknown codes fail there with
    /// [`TgaDecodeErrors::UnsupportedImageType`].
    ///
    /// Checks run in order and the first failure is returned
    /// - image type is not `NoData`
    /// - color map type is only set for indexed images
    /// - indexed images have at most 256 24-bit palette entries
    /// - width and height are non-zero
    /// - pixel depth is one of 8, 16, 24 or 32
    /// - width and height are within the configured limits
    pub fn validate(&self, options: &DecoderOptions) -> Result<(), TgaDecodeErrors> {
        if self.image_type == TgaImageType::NoData {
            return Err(TgaDecodeErrors::EmptyImage);
        }

        if !self.has_color_map() && self.color_map_type != 0 {
            return Err(TgaDecodeErrors::UnexpectedColorMap);
        }

        if self.has_color_map()
            && (self.color_map_length > MAX_PALETTE_ENTRIES
                || self.color_map_depth != PALETTE_DEPTH
                || self.color_map_type != 1)
        {
            return Err(TgaDecodeErrors::InvalidColorMap);
        }

        if self.width == 0 || self.height == 0 {
            return Err(TgaDecodeErrors::InvalidDimensions);
        }

        if !matches!(self.pixel_depth, 8 | 16 | 24 | 32) {
            return Err(TgaDecodeErrors::InvalidPixelDepth(self.pixel_depth));
        }

        if usize::from(self.width) > options.get_max_width() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "width",
                options.get_max_width(),
                usize::from(self.width)
            ));
        }

        if usize::from(self.height) > options.get_max_height() {
            return Err(TgaDecodeErrors::TooLargeDimensions(
                "height",
                options.get_max_height(),
                usize::from(self.height)
            ));
        }
        Ok(())
    }

    pub const fn has_encoding(&self) -> bool {
        self.image_type.has_encoding()
    }

    pub const fn has_color_map(&self) -> bool {
        self.image_type.has_color_map()
    }

    pub const fn is_grey_color(&self) -> bool {
        self.image_type.is_grey_color()
    }

    pub const fn origin(&self) -> TgaOrigin {
        TgaOrigin::from_flags(self.flags)
    }

    /// Size of the palette in bytes, zero for images without one
    pub fn palette_size(&self) -> usize {
        if self.has_color_map() {
            usize::from(self.color_map_length) * usize::from(self.color_map_depth >> 3)
        } else {
            0
        }
    }

    /// Offset of the first byte after the image ID field
    pub fn data_offset(&self) -> usize {
        TGA_HEADER_SIZE + usize::from(self.id_length)
    }
}

/// Probe some bytes to see if they hold a TGA image
///
/// TGA has no magic bytes so this parses and validates the
/// header and confirms data follows it
pub fn probe_tga(bytes: &[u8]) -> bool {
    let options = DecoderOptions::default()
        .set_max_width(usize::MAX)
        .set_max_height(usize::MAX);

    match TgaHeader::parse(bytes, &options) {
        Ok(header) => header.data_offset() < bytes.len(),
        Err(_) => false
    }
}
