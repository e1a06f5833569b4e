/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use core::fmt::{Debug, Display, Formatter};

/// Errors that can occur when loading or converting a TGA image
#[non_exhaustive]
pub enum TgaDecodeErrors {
    /// Input is shorter than the 18 byte fixed header
    TruncatedHeader,
    /// Header image type is `NoData`
    EmptyImage,
    /// Header image type is not one of the known codes
    UnsupportedImageType(u8),
    /// Color map type is set but the image type is not indexed
    UnexpectedColorMap,
    /// Indexed image with more than 256 entries, a palette depth
    /// other than 24 or a color map type other than 1
    InvalidColorMap,
    /// Width or height is zero
    InvalidDimensions,
    /// Pixel depth is not 8, 16, 24 or 32
    InvalidPixelDepth(u8),
    /// Dimensions exceed configured limits
    ///
    /// # Arguments
    /// - 1st argument is the dimension name
    /// - 2nd argument is the configured limit
    /// - 3rd argument is the value found in the header
    TooLargeDimensions(&'static str, usize, usize),
    /// Nothing follows the header and image ID field
    NoImageData,
    /// Palette or pixel data ends before the image is complete
    ///
    /// Only returned in strict mode
    TruncatedData(usize, usize),
    /// A run length packet expands past the end of the image
    ///
    /// Only returned in strict mode
    BadRle,
    /// The output buffer is too small, expected at least
    /// a size but got another size
    TooSmallOutput(usize, usize),
    /// A size calculation overflowed
    OverflowOccurred,
    /// Pixels were requested before a successful load
    NotLoaded,
    #[cfg(feature = "std")]
    IoErrors(std::io::Error)
}

impl Debug for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TruncatedHeader => {
                writeln!(f, "Not enough data to contain a TGA header")
            }
            Self::EmptyImage => {
                writeln!(f, "TGA header indicates the file is empty")
            }
            Self::UnsupportedImageType(code) => {
                writeln!(f, "Unsupported image type {code}")
            }
            Self::UnexpectedColorMap => {
                writeln!(f, "Color map type is set but the image is not indexed")
            }
            Self::InvalidColorMap => {
                writeln!(f, "Invalid color map for indexed type")
            }
            Self::InvalidDimensions => {
                writeln!(f, "Invalid image dimensions")
            }
            Self::InvalidPixelDepth(depth) => {
                writeln!(
                    f,
                    "Invalid pixel depth {depth}, expected one of 8, 16, 24 or 32"
                )
            }
            Self::TooLargeDimensions(dimension, expected, found) => {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Self::NoImageData => {
                writeln!(f, "No TGA image data found")
            }
            Self::TruncatedData(expected, found) => {
                writeln!(
                    f,
                    "Truncated image data, expected {expected} bytes but found {found}"
                )
            }
            Self::BadRle => {
                writeln!(f, "Bad RLE, packet runs past the end of the image")
            }
            Self::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
            Self::OverflowOccurred => {
                writeln!(f, "Overflow occurred")
            }
            Self::NotLoaded => {
                writeln!(f, "TGA data has not been loaded")
            }
            #[cfg(feature = "std")]
            Self::IoErrors(err) => {
                writeln!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for TgaDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TgaDecodeErrors {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoErrors(err) => Some(err),
            _ => None
        }
    }
}

#[cfg(feature = "std")]
impl From<std::io::Error> for TgaDecodeErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}
