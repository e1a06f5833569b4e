/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec;
use alloc::vec::Vec;

use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::log::{trace, warn};
use zune_core::options::DecoderOptions;

use crate::convert::{convert_to_rgba, PixelFormat, ScanOrder};
use crate::errors::TgaDecodeErrors;
use crate::header::TgaHeader;
use crate::rle::{copy_or_zero, decode_rle};
use crate::sink::RasterSink;

/// Everything kept from a successfully loaded file
struct DecodedImage {
    header:  TgaHeader,
    /// BGR entries, present iff the header has a color map
    palette: Option<Vec<u8>>,
    /// Stored pixels with any RLE already expanded
    pixels:  Vec<u8>
}

/// A TGA image
///
/// The image starts out empty, [`load`](Self::load) parses a whole file and
/// afterwards pixels can be requested as often as needed.
///
/// A failed load never touches the image, if a previous load succeeded its
/// contents remain available.
///
/// # Example
/// ```no_run
/// use zune_tga::TgaImage;
///
/// fn main() -> Result<(), zune_tga::TgaDecodeErrors> {
///     let data = std::fs::read("image.tga")?;
///     let mut image = TgaImage::new();
///     image.load(&data)?;
///
///     let header = image.header()?;
///     println!("Image width: {}\t Image height: {}", header.width, header.height);
///
///     let pixels = image.to_rgba()?;
///     println!("Pixels length: {}", pixels.len());
///     Ok(())
/// }
/// ```
pub struct TgaImage {
    options: DecoderOptions,
    image:   Option<DecodedImage>
}

impl Default for TgaImage {
    fn default() -> Self {
        TgaImage::new()
    }
}

impl TgaImage {
    /// Create an empty image that decodes leniently
    ///
    /// Any width and height a TGA header can hold is accepted and
    /// truncated or overrunning pixel data is zero filled.
    pub fn new() -> TgaImage {
        let options = DecoderOptions::default()
            .set_strict_mode(false)
            .set_max_width(usize::from(u16::MAX))
            .set_max_height(usize::from(u16::MAX));

        TgaImage::new_with_options(options)
    }

    /// Create an empty image that decodes with specified options
    ///
    /// Respected options are
    /// - maximum width and height
    /// - strict mode, which turns truncated and malformed pixel data into
    ///   errors instead of zero filling it
    ///
    /// Note that `DecoderOptions::default()` has strict mode on and
    /// limits dimensions to 16384, use [`new`](Self::new) for the
    /// lenient defaults.
    ///
    /// # Example
    /// ```
    /// use zune_core::options::DecoderOptions;
    /// use zune_tga::TgaImage;
    ///
    /// let options = DecoderOptions::default()
    ///     .set_max_width(1024)
    ///     .set_max_height(1024);
    /// let image = TgaImage::new_with_options(options);
    /// assert!(!image.is_loaded());
    /// ```
    pub fn new_with_options(options: DecoderOptions) -> TgaImage {
        TgaImage {
            options,
            image: None
        }
    }

    /// Parse a complete TGA file
    ///
    /// The header is validated, the palette extracted and RLE pixel data
    /// expanded. Conversion to RGBA happens in [`to_rgba`](Self::to_rgba).
    ///
    /// # Returns
    /// - On success: Nothing, the image is loaded
    /// - On error: Why the file could not be loaded, the image keeps
    ///   whatever state it had before the call
    pub fn load(&mut self, data: &[u8]) -> Result<(), TgaDecodeErrors> {
        let decoded = self.decode_image(data)?;
        self.image = Some(decoded);
        Ok(())
    }

    /// Read a file from disk and [`load`](Self::load) it
    #[cfg(feature = "std")]
    pub fn load_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<(), TgaDecodeErrors> {
        let data = std::fs::read(path)?;
        self.load(&data)
    }

    fn decode_image(&self, data: &[u8]) -> Result<DecodedImage, TgaDecodeErrors> {
        let header = TgaHeader::parse(data, &self.options)?;
        let strict = self.options.get_strict_mode();

        let mut offset = header.data_offset();

        if offset >= data.len() {
            return Err(TgaDecodeErrors::NoImageData);
        }

        let palette = if header.has_color_map() {
            let size = header.palette_size();
            let mut palette = vec![0; size];

            if offset + size > data.len() {
                if strict {
                    return Err(TgaDecodeErrors::TruncatedData(offset + size, data.len()));
                }
                warn!("Palette is truncated, missing entries are black");
            }
            copy_or_zero(data, offset, &mut palette);
            offset += size;

            Some(palette)
        } else {
            None
        };

        let format = PixelFormat::from_header(&header);
        let image_size = usize::from(header.width) * usize::from(header.height);
        let pixel_total = image_size
            .checked_mul(format.bytes_per_pixel())
            .ok_or(TgaDecodeErrors::OverflowOccurred)?;

        let remaining = data.get(offset..).unwrap_or(&[]);

        let pixels = if header.has_encoding() {
            trace!("Expanding RLE pixel data");
            decode_rle(remaining, format.bytes_per_pixel(), pixel_total, strict)?
        } else {
            let size = if header.has_color_map() {
                image_size
            } else {
                pixel_total
            };

            if remaining.len() < size {
                if strict {
                    return Err(TgaDecodeErrors::TruncatedData(size, remaining.len()));
                }
                warn!(
                    "Pixel data is truncated, expected {} bytes but found {}",
                    size,
                    remaining.len()
                );
            }
            remaining[..size.min(remaining.len())].to_vec()
        };

        Ok(DecodedImage {
            header,
            palette,
            pixels
        })
    }

    /// Whether a file has been loaded successfully
    pub const fn is_loaded(&self) -> bool {
        self.image.is_some()
    }

    fn loaded(&self) -> Result<&DecodedImage, TgaDecodeErrors> {
        self.image.as_ref().ok_or(TgaDecodeErrors::NotLoaded)
    }

    /// Return the header of the loaded file
    pub fn header(&self) -> Result<&TgaHeader, TgaDecodeErrors> {
        Ok(&self.loaded()?.header)
    }

    /// Return the BGR palette, or `None` if nothing is loaded or the
    /// image is not indexed
    pub fn palette(&self) -> Option<&[u8]> {
        self.image.as_ref()?.palette.as_deref()
    }

    /// Return the width and height of the image
    ///
    /// Or none if nothing is loaded
    pub fn dimensions(&self) -> Option<(usize, usize)> {
        let header = &self.image.as_ref()?.header;
        Some((usize::from(header.width), usize::from(header.height)))
    }

    /// Return the output colorspace, or none if nothing is loaded
    ///
    /// This is always [`ColorSpace::RGBA`], every pixel format is
    /// expanded to it
    pub fn colorspace(&self) -> Option<ColorSpace> {
        self.image.as_ref().map(|_| ColorSpace::RGBA)
    }

    /// Return the output bit depth
    ///
    /// This is always 8
    pub const fn depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the number of bytes needed to hold the RGBA output
    ///
    /// # Returns
    /// - `Some(usize)`: `width*height*4`
    /// - `None`: Nothing is loaded or the calculation overflowed
    pub fn output_buffer_size(&self) -> Option<usize> {
        let (width, height) = self.dimensions()?;

        width
            .checked_mul(height)?
            .checked_mul(ColorSpace::RGBA.num_components())
    }

    /// Convert the loaded image to a top-left origin RGBA buffer
    ///
    /// This doesn't modify the image and can be called repeatedly
    ///
    /// # Returns
    /// - On success: `width*height*4` bytes
    /// - On error: [`TgaDecodeErrors::NotLoaded`] if nothing is loaded
    pub fn to_rgba(&self) -> Result<Vec<u8>, TgaDecodeErrors> {
        let size = self.loaded_output_size()?;
        let mut output = vec![0; size];

        self.to_rgba_into(&mut output)?;

        Ok(output)
    }

    /// Convert the loaded image into `output` as top-left origin RGBA
    ///
    /// Only the first `width*height*4` bytes of `output` are written
    ///
    /// # Returns
    /// - On error: [`TgaDecodeErrors::NotLoaded`] if nothing is loaded
    ///   or [`TgaDecodeErrors::TooSmallOutput`] if `output` cannot hold
    ///   the image
    pub fn to_rgba_into(&self, output: &mut [u8]) -> Result<(), TgaDecodeErrors> {
        let size = self.loaded_output_size()?;
        let image = self.loaded()?;

        if output.len() < size {
            return Err(TgaDecodeErrors::TooSmallOutput(size, output.len()));
        }
        let header = &image.header;
        let width = usize::from(header.width);
        let height = usize::from(header.height);

        let format = PixelFormat::from_header(header);
        let scan = ScanOrder::new(header.origin(), width, height);
        let palette = image.palette.as_deref().unwrap_or(&[]);

        convert_to_rgba(
            format,
            &image.pixels,
            palette,
            width,
            scan,
            &mut output[..size]
        );
        Ok(())
    }

    /// Convert the image and hand the pixels to `sink`
    pub fn draw<S: RasterSink>(&self, sink: &mut S) -> Result<(), TgaDecodeErrors> {
        let pixels = self.to_rgba()?;
        let (width, height) = self.dimensions().ok_or(TgaDecodeErrors::NotLoaded)?;

        sink.put_rgba(width, height, &pixels);
        Ok(())
    }

    fn loaded_output_size(&self) -> Result<usize, TgaDecodeErrors> {
        self.loaded()?;
        self.output_buffer_size()
            .ok_or(TgaDecodeErrors::OverflowOccurred)
    }
}
