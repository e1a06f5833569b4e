/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! A Truevision TGA decoder
//!
//! This crate decodes `.tga` images into a top-left origin RGBA buffer.
//!
//! [Format Specification](https://www.gamers.org/dEngine/quake3/TGA.txt)
//!
//! # Features
//! - `no_std` with the `alloc` crate
//! - Minimal dependencies
//! - Fuzz tested
//!
//! # Supported formats
//! - Uncompressed and RLE compressed images
//! - Paletted images (8 bit indexes into a 24 bit palette)
//! - True color images (16, 24 and 32 bits)
//! - Grayscale images (8 bits and 16 bits with alpha)
//!
//! # Unsupported
//! - Extension areas and footers, only the 18 byte header and the image ID
//!   field are read
//!
//! # Example
//! ```no_run
//! use zune_tga::{TgaDecodeErrors, TgaImage};
//!
//! fn main() -> Result<(), TgaDecodeErrors> {
//!     let data = std::fs::read("image.tga").unwrap();
//!
//!     let mut image = TgaImage::new();
//!     image.load(&data)?;
//!
//!     let (width, height) = image.dimensions().unwrap();
//!     let pixels = image.to_rgba()?;
//!     assert_eq!(pixels.len(), width * height * 4);
//!     Ok(())
//! }
//! ```
//!
//! # Security
//!
//! Truncated or malformed payloads never read out of bounds, missing bytes
//! are treated as zero unless strict mode is enabled in the decoder options.
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]
extern crate alloc;
extern crate core;

pub use zune_core;

pub use crate::convert::{convert_to_rgba, PixelFormat, ScanOrder};
pub use crate::decoder::TgaImage;
pub use crate::errors::TgaDecodeErrors;
pub use crate::header::{probe_tga, TgaHeader, TgaImageType, TgaOrigin};
pub use crate::sink::RasterSink;

mod constants;
mod convert;
mod decoder;
mod errors;
mod header;
mod rle;
mod serde;
mod sink;
