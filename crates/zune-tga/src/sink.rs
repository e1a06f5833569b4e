/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use alloc::vec::Vec;

/// A destination for decoded pixels
///
/// Implement this for whatever displays or re-encodes the image,
/// [`TgaImage::draw`](crate::TgaImage::draw) hands it the whole RGBA
/// buffer in one call.
pub trait RasterSink {
    /// Receive a top-left origin RGBA image
    ///
    /// `pixels` is exactly `width*height*4` bytes long
    fn put_rgba(&mut self, width: usize, height: usize, pixels: &[u8]);
}

/// Replaces the vector contents with the pixels
impl RasterSink for Vec<u8> {
    fn put_rgba(&mut self, _width: usize, _height: usize, pixels: &[u8]) {
        self.clear();
        self.extend_from_slice(pixels);
    }
}
