/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use serde_json::json;
use zune_core::options::DecoderOptions;
use zune_tga::TgaImage;

use crate::{hash, Sample, SampleKind};

fn decode(file: &[u8]) -> Vec<u8> {
    // strict so a broken encoding is reported instead of zero filled
    let options = DecoderOptions::default().set_strict_mode(true);
    let mut image = TgaImage::new_with_options(options);
    image.load(file).unwrap();
    image.to_rgba().unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_rle_matches_raw() {
    let mut error = false;

    for kind in SampleKind::ALL {
        for origin in 0..4 {
            let sample = Sample::striped(kind, 37, 11, origin);

            let raw_hash = hash(&decode(&sample.encode_raw()));
            let rle_hash = hash(&decode(&sample.encode_rle()));

            if raw_hash != rle_hash {
                error = true;
                let err = format!(
                    "Hash mismatch for {:?} origin {}\nRaw {} but RLE {}",
                    kind, origin, raw_hash, rle_hash
                );
                eprintln!("{}\n", err);
            }
        }
    }
    if error {
        panic!("Some RLE images did not match their raw counterparts");
    }
}

#[test]
fn test_origins_are_mirrors() {
    for kind in SampleKind::ALL {
        let decode_origin = |origin| decode(&Sample::striped(kind, 9, 4, origin).encode_raw());
        let rows = |pixels: &[u8]| -> Vec<Vec<u8>> {
            pixels.chunks_exact(9 * 4).map(<[u8]>::to_vec).collect()
        };

        let top_left = decode_origin(2);
        let bottom_left = decode_origin(0);
        let top_right = decode_origin(3);

        // bottom-left is the top-left image upside down
        let mut flipped = rows(&bottom_left);
        flipped.reverse();
        assert_eq!(flipped, rows(&top_left), "{kind:?}");

        // top-right is the top-left image mirrored
        for (left, right) in rows(&top_left).iter().zip(rows(&top_right).iter()) {
            let mirrored: Vec<&[u8]> = right.chunks_exact(4).rev().collect();
            let left: Vec<&[u8]> = left.chunks_exact(4).collect();
            assert_eq!(left, mirrored, "{kind:?}");
        }

        assert_ne!(hash(&top_left), hash(&bottom_left), "{kind:?}");
    }
}

#[test]
fn test_indexed_uses_palette() {
    let sample = Sample::striped(SampleKind::Indexed, 5, 1, 2);
    let pixels = decode(&sample.encode_raw());

    for (index, rgba) in sample.pixels.iter().zip(pixels.chunks_exact(4)) {
        let i = *index;
        assert_eq!(rgba, [i / 2, 255 - i, i, 255]);
    }
}

#[test]
fn test_header_json() {
    let sample = Sample::striped(SampleKind::True24, 256, 256, 0);

    let mut image = TgaImage::new();
    image.load(&sample.encode_rle()).unwrap();

    let header = serde_json::to_value(image.header().unwrap()).unwrap();

    assert_eq!(
        header,
        json!({
            "idLength": 0,
            "colorMapType": 0,
            "imageType": 10,
            "colorMapIndex": 0,
            "colorMapLength": 0,
            "colorMapDepth": 0,
            "offsetX": 0,
            "offsetY": 0,
            "width": 256,
            "height": 256,
            "pixelDepth": 24,
            "flags": 0,
            "hasEncoding": true,
            "hasColorMap": false,
            "isGreyColor": false
        })
    );
}

#[test]
fn test_indexed_header_json() {
    let sample = Sample::striped(SampleKind::Indexed, 4, 4, 2);

    let mut image = TgaImage::new();
    image.load(&sample.encode_raw()).unwrap();

    let header = serde_json::to_value(image.header().unwrap()).unwrap();

    assert_eq!(header["imageType"], 1);
    assert_eq!(header["colorMapType"], 1);
    assert_eq!(header["colorMapLength"], 256);
    assert_eq!(header["colorMapDepth"], 24);
    assert_eq!(header["flags"], 0x20);
    assert_eq!(header["hasColorMap"], true);
    assert_eq!(header["hasEncoding"], false);
}
