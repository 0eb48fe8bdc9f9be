/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lvpix_carray::{CArrayDecoder, CArrayErrors};
use lvpix_core::options::DecoderOptions;

/// Render an asset source the way the UI generator emits them
fn asset_source(width: usize, height: usize, stride: Option<usize>, bytes: &[u8]) -> String {
    let stride_line = match stride {
        Some(stride) => format!("    .header.stride = {stride},\n"),
        None => String::new()
    };
    let body = bytes
        .iter()
        .map(|b| format!("0x{b:02X}"))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "const LV_ATTRIBUTE_MEM_ALIGN uint8_t ui_image_test_map[] = {{\n    {body}\n}};\n\n\
         const lv_image_dsc_t ui_image_test = {{\n\
         \x20   .header.cf = LV_COLOR_FORMAT_RGB565A8,\n\
         \x20   .header.w = {width},\n\
         \x20   .header.h = {height},\n\
         {stride_line}\
         \x20   .data = ui_image_test_map,\n}};\n"
    )
}

#[test]
fn decodes_two_pixel_asset() {
    // red at full alpha, blue at half alpha
    let source = asset_source(2, 1, None, &[0x00, 0xF8, 0xFF, 0x1F, 0x00, 0x80]);
    let mut decoder = CArrayDecoder::new(&source);

    let pixels = decoder.decode().unwrap();

    assert_eq!(decoder.dimensions(), Some((2, 1)));
    assert_eq!(decoder.stride(), Some(6));
    assert_eq!(pixels, vec![255, 0, 0, 255, 0, 0, 255, 128]);
}

#[test]
fn decoding_is_deterministic() {
    let source = asset_source(2, 2, None, &[0x33; 12]);

    let first = CArrayDecoder::new(&source).decode().unwrap();
    let second = CArrayDecoder::new(&source).decode().unwrap();

    assert_eq!(first, second);
}

#[test]
fn row_padding_is_never_interpreted() {
    // stride 4 leaves one padding byte per row, set to a value that
    // would be visible if it leaked into the output
    let bytes = [
        0x00, 0xF8, 0xFF, 0xAA, // row 0: red, one padding byte
        0x1F, 0x00, 0x80, // row 1: blue, truncated padding
    ];
    let source = asset_source(1, 2, Some(4), &bytes);

    let pixels = CArrayDecoder::new(&source).decode().unwrap();

    assert_eq!(pixels, vec![255, 0, 0, 255, 0, 0, 255, 128]);
}

#[test]
fn truncated_pixel_data_decodes_to_transparent() {
    // only the first of four pixels is present
    let source = asset_source(2, 2, None, &[0x00, 0xF8, 0xFF]);

    let mut decoder = CArrayDecoder::new(&source);
    let pixels = decoder.decode().unwrap();

    assert_eq!(pixels.len(), 2 * 2 * 4);
    assert_eq!(&pixels[..4], &[255, 0, 0, 255]);
    assert!(pixels[4..].iter().all(|&b| b == 0));
}

#[test]
fn strict_mode_rejects_truncated_pixel_data() {
    let source = asset_source(2, 2, None, &[0x00, 0xF8, 0xFF]);
    let options = DecoderOptions::default().set_strict_mode(true);

    let err = CArrayDecoder::new_with_options(&source, options)
        .decode()
        .unwrap_err();

    // one full row of 6 bytes plus the packed 6 bytes of the last row
    assert!(matches!(err, CArrayErrors::InsufficientData(12, 3)));
}

#[test]
fn truncation_alone_can_be_made_an_error() {
    let source = asset_source(2, 2, None, &[0x00, 0xF8, 0xFF]);
    let options = DecoderOptions::default().carray_set_error_on_truncation(true);

    let err = CArrayDecoder::new_with_options(&source, options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, CArrayErrors::InsufficientData(12, 3)));
}

#[test]
fn short_stride_can_be_made_an_error() {
    // stride 3 is half the packed row size of a two pixel row
    let source = asset_source(2, 1, Some(3), &[0x00; 6]);
    let options = DecoderOptions::default().carray_set_error_on_short_stride(true);

    let err = CArrayDecoder::new_with_options(&source, options)
        .decode_headers()
        .unwrap_err();

    assert!(matches!(err, CArrayErrors::Generic(_)));
}

#[test]
fn stride_defaults_to_three_bytes_per_pixel() {
    let source = asset_source(4, 1, None, &[0x00; 12]);

    let mut decoder = CArrayDecoder::new(&source);
    decoder.decode_headers().unwrap();

    assert_eq!(decoder.stride(), Some(12));
}

#[test]
fn missing_height_field_fails() {
    let source = "\
        .header.w = 4,\n\
        const uint8_t ui_image_test_map[] = { 0x00, 0x00, 0x00 };\n";

    let err = CArrayDecoder::new(source).decode().unwrap_err();

    assert!(matches!(err, CArrayErrors::MissingField("height")));
}

#[test]
fn source_without_pixel_array_fails() {
    let source = ".header.w = 4,\n.header.h = 4,\n";

    let err = CArrayDecoder::new(source).decode().unwrap_err();

    assert!(matches!(err, CArrayErrors::MissingPixelArray));
}

#[test]
fn dimension_limits_are_respected() {
    let source = asset_source(16, 1, None, &[0x00; 48]);
    let options = DecoderOptions::default().set_max_width(10);

    let err = CArrayDecoder::new_with_options(&source, options)
        .decode()
        .unwrap_err();

    assert!(matches!(err, CArrayErrors::Generic(_)));
}

#[test]
fn decode_into_rejects_small_buffers() {
    let source = asset_source(2, 1, None, &[0x00; 6]);

    let mut decoder = CArrayDecoder::new(&source);
    let mut output = [0_u8; 4];

    let err = decoder.decode_into(&mut output).unwrap_err();

    assert!(matches!(err, CArrayErrors::TooSmallOutput(8, 4)));
}

#[test]
fn zero_area_image_decodes_to_empty_buffer() {
    let source = asset_source(0, 0, None, &[]);

    let pixels = CArrayDecoder::new(&source).decode().unwrap();

    assert!(pixels.is_empty());
}

#[test]
fn accessors_before_header_decode_return_none() {
    let decoder = CArrayDecoder::new("");

    assert_eq!(decoder.dimensions(), None);
    assert_eq!(decoder.stride(), None);
    assert_eq!(decoder.output_buffer_size(), None);
}
