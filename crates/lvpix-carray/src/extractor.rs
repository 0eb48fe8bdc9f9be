/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Literal extraction from C image asset sources
//!
//! An asset source is a C file declaring the image geometry as struct
//! field assignments (`.w = 64`, `.h = 64`, `.stride = 192`) and the
//! packed pixel data as a `uint8_t <name>_map[] = { 0x00, ... };` array
//! literal.
//!
//! Extraction is a token scan over the source text, not a grammar parse,
//! so interleaved whitespace, newlines and comments are ignored. The
//! field name to token shape mapping is declared once in the regular
//! expressions below and reused by every extraction function.

use lazy_static::lazy_static;
use lvpix_core::log::trace;
use regex::Regex;

use crate::constants::SRC_BYTES_PER_PIXEL;
use crate::errors::CArrayErrors;

lazy_static! {
    static ref RE_WIDTH: Regex = Regex::new(r"\.w\s*=\s*(\d+)").unwrap();
    static ref RE_HEIGHT: Regex = Regex::new(r"\.h\s*=\s*(\d+)").unwrap();
    static ref RE_STRIDE: Regex = Regex::new(r"\.stride\s*=\s*(\d+)").unwrap();
    static ref RE_PIXEL_ARRAY: Regex =
        Regex::new(r"(?s)uint8_t\s+\w+_map\[\]\s*=\s*\{(.*?)\};").unwrap();
    static ref RE_HEX_BYTE: Regex = Regex::new(r"0x([0-9a-fA-F]{2})").unwrap();
}

/// Geometry of a packed image asset
///
/// `stride` is the number of bytes each source row occupies, which may
/// exceed the packed row size `width * 3` due to trailing padding.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ImageDescriptor {
    pub width:  usize,
    pub height: usize,
    pub stride: usize
}

impl ImageDescriptor {
    /// Number of meaningful bytes at the start of each source row
    pub const fn packed_row_size(&self) -> usize {
        self.width * SRC_BYTES_PER_PIXEL
    }
}

/// Find the first integer field matching `re` in the source text
///
/// Returns `Ok(None)` when the field is not declared, an error when the
/// declared value does not fit a usize
fn extract_integer(text: &str, re: &Regex) -> Result<Option<usize>, CArrayErrors> {
    match re.captures(text).and_then(|c| c.get(1)) {
        Some(m) => match m.as_str().parse::<usize>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => Err(CArrayErrors::Generic(format!(
                "Integer field value `{}` overflows usize",
                m.as_str()
            )))
        },
        None => Ok(None)
    }
}

/// Extract the image geometry from an asset source
///
/// `w` and `h` declarations are required, a missing `stride` defaults to
/// the packed row size `width * 3`
///
/// # Returns
/// - `Ok(ImageDescriptor)`: The declared geometry
/// - `Err(CArrayErrors::MissingField)`: `w` or `h` was not declared
pub fn extract_descriptor(text: &str) -> Result<ImageDescriptor, CArrayErrors> {
    let width = extract_integer(text, &RE_WIDTH)?.ok_or(CArrayErrors::MissingField("width"))?;
    let height = extract_integer(text, &RE_HEIGHT)?.ok_or(CArrayErrors::MissingField("height"))?;

    let stride = match extract_integer(text, &RE_STRIDE)? {
        Some(stride) => stride,
        None => width.checked_mul(SRC_BYTES_PER_PIXEL).ok_or_else(|| {
            CArrayErrors::Generic(format!("Width {width} overflows the default stride"))
        })?
    };

    Ok(ImageDescriptor {
        width,
        height,
        stride
    })
}

/// Extract the raw pixel bytes from an asset source
///
/// Locates the `uint8_t <name>_map[]` array literal and decodes every
/// two digit `0x` hex token in its body, in order of appearance.
///
/// # Returns
/// - `Ok(Vec<u8>)`: The decoded bytes
/// - `Err(CArrayErrors::MissingPixelArray)`: No such array literal exists
pub fn extract_pixel_array(text: &str) -> Result<Vec<u8>, CArrayErrors> {
    let body = RE_PIXEL_ARRAY
        .captures(text)
        .and_then(|c| c.get(1))
        .ok_or(CArrayErrors::MissingPixelArray)?;

    let mut bytes = Vec::new();

    for token in RE_HEX_BYTE.captures_iter(body.as_str()) {
        // capture group 1 is always present on a match
        let digits = token.get(1).unwrap().as_str();

        let byte = u8::from_str_radix(digits, 16)
            .map_err(|_| CArrayErrors::InvalidHexToken(digits.to_string()))?;

        bytes.push(byte);
    }
    trace!("Extracted pixel array with {} bytes", bytes.len());

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::{extract_descriptor, extract_pixel_array};
    use crate::errors::CArrayErrors;

    #[test]
    fn descriptor_with_stride() {
        let src = ".header.w = 64,\n.header.h = 32,\n.header.stride = 200,";
        let desc = extract_descriptor(src).unwrap();

        assert_eq!(desc.width, 64);
        assert_eq!(desc.height, 32);
        assert_eq!(desc.stride, 200);
    }

    #[test]
    fn stride_defaults_to_packed_row_size() {
        let src = ".w = 4, .h = 2,";
        let desc = extract_descriptor(src).unwrap();

        assert_eq!(desc.stride, 12);
        assert_eq!(desc.stride, desc.packed_row_size());
    }

    #[test]
    fn missing_height_is_an_error() {
        let src = ".w = 4,";
        let err = extract_descriptor(src).unwrap_err();

        assert!(matches!(err, CArrayErrors::MissingField("height")));
    }

    #[test]
    fn missing_width_is_an_error() {
        let src = ".h = 4,";
        let err = extract_descriptor(src).unwrap_err();

        assert!(matches!(err, CArrayErrors::MissingField("width")));
    }

    #[test]
    fn scans_bytes_across_whitespace_and_comments() {
        let src = "const uint8_t icon_map[] = {\n    0x01, 0x02, /*row end*/\n    0xfF,\n    0xa0\n};";
        let bytes = extract_pixel_array(src).unwrap();

        assert_eq!(bytes, vec![0x01, 0x02, 0xFF, 0xA0]);
    }

    #[test]
    fn array_without_map_suffix_is_ignored() {
        let src = "const uint8_t icon_data[] = { 0x01, 0x02 };";
        let err = extract_pixel_array(src).unwrap_err();

        assert!(matches!(err, CArrayErrors::MissingPixelArray));
    }

    #[test]
    fn only_the_array_body_is_scanned() {
        // hex tokens after the closing brace belong to other declarations
        let src = "uint8_t a_map[] = { 0x10 };\nuint32_t magic = 0xCAFEBABE;";
        let bytes = extract_pixel_array(src).unwrap();

        assert_eq!(bytes, vec![0x10]);
    }
}
