/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use lvpix_core::bit_depth::BitDepth;
use lvpix_core::colorspace::ColorSpace;
use lvpix_core::log::{trace, warn};
use lvpix_core::options::DecoderOptions;

use crate::constants::{OUT_CHANNELS, SRC_BYTES_PER_PIXEL};
use crate::errors::CArrayErrors;
use crate::extractor::{extract_descriptor, extract_pixel_array, ImageDescriptor};
use crate::rgb565::rgb565_to_rgb888;

/// Exclusive upper bound of byte offsets the pixel walk may compute
/// for the given geometry, `None` when it overflows a usize
const fn offset_bound(width: usize, height: usize, stride: usize) -> Option<usize> {
    let packed_row = match width.checked_mul(SRC_BYTES_PER_PIXEL) {
        Some(v) => v,
        None => return None
    };
    let rows = match height.checked_mul(stride) {
        Some(v) => v,
        None => return None
    };
    rows.checked_add(packed_row)
}

/// A decoder for LVGL C array image assets
///
/// The decoder is initialized by calling `new` with the asset source
/// text and either of [`decode_headers`] to extract the geometry
/// or [`decode`] to return the reconstructed RGBA pixels
///
/// Additional methods are provided that give more details of the
/// packed image like width and height are accessible after decoding
/// headers
///
/// [`decode_headers`]:CArrayDecoder::decode_headers
/// [`decode`]:CArrayDecoder::decode
pub struct CArrayDecoder<'a> {
    width:           usize,
    height:          usize,
    stride:          usize,
    pixel_data:      Vec<u8>,
    decoded_headers: bool,
    source:          &'a str,
    options:         DecoderOptions
}

impl<'a> CArrayDecoder<'a> {
    /// Create a new C array decoder with the default options
    ///
    /// # Arguments
    /// - `source`: The text of the C file declaring the image
    ///
    /// # Example
    ///
    /// ```
    /// use lvpix_carray::CArrayDecoder;
    ///
    /// let source = "
    ///     .w = 1, .h = 1,
    ///     const uint8_t px_map[] = { 0x1F, 0x00, 0xFF };
    /// ";
    /// let mut decoder = CArrayDecoder::new(source);
    /// let pixels = decoder.decode().unwrap();
    ///
    /// assert_eq!(pixels, vec![0, 0, 255, 255]);
    /// ```
    pub fn new(source: &'a str) -> CArrayDecoder<'a> {
        CArrayDecoder::new_with_options(source, DecoderOptions::default())
    }

    /// Create a new C array decoder that obeys specified restrictions
    ///
    /// E.g can be used to set width and height limits to prevent OOM attacks
    /// or to reject truncated pixel data instead of decoding it on a best
    /// effort basis
    ///
    /// # Arguments
    /// - `source`: The text of the C file declaring the image
    /// - `options`: Decoder options that the decoder should respect
    ///
    /// # Example
    /// ```
    /// use lvpix_core::options::DecoderOptions;
    /// use lvpix_carray::CArrayDecoder;
    /// // only decode images less than 10 in both width and height
    ///
    /// let options = DecoderOptions::default().set_max_width(10).set_max_height(10);
    ///
    /// let mut decoder = CArrayDecoder::new_with_options("", options);
    /// ```
    pub fn new_with_options(source: &'a str, options: DecoderOptions) -> CArrayDecoder<'a> {
        CArrayDecoder {
            width: 0,
            height: 0,
            stride: 0,
            pixel_data: Vec::new(),
            decoded_headers: false,
            source,
            options
        }
    }

    /// Extract the image geometry and raw pixel bytes from the source
    /// text, storing needed information into the decoder instance
    ///
    /// # Returns
    ///
    /// - On success: Nothing
    /// - On error: The error encountered when extracting the literals
    ///     error type will be an instance of [CArrayErrors]
    ///
    /// [CArrayErrors]:crate::errors::CArrayErrors
    pub fn decode_headers(&mut self) -> Result<(), CArrayErrors> {
        let descriptor = extract_descriptor(self.source)?;
        let pixel_data = extract_pixel_array(self.source)?;

        let ImageDescriptor {
            width,
            height,
            stride
        } = descriptor;

        if width > self.options.max_width() {
            let msg = format!(
                "Width {} greater than max configured width {}",
                width,
                self.options.max_width()
            );
            return Err(CArrayErrors::Generic(msg));
        }

        if height > self.options.max_height() {
            let msg = format!(
                "Height {} greater than max configured height {}",
                height,
                self.options.max_height()
            );
            return Err(CArrayErrors::Generic(msg));
        }

        if offset_bound(width, height, stride).is_none()
            || width
                .checked_mul(height)
                .and_then(|v| v.checked_mul(OUT_CHANNELS))
                .is_none()
        {
            return Err(CArrayErrors::GenericStatic("Image geometry overflows usize"));
        }

        if stride < descriptor.packed_row_size() {
            if self.options.carray_error_on_short_stride() {
                let msg = format!(
                    "Stride {} smaller than packed row size {}",
                    stride,
                    descriptor.packed_row_size()
                );
                return Err(CArrayErrors::Generic(msg));
            }
            warn!(
                "Stride {} smaller than packed row size {}, source rows will overlap",
                stride,
                descriptor.packed_row_size()
            );
        }

        self.width = width;
        self.height = height;
        self.stride = stride;
        self.pixel_data = pixel_data;

        trace!("Image width: {:?}", self.width);
        trace!("Image height: {:?}", self.height);
        trace!("Image stride: {:?}", self.stride);
        self.decoded_headers = true;

        Ok(())
    }

    /// Return the number of bytes required to hold a decoded image frame
    ///
    /// # Returns
    ///  - `Some(usize)`: Minimum size for a buffer needed to decode the image
    ///  - `None`: Indicates the image headers were not decoded.
    pub fn output_buffer_size(&self) -> Option<usize> {
        if self.decoded_headers {
            // geometry was confirmed not to overflow when headers
            // were decoded
            self.width
                .checked_mul(self.height)
                .and_then(|v| v.checked_mul(self.colorspace().num_components()))
        } else {
            None
        }
    }

    /// Decode a C array image asset, returning the reconstructed
    /// RGBA pixels or the error encountered during decoding
    ///
    /// Additional details about the packed image can be found after calling
    /// this/[`decode_headers`], i.e the width and height can be accessed by
    /// the [`dimensions`] method.
    ///
    /// # Returns
    /// - On success: The decoded RGBA bytes, four bytes per pixel, row
    ///   major, top to bottom, left to right
    /// - On error: An instance of [CArrayErrors] which gives a reason why
    ///   the image could not be decoded
    ///
    /// [`decode_headers`]:Self::decode_headers
    /// [`dimensions`]:Self::dimensions
    /// [CArrayErrors]:crate::errors::CArrayErrors
    pub fn decode(&mut self) -> Result<Vec<u8>, CArrayErrors> {
        if !self.decoded_headers {
            self.decode_headers()?;
        }
        let mut output = vec![0; self.output_buffer_size().unwrap()];

        self.decode_into(&mut output)?;

        Ok(output)
    }

    /// Decode a C array image asset and store the reconstructed RGBA
    /// pixels into the output buffer
    ///
    /// Returns an error if the buffer cannot hold the decoded image
    ///
    /// # Arguments
    ///
    /// * `pixels`: Output buffer for which we will write decoded
    ///   pixels
    ///
    /// returns: Result<(), CArrayErrors>
    pub fn decode_into(&mut self, pixels: &mut [u8]) -> Result<(), CArrayErrors> {
        if !self.decoded_headers {
            self.decode_headers()?;
        }

        let output_size = self.output_buffer_size().unwrap();

        if pixels.len() < output_size {
            return Err(CArrayErrors::TooSmallOutput(output_size, pixels.len()));
        }

        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        // the last row only needs its packed pixels, trailing padding
        // may be absent
        let required = (self.height - 1) * self.stride + self.width * SRC_BYTES_PER_PIXEL;
        let available = self.pixel_data.len();

        if available < required {
            if self.options.carray_error_on_truncation() {
                return Err(CArrayErrors::InsufficientData(required, available));
            }
            warn!(
                "Pixel array truncated, required {} bytes but found {}, missing pixels decode to transparent",
                required, available
            );
        }

        let out_row_size = self.width * OUT_CHANNELS;

        for (y, out_row) in pixels[..output_size]
            .chunks_exact_mut(out_row_size)
            .enumerate()
        {
            let row_offset = y * self.stride;

            for (x, pixel) in out_row.chunks_exact_mut(OUT_CHANNELS).enumerate() {
                let pixel_offset = row_offset + x * SRC_BYTES_PER_PIXEL;

                if pixel_offset + 2 < self.pixel_data.len() {
                    let low = self.pixel_data[pixel_offset];
                    let high = self.pixel_data[pixel_offset + 1];
                    let alpha = self.pixel_data[pixel_offset + 2];

                    let rgb565 = u16::from_le_bytes([low, high]);
                    let [r, g, b] = rgb565_to_rgb888(rgb565);

                    pixel.copy_from_slice(&[r, g, b, alpha]);
                } else {
                    // truncated tail, emit transparent black
                    pixel.copy_from_slice(&[0, 0, 0, 0]);
                }
            }
        }
        trace!("Finished decoding image");

        Ok(())
    }

    /// Return the colorspace decoded pixels are laid out in
    ///
    /// This is always RGBA, the packed RGB565 color and the separate
    /// alpha byte of the source recombine into four channel pixels
    ///
    /// # Returns
    /// - [`ColorSpace::RGBA`]
    ///
    /// [`ColorSpace::RGBA`]:lvpix_core::colorspace::ColorSpace::RGBA
    pub const fn colorspace(&self) -> ColorSpace {
        ColorSpace::RGBA
    }

    /// Return the bit depth of decoded pixels
    ///
    /// This is always 8, the 5 and 6 bit source channels are expanded
    /// on decode
    ///
    /// # Returns
    /// - [`BitDepth::Eight`]
    ///
    /// # Example
    ///
    /// ```
    /// use lvpix_core::bit_depth::BitDepth;
    /// use lvpix_carray::CArrayDecoder;
    /// let decoder = CArrayDecoder::new("");
    /// assert_eq!(decoder.bit_depth(), BitDepth::Eight)
    /// ```
    ///
    /// [`BitDepth::Eight`]:lvpix_core::bit_depth::BitDepth::Eight
    pub const fn bit_depth(&self) -> BitDepth {
        BitDepth::Eight
    }

    /// Return the width and height of the image
    ///
    /// Or none if the headers haven't been decoded
    ///
    /// # Returns
    /// - `Some(width,height)` - If headers are decoded, this will return the
    ///   stored width and height for that image
    /// - `None`: This indicates the image headers weren't decoded or an error
    ///   occurred when decoding headers
    /// # Example
    ///
    /// ```no_run
    /// use lvpix_carray::CArrayDecoder;
    /// let mut decoder = CArrayDecoder::new("");
    ///
    /// decoder.decode_headers().unwrap();
    /// // get dimensions now.
    /// let (w, h) = decoder.dimensions().unwrap();
    /// ```
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded_headers {
            return Some((self.width, self.height));
        }
        None
    }

    /// Return the source row stride in bytes
    ///
    /// Or none if the headers haven't been decoded
    pub const fn stride(&self) -> Option<usize> {
        if self.decoded_headers {
            return Some(self.stride);
        }
        None
    }
}
