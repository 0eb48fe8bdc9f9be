/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Global decoder options

/// Lenient flags, the behaviour the original asset pipelines ship with
///
/// Truncated or non conforming pixel data degrades to transparent
/// pixels instead of failing the whole image
fn decoder_lenient_mode() -> DecoderFlags {
    DecoderFlags {
        carray_error_on_truncation:   false,
        carray_error_on_short_stride: false
    }
}

/// Strict flags
///
/// Every recoverable irregularity in the source asset is
/// reported as an error
fn decoder_strict_mode() -> DecoderFlags {
    DecoderFlags {
        carray_error_on_truncation:   true,
        carray_error_on_short_stride: true
    }
}

/// Decoder options that are flags
///
/// NOTE: When you extend this, add true or false to
/// all options above that return a `DecoderFlag`
#[derive(Copy, Debug, Clone, Default)]
pub struct DecoderFlags {
    /// Whether a pixel buffer shorter than the declared geometry should
    /// be reported as an error instead of padding with transparent pixels
    carray_error_on_truncation:   bool,
    /// Whether a declared row stride smaller than the packed row size
    /// should be reported as an error
    carray_error_on_short_stride: bool
}

/// Decoder options
///
/// Not all options are respected by all decoders
#[derive(Debug, Copy, Clone)]
pub struct DecoderOptions {
    /// Maximum width for which decoders will
    /// not try to decode images larger than
    /// the specified width.
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_width:  usize,
    /// Maximum height for which decoders will not
    /// try to decode images larger than the
    /// specified height
    ///
    /// - Default value: 16384
    /// - Respected by: `all decoders`
    max_height: usize,
    /// Boolean flags that influence decoding
    flags:      DecoderFlags
}

/// Initializers
impl DecoderOptions {
    /// Create decoder options suited for command line use
    ///
    /// Irregular assets are decoded on a best effort basis
    /// instead of being rejected
    pub fn new_cmd() -> DecoderOptions {
        let flag = decoder_lenient_mode();
        DecoderOptions::default().set_decoder_flags(flag)
    }
}

/// Global options respected by all decoders
impl DecoderOptions {
    /// Get maximum width configured for which the decoder
    /// should not try to decode images greater than this width
    pub const fn max_width(&self) -> usize {
        self.max_width
    }

    /// Get maximum height configured for which the decoder should
    /// not try to decode images greater than this height
    pub const fn max_height(&self) -> usize {
        self.max_height
    }

    /// Return true whether the decoder should be in strict mode
    /// And reject most errors
    pub fn strict_mode(&self) -> bool {
        self.flags.carray_error_on_truncation | self.flags.carray_error_on_short_stride
    }

    /// Set maximum width for which the decoder should not try
    /// decoding images greater than that width
    ///
    /// # Arguments
    ///
    /// * `width`:  The maximum width allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Set maximum height for which the decoder should not try
    /// decoding images greater than that height
    /// # Arguments
    ///
    /// * `height`: The maximum height allowed
    ///
    /// returns: DecoderOptions
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    fn set_decoder_flags(mut self, flags: DecoderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Set whether the decoder should be in strict mode
    ///
    /// This reduces the error tolerance level for the decoders, truncated
    /// or non conforming pixel data will be rejected instead of decoded
    /// on a best effort basis
    ///
    /// # Arguments
    ///
    /// * `yes`:
    ///
    /// returns: DecoderOptions
    pub fn set_strict_mode(mut self, yes: bool) -> Self {
        self.flags = if yes {
            decoder_strict_mode()
        } else {
            decoder_lenient_mode()
        };
        self
    }
}

/// C array specific options
impl DecoderOptions {
    /// Whether a pixel buffer shorter than the declared geometry
    /// should be reported as an error
    pub const fn carray_error_on_truncation(&self) -> bool {
        self.flags.carray_error_on_truncation
    }

    /// Set whether a pixel buffer shorter than the declared geometry
    /// should be reported as an error
    pub fn carray_set_error_on_truncation(mut self, yes: bool) -> Self {
        self.flags.carray_error_on_truncation = yes;
        self
    }

    /// Whether a declared row stride smaller than the packed row
    /// size should be reported as an error
    pub const fn carray_error_on_short_stride(&self) -> bool {
        self.flags.carray_error_on_short_stride
    }

    /// Set whether a declared row stride smaller than the packed row
    /// size should be reported as an error
    pub fn carray_set_error_on_short_stride(mut self, yes: bool) -> Self {
        self.flags.carray_error_on_short_stride = yes;
        self
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_width:  1 << 14,
            max_height: 1 << 14,
            flags:      decoder_lenient_mode()
        }
    }
}
