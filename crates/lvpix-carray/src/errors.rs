/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Errors possible during decoding.
use std::fmt::{Debug, Display, Formatter};

/// Possible errors that may occur during decoding
pub enum CArrayErrors {
    /// A required integer field declaration was not found
    /// in the source text
    ///
    /// The argument is the name of the field, either `width` or `height`
    MissingField(&'static str),
    /// No `uint8_t *_map[]` byte array literal was found
    /// in the source text
    ///
    /// Indicates the source is not an image asset
    MissingPixelArray,
    /// A hex token inside the byte array literal could not be
    /// decoded into a byte
    ///
    /// The token scan only matches well formed two digit tokens,
    /// so this should not occur for any input
    InvalidHexToken(String),
    /// The pixel array doesn't have enough bytes to fully
    /// reconstruct the image
    ///
    /// Only reported when truncation is configured as an error
    ///
    /// # Arguments
    /// - 1st argument is the number of bytes we expected
    /// - 2nd argument is number of bytes actually present
    InsufficientData(usize, usize),
    /// Generic message
    Generic(String),
    /// Generic message that does not need heap allocation
    GenericStatic(&'static str),
    /// Too small output size
    TooSmallOutput(usize, usize)
}

impl Debug for CArrayErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CArrayErrors::MissingField(field) => {
                writeln!(f, "No `{field}` field declaration found in source")
            }
            CArrayErrors::MissingPixelArray => {
                writeln!(f, "No `uint8_t *_map[]` pixel array literal found in source")
            }
            CArrayErrors::InvalidHexToken(token) => {
                writeln!(f, "Invalid hex token `{token}` in pixel array")
            }
            CArrayErrors::InsufficientData(expected, found) => {
                writeln!(
                    f,
                    "Insufficient data, required {expected} bytes but pixel array has {found}"
                )
            }
            CArrayErrors::Generic(val) => {
                writeln!(f, "{val}")
            }
            CArrayErrors::GenericStatic(val) => {
                writeln!(f, "{val}")
            }
            CArrayErrors::TooSmallOutput(expected, found) => {
                writeln!(
                    f,
                    "Too small output size, expected {expected}, but found {found}"
                )
            }
        }
    }
}

impl Display for CArrayErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl From<&'static str> for CArrayErrors {
    fn from(r: &'static str) -> Self {
        Self::GenericStatic(r)
    }
}

impl std::error::Error for CArrayErrors {}
