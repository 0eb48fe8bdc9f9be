/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Decoding LVGL C array image assets
//!
//! Embedded UI toolkits ship image assets as C source files, the pixel
//! data emitted as a `uint8_t` array literal next to the geometry
//! declarations. This crate extracts those literals and reconstructs the
//! image as a plain RGBA buffer.
//!
//! The only supported packed layout is RGB565A8, three bytes per pixel,
//! a little endian RGB565 color pair followed by one alpha byte, rows
//! padded out to an optional stride.
//!
//! # Example
//! ```
//! use lvpix_carray::CArrayDecoder;
//!
//! let source = "
//!     .header.w = 2,
//!     .header.h = 1,
//!     const uint8_t ui_image_dot_map[] = {
//!         0x00, 0xF8, 0xFF, 0x1F, 0x00, 0x80
//!     };
//! ";
//! let mut decoder = CArrayDecoder::new(source);
//! let pixels = decoder.decode().unwrap();
//!
//! // a fully opaque red pixel and a half transparent blue one
//! assert_eq!(pixels, vec![255, 0, 0, 255, 0, 0, 255, 128]);
//! ```
//!
//! # Features
//! - `log`: Routes decoder diagnostics through the `log` crate,
//!   enabled by default
pub use decoder::*;
pub use errors::*;
pub use extractor::*;
pub use lvpix_core;

mod constants;
mod decoder;
mod errors;
mod extractor;
mod rgb565;
