/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
//! Core routines shared by the lvpix crates
//!
//! This crate provides the small set of building blocks shared by the
//! decoders and tools under the `lvpix` umbrella
//!
//! It currently contains
//!
//! - Colorspace and bit depth information shared by images
//! - Image decoder options
//! - A logging facade that compiles to no-ops when the `log` feature is off
//!
//! This library is `#[no_std]` with the `std` feature needed by downstream
//! crates for implementing `std::error::Error` on their error types.
//!
//! # Features
//!  - `std`: Enables `std` support.
//!
//!  - `log`: Forwards the logging macros to the `log` crate, otherwise
//!     they compile to nothing
#![cfg_attr(not(feature = "std"), no_std)]
#![macro_use]

pub mod bit_depth;
pub mod colorspace;
pub mod options;

#[cfg(feature = "log")]
pub use log;

#[cfg(not(feature = "log"))]
pub mod log;
