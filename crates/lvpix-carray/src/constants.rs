/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Bytes a single RGB565A8 pixel occupies in the packed source,
/// two for the RGB565 value and one for alpha
pub(crate) const SRC_BYTES_PER_PIXEL: usize = 3;

/// Channels making up a decoded pixel, R, G, B and A
pub(crate) const OUT_CHANNELS: usize = 4;
