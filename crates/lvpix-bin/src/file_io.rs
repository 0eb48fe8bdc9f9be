/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use log::debug;
use lvpix_core::bit_depth::BitDepth;
use lvpix_core::colorspace::ColorSpace;

use crate::batch::ConvertError;

/// Name prefix the UI generator gives image asset files
const ASSET_PREFIX: &str = "ui_image_";

/// Whether a file name looks like a generated image asset
fn is_asset_file_name(name: &str) -> bool {
    name.starts_with(ASSET_PREFIX) && name.ends_with(".c")
}

/// Collect the asset files to convert
///
/// A directory input yields every `ui_image_*.c` file in it, sorted by
/// name. A file input is returned as is, whatever its name.
pub fn collect_assets(input: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    if !input.is_dir() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut assets: Vec<PathBuf> = std::fs::read_dir(input)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(is_asset_file_name)
        })
        .collect();

    assets.sort();
    debug!("Found {} assets under {}", assets.len(), input.display());

    Ok(assets)
}

/// Derive the output file name for an asset
///
/// Strips the generator's `ui_image_` prefix and the `.c` extension,
/// `ui_image_logo.c` becomes `logo.png`
pub fn output_file_name(asset: &Path) -> String {
    let stem = asset
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("image");
    let base = stem.strip_prefix(ASSET_PREFIX).unwrap_or(stem);

    format!("{base}.png")
}

fn png_color_type(colorspace: ColorSpace) -> Option<png::ColorType> {
    match colorspace {
        ColorSpace::Luma => Some(png::ColorType::Grayscale),
        ColorSpace::LumaA => Some(png::ColorType::GrayscaleAlpha),
        ColorSpace::RGB => Some(png::ColorType::Rgb),
        ColorSpace::RGBA => Some(png::ColorType::Rgba),
        _ => None
    }
}

fn png_bit_depth(depth: BitDepth) -> Option<png::BitDepth> {
    match depth {
        BitDepth::Eight => Some(png::BitDepth::Eight),
        BitDepth::Sixteen => Some(png::BitDepth::Sixteen),
        _ => None
    }
}

/// Write one decoded image to `path` as a PNG file
pub fn write_png(
    path: &Path, pixels: &[u8], width: usize, height: usize, colorspace: ColorSpace,
    depth: BitDepth
) -> Result<(), ConvertError> {
    let color = png_color_type(colorspace)
        .ok_or(ConvertError::Unsupported("colorspace has no PNG equivalent"))?;
    let bit_depth = png_bit_depth(depth)
        .ok_or(ConvertError::Unsupported("bit depth has no PNG equivalent"))?;

    let file = File::create(path)?;
    let sink = BufWriter::new(file);

    let mut encoder = png::Encoder::new(sink, width as u32, height as u32);
    encoder.set_color(color);
    encoder.set_depth(bit_depth);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{is_asset_file_name, output_file_name};

    #[test]
    fn asset_names_are_recognized() {
        assert!(is_asset_file_name("ui_image_logo.c"));
        assert!(!is_asset_file_name("ui_image_logo.h"));
        assert!(!is_asset_file_name("ui_helpers.c"));
        assert!(!is_asset_file_name("logo.c"));
    }

    #[test]
    fn output_names_strip_the_generator_convention() {
        assert_eq!(
            output_file_name(Path::new("assets/ui_image_logo.c")),
            "logo.png"
        );
        assert_eq!(output_file_name(Path::new("custom.c")), "custom.png");
    }
}
