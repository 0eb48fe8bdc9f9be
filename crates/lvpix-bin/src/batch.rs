/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use clap::ArgMatches;
use log::{error, info};
use lvpix_carray::{CArrayDecoder, CArrayErrors};
use lvpix_core::options::DecoderOptions;

use crate::cmd_parsers::get_decoder_options;
use crate::file_io::{collect_assets, output_file_name, write_png};

/// Errors possible when converting assets
pub enum ConvertError {
    /// The asset could not be decoded
    Decode(CArrayErrors),
    /// Reading an asset or writing an image failed
    Io(std::io::Error),
    /// The PNG encoder rejected the image
    Png(png::EncodingError),
    /// A decoded image that cannot be represented as a PNG
    Unsupported(&'static str),
    /// The input matched no assets
    NoAssets
}

impl Debug for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Decode(err) => {
                write!(f, "{err:?}")
            }
            ConvertError::Io(err) => {
                writeln!(f, "I/O error {err:?}")
            }
            ConvertError::Png(err) => {
                writeln!(f, "PNG encoding error {err:?}")
            }
            ConvertError::Unsupported(val) => {
                writeln!(f, "{val}")
            }
            ConvertError::NoAssets => {
                writeln!(f, "No image assets found")
            }
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ConvertError {}

impl From<CArrayErrors> for ConvertError {
    fn from(err: CArrayErrors) -> Self {
        ConvertError::Decode(err)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

impl From<png::EncodingError> for ConvertError {
    fn from(err: png::EncodingError) -> Self {
        ConvertError::Png(err)
    }
}

/// Tally of a batch conversion run
pub struct BatchSummary {
    pub converted: usize,
    pub attempted: usize
}

/// Convert every asset the command line matched
///
/// Per asset failures are reported and never abort the remaining
/// assets, the returned tally tells how many made it through.
pub(crate) fn run_batch(args: &ArgMatches) -> Result<BatchSummary, ConvertError> {
    let input = Path::new(args.get_one::<String>("in").unwrap());
    let out_dir = Path::new(args.get_one::<String>("out-dir").unwrap());
    let options = get_decoder_options(args);

    let assets = collect_assets(input)?;

    if assets.is_empty() {
        return Err(ConvertError::NoAssets);
    }
    info!("Converting {} assets to PNG", assets.len());

    std::fs::create_dir_all(out_dir)?;

    let mut summary = BatchSummary {
        converted: 0,
        attempted: 0
    };

    for asset in &assets {
        summary.attempted += 1;

        match convert_asset(asset, out_dir, options) {
            Ok((name, width, height)) => {
                summary.converted += 1;
                info!("Converted {name} ({width}x{height})");
            }
            Err(err) => {
                error!("Could not convert {}: {:?}", asset.display(), err);
            }
        }
    }
    println!(
        "Completed: {}/{} assets converted",
        summary.converted, summary.attempted
    );

    Ok(summary)
}

/// Convert a single asset, returning the output name and geometry
fn convert_asset(
    asset: &Path, out_dir: &Path, options: DecoderOptions
) -> Result<(String, usize, usize), ConvertError> {
    let source = std::fs::read_to_string(asset)?;

    let mut decoder = CArrayDecoder::new_with_options(&source, options);
    let pixels = decoder.decode()?;

    // decode succeeded so the headers are present
    let (width, height) = decoder.dimensions().unwrap();

    let name = output_file_name(asset);

    write_png(
        &out_dir.join(&name),
        &pixels,
        width,
        height,
        decoder.colorspace(),
        decoder.bit_depth()
    )?;

    Ok((name, width, height))
}
