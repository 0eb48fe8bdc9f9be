/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("lvpix")
        .about("Convert LVGL C array image assets to PNG")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input asset file, or a directory containing ui_image_*.c assets")
            .required(true))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("out-dir")
            .help("Directory to write decoded PNG images to")
            .default_value("icons"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .arg(Arg::new("strict")
            .long("strict")
            .action(ArgAction::SetTrue)
            .help_heading("DECODING")
            .help("Treat truncated or non conforming assets as errors")
            .long_help("Treat truncated or non conforming assets as errors.\nThe default decodes them on a best effort basis, substituting transparent pixels for missing data."))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("DECODING")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .help("Maximum image width the decoder will accept"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("DECODING")
            .value_parser(value_parser!(usize))
            .default_value("16384")
            .help("Maximum image height the decoder will accept"))
}
