/*
 * Copyright (c) 2023.
 *
 * This software is free software; You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::process::exit;

use log::error;

use crate::batch::run_batch;

mod batch;
mod cmd_args;
mod cmd_parsers;
mod file_io;

pub fn main() {
    let cmd = cmd_args::create_cmd_args();
    let options = cmd.get_matches();

    cmd_parsers::setup_logger(&options);

    match run_batch(&options) {
        Ok(summary) => {
            if summary.converted == 0 {
                exit(-1);
            }
        }
        Err(err) => {
            println!();
            error!(" Could not complete conversion, reason {:?}", err);

            println!();
            exit(-1);
        }
    }
}
