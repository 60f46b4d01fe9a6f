use flo_svg_path::*;

use clap::{App, Arg};
use log::*;

mod console;
use self::console::*;

use std::fs;
use std::io;
use std::io::prelude::*;
use std::process;
use std::str::{FromStr};

fn main() {
    pretty_env_logger::init();

    // Fetch the parameters
    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Copyright 2017-2020 Andrew Hunter <andrew@logicalshift.io>")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Full source code is available at https://github.com/Logicalshift/flowbetween\n",
            "\n",
            "Licensed under the Apache License, Version 2.0 (the \"License\");\n",
            "you may not use this file except in compliance with the License.\n",
            "You may obtain a copy of the License at\n",
            "\n",
            "http://www.apache.org/licenses/LICENSE-2.0\n\n"))
        .arg(Arg::with_name("input-from-file")
            .long("input-from-file")
            .short("I")
            .takes_value(true)
            .help("Reads the path data from a file instead of the command line"))
        .arg(Arg::with_name("error-mode")
            .long("error-mode")
            .short("e")
            .takes_value(true)
            .possible_values(&["ignore", "warn", "strict"])
            .default_value("ignore")
            .help("How to deal with unknown path commands"))
        .arg(Arg::with_name("text")
            .long("text")
            .short("t")
            .help("Writes one path operation per line instead of JSON"))
        .arg(Arg::with_name("bounds")
            .long("bounds")
            .short("b")
            .conflicts_with("text")
            .help("Writes the bounding box of the path (min x, min y, max x, max y) instead of the path operations"))
        .arg(Arg::with_name("PATH")
            .help("The path data to compile (standard input is read if no path or file is specified)")
            .required(false)
            .index(1))
        .get_matches();

    // Read the path data
    let path_data = if let Some(path) = params.value_of("PATH") {
        Ok(path.to_string())
    } else if let Some(file_name) = params.value_of("input-from-file") {
        fs::read_to_string(file_name)
    } else {
        let mut path = String::new();
        io::stdin().read_to_string(&mut path).map(|_| path)
    };

    let path_data = match path_data {
        Ok(path_data)   => path_data,
        Err(err)        => {
            eprintln!("ERROR: could not read the path data: {}", err);
            process::exit(2);
        }
    };

    // possible_values means the mode is always valid
    let error_mode  = params.value_of("error-mode").and_then(|mode| ErrorMode::from_str(mode).ok()).unwrap_or_default();
    let format      = if params.is_present("bounds") {
        OutputFormat::Bounds
    } else if params.is_present("text") {
        OutputFormat::Text
    } else {
        OutputFormat::Json
    };

    debug!("Compiling {} bytes of path data with error mode {}", path_data.len(), error_mode);

    // Compile the path
    let mut ops: Vec<PathOp>    = vec![];
    let result                  = PathParser::new()
        .with_error_mode(error_mode)
        .compile_path(&path_data, &mut ops);

    if let Err(err) = write_path(&mut io::stdout(), &ops, format) {
        eprintln!("ERROR: {}", err);
        process::exit(2);
    }

    if let Err(err) = result {
        eprintln!("ERROR: {}", err);
        process::exit(1);
    }
}
