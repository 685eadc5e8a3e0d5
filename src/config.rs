// system configuration and command line processing

use ::clap::{arg, value_parser, Command};
use std::fs;

const DEFAULT_CORE_SIZE: usize = 1000;
const DEFAULT_STACK_SIZE: usize = 10;

pub struct Config {
    pub core_size: usize,
    pub data_size: usize,
    pub return_size: usize,
    /// How many stack cells each page draws. Visual only.
    pub stack_elements: usize,
    /// The Forth source to compile and trace.
    pub prog: String,
    pub quiet: bool,
}

impl Config {
    pub fn new() -> Config {
        Config {
            core_size: DEFAULT_CORE_SIZE,
            data_size: DEFAULT_STACK_SIZE,
            return_size: DEFAULT_STACK_SIZE,
            stack_elements: DEFAULT_STACK_SIZE,
            prog: String::new(),
            quiet: false,
        }
    }

    pub fn parse() -> Result<Config, String> {
        let arguments = Command::new("forth")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Compile a minimal Forth and trace it one page per step")
            .arg(arg!([FILE] "forth source file"))
            .arg(arg!(-e --eval <SRC> "source given inline instead of a file").required(false))
            .arg(
                arg!(--"core-size" <CELLS> "cells of core memory")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                arg!(--"data-size" <CELLS> "data stack capacity")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                arg!(--"return-size" <CELLS> "return stack capacity")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                arg!(--"stack-elements" <CELLS> "stack cells drawn per page")
                    .required(false)
                    .value_parser(value_parser!(usize)),
            )
            .arg(arg!(-q --quiet "run without rendering pages"))
            .get_matches();

        let mut config = Config::new();
        if let Some(cells) = arguments.get_one::<usize>("core-size") {
            config.core_size = *cells;
        }
        if let Some(cells) = arguments.get_one::<usize>("data-size") {
            config.data_size = *cells;
        }
        if let Some(cells) = arguments.get_one::<usize>("return-size") {
            config.return_size = *cells;
        }
        if let Some(cells) = arguments.get_one::<usize>("stack-elements") {
            config.stack_elements = *cells;
        }
        config.quiet = arguments.get_flag("quiet");

        if let Some(src) = arguments.get_one::<String>("eval") {
            config.prog = src.clone();
        } else if let Some(file) = arguments.get_one::<String>("FILE") {
            config.prog = fs::read_to_string(file)
                .map_err(|e| format!("Couldn't load file {}: {}", file, e))?;
        } else {
            return Err("No source given; pass a FILE or --eval".to_string());
        }
        Ok(config)
    }
}
