//! tinystack CLI: run a program file or start an interactive session.
//!
//! Exit codes:
//! - 0: Success
//! - 1: Usage/input/assembly error
//! - 2: Invalid arguments (reported by clap)
//! - 3: Runtime error

mod cli_parser;
mod commands;

use std::process;

use clap::Parser;
use cli_parser::CliParser;

fn main() {
    let args = CliParser::parse();

    let result = if args.repl {
        commands::repl(&args)
    } else {
        commands::batch(&args)
    };

    if let Err(code) = result {
        process::exit(code);
    }
}
