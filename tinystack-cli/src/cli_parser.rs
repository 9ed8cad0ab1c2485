use std::path::PathBuf;

use clap::Parser;

/// Assemble and run tinystack programs, or explore them interactively.
#[derive(Parser)]
#[command(version, about)]
pub struct CliParser {
    /// Program source file: one instruction line per text line.
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Print the assembled program before executing it.
    #[arg(long)]
    pub dump: bool,

    /// Start an interactive session on stdin instead of running a file.
    #[arg(long)]
    pub repl: bool,

    /// Fail with a stack overflow once the stack would exceed this many values.
    #[arg(long, value_name = "N")]
    pub max_stack_depth: Option<usize>,

    /// Report assembly and execution progress on stderr.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}
