//! CLI command implementations.

use std::fs;
use std::io::{self, Write};

use crate::cli_parser::CliParser;
use tinystack_cli::repl::{self, Session};
use tinystack_vm::Machine;

/// Assemble a source file, optionally dump it, then execute it once.
pub fn batch(args: &CliParser) -> Result<(), i32> {
    let Some(input) = &args.input else {
        eprintln!("error: no input file");
        eprintln!("Usage: tinystack -i <input> [--dump] | tinystack --repl");
        return Err(1);
    };

    let text = fs::read_to_string(input).map_err(|e| {
        eprintln!("error: cannot read '{}': {e}", input.display());
        1
    })?;

    let program = tinystack_assembler::assemble(&text).map_err(|e| {
        eprintln!("error: {e}");
        1
    })?;

    if args.verbose {
        eprintln!(
            "assembled {} lines ({} instructions) from {}",
            program.len(),
            program.instruction_count(),
            input.display()
        );
    }

    let stdout = io::stdout();
    let mut stdout = stdout.lock();
    if args.dump {
        write!(stdout, "{}", program.dump()).map_err(|e| {
            eprintln!("error: cannot write dump: {e}");
            1
        })?;
    }

    let mut vm = Machine::new(stdout);
    if let Some(limit) = args.max_stack_depth {
        vm = vm.with_max_depth(limit);
    }
    let result = vm.execute(&program);

    if args.verbose {
        eprintln!("executed {} instructions", vm.steps());
    }

    result.map_err(|e| {
        eprintln!("error: {e}");
        3
    })
}

/// Run the interactive session on stdin/stdout.
pub fn repl(args: &CliParser) -> Result<(), i32> {
    let mut session = Session::new();
    if let Some(limit) = args.max_stack_depth {
        session = session.with_max_depth(limit);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(stdin.lock(), stdout.lock(), &mut session).map_err(|e| {
        eprintln!("error: {e}");
        1
    })
}
