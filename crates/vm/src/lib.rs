//! tinystack machine: executes assembled programs against an operand stack.
//!
//! The machine holds a single stack of `i64` values. Lines run in the order
//! they were appended and instructions in the order they were assembled.
//! Before each instruction its pop arity is checked; a shortfall halts the
//! whole pass with [`RuntimeError::StackUnderflow`].
//!
//! # Usage
//!
//! ```
//! use tinystack_common::{Instruction, Program};
//! use tinystack_vm::run_with_output;
//!
//! let mut program = Program::new();
//! program.push(vec![Instruction::PushInt(2), Instruction::PushInt(3), Instruction::Plus]);
//!
//! let mut out: Vec<u8> = Vec::new();
//! let stack = run_with_output(&program, &mut out).unwrap();
//! assert_eq!(stack, vec![5]);
//! assert!(out.is_empty());
//! ```

pub mod error;
pub mod execute;
pub mod machine;

pub use error::RuntimeError;
pub use machine::Machine;

use std::io::{self, Write};

use tinystack_common::Program;

/// Execute a program from an empty stack, printing to stdout.
///
/// Returns the final stack, bottom-first.
///
/// # Errors
///
/// Returns [`RuntimeError`] if an instruction underflows the stack or
/// output cannot be written.
pub fn run(program: &Program) -> Result<Vec<i64>, RuntimeError> {
    let stdout = io::stdout();
    run_with_output(program, stdout.lock())
}

/// Execute a program from an empty stack, printing to `out`.
pub fn run_with_output<W: Write>(program: &Program, out: W) -> Result<Vec<i64>, RuntimeError> {
    let mut vm = Machine::new(out);
    vm.execute(program)?;
    Ok(vm.into_stack())
}
