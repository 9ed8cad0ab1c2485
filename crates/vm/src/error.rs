//! Runtime errors for the tinystack machine.
//!
//! Every error is fatal to the execution pass that raised it. Errors that
//! come from an instruction carry the index of the program line it was
//! assembled from.

use thiserror::Error;
use tinystack_common::InstructionKind;

/// Errors that occur during program execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// The stack held fewer values than the instruction pops.
    #[error(
        "stack underflow on '{kind}' at line {line}: needs {needed} value(s), found {available}"
    )]
    StackUnderflow {
        kind: InstructionKind,
        line: usize,
        needed: usize,
        available: usize,
    },

    /// A push would grow the stack past the configured depth limit.
    #[error("stack overflow at line {line}: depth limit is {limit}")]
    StackOverflow { line: usize, limit: usize },

    /// Writing a printed value to the output failed.
    #[error("failed to write output: {message}")]
    Output { message: String },
}
