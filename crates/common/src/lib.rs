//! tinystack common types.
//!
//! This crate provides the instruction model shared by the assembler and
//! the machine:
//!
//! - [`InstructionKind`]: the closed set of operations and their [`Arity`]
//! - [`Instruction`]: a typed instruction; only pushes carry an operand
//! - [`Line`]: the instructions assembled from one source line
//! - [`Program`]: an append-only sequence of lines
//!
//! # Dependencies
//!
//! None outside the standard library.

pub mod instruction;
pub mod kind;
pub mod program;

// Re-export commonly used types at the crate root.
pub use instruction::Instruction;
pub use kind::{Arity, InstructionKind};
pub use program::{Line, Program};
