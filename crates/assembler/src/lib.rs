//! tinystack assembler: source lines → typed instructions.
//!
//! Each accepted source line becomes exactly one [`Line`] of the
//! [`Program`]. Assembly of a line is atomic: either every token becomes an
//! instruction and the line is appended, or the program is left untouched.
//!
//! # Usage
//!
//! ```
//! use tinystack_assembler::assemble;
//!
//! let program = assemble("# add two numbers\n2 3 + print\n").unwrap();
//! assert_eq!(program.len(), 1);
//! assert_eq!(program.dump(), "Line 0: push_int(2) push_int(3) + print\n");
//! ```

pub mod error;

mod lexer;
mod parser;

pub use error::{AsmError, SourceError};
pub use lexer::tokenize_line;
pub use parser::parse_tokens;

use tinystack_common::{Line, Program};

/// Assemble a line's tokens and append the result to `program`.
///
/// On error nothing is appended.
pub fn assemble_tokens<'p>(
    program: &'p mut Program,
    tokens: &[&str],
) -> Result<&'p Line, AsmError> {
    let instructions = parse_tokens(tokens)?;
    Ok(program.push(instructions))
}

/// Tokenize and assemble one raw source line.
///
/// Returns `Ok(None)` for blank and comment lines, which are skipped without
/// touching the program.
pub fn assemble_line<'p>(
    program: &'p mut Program,
    line: &str,
) -> Result<Option<&'p Line>, AsmError> {
    match tokenize_line(line) {
        Some(tokens) => assemble_tokens(program, &tokens).map(Some),
        None => Ok(None),
    }
}

/// Assemble a whole source text into a fresh program.
///
/// Returns the first error encountered, tagged with its 1-based source line.
pub fn assemble(text: &str) -> Result<Program, SourceError> {
    let mut program = Program::new();

    for (idx, line) in text.lines().enumerate() {
        assemble_line(&mut program, line).map_err(|error| SourceError {
            line: idx + 1,
            error,
        })?;
    }

    Ok(program)
}
