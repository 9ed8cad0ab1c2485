//! Error types for the tinystack assembler.

use thiserror::Error;

/// Errors produced while turning a line of tokens into instructions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsmError {
    /// A token is neither a reserved keyword nor a base-10 i64 literal.
    #[error("unknown token '{token}'")]
    UnknownToken { token: String },
}

/// An assembly error tied to the source line it came from.
///
/// `line` is 1-based and counts every raw source line, including blank and
/// comment lines that never become program lines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {error}")]
pub struct SourceError {
    pub line: usize,
    #[source]
    pub error: AsmError,
}
