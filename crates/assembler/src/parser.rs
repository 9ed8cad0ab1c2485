//! Parser for tinystack tokens → instructions.

use crate::error::AsmError;
use tinystack_common::Instruction;

/// Parse a single token.
///
/// Reserved keywords win over integer parsing, so `-` is always `Minus`
/// while `-5` is a push.
pub(crate) fn parse_token(token: &str) -> Result<Instruction, AsmError> {
    if let Some(instr) = Instruction::from_keyword(token) {
        return Ok(instr);
    }

    token
        .parse::<i64>()
        .map(Instruction::PushInt)
        .map_err(|_| AsmError::UnknownToken {
            token: token.to_string(),
        })
}

/// Parse every token of a line, failing on the first unknown one.
pub fn parse_tokens(tokens: &[&str]) -> Result<Vec<Instruction>, AsmError> {
    tokens.iter().map(|token| parse_token(token)).collect()
}
