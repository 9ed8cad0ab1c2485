//! Typed instructions.
//!
//! An instruction is a kind plus, for `PushInt` only, an integer operand.
//! Modelling it as an enum means the operand cannot exist on kinds that do
//! not declare one.

use std::fmt;

use crate::kind::InstructionKind;

/// A single tinystack instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Push the carried value.
    PushInt(i64),
    Plus,
    Minus,
    Print,
}

impl Instruction {
    /// Build the operand-less instruction for a reserved token, if it is one.
    pub fn from_keyword(token: &str) -> Option<Self> {
        match InstructionKind::from_keyword(token)? {
            InstructionKind::Plus => Some(Instruction::Plus),
            InstructionKind::Minus => Some(Instruction::Minus),
            InstructionKind::Print => Some(Instruction::Print),
            InstructionKind::PushInt => None,
        }
    }

    pub fn kind(&self) -> InstructionKind {
        match self {
            Instruction::PushInt(_) => InstructionKind::PushInt,
            Instruction::Plus => InstructionKind::Plus,
            Instruction::Minus => InstructionKind::Minus,
            Instruction::Print => InstructionKind::Print,
        }
    }

    /// The integer operand. `Some` exactly when `kind().has_operand()`.
    pub fn operand(&self) -> Option<i64> {
        match self {
            Instruction::PushInt(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Instruction {
    /// Renders `push_int(<value>)` for pushes and the bare keyword otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand() {
            Some(value) => write!(f, "{}({value})", self.kind().name()),
            None => f.write_str(self.kind().name()),
        }
    }
}
