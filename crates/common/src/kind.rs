//! Instruction kinds and their fixed stack arities.

use std::fmt;

/// Identifies the operation an instruction performs.
///
/// The set is closed: every consumer that matches on it is checked for
/// exhaustiveness by the compiler, so a new kind cannot be added without
/// also being given an execution rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// Push the integer operand.
    PushInt,
    /// Pop two values, push their sum.
    Plus,
    /// Pop two values, push (second_popped - first_popped).
    Minus,
    /// Pop one value and write it to the output.
    Print,
}

/// All instruction kinds, in definition order. Useful for exhaustive testing.
pub const ALL_KINDS: [InstructionKind; 4] = [
    InstructionKind::PushInt,
    InstructionKind::Plus,
    InstructionKind::Minus,
    InstructionKind::Print,
];

/// Number of stack values an instruction consumes and produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arity {
    /// Values popped before the effect is applied.
    pub pops: usize,
    /// Values pushed by the effect.
    pub pushes: usize,
}

impl Arity {
    const fn new(pops: usize, pushes: usize) -> Self {
        Self { pops, pushes }
    }
}

impl InstructionKind {
    /// Name used when rendering instructions (`push_int`, `+`, `-`, `print`).
    pub fn name(&self) -> &'static str {
        match self {
            InstructionKind::PushInt => "push_int",
            InstructionKind::Plus => "+",
            InstructionKind::Minus => "-",
            InstructionKind::Print => "print",
        }
    }

    /// The reserved source token for this kind.
    ///
    /// `PushInt` has no keyword: it is written as a bare integer literal.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            InstructionKind::PushInt => None,
            other => Some(other.name()),
        }
    }

    /// Look up a kind by its reserved source token.
    pub fn from_keyword(token: &str) -> Option<Self> {
        ALL_KINDS
            .iter()
            .find(|kind| kind.keyword() == Some(token))
            .copied()
    }

    pub fn arity(&self) -> Arity {
        match self {
            InstructionKind::PushInt => Arity::new(0, 1),
            InstructionKind::Plus | InstructionKind::Minus => Arity::new(2, 1),
            InstructionKind::Print => Arity::new(1, 0),
        }
    }

    /// Whether instructions of this kind carry an integer operand.
    pub fn has_operand(&self) -> bool {
        matches!(self, InstructionKind::PushInt)
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
