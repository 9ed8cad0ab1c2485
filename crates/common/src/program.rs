//! Program representation: an append-only sequence of assembled lines.

use std::fmt;

use crate::instruction::Instruction;

/// The instructions assembled from one accepted source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    index: usize,
    instructions: Vec<Instruction>,
}

impl Line {
    /// Create a line that is not (yet) part of a program.
    ///
    /// `Program::push` assigns indices for committed lines; this constructor
    /// exists for callers that want to execute a candidate line before
    /// committing it.
    pub fn new(index: usize, instructions: Vec<Instruction>) -> Self {
        Self {
            index,
            instructions,
        }
    }

    /// Zero-based count of lines accepted before this one.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}:", self.index)?;
        for instr in &self.instructions {
            write!(f, " {instr}")?;
        }
        Ok(())
    }
}

/// A tinystack program.
///
/// Lines are only ever appended; once pushed, a line is never changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line and return it. Its index is the number of lines
    /// already in the program.
    pub fn push(&mut self, instructions: Vec<Instruction>) -> &Line {
        let index = self.lines.len();
        self.lines.push(Line::new(index, instructions));
        &self.lines[index]
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Number of lines in the program.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the program has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of instructions across all lines.
    pub fn instruction_count(&self) -> usize {
        self.lines.iter().map(|line| line.instructions.len()).sum()
    }

    /// Render the program listing, one text line per program line.
    ///
    /// ```text
    /// Line 0: push_int(2) push_int(3) + print
    /// ```
    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_program() {
        let program = Program::new();
        assert!(program.is_empty());
        assert_eq!(program.len(), 0);
        assert_eq!(program.instruction_count(), 0);
        assert_eq!(program.dump(), "");
    }

    #[test]
    fn push_assigns_sequential_indices() {
        let mut program = Program::new();
        assert_eq!(program.push(vec![Instruction::PushInt(1)]).index(), 0);
        assert_eq!(program.push(vec![Instruction::Print]).index(), 1);
        assert_eq!(program.push(vec![]).index(), 2);
        assert_eq!(program.len(), 3);
    }

    #[test]
    fn push_returns_the_appended_line() {
        let mut program = Program::new();
        let line = program.push(vec![Instruction::PushInt(5), Instruction::Print]);
        assert_eq!(
            line.instructions(),
            &[Instruction::PushInt(5), Instruction::Print]
        );
    }

    #[test]
    fn instruction_count_sums_lines() {
        let mut program = Program::new();
        program.push(vec![Instruction::PushInt(1), Instruction::PushInt(2)]);
        program.push(vec![Instruction::Plus, Instruction::Print]);
        assert_eq!(program.instruction_count(), 4);
    }

    #[test]
    fn dump_format() {
        let mut program = Program::new();
        program.push(vec![
            Instruction::PushInt(2),
            Instruction::PushInt(3),
            Instruction::Plus,
            Instruction::Print,
        ]);
        program.push(vec![Instruction::PushInt(-4), Instruction::Minus]);
        assert_eq!(
            program.dump(),
            "Line 0: push_int(2) push_int(3) + print\nLine 1: push_int(-4) -\n"
        );
    }

    #[test]
    fn dump_empty_line() {
        let mut program = Program::new();
        program.push(vec![]);
        assert_eq!(program.dump(), "Line 0:\n");
    }

    #[test]
    fn dump_is_repeatable() {
        let mut program = Program::new();
        program.push(vec![Instruction::PushInt(1), Instruction::Print]);
        let before = program.clone();
        assert_eq!(program.dump(), program.dump());
        assert_eq!(program, before);
    }

    #[test]
    fn candidate_line_roundtrips_instructions() {
        let line = Line::new(3, vec![Instruction::Plus]);
        assert_eq!(line.index(), 3);
        assert_eq!(line.into_instructions(), vec![Instruction::Plus]);
    }
}
