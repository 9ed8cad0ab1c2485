//! Execution loop and instruction dispatch.

use std::io::Write;

use crate::error::RuntimeError;
use crate::machine::Machine;
use tinystack_common::{Instruction, InstructionKind, Line, Program};

impl<W: Write> Machine<W> {
    /// Execute every line of `program` in order against the current stack.
    pub fn execute(&mut self, program: &Program) -> Result<(), RuntimeError> {
        self.execute_lines(program.lines())
    }

    /// Execute the given lines in order, stopping at the first error.
    ///
    /// Nothing after a failing instruction runs; the stack keeps whatever
    /// earlier instructions left on it.
    pub fn execute_lines<'p, I>(&mut self, lines: I) -> Result<(), RuntimeError>
    where
        I: IntoIterator<Item = &'p Line>,
    {
        for line in lines {
            self.line = line.index();
            for instr in line.instructions() {
                self.step(instr)?;
            }
        }
        Ok(())
    }

    /// Execute a single instruction. Only instructions that complete are
    /// counted in [`Machine::steps`].
    pub fn step(&mut self, instr: &Instruction) -> Result<(), RuntimeError> {
        let kind = instr.kind();
        self.check_arity(kind)?;

        match *instr {
            Instruction::PushInt(value) => self.push(value)?,
            Instruction::Plus => self.exec_binary(kind, i64::wrapping_add)?,
            Instruction::Minus => self.exec_binary(kind, i64::wrapping_sub)?,
            Instruction::Print => self.exec_print(kind)?,
        }
        self.steps += 1;
        Ok(())
    }

    /// Pop `b` (top) then `a`, push `op(a, b)`.
    fn exec_binary(
        &mut self,
        kind: InstructionKind,
        op: fn(i64, i64) -> i64,
    ) -> Result<(), RuntimeError> {
        let b = self.pop(kind)?;
        let a = self.pop(kind)?;
        self.push(op(a, b))
    }

    fn exec_print(&mut self, kind: InstructionKind) -> Result<(), RuntimeError> {
        let value = self.pop(kind)?;
        writeln!(self.out, "{value}").map_err(|e| RuntimeError::Output {
            message: e.to_string(),
        })
    }
}
