//! Machine state: the operand stack and the output sink.

use std::io::Write;

use crate::error::RuntimeError;
use tinystack_common::InstructionKind;

/// The tinystack machine.
///
/// The stack is stored bottom-first: index 0 is the oldest value, the last
/// element is the top.
pub struct Machine<W: Write> {
    /// Operand stack.
    pub(crate) stack: Vec<i64>,
    /// Where `print` writes popped values, one per line.
    pub(crate) out: W,
    /// Optional cap on stack depth. `None` means unbounded.
    pub(crate) max_depth: Option<usize>,
    /// Index of the program line currently executing.
    pub(crate) line: usize,
    /// Instructions executed so far.
    pub(crate) steps: usize,
}

impl<W: Write> Machine<W> {
    /// Create a machine with an empty stack.
    pub fn new(out: W) -> Self {
        Self::with_stack(Vec::new(), out)
    }

    /// Create a machine that starts from a caller-supplied stack (bottom-first).
    pub fn with_stack(stack: Vec<i64>, out: W) -> Self {
        Self {
            stack,
            out,
            max_depth: None,
            line: 0,
            steps: 0,
        }
    }

    /// Limit the stack to `limit` values. Pushing past it is a
    /// [`RuntimeError::StackOverflow`].
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Current stack contents, bottom-first.
    pub fn stack(&self) -> &[i64] {
        &self.stack
    }

    /// Consume the machine, returning the stack bottom-first.
    pub fn into_stack(self) -> Vec<i64> {
        self.stack
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fail unless the stack can satisfy `kind`'s pop arity.
    ///
    /// Checked before any value is popped, so a failing instruction leaves
    /// the stack exactly as it found it.
    pub(crate) fn check_arity(&self, kind: InstructionKind) -> Result<(), RuntimeError> {
        let needed = kind.arity().pops;
        if self.stack.len() < needed {
            return Err(RuntimeError::StackUnderflow {
                kind,
                line: self.line,
                needed,
                available: self.stack.len(),
            });
        }
        Ok(())
    }

    /// Push a value onto the stack, checking the depth limit.
    pub(crate) fn push(&mut self, value: i64) -> Result<(), RuntimeError> {
        if let Some(limit) = self.max_depth {
            if self.stack.len() >= limit {
                return Err(RuntimeError::StackOverflow {
                    line: self.line,
                    limit,
                });
            }
        }
        self.stack.push(value);
        Ok(())
    }

    /// Pop a value from the stack.
    pub(crate) fn pop(&mut self, kind: InstructionKind) -> Result<i64, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow {
            kind,
            line: self.line,
            needed: kind.arity().pops,
            available: 0,
        })
    }
}
