//! Interactive session: one growing program, re-executed every turn.
//!
//! Each turn appends the entered line as soon as it assembles, then runs the
//! whole program from an empty stack. A line that fails at runtime stays in
//! the program, so later turns hit the same failure. Printed values from
//! earlier lines are printed again on every turn.

use std::io::{self, BufRead, Write};

use thiserror::Error;
use tinystack_assembler::{assemble_line, AsmError};
use tinystack_common::Program;
use tinystack_vm::{Machine, RuntimeError};

pub const BANNER: &str = "Interactive REPL. Type `exit` to quit.";
pub const PROMPT: &str = "> ";
pub const EXIT: &str = "exit";

/// Why a turn failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error(transparent)]
    Assembly(#[from] AsmError),
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// The state that survives between turns.
#[derive(Debug, Default)]
pub struct Session {
    program: Program,
    max_depth: Option<usize>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a stack depth limit to every turn's execution.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Lines accepted so far.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Run one turn, writing printed values to `out`.
    ///
    /// Returns `Ok(None)` for blank and comment lines, otherwise the
    /// residual stack (bottom-first) after re-running the whole program.
    /// An assembly error leaves the program as it was; a runtime error
    /// does not remove the line that was just appended.
    pub fn eval<W: Write>(
        &mut self,
        input: &str,
        out: W,
    ) -> Result<Option<Vec<i64>>, TurnError> {
        if assemble_line(&mut self.program, input)?.is_none() {
            return Ok(None);
        }

        let mut vm = Machine::new(out);
        if let Some(limit) = self.max_depth {
            vm = vm.with_max_depth(limit);
        }
        vm.execute(&self.program)?;
        Ok(Some(vm.into_stack()))
    }
}

/// Render a residual stack as `a, b, c`, bottom-first.
pub fn format_stack(stack: &[i64]) -> String {
    stack
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Drive a session from `input` until `exit` or end of input.
///
/// Turn errors are reported on `out` and do not end the loop; only I/O
/// failures on `input` or `out` do.
pub fn run<R: BufRead, W: Write>(input: R, mut out: W, session: &mut Session) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line == EXIT {
            break;
        }

        match session.eval(line, &mut out) {
            Ok(Some(stack)) if !stack.is_empty() => {
                writeln!(out, ":- {}", format_stack(&stack))?;
            }
            Ok(_) => {}
            Err(e) => writeln!(out, "ERROR: {e}")?,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tinystack_common::InstructionKind;

    type Turn = (Result<Option<Vec<i64>>, TurnError>, String);

    fn eval(session: &mut Session, input: &str) -> Turn {
        let mut out: Vec<u8> = Vec::new();
        let result = session.eval(input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn transcript(input: &str) -> String {
        let mut out: Vec<u8> = Vec::new();
        let mut session = Session::new();
        run(Cursor::new(input), &mut out, &mut session).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn turns_accumulate() {
        let mut session = Session::new();
        let (first, _) = eval(&mut session, "1");
        assert_eq!(first, Ok(Some(vec![1])));

        let (second, out) = eval(&mut session, "2 + print");
        assert_eq!(second, Ok(Some(vec![])));
        assert_eq!(out, "3\n");
        assert_eq!(session.program().len(), 2);
    }

    #[test]
    fn every_turn_reruns_from_empty_stack() {
        let mut session = Session::new();
        eval(&mut session, "5 print").0.unwrap();
        let (result, out) = eval(&mut session, "7");
        assert_eq!(result, Ok(Some(vec![7])));
        // Line 0 runs again, so its print repeats.
        assert_eq!(out, "5\n");
    }

    #[test]
    fn fresh_sessions_are_deterministic() {
        let run_two_turns = || {
            let mut session = Session::new();
            eval(&mut session, "1").0.unwrap();
            eval(&mut session, "2 + print")
        };
        assert_eq!(run_two_turns(), run_two_turns());
    }

    #[test]
    fn assembly_error_keeps_program() {
        let mut session = Session::new();
        eval(&mut session, "1").0.unwrap();
        let (result, out) = eval(&mut session, "2 swap");
        assert_eq!(
            result,
            Err(TurnError::Assembly(AsmError::UnknownToken {
                token: "swap".to_string()
            }))
        );
        assert_eq!(out, "");
        assert_eq!(session.program().len(), 1);
    }

    #[test]
    fn runtime_error_keeps_line() {
        let mut session = Session::new();
        eval(&mut session, "1").0.unwrap();
        let underflow = Err(TurnError::Runtime(RuntimeError::StackUnderflow {
            kind: InstructionKind::Plus,
            line: 1,
            needed: 2,
            available: 1,
        }));

        let (result, _) = eval(&mut session, "+");
        assert_eq!(result, underflow);
        assert_eq!(session.program().len(), 2);

        // Line 1 is re-run first and fails again before the new line.
        let (result, _) = eval(&mut session, "2 +");
        assert_eq!(result, underflow);
        assert_eq!(session.program().len(), 3);
        assert_eq!(session.program().lines()[2].index(), 2);
    }

    #[test]
    fn assembly_error_does_not_consume_index() {
        let mut session = Session::new();
        eval(&mut session, "1").0.unwrap();
        assert!(eval(&mut session, "bogus").0.is_err());
        let (result, _) = eval(&mut session, "+");
        assert!(matches!(
            result,
            Err(TurnError::Runtime(RuntimeError::StackUnderflow { line: 1, .. }))
        ));
        assert_eq!(session.program().len(), 2);
    }

    #[test]
    fn failed_print_line_repeats_output_before_failure() {
        let mut session = Session::new();
        eval(&mut session, "3 print").0.unwrap();
        assert!(eval(&mut session, "print").0.is_err());
        let (result, out) = eval(&mut session, "4");
        assert!(matches!(
            result,
            Err(TurnError::Runtime(RuntimeError::StackUnderflow { line: 1, .. }))
        ));
        assert_eq!(out, "3\n");
    }

    #[test]
    fn blank_and_comment_turns_are_skipped() {
        let mut session = Session::new();
        assert_eq!(eval(&mut session, "   ").0, Ok(None));
        assert_eq!(eval(&mut session, "# nothing").0, Ok(None));
        assert!(session.program().is_empty());
    }

    #[test]
    fn depth_limit_applies_per_turn() {
        let mut session = Session::new().with_max_depth(1);
        eval(&mut session, "1").0.unwrap();
        let (result, _) = eval(&mut session, "2");
        assert_eq!(
            result,
            Err(TurnError::Runtime(RuntimeError::StackOverflow {
                line: 1,
                limit: 1
            }))
        );
    }

    #[test]
    fn format_stack_joins_with_commas() {
        assert_eq!(format_stack(&[]), "");
        assert_eq!(format_stack(&[4]), "4");
        assert_eq!(format_stack(&[1, -2, 3]), "1, -2, 3");
    }

    #[test]
    fn transcript_shows_residual_stack_and_prints() {
        assert_eq!(
            transcript("1\n2 + print\nexit\n"),
            "Interactive REPL. Type `exit` to quit.\n> :- 1\n> 3\n> "
        );
    }

    #[test]
    fn transcript_reports_errors_and_continues() {
        assert_eq!(
            transcript("bogus\nprint\n4\n"),
            "Interactive REPL. Type `exit` to quit.\n\
             > ERROR: unknown token 'bogus'\n\
             > ERROR: stack underflow on 'print' at line 0: needs 1 value(s), found 0\n\
             > ERROR: stack underflow on 'print' at line 0: needs 1 value(s), found 0\n\
             > "
        );
    }

    #[test]
    fn transcript_ends_at_eof_without_exit() {
        assert_eq!(
            transcript("1 2\n"),
            "Interactive REPL. Type `exit` to quit.\n> :- 1, 2\n> "
        );
    }

    #[test]
    fn exit_stops_before_later_lines() {
        let out = transcript("exit\n1 print\n");
        assert_eq!(out, "Interactive REPL. Type `exit` to quit.\n> ");
    }

    #[test]
    fn exit_is_recognised_with_surrounding_whitespace() {
        let out = transcript("  exit  \n1\n");
        assert!(!out.contains(":- 1"));
    }
}
