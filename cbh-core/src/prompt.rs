//! Blocking yes/no confirmation used before replacing an existing file.

use crate::error::{CbhError, Result};
use std::io::{self, BufRead, Write};

/// Guidance printed after an answer that is neither `y` nor `n`.
pub const INVALID_ANSWER_HINT: &str = "Please enter either 'y' or 'N'";

/// Something that can ask the user a yes/no question.
pub trait Confirm {
    /// Returns `true` when the user agreed.
    fn confirm(&mut self, question: &str) -> Result<bool>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Answer {
    Yes,
    No,
    Invalid,
}

impl Answer {
    fn parse(line: &str) -> Self {
        match line.trim().to_uppercase().as_str() {
            "Y" => Self::Yes,
            "N" => Self::No,
            _ => Self::Invalid,
        }
    }
}

/// Line-oriented prompt over any reader/writer pair.
///
/// Prints `<question>(y/N)?` once and keeps reading lines until one is `y` or
/// `n` (case-insensitive, surrounding whitespace ignored). End of input is a
/// read failure rather than an implicit "no".
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_answer(&mut self) -> Result<Answer> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(CbhError::PromptRead)?;
        if read == 0 {
            return Err(CbhError::PromptRead(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no answer on standard input",
            )));
        }
        Ok(Answer::parse(&line))
    }
}

impl LinePrompt<io::StdinLock<'static>, io::Stdout> {
    /// Prompt on the process's stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        writeln!(self.output, "{}(y/N)?", question).map_err(CbhError::PromptRead)?;
        self.output.flush().map_err(CbhError::PromptRead)?;

        loop {
            match self.read_answer()? {
                Answer::Yes => return Ok(true),
                Answer::No => return Ok(false),
                Answer::Invalid => {
                    tracing::debug!("unrecognised answer, asking again");
                    writeln!(self.output, "{}", INVALID_ANSWER_HINT)
                        .map_err(CbhError::PromptRead)?;
                    self.output.flush().map_err(CbhError::PromptRead)?;
                }
            }
        }
    }
}
