//! Line-oriented console over an arbitrary reader/writer pair.

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use super::ask::parse_trimmed;
use super::error::PromptError;

/// Prompting console. Prompts are written without a trailing newline and
/// flushed before reading, like an interactive `input()`.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt`, then read one line with its line ending removed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, PromptError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::InputClosed);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(line)
    }

    /// Single-shot typed read. Malformed text is returned as
    /// [`PromptError::Parse`] and is not retried.
    pub fn ask<T>(&mut self, prompt: &str) -> Result<T, PromptError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let line = self.read_line(prompt)?;
        Ok(parse_trimmed(&line)?)
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
