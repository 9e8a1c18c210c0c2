//! Error types for console input.

use thiserror::Error;

/// Input text that could not be converted to the expected type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input {input:?}: {reason}")]
pub struct ParseError {
    /// The offending text, already trimmed.
    pub input: String,
    /// Why conversion failed (from the target type's `FromStr` error).
    pub reason: String,
}

impl ParseError {
    pub fn new(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Failure to obtain a value from the console.
///
/// Values that parse but fail validation never surface here; the retry
/// loop recovers from those by re-prompting.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Reading stdin or writing the prompt failed.
    #[error("console i/o: {0}")]
    Io(#[from] std::io::Error),
    /// End of input reached while waiting for a line.
    #[error("input closed before a value was entered")]
    InputClosed,
    /// A single-shot prompt received text of the wrong shape.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A configured attempt limit ran out.
    #[error("no valid value after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
    /// The abort token was set before a valid value arrived.
    #[error("input cancelled")]
    Cancelled,
}
