//! Validated-input retry loop.

use std::fmt::Display;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::console::Console;
use super::error::{ParseError, PromptError};

/// Diagnostic written after a rejected attempt when none is configured.
pub const DEFAULT_REJECTION: &str = "Invalid input. Please try again.";

/// Knobs for [`Console::ask_until`].
///
/// The default is the plain exercise behaviour: unbounded attempts, no
/// cancellation, generic rejection message.
#[derive(Debug, Clone)]
pub struct AskOptions {
    /// Line written after every rejected attempt.
    pub rejection: String,
    /// Give up after this many attempts (None = keep asking forever).
    pub max_attempts: Option<u32>,
    /// Checked before each prompt; when set the loop returns `Cancelled`.
    pub abort: Option<Arc<AtomicBool>>,
}

impl Default for AskOptions {
    fn default() -> Self {
        Self {
            rejection: DEFAULT_REJECTION.to_string(),
            max_attempts: None,
            abort: None,
        }
    }
}

impl AskOptions {
    pub fn with_rejection(mut self, rejection: impl Into<String>) -> Self {
        self.rejection = rejection.into();
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_abort(mut self, token: Arc<AtomicBool>) -> Self {
        self.abort = Some(token);
        self
    }

    fn cancelled(&self) -> bool {
        self.abort
            .as_ref()
            .is_some_and(|t| t.load(Ordering::Relaxed))
    }
}

/// Trim `text` and parse it as `T`, keeping the trimmed text in the error.
pub fn parse_trimmed<T>(text: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    let trimmed = text.trim();
    trimmed
        .parse::<T>()
        .map_err(|e| ParseError::new(trimmed, e.to_string()))
}

/// Parse a whole number, ignoring surrounding whitespace.
pub fn parse_int(text: &str) -> Result<i64, ParseError> {
    parse_trimmed(text)
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Prompt until `parse` succeeds and `valid` accepts the value.
    ///
    /// Both malformed text and out-of-domain values are rejected the same
    /// way: the rejection line is written and the prompt repeats. Only I/O
    /// failure, end of input, cancellation, or an exhausted attempt limit end
    /// the loop without a value.
    pub fn ask_until<T, P, V>(
        &mut self,
        prompt: &str,
        options: &AskOptions,
        mut parse: P,
        mut valid: V,
    ) -> Result<T, PromptError>
    where
        P: FnMut(&str) -> Result<T, ParseError>,
        V: FnMut(&T) -> bool,
    {
        let mut attempt = 1u32;
        loop {
            if options.cancelled() {
                tracing::debug!(attempt, "input cancelled");
                return Err(PromptError::Cancelled);
            }

            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) if valid(&value) => {
                    tracing::debug!(attempt, "input accepted");
                    return Ok(value);
                }
                Ok(_) => {
                    tracing::debug!(attempt, input = %line.trim(), "input rejected: fails validation");
                }
                Err(e) => {
                    tracing::debug!(attempt, error = %e, "input rejected: parse failed");
                }
            }
            self.say(&options.rejection)?;

            if let Some(max) = options.max_attempts {
                if attempt >= max {
                    return Err(PromptError::AttemptsExhausted { attempts: attempt });
                }
            }
            attempt += 1;
        }
    }
}

/// Keep asking for a whole number inside `range` (inclusive).
pub fn ask_in_range<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    range: RangeInclusive<i64>,
    options: &AskOptions,
) -> Result<i64, PromptError> {
    console.ask_until(prompt, options, parse_int, |n| range.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const PROMPT: &str = "Enter a number between 1 and 10: ";

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(c: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(c.into_output()).unwrap()
    }

    #[test]
    fn returns_first_value_in_range_after_rejections() {
        let mut c = console("0\n15\nabc\n7\n3\n");
        let opts = AskOptions::default().with_rejection("Invalid number. Please try again.");
        let n = ask_in_range(&mut c, PROMPT, 1..=10, &opts).unwrap();
        assert_eq!(n, 7);

        let out = output(c);
        assert_eq!(out.matches("Invalid number. Please try again.").count(), 3);
        assert_eq!(out.matches(PROMPT).count(), 4);
    }

    #[test]
    fn accepts_bounds_inclusively() {
        let mut c = console("1\n");
        assert_eq!(ask_in_range(&mut c, PROMPT, 1..=10, &AskOptions::default()).unwrap(), 1);
        let mut c = console("10\n");
        assert_eq!(ask_in_range(&mut c, PROMPT, 1..=10, &AskOptions::default()).unwrap(), 10);
    }

    #[test]
    fn end_of_input_stops_unbounded_loop() {
        let mut c = console("0\n11\n");
        let err = ask_in_range(&mut c, PROMPT, 1..=10, &AskOptions::default()).unwrap_err();
        assert!(matches!(err, PromptError::InputClosed));
    }

    #[test]
    fn respects_max_attempts() {
        let mut c = console("0\n11\n5\n");
        let opts = AskOptions::default().with_max_attempts(Some(2));
        let err = ask_in_range(&mut c, PROMPT, 1..=10, &opts).unwrap_err();
        assert!(matches!(err, PromptError::AttemptsExhausted { attempts: 2 }));
    }

    #[test]
    fn max_attempts_not_hit_when_value_arrives_in_time() {
        let mut c = console("0\n5\n");
        let opts = AskOptions::default().with_max_attempts(Some(2));
        assert_eq!(ask_in_range(&mut c, PROMPT, 1..=10, &opts).unwrap(), 5);
    }

    #[test]
    fn abort_token_cancels_before_prompting() {
        let token = Arc::new(AtomicBool::new(true));
        let mut c = console("5\n");
        let opts = AskOptions::default().with_abort(Arc::clone(&token));
        let err = ask_in_range(&mut c, PROMPT, 1..=10, &opts).unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
        assert!(output(c).is_empty());
    }

    #[test]
    fn abort_token_set_by_predicate_stops_next_round() {
        let token = Arc::new(AtomicBool::new(false));
        let mut c = console("x\ny\nz\n");
        let opts = AskOptions::default().with_abort(Arc::clone(&token));
        let err = c
            .ask_until(
                "word: ",
                &opts,
                |s| Ok(s.to_string()),
                |_| {
                    token.store(true, Ordering::Relaxed);
                    false
                },
            )
            .unwrap_err();
        assert!(matches!(err, PromptError::Cancelled));
    }

    #[test]
    fn custom_parse_and_predicate() {
        let mut c = console("Fish\n cat \n");
        let species = c
            .ask_until(
                "Species: ",
                &AskOptions::default(),
                |s| Ok(s.trim().to_lowercase()),
                |s| s == "dog" || s == "cat",
            )
            .unwrap();
        assert_eq!(species, "cat");
    }

    #[test]
    fn parse_int_trims_and_reports_input() {
        assert_eq!(parse_int("  42\t").unwrap(), 42);
        assert_eq!(parse_int("-3").unwrap(), -3);
        let err = parse_int(" 4x ").unwrap_err();
        assert_eq!(err.input, "4x");
        assert!(!err.reason.is_empty());
    }
}
