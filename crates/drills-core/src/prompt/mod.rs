//! Console prompting and the validated-input retry loop.
//!
//! [`Console`] wraps any `BufRead` + `Write` pair so the interactive
//! exercises can run against stdin/stdout or against in-memory buffers in
//! tests. [`Console::ask`] is a single-shot typed read whose parse failures
//! are fatal; [`Console::ask_until`] keeps re-prompting until a value both
//! parses and satisfies the caller's predicate.

mod ask;
mod console;
mod error;

pub use ask::{ask_in_range, parse_int, parse_trimmed, AskOptions, DEFAULT_REJECTION};
pub use console::Console;
pub use error::{ParseError, PromptError};
