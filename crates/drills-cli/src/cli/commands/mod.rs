//! CLI command handlers, one file per exercise.
//!
//! Every handler writes through a [`Console`](drills_core::prompt::Console)
//! so tests can drive it with in-memory input and capture the output.

mod backoff;
mod circle;
mod completions;
mod evens;
mod factorial;
mod iterate;
mod kwargs;
mod leap_year;
mod password;
mod pet_food;
mod range;
mod scope;
mod sum;
mod table;
mod unique;

pub use backoff::{run_backoff, BackoffOverrides};
pub use circle::run_circle;
pub use completions::run_completions;
pub use evens::run_evens;
pub use factorial::run_factorial;
pub use iterate::run_iterate;
pub use kwargs::{parse_key_val, run_kwargs};
pub use leap_year::run_leap_year;
pub use password::run_password;
pub use pet_food::run_pet_food;
pub use range::{run_range, RangeOverrides};
pub use scope::run_scope;
pub use sum::run_sum;
pub use table::run_table;
pub use unique::run_unique;
