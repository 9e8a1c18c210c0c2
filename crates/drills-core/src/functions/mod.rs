//! Function exercises: multiple return values, variadic arguments,
//! recursion and a restartable lazy sequence.

mod circle;
mod evens;
mod factorial;
mod variadic;

pub use circle::{circle_stats, CircleStats};
pub use evens::EvenNumbers;
pub use factorial::factorial;
pub use variadic::{sum_all, KeywordArgs};
