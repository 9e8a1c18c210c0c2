//! Loop exercises: skipping an iteration and stopping at the first duplicate.

use std::collections::HashSet;
use std::hash::Hash;

/// Rows of `n`'s multiplication table for `1..=10`, leaving out row `skip`.
/// `None` if any printed product overflows `i64`.
pub fn multiplication_table(n: i64, skip: Option<i64>) -> Option<Vec<String>> {
    (1..=10i64)
        .filter(|i| Some(*i) != skip)
        .map(|i| n.checked_mul(i).map(|p| format!("{n} x {i} = {p}")))
        .collect()
}

/// First item that already appeared earlier in `items`, scanning left to right.
pub fn first_duplicate<T>(items: &[T]) -> Option<&T>
where
    T: Eq + Hash,
{
    let mut seen = HashSet::with_capacity(items.len());
    items.iter().find(|item| !seen.insert(*item))
}
