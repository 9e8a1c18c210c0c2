//! Explicit has-next / next iteration.
//!
//! [`Cursor`] exposes the iteration protocol step by step. Running out of
//! items is an ordinary `None`, so callers loop on [`Cursor::has_next`]
//! instead of catching an end-of-sequence signal.

use std::iter::Peekable;

pub struct Cursor<I: Iterator> {
    inner: Peekable<I>,
}

impl<I: Iterator> Cursor<I> {
    pub fn new<T>(items: T) -> Self
    where
        T: IntoIterator<IntoIter = I>,
    {
        Self {
            inner: items.into_iter().peekable(),
        }
    }

    /// True while another item is available. Does not consume it.
    pub fn has_next(&mut self) -> bool {
        self.inner.peek().is_some()
    }

    /// Take the next item, or `None` once the sequence is exhausted.
    /// Calling again after exhaustion keeps returning `None`.
    pub fn next_item(&mut self) -> Option<I::Item> {
        self.inner.next()
    }
}

/// Walk `cursor` to the end, handing each item to `visit`. Returns how many
/// items were visited.
pub fn drain_with_cursor<I, F>(cursor: &mut Cursor<I>, mut visit: F) -> usize
where
    I: Iterator,
    F: FnMut(I::Item),
{
    let mut visited = 0;
    while cursor.has_next() {
        if let Some(item) = cursor.next_item() {
            visit(item);
            visited += 1;
        }
    }
    visited
}
