/// Even numbers from 0 up to `limit` inclusive.
///
/// Holds only the limit; every call to [`EvenNumbers::iter`] starts a fresh
/// traversal, so the sequence can be walked any number of times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvenNumbers {
    pub limit: i64,
}

impl EvenNumbers {
    pub fn new(limit: i64) -> Self {
        Self { limit }
    }

    pub fn iter(&self) -> impl Iterator<Item = i64> {
        (0..=self.limit).step_by(2)
    }
}

impl IntoIterator for &EvenNumbers {
    type Item = i64;
    type IntoIter = std::iter::StepBy<std::ops::RangeInclusive<i64>>;

    fn into_iter(self) -> Self::IntoIter {
        (0..=self.limit).step_by(2)
    }
}
