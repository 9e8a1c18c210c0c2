//! Positional and named argument collections passed explicitly.

use std::fmt;

/// Sum any number of positional values. `None` if the total overflows `i64`.
pub fn sum_all(values: &[i64]) -> Option<i64> {
    values.iter().try_fold(0i64, |acc, v| acc.checked_add(*v))
}

/// Named arguments in the order they were given.
///
/// Setting a key that already exists replaces its value but keeps its
/// original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordArgs {
    entries: Vec<(String, String)>,
}

impl KeywordArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// One `key: value` line per entry.
    pub fn describe_keywords(&self) -> Vec<String> {
        self.iter().map(|(k, v)| format!("{k}: {v}")).collect()
    }
}

impl<K, V> FromIterator<(K, V)> for KeywordArgs
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut args = KeywordArgs::new();
        for (k, v) in iter {
            args.set(k, v);
        }
        args
    }
}

/// Single-quoted mapping form: `{'name': 'Shaktiman', 'power': 'laser'}`.
impl fmt::Display for KeywordArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (k, v)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{k}': '{v}'")?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums() {
        assert_eq!(sum_all(&[1, 2]), Some(3));
        assert_eq!(sum_all(&[1, 2, 3, 4, 5]), Some(15));
        assert_eq!(sum_all(&[6, 7, 8, 9, 10, 11]), Some(51));
        assert_eq!(sum_all(&[]), Some(0));
    }

    #[test]
    fn sum_overflow_is_none() {
        assert_eq!(sum_all(&[i64::MAX, 1]), None);
        assert_eq!(sum_all(&[i64::MIN, -1]), None);
        // Intermediate values stay in range here.
        assert_eq!(sum_all(&[i64::MAX, -1, 1]), Some(i64::MAX));
    }

    #[test]
    fn keeps_insertion_order() {
        let args: KeywordArgs = [
            ("name", "Shaktiman"),
            ("power", "laser"),
            ("enemy", "Dr. Jackaal"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            args.describe_keywords(),
            vec!["name: Shaktiman", "power: laser", "enemy: Dr. Jackaal"]
        );
        assert_eq!(
            args.to_string(),
            "{'name': 'Shaktiman', 'power': 'laser', 'enemy': 'Dr. Jackaal'}"
        );
    }

    #[test]
    fn repeated_key_replaces_in_place() {
        let mut args = KeywordArgs::new();
        args.set("a", "1");
        args.set("b", "2");
        args.set("a", "3");
        assert_eq!(args.len(), 2);
        assert_eq!(args.get("a"), Some("3"));
        assert_eq!(args.iter().next(), Some(("a", "3")));
    }

    #[test]
    fn empty_display() {
        assert!(KeywordArgs::new().is_empty());
        assert_eq!(KeywordArgs::new().to_string(), "{}");
    }
}
