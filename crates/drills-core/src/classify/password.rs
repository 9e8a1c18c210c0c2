//! Password strength by length.

use std::fmt;

/// Passwords shorter than this are weak.
const MEDIUM_MIN_LEN: usize = 6;
/// Passwords longer than this are strong.
const MEDIUM_MAX_LEN: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `< 6` Weak, `6..=10` Medium, `> 10` Strong.
pub fn classify_password(len: usize) -> PasswordStrength {
    if len < MEDIUM_MIN_LEN {
        PasswordStrength::Weak
    } else if len <= MEDIUM_MAX_LEN {
        PasswordStrength::Medium
    } else {
        PasswordStrength::Strong
    }
}

/// Classify a raw password. Surrounding whitespace is ignored and length is
/// counted in characters, not bytes.
pub fn password_strength(password: &str) -> PasswordStrength {
    classify_password(password.trim().chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries() {
        assert_eq!(classify_password(0), PasswordStrength::Weak);
        assert_eq!(classify_password(5), PasswordStrength::Weak);
        assert_eq!(classify_password(6), PasswordStrength::Medium);
        assert_eq!(classify_password(10), PasswordStrength::Medium);
        assert_eq!(classify_password(11), PasswordStrength::Strong);
    }

    #[test]
    fn whitespace_is_trimmed_before_counting() {
        assert_eq!(password_strength("  abcde  "), PasswordStrength::Weak);
        assert_eq!(password_strength("\tabcdef\n"), PasswordStrength::Medium);
    }

    #[test]
    fn counts_characters_not_bytes() {
        // Six characters, twelve bytes.
        assert_eq!(password_strength("ééééée"), PasswordStrength::Medium);
    }

    #[test]
    fn labels() {
        assert_eq!(PasswordStrength::Weak.to_string(), "Weak");
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
        assert_eq!(PasswordStrength::Strong.to_string(), "Strong");
    }

    proptest! {
        #[test]
        fn every_length_maps_to_its_band(len in 0usize..10_000) {
            let expected = if len < 6 {
                PasswordStrength::Weak
            } else if len <= 10 {
                PasswordStrength::Medium
            } else {
                PasswordStrength::Strong
            };
            prop_assert_eq!(classify_password(len), expected);
        }
    }
}
