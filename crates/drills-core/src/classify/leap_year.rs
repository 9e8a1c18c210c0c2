//! Gregorian leap-year rule.

/// Divisible by 4 and not by 100, or divisible by 400.
///
/// Defined for every `i64`; years before 1 follow the proleptic calendar.
pub fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn century_rules() {
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2023));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(1600));
    }

    #[test]
    fn zero_and_negative_years() {
        assert!(is_leap_year(0));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(-100));
        assert!(is_leap_year(-400));
    }

    proptest! {
        #[test]
        fn matches_rule_for_all_years(y in any::<i64>()) {
            let expected = (y % 4 == 0 && y % 100 != 0) || y % 400 == 0;
            prop_assert_eq!(is_leap_year(y), expected);
        }

        #[test]
        fn repeats_every_400_years(y in -1_000_000i64..1_000_000) {
            prop_assert_eq!(is_leap_year(y), is_leap_year(y + 400));
        }
    }
}
