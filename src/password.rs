// SPDX-License-Identifier: 0BSD

//! Day 4: password-range validation
//!
//! A valid password sits within the puzzle's bounds, its digits never
//! decrease left to right, and some digit appears in a group of exactly two.
//! The stricter pair rule already covers the puzzle's first part, so there is
//! a single validator and a single count.

use itertools::Itertools;
use std::ops::RangeInclusive;

/// The loosest bounds a six-digit password can have
pub const SIX_DIGIT_BOUNDS: RangeInclusive<u32> = 111111..=999999;

/// Whether the code's digits never decrease from left to right
///
/// ```rust
/// use aoc2019::password::digits_never_decrease;
/// assert!(digits_never_decrease(111123));
/// assert!(!digits_never_decrease(223450));
/// ```
pub fn digits_never_decrease(code: u32) -> bool {
    code.to_string()
        .into_bytes()
        .into_iter()
        .tuple_windows()
        .all(|(a, b)| a <= b)
}

/// Whether some digit appears exactly twice in the code
///
/// A larger group doesn't count: `123444` has no standalone pair, while
/// `111122` does (the two 2s, regardless of the four 1s).
pub fn has_standalone_pair(code: u32) -> bool {
    code.to_string()
        .into_bytes()
        .into_iter()
        .counts()
        .into_values()
        .any(|count| count == 2)
}

/// Whether `code` is within `bounds` and satisfies both digit rules
pub fn is_valid_password(code: u32, bounds: &RangeInclusive<u32>) -> bool {
    bounds.contains(&code) && digits_never_decrease(code) && has_standalone_pair(code)
}

/// Count the valid passwords within `bounds`
pub fn count_valid(bounds: RangeInclusive<u32>) -> usize {
    bounds
        .clone()
        .filter(|code| is_valid_password(*code, &bounds))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(is_valid_password(112233, &SIX_DIGIT_BOUNDS));
        assert!(is_valid_password(111122, &SIX_DIGIT_BOUNDS));
    }

    #[test]
    fn wrong_digit_counts_are_invalid() {
        assert!(!is_valid_password(12345, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(1234567, &SIX_DIGIT_BOUNDS));
    }

    #[test]
    fn out_of_bounds_codes_are_invalid() {
        assert!(!is_valid_password(111111, &(222222..=333333)));
        assert!(!is_valid_password(777777, &(222222..=333333)));
    }

    #[test]
    fn codes_without_a_pair_are_invalid() {
        assert!(!is_valid_password(123456, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(123789, &SIX_DIGIT_BOUNDS));
    }

    #[test]
    fn decreasing_digits_are_invalid() {
        assert!(!is_valid_password(664321, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(223450, &SIX_DIGIT_BOUNDS));
        // the pair of 2s doesn't save a code whose digits decrease
        assert!(!is_valid_password(123256, &SIX_DIGIT_BOUNDS));
    }

    /// A group larger than two is not a pair
    #[test]
    fn larger_groups_are_not_pairs() {
        assert!(!is_valid_password(111111, &SIX_DIGIT_BOUNDS));
        assert!(!is_valid_password(123444, &SIX_DIGIT_BOUNDS));
    }

    #[test]
    fn count_over_a_small_range() {
        // only 111122 and 111133 qualify: everything between either has its
        // lone 2 in no pair or decreases at the tens digit
        assert_eq!(count_valid(111122..=111133), 2);
    }
}
