//! Leading-zero removal
//!
//! The parser decides overflow by digit count first, so `"00000000042"` must
//! be reduced to `"42"` before its length means anything.

use std::borrow::Cow;

/// Remove leading zeroes from a number in either signed form.
///
/// `"0042"` becomes `"42"`, `"-0042"` becomes `"-42"`. A run of zeroes keeps its
/// last one (`"000"` becomes `"0"`, `"-00"` becomes `"-0"`). Anything after the
/// zeroes is left alone, digit or not.
pub fn ltrim_zeroes(number: &str) -> Cow<'_, str> {
    match number.strip_prefix('-') {
        Some(body) => ltrim_zeroes_negative(number, body),
        None => Cow::Borrowed(ltrim_zeroes_positive(number)),
    }
}

fn ltrim_zeroes_negative<'a>(number: &'a str, body: &'a str) -> Cow<'a, str> {
    let digits = ltrim_zeroes_positive(body);
    if digits.len() == body.len() {
        Cow::Borrowed(number)
    } else {
        Cow::Owned(format!("-{}", digits))
    }
}

/// Unsigned form; returns a suffix of `digits`.
pub(crate) fn ltrim_zeroes_positive(digits: &str) -> &str {
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() && !digits.is_empty() {
        &digits[digits.len() - 1..]
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive() {
        assert_eq!(ltrim_zeroes("0007"), "7");
        assert_eq!(ltrim_zeroes("7000"), "7000");
        assert_eq!(ltrim_zeroes("000"), "0");
        assert_eq!(ltrim_zeroes("0"), "0");
        assert_eq!(ltrim_zeroes(""), "");
        assert_eq!(ltrim_zeroes("00a1"), "a1");
    }

    #[test]
    fn test_negative() {
        assert_eq!(ltrim_zeroes("-007"), "-7");
        assert_eq!(ltrim_zeroes("-00"), "-0");
        assert_eq!(ltrim_zeroes("-"), "-");
        assert!(matches!(ltrim_zeroes("-12"), Cow::Borrowed("-12")));
    }

    #[test]
    fn test_positive_returns_suffix() {
        let input = "000123";
        let trimmed = ltrim_zeroes_positive(input);
        assert_eq!(input.len() - trimmed.len(), 3);
    }
}
