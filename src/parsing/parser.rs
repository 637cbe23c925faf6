//! Try-parse for bounded signed integers
//!
//! Input is trimmed, split into sign and digits, stripped of leading zeroes and
//! then compared by length against the width's [`Limit`]:
//!
//! - fewer digits than the limit: the value fits, accumulate it
//! - as many digits: the leading digit may not exceed the limit's, and if it
//!   equals it the remaining digits may not exceed the limit's last dec
//! - more digits: out of range
//!
//! Digits are accumulated from the least significant end with the sign already
//! applied, so `MIN` is reached without ever holding `-MIN`.
//!
//! The two [`Strategy`] variants differ only in how a digit's contribution is
//! computed: a running power of ten, or a lookup in the boundary table.

use crate::boxes::ValueBox;
use crate::parsing::boundary::{BoundedInt, Limit};
use crate::parsing::error::ParseError;
use crate::parsing::trim::ltrim_zeroes_positive;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How digit contributions are computed. Both give identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Multiply a running positional weight by ten per digit
    #[default]
    Direct,
    /// Index the precomputed `DECVALS` table
    Table,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::Direct, Strategy::Table];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Table => "table",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse `input` into the destination box.
///
/// Returns `false` and leaves `target` untouched when the input is rejected or
/// when no box is given.
pub fn try_parse<T: BoundedInt>(input: &str, target: Option<&mut ValueBox<T>>) -> bool {
    try_parse_with(input, target, Strategy::Direct)
}

/// [`try_parse`] using the table strategy.
pub fn try_parse_with_table<T: BoundedInt>(input: &str, target: Option<&mut ValueBox<T>>) -> bool {
    try_parse_with(input, target, Strategy::Table)
}

pub fn try_parse_with<T: BoundedInt>(
    input: &str,
    target: Option<&mut ValueBox<T>>,
    strategy: Strategy,
) -> bool {
    let Some(target) = target else {
        tracing::debug!(input, "try_parse called without a destination box");
        return false;
    };
    match parse_with::<T>(input, strategy) {
        Ok(value) => {
            target.set(value);
            true
        }
        Err(error) => {
            tracing::trace!(input, width = T::NAME, %strategy, %error, "rejected input");
            false
        }
    }
}

/// Parse `input` as a `T` with the direct strategy.
pub fn parse<T: BoundedInt>(input: &str) -> Result<T, ParseError> {
    parse_with(input, Strategy::Direct)
}

pub fn parse_with<T: BoundedInt>(input: &str, strategy: Strategy) -> Result<T, ParseError> {
    let number = Number::split(input)?;
    let boundary = T::boundary();
    let limit = boundary.limit(number.negative);

    match strategy {
        Strategy::Direct => {
            let ten = boundary.ten();
            let mut weight = T::one();
            accumulate(&number, limit, |position, digit| {
                if position > 0 {
                    weight = weight * ten;
                }
                Some(boundary.digit(digit) * weight)
            })
        }
        Strategy::Table => accumulate(&number, limit, |position, digit| {
            boundary.decval(position, digit)
        }),
    }
}

/// Sign and significant digits of a trimmed input.
struct Number<'a> {
    negative: bool,
    /// Leading zeroes removed; never empty.
    digits: &'a [u8],
    /// Where `digits` starts in the trimmed input.
    offset: usize,
}

impl<'a> Number<'a> {
    fn split(input: &'a str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(body) => (true, body),
            None => (false, trimmed),
        };
        if body.is_empty() {
            return Err(ParseError::LoneSign);
        }
        let digits = ltrim_zeroes_positive(body);
        Ok(Number {
            negative,
            digits: digits.as_bytes(),
            offset: trimmed.len() - digits.len(),
        })
    }

    fn digit(&self, index: usize) -> Result<u8, ParseError> {
        match self.digits[index] {
            byte @ b'0'..=b'9' => Ok(byte - b'0'),
            _ => Err(ParseError::InvalidDigit {
                offset: self.offset + index,
            }),
        }
    }

    fn apply<T: BoundedInt>(&self, value: T, term: T) -> T {
        if self.negative {
            value - term
        } else {
            value + term
        }
    }
}

/// Backward scan shared by both strategies.
///
/// `term(position, digit)` yields the magnitude of `digit` at decimal
/// `position`; it is called with positions `0, 1, 2, ...` in order.
fn accumulate<T, F>(number: &Number<'_>, limit: &Limit<T>, mut term: F) -> Result<T, ParseError>
where
    T: BoundedInt,
    F: FnMut(usize, u8) -> Option<T>,
{
    let len = number.digits.len();
    if len > limit.len {
        return Err(ParseError::OutOfRange);
    }

    let at_limit = len == limit.len;
    let leading = if at_limit {
        let first = number.digit(0)?;
        if first > limit.first_digit {
            return Err(ParseError::OutOfRange);
        }
        Some(first)
    } else {
        None
    };

    let mut value = T::zero();
    for index in (usize::from(at_limit)..len).rev() {
        let magnitude = term(len - 1 - index, number.digit(index)?).ok_or(ParseError::OutOfRange)?;
        value = number.apply(value, magnitude);
    }

    if let Some(first) = leading {
        if first == limit.first_digit && !limit.admits(value) {
            return Err(ParseError::OutOfRange);
        }
        let magnitude = term(len - 1, first).ok_or(ParseError::OutOfRange)?;
        value = number.apply(value, magnitude);
    }

    Ok(value)
}
