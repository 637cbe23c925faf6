//! Parse errors
//!
//! The try-parse functions only report `false`; the result-returning core keeps
//! the reason.

use std::fmt;

/// Broad class of a rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not a decimal integer at all.
    MalformedInput,
    /// A decimal integer the target width cannot hold.
    OutOfRange,
}

/// Errors that can occur while parsing a bounded integer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Nothing left after trimming whitespace
    Empty,
    /// A `-` with no digits after it
    LoneSign,
    /// A byte that is not an ASCII digit, at this offset into the trimmed input
    InvalidDigit { offset: usize },
    /// Too many digits, or a digit run past the width's extreme
    OutOfRange,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::Empty | ParseError::LoneSign | ParseError::InvalidDigit { .. } => {
                ErrorKind::MalformedInput
            }
            ParseError::OutOfRange => ErrorKind::OutOfRange,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty input"),
            ParseError::LoneSign => write!(f, "sign without digits"),
            ParseError::InvalidDigit { offset } => write!(f, "invalid digit at byte {}", offset),
            ParseError::OutOfRange => write!(f, "number out of range"),
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(ParseError::Empty.kind(), ErrorKind::MalformedInput);
        assert_eq!(ParseError::LoneSign.kind(), ErrorKind::MalformedInput);
        assert_eq!(
            ParseError::InvalidDigit { offset: 3 }.kind(),
            ErrorKind::MalformedInput
        );
        assert_eq!(ParseError::OutOfRange.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ParseError::InvalidDigit { offset: 1 }.to_string(),
            "invalid digit at byte 1"
        );
        assert_eq!(ParseError::OutOfRange.to_string(), "number out of range");
    }
}
