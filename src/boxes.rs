//! Mutable integer boxes
//!
//! A [`ValueBox`] holds exactly one value of a signed width and is always
//! valid: the only way to build or change one is through functions that either
//! take a value of the width itself or fall back to a caller-supplied default.
//! Nothing here fails.

use crate::parsing::boundary::BoundedInt;
use crate::parsing::parser::{try_parse_with, Strategy};
use num_traits::{NumCast, ToPrimitive};
use std::fmt;

/// Box around an `i32`.
pub type IntBox = ValueBox<i32>;

/// Box around an `i64`.
pub type LongBox = ValueBox<i64>;

/// A single mutable integer, the destination of a try-parse.
///
/// Cloning gives an independent box.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ValueBox<T> {
    value: T,
}

impl<T: BoundedInt> ValueBox<T> {
    /// A box holding `0`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: T) -> Self {
        Self { value }
    }

    /// Box a wider integer or a float, or `default` if it does not fit.
    pub fn from_num_or<N: ToPrimitive>(source: N, default: T) -> Self {
        let mut boxed = Self::new();
        boxed.set_or(source, default);
        boxed
    }

    /// Box the parse of `source`, or `default` if it is rejected.
    pub fn from_str_or(source: &str, default: T) -> Self {
        let mut boxed = Self::new();
        boxed.set_str_or(source, default);
        boxed
    }

    /// Copy the value of `source`, or box `default` when there is none.
    pub fn from_box_or(source: Option<&ValueBox<T>>, default: T) -> Self {
        Self::with_value(source.map_or(default, ValueBox::value))
    }

    pub fn value(&self) -> T {
        self.value
    }

    /// Same as [`ValueBox::value`].
    pub fn get(&self) -> T {
        self.value
    }

    /// Overwrite the value; returns it.
    pub fn set(&mut self, value: T) -> T {
        self.value = value;
        self.value
    }

    /// Store `source` converted to the box's width, or `default` when the
    /// conversion is lossy beyond truncation.
    ///
    /// Floats truncate toward zero; NaN, infinities and anything outside
    /// `T::MIN..=T::MAX` after truncation store `default`.
    pub fn set_or<N: ToPrimitive>(&mut self, source: N, default: T) -> T {
        self.set(<T as NumCast>::from(source).unwrap_or(default))
    }

    /// Store the parse of `source`, or `default` when it is rejected.
    ///
    /// Follows the try-parse rules, so surrounding whitespace is accepted.
    pub fn set_str_or(&mut self, source: &str, default: T) -> T {
        if !self.try_parse_from(source) {
            self.value = default;
        }
        self.value
    }

    /// Try-parse `input` into this box. See [`crate::try_parse`].
    pub fn try_parse_from(&mut self, input: &str) -> bool {
        try_parse_with(input, Some(self), Strategy::Direct)
    }
}

impl<T: BoundedInt> From<T> for ValueBox<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T: fmt::Display> fmt::Display for ValueBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.value, f)
    }
}
