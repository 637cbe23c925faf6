//! Boundary decomposition of the signed primitive widths
//!
//! Each width's extremes are split once into the pieces the parser compares
//! against: how many digits they have, their leading digit, and the value of
//! the digits after it. For `i32`:
//!
//! ```text
//!    2147483647   ->  len 10, first digit 2, last dec  147483647
//!   -2147483648   ->  len 10, first digit 2, last dec -147483648
//! ```
//!
//! The table strategy additionally looks up `DECVALS[position][digit]`, the
//! contribution of `digit` at decimal `position` (0 = units), instead of
//! multiplying.

use num_traits::{FromPrimitive, PrimInt, Signed};
use once_cell::sync::Lazy;
use std::fmt;

/// A signed primitive the parser can fill without widening.
pub trait BoundedInt:
    PrimInt + Signed + FromPrimitive + Default + fmt::Display + fmt::Debug + Send + Sync + 'static
{
    /// Type name used in reports (`"i32"`).
    const NAME: &'static str;

    /// Boundary decomposition for this width, derived on first use.
    fn boundary() -> &'static Boundary<Self>;
}

macro_rules! bounded_int {
    ($($ty:ty),* $(,)?) => {$(
        impl BoundedInt for $ty {
            const NAME: &'static str = stringify!($ty);

            fn boundary() -> &'static Boundary<Self> {
                static BOUNDARY: Lazy<Boundary<$ty>> = Lazy::new(Boundary::<$ty>::derive);
                &BOUNDARY
            }
        }
    )*};
}

bounded_int!(i8, i16, i32, i64, i128);

/// One extreme of a width, as seen by the length comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit<T> {
    /// Whether this is the `MIN` side.
    pub negative: bool,
    /// Number of digits, sign excluded.
    pub len: usize,
    /// Most significant digit.
    pub first_digit: u8,
    /// Value of every digit after the first, carrying the extreme's sign.
    pub last_dec: T,
}

impl<T: BoundedInt> Limit<T> {
    /// Whether a remainder accumulated from the digits after a leading digit equal
    /// to [`Limit::first_digit`] still lies inside the range.
    pub fn admits(&self, remainder: T) -> bool {
        if self.negative {
            remainder >= self.last_dec
        } else {
            remainder <= self.last_dec
        }
    }
}

#[derive(Debug)]
pub struct Boundary<T> {
    pub max: Limit<T>,
    pub min: Limit<T>,
    digits: [T; 10],
    ten: T,
    decvals: Vec<[Option<T>; 10]>,
}

impl<T: BoundedInt> Boundary<T> {
    /// Decompose `T::MIN` and `T::MAX`.
    ///
    /// Runs once per width behind [`BoundedInt::boundary`].
    pub fn derive() -> Self {
        let digits: [T; 10] = std::array::from_fn(|d| {
            T::from_usize(d).expect("every signed width holds a single decimal digit")
        });
        let ten = T::from_u8(10).expect("every signed width holds ten");

        let max = limit(T::max_value(), false, ten);
        let min = limit(T::min_value(), true, ten);

        let rows = max.len.max(min.len);
        let mut decvals = Vec::with_capacity(rows);
        let mut weight = Some(T::one());
        for _ in 0..rows {
            decvals.push(std::array::from_fn(|d| {
                weight.and_then(|w| digits[d].checked_mul(&w))
            }));
            weight = weight.and_then(|w| w.checked_mul(&ten));
        }

        tracing::debug!(
            width = T::NAME,
            max_len = max.len,
            min_len = min.len,
            "derived boundary table"
        );

        Boundary {
            max,
            min,
            digits,
            ten,
            decvals,
        }
    }

    /// The extreme a number of the given sign is compared against.
    pub fn limit(&self, negative: bool) -> &Limit<T> {
        if negative {
            &self.min
        } else {
            &self.max
        }
    }

    /// `digit` as a value of the width.
    pub fn digit(&self, digit: u8) -> T {
        self.digits[usize::from(digit)]
    }

    pub fn ten(&self) -> T {
        self.ten
    }

    /// `DECVALS[position][digit]`: the magnitude of `digit` at decimal `position`.
    ///
    /// `None` when the contribution does not fit the width, e.g. `3` at position
    /// 9 for `i32`.
    pub fn decval(&self, position: usize, digit: u8) -> Option<T> {
        self.decvals
            .get(position)
            .and_then(|row| row.get(usize::from(digit)).copied().flatten())
    }

    /// Number of positions covered by the table.
    pub fn positions(&self) -> usize {
        self.decvals.len()
    }
}

fn limit<T: BoundedInt>(extreme: T, negative: bool, ten: T) -> Limit<T> {
    let rendered = extreme.to_string();
    let digits = rendered.trim_start_matches('-').as_bytes();
    let len = digits.len();
    let exponent = u32::try_from(len - 1).expect("digit count fits in u32");
    Limit {
        negative,
        len,
        first_digit: digits[0] - b'0',
        // `%` keeps the sign of the dividend, so the MIN side stays negative.
        last_dec: extreme % ten.pow(exponent),
    }
}
