//! Parse reports for the demonstration program
//!
//! A run feeds a list of inputs through one box, the way a caller would reuse
//! a box across reads, and records what each try-parse did to it.

use crate::boxes::ValueBox;
use crate::parsing::boundary::BoundedInt;
use crate::parsing::parser::{parse_with, try_parse_with, Strategy};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Signed width selected on the command line or in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    I8,
    I16,
    #[default]
    I32,
    I64,
    I128,
}

impl Width {
    pub const ALL: [Width; 5] = [Width::I8, Width::I16, Width::I32, Width::I64, Width::I128];

    pub fn name(self) -> &'static str {
        match self {
            Width::I8 => i8::NAME,
            Width::I16 => i16::NAME,
            Width::I32 => i32::NAME,
            Width::I64 => i64::NAME,
            Width::I128 => i128::NAME,
        }
    }

    /// Run `inputs` through a fresh box of this width.
    pub fn run(self, inputs: &[String], strategy: Strategy) -> Vec<ParseReport> {
        match self {
            Width::I8 => run::<i8>(inputs, strategy),
            Width::I16 => run::<i16>(inputs, strategy),
            Width::I32 => run::<i32>(inputs, strategy),
            Width::I64 => run::<i64>(inputs, strategy),
            Width::I128 => run::<i128>(inputs, strategy),
        }
    }

    pub fn constants(self) -> Constants {
        match self {
            Width::I8 => Constants::of::<i8>(),
            Width::I16 => Constants::of::<i16>(),
            Width::I32 => Constants::of::<i32>(),
            Width::I64 => Constants::of::<i64>(),
            Width::I128 => Constants::of::<i128>(),
        }
    }
}

/// Outcome of one try-parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseReport {
    pub input: String,
    pub accepted: bool,
    /// Box content after the attempt.
    pub value: i128,
    pub error: Option<String>,
}

pub fn run<T: BoundedInt>(inputs: &[String], strategy: Strategy) -> Vec<ParseReport> {
    let mut target = ValueBox::<T>::new();
    inputs
        .iter()
        .map(|input| {
            let accepted = try_parse_with(input, Some(&mut target), strategy);
            let error = if accepted {
                None
            } else {
                parse_with::<T>(input, strategy).err().map(|error| error.to_string())
            };
            ParseReport {
                input: input.clone(),
                accepted,
                value: widen(target.value()),
                error,
            }
        })
        .collect()
}

/// Boundary decomposition of one width, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constants {
    pub width: &'static str,
    pub max: i128,
    pub min: i128,
    pub max_len: usize,
    pub min_len: usize,
    pub max_first_digit: u8,
    pub max_last_dec: i128,
    pub min_first_digit: u8,
    pub min_last_dec: i128,
}

impl Constants {
    pub fn of<T: BoundedInt>() -> Self {
        let boundary = T::boundary();
        Constants {
            width: T::NAME,
            max: widen(T::max_value()),
            min: widen(T::min_value()),
            max_len: boundary.max.len,
            min_len: boundary.min.len,
            max_first_digit: boundary.max.first_digit,
            max_last_dec: widen(boundary.max.last_dec),
            min_first_digit: boundary.min.first_digit,
            min_last_dec: widen(boundary.min.last_dec),
        }
    }
}

// Every supported width fits in i128.
fn widen<T: BoundedInt>(value: T) -> i128 {
    value.to_i128().unwrap_or_default()
}

/// One line per report: `try_parse("<input>") = <bool>; box = <value>`.
pub fn render_text(reports: &[ParseReport]) -> String {
    let mut out = String::new();
    for report in reports {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(
            out,
            "try_parse({:?}) = {}; box = {}",
            report.input, report.accepted, report.value
        );
        if let Some(error) = &report.error {
            let _ = write!(out, "  ({})", error);
        }
    }
    out
}

pub fn render_constants(constants: &Constants) -> String {
    let rows: [(&str, String); 9] = [
        ("width", constants.width.to_string()),
        ("max", constants.max.to_string()),
        ("min", constants.min.to_string()),
        ("max digits", constants.max_len.to_string()),
        ("min digits", constants.min_len.to_string()),
        ("max first digit", constants.max_first_digit.to_string()),
        ("max last dec", constants.max_last_dec.to_string()),
        ("min first digit", constants.min_first_digit.to_string()),
        ("min last dec", constants.min_last_dec.to_string()),
    ];
    rows.iter()
        .map(|(label, value)| format!("{:<16} {}", label, value))
        .collect::<Vec<_>>()
        .join("\n")
}
