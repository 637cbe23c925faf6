//! # intbox
//!
//! Mutable integer boxes and a try-parse that fills them.
//!
//! The parser checks a decimal string against the boundary decomposition of the
//! target width (digit count, leading digit, value of the remaining digits) so it
//! never has to hold a value wider than the box it writes into.
//!
//! Layout
//!
//! src/
//!   ├── parsing     Boundary tables, zero trimming, the two parse strategies
//!   ├── boxes       `ValueBox` and its overwrite-or-default helpers
//!   ├── config      Layered configuration for the demonstration program
//!   └── demo        Parse reports rendered by the `intbox` binary

pub mod boxes;
pub mod config;
pub mod demo;
pub mod parsing;

pub use boxes::{IntBox, LongBox, ValueBox};
pub use parsing::{
    ltrim_zeroes, parse, parse_with, try_parse, try_parse_with, try_parse_with_table, BoundedInt,
    Boundary, ErrorKind, ParseError, Strategy,
};
