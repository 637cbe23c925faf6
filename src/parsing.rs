//! Bounded integer parsing
//!
//! Parsing is split the same way the work is:
//!
//! - [`boundary`]: per-width decomposition of `MIN`/`MAX` plus the digit-weight table
//! - [`trim`]: leading-zero removal so digit counts can be compared directly
//! - [`parser`]: the try-parse entry points and both accumulation strategies
//! - [`error`]: what went wrong when a parse is rejected

pub mod boundary;
pub mod error;
pub mod parser;
pub mod trim;

pub use boundary::{BoundedInt, Boundary, Limit};
pub use error::{ErrorKind, ParseError};
pub use parser::{parse, parse_with, try_parse, try_parse_with, try_parse_with_table, Strategy};
pub use trim::ltrim_zeroes;
