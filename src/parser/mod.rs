//! Parsing module
//!
//! Parses format patterns into placeholder tokens and amount strings into numbers.
//! The entry points are `parse_pattern` and `parse_amount`.

mod amount;
mod pattern;

pub use amount::parse_amount;
pub use pattern::parse_pattern;
