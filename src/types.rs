//! Type definitions for currency formatting
//!
//! This module defines the values that flow between the resolver and the renderer:
//! the resolved format options, per-call render flags, the amount input and the
//! tokens of a parsed format pattern.

use std::borrow::Cow;

/// Placeholder replaced by the currency symbol in a format pattern
pub const SYMBOL_PLACEHOLDER: &str = "%s";
/// Placeholder replaced by the formatted number in a format pattern
pub const VALUE_PLACEHOLDER: &str = "%v";

/// Concrete formatting settings for one (locale, currency) pair
///
/// Produced by [`Resolver::resolve`](crate::Resolver::resolve) and passed by reference
/// into every render call. Never mutated after resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormatOptions {
    /// Pattern containing `%s` (symbol) and `%v` (value) placeholders
    pub format: String,
    /// Decimal separator
    pub decimal: String,
    /// Thousands separator
    pub thousand: String,
    /// Currency symbol, or the upper-cased currency code when no symbol is known
    pub symbol: String,
}

impl FormatOptions {
    /// Create options from their four parts
    pub fn new(
        format: impl Into<String>,
        decimal: impl Into<String>,
        thousand: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            format: format.into(),
            decimal: decimal.into(),
            thousand: thousand.into(),
            symbol: symbol.into(),
        }
    }
}

/// Per-call switches for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderFlags {
    /// Apply the format pattern with the currency symbol
    pub show_symbol: bool,
    /// Always print two fractional digits, even for whole amounts
    pub show00: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            show_symbol: true,
            show00: true,
        }
    }
}

impl RenderFlags {
    pub fn new(show_symbol: bool, show00: bool) -> Self {
        Self {
            show_symbol,
            show00,
        }
    }

    /// Builder method to toggle the currency symbol
    pub fn with_symbol(mut self, show_symbol: bool) -> Self {
        self.show_symbol = show_symbol;
        self
    }

    /// Builder method to toggle trailing `00` for whole amounts
    pub fn with_show00(mut self, show00: bool) -> Self {
        self.show00 = show00;
        self
    }
}

/// An amount to render, either numeric or a numeric-looking string
#[derive(Debug, Clone, PartialEq)]
pub enum Amount<'a> {
    /// Already numeric
    Number(f64),
    /// Text in standard decimal notation, e.g. `"-1234.5"` or `"1e3"`
    Text(Cow<'a, str>),
}

impl From<f64> for Amount<'_> {
    fn from(value: f64) -> Self {
        Amount::Number(value)
    }
}

impl From<f32> for Amount<'_> {
    fn from(value: f32) -> Self {
        Amount::Number(f64::from(value))
    }
}

macro_rules! amount_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Amount<'_> {
                fn from(value: $t) -> Self {
                    Amount::Number(value as f64)
                }
            }
        )*
    };
}

amount_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl<'a> From<&'a str> for Amount<'a> {
    fn from(value: &'a str) -> Self {
        Amount::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Amount<'a> {
    fn from(value: &'a String) -> Self {
        Amount::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Amount<'_> {
    fn from(value: String) -> Self {
        Amount::Text(Cow::Owned(value))
    }
}

/// A single piece of a parsed format pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternToken {
    /// `%s`
    Symbol,
    /// `%v`
    Value,
    /// Any other run of text, copied verbatim
    Literal(String),
}
