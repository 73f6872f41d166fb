//! Currency formatting module
//!
//! This module renders amounts according to resolved format options.
//! The main entry points are the `render` and `try_render` functions.

mod cached;
mod core;
mod placement;

pub use cached::CurrencyFormatter;

use crate::error::FormatError;
use crate::parser::parse_amount;
use crate::types::{Amount, FormatOptions, RenderFlags};

use self::core::{format_number, precision_for, round_to_cents};
use self::placement::apply_pattern;

/// Render an amount as a display string
///
/// An amount that does not parse to a finite number is logged at `warn` level and
/// renders as an empty string. An empty string amount renders as an empty string
/// without any warning.
///
/// # Arguments
/// * `amount` - A number or a numeric string
/// * `options` - Options obtained from [`Resolver::resolve`](crate::Resolver::resolve)
/// * `flags` - Symbol and trailing-zero switches
///
/// # Returns
/// * `String` - The formatted amount
///
/// # Examples
/// ```
/// use currency_format::{FormatOptions, RenderFlags, render};
///
/// let options = FormatOptions::new("%s%v", ",", ".", "€");
/// assert_eq!(render(1234.5, &options, RenderFlags::default()), "€1.234,50");
/// assert_eq!(render("13", &options, RenderFlags::new(true, false)), "€13");
/// ```
pub fn render<'a>(amount: impl Into<Amount<'a>>, options: &FormatOptions, flags: RenderFlags) -> String {
    try_render(amount, options, flags).unwrap_or_else(|e| {
        log::warn!("{e}");
        String::new()
    })
}

/// Render an amount, returning `InvalidAmount` instead of logging it
pub fn try_render<'a>(
    amount: impl Into<Amount<'a>>,
    options: &FormatOptions,
    flags: RenderFlags,
) -> Result<String, FormatError> {
    let value = match amount.into() {
        Amount::Number(value) => value,
        Amount::Text(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(String::new());
            }
            parse_amount(text).ok_or_else(|| FormatError::InvalidAmount(text.to_string()))?
        }
    };

    if !value.is_finite() {
        return Err(FormatError::InvalidAmount(value.to_string()));
    }

    let rounded = round_to_cents(value);
    let precision = precision_for(rounded, flags.show00);
    let number = format_number(rounded, precision, &options.decimal, &options.thousand);

    if flags.show_symbol {
        Ok(apply_pattern(&options.format, &options.symbol, &number))
    } else {
        Ok(number)
    }
}
