use winnow::ascii::float;
use winnow::{ModalResult, Parser};

fn parse_decimal(input: &mut &str) -> ModalResult<f64> {
    float.parse_next(input)
}

/// Parse an amount written in standard decimal notation
///
/// Surrounding whitespace is ignored and the whole remaining text must be consumed.
/// Returns `None` for anything that is not a finite number.
pub fn parse_amount(text: &str) -> Option<f64> {
    parse_decimal
        .parse(text.trim())
        .ok()
        .filter(|value| value.is_finite())
}
