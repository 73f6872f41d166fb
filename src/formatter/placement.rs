use crate::parser::parse_pattern;
use crate::types::PatternToken;

/// Substitute the symbol and the formatted number into a format pattern
///
/// Every `%s` and `%v` is replaced in one pass, so placeholder text inside the
/// symbol itself is left alone.
pub(super) fn apply_pattern(pattern: &str, symbol: &str, value: &str) -> String {
    let mut result = String::with_capacity(pattern.len() + symbol.len() + value.len());
    for token in parse_pattern(pattern) {
        match token {
            PatternToken::Symbol => result.push_str(symbol),
            PatternToken::Value => result.push_str(value),
            PatternToken::Literal(text) => result.push_str(&text),
        }
    }
    result
}
