use winnow::combinator::{alt, repeat};
use winnow::token::{literal, take_till};
use winnow::{ModalResult, Parser};

use crate::types::{PatternToken, SYMBOL_PLACEHOLDER, VALUE_PLACEHOLDER};

fn parse_symbol(input: &mut &str) -> ModalResult<PatternToken> {
    literal(SYMBOL_PLACEHOLDER)
        .value(PatternToken::Symbol)
        .parse_next(input)
}

fn parse_value(input: &mut &str) -> ModalResult<PatternToken> {
    literal(VALUE_PLACEHOLDER)
        .value(PatternToken::Value)
        .parse_next(input)
}

fn parse_text_run(input: &mut &str) -> ModalResult<PatternToken> {
    take_till(1.., '%')
        .map(|text: &str| PatternToken::Literal(text.to_string()))
        .parse_next(input)
}

// A '%' that does not start a placeholder
fn parse_stray_percent(input: &mut &str) -> ModalResult<PatternToken> {
    literal("%")
        .map(|text: &str| PatternToken::Literal(text.to_string()))
        .parse_next(input)
}

fn parse_pattern_token(input: &mut &str) -> ModalResult<PatternToken> {
    alt((
        parse_symbol,
        parse_value,
        parse_text_run,
        parse_stray_percent,
    ))
    .parse_next(input)
}

/// Parse a format pattern such as `"%s %v"` into tokens
///
/// Adjacent literal text is merged into a single token.
///
/// # Examples
/// ```
/// use currency_format::parser::parse_pattern;
/// use currency_format::types::PatternToken;
///
/// assert_eq!(
///     parse_pattern("%v %s"),
///     vec![
///         PatternToken::Value,
///         PatternToken::Literal(" ".to_string()),
///         PatternToken::Symbol,
///     ]
/// );
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<PatternToken> {
    let parsed: Result<Vec<PatternToken>, _> =
        repeat(0.., parse_pattern_token).parse(pattern);

    // Every character matches one of the token parsers
    let tokens = parsed.unwrap_or_else(|_| vec![PatternToken::Literal(pattern.to_string())]);

    let mut merged: Vec<PatternToken> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let (PatternToken::Literal(next), Some(PatternToken::Literal(prev))) =
            (&token, merged.last_mut())
        {
            prev.push_str(next);
            continue;
        }
        merged.push(token);
    }
    merged
}
