//! Number rendering: rounding, precision and digit grouping

/// Round to the nearest hundredth, halves away from zero
///
/// Values too large to scale by 100 have no fractional part and are returned as is.
pub(super) fn round_to_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / 100.0
}

/// Number of fractional digits to print for an already rounded amount
pub(super) fn precision_for(rounded: f64, show00: bool) -> usize {
    if show00 || rounded.fract() != 0.0 { 2 } else { 0 }
}

/// Insert `separator` between every group of three digits, counted from the right
pub(super) fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(len + (len - 1) / 3 * separator.len());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(digit);
    }
    grouped
}

/// Render a rounded amount with separators but without any symbol
pub(super) fn format_number(rounded: f64, precision: usize, decimal: &str, thousand: &str) -> String {
    let fixed = format!("{:.*}", precision, rounded.abs());
    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let mut result = String::with_capacity(fixed.len() + 8);
    // -0.0 compares equal to zero, so a value that rounds to zero gets no sign
    if rounded < 0.0 {
        result.push('-');
    }
    result.push_str(&group_thousands(integer_part, thousand));
    if let Some(fraction) = fraction_part {
        result.push_str(decimal);
        result.push_str(fraction);
    }
    result
}
