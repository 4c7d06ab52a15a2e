//! Number display and parsing.
//!
//! Display precision follows the active multiplier: a multiplier of `0.01`
//! shows at least two fractional digits, anything `>= 1` shows none. Up to
//! [`MAX_FRACTION_DIGITS`] are kept so float noise like `0.1 + 0.2` is hidden
//! without truncating meaningful digits.

/// Upper bound on fractional digits shown, unless the multiplier needs more.
pub const MAX_FRACTION_DIGITS: usize = 6;

/// Minimum fractional digits implied by a multiplier.
///
/// `0` for multipliers `>= 1`, otherwise `floor(-log10(multiplier))`.
pub fn decimal_places(multiplier: f64) -> usize {
    if !(multiplier.is_finite() && multiplier > 0.0) || multiplier >= 1.0 {
        return 0;
    }
    // Nudge so exact powers of ten (0.001) don't land just below an integer.
    (-multiplier.log10() + 1e-9).floor() as usize
}

/// Round to `decimals` fractional digits, half away from zero.
///
/// Values too large to scale are returned unchanged.
pub fn round_to_decimals(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / factor;
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Format `value` with at least `decimals` and at most
/// `max(decimals, MAX_FRACTION_DIGITS)` fractional digits, no grouping.
pub fn format_number(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let max = decimals.max(MAX_FRACTION_DIGITS);
    let mut text = format!("{value:.max$}");

    if let Some(dot) = text.find('.') {
        let keep = dot + 1 + decimals;
        while text.len() > keep && text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }

    // "-0" / "-0.00" after rounding
    if text.starts_with('-') && text[1..].chars().all(|c| c == '0' || c == '.') {
        text.remove(0);
    }
    text
}

/// Format using the precision implied by `multiplier`.
pub fn format_value(value: f64, multiplier: f64) -> String {
    format_number(value, decimal_places(multiplier))
}

/// Parse displayed text back to a number.
///
/// Accepts an optional leading minus, digits, and at most one decimal point,
/// with at least one digit overall. Surrounding whitespace is ignored.
/// Anything else is `None` and must not be committed.
pub fn parse_number(text: &str) -> Option<f64> {
    let text = text.trim();
    let body = text.strip_prefix('-').unwrap_or(text);

    let mut digits = 0usize;
    let mut dots = 0usize;
    for c in body.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return None,
        }
    }
    if digits == 0 || dots > 1 {
        return None;
    }

    let value: f64 = text.parse().ok()?;
    if value == 0.0 { Some(0.0) } else { Some(value) }
}
