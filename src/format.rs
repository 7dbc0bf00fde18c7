use crate::config::DisplayConfig;
use az::CheckedAs;

/// Magnitude from which results switch to scientific notation.
const SCIENTIFIC_ABOVE: f64 = 1e15;
/// Magnitude below which results switch to scientific notation.
const SCIENTIFIC_BELOW: f64 = 1e-6;

/// Renders an evaluation result for display.
pub fn format_result(value: f64, display: &DisplayConfig) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return "0".to_owned();
    }

    let magnitude = value.abs();
    if value.fract() == 0.0 && magnitude < SCIENTIFIC_ABOVE {
        if let Some(int) = value.checked_as::<i64>() {
            return group(&int.to_string(), display);
        }
    }

    let digits = display.digits.clamp(1, 17);
    if magnitude >= SCIENTIFIC_ABOVE || magnitude < SCIENTIFIC_BELOW {
        let formatted = format!("{:.*e}", digits - 1, value);
        return match formatted.split_once('e') {
            Some((mantissa, exponent)) => format!("{}e{}", trim_zeros(mantissa), exponent),
            None => formatted,
        };
    }

    let exponent = magnitude.log10().floor() as i32;
    let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
    let formatted = format!("{:.*}", decimals, value);
    group(trim_zeros(&formatted), display)
}

/// Drops trailing zeros of a fraction, and the point itself if nothing is left.
fn trim_zeros(number: &str) -> &str {
    if !number.contains('.') {
        return number;
    }
    number.trim_end_matches('0').trim_end_matches('.')
}

/// Inserts the configured separator between groups of three integer digits.
fn group(number: &str, display: &DisplayConfig) -> String {
    if !display.group_digits {
        return number.to_owned();
    }
    let (sign, unsigned) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (integer, fraction) = match unsigned.find('.') {
        Some(dot) => unsigned.split_at(dot),
        None => (unsigned, ""),
    };

    let mut grouped = String::with_capacity(number.len() + integer.len() / 3);
    grouped.push_str(sign);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(display.separator);
        }
        grouped.push(digit);
    }
    grouped.push_str(fraction);
    grouped
}
