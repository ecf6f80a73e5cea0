//! Number formatting utilities for human-readable display.
//!
//! All amounts are USD `f64` values as the API returns them. Integer parts get
//! thousands separators; fractional digits are fixed unless noted.

/// Adds thousands separators to the integer part of an already formatted
/// number. Sign and fractional part pass through untouched.
pub fn group_thousands(formatted: &str) -> String {
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let digits = integer.len();
    let mut grouped = String::with_capacity(digits + digits / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// `$1,234.56` style with a fixed number of decimals.
pub fn format_currency(value: f64, decimals: usize) -> String {
    let formatted = group_thousands(&format!("{:.1$}", value.abs(), decimals));
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        format!("-${formatted}")
    } else {
        format!("${formatted}")
    }
}

/// Market cap / volume tiles: `$1.23B`.
pub fn format_billions(value: f64) -> String {
    format!("{}B", format_currency(value / 1e9, 2))
}

/// Magnitude of a percent change, sign shown separately by the caller.
pub fn format_percent_abs(percent: f64) -> String {
    format!("{:.2}%", percent.abs())
}

/// Decimal places that keep a sub-dollar price readable.
fn price_decimal_places(value: f64) -> usize {
    let abs_value = value.abs();

    if abs_value >= 1.0 || abs_value == 0.0 {
        return 2;
    }

    let exponent = abs_value.log10().floor().abs() as usize;
    (exponent + 2).min(8)
}

/// Price with auto-detected precision: at least two decimals, more for
/// sub-dollar coins, trailing zeros beyond the second decimal trimmed.
pub fn display_price(value: f64) -> String {
    let formatted = format_currency(value, price_decimal_places(value));
    match formatted.split_once('.') {
        Some((head, tail)) if tail.len() > 2 => {
            let trimmed = tail.trim_end_matches('0');
            let keep = if trimmed.len() < 2 { &tail[..2] } else { trimmed };
            format!("{head}.{keep}")
        }
        _ => formatted,
    }
}
