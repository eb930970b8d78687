//! Result formatting.
//!
//! Two renderings exist. The history log uses [`history_text`], the plain
//! `f64` form (`3.0`, `5e-8`). The console uses [`display_text`], grouped
//! with thousand separators and rounded to three decimals. Both spell
//! non-finite results `NaN`, `Infinity` and `-Infinity`.

/// Decimal places kept for console display.
const DISPLAY_DECIMALS: usize = 3;

/// Spelling of NaN and infinities, shared by both renderings.
fn non_finite_text(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value.is_infinite() {
        Some(if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        })
    } else {
        None
    }
}

/// Text of a result as stored in the history log.
pub fn history_text(value: f64) -> String {
    match non_finite_text(value) {
        Some(text) => text.to_string(),
        None => format!("{:?}", value),
    }
}

/// Format a result for the console with thousand separators.
pub fn display_text(value: f64) -> String {
    if let Some(text) = non_finite_text(value) {
        return text.to_string();
    }

    let formatted = format!("{:.*}", DISPLAY_DECIMALS, value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    let (sign, unsigned) = match trimmed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", trimmed),
    };
    let (int_part, dec_part) = match unsigned.find('.') {
        Some(dot_pos) => unsigned.split_at(dot_pos),
        None => (unsigned, ""),
    };

    // "-0" after rounding a tiny negative number
    let sign = if int_part == "0" && dec_part.is_empty() {
        ""
    } else {
        sign
    };

    format!("{}{}{}", sign, group_thousands(int_part), dec_part)
}

/// Insert `,` every three digits of an unsigned integer string.
fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}
