//! Operand parsing.
//!
//! Operands arrive as raw terminal text. Both `.` and `,` are accepted as the
//! decimal separator and surrounding whitespace is ignored.

use crate::error::CalcError;

/// Normalize operand text: `,` becomes `.` and surrounding whitespace is trimmed.
fn normalize(input: &str) -> String {
    input.replace(',', ".").trim().to_string()
}

/// Parse operand text into a number, falling back to `0.0`.
///
/// This never fails. Missing input, empty strings, stray characters and
/// multiple separators all yield `0.0`.
pub fn parse_operand(input: Option<&str>) -> f64 {
    input.map_or(0.0, |text| try_parse_operand(text).unwrap_or(0.0))
}

/// Parse operand text, reporting malformed input instead of defaulting.
pub fn try_parse_operand(input: &str) -> Result<f64, CalcError> {
    normalize(input)
        .parse::<f64>()
        .map_err(|_| CalcError::InvalidOperand(input.to_string()))
}
