//! A single calculation kept in the history.

use std::fmt;

use crate::calculator::history_text;

/// Field separator of the history line format.
pub const FIELD_SEPARATOR: char = '|';

/// One evaluated calculation. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationRecord {
    operand_a: String,
    operand_b: String,
    operator: String,
    result: f64,
}

impl CalculationRecord {
    /// Build a record from the raw operand texts as the user typed them.
    pub fn new(
        operand_a: impl Into<String>,
        operand_b: impl Into<String>,
        operator: impl Into<String>,
        result: f64,
    ) -> Self {
        Self {
            operand_a: operand_a.into(),
            operand_b: operand_b.into(),
            operator: operator.into(),
            result,
        }
    }

    pub fn operand_a(&self) -> &str {
        &self.operand_a
    }

    pub fn operand_b(&self) -> &str {
        &self.operand_b
    }

    /// The operator code as given; may be empty or unrecognized.
    pub fn operator(&self) -> &str {
        &self.operator
    }

    pub fn result(&self) -> f64 {
        self.result
    }

    /// The history line: `a|b|op|result`.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{a}{sep}{b}{sep}{op}{sep}{result}",
            a = self.operand_a,
            b = self.operand_b,
            op = self.operator,
            result = history_text(self.result),
            sep = FIELD_SEPARATOR,
        )
    }
}
