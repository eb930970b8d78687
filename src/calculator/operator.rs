//! Binary operators understood by the evaluator.

use std::fmt;

/// One of the six supported binary operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Integer-exponent power; the exponent is truncated toward zero.
    Power,
    Remainder,
}

impl Operator {
    /// All operators in menu order.
    pub const ALL: [Operator; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Remainder,
    ];

    /// Look up an operator by its symbol. Unknown codes return `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "^" => Some(Self::Power),
            "%" => Some(Self::Remainder),
            _ => None,
        }
    }

    /// Map a menu option (`"1"`..`"6"`) to its operator.
    pub fn from_menu_option(option: &str) -> Option<Self> {
        match option {
            "1" => Some(Self::Add),
            "2" => Some(Self::Subtract),
            "3" => Some(Self::Multiply),
            "4" => Some(Self::Divide),
            "5" => Some(Self::Power),
            "6" => Some(Self::Remainder),
            _ => None,
        }
    }

    /// The symbol written to the history log.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Remainder => "%",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
