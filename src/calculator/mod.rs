//! Calculator module for evaluating binary arithmetic.
//!
//! This module provides functionality to:
//! - Parse operand text with a lenient or strict policy
//! - Evaluate `a OP b` for the six supported operators
//! - Format results for the console and for the history log

mod display;
mod evaluation;
mod operator;
mod parse;
mod sqrt;

pub use display::{display_text, history_text};
pub use evaluation::{
    ErrorPolicy, Evaluator, FALLBACK_HIT, PercentDraw, ZERO_DIVISOR_NUDGE,
};
pub use operator::Operator;
pub use parse::{parse_operand, try_parse_operand};
pub use sqrt::newton_sqrt;
