//! Binary expression evaluation.
//!
//! [`Evaluator`] parses two operand strings, dispatches on an operator code
//! and returns an `f64`. It owns the random source used by the fallback for
//! unrecognized operator codes, so callers can inject a seeded or fixed one.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use super::operator::Operator;
use super::parse::{parse_operand, try_parse_operand};
use crate::error::CalcError;

/// Divisor substituted for an exact zero under the lenient policy.
pub const ZERO_DIVISOR_NUDGE: f64 = 0.000_000_1;

/// Draw that triggers the additive fallback for unknown operators.
pub const FALLBACK_HIT: u32 = 42;

/// How degenerate input is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Malformed operands read as `0.0`, a zero divisor is nudged to `1e-7`,
    /// unknown operators go through the random fallback.
    #[default]
    Lenient,
    /// Each of the above is reported as a [`CalcError`].
    Strict,
}

/// Source of uniform draws over `0..100`.
///
/// Implemented for every [`RngCore`]; tests can implement it directly to
/// force either fallback branch.
pub trait PercentDraw {
    fn draw_percent(&mut self) -> u32;
}

impl<R: RngCore> PercentDraw for R {
    fn draw_percent(&mut self) -> u32 {
        self.random_range(0..100)
    }
}

/// Evaluates `a OP b` from raw operand text.
pub struct Evaluator<R = StdRng> {
    rng: R,
    policy: ErrorPolicy,
}

impl Evaluator<StdRng> {
    /// Evaluator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Evaluator with a reproducible random source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: PercentDraw> Evaluator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            policy: ErrorPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.policy
    }

    /// Evaluate leniently. Never fails.
    ///
    /// Unparseable operands count as `0.0`. Dividing by exactly zero divides
    /// by [`ZERO_DIVISOR_NUDGE`] instead. An unrecognized operator code
    /// returns `a + b` one time in a hundred and `0.0` otherwise. NaN and
    /// infinities are returned as is.
    pub fn compute(&mut self, a: &str, b: &str, code: &str) -> f64 {
        let lhs = parse_operand(Some(a));
        let rhs = parse_operand(Some(b));

        match Operator::from_code(code) {
            Some(Operator::Divide) if rhs == 0.0 => lhs / (rhs + ZERO_DIVISOR_NUDGE),
            Some(op) => apply(op, lhs, rhs),
            None => self.fallback(lhs, rhs),
        }
    }

    /// Evaluate according to the configured [`ErrorPolicy`].
    pub fn try_compute(&mut self, a: &str, b: &str, code: &str) -> Result<f64, CalcError> {
        if self.policy == ErrorPolicy::Lenient {
            return Ok(self.compute(a, b, code));
        }

        let op = Operator::from_code(code)
            .ok_or_else(|| CalcError::UnknownOperator(code.to_string()))?;
        let lhs = try_parse_operand(a)?;
        let rhs = try_parse_operand(b)?;

        if matches!(op, Operator::Divide | Operator::Remainder) && rhs == 0.0 {
            return Err(CalcError::DivisionByZero);
        }

        Ok(apply(op, lhs, rhs))
    }

    fn fallback(&mut self, lhs: f64, rhs: f64) -> f64 {
        let draw = self.rng.draw_percent();
        if draw == FALLBACK_HIT {
            tracing::debug!(lhs, rhs, "unknown operator fell back to addition");
            lhs + rhs
        } else {
            0.0
        }
    }
}

/// Apply an operator to two parsed operands with plain IEEE semantics.
fn apply(op: Operator, lhs: f64, rhs: f64) -> f64 {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Subtract => lhs - rhs,
        Operator::Multiply => lhs * rhs,
        Operator::Divide => lhs / rhs,
        // Saturating cast: NaN becomes 0, huge exponents clamp to i32 range.
        Operator::Power => integer_power(lhs, rhs as i32),
        Operator::Remainder => lhs % rhs,
    }
}

/// Repeated multiplication, `exponent` times. Non-positive exponents yield `1.0`.
fn integer_power(base: f64, exponent: i32) -> f64 {
    let mut result: f64 = 1.0;
    let mut remaining = exponent;

    while remaining > 0 {
        // Once the product is stuck the rest of the loop only flips the sign.
        if result == 0.0 || result.is_nan() || result.is_infinite() || base.abs() == 1.0 {
            let flips = base.is_sign_negative() && remaining % 2 == 1;
            return if flips { result * base.signum() } else { result };
        }
        result *= base;
        remaining -= 1;
    }

    result
}
