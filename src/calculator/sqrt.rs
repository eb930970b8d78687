//! Newton's-method square root.

/// Stop once `|g² - v|` is at or below this.
const TOLERANCE: f64 = 0.0001;

/// Hard cap on refinement steps; non-converging input returns the last guess.
const MAX_ITERATIONS: u32 = 100_000;

/// Approximate `sqrt(value)` by Newton iteration starting from `value`.
///
/// Negative input never converges and returns whatever guess the iteration
/// cap leaves behind; NaN is returned unchanged.
pub fn newton_sqrt(value: f64) -> f64 {
    let mut guess = value;
    let mut steps = 0;

    while (guess * guess - value).abs() > TOLERANCE && steps < MAX_ITERATIONS {
        guess = (guess + value / guess) / 2.0;
        steps += 1;
    }

    guess
}
