//! Error types shared across the calculator, history and configuration layers.

use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the evaluator when running under the strict policy.
///
/// The lenient policy never produces these: malformed operands become `0.0`,
/// zero divisors are nudged and unknown operators hit the random fallback.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    /// The operand text could not be read as a number.
    #[error("invalid operand '{0}'")]
    InvalidOperand(String),

    /// The divisor of `/` or `%` was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The operator code is not one of `+ - * / ^ %`.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),
}

/// Failure to mirror a record into the durable history log.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("failed to open history log {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to append to history log {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors while loading the TOML configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
