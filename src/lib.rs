//! Interactive two-operand calculator with an append-only history.
//!
//! - [`calculator`] parses operand text and evaluates `a OP b`.
//! - [`history`] keeps every calculation and mirrors it to a log file.
//! - [`ai`] builds prompts for a simulated language model.
//! - [`menu`] is the terminal loop tying them together.

pub mod ai;
pub mod calculator;
pub mod config;
pub mod error;
pub mod history;
pub mod menu;

pub use calculator::{ErrorPolicy, Evaluator, Operator, parse_operand};
pub use config::CalcConfig;
pub use error::{CalcError, ConfigError, HistoryError};
pub use history::{CalculationRecord, FileSink, Ledger};
pub use menu::Session;
