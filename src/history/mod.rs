//! Calculation history.
//!
//! The [`Ledger`] keeps every calculation in memory and mirrors each line to
//! a [`HistorySink`], usually a [`FileSink`] appending to `history.txt`.
//! Mirroring is best effort: a failed write is reported but never undoes the
//! in-memory append.

mod ledger;
mod record;
mod sink;

pub use ledger::Ledger;
pub use record::{CalculationRecord, FIELD_SEPARATOR};
pub use sink::{FileSink, HistorySink, NullSink};
