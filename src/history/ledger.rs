//! Append-only ledger of calculations.

use super::record::CalculationRecord;
use super::sink::{HistorySink, NullSink};
use crate::error::HistoryError;

/// Every calculation performed, in order, mirrored to a [`HistorySink`].
///
/// The in-memory list is authoritative. Readers get copies; nothing hands out
/// the live container.
pub struct Ledger {
    records: Vec<CalculationRecord>,
    sink: Box<dyn HistorySink>,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl Ledger {
    pub fn new(sink: impl HistorySink + 'static) -> Self {
        Self {
            records: Vec::new(),
            sink: Box::new(sink),
        }
    }

    /// A ledger with no durable mirror.
    pub fn in_memory() -> Self {
        Self::new(NullSink)
    }

    /// Append a calculation, then mirror it to the sink.
    ///
    /// The in-memory append always happens. `Err` only reports that the
    /// durable mirror failed; the record stays in the ledger either way.
    pub fn record(
        &mut self,
        operand_a: &str,
        operand_b: &str,
        operator: &str,
        result: f64,
    ) -> Result<(), HistoryError> {
        let record = CalculationRecord::new(operand_a, operand_b, operator, result);
        let line = record.to_line();
        self.records.push(record);
        tracing::debug!(count = self.records.len(), %line, "recorded calculation");

        self.sink.append(&line)
    }

    /// All history lines in insertion order. The returned vector is a copy.
    pub fn history(&self) -> Vec<String> {
        self.records.iter().map(CalculationRecord::to_line).collect()
    }

    /// Typed copy of all records.
    pub fn records(&self) -> Vec<CalculationRecord> {
        self.records.clone()
    }

    /// The most recent history line, or `""` before the first record.
    pub fn last(&self) -> String {
        self.records
            .last()
            .map(CalculationRecord::to_line)
            .unwrap_or_default()
    }

    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::FileSink;

    /// Fails every append.
    struct BrokenSink;

    impl HistorySink for BrokenSink {
        fn append(&mut self, _line: &str) -> Result<(), HistoryError> {
            Err(HistoryError::Write {
                path: "unavailable".into(),
                source: std::io::Error::other("filesystem unavailable"),
            })
        }
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::in_memory();
        assert_eq!(ledger.count(), 0);
        assert_eq!(ledger.last(), "");
        assert!(ledger.history().is_empty());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_record_updates_state() {
        let mut ledger = Ledger::in_memory();
        ledger.record("1", "2", "+", 3.0).unwrap();

        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.last(), "1|2|+|3.0");
        assert_eq!(ledger.history(), vec!["1|2|+|3.0".to_string()]);
    }

    #[test]
    fn test_history_preserves_order() {
        let mut ledger = Ledger::in_memory();
        ledger.record("1", "2", "+", 3.0).unwrap();
        ledger.record("6", "3", "*", 18.0).unwrap();
        ledger.record("5", "2", "%", 1.0).unwrap();

        assert_eq!(
            ledger.history(),
            vec!["1|2|+|3.0", "6|3|*|18.0", "5|2|%|1.0"]
        );
        assert_eq!(ledger.last(), "5|2|%|1.0");
        assert_eq!(ledger.records()[1].result(), 18.0);
    }

    #[test]
    fn test_history_snapshots_are_independent() {
        let mut ledger = Ledger::in_memory();
        ledger.record("1", "2", "+", 3.0).unwrap();

        let mut first = ledger.history();
        let second = ledger.history();
        first.push("tampered".to_string());
        first[0].push_str("-edited");

        assert_eq!(second, vec!["1|2|+|3.0".to_string()]);
        assert_eq!(ledger.history(), vec!["1|2|+|3.0".to_string()]);
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_sink_failure_keeps_in_memory_record() {
        let mut ledger = Ledger::new(BrokenSink);
        let outcome = ledger.record("1", "2", "+", 3.0);

        assert!(outcome.is_err());
        assert_eq!(ledger.count(), 1);
        assert_eq!(ledger.last(), "1|2|+|3.0");
    }

    #[test]
    fn test_unwritable_log_destination() {
        let dir = tempfile::tempdir().unwrap();
        let missing_parent = dir.path().join("no-such-dir").join("history.txt");

        let mut ledger = Ledger::new(FileSink::new(missing_parent));
        assert!(ledger.record("4", "2", "/", 2.0).is_err());
        assert!(ledger.record("4", "2", "-", 2.0).is_err());

        assert_eq!(ledger.count(), 2);
        assert_eq!(ledger.history(), vec!["4|2|/|2.0", "4|2|-|2.0"]);
    }

    #[test]
    fn test_file_mirror_matches_memory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.txt");

        let mut ledger = Ledger::new(FileSink::new(&path));
        ledger.record("1", "2", "+", 3.0).unwrap();
        ledger.record("2", "3", "^", 8.0).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines, ledger.history());
    }
}
