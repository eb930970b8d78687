//! Durable mirrors for the history ledger.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::HistoryError;

#[cfg(windows)]
const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
const LINE_ENDING: &str = "\n";

/// Somewhere history lines are appended after the in-memory ledger.
pub trait HistorySink: Send {
    /// Append one line; the sink adds the line terminator.
    fn append(&mut self, line: &str) -> Result<(), HistoryError>;
}

/// Appends each line to a text file, creating it if needed.
///
/// The file is reopened for every line so an external rotation or deletion
/// never leaves a stale handle behind.
#[derive(Clone, Debug)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HistorySink for FileSink {
    fn append(&mut self, line: &str) -> Result<(), HistoryError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| HistoryError::Open {
                path: self.path.clone(),
                source,
            })?;

        write!(file, "{line}{LINE_ENDING}").map_err(|source| HistoryError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

/// Discards every line.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl HistorySink for NullSink {
    fn append(&mut self, _line: &str) -> Result<(), HistoryError> {
        Ok(())
    }
}
