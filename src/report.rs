//! Plain-text rendering of experiment results.

use std::fmt;

use crate::experiment::ExperimentResult;

/// A fixed-width table view over an [`ExperimentResult`].
///
/// `column` names the swept dimension; see
/// [`ExperimentKind::label`](crate::ExperimentKind::label) for a default.
///
/// # Example
/// ```
/// use pagesim::report::ResultTable;
/// use pagesim::{ExperimentKind, ExperimentResult};
///
/// let result = ExperimentResult::new(ExperimentKind::Frames, vec![2.0], vec![120], vec![150]);
/// let table = ResultTable::new("Frames", "Frame count", &result);
/// assert!(table.to_string().contains("120"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResultTable<'a> {
    title: &'a str,
    column: &'a str,
    result: &'a ExperimentResult,
}

impl<'a> ResultTable<'a> {
    pub fn new(title: &'a str, column: &'a str, result: &'a ExperimentResult) -> Self {
        Self {
            title,
            column,
            result,
        }
    }
}

impl fmt::Display for ResultTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{:<20} {:<15} {:<15}", self.column, "FIFO faults", "MFU faults")?;
        for (value, fifo, mfu) in self.result.rows() {
            writeln!(f, "{:<20} {:<15} {:<15}", value, fifo, mfu)?;
        }
        Ok(())
    }
}

/// Render `result` as a fixed-width table headed by `title`.
pub fn render_table(title: &str, column: &str, result: &ExperimentResult) -> String {
    ResultTable::new(title, column, result).to_string()
}
