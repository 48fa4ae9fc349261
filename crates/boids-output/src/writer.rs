//! The `OutputWriter` trait implemented by backend writers.

use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for run traces.
///
/// Errors are returned here but swallowed by the observer, which stores the
/// first one for [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of boid snapshots.
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Push buffered rows to the underlying files.
    ///
    /// Called at the end of every `run_ticks`; writing may continue afterwards.
    fn flush(&mut self) -> OutputResult<()>;
}
