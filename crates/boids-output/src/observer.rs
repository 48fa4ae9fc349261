//! `SimOutputObserver<W>` — bridges `SystemObserver` to an `OutputWriter`.

use boids_core::{BoidId, Tick};
use boids_flock::FlockRecord;
use boids_model::Boid;
use boids_sim::{SystemObserver, TickStats};
use tracing::warn;

use crate::row::{BoidSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SystemObserver`] that writes boid snapshots and tick summaries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SystemObserver`
/// methods have no return value.  After `run_ticks` returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error (if any) after `run_ticks` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Snapshot rows written so far.
    pub fn snapshot_rows(&self) -> usize {
        self.rows
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further errors are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SystemObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, stats: &TickStats) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(stats));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid], flocks: &[FlockRecord]) {
        let rows: Vec<BoidSnapshotRow> = boids
            .iter()
            .enumerate()
            .map(|(i, boid)| BoidSnapshotRow::new(tick, BoidId(i as u32), boid, flocks.get(i)))
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            if result.is_ok() {
                self.rows += rows.len();
            }
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.flush();
        self.store_err(result);
    }
}
