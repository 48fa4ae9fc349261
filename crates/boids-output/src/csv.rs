//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `boid_snapshots.csv`
//! - `tick_summaries.csv`

use std::fs::{self, File};
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BoidSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_FILE: &str = "boid_snapshots.csv";
pub const SUMMARY_FILE: &str = "tick_summaries.csv";

const SNAPSHOT_HEADER: [&str; 10] =
    ["tick", "boid_id", "x", "y", "vx", "vy", "ax", "ay", "neighbors", "obstacles"];
const SUMMARY_HEADER: [&str; 6] =
    ["tick", "elapsed_secs", "boid_count", "obstacle_count", "flocked_count", "mean_speed"];

/// Writes a run trace to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create `dir` if needed, truncate or create the two CSV files in it and
    /// write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        fs::create_dir_all(dir)?;

        let mut snapshots = Writer::from_path(dir.join(SNAPSHOT_FILE))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join(SUMMARY_FILE))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[BoidSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.tick.to_string(),
                row.boid_id.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.ax.to_string(),
                row.ay.to_string(),
                row.neighbors.to_string(),
                row.obstacles.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.elapsed_secs.to_string(),
            row.boid_count.to_string(),
            row.obstacle_count.to_string(),
            row.flocked_count.to_string(),
            row.mean_speed.to_string(),
        ])?;
        Ok(())
    }

    fn flush(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
