//! `boids-output` — run trace writers for the boid system.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `boid_snapshots.csv`, `tick_summaries.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `boids_sim::SystemObserver`.
//! The trace is write-only: nothing here can restore a system from it.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use boids_output::{CsvWriter, SimOutputObserver};
//! use boids_sim::{BoidSystem, SimConfig};
//!
//! let mut system = BoidSystem::new(SimConfig::default())?;
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! system.run_ticks(600, 1.0 / 60.0, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{BoidSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
