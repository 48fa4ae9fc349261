//! headless — run a boid system without a window and write a CSV trace.
//!
//! Usage: `headless [scenario.json]`
//!
//! The optional scenario file holds a `SimConfig`, a run length and a list of
//! commands applied at given ticks, standing in for the keyboard and mouse
//! input of an interactive front end.  Without one a seeded default run is
//! used.  Set `RUST_LOG` to change verbosity, e.g. `RUST_LOG=boids_sim=trace`.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use boids_core::Tick;
use boids_flock::{CoefficientKind, FlockRecord};
use boids_model::Boid;
use boids_output::{CsvWriter, OutputWriter, SimOutputObserver};
use boids_sim::{BoidSystem, Command, ConnectionKind, SimConfig, SystemObserver, TickStats};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:       &str = "output/headless";
const DEFAULT_SEED:     u64  = 42;
const DEFAULT_TICKS:    u64  = 600;
const DEFAULT_TIMESTEP: f64  = 0.05; // 20 ticks per simulated second
const PROGRESS_TICKS:   u64  = 100;

// ── Scenario ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(default)]
struct Scenario {
    config:   SimConfig,
    ticks:    u64,
    timestep: f64,
    commands: Vec<ScheduledCommand>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            config:   SimConfig { seed: Some(DEFAULT_SEED), ..SimConfig::default() },
            ticks:    DEFAULT_TICKS,
            timestep: DEFAULT_TIMESTEP,
            commands: Vec::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ScheduledCommand {
    at_tick: u64,
    command: Command,
}

fn load_scenario(path: Option<&str>) -> Result<Scenario> {
    let Some(path) = path else {
        return Ok(Scenario::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let mut scenario: Scenario =
        serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
    scenario.commands.sort_by_key(|c| c.at_tick);
    Ok(scenario)
}

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer, counts summary rows and logs progress.
struct ProgressObserver<W: OutputWriter> {
    inner:        SimOutputObserver<W>,
    summary_rows: usize,
    last:         Option<TickStats>,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, summary_rows: 0, last: None }
    }
}

impl<W: OutputWriter> SystemObserver for ProgressObserver<W> {
    fn on_tick_end(&mut self, tick: Tick, stats: &TickStats) {
        self.summary_rows += 1;
        self.last = Some(*stats);
        if tick.0 % PROGRESS_TICKS == 0 {
            info!(
                tick = tick.0,
                boids = stats.boid_count,
                flocked = stats.flocked_count,
                mean_speed = stats.mean_speed,
                "progress"
            );
        }
        self.inner.on_tick_end(tick, stats);
    }

    fn on_snapshot(&mut self, tick: Tick, boids: &[Boid], flocks: &[FlockRecord]) {
        self.inner.on_snapshot(tick, boids, flocks);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let arg = std::env::args().nth(1);
    let scenario = load_scenario(arg.as_deref())?;
    if !(scenario.timestep.is_finite() && scenario.timestep > 0.0) {
        bail!("timestep must be positive, got {}", scenario.timestep);
    }

    println!("=== headless — boid flocking ===");
    println!(
        "Boids: {}  |  Obstacles: {}  |  Ticks: {}  |  Timestep: {} s",
        scenario.config.boid_count,
        scenario.config.obstacle_count,
        scenario.ticks,
        scenario.timestep,
    );
    println!();

    // 1. Build the system.
    let mut system = BoidSystem::new(scenario.config)?;
    println!("Seed: {}  |  Frame: {}", system.seed(), system.frame());

    // 2. Set up output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = ProgressObserver::new(SimOutputObserver::new(writer));

    // 3. Run in segments, applying each command once its tick is reached.
    let start = system.clock.current_tick.0;
    let end = start + scenario.ticks;
    let t0 = Instant::now();
    for scheduled in scenario.commands {
        let at = start + scheduled.at_tick;
        if at > end {
            warn!(at_tick = scheduled.at_tick, "command scheduled after the last tick; skipped");
            continue;
        }
        let now = system.clock.current_tick.0;
        if at > now {
            system.run_ticks(at - now, scenario.timestep, &mut obs)?;
        }
        let outcome = system.apply(scheduled.command)?;
        info!(tick = system.clock.current_tick.0, ?outcome, "command applied");
    }
    let now = system.clock.current_tick.0;
    if end > now {
        system.run_ticks(end - now, scenario.timestep, &mut obs)?;
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  boid_snapshots.csv : {} rows", obs.inner.snapshot_rows());
    println!("  tick_summaries.csv : {} rows", obs.summary_rows);
    println!();

    if let Some(last) = obs.last {
        println!(
            "Final tick {}: {} boids, {} flocked, mean speed {:.2}",
            last.tick.0, last.boid_count, last.flocked_count, last.mean_speed
        );
    }
    let wrapped = system
        .connections(ConnectionKind::Neighbors)
        .iter()
        .filter(|c| c.is_wrapped())
        .count();
    println!("Neighbor links crossing an edge: {wrapped}");
    println!();

    // 5. Final behavior weights.
    println!("{:<12} {:>8}", "Weight", "Value");
    println!("{}", "-".repeat(21));
    for kind in CoefficientKind::ALL {
        println!("{:<12} {:>8.1}", kind.as_str(), system.coefficient(kind));
    }

    Ok(())
}
