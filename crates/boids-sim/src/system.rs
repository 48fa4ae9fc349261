//! The `BoidSystem` struct and its tick loop.

use boids_core::{BoidId, Frame, ObstacleId, SimClock, SimRng, Vector2D};
use boids_flock::{CoefficientKind, Coefficients, Flock, FlockContext, FlockRecord};
use boids_model::{Boid, Obstacle, Population};
use tracing::{debug, info, trace};

use crate::builder::check_population;
use crate::config::check_capacity;
use crate::{
    Command, CommandOutcome, Connection, ConnectionKind, ModelBatch, SimConfig, SimError,
    SimResult, SystemBuilder, SystemObserver, TickStats,
};

/// The flocking simulation.
///
/// `BoidSystem` owns the population, the obstacles, the behavior weights and
/// the flock records of the last tick, and drives the two-phase tick loop:
///
/// 1. **Impulse phase** (optionally parallel with the `parallel` feature):
///    build a [`Flock`] for every boid against the pre-update snapshot and
///    reduce it to a [`FlockRecord`].
/// 2. **Apply phase** (sequential, ascending `BoidId`): assign each impulse
///    as the boid's acceleration and integrate by the timestep.
///
/// Create via [`SystemBuilder`] or [`BoidSystem::new`].
pub struct BoidSystem {
    config: SimConfig,

    /// Tick counter and accumulated simulated seconds.  Not reset when the
    /// population is.
    pub clock: SimClock,

    rng:          SimRng,
    boids:        Vec<Boid>,
    obstacles:    Vec<Obstacle>,
    coefficients: Coefficients,

    /// `flocks[i]` belongs to `boids[i]`.  Rebuilt every tick, cleared on
    /// reset, and shorter than `boids` after an insertion until the next tick.
    flocks: Vec<FlockRecord>,
}

impl BoidSystem {
    /// Build a system with a random initial population from `config`.
    pub fn new(config: SimConfig) -> SimResult<Self> {
        SystemBuilder::new(config).build()
    }

    pub(crate) fn from_parts(config: SimConfig, rng: SimRng, population: Population) -> Self {
        Self {
            coefficients: config.coefficients,
            config,
            clock: SimClock::new(),
            rng,
            boids: population.boids,
            obstacles: population.obstacles,
            flocks: Vec::new(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    #[inline]
    pub fn frame(&self) -> Frame {
        self.config.frame
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.config.radius
    }

    /// The seed of the system RNG, drawn at build time if none was configured.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[inline]
    pub fn boids(&self) -> &[Boid] {
        &self.boids
    }

    #[inline]
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Flock records of the last tick, in boid order.
    #[inline]
    pub fn flocks(&self) -> &[FlockRecord] {
        &self.flocks
    }

    pub fn boid(&self, id: BoidId) -> Option<&Boid> {
        self.boids.get(id.index())
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.obstacles.get(id.index())
    }

    pub fn flock_of(&self, id: BoidId) -> Option<&FlockRecord> {
        self.flocks.get(id.index())
    }

    /// Statistics for the current state and the last built flocks.
    pub fn stats(&self) -> TickStats {
        TickStats::collect(
            self.clock.current_tick,
            self.clock.elapsed_secs,
            &self.boids,
            self.obstacles.len(),
            &self.flocks,
        )
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Draw a fresh random population from the system RNG.
    ///
    /// The current population is left untouched; pass the result to
    /// [`replace_population`][Self::replace_population] to install it.
    pub fn new_population(&mut self, boid_count: usize, obstacle_count: usize) -> Population {
        self.config
            .population_builder(boid_count, obstacle_count)
            .build(&mut self.rng)
    }

    /// Install `population`, discarding the current one and its flocks.
    pub fn replace_population(&mut self, population: Population) -> SimResult<()> {
        check_population(&self.config, &population)?;
        self.install(population);
        Ok(())
    }

    /// Replace the population with `boid_count` random boids and
    /// `obstacle_count` random obstacles.
    pub fn reset(&mut self, boid_count: usize, obstacle_count: usize) -> SimResult<()> {
        check_capacity("boid", boid_count)?;
        check_capacity("obstacle", obstacle_count)?;
        let population = self.new_population(boid_count, obstacle_count);
        self.install(population);
        info!(
            boids = boid_count,
            obstacles = obstacle_count,
            tick = %self.clock.current_tick,
            "population reset"
        );
        Ok(())
    }

    /// [`reset`][Self::reset] with the configured initial counts.
    pub fn reset_default(&mut self) -> SimResult<()> {
        self.reset(self.config.boid_count, self.config.obstacle_count)
    }

    fn install(&mut self, population: Population) {
        self.boids = population.boids;
        self.obstacles = population.obstacles;
        self.flocks.clear();
    }

    /// Insert a motionless boid at `(x, y)`, wrapped into the frame.
    pub fn add_boid(&mut self, x: f64, y: f64) -> SimResult<BoidId> {
        let position = checked_point(x, y)?;
        let id = BoidId::try_from(self.boids.len())
            .map_err(|_| SimError::CapacityExceeded { what: "boid", count: self.boids.len() + 1 })?;
        self.boids.push(Boid::at(position, self.config.frame, self.config.boid));
        debug!(%id, x, y, "boid added");
        Ok(id)
    }

    /// Insert an obstacle at `(x, y)`, wrapped and rounded to the grid.
    pub fn add_obstacle(&mut self, x: f64, y: f64) -> SimResult<ObstacleId> {
        let position = checked_point(x, y)?;
        let id = ObstacleId::try_from(self.obstacles.len()).map_err(|_| {
            SimError::CapacityExceeded { what: "obstacle", count: self.obstacles.len() + 1 }
        })?;
        self.obstacles
            .push(Obstacle::new(position, self.config.frame, self.config.obstacle_size));
        debug!(%id, x, y, "obstacle added");
        Ok(id)
    }

    // ── Coefficients ──────────────────────────────────────────────────────

    #[inline]
    pub fn coefficients(&self) -> &Coefficients {
        &self.coefficients
    }

    #[inline]
    pub fn coefficient(&self, kind: CoefficientKind) -> f64 {
        self.coefficients.get(kind)
    }

    pub fn set_coefficient(&mut self, kind: CoefficientKind, value: f64) -> SimResult<()> {
        self.coefficients.set(kind, value)?;
        debug!(%kind, value, "coefficient set");
        Ok(())
    }

    /// Add `delta` to one weight and return its new value.
    pub fn adjust_coefficient(&mut self, kind: CoefficientKind, delta: f64) -> SimResult<f64> {
        let value = self.coefficients.adjust(kind, delta)?;
        debug!(%kind, delta, value, "coefficient adjusted");
        Ok(value)
    }

    pub fn set_coefficients(&mut self, coefficients: Coefficients) -> SimResult<()> {
        coefficients.validate()?;
        self.coefficients = coefficients;
        debug!(?coefficients, "coefficients replaced");
        Ok(())
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one tick spanning `timestep` seconds.
    ///
    /// Every flock sees the population as it stood before this call; motion
    /// is integrated only after all impulses are known.
    pub fn update(&mut self, timestep: f64) -> SimResult<TickStats> {
        check_timestep(timestep)?;
        let tick = self.clock.current_tick;

        // ── Phase 1: impulses against the pre-update snapshot ─────────────
        self.flocks = self.compute_flocks();

        // ── Phase 2: apply and integrate in ascending id order ────────────
        for (boid, record) in self.boids.iter_mut().zip(&self.flocks) {
            boid.set_acceleration(record.impulse);
            boid.update(timestep);
        }

        self.clock.advance(timestep);
        let stats = TickStats::collect(
            tick,
            self.clock.elapsed_secs,
            &self.boids,
            self.obstacles.len(),
            &self.flocks,
        );
        trace!(
            tick = tick.0,
            flocked = stats.flocked_count,
            mean_speed = stats.mean_speed,
            "tick complete"
        );
        Ok(stats)
    }

    /// Build and reduce one flock per boid.
    ///
    /// With the `parallel` Cargo feature the flocks are built on Rayon's
    /// thread pool; `collect` keeps them in boid order either way.
    fn compute_flocks(&self) -> Vec<FlockRecord> {
        let ctx = FlockContext::new(
            &self.boids,
            &self.obstacles,
            self.config.radius,
            self.coefficients,
        );

        #[cfg(not(feature = "parallel"))]
        {
            ctx.boids_with_ids()
                .map(|(id, boid)| Flock::new(id, boid, ctx).into_record())
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.boids
                .par_iter()
                .enumerate()
                .map(|(i, boid)| Flock::new(BoidId(i as u32), boid, ctx).into_record())
                .collect()
        }
    }

    /// Run exactly `n` ticks of `timestep` seconds each.
    ///
    /// Calls observer hooks at every tick boundary and `on_sim_end` once at
    /// the end.  Use [`NoopObserver`][crate::NoopObserver] if you don't need
    /// callbacks.
    pub fn run_ticks<O: SystemObserver>(
        &mut self,
        n:        u64,
        timestep: f64,
        observer: &mut O,
    ) -> SimResult<()> {
        check_timestep(timestep)?;
        let interval = self.config.output_interval_ticks;
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let stats = self.update(timestep)?;
            observer.on_tick_end(now, &stats);
            if interval > 0 && now.0.is_multiple_of(interval) {
                observer.on_snapshot(now, &self.boids, &self.flocks);
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Dispatch one user command.
    pub fn apply(&mut self, command: Command) -> SimResult<CommandOutcome> {
        match command {
            Command::Reset { boid_count, obstacle_count } => {
                self.reset(boid_count, obstacle_count)?;
                Ok(CommandOutcome::Reset { boid_count, obstacle_count })
            }
            Command::ResetDefault => {
                self.reset_default()?;
                Ok(CommandOutcome::Reset {
                    boid_count:     self.config.boid_count,
                    obstacle_count: self.config.obstacle_count,
                })
            }
            Command::AddBoid { x, y } => self.add_boid(x, y).map(CommandOutcome::BoidAdded),
            Command::AddObstacle { x, y } => {
                self.add_obstacle(x, y).map(CommandOutcome::ObstacleAdded)
            }
            Command::AdjustCoefficient { kind, delta } => {
                let value = self.adjust_coefficient(kind, delta)?;
                Ok(CommandOutcome::Coefficient { kind, value })
            }
            Command::SetCoefficient { kind, value } => {
                self.set_coefficient(kind, value)?;
                Ok(CommandOutcome::Coefficient { kind, value })
            }
            Command::Advance { timestep } => self.update(timestep).map(CommandOutcome::Advanced),
        }
    }

    // ── Render views ──────────────────────────────────────────────────────

    /// All boid triangles, or `None` with no boids.
    pub fn boid_batch(&self) -> SimResult<Option<ModelBatch>> {
        ModelBatch::from_models(&self.boids)
    }

    /// All obstacle squares, or `None` with no obstacles.
    pub fn obstacle_batch(&self) -> SimResult<Option<ModelBatch>> {
        ModelBatch::from_models(&self.obstacles)
    }

    /// Lines from every boid to each model in the chosen mapping of its last
    /// flock, split in two where they cross a frame edge.
    ///
    /// Uses current positions with last tick's neighbor sets.
    pub fn connections(&self, kind: ConnectionKind) -> Vec<Connection> {
        let mut connections = Vec::new();
        for record in &self.flocks {
            let Some(owner) = self.boids.get(record.boid.index()) else {
                continue;
            };
            match kind {
                ConnectionKind::Neighbors => connections.extend(
                    record
                        .neighbors
                        .keys()
                        .filter_map(|id| self.boids.get(id.index()))
                        .map(|other| Connection::between(owner, other)),
                ),
                ConnectionKind::Obstacles => connections.extend(
                    record
                        .obstacles
                        .keys()
                        .filter_map(|id| self.obstacles.get(id.index()))
                        .map(|other| Connection::between(owner, other)),
                ),
            }
        }
        connections
    }
}

fn check_timestep(timestep: f64) -> SimResult<()> {
    if timestep.is_finite() && timestep > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidTimestep(timestep))
    }
}

fn checked_point(x: f64, y: f64) -> SimResult<Vector2D> {
    if x.is_finite() && y.is_finite() {
        Ok(Vector2D::new(x, y))
    } else {
        Err(SimError::InvalidPoint { x, y })
    }
}
