//! The partitioned step engine.
//!
//! [`StepEngine`] owns two planes (current and next), the partition plan,
//! one scratch count matrix and the handoff carries. Each
//! [`step()`](StepEngine::step) walks the plan once:
//!
//! ```text
//! for each region, in plan order:
//!     begin     zero the scratch for this region
//!     load      copy / add counts deferred to this region
//!     count     scatter live-neighbour contributions
//!     export    save this region's deferred edges into the carries
//!     commit    apply the rule over the commit footprint into `next`
//! swap current <-> next, generation += 1
//! ```
//!
//! The current plane is read-only for the whole walk and `next` is written
//! only inside commit footprints, which tile the grid exactly. A step either
//! completes or panics on an internal invariant violation; there is no
//! partially-advanced state to observe.

use std::time::Instant;

use tilelife_core::{BitPlane, Generation, Pattern};

use crate::commit::{CommitTally, Committer};
use crate::config::{ConfigError, EngineConfig};
use crate::counter::NeighborCounter;
use crate::metrics::StepMetrics;
use crate::partition::PartitionPlan;
use crate::scratch::{Handoff, ScratchCounts};

// Compile-time assertion: StepEngine can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<StepEngine>();
    }
};

/// Double-buffered Life stepper over a fixed partition plan.
pub struct StepEngine {
    plan: PartitionPlan,
    current: BitPlane,
    next: BitPlane,
    scratch: ScratchCounts,
    handoff: Handoff,
    counter: NeighborCounter,
    committer: Committer,
    generation: Generation,
    last_metrics: StepMetrics,
}

impl StepEngine {
    /// Validate `config` and build an engine over an empty grid.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        let plane = BitPlane::new(config.rows, config.cols)?;
        Self::with_plane(config, plane)
    }

    /// Validate `config` and build an engine seeded with `plane`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::GeometryMismatch`] if `plane` does not match
    /// the configured dimensions, or any validation error from `config`.
    pub fn with_plane(config: EngineConfig, plane: BitPlane) -> Result<Self, ConfigError> {
        let plan = PartitionPlan::for_config(&config)?;
        check_geometry(&plan, &plane)?;
        let next = BitPlane::new(config.rows, config.cols)?;
        let scratch = ScratchCounts::new(plan.max_region_area());
        let handoff = Handoff::new(plan.cols(), plan.max_region_height());

        tracing::info!(
            rows = plan.rows(),
            cols = plan.cols(),
            strategy = %plan.strategy(),
            regions = plan.len(),
            scratch_bytes = plan.transient_bytes(),
            rule = %config.rule,
            "step engine ready"
        );

        Ok(Self {
            plan,
            current: plane,
            next,
            scratch,
            handoff,
            counter: NeighborCounter,
            committer: Committer::new(config.rule),
            generation: Generation::default(),
            last_metrics: StepMetrics::default(),
        })
    }

    /// Advance exactly one generation.
    ///
    /// # Panics
    ///
    /// Panics if an internal invariant is violated (a neighbour count above
    /// 8 or a scratch access outside the active region).
    pub fn step(&mut self) -> &StepMetrics {
        let start = Instant::now();
        let span = tracing::debug_span!("step", generation = self.generation.0 + 1);
        let _enter = span.enter();

        let mut tally = CommitTally::default();
        let mut sources = 0;
        for region in self.plan.iter() {
            self.scratch.begin(region);
            self.handoff.load(region, &mut self.scratch);
            let live = self.counter.count(&self.current, region, &mut self.scratch);
            self.handoff.export(region, &self.scratch);
            let committed =
                self.committer
                    .commit(&self.current, &self.scratch, region, &mut self.next);
            tracing::trace!(
                row = region.row(),
                col = region.col(),
                sources = live,
                births = committed.births,
                deaths = committed.deaths,
                "region committed"
            );
            sources += live;
            tally += committed;
        }

        std::mem::swap(&mut self.current, &mut self.next);
        self.generation = self.generation.next();

        self.last_metrics = StepMetrics {
            generation: self.generation,
            total_us: start.elapsed().as_micros() as u64,
            regions: self.plan.len(),
            sources,
            births: tally.births,
            deaths: tally.deaths,
            population: tally.live,
            scratch_bytes: self.scratch_bytes(),
        };
        tracing::debug!(
            births = tally.births,
            deaths = tally.deaths,
            population = tally.live,
            total_us = self.last_metrics.total_us,
            "step complete"
        );
        &self.last_metrics
    }

    /// Advance `n` generations.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// State of a cell in the current plane. Off-grid cells are dead.
    pub fn get_cell(&self, row: i32, col: i32) -> bool {
        self.current.get(row, col)
    }

    /// Set a cell in the current plane. Off-grid writes are ignored.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        self.current.set(row, col, alive);
    }

    /// Set every live cell of `pattern` with its origin at `(row, col)`.
    ///
    /// Cells landing off the grid are dropped.
    pub fn stamp(&mut self, pattern: &Pattern, row: i32, col: i32) {
        pattern.stamp(&mut self.current, row, col);
    }

    /// The current plane.
    pub fn current(&self) -> &BitPlane {
        &self.current
    }

    /// Swap in a new current plane, returning the old one.
    ///
    /// The generation counter is left alone.
    pub fn replace_plane(&mut self, plane: BitPlane) -> Result<BitPlane, ConfigError> {
        check_geometry(&self.plan, &plane)?;
        Ok(std::mem::replace(&mut self.current, plane))
    }

    /// Kill every cell and reset the generation to zero.
    pub fn clear(&mut self) {
        self.current.clear();
        self.generation = Generation::default();
    }

    /// Generations completed.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The partition plan replayed every step.
    pub fn plan(&self) -> &PartitionPlan {
        &self.plan
    }

    /// Metrics from the most recent step.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Transient bytes a step uses: scratch matrix plus carries.
    pub fn scratch_bytes(&self) -> usize {
        self.scratch.memory_bytes() + self.handoff.memory_bytes()
    }
}

fn check_geometry(plan: &PartitionPlan, plane: &BitPlane) -> Result<(), ConfigError> {
    if (plane.rows(), plane.cols()) != (plan.rows(), plan.cols()) {
        return Err(ConfigError::GeometryMismatch {
            expected: (plan.rows(), plan.cols()),
            found: (plane.rows(), plane.cols()),
        });
    }
    Ok(())
}

impl std::fmt::Debug for StepEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StepEngine")
            .field("generation", &self.generation)
            .field("strategy", &self.plan.strategy())
            .field("regions", &self.plan.len())
            .field("population", &self.current.population())
            .finish()
    }
}
