//! User-facing wrapper pairing a step engine with a screen.

use tilelife_core::{BitPlane, Generation, Pattern};

use crate::collab::Screen;
use crate::config::{ConfigError, EngineConfig};
use crate::metrics::StepMetrics;
use crate::step::StepEngine;

/// A grid that redraws itself after every generation.
///
/// # Example
///
/// ```
/// use tilelife_engine::{EngineConfig, NullScreen, World};
///
/// let mut world = World::new(EngineConfig::new(8, 8), NullScreen).unwrap();
/// for c in 2..=4 {
///     world.set_cell(3, c, true);
/// }
/// world.take_step();
/// assert!(world.get_cell(2, 3) && world.get_cell(4, 3));
/// ```
pub struct World<S: Screen> {
    engine: StepEngine,
    screen: S,
}

impl<S: Screen> World<S> {
    /// Build an empty world drawing to `screen`.
    pub fn new(config: EngineConfig, screen: S) -> Result<Self, ConfigError> {
        Ok(Self::from_engine(StepEngine::new(config)?, screen))
    }

    /// Wrap an existing engine.
    pub fn from_engine(engine: StepEngine, screen: S) -> Self {
        Self { engine, screen }
    }

    /// Advance one generation, then redraw the whole plane.
    pub fn take_step(&mut self) -> &StepMetrics {
        self.engine.step();
        self.screen.redraw(self.engine.current());
        self.engine.last_metrics()
    }

    /// Redraw without stepping.
    pub fn redraw(&mut self) {
        self.screen.redraw(self.engine.current());
    }

    /// State of a cell. Off-grid cells are dead.
    pub fn get_cell(&self, row: i32, col: i32) -> bool {
        self.engine.get_cell(row, col)
    }

    /// Set a cell. Off-grid writes are ignored; nothing is redrawn.
    pub fn set_cell(&mut self, row: i32, col: i32, alive: bool) {
        self.engine.set_cell(row, col, alive);
    }

    /// Stamp `pattern` at `(row, col)`; nothing is redrawn.
    pub fn stamp(&mut self, pattern: &Pattern, row: i32, col: i32) {
        self.engine.stamp(pattern, row, col);
    }

    /// The current plane.
    pub fn plane(&self) -> &BitPlane {
        self.engine.current()
    }

    /// Generations completed.
    pub fn generation(&self) -> Generation {
        self.engine.generation()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &StepEngine {
        &self.engine
    }

    /// Mutable access to the underlying engine.
    pub fn engine_mut(&mut self) -> &mut StepEngine {
        &mut self.engine
    }

    /// The screen.
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Take the world apart.
    pub fn into_parts(self) -> (StepEngine, S) {
        (self.engine, self.screen)
    }
}

impl<S: Screen> std::fmt::Debug for World<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("World").field("engine", &self.engine).finish()
    }
}
