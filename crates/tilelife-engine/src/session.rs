//! The interactive run/pause/quit loop.
//!
//! ```text
//!            Start                 Quit
//!   Paused ─────────> Running ──────────> Done
//!     ^  │   <─────────
//!     │  │    Stop
//!     └──┘ Step (one generation)
//!   Paused ──── Quit ───────────────────> Done
//! ```
//!
//! A session starts paused. Input is polled once per iteration, between
//! whole steps. While running, every iteration without a `Stop` or `Quit`
//! advances one generation.

use tilelife_core::Generation;

use crate::collab::{Action, Input, NoPower, PowerHook, Screen};
use crate::world::World;

/// Where the loop is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RunState {
    /// Waiting for input; no stepping.
    Paused,
    /// Stepping every iteration.
    Running,
    /// Finished.
    Done,
}

/// What a finished session did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Generations advanced during the session.
    pub steps: u64,
    /// Times input was polled.
    pub polls: u64,
    /// Generation reached when the session ended.
    pub final_generation: Generation,
}

/// Next state and whether to step, for one polled action.
fn transition(state: RunState, action: Option<Action>) -> (RunState, bool) {
    match (state, action) {
        (RunState::Done, _) => (RunState::Done, false),
        (_, Some(Action::Quit)) => (RunState::Done, false),
        (RunState::Paused, Some(Action::Start)) => (RunState::Running, true),
        (RunState::Paused, Some(Action::Step)) => (RunState::Paused, true),
        (RunState::Paused, Some(Action::Stop) | None) => (RunState::Paused, false),
        (RunState::Running, Some(Action::Stop)) => (RunState::Paused, false),
        (RunState::Running, Some(Action::Start | Action::Step) | None) => {
            (RunState::Running, true)
        }
    }
}

/// Drives a [`World`] from an [`Input`].
pub struct Session<'w, S: Screen> {
    world: &'w mut World<S>,
    state: RunState,
    summary: SessionSummary,
}

impl<'w, S: Screen> Session<'w, S> {
    /// A paused session over `world`.
    pub fn new(world: &'w mut World<S>) -> Self {
        let final_generation = world.generation();
        Self {
            world,
            state: RunState::Paused,
            summary: SessionSummary {
                final_generation,
                ..SessionSummary::default()
            },
        }
    }

    /// Current state.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The world being driven.
    pub fn world(&self) -> &World<S> {
        &*self.world
    }

    /// Apply one polled action without a power hook.
    ///
    /// Returns whether a generation was advanced.
    pub fn handle(&mut self, action: Option<Action>) -> bool {
        self.advance(action, &mut NoPower)
    }

    /// Poll `input` until `Quit`, stepping and redrawing as directed.
    ///
    /// The screen is drawn once before the first poll so the seed is
    /// visible while paused.
    pub fn run<I, P>(mut self, input: &mut I, power: &mut P) -> SessionSummary
    where
        I: Input + ?Sized,
        P: PowerHook + ?Sized,
    {
        self.world.redraw();
        tracing::info!(generation = %self.world.generation(), "session started");
        while self.state != RunState::Done {
            let action = input.poll();
            self.summary.polls += 1;
            self.advance(action, power);
        }
        tracing::info!(
            steps = self.summary.steps,
            generation = %self.summary.final_generation,
            "session finished"
        );
        self.summary
    }

    fn advance<P: PowerHook + ?Sized>(&mut self, action: Option<Action>, power: &mut P) -> bool {
        let (next, step) = transition(self.state, action);
        if next != self.state {
            tracing::debug!(from = ?self.state, to = ?next, ?action, "session state change");
        }
        match (self.state, next) {
            (RunState::Running, RunState::Running) => {}
            (_, RunState::Running) => power.set_busy(true),
            (RunState::Running, _) => power.set_busy(false),
            _ => {}
        }
        if next == RunState::Paused && !step {
            power.idle();
        }
        self.state = next;
        if step {
            self.world.take_step();
            self.summary.steps += 1;
        }
        self.summary.final_generation = self.world.generation();
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collab::NullScreen;
    use crate::config::EngineConfig;

    #[test]
    fn transition_table() {
        use Action::*;
        use RunState::*;
        let cases = [
            (Paused, None, Paused, false),
            (Paused, Some(Start), Running, true),
            (Paused, Some(Step), Paused, true),
            (Paused, Some(Stop), Paused, false),
            (Paused, Some(Quit), Done, false),
            (Running, None, Running, true),
            (Running, Some(Start), Running, true),
            (Running, Some(Step), Running, true),
            (Running, Some(Stop), Paused, false),
            (Running, Some(Quit), Done, false),
            (Done, Some(Start), Done, false),
            (Done, None, Done, false),
        ];
        for (from, action, to, step) in cases {
            assert_eq!(transition(from, action), (to, step), "{from:?} + {action:?}");
        }
    }

    #[test]
    fn session_starts_paused_and_steps_on_demand() {
        let mut world = World::new(EngineConfig::new(4, 4), NullScreen).unwrap();
        let mut session = Session::new(&mut world);
        assert_eq!(session.state(), RunState::Paused);
        assert!(!session.handle(None));
        assert!(session.handle(Some(Action::Step)));
        assert_eq!(session.state(), RunState::Paused);
        assert_eq!(session.world().generation(), Generation(1));
    }

    #[test]
    fn stop_pauses_without_stepping() {
        let mut world = World::new(EngineConfig::new(4, 4), NullScreen).unwrap();
        let mut session = Session::new(&mut world);
        assert!(session.handle(Some(Action::Start)));
        assert!(session.handle(None));
        assert!(!session.handle(Some(Action::Stop)));
        assert_eq!(session.state(), RunState::Paused);
        assert_eq!(session.world().generation(), Generation(2));
    }
}
