//! Test utilities and mock collaborators for tilelife development.
//!
//! Provides an unpartitioned reference stepper to check the engine
//! against, mock implementations of the collaborator traits
//! ([`Screen`], [`Input`], [`PowerHook`]) and pattern fixtures.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::VecDeque;

use tilelife_core::BitPlane;
use tilelife_engine::{Action, Input, PowerHook, Rule, Screen};

// ── Reference stepper ──────────────────────────────────────────────

/// One Conway generation computed the obvious way: a dense 8-neighbour
/// lookup for every cell, with nothing beyond the edge.
pub fn reference_step(plane: &BitPlane) -> BitPlane {
    reference_step_with(plane, Rule::conway())
}

/// [`reference_step`] for an arbitrary rule.
pub fn reference_step_with(plane: &BitPlane, rule: Rule) -> BitPlane {
    let mut next = BitPlane::new(plane.rows(), plane.cols()).expect("source plane is valid");
    for row in 0..plane.rows() as i32 {
        for col in 0..plane.cols() as i32 {
            let mut count = 0u8;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if (dr, dc) != (0, 0) && plane.get(row + dr, col + dc) {
                        count += 1;
                    }
                }
            }
            next.set(row, col, rule.next_state(plane.get(row, col), count));
        }
    }
    next
}

/// Apply [`reference_step`] `n` times.
pub fn reference_steps(plane: &BitPlane, n: usize) -> BitPlane {
    (0..n).fold(plane.clone(), |p, _| reference_step(&p))
}

// ── Mock collaborators ─────────────────────────────────────────────

/// Screen that keeps a copy of every frame.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub frames: Vec<BitPlane>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<&BitPlane> {
        self.frames.last()
    }
}

impl Screen for RecordingScreen {
    fn redraw(&mut self, plane: &BitPlane) {
        self.frames.push(plane.clone());
    }
}

/// Input that replays a fixed script, then answers `Quit` forever.
///
/// `None` entries model polls with no key pressed.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    script: VecDeque<Option<Action>>,
    polls: usize,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = Option<Action>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            polls: 0,
        }
    }

    /// Polls answered so far.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl Input for ScriptedInput {
    fn poll(&mut self) -> Option<Action> {
        self.polls += 1;
        self.script.pop_front().unwrap_or(Some(Action::Quit))
    }
}

/// Power hook that counts every call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CountingPower {
    pub busy_on: usize,
    pub busy_off: usize,
    pub idles: usize,
}

impl PowerHook for CountingPower {
    fn set_busy(&mut self, busy: bool) {
        if busy {
            self.busy_on += 1;
        } else {
            self.busy_off += 1;
        }
    }

    fn idle(&mut self) {
        self.idles += 1;
    }
}
