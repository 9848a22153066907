//! Applying the rule to a finished region.

use std::ops::AddAssign;

use tilelife_core::{BitPlane, Region};

use crate::rule::Rule;
use crate::scratch::ScratchCounts;

/// Cell transitions produced by one or more commits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CommitTally {
    /// Dead cells that became live.
    pub births: u64,
    /// Live cells that became dead.
    pub deaths: u64,
    /// Live cells written.
    pub live: u64,
}

impl AddAssign for CommitTally {
    fn add_assign(&mut self, rhs: Self) {
        self.births += rhs.births;
        self.deaths += rhs.deaths;
        self.live += rhs.live;
    }
}

/// Writes next-generation states for a region's commit footprint.
#[derive(Clone, Copy, Debug)]
pub struct Committer {
    rule: Rule,
}

impl Committer {
    /// Committer applying `rule`.
    pub fn new(rule: Rule) -> Self {
        Self { rule }
    }

    /// The rule being applied.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Write every cell of `region`'s commit footprint into `next`.
    ///
    /// Reads states from `current` and completed counts from `scratch`.
    /// Cells outside the footprint, including deferred edges, are left
    /// untouched; every cell inside is overwritten.
    ///
    /// # Panics
    ///
    /// Panics if a count exceeds 8, which means an overlap contribution was
    /// double-counted.
    pub fn commit(
        &self,
        current: &BitPlane,
        scratch: &ScratchCounts,
        region: &Region,
        next: &mut BitPlane,
    ) -> CommitTally {
        let mut tally = CommitTally::default();
        for row in region.commit_rows() {
            for col in region.commit_cols() {
                let count = scratch.get(row, col);
                assert!(count <= 8, "neighbour count {count} at ({row}, {col}) exceeds 8");
                let (r, c) = (row as i32, col as i32);
                let was = current.get(r, c);
                let now = self.rule.next_state(was, count);
                next.set(r, c, now);
                match (was, now) {
                    (false, true) => tally.births += 1,
                    (true, false) => tally.deaths += 1,
                    _ => {}
                }
                tally.live += u64::from(now);
            }
        }
        tally
    }
}

impl Default for Committer {
    fn default() -> Self {
        Self::new(Rule::conway())
    }
}
