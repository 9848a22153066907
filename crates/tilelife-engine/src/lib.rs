//! Memory-constrained Game of Life stepping.
//!
//! A full generation needs a neighbour count for every cell. Instead of one
//! grid-sized count matrix, [`StepEngine`] walks a [`PartitionPlan`] of
//! overlapping regions, counting each into a scratch buffer no bigger than
//! the largest region and handing partial counts of shared edges to the
//! region that commits them. The result is identical to an unpartitioned
//! step for every plan.
//!
//! [`World`] pairs an engine with a [`Screen`]; [`Session`] drives a world
//! from an [`Input`] through the paused/running/done loop.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod collab;
pub mod commit;
pub mod config;
pub mod counter;
pub mod metrics;
pub mod partition;
pub mod rule;
pub mod scratch;
pub mod session;
pub mod step;
pub mod world;

pub use collab::{Action, Input, NoPower, NullScreen, PowerHook, Screen, TextScreen};
pub use commit::{CommitTally, Committer};
pub use config::{ConfigError, EngineConfig, PartitionStrategy};
pub use counter::NeighborCounter;
pub use metrics::StepMetrics;
pub use partition::PartitionPlan;
pub use rule::{Rule, RuleError};
pub use scratch::{Handoff, ScratchCounts};
pub use session::{RunState, Session, SessionSummary};
pub use step::StepEngine;
pub use world::World;
