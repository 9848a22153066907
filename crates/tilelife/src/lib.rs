//! tilelife: Conway's Game of Life on bit-packed planes with a bounded
//! scratch budget.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! tilelife sub-crates. For most users, adding `tilelife` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tilelife::prelude::*;
//!
//! // The device screen: 64 rows by 96 columns, stepped in 8-row strips.
//! let mut world = World::new(EngineConfig::default(), NullScreen).unwrap();
//! let glider = Pattern::parse(".O.\n..O\nOOO").unwrap();
//! world.stamp(&glider, 1, 1);
//!
//! for _ in 0..4 {
//!     world.take_step();
//! }
//! assert!(glider.matches_at(world.plane(), 2, 2));
//!
//! let mut slots = MemorySlots::new();
//! world.save_to(&mut slots, "glider").unwrap();
//! assert_eq!(slots.list().unwrap(), vec!["glider"]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tilelife-core` | `BitPlane`, `Region`, `Pattern`, `Generation`, `GridError` |
//! | [`engine`] | `tilelife-engine` | Partition plans, the step engine, `World`, `Session` |
//! | [`slots`] | `tilelife-slots` | Slot codec and stores |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Planes, regions, patterns and grid errors (`tilelife-core`).
pub use tilelife_core as types;

/// Partitioned stepping, collaborators and the session loop
/// (`tilelife-engine`).
///
/// [`engine::StepEngine`] advances a plane; [`engine::World`] adds a screen;
/// [`engine::Session`] adds the paused/running loop.
pub use tilelife_engine as engine;

/// Named-slot persistence (`tilelife-slots`).
///
/// Save planes with [`slots::MemorySlots`] or [`slots::DirSlots`], or
/// straight from a world through [`slots::WorldSlots`].
pub use tilelife_slots as slots;

/// Common imports for typical tilelife usage.
///
/// ```rust
/// use tilelife::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tilelife_core::{BitPlane, Generation, GridError, Pattern};

    // Engine
    pub use tilelife_engine::{
        Action, ConfigError, EngineConfig, Input, NoPower, NullScreen, PartitionStrategy,
        PowerHook, Rule, Screen, Session, SessionSummary, StepEngine, StepMetrics, TextScreen,
        World,
    };

    // Slots
    pub use tilelife_slots::{DirSlots, MemorySlots, SlotError, SlotStore, WorldSlots};
}
