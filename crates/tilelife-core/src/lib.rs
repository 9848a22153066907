//! Core types for the tilelife workspace.
//!
//! This is the leaf crate with no internal dependencies. It owns the
//! single bit-addressing abstraction ([`BitPlane`]), the rectangular
//! [`Region`] descriptor the partition planner produces, ASCII
//! [`Pattern`] seeding, the [`Generation`] counter and the error types
//! shared by the engine and persistence crates.
//!
//! # Bit layout
//!
//! ```text
//! row 0: [b7 b6 b5 b4 b3 b2 b1 b0] [b7 ...] ... (row_bytes = ceil(cols / 8))
//! row 1: ...
//! ```
//!
//! Column `c` of a row lives in byte `c / 8` at mask `0x80 >> (c % 8)`.
//! Padding bits past the last column are always zero.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pattern;
pub mod plane;
pub mod region;

pub use error::GridError;
pub use id::Generation;
pub use pattern::Pattern;
pub use plane::BitPlane;
pub use region::Region;
