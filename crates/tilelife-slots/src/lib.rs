//! Named-slot persistence for tilelife planes.
//!
//! Saves a [`BitPlane`](tilelife_core::BitPlane) under a short name and
//! restores it bit for bit.
//!
//! # Architecture
//!
//! - [`codec`] encodes one plane to any `Write` and decodes from any `Read`
//! - [`SlotStore`] names planes; [`MemorySlots`] and [`DirSlots`] implement it
//! - [`WorldSlots`] adds `save_to` / `load_from` to a running world
//! - All I/O uses a custom binary codec (no serde dependency)
//!
//! # Format
//!
//! ```text
//! [MAGIC "TLIF"] [VERSION u8] [rows u32] [cols u32] [row_bytes u32] [plane bytes]
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod hash;
pub mod store;
pub mod world;

pub use codec::{decode_plane, encode_plane};
pub use error::SlotError;
pub use hash::plane_hash;
pub use store::{DirSlots, MemorySlots, SlotStore};
pub use world::WorldSlots;

/// Magic bytes at the start of every saved plane.
pub const MAGIC: [u8; 4] = *b"TLIF";

/// Current binary format version.
pub const FORMAT_VERSION: u8 = 1;
