//! Error types for slot persistence.

use std::fmt;
use std::io;

use tilelife_core::GridError;
use tilelife_engine::ConfigError;

/// Errors from encoding, decoding or storing planes.
#[derive(Debug)]
pub enum SlotError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The data does not start with the expected `b"TLIF"` magic bytes.
    InvalidMagic,
    /// The format version is not supported by this build.
    UnsupportedVersion {
        /// The version found in the data.
        found: u8,
    },
    /// The data ended before the header or payload was complete.
    Truncated {
        /// Bytes the decoder needed.
        expected: usize,
        /// Bytes actually available.
        found: usize,
    },
    /// The header describes a plane that cannot exist.
    Malformed {
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// The payload does not form a valid plane.
    Grid(GridError),
    /// The decoded plane does not fit the engine it was loaded into.
    Engine(ConfigError),
    /// No slot has this name.
    NotFound {
        /// The requested slot.
        name: String,
    },
    /// Slot names must be 1 to 64 ASCII letters, digits, `-` or `_`.
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::InvalidMagic => write!(f, "invalid magic bytes (expected b\"TLIF\")"),
            Self::UnsupportedVersion { found } => {
                write!(f, "unsupported format version {found}")
            }
            Self::Truncated { expected, found } => {
                write!(f, "truncated slot: needed {expected} bytes, found {found}")
            }
            Self::Malformed { detail } => write!(f, "malformed slot: {detail}"),
            Self::Grid(e) => write!(f, "invalid plane: {e}"),
            Self::Engine(e) => write!(f, "cannot load plane: {e}"),
            Self::NotFound { name } => write!(f, "no slot named {name:?}"),
            Self::InvalidName { name } => write!(f, "invalid slot name {name:?}"),
        }
    }
}

impl std::error::Error for SlotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Grid(e) => Some(e),
            Self::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SlotError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<GridError> for SlotError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<ConfigError> for SlotError {
    fn from(e: ConfigError) -> Self {
        Self::Engine(e)
    }
}
