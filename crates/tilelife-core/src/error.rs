//! Error types for plane construction and pattern parsing.

use std::error::Error;
use std::fmt;

/// Errors arising from grid construction, raw plane import, or seeding.
///
/// Cell access never fails (off-grid reads are dead, off-grid writes are
/// dropped); these errors only surface where geometry is established.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid with zero rows or zero columns.
    EmptyGrid,
    /// A dimension does not fit the signed coordinate space.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// Raw plane bytes disagree with `row_bytes * rows`.
    ByteLengthMismatch {
        /// Bytes required by the declared geometry.
        expected: usize,
        /// Bytes supplied.
        found: usize,
    },
    /// A declared row stride disagrees with `ceil(cols / 8)`.
    RowStrideMismatch {
        /// Stride implied by the column count.
        expected: usize,
        /// Stride supplied by the caller.
        found: usize,
    },
    /// Raw plane bytes have set bits past the last column of a row.
    DirtyPadding {
        /// The offending row.
        row: u32,
    },
    /// An ASCII pattern contains a character that is neither live nor dead.
    PatternSyntax {
        /// Zero-based line within the pattern text.
        line: usize,
        /// Zero-based character column within that line.
        column: usize,
        /// The unexpected character.
        found: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::ByteLengthMismatch { expected, found } => {
                write!(f, "plane needs {expected} bytes, got {found}")
            }
            Self::RowStrideMismatch { expected, found } => {
                write!(f, "row stride {found} bytes does not match expected {expected}")
            }
            Self::DirtyPadding { row } => {
                write!(f, "row {row} has bits set past the last column")
            }
            Self::PatternSyntax {
                line,
                column,
                found,
            } => {
                write!(f, "unexpected {found:?} in pattern at line {line}, column {column}")
            }
        }
    }
}

impl Error for GridError {}
