//! Bit-packed boolean plane.
//!
//! [`BitPlane`] is the only place in the workspace that knows about bytes,
//! masks, and row strides. Everything else addresses cells by
//! `(row, col)`.

use std::fmt;
use std::ops::RangeInclusive;

use smallvec::SmallVec;

use crate::error::GridError;

/// Live column indices found in one row segment.
pub type LiveCols = SmallVec<[u32; 16]>;

/// A complete bit-packed snapshot of the grid.
///
/// Rows are stored back to back, `row_bytes = ceil(cols / 8)` bytes each,
/// most-significant bit first within a byte. Coordinates outside the grid
/// read as dead and ignore writes, so seeding code can stamp patterns
/// that hang off the edge without corrupting neighbouring rows.
///
/// # Examples
///
/// ```
/// use tilelife_core::BitPlane;
///
/// let mut plane = BitPlane::new(4, 10).unwrap();
/// assert_eq!(plane.row_bytes(), 2);
///
/// plane.set(1, 9, true);
/// assert!(plane.get(1, 9));
/// assert!(!plane.get(1, 10)); // off-grid is dead
/// plane.set(-1, 3, true);     // off-grid writes are dropped
/// assert_eq!(plane.population(), 1);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BitPlane {
    rows: u32,
    cols: u32,
    row_bytes: usize,
    bits: Vec<u8>,
}

impl BitPlane {
    /// Largest accepted dimension; coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create an all-dead plane with `rows * cols` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds [`Self::MAX_DIM`].
    pub fn new(rows: u32, cols: u32) -> Result<Self, GridError> {
        let row_bytes = Self::validate_dims(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            row_bytes,
            bits: vec![0; row_bytes * rows as usize],
        })
    }

    /// Adopt raw plane bytes laid out as described on [`BitPlane`].
    ///
    /// The byte length must be exactly `row_bytes * rows` and every
    /// padding bit past the last column must be clear.
    pub fn from_bytes(rows: u32, cols: u32, bytes: Vec<u8>) -> Result<Self, GridError> {
        let row_bytes = Self::validate_dims(rows, cols)?;
        let expected = row_bytes * rows as usize;
        if bytes.len() != expected {
            return Err(GridError::ByteLengthMismatch {
                expected,
                found: bytes.len(),
            });
        }
        let padding = Self::padding_mask(cols);
        if padding != 0 {
            for row in 0..rows {
                let last = bytes[(row as usize + 1) * row_bytes - 1];
                if last & padding != 0 {
                    return Err(GridError::DirtyPadding { row });
                }
            }
        }
        Ok(Self {
            rows,
            cols,
            row_bytes,
            bits: bytes,
        })
    }

    /// Bytes per row implied by a column count: `ceil(cols / 8)`.
    pub fn stride_for(cols: u32) -> usize {
        cols.div_ceil(8) as usize
    }

    /// Check a geometry without allocating; returns the row stride.
    pub fn validate_dims(rows: u32, cols: u32) -> Result<usize, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid);
        }
        if rows > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self::stride_for(cols))
    }

    /// Bits of a row's final byte that lie past the last column.
    fn padding_mask(cols: u32) -> u8 {
        match cols % 8 {
            0 => 0,
            used => 0xFF >> used,
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Bytes per packed row.
    pub fn row_bytes(&self) -> usize {
        self.row_bytes
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Whether `other` has identical dimensions.
    pub fn same_geometry(&self, other: &BitPlane) -> bool {
        self.rows == other.rows && self.cols == other.cols
    }

    /// The packed bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Consume the plane, returning the packed bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bits
    }

    /// Byte index and mask for an in-grid cell.
    #[inline]
    fn locate(&self, row: i32, col: i32) -> Option<(usize, u8)> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as u32, col as u32);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let byte = row as usize * self.row_bytes + (col / 8) as usize;
        Some((byte, 0x80 >> (col % 8)))
    }

    /// Whether the cell at `(row, col)` is alive. Off-grid cells are dead.
    #[inline]
    pub fn get(&self, row: i32, col: i32) -> bool {
        self.locate(row, col)
            .is_some_and(|(byte, mask)| self.bits[byte] & mask != 0)
    }

    /// Set the cell at `(row, col)`. Off-grid writes are ignored.
    #[inline]
    pub fn set(&mut self, row: i32, col: i32, alive: bool) {
        if let Some((byte, mask)) = self.locate(row, col) {
            if alive {
                self.bits[byte] |= mask;
            } else {
                self.bits[byte] &= !mask;
            }
        }
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.bits.fill(0);
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.bits.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Live columns of `row` within `cols`, in ascending order.
    ///
    /// All-dead bytes are skipped eight columns at a time, so sparse rows
    /// cost roughly one load per byte. Columns past the grid edge and rows
    /// past the last row yield nothing.
    pub fn live_cols_in_row(&self, row: u32, cols: RangeInclusive<u32>) -> LiveCols {
        let mut out = LiveCols::new();
        if row >= self.rows {
            return out;
        }
        let first = *cols.start();
        let last = (*cols.end()).min(self.cols - 1);
        let base = row as usize * self.row_bytes;
        let mut col = first;
        while col <= last {
            let byte = self.bits[base + (col / 8) as usize];
            if byte == 0 {
                col = (col / 8 + 1) * 8;
                continue;
            }
            if byte & (0x80 >> (col % 8)) != 0 {
                out.push(col);
            }
            col += 1;
        }
        out
    }

    /// Every live cell as `(row, col)`, row-major.
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (0..self.rows).flat_map(move |row| {
            self.live_cols_in_row(row, 0..=self.cols - 1)
                .into_iter()
                .map(move |col| (row, col))
        })
    }
}

impl fmt::Debug for BitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitPlane")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("row_bytes", &self.row_bytes)
            .field("population", &self.population())
            .finish()
    }
}

/// Renders `#` for live and `.` for dead, one line per row.
impl fmt::Display for BitPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows as i32 {
            for col in 0..self.cols as i32 {
                f.write_str(if self.get(row, col) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
