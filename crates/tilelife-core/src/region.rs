//! Rectangular partition descriptor.

use std::ops::Range;

/// A contiguous sub-rectangle of the grid processed as one unit of work.
///
/// A region's *extent* is what its scratch count matrix covers. Neighbouring
/// regions overlap by exactly one row or column. The earlier region in
/// processing order *defers* the shared row (`defer_bottom`) or column
/// (`defer_right`): it leaves the cells there uncommitted and exports their
/// partial counts, and the later region commits them.
///
/// ```text
///   col ..           col+width-1
///   +-----------------+---+
///   |                 | R |   R = deferred right column
///   |  commit         | R |
///   |  footprint      | R |
///   +-----------------+---+
///   | B   B   B   B   | C |   B = deferred bottom row, C = deferred corner
///   +-----------------+---+
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    row: u32,
    col: u32,
    height: u32,
    width: u32,
    defer_bottom: bool,
    defer_right: bool,
}

impl Region {
    /// Create a region with origin `(row, col)` and the given extent.
    ///
    /// # Panics
    ///
    /// Panics if either extent is zero, or if a deferred edge is requested
    /// on an extent of one (the commit footprint would be empty).
    pub fn new(
        row: u32,
        col: u32,
        height: u32,
        width: u32,
        defer_bottom: bool,
        defer_right: bool,
    ) -> Self {
        assert!(height > 0 && width > 0, "region extent must be non-empty");
        assert!(
            !defer_bottom || height >= 2,
            "deferring the bottom row of a one-row region leaves nothing to commit"
        );
        assert!(
            !defer_right || width >= 2,
            "deferring the right column of a one-column region leaves nothing to commit"
        );
        Self {
            row,
            col,
            height,
            width,
            defer_bottom,
            defer_right,
        }
    }

    /// First grid row covered.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// First grid column covered.
    pub fn col(&self) -> u32 {
        self.col
    }

    /// Number of rows in the extent.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of columns in the extent.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Last grid row covered (inclusive).
    pub fn last_row(&self) -> u32 {
        self.row + self.height - 1
    }

    /// Last grid column covered (inclusive).
    pub fn last_col(&self) -> u32 {
        self.col + self.width - 1
    }

    /// Cells in the extent; the scratch bytes this region needs.
    pub fn area(&self) -> usize {
        self.height as usize * self.width as usize
    }

    /// Whether the last row is shared with the region below.
    pub fn defers_bottom(&self) -> bool {
        self.defer_bottom
    }

    /// Whether the last column is shared with the region to the right.
    pub fn defers_right(&self) -> bool {
        self.defer_right
    }

    /// Whether the first row was deferred by a region above.
    pub fn receives_row_carry(&self) -> bool {
        self.row > 0
    }

    /// Whether the first column was deferred by a region to the left.
    pub fn receives_col_carry(&self) -> bool {
        self.col > 0
    }

    /// Grid rows this region commits.
    pub fn commit_rows(&self) -> Range<u32> {
        self.row..self.row + self.height - u32::from(self.defer_bottom)
    }

    /// Grid columns this region commits.
    pub fn commit_cols(&self) -> Range<u32> {
        self.col..self.col + self.width - u32::from(self.defer_right)
    }

    /// Whether `(row, col)` lies inside the extent.
    pub fn contains(&self, row: u32, col: u32) -> bool {
        (self.row..=self.last_row()).contains(&row) && (self.col..=self.last_col()).contains(&col)
    }

    /// Whether this region is the one that commits `(row, col)`.
    pub fn commits(&self, row: u32, col: u32) -> bool {
        self.commit_rows().contains(&row) && self.commit_cols().contains(&col)
    }
}
