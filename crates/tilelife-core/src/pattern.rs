//! ASCII seed patterns.
//!
//! Accepts the plaintext cell format: one line per row, `.` for dead and
//! `O`, `#` or `*` for live, with `!`-prefixed comment lines ignored.

use crate::error::GridError;
use crate::plane::BitPlane;

/// A finite set of live cells relative to a `(0, 0)` origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<(i32, i32)>,
    height: u32,
    width: u32,
}

impl Pattern {
    /// Parse plaintext rows.
    ///
    /// ```
    /// use tilelife_core::Pattern;
    ///
    /// let glider = Pattern::parse(".O.\n..O\nOOO").unwrap();
    /// assert_eq!(glider.live_count(), 5);
    /// assert_eq!((glider.height(), glider.width()), (3, 3));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let mut cells = Vec::new();
        let mut height = 0u32;
        let mut width = 0u32;
        for (line_no, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }
            let row = height as i32;
            for (column, ch) in line.chars().enumerate() {
                match ch {
                    '.' => {}
                    'O' | '#' | '*' => cells.push((row, column as i32)),
                    found => {
                        return Err(GridError::PatternSyntax {
                            line: line_no,
                            column,
                            found,
                        })
                    }
                }
            }
            width = width.max(line.chars().count() as u32);
            height += 1;
        }
        Ok(Self {
            cells,
            height,
            width,
        })
    }

    /// Build a pattern from explicit live offsets.
    pub fn from_cells(cells: impl IntoIterator<Item = (i32, i32)>) -> Self {
        let cells: Vec<_> = cells.into_iter().collect();
        let height = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0).max(0) as u32;
        let width = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0).max(0) as u32;
        Self {
            cells,
            height,
            width,
        }
    }

    /// Live offsets, in parse order.
    pub fn cells(&self) -> &[(i32, i32)] {
        &self.cells
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.len()
    }

    /// Rows spanned by the bounding box.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Columns spanned by the bounding box.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Set every live cell at `(row + dr, col + dc)` in `plane`.
    ///
    /// Cells landing off the grid are silently dropped.
    pub fn stamp(&self, plane: &mut BitPlane, row: i32, col: i32) {
        for &(dr, dc) in &self.cells {
            plane.set(row.saturating_add(dr), col.saturating_add(dc), true);
        }
    }

    /// Whether `plane` holds exactly this pattern at `(row, col)` and
    /// nothing else.
    pub fn matches_at(&self, plane: &BitPlane, row: i32, col: i32) -> bool {
        plane.population() == self.cells.len()
            && self
                .cells
                .iter()
                .all(|&(dr, dc)| plane.get(row.saturating_add(dr), col.saturating_add(dc)))
    }
}
