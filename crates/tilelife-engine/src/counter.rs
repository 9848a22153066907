//! Per-region neighbour counting.

use tilelife_core::{BitPlane, Region};

use crate::scratch::ScratchCounts;

/// Rows or columns that receive a contribution from a live cell at `at`.
///
/// A source on a deferred edge only contributes one step inward; the region
/// that commits the edge counts everything along and beyond it.
#[inline]
fn targets(at: u32, first: u32, last: u32, deferred: bool) -> (u32, u32) {
    if deferred && at == last {
        (last - 1, last - 1)
    } else {
        (at.saturating_sub(1).max(first), (at + 1).min(last))
    }
}

/// Accumulates live Moore-neighbour counts for one region at a time.
///
/// Counting is source-driven: each live cell scatters `+1` over its 3x3
/// neighbourhood clipped to the region extent, then takes back the
/// increment on its own position. Positions outside the grid are never
/// touched, so border cells see dead neighbours beyond the edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeighborCounter;

impl NeighborCounter {
    /// Add the contributions of every live cell in `region` to `scratch`.
    ///
    /// `scratch` must already be shaped for `region`, with any carried
    /// counts loaded. Returns the number of live source cells visited.
    pub fn count(&self, plane: &BitPlane, region: &Region, scratch: &mut ScratchCounts) -> usize {
        let (r0, r1) = (region.row(), region.last_row());
        let (c0, c1) = (region.col(), region.last_col());
        let mut sources = 0;

        for row in r0..=r1 {
            // Zero bytes are skipped inside the scan.
            let live = plane.live_cols_in_row(row, c0..=c1);
            if live.is_empty() {
                continue;
            }
            let row_deferred = region.defers_bottom() && row == r1;
            let (top, bottom) = targets(row, r0, r1, region.defers_bottom());

            for &col in &live {
                sources += 1;
                let col_deferred = region.defers_right() && col == c1;
                let (left, right) = targets(col, c0, c1, region.defers_right());
                for target_row in top..=bottom {
                    for target_col in left..=right {
                        scratch.increment(target_row, target_col);
                    }
                }
                if !row_deferred && !col_deferred {
                    scratch.decrement(row, col);
                }
            }
        }
        sources
    }
}
