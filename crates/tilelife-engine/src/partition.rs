//! Deterministic decomposition of the grid into overlapping regions.
//!
//! Regions are laid out as a grid of *bands* (row spans) by *tiles* (column
//! spans) and visited band by band, left to right. Consecutive spans share
//! exactly one row or column:
//!
//! ```text
//! span 0: [0 ........ e-1]
//! span 1:            [e-1 ........ 2e-2]
//! span 2:                         [2e-2 ... len-1]
//! ```
//!
//! The earlier span defers the shared line and the later span commits it,
//! so the commit footprints of all regions tile the grid exactly once.

use tilelife_core::Region;

use crate::config::{ConfigError, EngineConfig, PartitionStrategy};

/// One axis span: `(start, len, defers_last)`.
type Span = (u32, u32, bool);

/// Cut `0..len` into spans of at most `extent` overlapping by one.
///
/// `extent` must be at least 2 unless it covers the whole axis.
fn spans(len: u32, extent: u32) -> Vec<Span> {
    let mut out = Vec::new();
    let mut start = 0u32;
    loop {
        let end = start.saturating_add(extent - 1).min(len - 1);
        let defers = end < len - 1;
        out.push((start, end - start + 1, defers));
        if !defers {
            return out;
        }
        start = end;
    }
}

/// The fixed, ordered region sequence for one grid geometry.
///
/// Built once at engine construction and replayed every step. Iterating a
/// plan always yields the same regions in the same order.
#[derive(Clone, Debug)]
pub struct PartitionPlan {
    rows: u32,
    cols: u32,
    strategy: PartitionStrategy,
    regions: Vec<Region>,
    max_area: usize,
    max_height: u32,
}

impl PartitionPlan {
    /// Plan a `rows x cols` grid with the given strategy.
    ///
    /// `Auto` strategies are resolved first; the stored strategy is the
    /// concrete one.
    pub fn new(rows: u32, cols: u32, strategy: PartitionStrategy) -> Result<Self, ConfigError> {
        Self::for_config(&EngineConfig::new(rows, cols).with_strategy(strategy))
    }

    /// Plan the grid described by `config`.
    pub fn for_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        let strategy = config.resolved_strategy()?;
        let (rows, cols) = (config.rows, config.cols);
        let (band_rows, tile_cols) = match strategy {
            PartitionStrategy::Whole => (rows, cols),
            PartitionStrategy::Strip { rows: band } => (band, cols),
            PartitionStrategy::Block {
                rows: tile_rows,
                cols: tile_cols,
            } => (tile_rows, tile_cols),
            PartitionStrategy::Auto { .. } => unreachable!("resolve() never returns Auto"),
        };

        let row_spans = spans(rows, band_rows);
        let col_spans = spans(cols, tile_cols);
        let mut regions = Vec::with_capacity(row_spans.len() * col_spans.len());
        for &(row, height, defer_bottom) in &row_spans {
            for &(col, width, defer_right) in &col_spans {
                regions.push(Region::new(row, col, height, width, defer_bottom, defer_right));
            }
        }
        let max_area = regions.iter().map(Region::area).max().unwrap_or(0);
        let max_height = regions.iter().map(Region::height).max().unwrap_or(0);

        Ok(Self {
            rows,
            cols,
            strategy,
            regions,
            max_area,
            max_height,
        })
    }

    /// Grid height the plan covers.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Grid width the plan covers.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// The resolved strategy.
    pub fn strategy(&self) -> PartitionStrategy {
        self.strategy
    }

    /// Regions in processing order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterate regions in processing order. Restartable.
    pub fn iter(&self) -> std::slice::Iter<'_, Region> {
        self.regions.iter()
    }

    /// Number of regions per step.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Always `false`: a valid grid has at least one region.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Cells in the largest region: the scratch matrix size.
    pub fn max_region_area(&self) -> usize {
        self.max_area
    }

    /// Rows in the tallest region: the column carry size.
    pub fn max_region_height(&self) -> u32 {
        self.max_height
    }

    /// Transient bytes a step needs: scratch matrix plus both carries.
    pub fn transient_bytes(&self) -> usize {
        self.max_area + self.cols as usize + self.max_height as usize
    }
}

impl<'a> IntoIterator for &'a PartitionPlan {
    type Item = &'a Region;
    type IntoIter = std::slice::Iter<'a, Region>;

    fn into_iter(self) -> Self::IntoIter {
        self.regions.iter()
    }
}
