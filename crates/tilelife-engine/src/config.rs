//! Engine configuration, partition strategies, and validation errors.
//!
//! [`EngineConfig`] is the builder-input for constructing a
//! [`StepEngine`](crate::StepEngine). [`validate()`](EngineConfig::validate)
//! checks every structural invariant at startup so the step loop itself only
//! ever meets internal invariant violations, which are fatal assertions.

use std::error::Error;
use std::fmt;

use tilelife_core::{BitPlane, GridError};

use crate::rule::Rule;

// ── PartitionStrategy ──────────────────────────────────────────────

/// How the grid is cut into regions that fit the scratch buffer.
///
/// Every strategy produces the same next generation; they differ only in
/// how much scratch memory a step needs and how many regions it visits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionStrategy {
    /// One region covering the whole grid: a full-size count matrix.
    Whole,
    /// Full-width horizontal bands `rows` tall, overlapping by one row.
    Strip {
        /// Band height including the shared row. At least 2.
        rows: u32,
    },
    /// Tiles `rows` by `cols`, overlapping by one row and one column.
    Block {
        /// Tile height including the shared row. At least 2.
        rows: u32,
        /// Tile width including the shared column. At least 2.
        cols: u32,
    },
    /// Tallest strip whose scratch fits in `scratch_bytes`, falling back to
    /// the largest square block when not even a two-row strip fits.
    Auto {
        /// Bytes available for the count matrix.
        scratch_bytes: usize,
    },
}

impl PartitionStrategy {
    /// Smallest scratch budget `Auto` accepts: one 2x2 tile.
    pub const MIN_SCRATCH_BYTES: usize = 4;

    /// Resolve `Auto` against a grid geometry and check extents.
    ///
    /// The result is never `Auto`.
    pub fn resolve(self, rows: u32, cols: u32) -> Result<Self, ConfigError> {
        match self {
            Self::Whole => Ok(Self::Whole),
            Self::Strip { rows: band } => {
                if band < 2 {
                    return Err(ConfigError::StripTooShort { rows: band });
                }
                Ok(self)
            }
            Self::Block {
                rows: tile_rows,
                cols: tile_cols,
            } => {
                if tile_rows < 2 || tile_cols < 2 {
                    return Err(ConfigError::BlockTooSmall {
                        rows: tile_rows,
                        cols: tile_cols,
                    });
                }
                Ok(self)
            }
            Self::Auto { scratch_bytes } => {
                let fit_rows = scratch_bytes / cols as usize;
                if fit_rows >= 2 || fit_rows >= rows as usize {
                    let band = fit_rows.clamp(2, rows.max(2) as usize) as u32;
                    return Ok(Self::Strip { rows: band });
                }
                let side = scratch_bytes.isqrt().min(u32::MAX as usize) as u32;
                if side < 2 {
                    return Err(ConfigError::ScratchBudgetTooSmall {
                        bytes: scratch_bytes,
                        minimum: Self::MIN_SCRATCH_BYTES,
                    });
                }
                Ok(Self::Block {
                    rows: side,
                    cols: side,
                })
            }
        }
    }
}

impl fmt::Display for PartitionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => write!(f, "whole"),
            Self::Strip { rows } => write!(f, "strip({rows})"),
            Self::Block { rows, cols } => write!(f, "block({rows}x{cols})"),
            Self::Auto { scratch_bytes } => write!(f, "auto({scratch_bytes}B)"),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`EngineConfig`] or adopting a plane.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Grid(GridError),
    /// Strip bands must be at least two rows tall to make progress.
    StripTooShort {
        /// The configured band height.
        rows: u32,
    },
    /// Block tiles must be at least 2x2 to make progress.
    BlockTooSmall {
        /// The configured tile height.
        rows: u32,
        /// The configured tile width.
        cols: u32,
    },
    /// An `Auto` budget cannot hold even a 2x2 tile.
    ScratchBudgetTooSmall {
        /// The configured budget.
        bytes: usize,
        /// The smallest usable budget.
        minimum: usize,
    },
    /// A plane handed to the engine has different dimensions from the plan.
    GeometryMismatch {
        /// `(rows, cols)` the engine was built for.
        expected: (u32, u32),
        /// `(rows, cols)` of the supplied plane.
        found: (u32, u32),
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::StripTooShort { rows } => {
                write!(f, "strip height {rows} is below minimum of 2")
            }
            Self::BlockTooSmall { rows, cols } => {
                write!(f, "block {rows}x{cols} is below minimum of 2x2")
            }
            Self::ScratchBudgetTooSmall { bytes, minimum } => {
                write!(f, "scratch budget of {bytes} bytes is below minimum of {minimum}")
            }
            Self::GeometryMismatch { expected, found } => {
                write!(
                    f,
                    "plane is {}x{} but engine expects {}x{}",
                    found.0, found.1, expected.0, expected.1
                )
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing a step engine.
///
/// The default matches the device: 96x64 monochrome screen
/// stepped in 8-row strips.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Grid height in cells.
    pub rows: u32,
    /// Grid width in cells.
    pub cols: u32,
    /// How the grid is partitioned for counting.
    pub strategy: PartitionStrategy,
    /// Birth/survival rule applied at commit.
    pub rule: Rule,
}

impl EngineConfig {
    /// Rows on the reference device screen.
    pub const DEVICE_ROWS: u32 = 64;
    /// Columns on the reference device screen.
    pub const DEVICE_COLS: u32 = 96;
    /// Band height used on the reference device.
    pub const DEVICE_STRIP_ROWS: u32 = 8;

    /// Configuration for a `rows x cols` grid with default strip partitioning.
    pub fn new(rows: u32, cols: u32) -> Self {
        Self {
            rows,
            cols,
            strategy: PartitionStrategy::Strip {
                rows: Self::DEVICE_STRIP_ROWS,
            },
            rule: Rule::conway(),
        }
    }

    /// Replace the partition strategy.
    pub fn with_strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Replace the rule.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rule = rule;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.resolved_strategy().map(|_| ())
    }

    /// Validate and return the concrete (non-`Auto`) strategy.
    pub fn resolved_strategy(&self) -> Result<PartitionStrategy, ConfigError> {
        // Dimension checks live with the plane so they cannot drift.
        if self.rows == 0 || self.cols == 0 {
            return Err(GridError::EmptyGrid.into());
        }
        for (name, value) in [("rows", self.rows), ("cols", self.cols)] {
            if value > BitPlane::MAX_DIM {
                return Err(GridError::DimensionTooLarge {
                    name,
                    value,
                    max: BitPlane::MAX_DIM,
                }
                .into());
            }
        }
        self.strategy.resolve(self.rows, self.cols)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(Self::DEVICE_ROWS, Self::DEVICE_COLS)
    }
}
