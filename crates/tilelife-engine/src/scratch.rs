//! Transient per-region count storage and the carries between regions.
//!
//! [`ScratchCounts`] is one count matrix sized for the largest region in the
//! plan. It is re-zeroed and re-shaped for every region, so the memory a step
//! needs is bounded by the largest region rather than the grid.
//!
//! [`Handoff`] holds the partial counts of deferred edges between the region
//! that produced them and the region that commits them:
//!
//! ```text
//!            row carry: one byte per grid column
//!   band k   [ ........ deferred row ........ ]──┐
//!   band k+1 [ first row ......................]<─┘ copied over commit columns
//!
//!            col carry: one byte per band row
//!   tile j | deferred col |──> | first col | tile j+1   added over all rows
//! ```

use tilelife_core::Region;

/// Count matrix covering one region's extent, addressed by grid coordinates.
pub struct ScratchCounts {
    data: Vec<u8>,
    region: Option<Region>,
}

impl ScratchCounts {
    /// Allocate a matrix able to hold `capacity` cells.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            region: None,
        }
    }

    /// Re-shape for `region` and zero its counts.
    ///
    /// # Panics
    ///
    /// Panics if the region's area exceeds the capacity.
    pub fn begin(&mut self, region: &Region) {
        let area = region.area();
        assert!(
            area <= self.data.len(),
            "region of {area} cells exceeds scratch capacity {}",
            self.data.len()
        );
        self.data[..area].fill(0);
        self.region = Some(*region);
    }

    /// The region currently shaped, if any.
    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    #[inline]
    fn index(&self, row: u32, col: u32) -> usize {
        let region = self
            .region
            .as_ref()
            .unwrap_or_else(|| panic!("scratch accessed before begin()"));
        assert!(
            region.contains(row, col),
            "({row}, {col}) is outside region at ({}, {}) sized {}x{}",
            region.row(),
            region.col(),
            region.height(),
            region.width()
        );
        (row - region.row()) as usize * region.width() as usize + (col - region.col()) as usize
    }

    /// Count at grid cell `(row, col)`.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> u8 {
        self.data[self.index(row, col)]
    }

    /// Overwrite the count at `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, count: u8) {
        let i = self.index(row, col);
        self.data[i] = count;
    }

    /// Add `amount` to the count at `(row, col)`.
    #[inline]
    pub fn add(&mut self, row: u32, col: u32, amount: u8) {
        let i = self.index(row, col);
        self.data[i] += amount;
    }

    /// Add one to the count at `(row, col)`.
    #[inline]
    pub fn increment(&mut self, row: u32, col: u32) {
        self.add(row, col, 1);
    }

    /// Subtract one from the count at `(row, col)`.
    #[inline]
    pub fn decrement(&mut self, row: u32, col: u32) {
        let i = self.index(row, col);
        self.data[i] -= 1;
    }

    /// Cells the matrix can hold.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Bytes of backing storage.
    pub fn memory_bytes(&self) -> usize {
        self.data.len()
    }
}

/// Row and column carries for deferred edges.
pub struct Handoff {
    row_carry: Vec<u8>,
    col_carry: Vec<u8>,
}

impl Handoff {
    /// Carries for a grid `cols` wide whose tallest region is `max_height`.
    pub fn new(cols: u32, max_height: u32) -> Self {
        Self {
            row_carry: vec![0; cols as usize],
            col_carry: vec![0; max_height as usize],
        }
    }

    /// Seed `scratch` with the partial counts deferred to `region`.
    ///
    /// The row carry is copied over the commit columns of the first row; the
    /// column carry is then added down the first column. The corner cell
    /// receives both.
    pub fn load(&self, region: &Region, scratch: &mut ScratchCounts) {
        if region.receives_row_carry() {
            let row = region.row();
            for col in region.commit_cols() {
                scratch.set(row, col, self.row_carry[col as usize]);
            }
        }
        if region.receives_col_carry() {
            let col = region.col();
            for (i, row) in (region.row()..=region.last_row()).enumerate() {
                scratch.add(row, col, self.col_carry[i]);
            }
        }
    }

    /// Save the partial counts of `region`'s deferred edges.
    ///
    /// Must run after counting and before the next region calls
    /// [`ScratchCounts::begin`].
    pub fn export(&mut self, region: &Region, scratch: &ScratchCounts) {
        if region.defers_bottom() {
            let row = region.last_row();
            for col in region.commit_cols() {
                self.row_carry[col as usize] = scratch.get(row, col);
            }
        }
        if region.defers_right() {
            let col = region.last_col();
            for (i, row) in (region.row()..=region.last_row()).enumerate() {
                self.col_carry[i] = scratch.get(row, col);
            }
        }
    }

    /// Bytes held by both carries.
    pub fn memory_bytes(&self) -> usize {
        self.row_carry.len() + self.col_carry.len()
    }
}
