//! Grid geometry: how many beads cover an image.

/// Smallest cell size the API accepts, in source pixels.
pub const MIN_CELL_SIZE: u32 = 1;

/// Largest cell size the API accepts, in source pixels.
pub const MAX_CELL_SIZE: u32 = 100;

/// Smallest bead drawn by the bead renderer. Requests below this are raised to it.
pub const MIN_BEAD_SIZE: u32 = 5;

/// Number of bead columns and rows covering an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub cols: u32,
    pub rows: u32,
}

impl GridSize {
    /// Compute the grid for an image of `width` x `height` pixels.
    ///
    /// `cols = ceil(width / cell_size)`, `rows = ceil(height / cell_size)`,
    /// so a partial cell at the right or bottom edge still gets a bead.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use bead_grid::GridSize;
    ///
    /// let grid = GridSize::compute(103, 50, 10);
    /// assert_eq!((grid.cols, grid.rows), (11, 5));
    /// ```
    pub fn compute(width: u32, height: u32, cell_size: u32) -> Self {
        assert!(cell_size > 0, "cell size must be positive");
        Self {
            cols: width.div_ceil(cell_size),
            rows: height.div_ceil(cell_size),
        }
    }

    /// Total number of cells (beads).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    /// Length of a packed RGB buffer holding one sample per cell.
    #[inline]
    pub fn sample_len(&self) -> usize {
        self.cell_count() * 3
    }
}

/// Clamp a requested cell size to the bead renderer's working range,
/// `MIN_BEAD_SIZE..=MAX_CELL_SIZE`.
///
/// # Example
///
/// ```
/// use bead_grid::bead_size;
///
/// assert_eq!(bead_size(1), 5);
/// assert_eq!(bead_size(12), 12);
/// assert_eq!(bead_size(500), 100);
/// ```
pub fn bead_size(requested: u32) -> u32 {
    requested.clamp(MIN_BEAD_SIZE, MAX_CELL_SIZE)
}
